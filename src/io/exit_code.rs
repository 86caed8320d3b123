//! Process exit codes for CLI commands.

/// Exit codes reported to the shell.
///
/// 2 is left to clap for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// An operation failed (division by zero, invalid domain, ...)
    OperationError = 1,
    /// Configuration could not be created or loaded
    ConfigError = 3,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as u8 as i32
    }

    /// Terminate the process with this code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}
