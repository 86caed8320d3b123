//! Terminal color policy.

pub struct Theme;

impl Theme {
    /// True when color output must be suppressed: `NO_COLOR` is set or
    /// stdout is not a terminal.
    pub fn should_disable_colors() -> bool {
        std::env::var_os("NO_COLOR").is_some() || !is_terminal::is_terminal(std::io::stdout())
    }
}
