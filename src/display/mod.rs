//! Presentation helpers: value formatting and terminal color policy.

pub mod theme;

pub use theme::Theme;

/// Format a result for display.
///
/// With a configured precision the value is printed with that many
/// fixed decimal places; otherwise natural formatting applies, so
/// whole-valued results print without a trailing `.0` (8, not 8.0).
pub fn format_value(value: f64, precision: Option<u8>) -> String {
    match precision {
        Some(places) => format!("{value:.prec$}", prec = places as usize),
        None => format!("{value}"),
    }
}
