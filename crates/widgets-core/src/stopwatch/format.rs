/// Placeholder shown when the elapsed time cannot be measured.
pub const ELAPSED_PLACEHOLDER: &str = "-:--:--";

/// Formats seconds as `H:MM:SS`, truncating fractions.
///
/// Hours are not wrapped at 24. Negative and non-finite input renders as zero.
pub fn format_elapsed(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
