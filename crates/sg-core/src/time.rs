//! Time-of-day helpers.
//!
//! Schedule times are `f64` seconds since midnight of the simulated day.
//! Values past 24 h are legal (an evening that runs over midnight).

/// Seconds per hour.
pub const HOUR: f64 = 3_600.0;

/// `h` hours expressed in seconds.
#[inline]
pub fn hours(h: f64) -> f64 {
    h * HOUR
}

/// Format seconds since midnight as `HH:MM:SS`, rounding to the nearest
/// second.  Hours are not wrapped at 24.
pub fn format_hms(secs: f64) -> String {
    let rounded = secs.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let total = rounded.unsigned_abs();
    let h = total / 3_600;
    let m = (total % 3_600) / 60;
    let s = total % 60;
    format!("{sign}{h:02}:{m:02}:{s:02}")
}
