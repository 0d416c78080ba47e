//! Fixed-scale decimal rendering of evaluation results.
//!
//! The evaluator produces a raw `f64`; turning that into the fixed-scale
//! decimal string consumers expect is a separate, mechanical step kept out
//! of the core. The scale and rounding mode here must stay stable: existing
//! consumers compare against four fractional digits rounded half-to-even.

/// Number of fractional digits in a rendered result.
pub const RESULT_SCALE: usize = 4;

/// Renders an evaluation result as a fixed-scale decimal string.
///
/// The value is rounded to [`RESULT_SCALE`] fractional digits using
/// round-half-to-even on its exact binary value, which is what Rust's float
/// formatting implements. A negative zero is normalized so that `-0` renders
/// as `0.0000`.
///
/// # Parameters
/// - `value`: The raw double-precision result.
///
/// # Returns
/// - `Some(String)`: The rendered decimal string.
/// - `None`: If the value is not finite (overflowed arithmetic); such a
///   value has no decimal representation at any scale.
///
/// # Example
/// ```
/// use rdcalc::output::format_scaled;
///
/// assert_eq!(format_scaled(1.0 / 3.0), Some("0.3333".to_string()));
/// assert_eq!(format_scaled(0.25), Some("0.2500".to_string()));
/// assert_eq!(format_scaled(-0.0), Some("0.0000".to_string()));
/// assert_eq!(format_scaled(f64::INFINITY), None);
/// ```
#[must_use]
pub fn format_scaled(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let value = if value == 0.0 { 0.0 } else { value };
    Some(format!("{:.*}", RESULT_SCALE, value))
}
