use crate::errors::CalcError;

/// Expression calculation result: either value or error
pub type CalcResult = Result<f64, CalcError>;
pub(crate) type CalcErrorResult = Result<(), CalcError>;

/// Default step the results are rounded to
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Evaluation settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Results are rounded to the nearest multiple of this value.
    /// Zero, negative, or non-finite values turn the rounding off
    pub precision: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }
}

/// Rounds a value to the nearest multiple of `precision`. Halves are rounded up.
/// Infinities and NaN are returned as is
pub fn round_to_precision(value: f64, precision: f64) -> f64 {
    if !value.is_finite() || !precision.is_finite() || precision <= 0.0 {
        return value;
    }
    // dividing by the inverted step keeps results like 0.3 exact
    let scale = 1.0 / precision;
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / scale
}

/// Formats a result for the calculator screen
pub fn format_value(g: f64) -> String {
    if g.is_nan() {
        return "NaN".to_string();
    }
    if g.is_infinite() {
        return if g > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let mut buf = dtoa::Buffer::new();
    let s = buf.format_finite(g);
    match s.strip_suffix(".0") {
        Some(int) => int.to_string(),
        None => s.to_string(),
    }
}
