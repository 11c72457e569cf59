//! Locale-independent double/decimal-text conversion.
//!
//! Shared by the Number and String built-ins for numeric-to-string
//! coercions and literal parsing. The conversion workspace is a single
//! process-wide scratch buffer behind a mutex, held only for the duration
//! of each call; both operations are short, bounded, CPU-only work.

use parking_lot::Mutex;
use std::fmt::Write;

/// How many digits a conversion should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitMode {
    /// The shortest decimal text that parses back to the same value
    Shortest,
    /// Fixed-point with this many fraction digits (clamped to 100)
    Fixed(u8),
}

struct ConversionScratch {
    digits: String,
}

impl ConversionScratch {
    fn render(&mut self, value: f64, mode: DigitMode) {
        self.digits.clear();
        match mode {
            DigitMode::Shortest => {
                let mut buffer = ryu::Buffer::new();
                let text = buffer.format_finite(value);
                // Integral values print bare: "42", not "42.0".
                let text = text.strip_suffix(".0").unwrap_or(text);
                self.digits.push_str(text);
            }
            DigitMode::Fixed(fraction_digits) => {
                let fraction_digits = fraction_digits.min(100) as usize;
                let _ = write!(self.digits, "{:.*}", fraction_digits, value);
            }
        }
    }
}

static SCRATCH: Mutex<ConversionScratch> = Mutex::new(ConversionScratch {
    digits: String::new(),
});

/// Double/decimal-text conversion service.
///
/// # Examples
///
/// ```
/// use builtins::{DigitMode, NumericConversion};
///
/// assert_eq!(NumericConversion::to_string(0.1, DigitMode::Shortest), "0.1");
/// assert_eq!(NumericConversion::parse("12.5px"), (12.5, 4));
/// ```
pub struct NumericConversion;

impl NumericConversion {
    /// Convert `value` to decimal text.
    ///
    /// NaN and the infinities convert to `"NaN"`, `"Infinity"` and
    /// `"-Infinity"`; negative zero prints as `"0"`. In shortest mode the
    /// result is the shortest text that parses back to exactly `value`.
    pub fn to_string(value: f64, mode: DigitMode) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            };
        }
        // Negative zero prints without its sign.
        let value = if value == 0.0 { 0.0 } else { value };

        let mut scratch = SCRATCH.lock();
        scratch.render(value, mode);
        scratch.digits.clone()
    }

    /// Parse the longest numeric prefix of `text`.
    ///
    /// Accepts an optional sign, decimal digits with an optional fraction,
    /// an optional exponent, or the `Infinity` literal. Returns the value
    /// and the number of bytes consumed; with no valid prefix the result
    /// is `(NaN, 0)`. Leading whitespace is not skipped - that belongs to
    /// the caller's coercion layer.
    pub fn parse(text: &str) -> (f64, usize) {
        let consumed = numeric_prefix_len(text);
        if consumed == 0 {
            return (f64::NAN, 0);
        }

        let mut scratch = SCRATCH.lock();
        scratch.digits.clear();
        scratch.digits.push_str(&text[..consumed]);
        match scratch.digits.parse::<f64>() {
            Ok(value) => (value, consumed),
            Err(_) => (f64::NAN, 0),
        }
    }
}

/// Length in bytes of the longest valid numeric prefix of `text`, or 0.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with("Infinity") {
        return pos + "Infinity".len();
    }

    let integer_digits = count_digits(&bytes[pos..]);
    pos += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[pos + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            pos += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    // The exponent is consumed only when complete; a bare "1e" stops
    // before the 'e'.
    if matches!(bytes.get(pos), Some(&b'e') | Some(&b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(&b'+') | Some(&b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
