//! Number-to-text conversion shared by the CSS and JSON-facing outputs.

use std::fmt;

/// Display adapter that prints an `f64` like a browser's default `Number` to string conversion.
///
/// Integral values print without a fractional part, other values print their shortest
/// round-trip decimal, and magnitudes outside `[1e-6, 1e21)` switch to exponent notation.
#[derive(Clone, Copy, Debug)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v == 0.0 {
            // Covers -0.0 as well.
            return f.write_str("0");
        }

        let abs = v.abs();
        if (1e-6..1e21).contains(&abs) {
            return write!(f, "{v}");
        }

        let exp = format!("{v:e}");
        match exp.split_once('e') {
            Some((mantissa, e)) if !e.starts_with('-') => write!(f, "{mantissa}e+{e}"),
            _ => f.write_str(&exp),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/number.rs"]
mod tests;
