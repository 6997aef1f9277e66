use std::fmt;

/// State of the operator's base price field.
///
/// `Empty` is the transient state while the field is cleared mid-edit. Any
/// other text is always coerced into a defined non-negative number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput {
    Empty,
    Valid(f64),
}

impl PriceInput {
    /// Parse raw field text.
    ///
    /// Takes the longest leading decimal literal, so "12.5kg" is 12.5. Text
    /// without a numeric prefix, negative numbers and overflow all become 0.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return PriceInput::Empty;
        }

        match leading_number(trimmed) {
            Some(value) if value.is_finite() && value >= 0.0 => PriceInput::Valid(value),
            _ => PriceInput::Valid(0.0),
        }
    }

    /// The value, if it is usable as a base price (strictly positive)
    pub fn positive(self) -> Option<f64> {
        match self {
            PriceInput::Valid(value) if value > 0.0 => Some(value),
            _ => None,
        }
    }
}

impl Default for PriceInput {
    fn default() -> Self {
        PriceInput::Valid(crate::config::PRICING.default_base_price)
    }
}

impl fmt::Display for PriceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceInput::Empty => write!(f, "<empty>"),
            PriceInput::Valid(value) => write!(f, "{}", value),
        }
    }
}

/// Longest prefix of `text` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut idx: usize| {
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        idx
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
