/// An upward filled triangle, prefixed to a non-negative delta.
pub const UP_SYMBOL: &str = "▲";
/// A downward outline-only triangle, prefixed to a negative delta.
pub const DOWN_SYMBOL: &str = "▽";

/// En dash used as the minus sign in every formatted number.
const MINUS_SIGN: char = '–';

/// Formats for numbers displayed to the user. The variant determines the
/// decimal places and grouping applied by [`NumberFormat::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Small numbers, less than 10, formatted with precisely 4 decimal places.
    Small,
    /// General purpose formatting with precisely 2 decimal places.
    Normal,
    /// Integer only.
    Large,
    /// A delta change with an up/down triangle instead of a sign.
    Delta,
}

impl NumberFormat {
    pub fn format(&self, number: f64) -> String {
        match self {
            Self::Small => with_sign(number, format_abs(number, 4, false)),
            Self::Normal => with_sign(number, format_abs(number, 2, true)),
            Self::Large => with_sign(number, format_abs(number, 0, true)),
            Self::Delta => {
                let symbol = if number < 0.0 { DOWN_SYMBOL } else { UP_SYMBOL };

                symbol.to_string() + &format_abs(number, 1, true)
            }
        }
    }

    pub fn format_with_suffix(&self, number: f64, suffix: &str) -> String {
        self.format(number) + suffix
    }
}

/// Format a number of any size, choosing the most appropriate format:
/// [`NumberFormat::Small`] below 10, otherwise [`NumberFormat::Normal`].
pub fn format_f64(number: f64) -> String {
    if number < 10.0 {
        NumberFormat::Small.format(number)
    } else {
        NumberFormat::Normal.format(number)
    }
}

/// Format an integer, abbreviating with a suffix from 1,000 upwards.
pub fn format_u64(number: u64) -> String {
    // Simple case does not need grouping or a suffix
    if number < 1_000 {
        return number.to_string();
    }

    let (divisor, suffix) = int_suffix(number);

    NumberFormat::Large.format_with_suffix((number / divisor) as f64, suffix)
}

/// The largest applicable divisor and its suffix for an abbreviated integer.
fn int_suffix(number: u64) -> (u64, &'static str) {
    if number >= 1_000_000_000_000 {
        (1_000_000_000_000, "T")
    } else if number >= 1_000_000 {
        (1_000_000, "M")
    } else {
        (1_000, "k")
    }
}

/// Format the absolute value of `number` to `decimal_places`, optionally
/// grouping the integer digits in threes. The sign is applied separately so
/// the delta format can substitute its triangle symbols.
fn format_abs(number: f64, decimal_places: usize, group: bool) -> String {
    let formatted = format!("{:.*}", decimal_places, number.abs());

    if !group {
        return formatted;
    }

    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, digit) in integer.chars().enumerate() {
        let remaining = integer.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => grouped + "." + fraction,
        None => grouped,
    }
}

fn with_sign(number: f64, formatted: String) -> String {
    if number < 0.0 {
        format!("{}{}", MINUS_SIGN, formatted)
    } else {
        formatted
    }
}
