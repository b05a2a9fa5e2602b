// src/types/score.rs
//! Shortlist probability as received from the service, and its display tier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shortlist probability resolved once at the response boundary.
///
/// The service sends either a JSON number or a string such as `"85"` or
/// `"85%"`. Strings are parsed leniently from their leading numeric prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortlistScore {
    /// `raw` keeps the original text when the score arrived as a string.
    Numeric { value: f64, raw: Option<String> },
    Unparseable(String),
}

/// Severity used to pick the styling of a score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Good,
    Warning,
    Poor,
}

impl ShortlistScore {
    pub fn from_number(value: f64) -> Self {
        Self::Numeric { value, raw: None }
    }

    pub fn from_text(text: &str) -> Self {
        match leading_float(text) {
            Some(value) => Self::Numeric {
                value,
                raw: Some(text.to_string()),
            },
            None => Self::Unparseable(text.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeric { value, .. } => Some(*value),
            Self::Unparseable(_) => None,
        }
    }

    pub fn tier(&self) -> ScoreTier {
        match self.value() {
            Some(value) => ScoreTier::classify(value),
            None => ScoreTier::Poor,
        }
    }
}

impl fmt::Display for ShortlistScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric { raw: Some(raw), .. } => f.write_str(raw),
            Self::Numeric { value, raw: None } => write!(f, "{}", value),
            Self::Unparseable(raw) => f.write_str(raw),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for ShortlistScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawScore::deserialize(deserializer)? {
            RawScore::Number(value) => Self::from_number(value),
            RawScore::Text(text) => Self::from_text(&text),
        })
    }
}

impl Serialize for ShortlistScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Numeric { value, raw: None } => serializer.serialize_f64(*value),
            Self::Numeric { raw: Some(raw), .. } | Self::Unparseable(raw) => {
                serializer.serialize_str(raw)
            }
        }
    }
}

impl ScoreTier {
    pub const GOOD_THRESHOLD: f64 = 70.0;
    pub const WARNING_THRESHOLD: f64 = 50.0;

    /// NaN compares false against both thresholds and lands in `Poor`.
    pub fn classify(score: f64) -> Self {
        if score >= Self::GOOD_THRESHOLD {
            Self::Good
        } else if score >= Self::WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Poor => "poor",
        }
    }

    /// ANSI SGR color code for terminal output.
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Self::Good => "32",
            Self::Warning => "33",
            Self::Poor => "31",
        }
    }

    /// CSS classes for the score text.
    pub fn text_class(&self) -> &'static str {
        match self {
            Self::Good => "text-emerald-600",
            Self::Warning => "text-amber-600",
            Self::Poor => "text-red-500",
        }
    }

    /// CSS classes for the score badge background and border.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Good => "bg-emerald-50 border-emerald-200",
            Self::Warning => "bg-amber-50 border-amber-200",
            Self::Poor => "bg-red-50 border-red-200",
        }
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_at = |mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_at(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_at(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_at(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
