//! Field constraint checks for user input.
//!
//! Text constraints (`min_length`, `max_length`) only apply to text values and
//! numeric constraints (`min`, `max`) only apply to numbers. Every constraint
//! that is set must pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw field value, either text or a number coerced from text
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Coerces input text into a number
    ///
    /// Blank text becomes `0`, unparsable text becomes `NaN`, which fails
    /// every numeric bound.
    pub fn number_from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        Self::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Constraints for a single field; unset options are skipped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Constraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Checks a value against all of its constraints
pub fn validate(value: &FieldValue, constraints: &Constraints) -> bool {
    if constraints.required && value.to_string().trim().is_empty() {
        return false;
    }

    match value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            if constraints.min_length.is_some_and(|min| length < min) {
                return false;
            }
            if constraints.max_length.is_some_and(|max| length > max) {
                return false;
            }
        }
        FieldValue::Number(number) => {
            // NaN compares false against everything, so both guards reject it
            if constraints.min.is_some_and(|min| !(*number >= min)) {
                return false;
            }
            if constraints.max.is_some_and(|max| !(*number <= max)) {
                return false;
            }
        }
    }

    true
}
