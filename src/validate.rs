//! Range validation for instrument and counter fields.
//!
//! Every numeric field carries an independent inclusive `[min, max]` range.
//! The validator runs a full pass and reports every violated field at once,
//! so a caller can fix a whole submission in a single round trip instead of
//! iterating field by field. Optional fields skip validation when absent.

use std::fmt;

/// A single out-of-range field with its caller-facing field id and a
/// domain-specific message, e.g. "N1 must be between 0 % and 110 %".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// The complete set of violations from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn field(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .violations
            .iter()
            .map(|v| v.message.as_str())
            .collect();

        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Collects range violations across the fields of one submission.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a required field against an inclusive range.
    pub fn range<T>(
        &mut self,
        field: &'static str,
        label: &str,
        value: T,
        min: T,
        max: T,
        unit: &str,
    ) where
        T: PartialOrd + fmt::Display,
    {
        if value < min || value > max {
            self.violations.push(FieldViolation {
                field,
                message: range_message(label, &min, &max, unit),
            });
        }
    }

    /// Checks an optional field against an inclusive range; absent values pass.
    pub fn optional_range<T>(
        &mut self,
        field: &'static str,
        label: &str,
        value: Option<T>,
        min: T,
        max: T,
        unit: &str,
    ) where
        T: PartialOrd + fmt::Display,
    {
        if let Some(value) = value {
            self.range(field, label, value, min, max, unit);
        }
    }

    /// Records a violation that is not a plain range check.
    pub fn violation(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn finish(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                violations: self.violations,
            })
        }
    }
}

fn range_message(label: &str, min: &dyn fmt::Display, max: &dyn fmt::Display, unit: &str) -> String {
    if unit.is_empty() {
        format!("{label} must be between {min} and {max}")
    } else {
        format!("{label} must be between {min} {unit} and {max} {unit}")
    }
}
