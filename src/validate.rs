use std::fmt;

use serde_json::Value;

/// A structural problem in one raw inventory record.
///
/// Collected, never thrown: validation is advisory, and callers are free to
/// load and process a batch that failed it.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The id is missing, non-numeric, fractional, zero, or negative.
    InvalidId { index: usize, found: String },
    /// The record has no `definition` object.
    MissingDefinition { index: usize },
    /// The quantity is missing or not a JSON number (a numeric-looking
    /// string still fails).
    NonNumericQuantity { index: usize, found: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidId { index, found } => {
                write!(f, "record {index}: invalid ID (found {found})")
            }
            ValidationError::MissingDefinition { index } => {
                write!(f, "record {index}: missing item definition")
            }
            ValidationError::NonNumericQuantity { index, found } => {
                write!(f, "record {index}: quantity is not numeric (found {found})")
            }
        }
    }
}

/// Outcome of validating a raw batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// The errors rendered as display strings, for callers that only
    /// surface messages.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ValidationError::to_string).collect()
    }
}

/// Check the structural soundness of raw inventory records before loading.
///
/// Per record: the id must be a positive integer, `definition` must be a
/// present object, and `quantity` must be a JSON number. Input is never
/// mutated and nothing panics regardless of shape.
pub fn validate(records: &[Value]) -> ValidationReport {
    let mut errors = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match record.get("id") {
            Some(id) if id.as_i64().is_some_and(|n| n > 0) => {}
            Some(id) => errors.push(ValidationError::InvalidId {
                index,
                found: id.to_string(),
            }),
            None => errors.push(ValidationError::InvalidId {
                index,
                found: "nothing".to_string(),
            }),
        }

        if !record.get("definition").is_some_and(Value::is_object) {
            errors.push(ValidationError::MissingDefinition { index });
        }

        match record.get("quantity") {
            Some(quantity) if quantity.is_number() => {}
            Some(quantity) => errors.push(ValidationError::NonNumericQuantity {
                index,
                found: quantity.to_string(),
            }),
            None => errors.push(ValidationError::NonNumericQuantity {
                index,
                found: "nothing".to_string(),
            }),
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
