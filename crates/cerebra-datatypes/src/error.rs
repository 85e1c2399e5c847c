use std::error::Error;
use std::fmt::{Display, Formatter};

/// Common error type for CEREBRA datatype operations.
///
/// Covers the failures that can surface while composing, configuring and
/// validating data entities before they are handed to the persistence layer.
///
/// # Examples
/// ```
/// use cerebra_datatypes::{DataTypeError, ValidationError};
///
/// fn check_bound(actual: u64, maximum: u64) -> Result<(), DataTypeError> {
///     if actual > maximum {
///         return Err(ValidationError::BoundExceeded {
///             field: "surface vertices",
///             actual,
///             maximum,
///         }
///         .into());
///     }
///     Ok(())
/// }
///
/// assert!(check_bound(5, 3).is_err());
/// assert!(check_bound(5, 10).is_ok());
/// ```
#[derive(Debug)]
pub enum DataTypeError {
    /// An entity failed a pre-persistence invariant check
    Validation(ValidationError),
    /// A stored discriminator tag has no registered concrete datatype
    UnknownKind(String),
    /// The capability composition rules were violated (fatal at startup)
    Composition(String),
    /// Invalid parameters provided to a function
    BadParameters(String),
    /// A storage-backed operation failed; passed through unmodified
    Storage(String),
}

impl Display for DataTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataTypeError::Validation(err) => write!(f, "Validation failed: {}", err),
            DataTypeError::UnknownKind(tag) => {
                write!(f, "No datatype is registered for the kind '{}'", tag)
            }
            DataTypeError::Composition(msg) => write!(f, "Invalid datatype composition: {}", msg),
            DataTypeError::BadParameters(msg) => write!(f, "Bad Parameters: {}", msg),
            DataTypeError::Storage(msg) => write!(f, "Storage operation failed: {}", msg),
        }
    }
}

impl Error for DataTypeError {}

impl From<ValidationError> for DataTypeError {
    fn from(err: ValidationError) -> Self {
        DataTypeError::Validation(err)
    }
}

/// Failure raised by an entity's `validate()` before persistence.
///
/// Every variant renders to a message a non-programmer can act on; the
/// caller may fix the entity's data and call `validate()` again.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A derived scalar field exceeds its configured maximum
    BoundExceeded {
        field: &'static str,
        actual: u64,
        maximum: u64,
    },
    /// A structural predicate over the entity's payload does not hold
    StructurallyUnsound(String),
    /// A kind-specific parameter or attribute constraint does not hold
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BoundExceeded {
                field,
                actual,
                maximum,
            } => write!(
                f,
                "This entity has too many {} ({}, max allowed: {}). Please upload a smaller dataset or change the maximum in the application settings.",
                field, actual, maximum
            ),
            ValidationError::StructurallyUnsound(msg) => {
                write!(f, "{} Please correct the problem and upload again.", msg)
            }
            ValidationError::InvalidParameter { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ValidationError {}
