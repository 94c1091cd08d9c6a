use crate::errors::{Result, ValidationError};

/// Three-state field update: absent, explicit null, or a value.
pub type Patch<T> = Option<Option<T>>;

/// An update payload that can be folded into the record it targets.
pub trait PartialUpdate {
    type Record;

    /// Apply the present fields of `self` to `current` and return the
    /// resolved record. Fails without side effects when a field is invalid.
    fn resolve(self, current: Self::Record) -> Result<Self::Record>;
}

/// Resolve a field that cannot be cleared.
pub fn resolve_required<T>(
    field: &str,
    current: T,
    update: Patch<T>,
) -> std::result::Result<T, ValidationError> {
    match update {
        None => Ok(current),
        Some(None) => Err(ValidationError::NullNotAllowed(field.to_string())),
        Some(Some(value)) => Ok(value),
    }
}

/// Resolve a field that may be cleared with an explicit null.
pub fn resolve_nullable<T>(current: Option<T>, update: Patch<T>) -> Option<T> {
    match update {
        None => current,
        Some(value) => value,
    }
}

/// Resolve a non-nullable text field. Incoming values are trimmed and may be
/// empty.
pub fn resolve_text(
    field: &str,
    current: String,
    update: Patch<String>,
) -> std::result::Result<String, ValidationError> {
    resolve_required(field, current, update.map(|v| v.map(trim_owned)))
}

/// Resolve a non-nullable text field that must also stay non-blank.
pub fn resolve_required_text(
    field: &str,
    current: String,
    update: Patch<String>,
) -> std::result::Result<String, ValidationError> {
    let value = resolve_text(field, current, update)?;
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }
    Ok(value)
}

fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}
