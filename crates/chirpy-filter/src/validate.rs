use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chirp is too long")]
    TooLong { len: usize, max: usize },
}

/// Check a raw chirp body against the maximum length, counted in characters.
/// Returns the body unchanged when it fits.
pub fn validate(body: &str, max_len: usize) -> Result<&str, ValidationError> {
    let len = body.chars().count();
    if len > max_len {
        return Err(ValidationError::TooLong { len, max: max_len });
    }
    Ok(body)
}
