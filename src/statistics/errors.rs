use thiserror::Error;

/// Errors raised by the statistical utilities when their input cannot be processed.
///
/// All utilities validate their input up front and fail without producing partial output.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StatsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub(crate) type Result<T> = core::result::Result<T, StatsError>;

/// Fails with [`StatsError::InvalidInput`] when `data` is empty or contains non-finite values.
pub(crate) fn ensure_finite_non_empty(data: &[f64], what: &str) -> Result<()> {
    if data.is_empty() {
        return Err(StatsError::InvalidInput(format!("{} must not be empty", what)));
    }

    if let Some(value) = data.iter().find(|value| !value.is_finite()) {
        return Err(StatsError::InvalidInput(format!(
            "{} contains a non-finite value ({})",
            what, value
        )));
    }

    Ok(())
}
