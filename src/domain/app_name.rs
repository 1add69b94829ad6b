use crate::domain::AppError;

/// User-supplied application name with its derived repository name.
///
/// The raw form is kept for human-facing text (repository description); the
/// canonical form (lower-cased, spaces mapped to hyphens) names the remote
/// repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationName {
    raw: String,
    canonical: String,
}

impl ApplicationName {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let canonical = trimmed.to_lowercase().replace(' ', "-");
        if canonical.is_empty() {
            return Err(AppError::EmptyApplicationName(raw.to_string()));
        }
        Ok(Self { raw: trimmed.to_string(), canonical })
    }

    /// The name exactly as the user supplied it (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized repository name.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}
