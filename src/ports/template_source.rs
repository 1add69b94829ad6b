//! Language template source port definition.

use std::path::PathBuf;

use crate::domain::AppError;

/// A validated language template: a named directory tree of scaffold files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTemplate {
    /// Lower-cased language key.
    pub language: String,
    /// Resolved template root for this language.
    pub root: PathBuf,
}

/// Encoding used to load a template file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Utf8,
    /// Fallback for files that are not valid UTF-8. Latin-1 decoding accepts
    /// every byte value, so this is lossy for genuinely binary content.
    Latin1,
}

/// One file within a language template, loaded and ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template root, `/`-separated.
    pub relative_path: String,
    /// File name without directories, used in the commit message.
    pub file_name: String,
    /// Decoded content.
    pub content: String,
    pub encoding: ContentEncoding,
}

/// Port for enumerating, validating, and reading language templates.
pub trait TemplateSource {
    /// All registered language keys, sorted.
    fn list_available(&self) -> Result<Vec<String>, AppError>;

    /// Validate a language (case-insensitive) and resolve its template.
    ///
    /// The error for an unknown language enumerates every available key so
    /// the caller can self-correct.
    fn resolve(&self, language: &str) -> Result<LanguageTemplate, AppError>;

    /// Load every file in the template, each visited exactly once.
    ///
    /// Files are size-checked before reading; an oversized file fails the
    /// whole walk.
    fn walk(&self, template: &LanguageTemplate) -> Result<Vec<TemplateFile>, AppError>;
}
