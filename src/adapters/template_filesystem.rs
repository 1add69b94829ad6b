//! Filesystem-backed language template source.
//!
//! Each subdirectory of the template root registers one language. Files are
//! size-checked before reading and decoded as UTF-8 with a Latin-1 fallback,
//! so every template file is uploadable even when it is not strictly text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ContentEncoding, LanguageTemplate, TemplateFile, TemplateSource};

pub struct FilesystemTemplateSource {
    root: PathBuf,
    max_file_bytes: u64,
}

impl FilesystemTemplateSource {
    pub fn new(root: PathBuf, max_file_bytes: u64) -> Self {
        Self { root, max_file_bytes }
    }

    /// Fail when a file exceeds the upload ceiling. Checked from metadata so
    /// oversized files are rejected without being read.
    fn check_file_size(&self, path: &Path) -> Result<(), AppError> {
        let size_bytes = fs::metadata(path)?.len();
        if size_bytes > self.max_file_bytes {
            return Err(AppError::FileTooLarge {
                path: path.display().to_string(),
                size_bytes,
                limit_bytes: self.max_file_bytes,
            });
        }
        Ok(())
    }

    fn load_file(&self, path: &Path, template_root: &Path) -> Result<TemplateFile, AppError> {
        self.check_file_size(path)?;

        let bytes = fs::read(path)?;
        let (content, encoding) = decode(bytes);

        let relative = path
            .strip_prefix(template_root)
            .map_err(|_| {
                AppError::config_error(format!(
                    "File '{}' is outside template root '{}'",
                    path.display(),
                    template_root.display()
                ))
            })?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let file_name = path.file_name().map(|n| n.to_string_lossy().to_string()).ok_or_else(
            || AppError::config_error(format!("File '{}' has no file name", path.display())),
        )?;

        Ok(TemplateFile { relative_path: relative, file_name, content, encoding })
    }

    fn walk_dir(
        &self,
        dir: &Path,
        template_root: &Path,
        files: &mut Vec<TemplateFile>,
    ) -> Result<(), AppError> {
        let mut entries: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir)? {
            entries.push(entry?.path());
        }
        // sort for determinism
        entries.sort();

        for path in entries {
            if path.is_dir() {
                self.walk_dir(&path, template_root, files)?;
            } else {
                files.push(self.load_file(&path, template_root)?);
            }
        }
        Ok(())
    }
}

impl TemplateSource for FilesystemTemplateSource {
    fn list_available(&self) -> Result<Vec<String>, AppError> {
        if !self.root.is_dir() {
            return Err(AppError::TemplateRootMissing(self.root.clone()));
        }

        let mut languages = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                languages.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        languages.sort();
        Ok(languages)
    }

    fn resolve(&self, language: &str) -> Result<LanguageTemplate, AppError> {
        let key = language.to_lowercase();
        let candidate = self.root.join(&key);
        if !candidate.is_dir() {
            return Err(AppError::UnsupportedLanguage {
                language: language.to_string(),
                available: self.list_available()?.join(", "),
            });
        }
        Ok(LanguageTemplate { language: key, root: candidate })
    }

    fn walk(&self, template: &LanguageTemplate) -> Result<Vec<TemplateFile>, AppError> {
        let mut files = Vec::new();
        self.walk_dir(&template.root, &template.root, &mut files)?;
        Ok(files)
    }
}

/// Decode file bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail; binary content may be mis-rendered rather than
/// rejected.
fn decode(bytes: Vec<u8>) -> (String, ContentEncoding) {
    match String::from_utf8(bytes) {
        Ok(content) => (content, ContentEncoding::Utf8),
        Err(err) => {
            let content = err.into_bytes().iter().map(|&b| b as char).collect();
            (content, ContentEncoding::Latin1)
        }
    }
}
