mod remote_repository;
mod template_source;

pub use remote_repository::{Branch, RemoteRepositoryClient, RepositoryHandle, Team};
pub use template_source::{ContentEncoding, LanguageTemplate, TemplateFile, TemplateSource};
