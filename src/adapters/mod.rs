pub mod github_http;
pub mod template_filesystem;

pub use github_http::HttpGitHubClient;
pub use template_filesystem::FilesystemTemplateSource;
