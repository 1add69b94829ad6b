pub mod app_name;
pub mod config;
pub mod error;
pub mod repository;

pub use app_name::ApplicationName;
pub use config::{DEFAULT_MAX_FILE_BYTES, ProvisionerConfig};
pub use error::AppError;
pub use repository::{
    BranchProtectionPolicy, ProvisionOutcome, RepositorySettings, Warning,
};
