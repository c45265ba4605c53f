pub mod credentials;
pub mod error;
pub mod identities;
pub mod nuget_config;
pub mod paths;

pub use credentials::{AUTH_TOKEN_ENV, AuthToken, Credentials};
pub use error::AppError;
pub use identities::SourceKey;
pub use nuget_config::{AuthenticatedConfig, ExistingConfig, PackageSource, XmlElement};
pub use paths::NUGET_CONFIG_FILE;
