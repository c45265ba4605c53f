//! NuGet.config reading, construction, and serialization.

pub mod authenticated;
pub mod document;
pub mod existing;

pub use authenticated::{AuthenticatedConfig, build_authenticated_config};
pub use document::XmlElement;
pub use existing::{ExistingConfig, PackageSource};

pub const ROOT_ELEMENT: &str = "configuration";
pub const CONFIG_ELEMENT: &str = "config";
pub const PACKAGE_SOURCES_ELEMENT: &str = "packageSources";
pub const CREDENTIALS_ELEMENT: &str = "packageSourceCredentials";
pub const ADD_ELEMENT: &str = "add";

pub const DEFAULT_PUSH_SOURCE_KEY: &str = "defaultPushSource";
pub const USERNAME_KEY: &str = "Username";
pub const CLEAR_TEXT_PASSWORD_KEY: &str = "ClearTextPassword";
