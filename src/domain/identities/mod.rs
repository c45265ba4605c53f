pub mod source_key;
pub mod validation;

pub use source_key::SourceKey;
