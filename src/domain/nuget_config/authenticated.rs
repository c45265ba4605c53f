//! Construction of the generated NuGet.config.

use super::document::XmlElement;
use super::{
    ADD_ELEMENT, CLEAR_TEXT_PASSWORD_KEY, CONFIG_ELEMENT, CREDENTIALS_ELEMENT,
    DEFAULT_PUSH_SOURCE_KEY, PACKAGE_SOURCES_ELEMENT, ROOT_ELEMENT, USERNAME_KEY,
};
use crate::domain::credentials::Credentials;
use crate::domain::{AppError, SourceKey};

/// Result of planning the generated config for one feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedConfig {
    pub document: XmlElement,
    /// Keys that received a credential block, in output order.
    pub source_keys: Vec<SourceKey>,
    /// Whether the default `Source` entry was added to `packageSources`.
    pub synthesized_source: bool,
}

/// Build the full output document before anything is written.
///
/// With no `matched_keys` a `packageSources` section holding a single
/// `Source` entry is synthesized. Every key is validated before it becomes
/// an element name, so a bad key aborts the whole build.
pub fn build_authenticated_config(
    feed_url: &str,
    matched_keys: &[String],
    credentials: &Credentials,
) -> Result<AuthenticatedConfig, AppError> {
    let synthesized_source = matched_keys.is_empty();
    let raw_keys: Vec<&str> = if synthesized_source {
        vec![SourceKey::DEFAULT]
    } else {
        matched_keys.iter().map(String::as_str).collect()
    };
    let source_keys = raw_keys.into_iter().map(SourceKey::new).collect::<Result<Vec<_>, _>>()?;

    let push_source =
        XmlElement::new(CONFIG_ELEMENT).with_child(add(DEFAULT_PUSH_SOURCE_KEY, feed_url));
    let mut document = XmlElement::new(ROOT_ELEMENT).with_child(push_source);

    if synthesized_source {
        document = document.with_child(
            XmlElement::new(PACKAGE_SOURCES_ELEMENT).with_child(add(SourceKey::DEFAULT, feed_url)),
        );
    }

    let blocks = source_keys.iter().map(|key| {
        XmlElement::new(key.as_str())
            .with_child(add(USERNAME_KEY, &credentials.username))
            .with_child(add(CLEAR_TEXT_PASSWORD_KEY, credentials.token.expose()))
    });
    document = document.with_child(XmlElement::new(CREDENTIALS_ELEMENT).with_children(blocks));

    Ok(AuthenticatedConfig { document, source_keys, synthesized_source })
}

fn add(key: &str, value: &str) -> XmlElement {
    XmlElement::new(ADD_ELEMENT).with_attribute("key", key).with_attribute("value", value)
}
