//! Reading package sources out of a pre-existing NuGet.config.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{ADD_ELEMENT, PACKAGE_SOURCES_ELEMENT, ROOT_ELEMENT};
use crate::domain::AppError;

/// One `<add key=".." value=".."/>` entry under `packageSources`.
///
/// Missing attributes read as empty strings: an empty value never matches a
/// feed and an empty key fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSource {
    pub key: String,
    pub value: String,
}

impl PackageSource {
    /// Case-insensitive substring match of the feed URL inside the source value.
    pub fn matches_feed(&self, feed_url: &str) -> bool {
        self.value.to_lowercase().contains(&feed_url.to_lowercase())
    }
}

/// The parts of an existing config this tool cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingConfig {
    /// Every `configuration/packageSources/add` entry in document order,
    /// whether the file holds one entry or many.
    pub sources: Vec<PackageSource>,
}

impl ExistingConfig {
    /// Parse `content` read from `path`.
    ///
    /// Fails with `InvalidNuGetConfig` when there is no `configuration` root
    /// and with `ParseError` when the markup itself is malformed.
    pub fn parse(content: &str, path: &Path) -> Result<Self, AppError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<String> = Vec::new();
        let mut has_root = false;
        let mut sources = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(element)) => {
                    let name = element_name(&element, path)?;
                    has_root |= stack.is_empty() && name == ROOT_ELEMENT;
                    if is_source_entry(&stack, &name) {
                        sources.push(read_source(&element, path)?);
                    }
                    stack.push(name);
                }
                Ok(Event::Empty(element)) => {
                    let name = element_name(&element, path)?;
                    has_root |= stack.is_empty() && name == ROOT_ELEMENT;
                    if is_source_entry(&stack, &name) {
                        sources.push(read_source(&element, path)?);
                    }
                }
                Ok(Event::End(_)) => {
                    stack.pop();
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => return Err(parse_error(path, err)),
            }
        }

        if !has_root {
            return Err(AppError::InvalidNuGetConfig { path: path.display().to_string() });
        }

        Ok(Self { sources })
    }

    /// Keys of every source whose value contains `feed_url`, first occurrence wins.
    pub fn matching_keys(&self, feed_url: &str) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for source in self.sources.iter().filter(|source| source.matches_feed(feed_url)) {
            if !keys.contains(&source.key) {
                keys.push(source.key.clone());
            }
        }
        keys
    }
}

fn is_source_entry(stack: &[String], name: &str) -> bool {
    name == ADD_ELEMENT
        && matches!(
            stack,
            [root, section] if root == ROOT_ELEMENT && section == PACKAGE_SOURCES_ELEMENT
        )
}

fn element_name(element: &BytesStart<'_>, path: &Path) -> Result<String, AppError> {
    std::str::from_utf8(element.name().as_ref())
        .map(str::to_string)
        .map_err(|err| parse_error(path, err))
}

fn read_source(element: &BytesStart<'_>, path: &Path) -> Result<PackageSource, AppError> {
    let mut source = PackageSource::default();
    for attr in element.attributes() {
        let attr = attr.map_err(|err| parse_error(path, err))?;
        let value = attr.unescape_value().map_err(|err| parse_error(path, err))?.into_owned();
        match attr.key.as_ref() {
            b"key" => source.key = value,
            b"value" => source.value = value,
            _ => {}
        }
    }
    Ok(source)
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::ParseError { what: path.display().to_string(), details: err.to_string() }
}
