//! Key-value descriptor files
//!
//! Every configuration file the project manager reads (projects index,
//! version files, project descriptors) is a flat `key=value` file in the style
//! of Java `.properties` files. Parsing is delegated to `rust-ini` with quote
//! and escape processing switched off, so values reach the engine verbatim.
//!
//! Lines starting with `#` or `;` are comments, `key=value` and `key: value`
//! are both accepted. A line holding only a key (`pm.use.jar-plugin`) sets it
//! to the empty value, and `key value` reads as `key=value`. Keys keep their
//! file order; a repeated key keeps the value of its last occurrence.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use ini::{Ini, ParseOption};
use log::warn;

use crate::error::{Error, Result};

/// An ordered string-to-string mapping loaded from a descriptor file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a descriptor file from disk.
    ///
    /// A file that cannot be read is a configuration error, a file that
    /// cannot be parsed is a format error. Both name the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("cannot read <{}>: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::format(format!("cannot parse <{}>: {}", path.display(), e)))
    }

    /// Parse descriptor text.
    pub fn parse(content: &str) -> std::result::Result<Self, ini::ParseError> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(&with_separators(content), options)?;

        let mut map = Self::new();
        for (section, properties) in ini.iter() {
            match section {
                None => {
                    for (key, value) in properties.iter() {
                        map.insert(key, value);
                    }
                }
                Some(name) => {
                    warn!("ignoring section [{}] in key-value descriptor", name);
                }
            }
        }
        Ok(map)
    }

    /// Insert or replace a value, keeping the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present, whatever its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate over `(key, value)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over values in file order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Give every key-only line an explicit `=` separator.
///
/// rust-ini needs `=` or `:` on every entry line; `.properties` files also
/// allow a bare key and whitespace as the separator.
fn with_separators(content: &str) -> Cow<'_, str> {
    let needs_separator = |line: &str| {
        let line = line.trim();
        !line.is_empty()
            && !line.starts_with(['#', ';', '['])
            && !line.contains(['=', ':'])
    };
    if !content.lines().any(needs_separator) {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len() + 8);
    for line in content.lines() {
        if needs_separator(line) {
            let line = line.trim();
            match line.split_once(char::is_whitespace) {
                Some((key, value)) => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value.trim_start());
                }
                None => {
                    out.push_str(line);
                    out.push('=');
                }
            }
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    Cow::Owned(out)
}

/// Split a list-valued property into its whitespace-separated tokens.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
