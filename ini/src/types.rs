use std::{collections::HashMap, ffi::OsStr, path::Path};

use crate::{
    error::IniError,
    parser::{bool_token, int_token, parse_ini},
};

/// Every comma separated token of one `key = ...` line, in file order.
pub type Values = Vec<String>;
pub type Section = HashMap<String, Values>;

/// In-memory view of one `.ini` settings file.
///
/// Keys that appear before any `[section]` header land in the section
/// named `""`. A key repeated inside a section keeps its last line.
#[derive(Debug, Clone, Default)]
pub struct Ini {
    pub(crate) sections: HashMap<String, Section>,
}

impl Ini {
    pub fn from_text(text: &str) -> Ini {
        parse_ini(text)
    }

    pub fn from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Ini, IniError> {
        let text = std::fs::read_to_string(path)?;

        Ok(Self::from_text(&text))
    }

    /// True when no entry survived parsing.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn values(&self, section: &str, key: &str) -> Option<&Values> {
        self.sections.get(section)?.get(key)
    }

    pub fn ints(&self, section: &str, key: &str) -> Vec<i32> {
        self.values(section, key)
            .map(|values| values.iter().map(|token| int_token(token)).collect())
            .unwrap_or_default()
    }

    pub fn bools(&self, section: &str, key: &str, default: bool) -> Vec<bool> {
        self.values(section, key)
            .map(|values| {
                values
                    .iter()
                    .map(|token| bool_token(token, default))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First token of `key` as an integer, `default` when the key is missing.
    pub fn read_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ints(section, key).first().copied().unwrap_or(default)
    }

    pub fn read_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.bools(section, key, default)
            .first()
            .copied()
            .unwrap_or(default)
    }

    pub fn read_string(&self, section: &str, key: &str, default: &str) -> String {
        self.values(section, key)
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
