//! `key=value` attribute extraction from section header lines

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// A key followed by a quoted string, a call-like literal, or a bare token.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\w+)=("(?:[^"\\]|\\.)*"|\w+\([^)]*\)|[^\s\]]+)"#).expect("attribute pattern")
});

/// Attributes of one header line, looked up by key.
///
/// Order on the line does not matter. A key given twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: IndexMap<String, String>,
}

impl Attributes {
    /// Collect every attribute on `line`
    pub fn parse(line: &str) -> Self {
        let mut values = IndexMap::new();
        for caps in ATTRIBUTE.captures_iter(line) {
            let raw = &caps[2];
            let value = raw
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(raw);
            values.insert(caps[1].to_string(), value.to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like `get`, but treats an empty value as missing
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
