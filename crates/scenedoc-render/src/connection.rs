//! Signal connections rendered as sentences

use regex::Regex;
use scenedoc_scene::{Attributes, SCENE_ROOT};
use std::sync::LazyLock;

static CONNECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[connection\s+(.*?)\]$").expect("connection pattern"));

/// The four attributes of a `[connection]` line. Missing ones are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub signal: String,
    pub from: String,
    pub to: String,
    pub method: String,
}

impl Connection {
    /// Read a raw connection line; `None` if it isn't bracketed as expected
    pub fn parse(line: &str) -> Option<Self> {
        let caps = CONNECTION.captures(line.trim())?;
        let attrs = Attributes::parse(&caps[1]);
        let field = |key: &str| attrs.get(key).unwrap_or_default().to_string();
        Some(Self {
            signal: field("signal"),
            from: field("from"),
            to: field("to"),
            method: field("method"),
        })
    }

    /// Describe the connection, naming `owner` when the target is the scene root
    pub fn sentence(&self, owner: &str) -> String {
        let to = if self.to == SCENE_ROOT { owner } else { self.to.as_str() };
        format!(
            "When signal '{}' is emitted from '{}', call method '{}' on '{}'.",
            self.signal, self.from, self.method, to
        )
    }
}

/// Render one raw connection line, or return it trimmed if it can't be read
pub fn format_connection(line: &str, owner: &str) -> String {
    match Connection::parse(line) {
        Some(connection) => connection.sentence(owner),
        None => {
            log::debug!("unrecognized connection line: {}", line.trim());
            line.trim().to_string()
        }
    }
}
