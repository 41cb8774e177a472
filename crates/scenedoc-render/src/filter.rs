//! Relevance filter deciding which node properties reach the document

/// Property keys always shown, compared case-insensitively
pub const DEFAULT_KEYS: &[&str] = &["text", "label", "tooltip"];

/// Image and audio file extensions
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "ogg", "wav"];

/// Script and resource file extensions
pub const DEFAULT_RESOURCE_EXTENSIONS: &[&str] = &["gd", "tres", "tscn"];

/// Keeps UI text, links, and references to asset or script files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceFilter {
    keys: Vec<String>,
    media_extensions: Vec<String>,
    resource_extensions: Vec<String>,
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self {
            keys: owned_lowercase(DEFAULT_KEYS),
            media_extensions: owned_lowercase(DEFAULT_MEDIA_EXTENSIONS),
            resource_extensions: owned_lowercase(DEFAULT_RESOURCE_EXTENSIONS),
        }
    }
}

impl RelevanceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the key allow-list
    pub fn with_keys<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.keys = owned_lowercase(keys);
        self
    }

    /// Replace the media extension set (with or without leading dots)
    pub fn with_media_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.media_extensions = normalize_extensions(extensions);
        self
    }

    /// Replace the script/resource extension set (with or without leading dots)
    pub fn with_resource_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.resource_extensions = normalize_extensions(extensions);
        self
    }

    /// Check a property against the filter. `value` must already be resolved.
    pub fn is_relevant(&self, key: &str, value: &str) -> bool {
        let key = key.to_lowercase();
        if self.keys.iter().any(|k| *k == key) {
            return true;
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return true;
        }
        let value = value.to_lowercase();
        has_extension(&value, &self.media_extensions)
            || has_extension(&value, &self.resource_extensions)
    }
}

fn has_extension(value: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        value
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

fn owned_lowercase<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_lowercase()).collect()
}

fn normalize_extensions<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.as_ref().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
