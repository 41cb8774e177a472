//! Display form of raw property and script values

use scenedoc_scene::ResourceTable;

/// Strip one pair of surrounding double quotes, if present
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Unquote a raw value and substitute known resource references with their paths
pub fn resolve_value(raw: &str, resources: &ResourceTable) -> String {
    resources.resolve(unquote(raw)).into_owned()
}
