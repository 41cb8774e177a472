//! Indirect resource references (`ExtResource("id")`)
//!
//! Both the parser (node `instance=` attributes) and the renderer
//! (script and property values) need to find and substitute these.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches `ExtResource("1_abc")` as well as the older `ExtResource( 1 )` form.
static RESOURCE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ExtResource\(\s*"?([^"\s)]+)"?\s*\)"#).expect("resource reference pattern")
});

/// Return the resource id of the first reference in `text`, if any
pub fn resource_ref_id(text: &str) -> Option<&str> {
    RESOURCE_REF
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Replace every reference in `text` whose id `lookup` knows with its path.
///
/// References with unknown ids are left exactly as written.
pub fn replace_resource_refs<'t, F>(text: &'t str, lookup: F) -> Cow<'t, str>
where
    F: Fn(&str) -> Option<String>,
{
    if !text.contains("ExtResource") {
        return Cow::Borrowed(text);
    }
    RESOURCE_REF.replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
        Some(path) => path,
        None => {
            log::debug!("unresolved resource reference {}", &caps[0]);
            caps[0].to_string()
        }
    })
}
