//! Tag name validation and class name derivation.
//! Component tags are vendor-prefixed kebab-case custom element names;
//! the class name used in generated sources is derived from the tag.

use regex::Regex;
use std::sync::LazyLock;

/// Vendor prefix every component tag must carry.
pub const TAG_PREFIX: &str = "c4-";

static INVALID_TAG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("pattern is valid"));

/// Validates a candidate tag name against the component naming rules.
///
/// The returned message distinguishes a missing vendor prefix from invalid
/// characters so the prompt can tell the operator what to fix.
///
/// # Arguments
/// * `tag_name` - Candidate tag name, e.g. `c4-alert`
///
/// # Returns
/// * `Result<(), String>` - `Ok` when the name is acceptable, otherwise the
///   message to show before re-prompting
pub fn validate_tag_name(tag_name: &str) -> Result<(), String> {
    if !tag_name.starts_with(TAG_PREFIX) {
        return Err(format!("Component name must start with '{}'", TAG_PREFIX));
    }
    if INVALID_TAG_CHARS.is_match(tag_name) {
        return Err(
            "Component name can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        );
    }
    if tag_name.len() == TAG_PREFIX.len() {
        return Err(format!(
            "Component name must continue after the '{}' prefix",
            TAG_PREFIX
        ));
    }
    Ok(())
}

/// Derives the class name used in generated sources from a tag name.
///
/// Pure and deterministic: hyphens are removed and every word boundary is
/// capitalized, so `c4-notification-banner` becomes `C4NotificationBanner`.
/// Re-applying the derivation to an already-derived name is a no-op.
pub fn to_class_name(tag_name: &str) -> String {
    tag_name
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    let upper: String = first.to_uppercase().collect();
                    upper + chars.as_str()
                }
            }
        })
        .collect()
}
