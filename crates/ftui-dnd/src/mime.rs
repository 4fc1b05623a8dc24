#![forbid(unsafe_code)]

//! Format names used on the drag carrier.

/// Default custom format namespace. A typed payload is written under
/// `application/x-dnd-<type>`.
pub const CUSTOM_MIME_TYPE: &str = "application/x-dnd";

/// Generic structured format for platforms that reject custom names.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Plain-text format for platforms that only accept `Text`.
pub const LEGACY_MIME_TYPE: &str = "Text";

/// Encoding tier of a format name, most to least capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatTier {
    Custom,
    Json,
    Legacy,
}

impl FormatTier {
    /// Classify a format name against a custom namespace.
    ///
    /// Returns `None` for names outside all three tiers (`text/plain`,
    /// `Files`, ...).
    #[must_use]
    pub fn classify(name: &str, namespace: &str) -> Option<Self> {
        if name == LEGACY_MIME_TYPE {
            Some(Self::Legacy)
        } else if name == JSON_MIME_TYPE {
            Some(Self::Json)
        } else if is_custom_mime_type(name, namespace) {
            Some(Self::Custom)
        } else {
            None
        }
    }
}

/// Literal prefix test against the custom namespace.
///
/// Matches the bare namespace and every discriminator-suffixed variant.
#[inline]
#[must_use]
pub fn is_custom_mime_type(name: &str, namespace: &str) -> bool {
    name.starts_with(namespace)
}

/// Custom format name for a payload carrying `type_tag`.
///
/// Empty tags are treated as absent.
#[must_use]
pub fn custom_mime_type(namespace: &str, type_tag: Option<&str>) -> String {
    match type_tag.filter(|tag| !tag.is_empty()) {
        Some(tag) => format!("{namespace}-{tag}"),
        None => namespace.to_string(),
    }
}
