#![forbid(unsafe_code)]

//! Drag payload carried across one drag session.

use serde::{Deserialize, Deserializer, Serialize};

/// Structured value handed from a drag source to a drop target.
///
/// Absent fields are omitted when encoded, so the empty payload is `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DragDropData {
    /// Opaque application data. A present `null` stays `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<serde_json::Value>,
    /// Discriminator appended to the custom format name.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub type_tag: Option<String>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl DragDropData {
    /// Payload with data and no type tag.
    #[must_use]
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            type_tag: None,
        }
    }

    /// Attach a type tag.
    #[must_use]
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }

    /// True when neither data nor a type tag is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.type_tag.is_none()
    }

    /// Type tag, if present and non-empty.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref().filter(|tag| !tag.is_empty())
    }
}
