#![forbid(unsafe_code)]

//! Transfer carrier capability.
//!
//! A carrier is the platform's session-scoped format store (the browser's
//! `DataTransfer`). The codec borrows it mutably for the duration of one call
//! and never keeps it.

use crate::effect::DropEffect;
use crate::mime::{JSON_MIME_TYPE, LEGACY_MIME_TYPE};

/// The carrier refused to store data under a format name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteUnsupported {
    pub format: String,
}

impl WriteUnsupported {
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl core::fmt::Display for WriteUnsupported {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "carrier rejected format: {}", self.format)
    }
}

impl std::error::Error for WriteUnsupported {}

/// Narrow view of a platform drag carrier.
pub trait TransferCarrier {
    /// Store `value` under `name`, replacing any previous value.
    fn set_format(&mut self, name: &str, value: &str) -> Result<(), WriteUnsupported>;

    /// Read the value stored under `name`.
    fn get_format(&self, name: &str) -> Option<String>;

    /// Format names currently present, in carrier order.
    ///
    /// `None` means the platform exposes no list at all, which is different
    /// from an empty list.
    fn list_formats(&self) -> Option<Vec<String>>;

    /// Restrict the session to a single allowed effect.
    fn set_allowed_effect(&mut self, effect: DropEffect);
}

impl<C: TransferCarrier + ?Sized> TransferCarrier for &mut C {
    fn set_format(&mut self, name: &str, value: &str) -> Result<(), WriteUnsupported> {
        (**self).set_format(name, value)
    }

    fn get_format(&self, name: &str) -> Option<String> {
        (**self).get_format(name)
    }

    fn list_formats(&self) -> Option<Vec<String>> {
        (**self).list_formats()
    }

    fn set_allowed_effect(&mut self, effect: DropEffect) {
        (**self).set_allowed_effect(effect);
    }
}

/// Which format names a [`MemoryCarrier`] accepts on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarrierSupport {
    /// Any format name.
    #[default]
    Full,
    /// Only `application/json` and `Text`.
    NoCustom,
    /// Only `Text`.
    LegacyOnly,
    /// Nothing; every write fails.
    Rejecting,
}

impl CarrierSupport {
    #[must_use]
    pub fn accepts(self, name: &str) -> bool {
        match self {
            Self::Full => true,
            Self::NoCustom => name == JSON_MIME_TYPE || name == LEGACY_MIME_TYPE,
            Self::LegacyOnly => name == LEGACY_MIME_TYPE,
            Self::Rejecting => false,
        }
    }
}

/// In-memory carrier for hosts without a DOM.
///
/// Keeps formats in insertion order; rewriting a format keeps its position.
#[derive(Debug, Clone)]
pub struct MemoryCarrier {
    entries: Vec<(String, String)>,
    support: CarrierSupport,
    list_available: bool,
    allowed_effect: Option<DropEffect>,
}

impl Default for MemoryCarrier {
    fn default() -> Self {
        Self::new(CarrierSupport::Full)
    }
}

impl MemoryCarrier {
    /// Create an empty carrier with the given write support.
    #[must_use]
    pub fn new(support: CarrierSupport) -> Self {
        Self {
            entries: Vec::new(),
            support,
            list_available: true,
            allowed_effect: None,
        }
    }

    /// Hide the format list, as platforms without `types` do.
    #[must_use]
    pub fn without_format_list(mut self) -> Self {
        self.list_available = false;
        self
    }

    /// Seed an entry regardless of write support (foreign drag content).
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub const fn support(&self) -> CarrierSupport {
        self.support
    }

    /// Effect recorded through [`TransferCarrier::set_allowed_effect`].
    #[must_use]
    pub const fn allowed_effect(&self) -> Option<DropEffect> {
        self.allowed_effect
    }

    /// Stored entries in carrier order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

impl TransferCarrier for MemoryCarrier {
    fn set_format(&mut self, name: &str, value: &str) -> Result<(), WriteUnsupported> {
        if !self.support.accepts(name) {
            return Err(WriteUnsupported::new(name));
        }
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get_format(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.clone())
    }

    fn list_formats(&self) -> Option<Vec<String>> {
        self.list_available
            .then(|| self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn set_allowed_effect(&mut self, effect: DropEffect) {
        self.allowed_effect = Some(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::{CarrierSupport, MemoryCarrier, TransferCarrier, WriteUnsupported};
    use crate::effect::DropEffect;

    #[test]
    fn full_support_accepts_any_name() {
        let mut carrier = MemoryCarrier::new(CarrierSupport::Full);
        carrier.set_format("application/x-dnd-card", "{}").expect("write");
        assert_eq!(
            carrier.get_format("application/x-dnd-card").as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn restricted_support_rejects_with_format_name() {
        let mut carrier = MemoryCarrier::new(CarrierSupport::NoCustom);
        assert_eq!(
            carrier.set_format("application/x-dnd", "{}"),
            Err(WriteUnsupported::new("application/x-dnd"))
        );
        carrier.set_format("application/json", "{}").expect("json write");

        let mut legacy = MemoryCarrier::new(CarrierSupport::LegacyOnly);
        assert!(legacy.set_format("application/json", "{}").is_err());
        legacy.set_format("Text", "{}").expect("text write");
        assert!(legacy.allowed_effect().is_none());
    }

    #[test]
    fn rewrite_keeps_position() {
        let mut carrier = MemoryCarrier::default()
            .with_entry("text/plain", "a")
            .with_entry("Text", "b");
        carrier.set_format("text/plain", "c").expect("write");
        let entries: Vec<_> = carrier.entries().collect();
        assert_eq!(entries, vec![("text/plain", "c"), ("Text", "b")]);
    }

    #[test]
    fn hidden_list_differs_from_empty_list() {
        let carrier = MemoryCarrier::default();
        assert_eq!(carrier.list_formats(), Some(Vec::new()));
        let hidden = MemoryCarrier::default().without_format_list();
        assert_eq!(hidden.list_formats(), None);
    }

    #[test]
    fn allowed_effect_is_recorded() {
        let mut carrier = MemoryCarrier::default();
        carrier.set_allowed_effect(DropEffect::Copy);
        assert_eq!(carrier.allowed_effect(), Some(DropEffect::Copy));
    }
}
