#![forbid(unsafe_code)]

//! Drop effects and `effectAllowed` filtering.

use core::str::FromStr;

/// Operation a drop is allowed to perform, as reported to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropEffect {
    Move,
    Copy,
    Link,
    None,
}

/// Canonical scan order used when a single effect must be chosen.
///
/// The order is fixed: `move` wins over `copy` when an `effectAllowed`
/// string names both (e.g. `"copyMove"`).
pub const DROP_EFFECTS: [DropEffect; 3] = [DropEffect::Move, DropEffect::Copy, DropEffect::Link];

impl DropEffect {
    /// Lowercase platform spelling (`"move"`, `"copy"`, `"link"`, `"none"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Copy => "copy",
            Self::Link => "link",
            Self::None => "none",
        }
    }
}

impl core::fmt::Display for DropEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized drop effect name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDropEffect(pub String);

impl core::fmt::Display for UnknownDropEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown drop effect: {}", self.0)
    }
}

impl std::error::Error for UnknownDropEffect {}

impl FromStr for DropEffect {
    type Err = UnknownDropEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(Self::Move),
            "copy" => Ok(Self::Copy),
            "link" => Ok(Self::Link),
            "none" => Ok(Self::None),
            other => Err(UnknownDropEffect(other.to_string())),
        }
    }
}

/// Keep the effects named by an `effectAllowed` specification.
///
/// `"all"` (exact spelling) keeps every effect. Any other value keeps, in the
/// order of `effects`, each effect whose name occurs as a substring of the
/// lowercased specification, so `"copyMove"` keeps both `move` and `copy`.
#[must_use]
pub fn filter_effects(effects: &[DropEffect], allowed: &str) -> Vec<DropEffect> {
    if allowed == "all" {
        return effects.to_vec();
    }

    let allowed = allowed.to_lowercase();
    effects
        .iter()
        .copied()
        .filter(|effect| allowed.contains(effect.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DROP_EFFECTS, DropEffect, filter_effects};

    #[test]
    fn all_keeps_every_effect_in_order() {
        assert_eq!(filter_effects(&DROP_EFFECTS, "all"), DROP_EFFECTS.to_vec());
    }

    #[test]
    fn compound_spec_is_scanned_in_canonical_order() {
        assert_eq!(
            filter_effects(&DROP_EFFECTS, "copyMove"),
            vec![DropEffect::Move, DropEffect::Copy]
        );
        assert_eq!(
            filter_effects(&DROP_EFFECTS, "linkMove"),
            vec![DropEffect::Move, DropEffect::Link]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(filter_effects(&DROP_EFFECTS, "COPY"), vec![DropEffect::Copy]);
    }

    #[test]
    fn none_and_garbage_keep_nothing() {
        assert!(filter_effects(&DROP_EFFECTS, "none").is_empty());
        assert!(filter_effects(&DROP_EFFECTS, "uninitialized").is_empty());
        assert!(filter_effects(&DROP_EFFECTS, "").is_empty());
    }

    #[test]
    fn all_is_case_sensitive() {
        // "ALL" is not the wildcard and names no single effect.
        assert!(filter_effects(&DROP_EFFECTS, "ALL").is_empty());
    }

    #[test]
    fn parse_and_display_agree() {
        for effect in [
            DropEffect::Move,
            DropEffect::Copy,
            DropEffect::Link,
            DropEffect::None,
        ] {
            assert_eq!(effect.to_string().parse::<DropEffect>(), Ok(effect));
        }
        assert!("Move".parse::<DropEffect>().is_err());
    }
}
