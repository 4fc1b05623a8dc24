#![forbid(unsafe_code)]

//! Transfer codec: writes a [`DragDropData`] payload onto a carrier and reads
//! it back, hiding platform format support gaps behind one fallback chain.
//!
//! # Write tiers
//!
//! 1. `application/x-dnd[-<type>]` (custom namespace)
//! 2. `application/json`
//! 3. `Text`, after narrowing the session to a single allowed effect
//!
//! Each tier is attempted once, in order, and the chain stops at the first
//! write the carrier accepts. Only [`WriteUnsupported`] moves the chain
//! forward; there is no platform sniffing.
//!
//! # Read gate
//!
//! Drops from foreign drag sources are only decoded when they carry a
//! custom-namespace format. Drops from this layer's own drags are decoded
//! from whichever tier was detected.

use serde::Deserialize;

use crate::carrier::{TransferCarrier, WriteUnsupported};
use crate::effect::{DROP_EFFECTS, filter_effects};
use crate::mime::{
    CUSTOM_MIME_TYPE, FormatTier, JSON_MIME_TYPE, LEGACY_MIME_TYPE, custom_mime_type,
    is_custom_mime_type,
};
use crate::payload::DragDropData;

#[cfg(feature = "tracing")]
use crate::logging::{debug, trace, warn};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace, warn};

/// Errors surfaced by the transfer codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Stored data under `format` is not a valid payload.
    Parse { format: String, message: String },
    /// `format` was listed but its data could not be read back.
    MissingData { format: String },
    /// An internal drop carried no well-known format.
    NoKnownFormat,
    /// Every write tier was rejected by the carrier.
    NoWritableFormat { attempted: Vec<String> },
    /// The payload could not be encoded.
    Encode(String),
}

impl core::fmt::Display for TransferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parse { format, message } => {
                write!(f, "malformed drag payload in {format}: {message}")
            }
            Self::MissingData { format } => write!(f, "no data stored for format {format}"),
            Self::NoKnownFormat => write!(f, "drop carries no well-known format"),
            Self::NoWritableFormat { attempted } => {
                write!(f, "carrier rejected every format: {}", attempted.join(", "))
            }
            Self::Encode(msg) => write!(f, "payload encode error: {msg}"),
        }
    }
}

impl std::error::Error for TransferError {}

/// Invalid [`TransferConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferConfigError {
    EmptyNamespace,
    /// Format names cannot contain whitespace.
    InvalidNamespace(String),
    /// Namespace would be detected as the generic or legacy tier.
    ReservedNamespace(String),
}

impl core::fmt::Display for TransferConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyNamespace => write!(f, "custom mime type must not be empty"),
            Self::InvalidNamespace(ns) => write!(f, "invalid custom mime type: {ns:?}"),
            Self::ReservedNamespace(ns) => write!(f, "custom mime type {ns:?} is reserved"),
        }
    }
}

impl std::error::Error for TransferConfigError {}

/// Codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransferConfig {
    /// Custom format namespace; typed payloads append `-<type>`.
    pub custom_mime_type: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            custom_mime_type: CUSTOM_MIME_TYPE.to_string(),
        }
    }
}

impl TransferConfig {
    /// Check the configuration without building a codec.
    pub fn validate(&self) -> Result<(), TransferConfigError> {
        let ns = self.custom_mime_type.as_str();
        if ns.is_empty() {
            return Err(TransferConfigError::EmptyNamespace);
        }
        if ns.chars().any(char::is_whitespace) {
            return Err(TransferConfigError::InvalidNamespace(ns.to_string()));
        }
        // A namespace that prefixes a reserved name would claim that tier.
        if JSON_MIME_TYPE.starts_with(ns) || LEGACY_MIME_TYPE.starts_with(ns) {
            return Err(TransferConfigError::ReservedNamespace(ns.to_string()));
        }
        Ok(())
    }
}

/// Stateless encoder/decoder for drag payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCodec {
    config: TransferConfig,
}

impl Default for TransferCodec {
    fn default() -> Self {
        Self {
            config: TransferConfig::default(),
        }
    }
}

impl TransferCodec {
    /// Build a codec from a validated configuration.
    pub fn new(config: TransferConfig) -> Result<Self, TransferConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// Custom format name a payload would be written under.
    #[must_use]
    pub fn custom_mime_type_for(&self, data: &DragDropData) -> String {
        custom_mime_type(&self.config.custom_mime_type, data.type_tag())
    }

    /// Tier of a format name under this codec's namespace.
    #[must_use]
    pub fn tier_of(&self, name: &str) -> Option<FormatTier> {
        FormatTier::classify(name, &self.config.custom_mime_type)
    }

    /// Write `data` onto the carrier and return the tier that was used.
    ///
    /// `effect_allowed` is only consulted if the chain reaches the legacy
    /// tier, where the first matching effect of `move`, `copy`, `link` is
    /// recorded as the session's single allowed effect.
    pub fn set_drag_data<C>(
        &self,
        carrier: &mut C,
        data: &DragDropData,
        effect_allowed: &str,
    ) -> Result<FormatTier, TransferError>
    where
        C: TransferCarrier + ?Sized,
    {
        let encoded =
            serde_json::to_string(data).map_err(|e| TransferError::Encode(e.to_string()))?;
        let custom = self.custom_mime_type_for(data);

        let rejected_custom = match carrier.set_format(&custom, &encoded) {
            Ok(()) => {
                debug!(format = %custom, "dnd.transfer.write");
                return Ok(FormatTier::Custom);
            }
            Err(rejected) => rejected,
        };
        warn!(format = %rejected_custom.format, "dnd.transfer.fallback");

        let rejected_json = match carrier.set_format(JSON_MIME_TYPE, &encoded) {
            Ok(()) => {
                debug!(format = JSON_MIME_TYPE, "dnd.transfer.write");
                return Ok(FormatTier::Json);
            }
            Err(rejected) => rejected,
        };
        warn!(format = %rejected_json.format, "dnd.transfer.fallback");

        // Legacy platforms cannot change the cursor during dragover, so the
        // effect has to be fixed now.
        match filter_effects(&DROP_EFFECTS, effect_allowed).first() {
            Some(&effect) => carrier.set_allowed_effect(effect),
            None => {
                debug!(effect_allowed, "dnd.transfer.no_legacy_effect");
            }
        }

        match carrier.set_format(LEGACY_MIME_TYPE, &encoded) {
            Ok(()) => {
                debug!(format = LEGACY_MIME_TYPE, "dnd.transfer.write");
                Ok(FormatTier::Legacy)
            }
            Err(WriteUnsupported { format }) => {
                warn!(format = %format, "dnd.transfer.exhausted");
                Err(TransferError::NoWritableFormat {
                    attempted: vec![rejected_custom.format, rejected_json.format, format],
                })
            }
        }
    }

    /// First well-known format present on the carrier.
    ///
    /// Carriers with no format list are treated as legacy-only and report
    /// `Text` without scanning.
    pub fn get_well_known_mime_type<C>(&self, carrier: &C) -> Option<String>
    where
        C: TransferCarrier + ?Sized,
    {
        let Some(formats) = carrier.list_formats() else {
            trace!("dnd.transfer.detect.no_format_list");
            return Some(LEGACY_MIME_TYPE.to_string());
        };

        let found = formats
            .into_iter()
            .find(|name| self.tier_of(name).is_some());
        trace!(format = ?found, "dnd.transfer.detect");
        found
    }

    /// Recover the payload at drop time.
    ///
    /// Foreign drops without a custom-namespace format yield an empty payload
    /// instead of decoding unknown content.
    pub fn get_drop_data<C>(
        &self,
        carrier: &C,
        drag_is_internal: bool,
    ) -> Result<DragDropData, TransferError>
    where
        C: TransferCarrier + ?Sized,
    {
        let mime_type = self.get_well_known_mime_type(carrier);

        if !drag_is_internal {
            return match mime_type.as_deref() {
                Some(format) if is_custom_mime_type(format, &self.config.custom_mime_type) => {
                    decode(carrier, format)
                }
                _ => {
                    trace!(format = ?mime_type, "dnd.transfer.foreign_ignored");
                    Ok(DragDropData::default())
                }
            };
        }

        let format = mime_type.ok_or(TransferError::NoKnownFormat)?;
        decode(carrier, &format)
    }
}

fn decode<C>(carrier: &C, format: &str) -> Result<DragDropData, TransferError>
where
    C: TransferCarrier + ?Sized,
{
    let raw = carrier
        .get_format(format)
        .ok_or_else(|| TransferError::MissingData {
            format: format.to_string(),
        })?;
    serde_json::from_str(&raw).map_err(|e| TransferError::Parse {
        format: format.to_string(),
        message: e.to_string(),
    })
}

/// [`TransferCodec::set_drag_data`] with the default configuration.
pub fn set_drag_data<C>(
    carrier: &mut C,
    data: &DragDropData,
    effect_allowed: &str,
) -> Result<FormatTier, TransferError>
where
    C: TransferCarrier + ?Sized,
{
    TransferCodec::default().set_drag_data(carrier, data, effect_allowed)
}

/// [`TransferCodec::get_well_known_mime_type`] with the default configuration.
pub fn get_well_known_mime_type<C>(carrier: &C) -> Option<String>
where
    C: TransferCarrier + ?Sized,
{
    TransferCodec::default().get_well_known_mime_type(carrier)
}

/// [`TransferCodec::get_drop_data`] with the default configuration.
pub fn get_drop_data<C>(carrier: &C, drag_is_internal: bool) -> Result<DragDropData, TransferError>
where
    C: TransferCarrier + ?Sized,
{
    TransferCodec::default().get_drop_data(carrier, drag_is_internal)
}
