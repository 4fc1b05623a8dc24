#![forbid(unsafe_code)]

//! Drag-and-drop data transfer negotiation and drop placement geometry.
//!
//! # Role in FrankenTUI
//! `ftui-dnd` is the decision layer underneath web drag-and-drop lists. It
//! owns two stateless units that a host drag controller calls synchronously:
//!
//! - **Transfer codec** ([`transfer`]): packs a [`DragDropData`] payload onto a
//!   platform drag carrier at drag start and recovers it at drop, walking a
//!   fixed format fallback chain (`application/x-dnd[-type]`, then
//!   `application/json`, then `Text`) for platforms that reject custom formats.
//! - **Drop geometry** ([`geometry`]): resolves a bubbled pointer target to the
//!   direct child of a list container and bisects that child's bounds to
//!   decide whether a placeholder goes before or after it.
//!
//! The platform is reached only through two narrow capabilities,
//! [`TransferCarrier`] and [`DropTree`], so the same logic runs against the
//! browser (`ftui-dnd-web`) and against the in-memory [`MemoryCarrier`] and
//! [`ArenaTree`] used by native hosts and tests. Nothing here retains a
//! reference to either capability past a call.

pub mod carrier;
pub mod effect;
pub mod geometry;
pub mod logging;
pub mod mime;
pub mod payload;
pub mod transfer;
pub mod tree;

pub use carrier::{CarrierSupport, MemoryCarrier, TransferCarrier, WriteUnsupported};
pub use effect::{DROP_EFFECTS, DropEffect, UnknownDropEffect, filter_effects};
pub use geometry::{
    Bounds, DropAxis, DropPosition, Placement, PointerPosition, placement_for,
    resolve_drop_position, should_position_placeholder_before,
};
pub use mime::{CUSTOM_MIME_TYPE, FormatTier, JSON_MIME_TYPE, LEGACY_MIME_TYPE};
pub use payload::DragDropData;
pub use transfer::{
    TransferCodec, TransferConfig, TransferConfigError, TransferError, get_drop_data,
    get_well_known_mime_type, set_drag_data,
};
pub use tree::{ArenaTree, ArenaTreeError, DropTree, NodeId, get_direct_child};
