#![forbid(unsafe_code)]

//! Drop placement geometry.
//!
//! Decides on which side of a candidate list item a placeholder belongs by
//! bisecting the item's bounds along the list axis. Coordinates are client
//! coordinates as reported by the browser (`f64`, origin top-left).

use crate::tree::{DropTree, get_direct_child};

#[cfg(feature = "tracing")]
use crate::logging::trace;
#[cfg(not(feature = "tracing"))]
use crate::trace;

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a candidate element in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Horizontal midpoint.
    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    #[inline]
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Orientation of the list being dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropAxis {
    Horizontal,
    #[default]
    Vertical,
}

impl DropAxis {
    #[must_use]
    pub const fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Side of the anchor element a placeholder is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Before,
    After,
}

/// Midpoint bisection along `axis`.
///
/// The comparison is strict: a pointer exactly on the midpoint (or a NaN
/// coordinate) places the placeholder after the element.
#[must_use]
pub fn placement_for(pointer: PointerPosition, bounds: Bounds, axis: DropAxis) -> Placement {
    let before = match axis {
        DropAxis::Horizontal => pointer.x < bounds.center_x(),
        DropAxis::Vertical => pointer.y < bounds.center_y(),
    };
    if before {
        Placement::Before
    } else {
        Placement::After
    }
}

/// True when the placeholder belongs before the element with `bounds`.
#[must_use]
pub fn should_position_placeholder_before(
    pointer: PointerPosition,
    bounds: Bounds,
    horizontal: bool,
) -> bool {
    placement_for(pointer, bounds, DropAxis::from_horizontal(horizontal)) == Placement::Before
}

/// Anchor element and side for one pointer move over a drop container.
#[derive(Debug, Clone, PartialEq)]
pub struct DropPosition<N> {
    pub anchor: N,
    pub placement: Placement,
}

/// Resolve a pointer move over `container` to a placeholder position.
///
/// `target` is the bubbled event target. Returns `None` when the target is
/// not inside `container`, or when it resolves to the placeholder itself
/// (the placeholder never anchors its own placement). `bounds_of` is only
/// called for the resolved anchor.
pub fn resolve_drop_position<T, F>(
    tree: &T,
    container: &T::Node,
    target: &T::Node,
    placeholder: Option<&T::Node>,
    pointer: PointerPosition,
    axis: DropAxis,
    bounds_of: F,
) -> Option<DropPosition<T::Node>>
where
    T: DropTree + ?Sized,
    F: FnOnce(&T::Node) -> Bounds,
{
    let anchor = get_direct_child(tree, container, target)?;
    if placeholder.is_some_and(|p| tree.same_node(p, &anchor)) {
        return None;
    }
    let bounds = bounds_of(&anchor);
    let placement = placement_for(pointer, bounds, axis);
    trace!(?placement, ?axis, x = pointer.x, y = pointer.y, "dnd.geometry.placement");
    Some(DropPosition { anchor, placement })
}
