#![forbid(unsafe_code)]

//! `web-sys` implementations of the `ftui-dnd` capabilities.

use ftui_dnd::{
    Bounds, DragDropData, DropEffect, DropTree, FormatTier, PointerPosition, TransferCarrier,
    TransferCodec, TransferError, WriteUnsupported, get_direct_child,
    should_position_placeholder_before,
};
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, DragEvent, Element, MouseEvent, Node};

/// Errors from DOM-level drag operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebDndError {
    /// The event carries no `dataTransfer` (synthetic or non-drag event).
    NoDataTransfer,
    Transfer(TransferError),
}

impl core::fmt::Display for WebDndError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoDataTransfer => write!(f, "event has no dataTransfer"),
            Self::Transfer(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for WebDndError {}

impl From<TransferError> for WebDndError {
    fn from(err: TransferError) -> Self {
        Self::Transfer(err)
    }
}

/// [`TransferCarrier`] over a browser `DataTransfer`.
#[derive(Debug, Clone, Copy)]
pub struct DataTransferCarrier<'a> {
    inner: &'a DataTransfer,
}

impl<'a> DataTransferCarrier<'a> {
    #[must_use]
    pub const fn new(inner: &'a DataTransfer) -> Self {
        Self { inner }
    }
}

impl TransferCarrier for DataTransferCarrier<'_> {
    fn set_format(&mut self, name: &str, value: &str) -> Result<(), WriteUnsupported> {
        self.inner
            .set_data(name, value)
            .map_err(|_| WriteUnsupported::new(name))
    }

    fn get_format(&self, name: &str) -> Option<String> {
        self.inner.get_data(name).ok()
    }

    fn list_formats(&self) -> Option<Vec<String>> {
        // Read the property reflectively: some engines leave `types` undefined.
        let types = Reflect::get(self.inner, &JsValue::from_str("types")).ok()?;
        if types.is_undefined() || types.is_null() {
            return None;
        }
        Some(
            Array::from(&types)
                .iter()
                .filter_map(|name| name.as_string())
                .collect(),
        )
    }

    fn set_allowed_effect(&mut self, effect: DropEffect) {
        self.inner.set_effect_allowed(effect.as_str());
    }
}

/// [`DropTree`] over the live DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTree;

impl DropTree for DocumentTree {
    type Node = Node;

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn same_node(&self, a: &Node, b: &Node) -> bool {
        a.is_same_node(Some(b))
    }
}

/// Client coordinates of a mouse or drag event.
#[must_use]
pub fn pointer_of(event: &MouseEvent) -> PointerPosition {
    PointerPosition::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Bounding client rectangle of an element.
#[must_use]
pub fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.y(), rect.x(), rect.width(), rect.height())
}

fn data_transfer(event: &DragEvent) -> Result<DataTransfer, WebDndError> {
    event.data_transfer().ok_or(WebDndError::NoDataTransfer)
}

/// Write `data` onto the event's `DataTransfer` (call from `dragstart`).
pub fn set_drag_data(
    codec: &TransferCodec,
    event: &DragEvent,
    data: &DragDropData,
    effect_allowed: &str,
) -> Result<FormatTier, WebDndError> {
    let transfer = data_transfer(event)?;
    let mut carrier = DataTransferCarrier::new(&transfer);
    Ok(codec.set_drag_data(&mut carrier, data, effect_allowed)?)
}

/// First well-known format on the event's `DataTransfer`.
#[must_use]
pub fn get_well_known_mime_type(codec: &TransferCodec, event: &DragEvent) -> Option<String> {
    let transfer = event.data_transfer()?;
    codec.get_well_known_mime_type(&DataTransferCarrier::new(&transfer))
}

/// Read the payload from the event's `DataTransfer` (call from `drop`).
pub fn get_drop_data(
    codec: &TransferCodec,
    event: &DragEvent,
    drag_is_internal: bool,
) -> Result<DragDropData, WebDndError> {
    let transfer = data_transfer(event)?;
    Ok(codec.get_drop_data(&DataTransferCarrier::new(&transfer), drag_is_internal)?)
}

/// Direct child of `parent` that contains `child`.
#[must_use]
pub fn get_direct_child_element(parent: &Element, child: &Element) -> Option<Element> {
    let parent: &Node = parent;
    let child: &Node = child;
    get_direct_child(&DocumentTree, parent, child)?
        .dyn_into::<Element>()
        .ok()
}

/// True when the placeholder belongs before `element` for this pointer move.
#[must_use]
pub fn should_position_placeholder_before_element(
    event: &DragEvent,
    element: &Element,
    horizontal: bool,
) -> bool {
    should_position_placeholder_before(pointer_of(event), bounds_of(element), horizontal)
}
