#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for JS drag controllers.
//!
//! Payloads cross the boundary as plain JS values through
//! `JSON.stringify`/`JSON.parse`; codec errors are thrown as JS `Error`s.

use ftui_dnd::{
    DROP_EFFECTS, DragDropData, TransferCodec, TransferConfig, filter_effects,
};
use js_sys::{Array, JSON};
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, Element};

use crate::dom;

fn js_error(msg: impl core::fmt::Display) -> JsValue {
    js_sys::Error::new(&msg.to_string()).into()
}

fn payload_from_js(value: &JsValue) -> Result<DragDropData, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(DragDropData::default());
    }
    let text: String = JSON::stringify(value)?.into();
    serde_json::from_str(&text).map_err(js_error)
}

fn payload_to_js(payload: &DragDropData) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(payload).map_err(js_error)?;
    JSON::parse(&text)
}

/// Transfer codec bound to one configuration.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DndTransfer {
    codec: TransferCodec,
}

#[wasm_bindgen]
impl DndTransfer {
    /// `config` is `undefined` or `{ custom_mime_type: string }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DndTransfer, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            TransferConfig::default()
        } else {
            let text: String = JSON::stringify(&config)?.into();
            serde_json::from_str(&text).map_err(js_error)?
        };
        let codec = TransferCodec::new(config).map_err(js_error)?;
        Ok(Self { codec })
    }

    #[wasm_bindgen(js_name = setDragData)]
    pub fn set_drag_data(
        &self,
        event: &DragEvent,
        data: JsValue,
        effect_allowed: &str,
    ) -> Result<(), JsValue> {
        let payload = payload_from_js(&data)?;
        dom::set_drag_data(&self.codec, event, &payload, effect_allowed).map_err(js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getWellKnownMimeType)]
    pub fn get_well_known_mime_type(&self, event: &DragEvent) -> Option<String> {
        dom::get_well_known_mime_type(&self.codec, event)
    }

    #[wasm_bindgen(js_name = getDropData)]
    pub fn get_drop_data(&self, event: &DragEvent, drag_is_internal: bool) -> Result<JsValue, JsValue> {
        let payload =
            dom::get_drop_data(&self.codec, event, drag_is_internal).map_err(js_error)?;
        payload_to_js(&payload)
    }
}

#[wasm_bindgen(js_name = setDragData)]
pub fn set_drag_data(event: &DragEvent, data: JsValue, effect_allowed: &str) -> Result<(), JsValue> {
    DndTransfer::default().set_drag_data(event, data, effect_allowed)
}

#[wasm_bindgen(js_name = getWellKnownMimeType)]
pub fn get_well_known_mime_type(event: &DragEvent) -> Option<String> {
    DndTransfer::default().get_well_known_mime_type(event)
}

#[wasm_bindgen(js_name = getDropData)]
pub fn get_drop_data(event: &DragEvent, drag_is_internal: bool) -> Result<JsValue, JsValue> {
    DndTransfer::default().get_drop_data(event, drag_is_internal)
}

/// Effects from `move`, `copy`, `link` allowed by an `effectAllowed` value.
#[wasm_bindgen(js_name = filterEffects)]
pub fn filter_effects_js(effect_allowed: &str) -> Array {
    filter_effects(&DROP_EFFECTS, effect_allowed)
        .into_iter()
        .map(|effect| JsValue::from_str(effect.as_str()))
        .collect()
}

#[wasm_bindgen(js_name = getDirectChildElement)]
pub fn get_direct_child_element(parent: &Element, child: &Element) -> Option<Element> {
    dom::get_direct_child_element(parent, child)
}

#[wasm_bindgen(js_name = shouldPositionPlaceholderBeforeElement)]
pub fn should_position_placeholder_before_element(
    event: &DragEvent,
    element: &Element,
    horizontal: bool,
) -> bool {
    dom::should_position_placeholder_before_element(event, element, horizontal)
}
