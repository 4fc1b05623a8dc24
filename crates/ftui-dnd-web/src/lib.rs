#![forbid(unsafe_code)]

//! `ftui-dnd-web` binds [`ftui_dnd`] to the browser.
//!
//! The adapter implements [`ftui_dnd::TransferCarrier`] over a
//! `DataTransfer` and [`ftui_dnd::DropTree`] over DOM nodes, then exposes the
//! transfer and placement operations both as Rust functions on `web-sys`
//! types and as `wasm-bindgen` exports for JS drag controllers.
//!
//! Only compiled on `wasm32` targets; elsewhere the crate just re-exports the
//! host-independent core.

pub use ftui_dnd;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
