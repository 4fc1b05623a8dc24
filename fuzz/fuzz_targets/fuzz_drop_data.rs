#![no_main]

use arbitrary::Arbitrary;
use ftui_dnd::{MemoryCarrier, get_drop_data, get_well_known_mime_type};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DropInput {
    entries: Vec<(String, String)>,
    hide_format_list: bool,
    drag_is_internal: bool,
}

fuzz_target!(|input: DropInput| {
    // Arbitrary carrier content must decode or fail with an error, never panic.
    let mut carrier = MemoryCarrier::default();
    for (name, value) in input.entries {
        carrier = carrier.with_entry(name, value);
    }
    if input.hide_format_list {
        carrier = carrier.without_format_list();
    }

    let detected = get_well_known_mime_type(&carrier);
    let result = get_drop_data(&carrier, input.drag_is_internal);

    // Foreign drops only decode custom-namespace content.
    if !input.drag_is_internal
        && !detected
            .as_deref()
            .is_some_and(|format| format.starts_with("application/x-dnd"))
    {
        assert!(matches!(result, Ok(ref payload) if payload.is_empty()));
    }
});
