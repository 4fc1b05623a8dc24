//! Property-based invariant tests for the transfer codec and drop geometry.
//!
//! 1. Internal drags round-trip on every carrier support level
//! 2. Detection after a write reports the tier that was written
//! 3. Foreign drops never decode generic or legacy content
//! 4. Placement agrees with a direct midpoint comparison
//! 5. Direct-child resolution returns a child of the container, or `None`
//!    exactly when the target is outside it

use ftui_dnd::{
    ArenaTree, Bounds, CarrierSupport, DragDropData, DropAxis, DropTree, FormatTier,
    MemoryCarrier, NodeId, Placement, PointerPosition, TransferCarrier, get_direct_child,
    get_drop_data, get_well_known_mime_type, placement_for, set_drag_data,
};
use proptest::prelude::*;
use serde_json::Value;

// ── Strategies ──────────────────────────────────────────────────────────

/// JSON values without floats (f64 text round-trips are not exact).
fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _\\-\"\\\\]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn payload_strategy() -> impl Strategy<Value = DragDropData> {
    (
        prop::option::of(json_strategy()),
        prop::option::of("[a-z][a-z0-9]{0,7}"),
    )
        .prop_map(|(data, type_tag)| DragDropData { data, type_tag })
}

fn support_strategy() -> impl Strategy<Value = CarrierSupport> {
    prop_oneof![
        Just(CarrierSupport::Full),
        Just(CarrierSupport::NoCustom),
        Just(CarrierSupport::LegacyOnly),
    ]
}

fn effect_allowed_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        Just("copyMove".to_string()),
        Just("copyLink".to_string()),
        Just("linkMove".to_string()),
        Just("none".to_string()),
        "[a-zA-Z]{0,10}",
    ]
}

/// Random forest: node `i` is a root or hangs under some node `< i`.
fn forest_strategy() -> impl Strategy<Value = ArenaTree> {
    prop::collection::vec((any::<bool>(), any::<u32>()), 1..40).prop_map(|spec| {
        let mut tree = ArenaTree::new();
        let mut ids: Vec<NodeId> = Vec::with_capacity(spec.len());
        for (i, (is_root, pick)) in spec.into_iter().enumerate() {
            let id = if i == 0 || is_root {
                tree.add_root()
            } else {
                tree.add_child(ids[pick as usize % i])
            };
            ids.push(id.expect("forest stays small"));
        }
        tree
    })
}

fn is_ancestor(tree: &ArenaTree, ancestor: NodeId, node: NodeId) -> bool {
    let mut current = tree.parent(&node);
    while let Some(parent) = current {
        if parent == ancestor {
            return true;
        }
        current = tree.parent(&parent);
    }
    false
}

// ═══════════════════════════════════════════════════════════════════════
// Transfer codec
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn internal_drag_round_trips(
        payload in payload_strategy(),
        support in support_strategy(),
        allowed in effect_allowed_strategy(),
    ) {
        let mut carrier = MemoryCarrier::new(support);
        set_drag_data(&mut carrier, &payload, &allowed).expect("write");
        let read = get_drop_data(&carrier, true).expect("read");
        prop_assert_eq!(read, payload);
    }

    #[test]
    fn exactly_one_format_is_written(
        payload in payload_strategy(),
        support in support_strategy(),
    ) {
        let mut carrier = MemoryCarrier::new(support);
        set_drag_data(&mut carrier, &payload, "all").expect("write");
        prop_assert_eq!(carrier.len(), 1);
    }

    #[test]
    fn detection_reports_written_tier(
        payload in payload_strategy(),
        support in support_strategy(),
    ) {
        let mut carrier = MemoryCarrier::new(support);
        let tier = set_drag_data(&mut carrier, &payload, "all").expect("write");
        let detected = get_well_known_mime_type(&carrier).expect("detected");
        match tier {
            FormatTier::Custom => prop_assert!(detected.starts_with("application/x-dnd")),
            FormatTier::Json => prop_assert_eq!(detected.as_str(), "application/json"),
            FormatTier::Legacy => prop_assert_eq!(detected.as_str(), "Text"),
        }
        if support == CarrierSupport::LegacyOnly {
            prop_assert_eq!(tier, FormatTier::Legacy);
        }
    }

    #[test]
    fn legacy_effect_is_only_touched_on_legacy_tier(
        payload in payload_strategy(),
        support in support_strategy(),
        allowed in effect_allowed_strategy(),
    ) {
        let mut carrier = MemoryCarrier::new(support);
        let tier = set_drag_data(&mut carrier, &payload, &allowed).expect("write");
        if tier != FormatTier::Legacy {
            prop_assert_eq!(carrier.allowed_effect(), None);
        }
    }

    #[test]
    fn foreign_drop_ignores_generic_formats(
        payload in payload_strategy(),
        support in prop_oneof![Just(CarrierSupport::NoCustom), Just(CarrierSupport::LegacyOnly)],
    ) {
        let mut carrier = MemoryCarrier::new(support);
        set_drag_data(&mut carrier, &payload, "all").expect("write");
        let read = get_drop_data(&carrier, false).expect("read");
        prop_assert!(read.is_empty());
    }

    #[test]
    fn foreign_garbage_never_errors_without_custom_format(
        names in prop::collection::vec("[a-z]{1,6}/[a-z]{1,6}", 0..5),
        value in ".{0,16}",
    ) {
        let mut carrier = MemoryCarrier::default();
        for name in &names {
            carrier.set_format(name, &value).expect("full carrier");
        }
        prop_assert!(get_drop_data(&carrier, false).is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Drop geometry
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn placement_matches_midpoint(
        x in -1.0e4f64..1.0e4,
        y in -1.0e4f64..1.0e4,
        top in -1.0e4f64..1.0e4,
        left in -1.0e4f64..1.0e4,
        width in 0.0f64..1.0e4,
        height in 0.0f64..1.0e4,
        horizontal in any::<bool>(),
    ) {
        let bounds = Bounds::new(top, left, width, height);
        let pointer = PointerPosition::new(x, y);
        let expected_before = if horizontal {
            x < left + width / 2.0
        } else {
            y < top + height / 2.0
        };
        let placement = placement_for(pointer, bounds, DropAxis::from_horizontal(horizontal));
        prop_assert_eq!(placement == Placement::Before, expected_before);
    }

    #[test]
    fn direct_child_is_a_child_of_the_container(
        tree in forest_strategy(),
        container_pick in any::<u32>(),
        target_pick in any::<u32>(),
    ) {
        let n = tree.len() as u32;
        let nodes: Vec<NodeId> = tree.nodes().collect();
        let container = nodes[(container_pick % n) as usize];
        let target = nodes[(target_pick % n) as usize];
        match get_direct_child(&tree, &container, &target) {
            Some(child) => {
                prop_assert_eq!(tree.parent(&child), Some(container));
                prop_assert!(child == target || is_ancestor(&tree, child, target));
            }
            None => prop_assert!(!is_ancestor(&tree, container, target)),
        }
    }
}
