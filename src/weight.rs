use serde::Serialize;

use crate::model::{InventoryNode, ItemDefinition, NestedInventory};

/// Listed weight of a single unit, with the bundle division applied.
///
/// A stack sold in bundles lists the weight of the whole bundle (50 arrows
/// weigh 1 lb together), so one arrow weighs 1/50 = 0.02. The fractional
/// result is preserved, never rounded.
pub fn per_item_weight(def: &ItemDefinition) -> f64 {
    def.weight.unwrap_or(0.0) / f64::from(def.bundle_size.max(1))
}

/// What a resolved node adds to the total carried by whatever holds it:
/// its own listed weight times quantity, plus, for containers with a
/// non-zero multiplier, the aggregate weight of its contents. A weightless
/// ("magic") container contributes only its own base weight; its contents
/// never propagate upward.
fn carried_weight(node: &InventoryNode) -> f64 {
    let item = node.item();
    let own = per_item_weight(&item.definition) * item.quantity;
    match node {
        InventoryNode::Item(_) => own,
        InventoryNode::Container(container) => {
            if container.item.definition.is_weightless() {
                own
            } else {
                own + container.current_weight
            }
        }
    }
}

/// Fill in `current_weight` for every container in the structure,
/// bottom-up. A container's aggregate covers only its contents, never its
/// own base weight, and is computed even for weightless containers so it
/// can still be displayed.
pub fn annotate(structure: &mut NestedInventory) {
    for node in &mut structure.root_items {
        annotate_node(node);
    }
}

fn annotate_node(node: &mut InventoryNode) {
    if let InventoryNode::Container(container) = node {
        for child in &mut container.contents {
            annotate_node(child);
        }
        container.current_weight = container.contents.iter().map(carried_weight).sum();
    }
}

/// Grand total carried by the character. Requires [`annotate`] to have run.
pub fn total_weight(structure: &NestedInventory) -> f64 {
    structure.root_items.iter().map(carried_weight).sum()
}

/// Ids of containers whose contents weigh nothing toward any ancestor
/// ("Bag of Holding" style items), in lookup-map order.
pub fn magic_container_ids(structure: &NestedInventory) -> Vec<String> {
    structure
        .containers
        .iter()
        .filter(|(_, entry)| entry.item.definition.is_weightless())
        .map(|(id, _)| id.clone())
        .collect()
}

/// Strength-derived carrying-capacity bands, in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encumbrance {
    pub normal: f64,
    pub heavy: f64,
    pub max: f64,
    pub drag_push_lift: f64,
}

/// Encumbrance thresholds for a strength score. A powerful-build trait
/// doubles every band.
pub fn encumbrance(strength_score: u32, has_powerful_build: bool) -> Encumbrance {
    let multiplier = if has_powerful_build { 2.0 } else { 1.0 };
    let strength = f64::from(strength_score);
    Encumbrance {
        normal: strength * 5.0 * multiplier,
        heavy: strength * 10.0 * multiplier,
        max: strength * 15.0 * multiplier,
        drag_push_lift: strength * 30.0 * multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;
    use crate::pipeline::ProcessOptions;
    use crate::tree;

    const CHARACTER: i64 = 9000;

    fn item(id: i64, parent: i64, weight: f64, quantity: f64) -> InventoryItem {
        InventoryItem {
            id,
            quantity,
            container_entity_id: parent,
            definition: ItemDefinition {
                name: format!("item-{id}"),
                weight: Some(weight),
                ..ItemDefinition::default()
            },
            ..InventoryItem::default()
        }
    }

    fn container(id: i64, parent: i64, weight: f64, multiplier: Option<f64>) -> InventoryItem {
        let mut c = item(id, parent, weight, 1.0);
        c.definition.is_container = true;
        c.definition.weight_multiplier = multiplier;
        c
    }

    fn build_annotated(items: &[InventoryItem]) -> NestedInventory {
        let mut structure = tree::build(items, CHARACTER, &ProcessOptions::default());
        annotate(&mut structure);
        structure
    }

    #[test]
    fn bundle_division_is_exact() {
        let def = ItemDefinition {
            weight: Some(1.0),
            bundle_size: 50,
            ..ItemDefinition::default()
        };
        assert_eq!(per_item_weight(&def), 0.02);
    }

    #[test]
    fn absent_weight_is_zero() {
        let def = ItemDefinition::default();
        assert_eq!(per_item_weight(&def), 0.0);
    }

    #[test]
    fn zero_bundle_size_is_normalized() {
        let def = ItemDefinition {
            weight: Some(4.0),
            bundle_size: 0,
            ..ItemDefinition::default()
        };
        assert_eq!(per_item_weight(&def), 4.0);
    }

    #[test]
    fn container_aggregates_contents() {
        // A (10 lb x1) and B (2 lb x10) inside C.
        let items = vec![
            container(1, CHARACTER, 5.0, None),
            item(2, 1, 10.0, 1.0),
            item(3, 1, 2.0, 10.0),
        ];
        let structure = build_annotated(&items);

        let c = structure.root_items[0].as_container().unwrap();
        assert_eq!(c.current_weight, 30.0);
        // The container's own base weight is on top of the aggregate.
        assert_eq!(total_weight(&structure), 35.0);
    }

    #[test]
    fn nested_containers_propagate_upward() {
        let items = vec![
            container(1, CHARACTER, 0.0, None),
            container(2, 1, 1.0, None),
            item(3, 2, 6.0, 2.0),
        ];
        let structure = build_annotated(&items);

        let outer = structure.root_items[0].as_container().unwrap();
        let inner = outer.contents[0].as_container().unwrap();
        assert_eq!(inner.current_weight, 12.0);
        // Outer sees the inner container's base weight plus its contents.
        assert_eq!(outer.current_weight, 13.0);
        assert_eq!(total_weight(&structure), 13.0);
    }

    #[test]
    fn weightless_container_blocks_propagation_but_keeps_its_aggregate() {
        let items = vec![
            container(1, CHARACTER, 15.0, Some(0.0)),
            item(2, 1, 100.0, 3.0),
        ];
        let structure = build_annotated(&items);

        let bag = structure.root_items[0].as_container().unwrap();
        // Still computed for display.
        assert_eq!(bag.current_weight, 300.0);
        // Only the bag's own base weight counts toward the character.
        assert_eq!(total_weight(&structure), 15.0);
    }

    #[test]
    fn weightless_container_nested_inside_a_normal_one() {
        let items = vec![
            container(1, CHARACTER, 2.0, None),
            container(2, 1, 15.0, Some(0.0)),
            item(3, 2, 50.0, 1.0),
        ];
        let structure = build_annotated(&items);

        let pack = structure.root_items[0].as_container().unwrap();
        // The bag's base weight propagates, the bag's contents do not.
        assert_eq!(pack.current_weight, 15.0);
        assert_eq!(total_weight(&structure), 17.0);
    }

    #[test]
    fn multiplier_of_one_is_a_normal_container() {
        let items = vec![container(1, CHARACTER, 0.0, Some(1.0)), item(2, 1, 8.0, 1.0)];
        let structure = build_annotated(&items);
        assert_eq!(total_weight(&structure), 8.0);
    }

    #[test]
    fn magic_containers_are_enumerated() {
        let items = vec![
            container(1, CHARACTER, 15.0, Some(0.0)),
            container(2, CHARACTER, 5.0, None),
            container(3, CHARACTER, 0.5, Some(0.0)),
        ];
        let structure = build_annotated(&items);
        assert_eq!(magic_container_ids(&structure), vec!["1", "3"]);
    }

    #[test]
    fn encumbrance_thresholds() {
        let bands = encumbrance(10, false);
        assert_eq!(bands.normal, 50.0);
        assert_eq!(bands.heavy, 100.0);
        assert_eq!(bands.max, 150.0);
        assert_eq!(bands.drag_push_lift, 300.0);
    }

    #[test]
    fn powerful_build_doubles_every_band() {
        let bands = encumbrance(14, true);
        assert_eq!(bands.normal, 140.0);
        assert_eq!(bands.heavy, 280.0);
        assert_eq!(bands.max, 420.0);
        assert_eq!(bands.drag_push_lift, 840.0);
    }
}
