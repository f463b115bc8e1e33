use inventory_gen::model::{Cost, InventoryItem, ItemDefinition};

pub const CHARACTER_ID: i64 = 9000;

pub fn item(id: i64, name: &str, weight: f64, quantity: f64, parent: i64) -> InventoryItem {
    InventoryItem {
        id,
        entity_type_id: 1439493548,
        quantity,
        container_entity_id: parent,
        definition: ItemDefinition {
            id: id * 10,
            name: name.to_string(),
            weight: Some(weight),
            filter_type: "Gear".to_string(),
            ..ItemDefinition::default()
        },
        ..InventoryItem::default()
    }
}

pub fn container(id: i64, name: &str, weight: f64, parent: i64) -> InventoryItem {
    let mut c = item(id, name, weight, 1.0, parent);
    c.definition.is_container = true;
    c
}

pub fn magic_container(id: i64, name: &str, weight: f64, parent: i64) -> InventoryItem {
    let mut c = container(id, name, weight, parent);
    c.definition.weight_multiplier = Some(0.0);
    c
}

pub fn with_cost(mut item: InventoryItem, quantity: f64, unit: &str) -> InventoryItem {
    item.definition.cost = Some(Cost {
        quantity,
        unit: unit.to_string(),
    });
    item
}

pub fn with_bundle(mut item: InventoryItem, bundle_size: u32) -> InventoryItem {
    item.definition.bundle_size = bundle_size;
    item
}
