use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{ContainerEntry, ContainerNode, InventoryItem, InventoryNode, NestedInventory};
use crate::pipeline::ProcessOptions;

/// Build the nested inventory structure from a flat item list.
///
/// Items are partitioned into buckets by their parent pointer, every
/// container is registered in the flat lookup map, and the character's
/// root-level items are resolved depth-first. Unresolvable parent pointers
/// (ids absent from the batch, ids of non-container items, parent cycles)
/// never fail the build: the affected item is placed at the character root
/// instead, and the descent guard demotes a revisited container to an
/// ordinary leaf.
pub fn build(
    items: &[InventoryItem],
    character_id: i64,
    options: &ProcessOptions,
) -> NestedInventory {
    // Parent pointers arrive as ids of either the character or another item;
    // buckets are keyed by the string form, the shape the lookup map exposes.
    let mut buckets: HashMap<String, Vec<&InventoryItem>> = HashMap::new();
    for item in items {
        buckets
            .entry(item.container_entity_id.to_string())
            .or_default()
            .push(item);
    }

    // Register every container with its direct children. Registration is
    // unconditional; the zero-quantity filter applies to membership only.
    let mut containers: BTreeMap<String, ContainerEntry> = BTreeMap::new();
    for item in items {
        if !item.definition.is_container {
            continue;
        }
        let contents = buckets
            .get(&item.id.to_string())
            .map(|children| {
                children
                    .iter()
                    .filter(|child| include_item(child, options))
                    .map(|child| (*child).clone())
                    .collect()
            })
            .unwrap_or_default();
        containers.insert(
            item.id.to_string(),
            ContainerEntry {
                item: item.clone(),
                contents,
            },
        );
    }

    if !options.respect_container_hierarchy {
        let root_items = items
            .iter()
            .filter(|item| include_item(item, options))
            .map(|item| InventoryNode::Item((*item).clone()))
            .collect();
        return NestedInventory {
            character_id,
            root_items,
            containers,
        };
    }

    let promoted = promote_unresolvable(items, character_id);

    let mut root_items = Vec::new();
    for item in items {
        let at_root = item.container_entity_id == character_id || promoted.contains(&item.id);
        if !at_root || !include_item(item, options) {
            continue;
        }
        let mut path = HashSet::new();
        root_items.push(resolve_node(item, &buckets, options, &mut path));
    }

    NestedInventory {
        character_id,
        root_items,
        containers,
    }
}

fn include_item(item: &InventoryItem, options: &ProcessOptions) -> bool {
    options.include_zero_quantity_items || item.quantity > 0.0
}

/// Ids that must be placed at the character root even though their parent
/// pointer says otherwise: direct references to ids that are not containers
/// in this batch, and one representative per parent cycle (the first member
/// in input order; descending from it covers the rest of the cycle).
///
/// Each chain is walked at most one step per distinct id, so the pass is
/// bounded by the batch size with no arbitrary depth constant.
fn promote_unresolvable(items: &[InventoryItem], character_id: i64) -> HashSet<i64> {
    let container_ids: HashSet<i64> = items
        .iter()
        .filter(|item| item.definition.is_container)
        .map(|item| item.id)
        .collect();
    let parent_of: HashMap<i64, i64> = items
        .iter()
        .map(|item| (item.id, item.container_entity_id))
        .collect();

    let mut promoted = HashSet::new();
    let mut represented: HashSet<i64> = HashSet::new();

    for item in items {
        if item.container_entity_id == character_id {
            continue;
        }
        if !container_ids.contains(&item.container_entity_id) {
            tracing::warn!(
                "item {} references unresolved container {}; placing at character root",
                item.id,
                item.container_entity_id
            );
            promoted.insert(item.id);
            continue;
        }
        if represented.contains(&item.id) {
            continue;
        }

        let mut seen = HashSet::new();
        seen.insert(item.id);
        let mut current = item.container_entity_id;
        loop {
            if current == character_id || !container_ids.contains(&current) {
                // Reaches the root, or breaks further up; in the latter
                // case the broken ancestor is the one that gets promoted.
                break;
            }
            if !seen.insert(current) {
                if current == item.id {
                    // The chain loops back to this item: it is the first
                    // cycle member in input order and becomes the root
                    // representative for the whole cycle.
                    tracing::warn!(
                        "item {} is part of a container cycle; placing at character root",
                        item.id
                    );
                    promoted.insert(item.id);
                    represented.extend(seen.iter().copied());
                }
                break;
            }
            current = match parent_of.get(&current) {
                Some(parent) => *parent,
                None => break,
            };
        }
    }

    promoted
}

fn resolve_node(
    item: &InventoryItem,
    buckets: &HashMap<String, Vec<&InventoryItem>>,
    options: &ProcessOptions,
    path: &mut HashSet<i64>,
) -> InventoryNode {
    if !item.definition.is_container {
        return InventoryNode::Item(item.clone());
    }

    path.insert(item.id);
    let mut contents = Vec::new();
    if let Some(children) = buckets.get(&item.id.to_string()) {
        for child in children {
            if !include_item(child, options) {
                continue;
            }
            if child.definition.is_container && path.contains(&child.id) {
                // Revisited container: stop descent at the repeat and emit
                // it as an ordinary leaf, never re-entering it.
                contents.push(InventoryNode::Item((*child).clone()));
            } else {
                contents.push(resolve_node(child, buckets, options, path));
            }
        }
    }
    path.remove(&item.id);

    InventoryNode::Container(ContainerNode {
        item: item.clone(),
        contents,
        current_weight: 0.0,
    })
}
