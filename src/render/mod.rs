mod default;
pub mod xml;

pub use default::DefaultXmlStrategy;

use crate::model::{ContainerNode, InventoryItem, InventoryNode, NestedInventory};
use crate::pipeline::ProcessOptions;
use crate::sanitize::Sanitize;

/// Everything a strategy needs besides the node itself.
///
/// Bundled so fields can be added without changing the `RenderStrategy`
/// signature.
pub struct RenderContext<'a> {
    pub options: &'a ProcessOptions,
    pub sanitizer: &'a dyn Sanitize,
}

impl RenderContext<'_> {
    /// A plain-text value, passed through the sanitizer when
    /// `sanitize_output` is set.
    pub fn text(&self, raw: &str) -> String {
        if self.options.sanitize_output {
            self.sanitizer.sanitize_text(raw)
        } else {
            raw.to_string()
        }
    }

    /// A rich-text value, passed through the sanitizer when
    /// `sanitize_output` is set.
    pub fn rich(&self, raw: &str) -> String {
        if self.options.sanitize_output {
            self.sanitizer.sanitize_html(raw)
        } else {
            raw.to_string()
        }
    }
}

/// Pluggable markup producer for resolved inventory nodes.
///
/// The walker owns traversal and index assignment; strategies only turn one
/// node into one fragment. `index` is the node's global 1-based depth-first
/// sequence number, `depth` its nesting level (0 at the character root).
/// `render_container` receives its contents already rendered and must embed
/// them inside a nested list marker.
pub trait RenderStrategy {
    fn render_item(
        &self,
        item: &InventoryItem,
        index: u32,
        depth: usize,
        ctx: &RenderContext<'_>,
    ) -> String;

    fn render_container(
        &self,
        container: &ContainerNode,
        contents: &[String],
        index: u32,
        depth: usize,
        ctx: &RenderContext<'_>,
    ) -> String;
}

/// Depth-first render of the whole structure, wrapped in the top-level
/// nested-list element. An empty inventory yields the wrapper alone.
pub fn render_inventory(
    structure: &NestedInventory,
    strategy: &dyn RenderStrategy,
    ctx: &RenderContext<'_>,
) -> String {
    let mut counter = 0;
    let mut fragments = Vec::with_capacity(structure.root_items.len());
    for node in &structure.root_items {
        fragments.push(render_node(node, 0, &mut counter, strategy, ctx));
    }
    xml::wrap("inventorylist", &fragments.concat())
}

fn render_node(
    node: &InventoryNode,
    depth: usize,
    counter: &mut u32,
    strategy: &dyn RenderStrategy,
    ctx: &RenderContext<'_>,
) -> String {
    *counter += 1;
    let index = *counter;
    match node {
        InventoryNode::Item(item) => strategy.render_item(item, index, depth, ctx),
        InventoryNode::Container(container) => {
            let contents: Vec<String> = container
                .contents
                .iter()
                .map(|child| render_node(child, depth + 1, counter, strategy, ctx))
                .collect();
            strategy.render_container(container, &contents, index, depth, ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContainerNode, InventoryItem, ItemDefinition};
    use crate::sanitize::BasicSanitizer;
    use std::collections::BTreeMap;

    /// Records the order and arguments of every hook call.
    struct TraceStrategy;

    impl RenderStrategy for TraceStrategy {
        fn render_item(
            &self,
            item: &InventoryItem,
            index: u32,
            depth: usize,
            _ctx: &RenderContext<'_>,
        ) -> String {
            format!("[item {} #{index} d{depth}]", item.id)
        }

        fn render_container(
            &self,
            container: &ContainerNode,
            contents: &[String],
            index: u32,
            depth: usize,
            _ctx: &RenderContext<'_>,
        ) -> String {
            format!(
                "[box {} #{index} d{depth} {}]",
                container.item.id,
                contents.concat()
            )
        }
    }

    fn leaf(id: i64) -> InventoryNode {
        InventoryNode::Item(InventoryItem {
            id,
            quantity: 1.0,
            ..InventoryItem::default()
        })
    }

    fn boxed(id: i64, contents: Vec<InventoryNode>) -> InventoryNode {
        InventoryNode::Container(ContainerNode {
            item: InventoryItem {
                id,
                quantity: 1.0,
                definition: ItemDefinition {
                    is_container: true,
                    ..ItemDefinition::default()
                },
                ..InventoryItem::default()
            },
            contents,
            current_weight: 0.0,
        })
    }

    fn structure(root_items: Vec<InventoryNode>) -> NestedInventory {
        NestedInventory {
            character_id: 1,
            root_items,
            containers: BTreeMap::new(),
        }
    }

    #[test]
    fn indices_are_sequential_depth_first() {
        let inv = structure(vec![
            leaf(10),
            boxed(20, vec![leaf(21), boxed(22, vec![leaf(23)])]),
            leaf(30),
        ]);
        let options = ProcessOptions::default();
        let ctx = RenderContext {
            options: &options,
            sanitizer: &BasicSanitizer,
        };

        let out = render_inventory(&inv, &TraceStrategy, &ctx);
        assert_eq!(
            out,
            "<inventorylist>\
             [item 10 #1 d0]\
             [box 20 #2 d0 [item 21 #3 d1][box 22 #4 d1 [item 23 #5 d2]]]\
             [item 30 #6 d0]\
             </inventorylist>"
        );
    }

    #[test]
    fn empty_structure_renders_the_bare_wrapper() {
        let options = ProcessOptions::default();
        let ctx = RenderContext {
            options: &options,
            sanitizer: &BasicSanitizer,
        };
        let out = render_inventory(&structure(vec![]), &TraceStrategy, &ctx);
        assert_eq!(out, "<inventorylist></inventorylist>");
    }

    #[test]
    fn context_respects_sanitize_toggle() {
        let options = ProcessOptions::default();
        let ctx = RenderContext {
            options: &options,
            sanitizer: &BasicSanitizer,
        };
        assert_eq!(ctx.text("a & b"), "a &amp; b");

        let raw_options = ProcessOptions {
            sanitize_output: false,
            ..ProcessOptions::default()
        };
        let raw_ctx = RenderContext {
            options: &raw_options,
            sanitizer: &BasicSanitizer,
        };
        assert_eq!(raw_ctx.text("a & b"), "a & b");
        assert_eq!(raw_ctx.rich("a & b"), "a & b");
    }
}
