use serde::{Deserialize, Serialize};

use crate::model::{InventoryItem, NestedInventory};
use crate::render::{self, DefaultXmlStrategy, RenderContext, RenderStrategy};
use crate::sanitize::{BasicSanitizer, Sanitize};
use crate::tree;
use crate::weight;

/// Processing switches. Omitted keys fall back to the defaults below and
/// unknown keys are ignored, so partially specified option objects from the
/// host application deserialize as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessOptions {
    /// Keep items with quantity ≤ 0 in the structure and markup.
    pub include_zero_quantity_items: bool,
    /// Nest contents under their containers; false renders a flat list.
    pub respect_container_hierarchy: bool,
    /// Emit the extra attunement/equipped fields.
    pub generate_detailed_xml: bool,
    /// Route text through the sanitizer collaborator.
    pub sanitize_output: bool,
    /// Emit the cost field.
    pub include_cost_information: bool,
    /// Mark every rendered item as identified.
    pub mark_items_as_identified: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            include_zero_quantity_items: false,
            respect_container_hierarchy: true,
            generate_detailed_xml: false,
            sanitize_output: true,
            include_cost_information: true,
            mark_items_as_identified: true,
        }
    }
}

/// Summary counters for one processed batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// Input batch size; filtering affects rendering, never this count.
    pub total_items: usize,
    pub container_count: usize,
    pub magic_containers: usize,
    pub total_weight: f64,
}

/// Everything one `process` call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    pub structure: NestedInventory,
    pub markup: String,
    pub stats: InventoryStats,
}

/// The assembled pipeline: tree building, weight annotation, and rendering
/// behind one entry point.
///
/// Stateless across calls: the structure is rebuilt from the caller's flat
/// list every time and the input is never mutated, so identical input and
/// options produce byte-identical markup. The rendering strategy and the
/// sanitizer are replaceable without touching tree or weight logic.
pub struct InventoryPipeline {
    strategy: Box<dyn RenderStrategy>,
    sanitizer: Box<dyn Sanitize>,
}

impl InventoryPipeline {
    pub fn new() -> Self {
        Self {
            strategy: Box::new(DefaultXmlStrategy),
            sanitizer: Box::new(BasicSanitizer),
        }
    }

    /// Substitute the rendering strategy for all subsequent calls.
    pub fn set_strategy(&mut self, strategy: Box<dyn RenderStrategy>) {
        self.strategy = strategy;
    }

    /// Substitute the sanitizer collaborator for all subsequent calls.
    pub fn set_sanitizer(&mut self, sanitizer: Box<dyn Sanitize>) {
        self.sanitizer = sanitizer;
    }

    /// Resolve, weigh, and render one character's flat item list.
    pub fn process(
        &self,
        items: &[InventoryItem],
        character_id: i64,
        options: &ProcessOptions,
    ) -> ProcessOutcome {
        let mut structure = tree::build(items, character_id, options);
        weight::annotate(&mut structure);

        let ctx = RenderContext {
            options,
            sanitizer: self.sanitizer.as_ref(),
        };
        let markup = render::render_inventory(&structure, self.strategy.as_ref(), &ctx);

        let stats = InventoryStats {
            total_items: items.len(),
            container_count: structure.container_count(),
            magic_containers: weight::magic_container_ids(&structure).len(),
            total_weight: weight::total_weight(&structure),
        };

        ProcessOutcome {
            structure,
            markup,
            stats,
        }
    }
}

impl Default for InventoryPipeline {
    fn default() -> Self {
        Self::new()
    }
}
