use super::xml::{self, FieldKind};
use super::{RenderContext, RenderStrategy};
use crate::model::{ContainerNode, InventoryItem};
use crate::weight;

/// The stock strategy producing the consuming application's item schema.
///
/// Field order and type annotations are fixed by the consumer and
/// reproduced exactly: identified flag, locked flag, name, type, per-unit
/// weight, count, then the optional cost/attunement/description fields.
/// Containers append a `<subitems>` list wrapping their rendered contents,
/// present and empty for an empty container.
pub struct DefaultXmlStrategy;

impl DefaultXmlStrategy {
    fn item_fields(&self, item: &InventoryItem, ctx: &RenderContext<'_>) -> String {
        let def = &item.definition;
        let mut fields = String::new();

        let identified = if ctx.options.mark_items_as_identified {
            "1"
        } else {
            "0"
        };
        fields.push_str(&xml::typed_element("isidentified", FieldKind::Number, identified));
        fields.push_str(&xml::typed_element("locked", FieldKind::Number, "1"));
        fields.push_str(&xml::typed_element(
            "name",
            FieldKind::String,
            &ctx.text(&def.name),
        ));
        fields.push_str(&xml::typed_element(
            "type",
            FieldKind::String,
            &ctx.text(def.display_type()),
        ));
        fields.push_str(&xml::typed_element(
            "weight",
            FieldKind::Number,
            &xml::format_number(weight::per_item_weight(def)),
        ));
        fields.push_str(&xml::typed_element(
            "count",
            FieldKind::Number,
            &xml::format_number(item.quantity),
        ));

        if ctx.options.include_cost_information {
            let cost = match &def.cost {
                Some(cost) => format!("{} {}", xml::format_number(cost.quantity), cost.unit),
                None => "-".to_string(),
            };
            fields.push_str(&xml::typed_element("cost", FieldKind::String, &ctx.text(&cost)));
        }

        if ctx.options.generate_detailed_xml {
            let attuned = if item.is_attuned { "1" } else { "0" };
            let equipped = if item.equipped { "1" } else { "0" };
            fields.push_str(&xml::typed_element("isattuned", FieldKind::Number, attuned));
            fields.push_str(&xml::typed_element("equipped", FieldKind::Number, equipped));
        }

        if let Some(description) = &def.description {
            fields.push_str(&xml::typed_element(
                "description",
                FieldKind::FormattedText,
                &ctx.rich(description),
            ));
        }

        fields
    }
}

impl RenderStrategy for DefaultXmlStrategy {
    fn render_item(
        &self,
        item: &InventoryItem,
        index: u32,
        _depth: usize,
        ctx: &RenderContext<'_>,
    ) -> String {
        xml::wrap(&xml::node_tag(index), &self.item_fields(item, ctx))
    }

    fn render_container(
        &self,
        container: &ContainerNode,
        contents: &[String],
        index: u32,
        _depth: usize,
        ctx: &RenderContext<'_>,
    ) -> String {
        let mut fields = self.item_fields(&container.item, ctx);
        fields.push_str(&xml::wrap("subitems", &contents.concat()));
        xml::wrap(&xml::node_tag(index), &fields)
    }
}
