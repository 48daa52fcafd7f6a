//! Per-kind registry entries: defaults and field schemas.
//!
//! The registry is the [`BlockKind`] enum itself; this module attaches the
//! data each variant carries. Rendering is deliberately not here: the
//! renderer crate matches on the same enum, so adding a kind without a
//! renderer arm fails to compile rather than failing at runtime.

use crate::fields::{Field, SelectOption};
use crate::kind::BlockKind;
use crate::props::{
    BookingProps, HeroProps, ServiceListProps, ServicesGridProps, TeamProps,
};
use serde_json::{Map, Value};

/// Everything the editor surface needs to know about one block kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDefinition {
    pub kind: BlockKind,
    /// Complete, standalone default props for a freshly created block.
    pub defaults: Map<String, Value>,
    /// Operator-editable props and their controls.
    pub fields: Vec<Field>,
}

impl BlockKind {
    pub fn definition(&self) -> BlockDefinition {
        BlockDefinition {
            kind: *self,
            defaults: self.default_props(),
            fields: self.fields(),
        }
    }

    /// Registered default props as a JSON object.
    pub fn default_props(&self) -> Map<String, Value> {
        let value = match self {
            BlockKind::Hero => serde_json::to_value(HeroProps::default()),
            BlockKind::ServicesGrid => serde_json::to_value(ServicesGridProps::default()),
            BlockKind::ServiceList => serde_json::to_value(ServiceListProps::default()),
            BlockKind::Team => serde_json::to_value(TeamProps::default()),
            BlockKind::Booking => serde_json::to_value(BookingProps::default()),
        };
        match value {
            Ok(Value::Object(map)) => map,
            // Props records are plain data; serialization cannot fail in
            // practice, but the registry stays total regardless.
            _ => Map::new(),
        }
    }

    /// Editable-field schema for this kind.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            BlockKind::Hero => vec![
                Field::text("title", "Título"),
                Field::textarea("subtitle", "Subtítulo"),
                Field::text("cta_label", "Texto do botão"),
                Field::text("cta_link", "Link do botão"),
                Field::image("image", "Imagem de fundo", "pages"),
                Field::color("background_color", "Cor de fundo"),
                Field::color("text_color", "Cor do texto"),
            ],
            BlockKind::ServicesGrid => vec![
                Field::text("title", "Título"),
                Field::textarea("subtitle", "Subtítulo"),
                Field::list(
                    "services",
                    "Serviços",
                    vec![
                        Field::text("title", "Nome"),
                        Field::text("price", "Preço"),
                        Field::text("duration", "Duração"),
                        Field::textarea("description", "Descrição"),
                    ],
                ),
                Field::select(
                    "columns",
                    "Colunas",
                    vec![
                        SelectOption::new("2 colunas", "2"),
                        SelectOption::new("3 colunas", "3"),
                        SelectOption::new("4 colunas", "4"),
                    ],
                ),
                Field::color("background_color", "Cor de fundo"),
                Field::color("accent_color", "Cor de destaque"),
            ],
            BlockKind::ServiceList => vec![
                Field::text("heading", "Título"),
                Field::list(
                    "items",
                    "Serviços",
                    vec![
                        Field::text("name", "Nome"),
                        Field::text("price", "Preço"),
                        Field::text("duration", "Duração"),
                    ],
                ),
                Field::color("background_color", "Cor de fundo"),
            ],
            BlockKind::Team => vec![
                Field::text("title", "Título"),
                Field::textarea("subtitle", "Subtítulo"),
                Field::list(
                    "members",
                    "Equipe",
                    vec![
                        Field::text("name", "Nome"),
                        Field::text("role", "Função"),
                        Field::image("photo", "Foto", "team"),
                        Field::text("instagram", "Instagram"),
                    ],
                ),
                Field::color("background_color", "Cor de fundo"),
            ],
            BlockKind::Booking => vec![
                Field::text("title", "Título"),
                Field::textarea("subtitle", "Subtítulo"),
                Field::text("button_label", "Texto do botão"),
                Field::text("button_link", "Link do botão"),
                Field::color("background_color", "Cor de fundo"),
                Field::color("accent_color", "Cor de destaque"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldControl;

    #[test]
    fn test_every_kind_has_defaults_and_fields() {
        for kind in BlockKind::ALL {
            let def = kind.definition();
            assert!(!def.defaults.is_empty(), "{} has empty defaults", kind);
            assert!(!def.fields.is_empty(), "{} has no fields", kind);
        }
    }

    #[test]
    fn test_defaults_are_valid_standalone_props() {
        // Every kind's defaults must deserialize back into its own record.
        let grid = BlockKind::ServicesGrid.default_props();
        let parsed: crate::props::ServicesGridProps =
            serde_json::from_value(serde_json::Value::Object(grid)).unwrap();
        assert_eq!(parsed, crate::props::ServicesGridProps::default());
    }

    #[test]
    fn test_editable_fields_exist_in_defaults() {
        // A field whose key is missing from the defaults would edit nothing.
        // Optional keys (image uploads) are exempt: absent means placeholder.
        for kind in BlockKind::ALL {
            let def = kind.definition();
            for field in &def.fields {
                if matches!(field.control, FieldControl::ImageUpload { .. }) {
                    continue;
                }
                assert!(
                    def.defaults.contains_key(&field.key),
                    "{}: field {} missing from defaults",
                    kind,
                    field.key
                );
            }
        }
    }

    #[test]
    fn test_services_grid_defaults_use_title_key() {
        let defaults = BlockKind::ServicesGrid.default_props();
        let first = &defaults["services"][0];
        assert!(first.get("title").is_some());
        assert!(first.get("name").is_none());
    }

    #[test]
    fn test_service_list_defaults_use_name_key() {
        let defaults = BlockKind::ServiceList.default_props();
        let first = &defaults["items"][0];
        assert!(first.get("name").is_some());
        assert!(first.get("title").is_none());
    }
}
