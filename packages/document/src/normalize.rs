//! Storage-shape normalization.
//!
//! Tenant pages were persisted in several shapes over the product's history:
//! raw query-result arrays, records wrapping the document under a `content`
//! column, the canonical shape itself, and any of those re-encoded as a JSON
//! string. The chain below tries each detector in priority order; the first
//! match wins and anything unrecognized falls through to default synthesis.
//!
//! Detectors are pure `Option`-returning functions. No detector raises, so
//! malformed input can never escape this module as an error.

use crate::model::{Block, PageDocument, RootSettings};
use clipper_blocks::SectionKind;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

/// Produce a canonical document from whatever storage returned.
///
/// `raw` is the stored value, if any; `requested` is the section order to
/// synthesize when no valid document exists. Total: always returns a
/// structurally valid document.
pub fn normalize(raw: Option<&Value>, requested: &[SectionKind]) -> PageDocument {
    match raw {
        Some(value) => normalize_value(value, requested),
        None => {
            debug!("no stored document, synthesizing defaults");
            synthesize(requested)
        }
    }
}

fn normalize_value(value: &Value, requested: &[SectionKind]) -> PageDocument {
    // String-encoded payloads are parsed and re-dispatched through the same
    // chain; a parse failure is just another unrecognized shape.
    if let Value::String(encoded) = value {
        return match serde_json::from_str::<Value>(encoded) {
            Ok(parsed) => normalize_value(&parsed, requested),
            Err(error) => {
                warn!(%error, "stored document is a non-JSON string, synthesizing defaults");
                synthesize(requested)
            }
        };
    }

    if let Some(doc) = detect_row_array(value) {
        debug!("matched array-wrapped document shape");
        return doc;
    }

    if let Some(doc) = detect_wrapped_record(value) {
        debug!("matched nested-record document shape");
        return doc;
    }

    if let Some(doc) = detect_canonical(value) {
        return doc;
    }

    if !value.is_null() {
        warn!("stored document matched no known shape, synthesizing defaults");
    }
    synthesize(requested)
}

/// Default document for the requested sections: one block per section kind,
/// registered default props, and a fresh unique identifier each.
///
/// Identifiers are random (UUID v4) rather than derived from position and
/// wall-clock time, so repeated synthesis can never collide.
pub fn synthesize(requested: &[SectionKind]) -> PageDocument {
    let content = requested
        .iter()
        .map(|section| {
            let kind = section.block_kind();
            let id = format!("{}-{}", kind.tag(), Uuid::new_v4());
            Block::with_defaults(kind, id)
        })
        .collect();

    PageDocument {
        root: RootSettings::default(),
        content,
    }
}

/// Shape 1: a query-result array whose rows carry the document under a
/// `content` field. The first row holding a well-formed document wins.
fn detect_row_array(value: &Value) -> Option<PageDocument> {
    let rows = value.as_array()?;
    rows.iter()
        .filter_map(|row| row.as_object())
        .filter_map(|row| row.get("content"))
        .find_map(parse_document)
}

/// Shape 2: a record whose `content` field is itself an object carrying
/// `root` and a `content` array; the nested pair is lifted out.
fn detect_wrapped_record(value: &Value) -> Option<PageDocument> {
    let nested = value.as_object()?.get("content")?;
    let nested_obj = nested.as_object()?;
    if !nested_obj.contains_key("root") {
        return None;
    }
    parse_document(nested)
}

/// Shape 3: already canonical. An explicitly empty document is treated as
/// "no document" and falls through to synthesis.
fn detect_canonical(value: &Value) -> Option<PageDocument> {
    parse_document(value).filter(|doc| !doc.is_empty())
}

/// Structural parse of a candidate document. Requires a `content` array;
/// everything else is repaired: missing root becomes empty root props, and
/// entries that are not `{type: string, ...}` records are dropped.
fn parse_document(value: &Value) -> Option<PageDocument> {
    let obj = value.as_object()?;
    let entries = obj.get("content")?.as_array()?;

    let content = entries
        .iter()
        .filter_map(|entry| match parse_block(entry) {
            Some(block) => Some(block),
            None => {
                warn!("dropping malformed block entry during normalization");
                None
            }
        })
        .collect();

    let root = obj
        .get("root")
        .and_then(Value::as_object)
        .map(|root_obj| RootSettings {
            props: root_obj
                .get("props")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        })
        .unwrap_or_default();

    Some(PageDocument { root, content })
}

fn parse_block(entry: &Value) -> Option<Block> {
    let obj = entry.as_object()?;
    let kind = obj.get("type")?.as_str()?;
    let props = obj
        .get("props")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(Map::new);
    Some(Block::new(kind, props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipper_blocks::BlockKind;
    use serde_json::json;
    use std::collections::HashSet;

    fn sample_canonical() -> Value {
        json!({
            "root": { "props": {} },
            "content": [
                { "type": "Hero", "props": { "id": "h1", "title": "Bem-vindo" } },
                { "type": "Booking", "props": { "id": "b1" } }
            ]
        })
    }

    const NO_SECTIONS: &[SectionKind] = &[];

    #[test]
    fn test_all_legacy_shapes_normalize_identically() {
        let canonical = sample_canonical();

        let array_wrapped = json!([
            { "id": 7, "company_id": "t-1", "content": canonical.clone() }
        ]);
        let nested_record = json!({ "content": canonical.clone() });
        let string_encoded = Value::String(canonical.to_string());

        let from_canonical = normalize(Some(&canonical), NO_SECTIONS);
        let from_array = normalize(Some(&array_wrapped), NO_SECTIONS);
        let from_nested = normalize(Some(&nested_record), NO_SECTIONS);
        let from_string = normalize(Some(&string_encoded), NO_SECTIONS);

        assert_eq!(from_canonical, from_array);
        assert_eq!(from_canonical, from_nested);
        assert_eq!(from_canonical, from_string);
        assert_eq!(from_canonical.len(), 2);
        assert_eq!(from_canonical.content[0].kind, "Hero");
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_documents() {
        let once = normalize(Some(&sample_canonical()), NO_SECTIONS);
        let twice = normalize(Some(&serde_json::to_value(&once).unwrap()), NO_SECTIONS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_synthesis_yields_requested_sections_in_order() {
        let doc = synthesize(&SectionKind::DEFAULT_PAGE);

        assert_eq!(doc.len(), 4);
        let kinds: Vec<&str> = doc.content.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Hero", "ServicesGrid", "Team", "Booking"]);

        // Each block carries its kind's registered defaults (plus the id).
        for block in &doc.content {
            let kind = block.block_kind().unwrap();
            let mut expected = kind.default_props();
            expected.insert(
                "id".to_string(),
                block.props.get("id").cloned().unwrap(),
            );
            assert_eq!(block.props, expected);
        }

        // Identifiers are unique.
        let ids: HashSet<&str> = doc.content.iter().filter_map(|b| b.id()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_repeated_synthesis_never_collides() {
        let a = synthesize(&SectionKind::DEFAULT_PAGE);
        let b = synthesize(&SectionKind::DEFAULT_PAGE);

        let ids_a: HashSet<String> =
            a.content.iter().filter_map(|b| b.id().map(String::from)).collect();
        for block in &b.content {
            assert!(!ids_a.contains(block.id().unwrap()));
        }
    }

    #[test]
    fn test_explicitly_empty_document_triggers_synthesis() {
        let empty = json!({ "content": [], "root": { "props": {} } });
        let doc = normalize(Some(&empty), &[SectionKind::Hero]);

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.content[0].kind, "Hero");
    }

    #[test]
    fn test_non_json_string_triggers_synthesis() {
        let doc = normalize(
            Some(&Value::String("not json".to_string())),
            &[SectionKind::Hero, SectionKind::Booking],
        );
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_missing_input_triggers_synthesis() {
        let doc = normalize(None, &[SectionKind::Services]);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.content[0].block_kind(), Some(BlockKind::ServicesGrid));
    }

    #[test]
    fn test_unrecognized_shapes_trigger_synthesis() {
        for raw in [
            json!(42),
            json!(null),
            json!({ "rows": [] }),
            json!({ "content": "not an array" }),
            json!([{ "id": 1 }, { "id": 2 }]),
        ] {
            let doc = normalize(Some(&raw), &[SectionKind::Hero]);
            assert_eq!(doc.len(), 1, "input {raw} should synthesize");
            assert_eq!(doc.content[0].kind, "Hero");
        }
    }

    #[test]
    fn test_string_encoded_garbage_inside_valid_json_synthesizes() {
        // Parses as JSON but matches no shape.
        let doc = normalize(
            Some(&Value::String("[1, 2, 3]".to_string())),
            &[SectionKind::Booking],
        );
        assert_eq!(doc.content[0].kind, "Booking");
    }

    #[test]
    fn test_malformed_blocks_are_dropped_not_fatal() {
        let raw = json!({
            "root": { "props": {} },
            "content": [
                { "type": "Hero", "props": {} },
                "garbage",
                { "props": { "missing": "type" } },
                { "type": 12 },
                { "type": "Team" }
            ]
        });

        let doc = normalize(Some(&raw), NO_SECTIONS);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.content[0].kind, "Hero");
        assert_eq!(doc.content[1].kind, "Team");
        // Missing props object repairs to an empty one.
        assert!(doc.content[1].props.is_empty());
    }

    #[test]
    fn test_first_matching_row_wins_in_array_shape() {
        let raw = json!([
            { "id": 1, "content": { "note": "no content array here" } },
            { "id": 2, "content": sample_canonical() },
            { "id": 3, "content": { "content": [{ "type": "Team", "props": {} }] } }
        ]);

        let doc = normalize(Some(&raw), NO_SECTIONS);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.content[0].kind, "Hero");
    }

    #[test]
    fn test_nested_record_requires_root_key() {
        // A bare `{content: {content: [...]}}` without `root` is not the
        // nested-record shape.
        let raw = json!({
            "content": { "content": [{ "type": "Hero", "props": {} }] }
        });
        let doc = normalize(Some(&raw), &[SectionKind::Booking]);
        assert_eq!(doc.content[0].kind, "Booking");
    }

    #[test]
    fn test_root_props_survive_normalization() {
        let raw = json!({
            "root": { "props": { "theme": "dark" } },
            "content": [{ "type": "Hero", "props": {} }]
        });
        let doc = normalize(Some(&raw), NO_SECTIONS);
        assert_eq!(doc.root.props["theme"], "dark");
    }
}
