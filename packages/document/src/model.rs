//! Canonical page-document model.
//!
//! Invariants:
//! - `content` is always present and always a vector (possibly empty);
//!   vector order is render order and survives every round trip.
//! - `root.props` is always an object; absence normalizes to `{}`.
//! - `Block.kind` keeps the raw `type` tag as a string so that blocks with
//!   unknown kinds survive load/save cycles instead of being destroyed; the
//!   renderer decides what to do with them.

use clipper_blocks::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page-level settings. Reserved for page-wide wrapping; carries no required
/// keys today.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RootSettings {
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// One unit of page content: a kind tag and a props object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stored `type` tag. May be a tag no registry entry resolves (legacy or
    /// corrupt data); such blocks are skipped at render time.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub props: Map<String, Value>,
}

impl Block {
    pub fn new(kind: impl Into<String>, props: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            props,
        }
    }

    /// Fresh block of a registered kind, carrying that kind's default props
    /// and the given identifier.
    pub fn with_defaults(kind: BlockKind, id: impl Into<String>) -> Self {
        let mut props = kind.default_props();
        props.insert("id".to_string(), Value::String(id.into()));
        Self {
            kind: kind.tag().to_string(),
            props,
        }
    }

    /// Registry entry for this block's tag, if any.
    pub fn block_kind(&self) -> Option<BlockKind> {
        BlockKind::from_tag(&self.kind)
    }

    /// Advisory identifier. Not guaranteed unique; nothing reconciles on it.
    pub fn id(&self) -> Option<&str> {
        self.props.get("id").and_then(Value::as_str)
    }
}

/// The full ordered block list plus root settings for one tenant's page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub root: RootSettings,

    #[serde(default)]
    pub content: Vec<Block>,
}

impl PageDocument {
    /// Structurally valid document with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(content: Vec<Block>) -> Self {
        Self {
            root: RootSettings::default(),
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}
