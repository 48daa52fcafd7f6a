//! # Page Editor
//!
//! One editing session over one tenant's page document.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Normalize → Edit → Preview → Save
//!   ↓        ↓         ↓       ↓        ↓
//! Store  Canonical  Ops     HTML    Store
//! ```
//!
//! Mutations are structural (add, remove, move, wholesale props
//! replacement). The document only leaves the session through `save`, which
//! upserts it whole; a failed save leaves the in-memory state untouched so
//! the operator can retry without losing edits.

use crate::errors::EditorError;
use crate::store::{ImageStore, PageStore, StoreError};
use clipper_blocks::{BlockKind, SectionKind};
use clipper_document::{normalize, synthesize, Block, PageDocument};
use clipper_renderer::{render_page, RenderOptions};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

/// Editable page session for one tenant.
#[derive(Debug)]
pub struct PageEditor {
    tenant_id: String,

    /// Current document. Always canonical.
    document: PageDocument,

    /// Increments on each mutation.
    version: u64,

    /// Unsaved changes flag.
    dirty: bool,
}

impl PageEditor {
    /// Open a session over an already-canonical document.
    pub fn new(tenant_id: impl Into<String>, document: PageDocument) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            document,
            version: 0,
            dirty: false,
        }
    }

    /// Fetch the tenant's stored page and open a session over it.
    ///
    /// Missing or malformed remote state silently becomes a first-run
    /// default page for `requested` sections; only a store failure is
    /// surfaced, and it is retryable.
    pub async fn load(
        store: &dyn PageStore,
        tenant_id: &str,
        requested: &[SectionKind],
    ) -> Result<Self, EditorError> {
        let raw = store
            .fetch(tenant_id)
            .await
            .map_err(EditorError::Persistence)?;

        let document = normalize(raw.as_ref(), requested);
        debug!(tenant_id, blocks = document.len(), "loaded page document");
        Ok(Self::new(tenant_id, document))
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a fresh block of a registered kind, with its default props and
    /// a new identifier. Returns the index it was placed at.
    pub fn add_block(&mut self, kind: BlockKind) -> usize {
        let id = format!("{}-{}", kind.tag(), Uuid::new_v4());
        self.document.content.push(Block::with_defaults(kind, id));
        self.touch();
        self.document.len() - 1
    }

    /// Remove the block at `index` and return it.
    pub fn remove_block(&mut self, index: usize) -> Result<Block, EditorError> {
        self.check_index(index)?;
        let block = self.document.content.remove(index);
        self.touch();
        Ok(block)
    }

    /// Relocate the block at `from` so it ends up at position `to`.
    /// `to` is clamped to the resulting length.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        self.check_index(from)?;
        let block = self.document.content.remove(from);
        let to = to.min(self.document.content.len());
        self.document.content.insert(to, block);
        self.touch();
        Ok(())
    }

    /// Replace the props of the block at `index` wholesale. There is no
    /// partial/patch contract; the caller supplies the complete object.
    pub fn replace_props(
        &mut self,
        index: usize,
        props: Map<String, Value>,
    ) -> Result<(), EditorError> {
        self.check_index(index)?;
        self.document.content[index].props = props;
        self.touch();
        Ok(())
    }

    /// Discard the current document, saved or not, and start over from a
    /// freshly synthesized default page.
    pub fn reset(&mut self, requested: &[SectionKind]) {
        self.document = synthesize(requested);
        self.touch();
    }

    /// Hand the current document to the persistence collaborator.
    ///
    /// Whole-document upsert, last write wins. On failure the in-memory
    /// document is untouched and the error is retryable; concurrent saves
    /// are not guarded against.
    pub async fn save(&mut self, store: &dyn PageStore) -> Result<(), EditorError> {
        // Round-trip through the normalizer so only canonical shapes are
        // ever persisted, even when the host handed us a hand-built document.
        let value = serde_json::to_value(&self.document)
            .map_err(|e| EditorError::Persistence(StoreError::Rejected(e.to_string())))?;
        let canonical = normalize(Some(&value), &[]);

        match store.upsert(&self.tenant_id, &canonical).await {
            Ok(()) => {
                self.dirty = false;
                debug!(tenant_id = %self.tenant_id, "page document saved");
                Ok(())
            }
            Err(error) => {
                warn!(tenant_id = %self.tenant_id, %error, "save rejected, edits preserved");
                Err(EditorError::Persistence(error))
            }
        }
    }

    /// Render the current document to HTML.
    pub fn preview(&self, options: RenderOptions) -> String {
        render_page(&self.document, options)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        let len = self.document.len();
        if index >= len {
            return Err(EditorError::BlockOutOfBounds { index, len });
        }
        Ok(())
    }
}

/// Upload an image through the collaborator and return its public URL.
///
/// The caller writes the URL into a prop via
/// [`PageEditor::replace_props`] on success; on failure nothing is written,
/// so no broken URL can end up in a document.
pub async fn upload_image(
    store: &dyn ImageStore,
    data: Vec<u8>,
    category: &str,
) -> Result<String, EditorError> {
    store
        .upload(data, category)
        .await
        .map_err(EditorError::Upload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn editor_with_default_page() -> PageEditor {
        PageEditor::new("tenant-1", synthesize(&SectionKind::DEFAULT_PAGE))
    }

    #[test]
    fn test_new_session_is_clean() {
        let editor = editor_with_default_page();
        assert_eq!(editor.version(), 0);
        assert!(!editor.is_dirty());
        assert_eq!(editor.document().len(), 4);
    }

    #[test]
    fn test_add_block_appends_defaults_with_fresh_id() {
        let mut editor = editor_with_default_page();
        let index = editor.add_block(BlockKind::ServiceList);

        assert_eq!(index, 4);
        let block = &editor.document().content[index];
        assert_eq!(block.kind, "ServiceList");
        assert!(block.id().is_some());
        assert!(editor.is_dirty());
        assert_eq!(editor.version(), 1);
    }

    #[test]
    fn test_added_blocks_get_distinct_ids() {
        let mut editor = editor_with_default_page();
        let a = editor.add_block(BlockKind::Hero);
        let b = editor.add_block(BlockKind::Hero);

        let id_a = editor.document().content[a].id().unwrap().to_string();
        let id_b = editor.document().content[b].id().unwrap().to_string();
        assert_ne!(id_a, id_b);
    }

    #[test]
    fn test_move_block_reorders_content() {
        let mut editor = editor_with_default_page();
        editor.move_block(0, 2).unwrap();

        let kinds: Vec<&str> = editor
            .document()
            .content
            .iter()
            .map(|b| b.kind.as_str())
            .collect();
        assert_eq!(kinds, vec!["ServicesGrid", "Team", "Hero", "Booking"]);
    }

    #[test]
    fn test_move_block_clamps_destination() {
        let mut editor = editor_with_default_page();
        editor.move_block(0, 99).unwrap();
        assert_eq!(editor.document().content[3].kind, "Hero");
    }

    #[test]
    fn test_remove_block_out_of_bounds() {
        let mut editor = editor_with_default_page();
        let err = editor.remove_block(10).unwrap_err();
        assert!(matches!(
            err,
            EditorError::BlockOutOfBounds { index: 10, len: 4 }
        ));
        // Failed operation leaves the session untouched.
        assert!(!editor.is_dirty());
        assert_eq!(editor.version(), 0);
    }

    #[test]
    fn test_replace_props_is_wholesale() {
        let mut editor = editor_with_default_page();
        let props = match json!({ "id": "h-1", "title": "Novo título" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        editor.replace_props(0, props.clone()).unwrap();

        // Old keys are gone entirely, not merged.
        let block = &editor.document().content[0];
        assert_eq!(block.props, props);
        assert!(block.props.get("subtitle").is_none());
    }

    #[test]
    fn test_reset_synthesizes_fresh_defaults() {
        let mut editor = editor_with_default_page();
        let original_ids: Vec<String> = editor
            .document()
            .content
            .iter()
            .filter_map(|b| b.id().map(String::from))
            .collect();

        editor.remove_block(0).unwrap();
        editor.reset(&SectionKind::DEFAULT_PAGE);

        assert_eq!(editor.document().len(), 4);
        assert_eq!(editor.document().content[0].kind, "Hero");
        // New synthesis, new identifiers.
        for block in &editor.document().content {
            assert!(!original_ids.iter().any(|id| id == block.id().unwrap()));
        }
    }

    #[test]
    fn test_preview_renders_current_document() {
        let editor = editor_with_default_page();
        let html = editor.preview(RenderOptions::default());
        assert!(html.contains("block-hero"));
        assert!(html.contains("block-booking"));
    }
}
