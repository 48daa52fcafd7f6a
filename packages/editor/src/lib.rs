//! # Clipper Editor
//!
//! The editor shell: one in-memory page document per session, structural
//! operations over it, and explicit save/reset against injected
//! collaborators.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: storage value → canonical page    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: PageEditor lifecycle + operations   │
//! │  - load via PageStore + normalizer          │
//! │  - add/remove/move/replace-props/reset      │
//! │  - explicit save (whole document upsert)    │
//! │  - image upload → plain URL string          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: canonical page → HTML preview     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **One writer**: a session owns its document; there is no merge with
//!    concurrent remote edits. Last save wins.
//! 2. **Whole-document writes**: props are replaced wholesale and the full
//!    document is upserted; no patch contract exists.
//! 3. **Failures are never fatal**: a rejected save or upload leaves the
//!    in-memory document untouched and is surfaced as a retryable error.
//! 4. **Injected collaborators**: stores arrive as parameters, never through
//!    ambient globals.

mod editor;
mod errors;
mod store;

pub use editor::{upload_image, PageEditor};
pub use errors::EditorError;
pub use store::{ImageStore, MemoryPageStore, PageStore, StoreError};

// Re-export the pieces a host application needs alongside the editor.
pub use clipper_blocks::{BlockKind, SectionKind};
pub use clipper_document::{Block, PageDocument};
pub use clipper_renderer::RenderOptions;
