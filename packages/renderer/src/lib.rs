//! # Clipper Renderer
//!
//! Deterministic HTML rendering of canonical page documents.
//!
//! Contract:
//! - blocks render in `content` order, outputs concatenated;
//! - rendering is a pure function of the document (no I/O, no ambient
//!   state); anything a block needs must already sit in its props;
//! - failures are isolated per block: an unknown kind or an
//!   undeserializable props object skips that block with a warning and never
//!   blanks the siblings.

mod compiler;

pub use compiler::{render_block, render_page, RenderError, RenderOptions};
