//! # Clipper Document
//!
//! The page-document model and its normalizer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ storage: one JSON value per tenant          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ normalize: ordered shape-detector chain     │
//! │  - array-wrapped rows                       │
//! │  - record with nested {root, content}       │
//! │  - direct canonical (empty falls through)   │
//! │  - JSON-string-encoded any of the above     │
//! │  - otherwise: synthesize defaults           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ canonical PageDocument {root, content}      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Normalization is total: it never fails, never panics, and always yields a
//! structurally valid document. Malformed storage payloads silently become a
//! first-run default page.

mod model;
mod normalize;

pub use model::{Block, PageDocument, RootSettings};
pub use normalize::{normalize, synthesize};
