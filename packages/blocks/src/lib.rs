//! # Clipper Blocks
//!
//! The block registry: the closed set of content block kinds a tenant page
//! can be composed of, plus everything the editor needs to know about each
//! kind.
//!
//! For every [`BlockKind`] the registry supplies:
//!
//! 1. A strongly-typed props record (`HeroProps`, `ServicesGridProps`, ...)
//!    that deserializes from any subset of its keys.
//! 2. Complete default props, used whenever a block of that kind is created
//!    fresh (first-run synthesis or an operator adding a block).
//! 3. A field schema describing which props are operator-editable and with
//!    which control (text, textarea, select, color, image upload, nested
//!    list-of-records).
//!
//! The registry performs no I/O and no rendering; rendering lives in
//! `clipper-renderer`, uploads in `clipper-editor`.

mod fields;
mod kind;
mod props;
mod registry;

pub use fields::{Field, FieldControl, SelectOption};
pub use kind::{BlockKind, SectionKind};
pub use props::{
    BookingProps, HeroProps, ServiceItem, ServiceListProps, ServicesGridProps, TeamMember,
    TeamProps,
};
pub use registry::BlockDefinition;
