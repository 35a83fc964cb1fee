//! File domain entities.

pub mod model;
pub mod source;

pub use model::{File, NewFile};
pub use source::{ContentSource, SourceError, SourceKind};
