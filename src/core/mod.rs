//! Core value types
//!
//! This module contains the immutable records exchanged with callers of the
//! cycle engine: directed edges carrying an attachment, paths built from
//! contiguous edges, and cycles (closed paths).

mod cycle;
mod edge;
mod path;

pub use cycle::Cycle;
pub use edge::Edge;
pub use path::Path;
