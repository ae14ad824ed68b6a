//! Language descriptors
//!
//! A descriptor tells the parser how to read one line of a given language:
//! whether it is blank, whether it is a documentation comment, and what prose
//! is left once the comment marker is gone. Descriptors are derived from one
//! another by copying, so the registry is a flat table of resolved records.

pub mod descriptor;
pub mod registry;

pub use descriptor::{Language, LanguageBuilder};
pub use registry::{LanguageRegistry, default_registry, languages};
