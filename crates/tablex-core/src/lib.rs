//! Table lexicalization core
//!
//! Turns a semantically annotated table into the triple notation consumed by
//! the text-generation backend. This crate performs no I/O.
//!
//! ## Architecture
//!
//! ```text
//! Table → TableSelector → ResolvedAnnotations → serialize → prompt::assemble
//! ```

pub mod error;
pub mod lexicalize;
pub mod model;
pub mod prompt;
pub mod resolver;
pub mod selector;
pub mod serializer;

// Re-exports for convenience
pub use error::SelectionError;
pub use lexicalize::{lexicalize, Lexicalization};
pub use model::{
    Candidate, Cell, CeaAnnotation, CpaAnnotation, CtaAnnotation, Row, SemanticAnnotations,
    ShapeViolation, Table, TableDocument, TableMetadata,
};
pub use resolver::ResolvedAnnotations;
pub use selector::{select, SelectionParams, Signal, TableSelector, WidePolicy};
pub use serializer::{serialize, Triple, UNKNOWN_PREDICATE};
