//! Triple Serializer
//!
//! Walks the rows of a (reduced) table and, for every column pair `i < j`
//! within a row, emits one triple combining resolved entity names, column
//! types and the relation between the two columns:
//!
//! ```text
//! <{type_i} {subject}, {predicate}, {type_j} {object}>;
//! ```
//!
//! Unresolved cells fall back to the raw cell text, unresolved types to the
//! empty string and unresolved relations to [`UNKNOWN_PREDICATE`]. Triples
//! are emitted row by row, then by ascending `(i, j)`.

use std::fmt;

use crate::model::{Row, Table};
use crate::resolver::ResolvedAnnotations;

/// Predicate used when no relation is annotated for a column pair
pub const UNKNOWN_PREDICATE: &str = "[UNKNOWN]";

/// Terminator written after every triple
pub const TRIPLE_SEPARATOR: &str = ";";

/// One serialized relation instance between two cells of the same row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject_type: String,
    pub subject: String,
    pub predicate: String,
    pub object_type: String,
    pub object: String,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} {}, {}, {} {}>",
            self.subject_type, self.subject, self.predicate, self.object_type, self.object
        )
    }
}

/// Build the triples for every row of `table`
pub fn triples(table: &Table, resolved: &ResolvedAnnotations) -> Vec<Triple> {
    table
        .rows
        .iter()
        .flat_map(|row| row_triples(row, resolved))
        .collect()
}

/// Serialize `table` into the flat triple notation
pub fn serialize(table: &Table, resolved: &ResolvedAnnotations) -> String {
    triples(table, resolved)
        .iter()
        .map(|triple| format!("{}{}", triple, TRIPLE_SEPARATOR))
        .collect()
}

fn row_triples(row: &Row, resolved: &ResolvedAnnotations) -> Vec<Triple> {
    let cell_text = |column: usize| -> String {
        match resolved.entity(row.id_row, column) {
            Some(entity) => entity.name.clone(),
            None => row.data[column].to_string(),
        }
    };
    let type_text = |column: usize| -> String {
        resolved
            .column_type(column)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    };

    let width = row.data.len();
    let mut out = Vec::with_capacity(width * width.saturating_sub(1) / 2);
    for i in 0..width {
        for j in (i + 1)..width {
            let predicate = resolved
                .predicate(i, j)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PREDICATE.to_string());
            out.push(Triple {
                subject_type: type_text(i),
                subject: cell_text(i),
                predicate,
                object_type: type_text(j),
                object: cell_text(j),
            });
        }
    }
    out
}
