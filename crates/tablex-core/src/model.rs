//! Annotated Table Model
//!
//! Serde types for semantically annotated tables: the table body (header,
//! rows, per-column metadata) plus its three annotation lists (CEA, CTA, CPA).
//!
//! All annotation indices refer to positions in the table they were produced
//! for. Index fields accept both JSON integers and integer strings because
//! annotation producers emit both.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// DOCUMENT ENVELOPE
// ============================================================================

/// Table document as stored on disk: `{"data": Table}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    pub data: Table,
}

// ============================================================================
// TABLE
// ============================================================================

/// A semantically annotated table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub dataset_name: String,
    #[serde(default)]
    pub table_name: String,
    /// Column labels, in column order
    pub header: Vec<String>,
    pub rows: Vec<Row>,
    #[serde(default)]
    pub semantic_annotations: SemanticAnnotations,
    #[serde(default)]
    pub metadata: TableMetadata,
    /// Opaque processing status, carried through unchanged
    #[serde(default)]
    pub status: Value,
}

impl Table {
    /// Number of columns (length of the header)
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check the structural invariants of the table.
    ///
    /// Returns every violation found; an empty vector means the header,
    /// metadata and row widths all agree.
    pub fn shape_violations(&self) -> Vec<ShapeViolation> {
        let width = self.column_count();
        let mut violations = Vec::new();

        if self.metadata.column.len() != width {
            violations.push(ShapeViolation::MetadataWidth {
                expected: width,
                found: self.metadata.column.len(),
            });
        }

        for row in &self.rows {
            if row.data.len() != width {
                violations.push(ShapeViolation::RowWidth {
                    id_row: row.id_row,
                    expected: width,
                    found: row.data.len(),
                });
            }
        }

        violations
    }
}

/// A mismatch between the header width and the rest of the table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeViolation {
    #[error("metadata describes {found} columns, header has {expected}")]
    MetadataWidth { expected: usize, found: usize },

    #[error("row {id_row} has {found} cells, header has {expected}")]
    RowWidth {
        id_row: usize,
        expected: usize,
        found: usize,
    },
}

/// Per-column metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    #[serde(default)]
    pub column: Vec<Value>,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Row identifier; unique within a table, not necessarily contiguous
    #[serde(deserialize_with = "index")]
    pub id_row: usize,
    pub data: Vec<Cell>,
}

impl Row {
    pub fn new(id_row: usize, data: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        Self {
            id_row,
            data: data.into_iter().map(Into::into).collect(),
        }
    }
}

/// A raw cell value.
///
/// Strings display verbatim; any other JSON value displays as its JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(pub Value);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell(Value::String(value.to_string()))
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell(Value::String(value))
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Cell(value)
    }
}

// ============================================================================
// SEMANTIC ANNOTATIONS
// ============================================================================

/// The three annotation lists attached to a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticAnnotations {
    #[serde(default)]
    pub cea: Vec<CeaAnnotation>,
    #[serde(default)]
    pub cta: Vec<CtaAnnotation>,
    #[serde(default)]
    pub cpa: Vec<CpaAnnotation>,
}

/// A knowledge-base candidate (entity, type or predicate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Cell-entity annotation; candidates are ordered by confidence, highest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeaAnnotation {
    #[serde(deserialize_with = "index")]
    pub id_row: usize,
    #[serde(deserialize_with = "index")]
    pub id_column: usize,
    #[serde(default)]
    pub entities: Vec<Candidate>,
}

/// Column-type annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaAnnotation {
    #[serde(deserialize_with = "index")]
    pub id_column: usize,
    #[serde(default)]
    pub types: Vec<Candidate>,
}

/// Column-pair relation annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpaAnnotation {
    #[serde(deserialize_with = "index")]
    pub id_source_column: usize,
    #[serde(deserialize_with = "index")]
    pub id_target_column: usize,
    #[serde(default)]
    pub predicates: Vec<Candidate>,
}

/// Deserialize a row/column index given either as a number or a numeric string
fn index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIndex {
        Number(u64),
        Text(String),
    }

    match RawIndex::deserialize(deserializer)? {
        RawIndex::Number(n) => usize::try_from(n).map_err(serde::de::Error::custom),
        RawIndex::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid index '{}'", s))),
    }
}
