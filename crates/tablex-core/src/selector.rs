//! Table Selector
//!
//! Computes row and column bounds from the background/interest signals and
//! produces a reduced table restricted to those bounds. Annotations are
//! filtered (and, for non-prefix column windows, re-indexed) so that every
//! surviving index is valid in the reduced table.
//!
//! ## Bounds
//!
//! | background | interest | columns            | rows  |
//! |------------|----------|--------------------|-------|
//! | 0          | 0        | 2                  | 8     |
//! | 0          | 1        | 3                  | all   |
//! | 1          | 0        | all (see policy)   | 8     |
//! | 1          | 1        | all (see policy)   | all   |
//!
//! Bounds larger than the table degrade to the available count.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::model::{
    Cell, CeaAnnotation, CpaAnnotation, CtaAnnotation, Row, SemanticAnnotations, Table,
    TableMetadata,
};

/// Row bound applied when interest is off
pub const LOW_INTEREST_ROWS: usize = 8;

/// Column bound when background is off and interest is off
pub const NARROW_COLUMNS: usize = 2;

/// Column bound when background is off and interest is on
pub const INTEREST_COLUMNS: usize = 3;

/// Tables wider than this are subject to the wide-table policy
pub const WIDE_TABLE_THRESHOLD: usize = 6;

// ============================================================================
// SELECTION PARAMETERS
// ============================================================================

/// A binary external signal, encoded as `0` or `1` in parameter documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Signal {
    #[default]
    Off,
    On,
}

impl TryFrom<u8> for Signal {
    type Error = SelectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Signal::Off),
            1 => Ok(Signal::On),
            other => Err(SelectionError::InvalidSignal(other)),
        }
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Off => 0,
            Signal::On => 1,
        }
    }
}

impl From<bool> for Signal {
    fn from(on: bool) -> Self {
        if on {
            Signal::On
        } else {
            Signal::Off
        }
    }
}

/// Parameters document: `{"background": 0|1, "interest": 0|1}`, both optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionParams {
    #[serde(default)]
    pub background: Signal,
    #[serde(default)]
    pub interest: Signal,
}

impl SelectionParams {
    pub fn new(background: impl Into<Signal>, interest: impl Into<Signal>) -> Self {
        Self {
            background: background.into(),
            interest: interest.into(),
        }
    }
}

// ============================================================================
// WIDE-TABLE POLICY
// ============================================================================

/// Column policy for tables wider than [`WIDE_TABLE_THRESHOLD`] when background is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidePolicy {
    /// Keep every column
    #[default]
    KeepAll,
    /// Keep the first column and the last three
    AnchoredTail,
}

impl WidePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            WidePolicy::KeepAll => "keep-all",
            WidePolicy::AnchoredTail => "anchored-tail",
        }
    }
}

impl FromStr for WidePolicy {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep-all" | "all" => Ok(WidePolicy::KeepAll),
            "anchored-tail" | "tail" => Ok(WidePolicy::AnchoredTail),
            other => Err(SelectionError::UnknownWidePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for WidePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// SELECTOR
// ============================================================================

/// Effective bounds for one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionBounds {
    /// Original indices of the retained columns, in output order
    pub columns: Vec<usize>,
    /// Number of leading rows retained
    pub rows: usize,
    /// Unclamped row bound; CEA annotations survive when `idRow` is below it
    pub row_bound: usize,
}

impl SelectionBounds {
    /// Map from original column index to its position in the reduced table
    fn positions(&self) -> HashMap<usize, usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(position, &original)| (original, position))
            .collect()
    }
}

/// Reduces tables according to the background/interest signals
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSelector {
    policy: WidePolicy,
}

impl TableSelector {
    pub fn new(policy: WidePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> WidePolicy {
        self.policy
    }

    /// Compute the bounds for `table`. `rows` is clamped to the table, `row_bound` is not.
    pub fn bounds(&self, table: &Table, params: SelectionParams) -> SelectionBounds {
        let total_columns = table.column_count();
        let total_rows = table.row_count();

        let row_bound = match params.interest {
            Signal::Off => LOW_INTEREST_ROWS,
            Signal::On => total_rows,
        };

        let columns = match (params.background, params.interest) {
            (Signal::Off, Signal::On) => (0..INTEREST_COLUMNS.min(total_columns)).collect(),
            (Signal::Off, Signal::Off) => (0..NARROW_COLUMNS.min(total_columns)).collect(),
            (Signal::On, _)
                if total_columns > WIDE_TABLE_THRESHOLD
                    && self.policy == WidePolicy::AnchoredTail =>
            {
                vec![
                    0,
                    total_columns - 3,
                    total_columns - 2,
                    total_columns - 1,
                ]
            }
            (Signal::On, _) => (0..total_columns).collect(),
        };

        SelectionBounds {
            columns,
            rows: row_bound.min(total_rows),
            row_bound,
        }
    }

    /// Produce the reduced table. The input is left untouched.
    pub fn select(&self, table: &Table, params: SelectionParams) -> Table {
        let bounds = self.bounds(table, params);
        let positions = bounds.positions();

        let pick = |values: &[Cell]| -> Vec<Cell> {
            bounds
                .columns
                .iter()
                .filter_map(|&c| values.get(c).cloned())
                .collect()
        };

        let header = bounds
            .columns
            .iter()
            .filter_map(|&c| table.header.get(c).cloned())
            .collect();

        let rows = table
            .rows
            .iter()
            .take(bounds.rows)
            .map(|row| Row {
                id_row: row.id_row,
                data: pick(&row.data),
            })
            .collect();

        let metadata = TableMetadata {
            column: bounds
                .columns
                .iter()
                .filter_map(|&c| table.metadata.column.get(c).cloned())
                .collect(),
        };

        let annotations = &table.semantic_annotations;
        let semantic_annotations = SemanticAnnotations {
            cea: annotations
                .cea
                .iter()
                .filter(|a| a.id_row < bounds.row_bound)
                .filter_map(|a| {
                    let id_column = *positions.get(&a.id_column)?;
                    Some(CeaAnnotation {
                        id_column,
                        ..a.clone()
                    })
                })
                .collect(),
            cta: annotations
                .cta
                .iter()
                .filter_map(|a| {
                    let id_column = *positions.get(&a.id_column)?;
                    Some(CtaAnnotation {
                        id_column,
                        ..a.clone()
                    })
                })
                .collect(),
            cpa: annotations
                .cpa
                .iter()
                .filter_map(|a| {
                    let id_source_column = *positions.get(&a.id_source_column)?;
                    let id_target_column = *positions.get(&a.id_target_column)?;
                    Some(CpaAnnotation {
                        id_source_column,
                        id_target_column,
                        ..a.clone()
                    })
                })
                .collect(),
        };

        Table {
            dataset_name: table.dataset_name.clone(),
            table_name: table.table_name.clone(),
            header,
            rows,
            semantic_annotations,
            metadata,
            status: table.status.clone(),
        }
    }
}

/// Select with the default wide-table policy
pub fn select(table: &Table, params: SelectionParams) -> Table {
    TableSelector::default().select(table, params)
}
