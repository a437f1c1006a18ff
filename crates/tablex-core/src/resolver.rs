//! Annotation Resolver
//!
//! Picks a single winning candidate for every CEA, CTA and CPA annotation.
//! Candidates arrive ordered by confidence, so the winner is always the first
//! one. Annotations with no candidates are skipped.

use std::collections::HashMap;

use crate::model::{Candidate, SemanticAnnotations};

/// Key of a cell: (row id, column index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: usize,
    pub column: usize,
}

/// Key of an ordered column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnPair {
    pub source: usize,
    pub target: usize,
}

/// Winning candidates indexed by cell, column and column pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAnnotations {
    entities: HashMap<CellKey, Candidate>,
    types: HashMap<usize, Candidate>,
    predicates: HashMap<ColumnPair, Candidate>,
}

impl ResolvedAnnotations {
    /// Resolve all three annotation lists.
    ///
    /// When two annotations share a key, the later one wins.
    pub fn resolve(annotations: &SemanticAnnotations) -> Self {
        let entities = annotations
            .cea
            .iter()
            .filter_map(|a| {
                let key = CellKey {
                    row: a.id_row,
                    column: a.id_column,
                };
                winner(&a.entities).map(|c| (key, c))
            })
            .collect();

        let types = annotations
            .cta
            .iter()
            .filter_map(|a| winner(&a.types).map(|c| (a.id_column, c)))
            .collect();

        let predicates = annotations
            .cpa
            .iter()
            .filter_map(|a| {
                let key = ColumnPair {
                    source: a.id_source_column,
                    target: a.id_target_column,
                };
                winner(&a.predicates).map(|c| (key, c))
            })
            .collect();

        Self {
            entities,
            types,
            predicates,
        }
    }

    /// Winning entity for the cell in row `row` (row id) and column `column`
    pub fn entity(&self, row: usize, column: usize) -> Option<&Candidate> {
        self.entities.get(&CellKey { row, column })
    }

    /// Winning type for `column`
    pub fn column_type(&self, column: usize) -> Option<&Candidate> {
        self.types.get(&column)
    }

    /// Winning predicate for the ordered pair `(source, target)`
    pub fn predicate(&self, source: usize, target: usize) -> Option<&Candidate> {
        self.predicates.get(&ColumnPair { source, target })
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

fn winner(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.first().cloned()
}
