//! Lexicalization pipeline: select → resolve → serialize → assemble

use crate::model::Table;
use crate::prompt;
use crate::resolver::ResolvedAnnotations;
use crate::selector::{SelectionParams, TableSelector};
use crate::serializer;

/// Everything derived from one table before it is sent to the backend
#[derive(Debug, Clone)]
pub struct Lexicalization {
    /// The reduced table
    pub reduced: Table,
    /// Winning annotations of the reduced table
    pub resolved: ResolvedAnnotations,
    /// Flat triple notation
    pub triples: String,
    /// Complete prompt for the text-generation backend
    pub prompt: String,
}

/// Run the pure part of the pipeline
pub fn lexicalize(
    table: &Table,
    params: SelectionParams,
    selector: TableSelector,
) -> Lexicalization {
    let reduced = selector.select(table, params);
    let resolved = ResolvedAnnotations::resolve(&reduced.semantic_annotations);
    let triples = serializer::serialize(&reduced, &resolved);
    let prompt = prompt::assemble(&triples);
    Lexicalization {
        reduced,
        resolved,
        triples,
        prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Candidate, CeaAnnotation, Row, SemanticAnnotations};

    #[test]
    fn test_lexicalize_cities() {
        let table = Table {
            header: vec!["city".into(), "country".into(), "population".into()],
            rows: vec![
                Row::new(0, ["Paris", "France", "2100000"]),
                Row::new(1, ["Rome", "Italy", "2800000"]),
            ],
            semantic_annotations: SemanticAnnotations {
                cea: vec![CeaAnnotation {
                    id_row: 1,
                    id_column: 0,
                    entities: vec![Candidate::new("Q220", "Rome (city)")],
                }],
                ..Default::default()
            },
            ..Default::default()
        };

        let result = lexicalize(&table, SelectionParams::default(), TableSelector::default());
        assert_eq!(result.reduced.column_count(), 2);
        assert_eq!(
            result.triples,
            "< Paris, [UNKNOWN],  France>;< Rome (city), [UNKNOWN],  Italy>;"
        );
        assert!(result.prompt.contains(&result.triples));
        assert_eq!(result.resolved.entity_count(), 1);
    }

    #[test]
    fn test_lexicalize_one_based_rows() {
        let table = Table {
            header: vec!["a".into(), "b".into()],
            rows: (1..=3).map(|id| Row::new(id, ["x", "y"])).collect(),
            semantic_annotations: SemanticAnnotations {
                cea: vec![CeaAnnotation {
                    id_row: 3,
                    id_column: 0,
                    entities: vec![Candidate::new("Q3", "X3")],
                }],
                ..Default::default()
            },
            ..Default::default()
        };

        let result = lexicalize(&table, SelectionParams::default(), TableSelector::default());
        assert_eq!(
            result.triples,
            "< x, [UNKNOWN],  y>;< x, [UNKNOWN],  y>;< X3, [UNKNOWN],  y>;"
        );
    }
}
