use shared_types::{Clause, ClauseStatistics};
use std::collections::BTreeMap;

/// Summarize an extracted clause list
pub fn clause_statistics(clauses: &[Clause]) -> ClauseStatistics {
    let mut clause_types = BTreeMap::new();
    let mut has_entities = 0;
    let mut total_length = 0;

    for clause in clauses {
        *clause_types.entry(clause.clause_type).or_insert(0) += 1;
        if !clause.entities.is_empty() {
            has_entities += 1;
        }
        total_length += clause.full_text.len();
    }

    let avg_length = if clauses.is_empty() {
        0
    } else {
        total_length / clauses.len()
    };

    ClauseStatistics {
        total_clauses: clauses.len(),
        clause_types,
        has_entities,
        avg_length,
    }
}
