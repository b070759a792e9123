//! Candidate pooling across a concept's query variants.

use std::collections::BTreeSet;

use crate::concept::Concept;
use crate::extract::extract_candidates;
use crate::transfer::PageSource;

/// Fetches every query of `concept` and unions the extracted candidates.
///
/// A query that fails is logged and contributes nothing; the loop moves on.
/// If every query fails the pool is simply empty.
pub fn gather_candidates(concept: &Concept, source: &dyn PageSource) -> BTreeSet<String> {
    let mut pool = BTreeSet::new();
    for query in concept.queries.iter().filter(|q| !q.trim().is_empty()) {
        match source.fetch_page(query) {
            Ok(text) => {
                let found = extract_candidates(&text);
                tracing::debug!(concept = %concept.id, query = %query, found = found.len(), "query done");
                pool.extend(found);
            }
            Err(e) => {
                tracing::warn!(concept = %concept.id, query = %query, "query skipped: {}", e);
            }
        }
    }
    pool
}
