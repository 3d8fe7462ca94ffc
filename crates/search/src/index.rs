//! MemoryIndex: inverted index with per-field posting lists
//!
//! ## Design
//!
//! The index stores a denormalized copy of every document alongside posting
//! lists keyed by token, subdivided by field. Queries resolve clauses
//! against the posting lists, score survivors with BM25-lite, and return a
//! stable, paginated slice.
//!
//! ## Consistency
//!
//! The index is a best-effort mirror of the record store. `put` replaces
//! the previous copy for an identifier wholesale (remove-then-add), so no
//! stale postings survive an update. `delete_by_id` on a never-indexed
//! identifier is a no-op.
//!
//! ## Thread Safety
//!
//! Uses DashMap for concurrent access. Multiple readers/writers supported.

use dashmap::DashMap;
use phonecat_core::error::Result;
use phonecat_core::query::{Clause, Occur, Query};
use phonecat_core::traits::{Fields, SearchIndex};
use phonecat_core::types::EntityId;
use std::collections::{HashMap, HashSet};

use crate::scorer;
use crate::tokenizer::{tokenize, tokenize_unique};

/// Posting list for one token within one field: document -> term frequency
type DocPostings = HashMap<EntityId, u32>;

/// All posting lists for one token, subdivided by field name
type FieldPostings = HashMap<String, DocPostings>;

/// In-memory inverted index behind the `SearchIndex` contract
///
/// # Example
///
/// ```ignore
/// use phonecat_search::MemoryIndex;
///
/// let index: MemoryIndex<Brand> = MemoryIndex::new();
/// index.put(&id, brand)?;
/// let (hits, total) = index.query_page(&Query::parse("name:acme"), 0, 10)?;
/// ```
pub struct MemoryIndex<T> {
    /// Document copies, keyed by identifier
    docs: DashMap<EntityId, T>,

    /// token -> field -> document -> term frequency
    postings: DashMap<String, FieldPostings>,

    /// Tokens present per document, for targeted posting removal
    doc_tokens: DashMap<EntityId, HashSet<String>>,

    /// Document length in tokens, for length normalization
    doc_lengths: DashMap<EntityId, u32>,
}

impl<T> MemoryIndex<T>
where
    T: Fields + Clone + Send + Sync + 'static,
{
    /// Create an empty index
    pub fn new() -> Self {
        MemoryIndex {
            docs: DashMap::new(),
            postings: DashMap::new(),
            doc_tokens: DashMap::new(),
            doc_lengths: DashMap::new(),
        }
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Check if a document copy exists for an identifier
    pub fn contains(&self, id: &EntityId) -> bool {
        self.docs.contains_key(id)
    }

    /// Average document length in tokens
    fn avg_doc_len(&self) -> f32 {
        let count = self.doc_lengths.len();
        if count == 0 {
            return 0.0;
        }
        let sum: u64 = self.doc_lengths.iter().map(|e| *e.value() as u64).sum();
        sum as f32 / count as f32
    }

    /// Remove every posting entry for an identifier
    fn remove_postings(&self, id: &EntityId) {
        let Some((_, tokens)) = self.doc_tokens.remove(id) else {
            return;
        };
        for token in tokens {
            let now_empty = match self.postings.get_mut(&token) {
                Some(mut by_field) => {
                    for docs in by_field.values_mut() {
                        docs.remove(id);
                    }
                    by_field.retain(|_, docs| !docs.is_empty());
                    by_field.is_empty()
                }
                None => false,
            };
            if now_empty {
                self.postings.remove_if(&token, |_, by_field| by_field.is_empty());
            }
        }
    }

    /// Resolve one clause to its matching documents
    ///
    /// Every token of the clause term must match (within the clause's field
    /// restriction) for a document to qualify. Positive clauses accumulate
    /// score contributions for documents they match.
    fn eval_clause(
        &self,
        clause: &Clause,
        total_docs: usize,
        avg_doc_len: f32,
        scores: &mut HashMap<EntityId, f32>,
    ) -> HashSet<EntityId> {
        let tokens = tokenize_unique(&clause.term);
        if tokens.is_empty() {
            return HashSet::new();
        }

        let scored = clause.occur != Occur::MustNot;
        let mut matched: Option<HashSet<EntityId>> = None;
        let mut contributions: HashMap<EntityId, f32> = HashMap::new();

        for token in &tokens {
            let token_docs: DocPostings = match self.postings.get(token) {
                Some(by_field) => match &clause.field {
                    Some(field) => by_field.get(field).cloned().unwrap_or_default(),
                    None => {
                        // Unfielded: merge postings across fields, summing
                        // term frequencies
                        let mut merged: DocPostings = HashMap::new();
                        for docs in by_field.values() {
                            for (id, tf) in docs {
                                *merged.entry(id.clone()).or_insert(0) += tf;
                            }
                        }
                        merged
                    }
                },
                None => HashMap::new(),
            };

            if scored {
                let idf = scorer::idf(total_docs, token_docs.len());
                for (id, tf) in &token_docs {
                    let doc_len = self.doc_lengths.get(id).map(|l| *l).unwrap_or(0);
                    *contributions.entry(id.clone()).or_insert(0.0) +=
                        scorer::term_score(*tf, doc_len, avg_doc_len, idf);
                }
            }

            let token_set: HashSet<EntityId> = token_docs.into_keys().collect();
            matched = Some(match matched {
                Some(prev) => prev.intersection(&token_set).cloned().collect(),
                None => token_set,
            });
        }

        let matched = matched.unwrap_or_default();
        if scored {
            for id in &matched {
                if let Some(contribution) = contributions.get(id) {
                    *scores.entry(id.clone()).or_insert(0.0) += *contribution;
                }
            }
        }
        matched
    }
}

impl<T> Default for MemoryIndex<T>
where
    T: Fields + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchIndex<T> for MemoryIndex<T>
where
    T: Fields + Clone + Send + Sync + 'static,
{
    fn put(&self, id: &EntityId, document: T) -> Result<()> {
        // Replace wholesale: stale postings from a prior copy must not
        // survive an update
        self.remove_postings(id);

        let mut tokens_seen: HashSet<String> = HashSet::new();
        let mut doc_len: u32 = 0;

        for (field, value) in document.fields() {
            let tokens = tokenize(&value.render());
            doc_len += tokens.len() as u32;
            for token in tokens {
                let mut by_field = self.postings.entry(token.clone()).or_default();
                *by_field
                    .entry(field.to_string())
                    .or_default()
                    .entry(id.clone())
                    .or_insert(0) += 1;
                tokens_seen.insert(token);
            }
        }

        self.doc_tokens.insert(id.clone(), tokens_seen);
        self.doc_lengths.insert(id.clone(), doc_len);
        self.docs.insert(id.clone(), document);
        Ok(())
    }

    fn delete_by_id(&self, id: &EntityId) -> Result<()> {
        self.remove_postings(id);
        self.doc_lengths.remove(id);
        self.docs.remove(id);
        Ok(())
    }

    fn query_page(&self, query: &Query, page: usize, size: usize) -> Result<(Vec<T>, u64)> {
        if query.is_empty() {
            return Ok((vec![], 0));
        }

        let total_docs = self.docs.len();
        let avg_doc_len = self.avg_doc_len();

        let mut scores: HashMap<EntityId, f32> = HashMap::new();
        let mut must: Option<HashSet<EntityId>> = None;
        let mut should: HashSet<EntityId> = HashSet::new();
        let mut excluded: HashSet<EntityId> = HashSet::new();
        let mut has_should = false;

        for clause in &query.clauses {
            let matched = self.eval_clause(clause, total_docs, avg_doc_len, &mut scores);
            match clause.occur {
                Occur::MustNot => excluded.extend(matched),
                Occur::Must => {
                    must = Some(match must {
                        Some(prev) => prev.intersection(&matched).cloned().collect(),
                        None => matched,
                    });
                }
                Occur::Should => {
                    has_should = true;
                    should.extend(matched);
                }
            }
        }

        // Must clauses bound the candidate set; Should clauses widen it
        // only when no Must is present (they still contribute to scores).
        // A purely negative query matches nothing.
        let candidates: Vec<EntityId> = match must {
            Some(set) => set.into_iter().filter(|id| !excluded.contains(id)).collect(),
            None if has_should => should
                .into_iter()
                .filter(|id| !excluded.contains(id))
                .collect(),
            None => vec![],
        };

        let mut ranked: Vec<(EntityId, f32)> = candidates
            .into_iter()
            .map(|id| {
                let score = scores.get(&id).copied().unwrap_or(0.0);
                (id, score)
            })
            .collect();

        // Score-descending with identifier tiebreak keeps pagination stable
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let total = ranked.len() as u64;
        let items = if size == 0 {
            vec![]
        } else {
            ranked
                .into_iter()
                .skip(page.saturating_mul(size))
                .take(size)
                .filter_map(|(id, _)| self.docs.get(&id).map(|doc| doc.clone()))
                .collect()
        };

        Ok((items, total))
    }
}
