//! Parsed free-text query representation
//!
//! A query string is a whitespace-separated list of clauses:
//! - `term` — matches any field (clauses combine as OR by default)
//! - `field:term` — restricted to one field
//! - `+term` / `-term` — required / excluded
//! - `AND` — promotes the surrounding clauses to required
//! - `OR` — explicit form of the default combination
//! - `NOT` — excludes the following clause
//!
//! Parsing is total: any input yields a query. An empty or all-punctuation
//! input yields a query that matches nothing. Term normalization (case,
//! token splitting) is owned by the index that executes the query, not by
//! the parser.

use serde::{Deserialize, Serialize};

/// How a clause participates in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Occur {
    /// Matching documents are included; at least one Should clause must
    /// match when no Must clause is present (default)
    #[default]
    Should,
    /// Matching is required
    Must,
    /// Matching documents are excluded
    MustNot,
}

/// A single query clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Restrict matching to one field; any field when absent
    pub field: Option<String>,
    /// Raw term text as written (normalized by the executing index)
    pub term: String,
    /// Participation mode
    pub occur: Occur,
}

/// A parsed free-text query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    /// Clauses in input order
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Parse a raw query string
    ///
    /// Never fails; unrecognized input degrades to ordinary term clauses.
    pub fn parse(input: &str) -> Self {
        let mut clauses: Vec<Clause> = vec![];
        let mut pending: Option<Occur> = None;

        for raw in input.split_whitespace() {
            match raw {
                "AND" => {
                    // "a AND b" requires both sides
                    if let Some(last) = clauses.last_mut() {
                        if last.occur == Occur::Should {
                            last.occur = Occur::Must;
                        }
                    }
                    if pending.is_none() {
                        pending = Some(Occur::Must);
                    }
                    continue;
                }
                "OR" => continue,
                "NOT" => {
                    pending = Some(Occur::MustNot);
                    continue;
                }
                _ => {}
            }

            let carried = pending.take();
            let (occur, body) = if let Some(rest) = raw.strip_prefix('+') {
                (Occur::Must, rest)
            } else if let Some(rest) = raw.strip_prefix('-') {
                (Occur::MustNot, rest)
            } else {
                (carried.unwrap_or(Occur::Should), raw)
            };

            if body.is_empty() {
                continue;
            }

            let (field, term) = match body.split_once(':') {
                Some((f, t)) if !f.is_empty() && !t.is_empty() => {
                    (Some(f.to_string()), t.to_string())
                }
                _ => (None, body.to_string()),
            };

            clauses.push(Clause { field, term, occur });
        }

        Query { clauses }
    }

    /// Check if the query has no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
