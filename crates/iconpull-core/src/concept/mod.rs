//! Hardware-icon concepts: what to search for and how to judge the results.
//!
//! A [`ConceptTable`] is injected into the pipeline (usually from config), so
//! adding or tuning a concept never touches pipeline code.

mod defaults;
mod kind;

pub use defaults::default_concepts;
pub use kind::IconKind;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One icon category to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Unique id; also the output file stem (`<id>.png`).
    pub id: String,
    /// Search queries, each issued independently against the mirror.
    pub queries: Vec<String>,
    /// Tokens that raise a candidate's score.
    #[serde(default)]
    pub include: Vec<String>,
    /// Tokens that lower a candidate's score.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Concept {
    /// Target file name. Built-in kinds use the name the renderer expects.
    pub fn file_name(&self) -> String {
        match self.kind() {
            Some(kind) => kind.file_name(),
            None => format!("{}.png", self.id),
        }
    }

    /// Built-in icon kind for this id, if any. Custom concepts return `None`.
    pub fn kind(&self) -> Option<IconKind> {
        IconKind::from_id(&self.id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConceptError {
    #[error("concept table is empty")]
    Empty,
    #[error("duplicate concept id: {0}")]
    DuplicateId(String),
    #[error("concept {0} has no queries")]
    NoQueries(String),
    #[error("concept id {0:?} is not usable as a file name")]
    InvalidId(String),
}

/// Validated, ordered list of concepts.
#[derive(Debug, Clone)]
pub struct ConceptTable {
    concepts: Vec<Concept>,
}

impl ConceptTable {
    /// Validates ids (unique, usable as a file stem) and that every concept has a query.
    pub fn new(concepts: Vec<Concept>) -> Result<Self, ConceptError> {
        if concepts.is_empty() {
            return Err(ConceptError::Empty);
        }
        let mut seen = HashSet::new();
        for c in &concepts {
            if !is_valid_id(&c.id) {
                return Err(ConceptError::InvalidId(c.id.clone()));
            }
            if !seen.insert(c.id.as_str()) {
                return Err(ConceptError::DuplicateId(c.id.clone()));
            }
            if c.queries.iter().all(|q| q.trim().is_empty()) {
                return Err(ConceptError::NoQueries(c.id.clone()));
            }
        }
        Ok(Self { concepts })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Concept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.id == id)
    }
}

impl Default for ConceptTable {
    fn default() -> Self {
        Self {
            concepts: default_concepts(),
        }
    }
}

impl<'a> IntoIterator for &'a ConceptTable {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id.trim() == id
        && !id.chars().any(|c| c == '/' || c == '\\' || c == '\0' || c.is_control())
}
