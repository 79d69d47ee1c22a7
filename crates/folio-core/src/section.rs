//! Section identifiers and the ordered section list
//!
//! A section is one full-viewport page of the portfolio. The list order is the
//! vertical order of the pages and defines the valid index range `[0, N-1]`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable string identifier of one section (e.g. `"hero"`, `"about"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, unique, non-empty sequence of sections, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    ids: Vec<SectionId>,
}

impl SectionList {
    /// Build a section list, rejecting empty input, blank ids and duplicates.
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<SectionId>,
    {
        let ids: Vec<SectionId> = ids.into_iter().map(Into::into).collect();

        if ids.is_empty() {
            return Err(Error::invalid_sections("at least one section is required"));
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if id.as_str().trim().is_empty() {
                return Err(Error::invalid_sections("section ids must not be blank"));
            }
            if !seen.insert(id.as_str()) {
                return Err(Error::invalid_sections(format!(
                    "duplicate section id '{}'",
                    id
                )));
            }
        }

        Ok(Self { ids })
    }

    /// Number of sections (always at least one)
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of the last section
    pub fn last_index(&self) -> usize {
        self.ids.len() - 1
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.ids.len()
    }

    pub fn get(&self, index: usize) -> Option<&SectionId> {
        self.ids.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s.as_str() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a SectionId;
    type IntoIter = std::slice::Iter<'a, SectionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
