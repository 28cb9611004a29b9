//! Incremental search for cdgrid.
//!
//! Holds the [SearchState] typed into the header and the first-match lookup used
//! when the query is committed.

use crate::core::Entry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    active: bool,
    query: String,
}

impl SearchState {
    // Getters / Accessors

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Starts a new search with an empty query.
    pub fn begin(&mut self) {
        self.active = true;
        self.query.clear();
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Ends the search. The query is kept until the next [SearchState::begin].
    pub fn finish(&mut self) -> &str {
        self.active = false;
        &self.query
    }
}

/// Index of the first entry whose name contains `query`, ignoring case.
/// `None` for an empty query or when nothing matches.
pub fn find_first_match<'a, I>(names: I, query: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    names
        .into_iter()
        .position(|name| name.to_lowercase().contains(&needle))
}

/// [find_first_match] over directory entries.
pub fn find_entry(entries: &[Entry], query: &str) -> Option<usize> {
    find_first_match(entries.iter().map(Entry::name), query)
}
