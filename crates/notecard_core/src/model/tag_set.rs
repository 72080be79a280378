//! Ordered, unique tag collection used by the note form.
//!
//! # Invariants
//! - Tags appended through `add` are trimmed and never empty.
//! - Tags seeded through `from_stored` are kept verbatim, so a loaded set
//!   compares equal to what the store holds.
//! - Order is insertion order; membership checks are case-sensitive.
//! - `index` holds exactly the distinct values of `order`.

use std::collections::HashSet;

/// Tag list with insertion order plus a membership index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a set from persisted tags without rewriting them.
    pub fn from_stored(tags: &[String]) -> Self {
        Self {
            order: tags.to_vec(),
            index: tags.iter().cloned().collect(),
        }
    }

    /// Appends a trimmed candidate.
    ///
    /// Returns `false` and leaves the set unchanged when the candidate is
    /// blank after trimming or already present.
    pub fn add(&mut self, candidate: &str) -> bool {
        let trimmed = candidate.trim();
        if trimmed.is_empty() || self.index.contains(trimmed) {
            return false;
        }
        self.index.insert(trimmed.to_string());
        self.order.push(trimmed.to_string());
        true
    }

    /// Removes every entry equal to `tag`. Returns whether anything changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        if !self.index.remove(tag) {
            return false;
        }
        self.order.retain(|existing| existing != tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    /// Builds a set through `add`, so blanks and duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.add(tag.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::TagSet;

    fn tags(set: &TagSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn add_appends_trimmed_candidate_at_end() {
        let mut set: TagSet = ["rust", "notes"].into_iter().collect();
        assert!(set.add("  books \t"));
        assert_eq!(tags(&set), vec!["rust", "notes", "books"]);
    }

    #[test]
    fn add_ignores_blank_candidates() {
        let mut set: TagSet = ["rust"].into_iter().collect();
        assert!(!set.add(""));
        assert!(!set.add("   \n"));
        assert_eq!(tags(&set), vec!["rust"]);
    }

    #[test]
    fn add_ignores_exact_duplicates_but_not_case_variants() {
        let mut set = TagSet::new();
        assert!(set.add("Rust"));
        assert!(!set.add(" Rust "));
        assert!(set.add("rust"));
        assert_eq!(tags(&set), vec!["Rust", "rust"]);
    }

    #[test]
    fn remove_then_add_moves_tag_to_end() {
        let mut set: TagSet = ["a", "b", "c"].into_iter().collect();
        assert!(set.remove("a"));
        assert!(set.add("a"));
        assert_eq!(tags(&set), vec!["b", "c", "a"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn remove_absent_tag_is_noop() {
        let mut set: TagSet = ["a"].into_iter().collect();
        assert!(!set.remove("b"));
        assert!(!set.remove(" a"));
        assert_eq!(tags(&set), vec!["a"]);
    }

    #[test]
    fn from_stored_keeps_values_verbatim() {
        let stored = vec![" x ".to_string(), "y".to_string()];
        let mut set = TagSet::from_stored(&stored);
        assert_eq!(set.as_slice(), stored.as_slice());
        assert!(set.contains(" x "));
        assert!(set.add("x"));
        assert!(set.remove(" x "));
        assert_eq!(tags(&set), vec!["y", "x"]);
    }

    #[test]
    fn from_iter_drops_blank_and_duplicate_entries() {
        let set: TagSet = ["x", " ", "x", "y "].into_iter().collect();
        assert_eq!(set.as_slice(), &["x".to_string(), "y".to_string()]);
        assert!(set.contains("y"));
        assert!(!set.is_empty());
    }
}
