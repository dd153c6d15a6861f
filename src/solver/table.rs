use std::collections::HashMap;

/// How a cached score relates to the true value of its position.
///
/// Entries written after a beta cutoff only prove a lower bound, and entries
/// from a search that never raised alpha only prove an upper bound; treating
/// either as exact can corrupt results reached through transpositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

/// Cache record: score, the plies remaining in the subtree it was computed
/// for, and how the score bounds the true value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub value: i16,
    pub depth: i8,
    pub bound: Bound,
}

/// Memoization cache over the search tree, keyed by [`Position::key`].
///
/// Entries are never evicted: they stay valid forever for a given key since
/// the game has no hidden information or repetition draws. Memory grows with
/// the number of distinct positions visited, bounded within a single query
/// by the remaining game length.
///
/// [`Position::key`]: crate::game::Position::key
#[derive(Debug)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
}

impl TranspositionTable {
    /// Create a table with an initial capacity reservation.
    pub fn with_capacity(capacity: usize) -> Self {
        TranspositionTable {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Entry for `key`, if one was computed to at least `remaining` plies.
    pub fn probe(&self, key: u64, remaining: i8) -> Option<TtEntry> {
        self.entries.get(&key).copied().filter(|e| e.depth >= remaining)
    }

    /// Record a score for `key`. Overwrite semantics: last write wins.
    pub fn store(&mut self, key: u64, value: i32, remaining: i8, bound: Bound) {
        self.entries.insert(
            key,
            TtEntry {
                value: value as i16,
                depth: remaining,
                bound,
            },
        );
    }

    /// Number of cached positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, e.g. between games in a long-lived process.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut table = TranspositionTable::with_capacity(16);
        assert!(table.is_empty());

        table.store(42, -5, 10, Bound::Exact);
        let entry = table.probe(42, 10).unwrap();
        assert_eq!(entry.value, -5);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_probe_misses_unknown_key() {
        let table = TranspositionTable::with_capacity(16);
        assert!(table.probe(7, 0).is_none());
    }

    #[test]
    fn test_probe_rejects_shallow_entries() {
        let mut table = TranspositionTable::with_capacity(16);
        table.store(42, 3, 8, Bound::Exact);

        // Needs 12 plies of knowledge but the entry only has 8.
        assert!(table.probe(42, 12).is_none());
        assert!(table.probe(42, 8).is_some());
        assert!(table.probe(42, 4).is_some());
    }

    #[test]
    fn test_store_overwrites() {
        let mut table = TranspositionTable::with_capacity(16);
        table.store(42, 3, 8, Bound::Lower);
        table.store(42, 9, 12, Bound::Exact);

        let entry = table.probe(42, 12).unwrap();
        assert_eq!(entry.value, 9);
        assert_eq!(entry.depth, 12);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut table = TranspositionTable::with_capacity(16);
        table.store(1, 1, 1, Bound::Exact);
        table.store(2, 2, 2, Bound::Upper);
        table.clear();
        assert!(table.is_empty());
        assert!(table.probe(1, 0).is_none());
    }
}
