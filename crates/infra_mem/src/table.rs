//! Locked table primitive shared by the in-memory repositories

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One entity table: rows keyed by identity plus the id counter
///
/// Identity assignment and existence scans are not atomic by construction, so
/// the table is always mutated under a single write-lock acquisition of the
/// surrounding [`SharedTable`].
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

pub(crate) type SharedTable<T> = Arc<RwLock<Table<T>>>;

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Builds a pre-populated table; `next_id` continues after the seed rows
    pub(crate) fn with_seed(rows: Vec<(i64, T)>) -> Self {
        let next_id = rows.iter().map(|(id, _)| *id).max().unwrap_or(0) + 1;
        Self {
            rows: rows.into_iter().collect(),
            next_id,
        }
    }

    pub(crate) fn shared(self) -> SharedTable<T> {
        Arc::new(RwLock::new(self))
    }

    /// Rows in ascending identity order
    pub(crate) fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub(crate) fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    pub(crate) fn any<F: Fn(&T) -> bool>(&self, predicate: F) -> bool {
        self.rows.values().any(|row| predicate(row))
    }

    pub(crate) fn filter<F: Fn(&T) -> bool>(&self, predicate: F) -> Vec<T> {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// Assigns the next identity, lets the caller stamp it onto the row, and
    /// stores the row under it
    pub(crate) fn insert_next<F: FnOnce(&mut T, i64)>(&mut self, mut row: T, set_id: F) -> T {
        let id = self.next_id;
        self.next_id += 1;
        set_id(&mut row, id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Replaces the row stored under `id`; the row must exist
    pub(crate) fn replace(&mut self, id: i64, row: T) {
        self.rows.insert(id, row);
    }

    pub(crate) fn remove(&mut self, id: i64) -> Option<T> {
        self.rows.remove(&id)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_continues_id_sequence() {
        let mut table = Table::with_seed(vec![(1, 1i64), (4, 4i64)]);
        let stored = table.insert_next(0i64, |row, id| *row = id);
        assert_eq!(stored, 5);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let table = Table::with_seed(vec![(3, "c"), (1, "a"), (2, "b")]);
        assert_eq!(table.all(), vec!["a", "b", "c"]);
    }
}
