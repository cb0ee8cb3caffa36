//! Ids marked for a bulk action during one session.

use std::collections::BTreeSet;

/// Set of record ids the user has ticked.
///
/// Ids are kept independently of any listing: a record selected under one
/// filter stays selected after the filter changes. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id was not selected yet.
    pub fn add(&mut self, id: i64) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` if the id was selected.
    pub fn remove(&mut self, id: i64) -> bool {
        self.ids.remove(&id)
    }

    /// Checkbox semantics: select when `selected`, unselect otherwise.
    pub fn set(&mut self, id: i64, selected: bool) {
        if selected {
            self.add(id);
        } else {
            self.remove(id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Owned copy of the current ids, in ascending order.
    pub fn snapshot(&self) -> BTreeSet<i64> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Extend<i64> for SelectionSet {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        self.ids.extend(iter);
    }
}

impl FromIterator<i64> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_contains() {
        let mut sel = SelectionSet::new();
        assert!(sel.add(5));
        assert!(!sel.add(5));
        sel.add(7);
        assert!(sel.contains(5));
        assert!(sel.remove(5));
        assert!(!sel.remove(5));
        assert!(!sel.contains(5));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let mut sel: SelectionSet = [3, 1, 2].into_iter().collect();
        let snap = sel.snapshot();
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(snap.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn set_follows_checkbox_state() {
        let mut sel = SelectionSet::new();
        sel.set(9, true);
        assert!(sel.contains(9));
        sel.set(9, false);
        assert!(!sel.contains(9));
    }
}
