//! Collection Editor
//!
//! Ordered, index-displayable collections of form rows. Each row carries a
//! stable [`EntryId`] so UI handlers address rows by identity instead of by
//! a display index that shifts when earlier rows are removed.
//!
//! ```text
//!  display  id   name   amount  written
//!  ───────  ───  ─────  ──────  ───────
//!    0      #0   BTC    1.0     2
//!    1      #1   ETH    2.0     4     ← rename/update touch `written`
//!    2      #3   SOL    NaN     6     ← "abc" typed into amount
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{AmountMap, NamedAmount, PricePoint, parse_amount};

/// Stable row identifier, never reused within one editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A row value that may hold numeric fields
pub trait Entry: Clone + Default {
    /// Whether any numeric field holds the `NaN` sentinel
    fn has_non_numeric(&self) -> bool;
}

impl Entry for NamedAmount {
    fn has_non_numeric(&self) -> bool {
        self.amount.is_nan()
    }
}

impl Entry for PricePoint {
    fn has_non_numeric(&self) -> bool {
        self.price.is_nan()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Row<T> {
    id: EntryId,
    written: u64,
    value: T,
}

/// Ordered arena of rows
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionEditor<T> {
    rows: Vec<Row<T>>,
    next_id: u64,
    write_seq: u64,
}

impl<T: Entry> Default for CollectionEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entry> CollectionEditor<T> {
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
            write_seq: 0,
        }
    }

    /// Append a default row
    pub fn add(&mut self) -> EntryId {
        self.push(T::default())
    }

    /// Append a row with the given value
    pub fn push(&mut self, value: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        let written = self.next_write();
        self.rows.push(Row { id, written, value });
        id
    }

    /// Remove a row; later rows move up one display position
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.rows.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Apply `f` to the row in place and stamp it as the latest write
    ///
    /// Returns `false` when `id` no longer exists.
    pub fn modify(&mut self, id: EntryId, f: impl FnOnce(&mut T)) -> bool {
        let written = self.write_seq + 1;
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                f(&mut row.value);
                row.written = written;
                self.write_seq = written;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.rows.iter().find(|r| r.id == id).map(|r| &r.value)
    }

    /// Current display position of `id`
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.rows.get(index).map(|r| &r.value)
    }

    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.rows.get(index).map(|r| r.id)
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Rows in display order
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> {
        self.rows.iter().map(|r| (r.id, &r.value))
    }

    pub fn values(&self) -> Vec<T> {
        self.rows.iter().map(|r| r.value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_non_numeric(&self) -> bool {
        self.rows.iter().any(|r| r.value.has_non_numeric())
    }

    fn next_write(&mut self) -> u64 {
        self.write_seq += 1;
        self.write_seq
    }
}

/// Editor for a token portfolio
pub type PortfolioEditor = CollectionEditor<NamedAmount>;

impl CollectionEditor<NamedAmount> {
    /// Rename a row in place, keeping its amount
    ///
    /// A name already used by another row is accepted; both rows stay
    /// visible and [`Self::to_mapping`] resolves the duplicate.
    pub fn rename(&mut self, id: EntryId, name: impl Into<String>) -> bool {
        let name = name.into();
        self.modify(id, |entry| entry.name = name)
    }

    /// Set an amount from raw form input (`NaN` when unparsable)
    pub fn update_amount(&mut self, id: EntryId, raw: &str) -> bool {
        let amount = parse_amount(raw);
        self.modify(id, |entry| entry.amount = amount)
    }

    /// Name-to-amount mapping for submission
    ///
    /// Duplicate names collapse to one key at the position of the first
    /// occurrence, holding the value of the most recently written row.
    pub fn to_mapping(&self) -> AmountMap {
        let mut resolved: Vec<(&NamedAmount, u64)> = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            match resolved.iter_mut().find(|slot| slot.0.name == row.value.name) {
                Some(slot) if row.written > slot.1 => *slot = (&row.value, row.written),
                Some(_) => {}
                None => resolved.push((&row.value, row.written)),
            }
        }
        resolved
            .into_iter()
            .map(|(e, _)| (e.name.clone(), e.amount))
            .collect()
    }

    /// Names used by more than one row
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen: Vec<&str> = Vec::new();
        let mut dups: Vec<String> = Vec::new();
        for (_, entry) in self.iter() {
            if seen.contains(&entry.name.as_str()) {
                if !dups.contains(&entry.name) {
                    dups.push(entry.name.clone());
                }
            } else {
                seen.push(&entry.name);
            }
        }
        dups
    }
}

/// Editor for an ordered price history
pub type PriceSeriesEditor = CollectionEditor<PricePoint>;

impl CollectionEditor<PricePoint> {
    /// Set a price from raw form input (`NaN` when unparsable)
    pub fn update_price(&mut self, id: EntryId, raw: &str) -> bool {
        let price = parse_amount(raw);
        self.modify(id, |point| point.price = price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio(entries: &[(&str, &str)]) -> (PortfolioEditor, Vec<EntryId>) {
        let mut editor = PortfolioEditor::new();
        let ids = entries
            .iter()
            .map(|(name, amount)| {
                let id = editor.add();
                editor.rename(id, *name);
                editor.update_amount(id, amount);
                id
            })
            .collect();
        (editor, ids)
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut series = PriceSeriesEditor::new();
        for raw in ["100", "102", "98", "103", "101"] {
            let id = series.add();
            series.update_price(id, raw);
        }
        let prices: Vec<f64> = series.values().iter().map(|p| p.price).collect();
        assert_eq!(prices, [100.0, 102.0, 98.0, 103.0, 101.0]);
    }

    #[test]
    fn test_add_uses_defaults() {
        let mut editor = PortfolioEditor::new();
        let id = editor.add();
        assert_eq!(editor.get(id), Some(&NamedAmount::new("", 0.0)));

        let mut series = PriceSeriesEditor::new();
        let id = series.add();
        assert_eq!(series.get(id), Some(&PricePoint { price: 0.0 }));
    }

    #[test]
    fn test_rename_collision_last_write_wins() {
        let (mut editor, ids) = portfolio(&[("A", "5"), ("B", "3")]);
        assert!(editor.rename(ids[0], "B"));

        assert_eq!(editor.len(), 2);
        let mapping = editor.to_mapping();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("B"), Some(5.0));
        assert_eq!(editor.duplicate_names(), ["B"]);
    }

    #[test]
    fn test_later_amount_edit_wins_collision() {
        let (mut editor, ids) = portfolio(&[("A", "5"), ("B", "3")]);
        editor.rename(ids[0], "B");
        editor.update_amount(ids[1], "7");

        assert_eq!(editor.to_mapping().get("B"), Some(7.0));
    }

    #[test]
    fn test_rename_keeps_row_order() {
        let (mut editor, ids) = portfolio(&[("BTC", "1"), ("ETH", "2"), ("SOL", "3")]);
        editor.rename(ids[1], "DOT");

        let names: Vec<_> = editor.iter().map(|(_, e)| e.name.clone()).collect();
        assert_eq!(names, ["BTC", "DOT", "SOL"]);
        assert_eq!(editor.get(ids[1]).map(|e| e.amount), Some(2.0));
    }

    #[test]
    fn test_non_numeric_amount_is_nan() {
        let (mut editor, ids) = portfolio(&[("BTC", "1")]);
        assert!(editor.update_amount(ids[0], "abc"));

        assert_eq!(editor.len(), 1);
        assert!(editor.get(ids[0]).is_some_and(|e| e.amount.is_nan()));
        assert!(editor.has_non_numeric());
    }

    #[test]
    fn test_remove_shifts_positions_and_stale_ids_are_ignored() {
        let mut series = PriceSeriesEditor::new();
        let ids: Vec<_> = (0..3).map(|_| series.add()).collect();

        assert!(series.remove(ids[0]));
        assert_eq!(series.position(ids[2]), Some(1));
        assert_eq!(series.id_at(0), Some(ids[1]));

        series.update_price(ids[2], "7");
        assert_eq!(series.get_at(1), Some(&PricePoint { price: 7.0 }));
        assert_eq!(series.get_at(2), None);

        assert!(!series.remove(ids[0]));
        assert!(!series.update_price(ids[0], "5"));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut series = PriceSeriesEditor::new();
        let first = series.add();
        series.remove(first);
        let second = series.add();
        assert_ne!(first, second);
    }

    #[test]
    fn test_mapping_keeps_first_position() {
        let (mut editor, ids) = portfolio(&[("BTC", "1"), ("ETH", "2"), ("SOL", "3")]);
        editor.rename(ids[2], "BTC");

        let names: Vec<_> = editor.to_mapping().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["BTC", "ETH"]);
        assert_eq!(editor.to_mapping().get("BTC"), Some(3.0));
    }
}
