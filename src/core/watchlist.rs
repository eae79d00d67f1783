use serde::{Deserialize, Serialize};

use crate::core::status::Status;
use crate::utils::error::{Result, WlError};

/// One tracked entry. Field order matters: it is the column order of
/// the persisted CSV records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub status: Status,
}

/// What `Watchlist::add` did. Duplicates are reported instead of
/// appended so the calling layer can decide whether to confirm; the
/// engine itself never prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    Added,
    Duplicate,
}

/// Ordered in-memory collection of items. Insertion order is preserved
/// for `list` output and file round trips.
#[derive(Debug, Default)]
pub struct Watchlist {
    items: Vec<Item>,
}

impl Watchlist {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Appends a new item unless one with the same name already exists,
    /// in which case nothing changes and `Duplicate` is returned.
    pub fn add(&mut self, name: String, status: Status) -> AddOutcome {
        if self.items.iter().any(|item| item.name == name) {
            return AddOutcome::Duplicate;
        }

        self.items.push(Item { name, status });
        AddOutcome::Added
    }

    /// Appends regardless of duplicates, for callers that confirmed the
    /// duplicate add.
    pub fn force_add(&mut self, name: String, status: Status) {
        self.items.push(Item { name, status });
    }

    /// Sets the status of the first item with an exactly matching name.
    pub fn update(&mut self, name: &str, status: Status) -> Result<()> {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.status = status;
                Ok(())
            }
            None => Err(WlError::ItemNotFoundError {
                name: name.to_string(),
            }),
        }
    }

    /// Renames the first item with an exactly matching name. The new
    /// name is not checked for uniqueness.
    pub fn rename(&mut self, name: &str, new_name: String) -> Result<()> {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.name = new_name;
                Ok(())
            }
            None => Err(WlError::ItemNotFoundError {
                name: name.to_string(),
            }),
        }
    }

    /// Removes every item whose name matches exactly and returns how
    /// many were removed.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        let removed = before - self.items.len();

        if removed == 0 {
            return Err(WlError::ItemNotFoundError {
                name: name.to_string(),
            });
        }

        Ok(removed)
    }

    /// Lazy, non-mutating filter: items whose name contains `needle` as
    /// a case-sensitive substring, optionally narrowed to one status.
    /// An empty needle matches every name.
    pub fn search<'a>(
        &'a self,
        needle: &'a str,
        status: Option<Status>,
    ) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |item| {
            item.name.contains(needle) && status.is_none_or(|wanted| item.status == wanted)
        })
    }

    /// Per-status item counts, in the order of the given statuses
    /// (defaulting to the full enumeration). Zero counts are included.
    pub fn summary(&self, statuses: Option<&[Status]>) -> Vec<(Status, usize)> {
        let statuses = statuses.unwrap_or(&Status::ALL);

        statuses
            .iter()
            .map(|&wanted| {
                let count = self.items.iter().filter(|item| item.status == wanted).count();
                (wanted, count)
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
