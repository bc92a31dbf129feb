//! Ordered, index-addressed collection of the session's wallets.

use tessera::{Error, Result};
use tracing::info;

use crate::record::WalletRecord;

/// A record plus its display state, kept together so removal cannot
/// desynchronise them.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The derived wallet.
    pub record: WalletRecord,
    /// Whether the private key is shown in full.
    pub private_key_visible: bool,
    /// Whether the phrase is shown alongside this wallet.
    pub phrase_visible: bool,
}

impl Entry {
    fn new(record: WalletRecord) -> Self {
        Self {
            record,
            private_key_visible: false,
            phrase_visible: false,
        }
    }
}

/// Wallets in derivation order.
///
/// Removing an entry shifts every later entry down by one.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// An empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a record with both visibility flags off and return its entry.
    pub fn push(&mut self, record: WalletRecord) -> &Entry {
        let index = self.entries.len();
        info!(path = %record.path(), index, "wallet added");
        self.entries.push(Entry::new(record));
        &self.entries[index]
    }

    /// Remove and return the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<WalletRecord> {
        self.check(index)?;
        let entry = self.entries.remove(index);
        info!(path = %entry.record.path(), index, "wallet removed");
        Ok(entry.record)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            info!(count = self.entries.len(), "wallets cleared");
        }
        self.entries.clear();
    }

    /// Number of records; also the next account index.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// The most recently added entry.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Entries in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Coin type shared by all records, if any are held.
    pub fn coin_type(&self) -> Option<u32> {
        self.entries.first().and_then(|entry| entry.record.coin_type())
    }

    /// Flip private-key visibility and return the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn toggle_private_key(&mut self, index: usize) -> Result<bool> {
        let entry = self.entry_mut(index)?;
        entry.private_key_visible = !entry.private_key_visible;
        Ok(entry.private_key_visible)
    }

    /// Flip phrase visibility and return the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn toggle_phrase(&mut self, index: usize) -> Result<bool> {
        let entry = self.entry_mut(index)?;
        entry.phrase_visible = !entry.phrase_visible;
        Ok(entry.phrase_visible)
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry> {
        self.check(index)?;
        Ok(&mut self.entries[index])
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
