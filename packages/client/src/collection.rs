// ABOUTME: Ordered local copy of server entities with optimistic create and reconciliation by id
// ABOUTME: Confirmed results replace in place or append, so the same result applied twice yields one entry

use carryover_notes::Note;
use carryover_tasks::Task;

/// Anything the server identifies by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalCollection<T> {
    items: Vec<T>,
}

impl<T> Default for LocalCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> LocalCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Overwrite everything with a fresh server listing.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Show a not-yet-confirmed entity at the top of the list.
    pub fn insert_provisional(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Swap the provisional entry for the server's version.
    ///
    /// Returns false when the provisional entry is gone, e.g. a refresh
    /// replaced the list while the create was in flight.
    pub fn confirm(&mut self, temp_id: &str, confirmed: T) -> bool {
        match self.position(temp_id) {
            Some(idx) => {
                self.items[idx] = confirmed;
                true
            }
            None => false,
        }
    }

    /// Drop a provisional entry after its create failed.
    pub fn rollback(&mut self, temp_id: &str) -> Option<T> {
        self.remove(temp_id)
    }

    /// Merge a server-confirmed entity: replace the entry with the same id,
    /// or append it when this list has never seen it.
    pub fn apply(&mut self, confirmed: T) {
        match self.position(confirmed.id()) {
            Some(idx) => self.items[idx] = confirmed,
            None => self.items.push(confirmed),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.position(id).map(|idx| self.items.remove(idx))
    }
}
