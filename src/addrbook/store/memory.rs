use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// Keeps the last saved book in memory. Used by tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<AddressBook>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: Some(book),
            save_count: 0,
        }
    }

    pub fn saved(&self) -> Option<&AddressBook> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(book.clone());
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn empty_store_loads_empty_book() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.saved().is_none());
    }

    #[test]
    fn save_replaces_book() {
        let mut store = InMemoryStore::new();
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice"));

        store.save(&book).unwrap();
        assert_eq!(store.load().unwrap(), book);
        assert_eq!(store.save_count(), 1);
    }
}
