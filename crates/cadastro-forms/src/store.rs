//! Collection stores for committed records

use crate::record::Record;

/// Append-only, insertion-ordered collection of committed records
///
/// There is no update or delete: once appended, a record stays where it is
/// for the lifetime of the store.
pub trait RecordStore {
    /// Append a snapshot at the end of the collection
    fn append(&mut self, record: Record);

    /// Every committed record, in insertion order
    fn all(&self) -> &[Record];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get store backend name
    fn name(&self) -> &'static str;
}

/// In-memory store backend
///
/// Lives as long as the owning controller; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    fn all(&self) -> &[Record] {
        &self.records
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
