//! Decoder types

/// The decoded records of one page, in server order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<T> {
    records: Vec<T>,
}

impl<T> Fragment<T> {
    /// Wrap decoded records
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Number of records on the page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True for an empty page (`[]`)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Take the records
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}
