//! Per-year and cross-year accumulation of normalized records.

use crate::record::NormalizedRecord;

/// Records for one year, in page order then item order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearResultSet {
    year: i32,
    records: Vec<NormalizedRecord>,
}

impl YearResultSet {
    pub fn new(year: i32) -> Self {
        Self { year, records: Vec::new() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Append a record. Records from another year are a caller bug.
    pub fn push(&mut self, record: NormalizedRecord) {
        debug_assert_eq!(record.year, self.year);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }
}

/// Concatenation of year sets in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedResultSet {
    years: Vec<i32>,
    records: Vec<NormalizedRecord>,
}

impl CombinedResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, set: YearResultSet) {
        self.years.push(set.year);
        self.records.extend(set.records);
    }

    /// Years added so far, including ones that produced no records.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }
}
