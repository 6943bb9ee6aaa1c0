//! Static code tables.
//!
//! Every table is a `static` slice of records with a hash index built once on
//! first access. The only way in is through [`CodeTable`] and
//! [`DisputeTable`], which hand out shared references and have no mutating
//! API.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{CodeRecord, DisputeRecord, Status};

mod dispute;
mod general;
mod mandate;

pub use dispute::DISPUTE_REASON_CODES;
pub use general::{GENERAL_ERROR_CODES, SUCCESS_CODE};
pub use mandate::MANDATE_ERROR_CODES;

type Index = HashMap<&'static str, usize>;

/// Read-only view over a general or mandate error table.
pub struct CodeTable {
    records: &'static [CodeRecord],
    index: LazyLock<Index, fn() -> Index>,
}

impl CodeTable {
    const fn new(records: &'static [CodeRecord], build: fn() -> Index) -> Self {
        Self {
            records,
            index: LazyLock::new(build),
        }
    }

    /// Exact lookup; `code` must already be uppercase.
    pub fn get(&self, code: &str) -> Option<&'static CodeRecord> {
        self.index.get(code).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CodeRecord> {
        self.records.iter()
    }

    pub fn with_status(&self, status: Status) -> impl Iterator<Item = &'static CodeRecord> {
        self.records.iter().filter(move |record| record.status == status)
    }

    /// Every record whose status is not `Success`, in table order.
    pub fn failures(&self) -> impl Iterator<Item = &'static CodeRecord> {
        self.records.iter().filter(|record| !record.is_success())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read-only view over the dispute reason table.
pub struct DisputeTable {
    records: &'static [DisputeRecord],
    index: LazyLock<Index, fn() -> Index>,
}

impl DisputeTable {
    const fn new(records: &'static [DisputeRecord], build: fn() -> Index) -> Self {
        Self {
            records,
            index: LazyLock::new(build),
        }
    }

    /// Exact lookup; `code` must already be uppercase.
    pub fn get(&self, code: &str) -> Option<&'static DisputeRecord> {
        self.index.get(code).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static DisputeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn index_codes(codes: impl Iterator<Item = &'static str>) -> Index {
    let mut index = HashMap::new();
    for (idx, code) in codes.enumerate() {
        let previous = index.insert(code, idx);
        debug_assert!(previous.is_none(), "duplicate code {code}");
    }
    index
}

fn index_code_records(records: &'static [CodeRecord]) -> Index {
    index_codes(records.iter().map(|record| record.code.as_ref()))
}

fn index_dispute_records(records: &'static [DisputeRecord]) -> Index {
    index_codes(records.iter().map(|record| record.code.as_ref()))
}
