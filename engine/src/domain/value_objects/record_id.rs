//! Record identifier
//! Sequential integer ids assigned by the service on create

use serde::{Deserialize, Serialize};

/// Identifier of a record in the dataset
///
/// Ids are assigned as `max existing id + 1`, so an id can be reused after
/// the record holding the current maximum is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// The id assigned to the first record of an empty dataset
    pub const FIRST: RecordId = RecordId(1);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// The id assigned to a record created while this is the maximum id
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
