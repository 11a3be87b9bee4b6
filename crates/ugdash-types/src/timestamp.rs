//! Backend epoch-seconds wrapper.

use serde::{Deserialize, Serialize};

/// Timestamp as serialized by the backend document store.
///
/// On the wire: `{"_seconds": 1760868000, "_nanoseconds": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(rename = "_seconds", alias = "seconds", default)]
    pub seconds: i64,
    #[serde(rename = "_nanoseconds", alias = "nanoseconds", default)]
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds: 0,
        }
    }

    /// Zero seconds means the backend never set the field.
    pub fn is_set(&self) -> bool {
        self.seconds != 0
    }
}
