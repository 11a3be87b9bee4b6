//! Response envelope handling.

use serde::Deserialize;

/// A response body that is either the value itself or `{"data": value}`.
///
/// The backend is inconsistent between endpoints, so both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } | Payload::Bare(data) => data,
        }
    }
}
