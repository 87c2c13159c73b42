//! Person record
//!
//! The three-field name record serialized by the JSON and XML codecs.

use serde::{Deserialize, Serialize};

/// A serializable name record. Missing keys deserialize as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, middle_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name: middle_name.to_string(),
        }
    }
}
