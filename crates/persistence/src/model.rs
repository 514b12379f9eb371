//! The Advisor resource.
//!
//! An [`Advisor`] is an identifier plus an open set of attributes. The
//! persistence layer and the REST layer only ever look at the identifier; the
//! attributes travel through untouched and are flattened into the same JSON
//! object on the wire:
//!
//! ```json
//! {"id": 3, "name": "Ada Lovelace", "email": "ada@example.com"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an advisor.
///
/// An id of `0` on an inserted advisor asks the repository to assign one.
pub type AdvisorId = i64;

/// An advisor record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    /// Unique identifier.
    #[serde(default)]
    pub id: AdvisorId,

    /// Every other attribute of the record, kept as-is.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Advisor {
    /// Creates an advisor with the given id and no attributes.
    pub fn new(id: AdvisorId) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    /// Adds an attribute, replacing any previous value under the same key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns an attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns true when the repository is expected to assign the id.
    pub fn needs_id(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attributes_flatten_into_one_object() {
        let advisor = Advisor::new(3)
            .with_attribute("name", "A")
            .with_attribute("active", true);

        let value = serde_json::to_value(&advisor).unwrap();
        assert_eq!(value, json!({"id": 3, "name": "A", "active": true}));
    }

    #[test]
    fn test_missing_id_deserializes_as_zero() {
        let advisor: Advisor = serde_json::from_value(json!({"name": "New"})).unwrap();
        assert_eq!(advisor.id, 0);
        assert!(advisor.needs_id());
        assert_eq!(advisor.attribute("name"), Some(&json!("New")));
    }

    #[test]
    fn test_id_is_not_duplicated_into_attributes() {
        let advisor: Advisor = serde_json::from_value(json!({"id": 9, "name": "X"})).unwrap();
        assert_eq!(advisor.id, 9);
        assert!(advisor.attribute("id").is_none());
    }
}
