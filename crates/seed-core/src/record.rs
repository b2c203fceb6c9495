//! Value and record representations for generated user profiles.
//!
//! This module defines the intermediate value type produced by the record
//! generator and the record structure that the DynamoDB sink and the
//! downstream projections consume.

use std::collections::HashMap;
use uuid::Uuid;

/// Every non-id field a generated user record carries.
///
/// The `id` attribute is held separately on [`UserRecord`] and joins these
/// when the record is converted to an item map or to JSON.
pub const FIELD_NAMES: [&str; 34] = [
    "accessibility",
    "allowCodes",
    "appearance",
    "bio",
    "birthdate",
    "brew",
    "contentSetting",
    "country",
    "createdAt",
    "email",
    "ethnicity",
    "followers",
    "followersCount",
    "following",
    "followingCount",
    "gender",
    "handle",
    "imageUrl",
    "lastUpdated",
    "likesCount",
    "location",
    "memberTour",
    "name",
    "notifications",
    "onboardingStep",
    "phone",
    "phoneOptOut",
    "pronouns",
    "repScore",
    "spillCount",
    "tos",
    "userType",
    "website",
    "zipCode",
];

/// Raw generated value before storage-specific conversion.
///
/// `FieldValue` covers exactly the kinds a user record uses: strings,
/// integers, booleans, lists, nested maps, and null.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// String value
    String(String),

    /// Array of values
    Array(Vec<FieldValue>),

    /// Object/map of values
    Object(HashMap<String, FieldValue>),

    /// Null value
    Null,
}

impl FieldValue {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<FieldValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&HashMap<String, FieldValue>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Convert this value to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::Number((*i).into()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(arr) => serde_json::Value::Array(arr.iter().map(Self::to_json).collect()),
            Self::Object(obj) => {
                let map: serde_json::Map<String, serde_json::Value> = obj
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect();
                serde_json::Value::Object(map)
            }
            Self::Null => serde_json::Value::Null,
        }
    }
}

/// A single generated user record.
///
/// `UserRecord` is the intermediate format produced by the generator and
/// consumed by the DynamoDB sink, the JSON emitter, and the projections.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Record index (for incremental generation and reproducibility)
    pub index: u64,

    /// Primary key value
    pub id: Uuid,

    /// Field values (attribute name -> value)
    pub fields: HashMap<String, FieldValue>,
}

impl UserRecord {
    /// Create a new user record.
    pub fn new(index: u64, id: Uuid, fields: HashMap<String, FieldValue>) -> Self {
        Self { index, id, fields }
    }

    /// Create a new user record with a builder pattern.
    pub fn builder(index: u64, id: Uuid) -> UserRecordBuilder {
        UserRecordBuilder {
            index,
            id,
            fields: HashMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get the number of fields (excluding the id).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Convert the record to a JSON object, id included.
    ///
    /// Keys come out sorted, which keeps emitted JSON lines stable across
    /// runs with the same seed.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "id".to_string(),
            serde_json::Value::String(self.id.to_string()),
        );
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_json());
        }
        serde_json::Value::Object(map)
    }
}

/// Builder for `UserRecord`.
pub struct UserRecordBuilder {
    index: u64,
    id: Uuid,
    fields: HashMap<String, FieldValue>,
}

impl UserRecordBuilder {
    /// Add a field to the record.
    pub fn field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Build the user record.
    pub fn build(self) -> UserRecord {
        UserRecord {
            index: self.index,
            id: self.id,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Int(42).as_i64(), Some(42));
        assert_eq!(FieldValue::string("test").as_str(), Some("test"));

        // Cross-kind accesses return None
        assert_eq!(FieldValue::Bool(true).as_i64(), None);
        assert_eq!(FieldValue::Int(42).as_str(), None);
        assert_eq!(FieldValue::Null.as_bool(), None);
    }

    #[test]
    fn test_field_value_to_json() {
        assert_eq!(FieldValue::Bool(false).to_json(), serde_json::json!(false));
        assert_eq!(FieldValue::Int(7).to_json(), serde_json::json!(7));
        assert_eq!(
            FieldValue::string("hello").to_json(),
            serde_json::json!("hello")
        );
        assert_eq!(FieldValue::Null.to_json(), serde_json::Value::Null);

        let arr = FieldValue::Array(vec![FieldValue::Int(1), FieldValue::string("two")]);
        assert_eq!(arr.to_json(), serde_json::json!([1, "two"]));

        let obj = FieldValue::Object(
            [("mode".to_string(), FieldValue::string("Dark"))]
                .into_iter()
                .collect(),
        );
        assert_eq!(obj.to_json(), serde_json::json!({"mode": "Dark"}));
    }

    #[test]
    fn test_user_record_builder() {
        let id = Uuid::new_v4();
        let record = UserRecord::builder(0, id)
            .field("handle", FieldValue::string("alice"))
            .field("likesCount", FieldValue::Int(30))
            .build();

        assert_eq!(record.index, 0);
        assert_eq!(record.id, id);
        assert_eq!(record.field_count(), 2);
        assert_eq!(
            record.get_field("handle"),
            Some(&FieldValue::string("alice"))
        );
        assert_eq!(record.get_field("likesCount"), Some(&FieldValue::Int(30)));
        assert_eq!(record.get_field("missing"), None);
    }

    #[test]
    fn test_user_record_to_json_includes_id() {
        let id = Uuid::new_v4();
        let record = UserRecord::builder(3, id)
            .field("handle", FieldValue::string("bob"))
            .build();

        let json = record.to_json();
        assert_eq!(json["id"], serde_json::json!(id.to_string()));
        assert_eq!(json["handle"], serde_json::json!("bob"));
        assert_eq!(json.as_object().map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_field_names_are_distinct() {
        let mut names = FIELD_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELD_NAMES.len());
    }
}
