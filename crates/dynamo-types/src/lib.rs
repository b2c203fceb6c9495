//! Forward conversion: `FieldValue` → DynamoDB `AttributeValue`.
//!
//! This crate maps seed-core's storage-agnostic values onto the attribute
//! types the DynamoDB `PutItem` API accepts. The mapping is total: every
//! `FieldValue` kind has exactly one attribute representation.

use aws_sdk_dynamodb::types::AttributeValue;
use seed_core::{FieldValue, UserRecord};
use std::collections::HashMap;

/// Wrapper for attribute values that can be put into a DynamoDB item.
#[derive(Debug, Clone)]
pub struct DynamoValue(pub AttributeValue);

impl DynamoValue {
    /// Get the inner attribute value.
    pub fn into_inner(self) -> AttributeValue {
        self.0
    }

    /// Get a reference to the inner attribute value.
    pub fn as_inner(&self) -> &AttributeValue {
        &self.0
    }
}

impl From<FieldValue> for DynamoValue {
    fn from(value: FieldValue) -> Self {
        match value {
            // Boolean
            FieldValue::Bool(b) => DynamoValue(AttributeValue::Bool(b)),

            // Numbers travel as their decimal string form (DynamoDB `N`)
            FieldValue::Int(i) => DynamoValue(AttributeValue::N(i.to_string())),

            // String
            FieldValue::String(s) => DynamoValue(AttributeValue::S(s)),

            // List - elements convert recursively
            FieldValue::Array(items) => {
                let list = items
                    .into_iter()
                    .map(|item| DynamoValue::from(item).into_inner())
                    .collect();
                DynamoValue(AttributeValue::L(list))
            }

            // Map - values convert recursively
            FieldValue::Object(entries) => {
                let map = entries
                    .into_iter()
                    .map(|(name, item)| (name, DynamoValue::from(item).into_inner()))
                    .collect();
                DynamoValue(AttributeValue::M(map))
            }

            // Null
            FieldValue::Null => DynamoValue(AttributeValue::Null(true)),
        }
    }
}

/// Convert a user record into a DynamoDB item map, id included.
///
/// The result holds the record's fields unmodified, plus the `id` attribute
/// carrying the record's UUID in hyphenated form.
pub fn record_to_item(record: &UserRecord) -> HashMap<String, AttributeValue> {
    let mut item: HashMap<String, AttributeValue> = record
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), DynamoValue::from(value.clone()).into_inner()))
        .collect();
    item.insert("id".to_string(), AttributeValue::S(record.id.to_string()));
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(
            DynamoValue::from(FieldValue::Bool(true)).into_inner(),
            AttributeValue::Bool(true)
        );
        assert_eq!(
            DynamoValue::from(FieldValue::Int(42)).into_inner(),
            AttributeValue::N("42".to_string())
        );
        assert_eq!(
            DynamoValue::from(FieldValue::Int(-7)).into_inner(),
            AttributeValue::N("-7".to_string())
        );
        assert_eq!(
            DynamoValue::from(FieldValue::string("hello")).into_inner(),
            AttributeValue::S("hello".to_string())
        );
        assert_eq!(
            DynamoValue::from(FieldValue::Null).into_inner(),
            AttributeValue::Null(true)
        );
    }

    #[test]
    fn test_list_conversion() {
        let value = FieldValue::Array(vec![FieldValue::string("a"), FieldValue::Int(1)]);

        let attr = DynamoValue::from(value).into_inner();

        assert_eq!(
            attr,
            AttributeValue::L(vec![
                AttributeValue::S("a".to_string()),
                AttributeValue::N("1".to_string()),
            ])
        );
    }

    #[test]
    fn test_nested_map_conversion() {
        let inner: HashMap<String, FieldValue> =
            [("mode".to_string(), FieldValue::string("Dark"))]
                .into_iter()
                .collect();
        let value = FieldValue::Object(
            [("appearance".to_string(), FieldValue::Object(inner))]
                .into_iter()
                .collect(),
        );

        let attr = DynamoValue::from(value).into_inner();

        let AttributeValue::M(outer) = attr else {
            panic!("expected a map attribute");
        };
        let AttributeValue::M(appearance) = &outer["appearance"] else {
            panic!("expected a nested map attribute");
        };
        assert_eq!(
            appearance["mode"],
            AttributeValue::S("Dark".to_string())
        );
    }

    #[test]
    fn test_record_to_item_carries_all_fields_and_id() {
        let id = Uuid::new_v4();
        let record = UserRecord::builder(0, id)
            .field("handle", FieldValue::string("alice"))
            .field("spillCount", FieldValue::Int(321))
            .field("allowCodes", FieldValue::Bool(false))
            .build();

        let item = record_to_item(&record);

        assert_eq!(item.len(), 4);
        assert_eq!(item["id"], AttributeValue::S(id.to_string()));
        assert_eq!(item["handle"], AttributeValue::S("alice".to_string()));
        assert_eq!(item["spillCount"], AttributeValue::N("321".to_string()));
        assert_eq!(item["allowCodes"], AttributeValue::Bool(false));
    }
}
