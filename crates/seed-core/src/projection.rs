//! Flattened downstream shapes derived from a user record.
//!
//! Consumers of the seeded table do not read the nested `appearance` map or
//! the `notifications` list directly; they work with two flattened per-user
//! shapes. The projections here compute those shapes from a record without
//! touching any storage.

use crate::record::{FieldValue, UserRecord};
use serde::Serialize;

/// Flattened view of a record's `appearance` map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppearanceProjection {
    pub mode: String,
    pub colorway: String,
    pub theme: String,
    pub deleted: bool,
    pub deleted_at: Option<String>,
    pub profile_id: String,
}

impl AppearanceProjection {
    /// Flatten the `appearance` map of a record.
    ///
    /// Missing keys flatten to their defaults: empty strings for the string
    /// fields, `false` for `deleted`, and `None` for `deleted_at`. A
    /// `deleted_at` that is present but empty also stays `None`.
    pub fn from_record(record: &UserRecord) -> Self {
        let appearance = record
            .get_field("appearance")
            .and_then(FieldValue::as_object);

        let get_str = |name: &str| {
            appearance
                .and_then(|obj| obj.get(name))
                .and_then(FieldValue::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            mode: get_str("mode"),
            colorway: get_str("colorway"),
            theme: get_str("theme"),
            deleted: appearance
                .and_then(|obj| obj.get("deleted"))
                .and_then(FieldValue::as_bool)
                .unwrap_or(false),
            deleted_at: appearance
                .and_then(|obj| obj.get("deleted_at"))
                .and_then(FieldValue::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from),
            profile_id: record.id.to_string(),
        }
    }
}

/// Per-channel boolean flags computed from a record's `notifications` list.
///
/// Each mapped kind yields a push flag and an in-app flag; both are true iff
/// the kind's name occurs in the list, compared case-insensitively. Kinds in
/// the list with no mapped flag (for example the game invites) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationFlags {
    pub push_follows: bool,
    pub push_comments: bool,
    pub push_quotes: bool,
    pub push_likes: bool,
    pub push_mentions: bool,
    pub push_tp_invites: bool,
    pub push_tp_replies: bool,

    pub app_follows: bool,
    pub app_comments: bool,
    pub app_quotes: bool,
    pub app_likes: bool,
    pub app_mentions: bool,
    pub app_tp_invites: bool,
    pub app_tp_replies: bool,

    pub deleted: bool,
    pub deleted_at: Option<String>,
    pub profile_id: String,
}

impl NotificationFlags {
    /// Compute the flags for a record.
    ///
    /// A record without a `notifications` list yields all-false flags.
    pub fn from_record(record: &UserRecord) -> Self {
        let follows = has_notification(record, "Follows");
        let comments = has_notification(record, "Comments");
        let quotes = has_notification(record, "Quotes");
        let likes = has_notification(record, "Likes");
        let mentions = has_notification(record, "Mentions");
        let tp_invites = has_notification(record, "TeaPartyInvites");
        let tp_replies = has_notification(record, "TeaPartyReply");

        Self {
            push_follows: follows,
            push_comments: comments,
            push_quotes: quotes,
            push_likes: likes,
            push_mentions: mentions,
            push_tp_invites: tp_invites,
            push_tp_replies: tp_replies,

            app_follows: follows,
            app_comments: comments,
            app_quotes: quotes,
            app_likes: likes,
            app_mentions: mentions,
            app_tp_invites: tp_invites,
            app_tp_replies: tp_replies,

            deleted: false,
            deleted_at: None,
            profile_id: record.id.to_string(),
        }
    }
}

/// Check whether a notification kind occurs in the record's list.
fn has_notification(record: &UserRecord, kind: &str) -> bool {
    record
        .get_field("notifications")
        .and_then(FieldValue::as_array)
        .map(|list| {
            list.iter()
                .filter_map(FieldValue::as_str)
                .any(|name| name.eq_ignore_ascii_case(kind))
        })
        .unwrap_or(false)
}
