//! Generators for the nested map and list fields of a user record.

use super::numeric::random_int_range;
use super::pick;
use rand::Rng;
use seed_core::FieldValue;
use std::collections::HashMap;

/// Colorways selectable in the `appearance` map.
pub const COLORWAYS: [&str; 3] = ["LavenderFlower", "SkyBlue", "Midnight"];

/// Swipe directions selectable in the `accessibility` map.
pub const SWIPE_DIRECTIONS: [&str; 2] = ["right", "left"];

/// Interest pool the `brew` list samples from.
pub const INTERESTS: [&str; 4] = ["pop_culture", "food", "movies_tv", "sports"];

/// The full set of notification kinds every record carries, in order.
pub const NOTIFICATION_KINDS: [&str; 9] = [
    "Follows",
    "Comments",
    "Quotes",
    "Likes",
    "Mentions",
    "TeaPartyReply",
    "TeaPartyInvites",
    "SpadeGameInvites",
    "GameReply",
];

/// Tour stops counted in the `memberTour` map.
pub const MEMBER_TOUR_STOPS: [&str; 8] = [
    "explore",
    "teaPartyLobby",
    "compose",
    "teaPartyLive",
    "profile",
    "appIntro",
    "details",
    "teaPartyVideo",
];

/// Pronoun entries of the `pronouns` list, in display order.
pub const PRONOUNS: [&str; 3] = ["he", "him", "his"];

/// Generate the `accessibility` map.
pub fn random_accessibility<R: Rng>(rng: &mut R) -> FieldValue {
    let mut map = HashMap::new();
    map.insert(
        "stackSwipeDirection".to_string(),
        FieldValue::string(pick(rng, &SWIPE_DIRECTIONS)),
    );
    FieldValue::Object(map)
}

/// Generate the `appearance` map. The mode is always dark; only the
/// colorway varies.
pub fn random_appearance<R: Rng>(rng: &mut R) -> FieldValue {
    let mut map = HashMap::new();
    map.insert("mode".to_string(), FieldValue::string("Dark"));
    map.insert(
        "colorway".to_string(),
        FieldValue::string(pick(rng, &COLORWAYS)),
    );
    FieldValue::Object(map)
}

/// Generate the `memberTour` map: a 0..=10 visit counter per tour stop,
/// plus the accepted welcome marker.
pub fn random_member_tour<R: Rng>(rng: &mut R) -> FieldValue {
    let mut map = HashMap::new();
    for stop in MEMBER_TOUR_STOPS {
        map.insert(stop.to_string(), FieldValue::Int(random_int_range(rng, 0, 10)));
    }
    map.insert("welcome".to_string(), FieldValue::string("accepted"));
    FieldValue::Object(map)
}

/// Generate the `brew` interest list: four samples from the pool, with
/// replacement.
pub fn random_brew<R: Rng>(rng: &mut R) -> FieldValue {
    let items = (0..4)
        .map(|_| FieldValue::string(pick(rng, &INTERESTS)))
        .collect();
    FieldValue::Array(items)
}

/// The fixed `pronouns` list: each pronoun paired with its display order.
pub fn pronoun_list() -> FieldValue {
    let items = PRONOUNS
        .iter()
        .enumerate()
        .map(|(order, pronoun)| {
            let mut map = HashMap::new();
            map.insert("pronoun".to_string(), FieldValue::string(*pronoun));
            map.insert("order".to_string(), FieldValue::Int(order as i64));
            FieldValue::Object(map)
        })
        .collect();
    FieldValue::Array(items)
}

/// The fixed `notifications` list: every kind, enabled.
pub fn notification_kinds() -> FieldValue {
    let items = NOTIFICATION_KINDS
        .iter()
        .map(|kind| FieldValue::string(*kind))
        .collect();
    FieldValue::Array(items)
}
