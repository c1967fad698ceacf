//! Notification DTOs and @-mention extraction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Separator between the message and each mentioned student.
pub const MENTION_DELIMITER: &str = " @";

/// Body of `POST /api/retrievefornotifications`.
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
pub struct RetrieveNotificationsDto {
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub notification: String,
}

#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
pub struct RecipientsResponse {
    pub recipients: Vec<String>,
}

/// Returns the students @-mentioned in `notification`.
///
/// The text is split on `" @"`; the first fragment is the message and every
/// later fragment is taken verbatim as a student email, so anything written
/// after the last mention stays attached to it. Repeated mentions are
/// collapsed, keeping first-seen order.
pub fn extract_mentions(notification: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    notification
        .split(MENTION_DELIMITER)
        .skip(1)
        .filter(|mention| seen.insert(*mention))
        .map(str::to_owned)
        .collect()
}
