//! Recommendation letter requests from students to professors.

use super::{KeyStrategy, Record, RecordId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Record for RecommendationRequest {
    type Key = RecordId;

    const ENTITY_NAME: &'static str = "RecommendationRequest";
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::Generated;

    fn key(&self) -> Option<RecordId> {
        self.id
    }

    fn clear_generated_key(&mut self) {
        self.id = None;
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.professor_email = incoming.professor_email;
        self.explanation = incoming.explanation;
        self.date_requested = incoming.date_requested;
        self.date_needed = incoming.date_needed;
        self.done = incoming.done;
    }
}
