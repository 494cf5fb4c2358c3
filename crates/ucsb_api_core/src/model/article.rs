//! Shared news articles.

use super::{KeyStrategy, Record, RecordId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

impl Record for Article {
    type Key = RecordId;

    const ENTITY_NAME: &'static str = "Articles";
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::Generated;

    fn key(&self) -> Option<RecordId> {
        self.id
    }

    fn clear_generated_key(&mut self) {
        self.id = None;
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.title = incoming.title;
        self.url = incoming.url;
        self.explanation = incoming.explanation;
        self.email = incoming.email;
        self.date_added = incoming.date_added;
    }
}
