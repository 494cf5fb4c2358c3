//! Table mappings for every record type.

use super::record_repo::{bool_value, parse_bool, parse_timestamp, timestamp_value};
use super::{RepoResult, SqlRecord};
use crate::model::article::Article;
use crate::model::dining_commons_menu_item::UcsbDiningCommonsMenuItem;
use crate::model::menu_item_review::MenuItemReview;
use crate::model::organization::UcsbOrganization;
use crate::model::recommendation_request::RecommendationRequest;
use crate::model::RecordId;
use rusqlite::types::Value;
use rusqlite::Row;

impl SqlRecord for RecommendationRequest {
    const TABLE: &'static str = "recommendation_requests";
    const KEY_COLUMN: &'static str = "id";
    const FIELD_COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];

    fn key_value(key: &RecordId) -> Value {
        Value::Integer(*key)
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.requester_email.clone()),
            Value::Text(self.professor_email.clone()),
            Value::Text(self.explanation.clone()),
            timestamp_value(&self.date_requested),
            timestamp_value(&self.date_needed),
            bool_value(self.done),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            requester_email: row.get("requester_email")?,
            professor_email: row.get("professor_email")?,
            explanation: row.get("explanation")?,
            date_requested: parse_timestamp(row, Self::TABLE, "date_requested")?,
            date_needed: parse_timestamp(row, Self::TABLE, "date_needed")?,
            done: parse_bool(row, Self::TABLE, "done")?,
        })
    }

    fn with_generated_key(self, id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl SqlRecord for MenuItemReview {
    const TABLE: &'static str = "menu_item_reviews";
    const KEY_COLUMN: &'static str = "id";
    const FIELD_COLUMNS: &'static [&'static str] = &[
        "item_id",
        "reviewer_email",
        "stars",
        "date_reviewed",
        "comments",
    ];

    fn key_value(key: &RecordId) -> Value {
        Value::Integer(*key)
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.item_id),
            Value::Text(self.reviewer_email.clone()),
            Value::Integer(i64::from(self.stars)),
            timestamp_value(&self.date_reviewed),
            Value::Text(self.comments.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            item_id: row.get("item_id")?,
            reviewer_email: row.get("reviewer_email")?,
            stars: row.get("stars")?,
            date_reviewed: parse_timestamp(row, Self::TABLE, "date_reviewed")?,
            comments: row.get("comments")?,
        })
    }

    fn with_generated_key(self, id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl SqlRecord for UcsbOrganization {
    const TABLE: &'static str = "ucsb_organizations";
    const KEY_COLUMN: &'static str = "org_code";
    const FIELD_COLUMNS: &'static [&'static str] =
        &["org_translation_short", "org_translation", "inactive"];

    fn key_value(key: &String) -> Value {
        Value::Text(key.clone())
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.org_translation_short.clone()),
            Value::Text(self.org_translation.clone()),
            bool_value(self.inactive),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            org_code: row.get("org_code")?,
            org_translation_short: row.get("org_translation_short")?,
            org_translation: row.get("org_translation")?,
            inactive: parse_bool(row, Self::TABLE, "inactive")?,
        })
    }

    // Natural keys are never generated.
    fn with_generated_key(self, _id: RecordId) -> Self {
        self
    }
}

impl SqlRecord for UcsbDiningCommonsMenuItem {
    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const KEY_COLUMN: &'static str = "id";
    const FIELD_COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];

    fn key_value(key: &RecordId) -> Value {
        Value::Integer(*key)
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.dining_commons_code.clone()),
            Value::Text(self.name.clone()),
            Value::Text(self.station.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            dining_commons_code: row.get("dining_commons_code")?,
            name: row.get("name")?,
            station: row.get("station")?,
        })
    }

    fn with_generated_key(self, id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl SqlRecord for Article {
    const TABLE: &'static str = "articles";
    const KEY_COLUMN: &'static str = "id";
    const FIELD_COLUMNS: &'static [&'static str] =
        &["title", "url", "explanation", "email", "date_added"];

    fn key_value(key: &RecordId) -> Value {
        Value::Integer(*key)
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.title.clone()),
            Value::Text(self.url.clone()),
            Value::Text(self.explanation.clone()),
            Value::Text(self.email.clone()),
            timestamp_value(&self.date_added),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            title: row.get("title")?,
            url: row.get("url")?,
            explanation: row.get("explanation")?,
            email: row.get("email")?,
            date_added: parse_timestamp(row, Self::TABLE, "date_added")?,
        })
    }

    fn with_generated_key(self, id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
