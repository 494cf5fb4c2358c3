//! Reviews of dining commons menu items.

use super::{DeleteMessageStyle, KeyStrategy, Record, RecordId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Record for MenuItemReview {
    type Key = RecordId;

    const ENTITY_NAME: &'static str = "MenuItemReview";
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::Generated;
    // Delete replies say "record <id> ..." instead of the entity name.
    const DELETE_MESSAGE_STYLE: DeleteMessageStyle = DeleteMessageStyle::Record;

    fn key(&self) -> Option<RecordId> {
        self.id
    }

    fn clear_generated_key(&mut self) {
        self.id = None;
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.item_id = incoming.item_id;
        self.reviewer_email = incoming.reviewer_email;
        self.stars = incoming.stars;
        self.date_reviewed = incoming.date_reviewed;
        self.comments = incoming.comments;
    }
}

#[cfg(test)]
mod tests {
    use super::MenuItemReview;
    use crate::model::{DeleteMessageStyle, Record};

    #[test]
    fn delete_messages_use_record_wording() {
        let style = MenuItemReview::DELETE_MESSAGE_STYLE;
        assert_eq!(style, DeleteMessageStyle::Record);
        assert_eq!(
            style.deleted_message(MenuItemReview::ENTITY_NAME, 15),
            "record 15 deleted"
        );
        assert_eq!(
            style.not_found_message(MenuItemReview::ENTITY_NAME, 15),
            "record 15 not found"
        );
    }

    #[test]
    fn deserializes_body_without_id() {
        let review: MenuItemReview = serde_json::from_str(
            r#"{"itemId":99,"reviewerEmail":"admin@ucsb.edu","stars":5,
                "dateReviewed":"2025-10-25T20:15:00","comments":"Perfect!"}"#,
        )
        .expect("deserialize");
        assert_eq!(review.id, None);
        assert_eq!(review.item_id, 99);
        assert_eq!(review.stars, 5);
    }

    #[test]
    fn accepts_minute_precision_review_dates() {
        let review: MenuItemReview = serde_json::from_str(
            r#"{"itemId":27,"reviewerEmail":"cgaucho@ucsb.edu","stars":2,
                "dateReviewed":"2025-11-12T00:42","comments":"cold"}"#,
        )
        .expect("deserialize");
        assert_eq!(
            serde_json::to_value(&review).expect("serialize")["dateReviewed"],
            "2025-11-12T00:42:00"
        );
    }
}
