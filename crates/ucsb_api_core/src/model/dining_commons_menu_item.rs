//! Menu items served at a dining commons station.

use super::{KeyStrategy, Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Record for UcsbDiningCommonsMenuItem {
    type Key = RecordId;

    const ENTITY_NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::Generated;

    fn key(&self) -> Option<RecordId> {
        self.id
    }

    fn clear_generated_key(&mut self) {
        self.id = None;
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.dining_commons_code = incoming.dining_commons_code;
        self.name = incoming.name;
        self.station = incoming.station;
    }
}
