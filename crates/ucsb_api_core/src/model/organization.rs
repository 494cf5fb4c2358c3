//! Student organizations, keyed by their caller-supplied `orgCode`.

use super::{KeyStrategy, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    /// Optional in update bodies; the query parameter names the row.
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Record for UcsbOrganization {
    type Key = String;

    const ENTITY_NAME: &'static str = "UCSBOrganization";
    const KEY_PARAM: &'static str = "orgCode";
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::Natural;

    fn key(&self) -> Option<String> {
        Some(self.org_code.clone())
    }

    fn clear_generated_key(&mut self) {}

    fn overwrite_from(&mut self, incoming: Self) {
        self.org_translation_short = incoming.org_translation_short;
        self.org_translation = incoming.org_translation;
        self.inactive = incoming.inactive;
    }
}
