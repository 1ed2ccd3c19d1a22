//! Typed settings data edited by the form.

use serde::{Deserialize, Serialize};

/// One of the repeating lists on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    From,
    To,
    Blacklist,
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::From, ListField::To, ListField::Blacklist];

    /// Wire name used as the input field name, without the `[]` suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            ListField::From => "from",
            ListField::To => "to",
            ListField::Blacklist => "blacklist",
        }
    }

    /// Section heading shown above the list.
    pub fn label(self) -> &'static str {
        match self {
            ListField::From => "From whitelist",
            ListField::To => "To whitelist",
            ListField::Blacklist => "Blacklist",
        }
    }
}

/// Per-user settings: the work mail address plus the three repeating lists.
///
/// Blank rows are a UI artifact; list values here are always non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub user: String,
    pub workmail: String,
    pub from_whitelist: Vec<String>,
    pub to_whitelist: Vec<String>,
    pub blacklist: Vec<String>,
}

impl Settings {
    /// Values of one repeating list.
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::From => &self.from_whitelist,
            ListField::To => &self.to_whitelist,
            ListField::Blacklist => &self.blacklist,
        }
    }
}
