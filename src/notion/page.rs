use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{first_plain_text, lenient_runs, RichText};

pub const TITLE_PROPERTY: &str = "Name";
pub const SLUG_PROPERTY: &str = "Slug";
pub const PUBLISHED_PROPERTY: &str = "Published";

/// One entry of a database query.
///
/// Only pages carry `properties`; anything else in the result set is kept
/// with its id so it can still be reported.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default)]
    pub properties: Option<HashMap<String, Property>>,
}

impl Page {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.as_ref()?.get(name)
    }
    /// First run of `Name`, when it is declared as the title property
    pub fn title(&self) -> Option<String> {
        match self.property(TITLE_PROPERTY)? {
            Property::Title { title } => first_plain_text(title),
            _ => None,
        }
    }
    /// First run of `Slug`, when it is declared as rich text
    pub fn slug(&self) -> Option<String> {
        match self.property(SLUG_PROPERTY)? {
            Property::RichText { rich_text } => first_plain_text(rich_text),
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Property {
    Title {
        #[serde(default, deserialize_with = "lenient_runs")]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default, deserialize_with = "lenient_runs")]
        rich_text: Vec<RichText>,
    },
    #[serde(other)]
    Unsupported,
}
