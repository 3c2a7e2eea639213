use log::debug;
use serde::{Deserialize, Serialize};

use crate::notion::{Block, BlockBody};

/// One render-ready unit of a post.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Content {
    Paragraph {
        text: Option<String>,
    },
    Quote {
        text: Option<String>,
    },
    Heading2 {
        text: Option<String>,
    },
    Heading3 {
        text: Option<String>,
    },
    Code {
        text: Option<String>,
        language: Option<String>,
    },
}

impl Content {
    /// Map a raw block, dropping anything without a supported type.
    pub fn from_block(block: &Block) -> Option<Self> {
        let Some(body) = block.body() else {
            debug!("Skipping untyped block");
            return None;
        };

        let content = match body {
            BlockBody::Paragraph { paragraph } => Content::Paragraph {
                text: paragraph.text(),
            },
            BlockBody::Heading2 { heading_2 } => Content::Heading2 {
                text: heading_2.text(),
            },
            BlockBody::Heading3 { heading_3 } => Content::Heading3 {
                text: heading_3.text(),
            },
            BlockBody::Quote { quote } => Content::Quote { text: quote.text() },
            BlockBody::Code { code } => Content::Code {
                text: code.text(),
                language: code.language.clone(),
            },
            BlockBody::Unsupported => {
                debug!("Skipping unsupported block");
                return None;
            }
        };
        Some(content)
    }
}
