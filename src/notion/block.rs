use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{first_plain_text, lenient, lenient_runs, RichText};

/// One child of a page.
///
/// Result lists may hold partial objects without a `type`; those land in
/// `Untyped` and carry no content.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Block {
    Typed(BlockBody),
    Untyped(Value),
}

impl Block {
    pub fn body(&self) -> Option<&BlockBody> {
        match self {
            Block::Typed(body) => Some(body),
            Block::Untyped(_) => None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BlockBody {
    Paragraph {
        #[serde(default, deserialize_with = "lenient")]
        paragraph: TextPayload,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        #[serde(default, deserialize_with = "lenient")]
        heading_2: TextPayload,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        #[serde(default, deserialize_with = "lenient")]
        heading_3: TextPayload,
    },
    Quote {
        #[serde(default, deserialize_with = "lenient")]
        quote: TextPayload,
    },
    Code {
        #[serde(default, deserialize_with = "lenient")]
        code: CodePayload,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct TextPayload {
    #[serde(default, deserialize_with = "lenient_runs")]
    pub rich_text: Vec<RichText>,
}

impl TextPayload {
    pub fn text(&self) -> Option<String> {
        first_plain_text(&self.rich_text)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct CodePayload {
    #[serde(default, deserialize_with = "lenient_runs")]
    pub rich_text: Vec<RichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<String>,
}

impl CodePayload {
    pub fn text(&self) -> Option<String> {
        first_plain_text(&self.rich_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(value: Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn typed_blocks() {
        let heading = block(json!({
            "object": "block",
            "id": "b1",
            "type": "heading_2",
            "heading_2": { "rich_text": [{ "plain_text": "Intro" }], "is_toggleable": false }
        }));
        assert_eq!(
            heading.body().and_then(|body| match body {
                BlockBody::Heading2 { heading_2 } => heading_2.text(),
                _ => None,
            }),
            Some("Intro".to_string())
        );

        let code = block(json!({
            "type": "code",
            "code": { "rich_text": [{ "plain_text": "fn main() {}" }], "language": "rust" }
        }));
        let Some(BlockBody::Code { code }) = code.body() else {
            panic!("expected a code block");
        };
        assert_eq!(code.language.as_deref(), Some("rust"));
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let image = block(json!({ "type": "image", "image": { "type": "external" } }));
        assert_eq!(image.body(), Some(&BlockBody::Unsupported));
    }

    #[test]
    fn missing_type_is_untyped() {
        let partial = block(json!({ "object": "block", "id": "b2" }));
        assert_eq!(partial.body(), None);
    }

    #[test]
    fn missing_payload_has_no_text() {
        let empty = block(json!({ "type": "quote" }));
        assert_eq!(
            empty.body(),
            Some(&BlockBody::Quote { quote: TextPayload::default() })
        );
    }

    #[test]
    fn malformed_payload_keeps_the_block() {
        let paragraph = block(json!({ "type": "paragraph", "paragraph": null }));
        assert_eq!(
            paragraph.body(),
            Some(&BlockBody::Paragraph { paragraph: TextPayload::default() })
        );

        let code = block(json!({
            "type": "code",
            "code": { "rich_text": [{ "plain_text": "x" }], "language": 5 }
        }));
        let Some(BlockBody::Code { code }) = code.body() else {
            panic!("expected a code block");
        };
        assert_eq!(code.text().as_deref(), Some("x"));
        assert_eq!(code.language, None);
    }
}
