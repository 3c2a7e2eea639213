use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A fragment of styled text. Only its plain projection is kept.
#[derive(Deserialize, Serialize, Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: Option<String>,
}

/// Plain text of the first run, if there is one.
pub fn first_plain_text(runs: &[RichText]) -> Option<String> {
    runs.first()?.plain_text.clone()
}

/// Envelope of every paginated list endpoint.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct List<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Reads a run list, treating anything that is not an array as no runs.
///
/// Database schema rows carry `{}` where pages carry a run array. A run that
/// cannot be read keeps its position with no text.
pub fn lenient_runs<'de, D>(deserializer: D) -> Result<Vec<RichText>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(vec![]);
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// Reads a field, falling back to its default when the value has the wrong shape.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Runs {
        #[serde(default, deserialize_with = "lenient_runs")]
        runs: Vec<RichText>,
    }

    fn runs(value: Value) -> Vec<RichText> {
        serde_json::from_value::<Runs>(value).unwrap().runs
    }

    #[test]
    fn first_run_wins() {
        let list = runs(json!({ "runs": [{ "plain_text": "a" }, { "plain_text": "b" }] }));
        assert_eq!(first_plain_text(&list), Some("a".to_string()));
    }

    #[test]
    fn no_runs_is_absent() {
        assert_eq!(first_plain_text(&runs(json!({ "runs": [] }))), None);
        assert_eq!(first_plain_text(&runs(json!({}))), None);
        assert_eq!(first_plain_text(&runs(json!({ "runs": {} }))), None);
        assert_eq!(first_plain_text(&runs(json!({ "runs": null }))), None);
    }

    #[test]
    fn unreadable_first_run_is_absent() {
        let list = runs(json!({ "runs": [{ "plain_text": null }, { "plain_text": "second" }] }));
        assert_eq!(list.len(), 2);
        assert_eq!(first_plain_text(&list), None);

        let list = runs(json!({ "runs": [5, { "plain_text": "second" }] }));
        assert_eq!(first_plain_text(&list), None);
    }

    #[test]
    fn run_without_plain_text_is_absent() {
        let list = runs(json!({ "runs": [{ "type": "text", "text": { "content": "x" } }] }));
        assert_eq!(first_plain_text(&list), None);
    }
}
