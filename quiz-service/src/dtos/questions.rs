use crate::models::Question;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query string of `GET /api/question`.
#[derive(Debug, Default, PartialEq)]
pub struct QuestionListParams {
    pub quiz: Option<String>,
}

impl QuestionListParams {
    /// Parse a raw query string. The first `quiz` value wins; an undecodable
    /// query string yields no parameters.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
        let quiz = pairs
            .into_iter()
            .find(|(key, _)| key == "quiz")
            .map(|(_, value)| value);
        Self { quiz }
    }
}

/// A question rendered as JSON. ObjectIds at any depth become hex strings and
/// dates RFC 3339 strings; other BSON types use relaxed extended JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_hex(),
            content: document_to_json(question.content),
        }
    }
}

fn document_to_json(doc: Document) -> Map<String, Value> {
    doc.into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(iso) => Value::String(iso),
            // Out of RFC 3339 range.
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => Value::Object(document_to_json(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
