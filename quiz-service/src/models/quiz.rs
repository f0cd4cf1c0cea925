use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A quiz as stored in the `quizzes` collection.
///
/// Only the question references are read here; any other fields on the
/// document are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub questions: Vec<ObjectId>,
}

impl Quiz {
    pub fn new(questions: Vec<ObjectId>) -> Self {
        Self {
            id: ObjectId::new(),
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn missing_questions_field_reads_as_empty() {
        let id = ObjectId::new();
        let quiz: Quiz = bson::from_document(doc! { "_id": id, "title": "Rivers" }).unwrap();

        assert_eq!(quiz.id, id);
        assert!(quiz.questions.is_empty());
    }
}
