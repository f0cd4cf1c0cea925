use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;

/// A question as stored in the `questions` collection.
///
/// The content is opaque to this service and kept as raw BSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: ObjectId,
    pub content: Document,
}

impl Question {
    pub fn new(content: Document) -> Self {
        Self {
            id: ObjectId::new(),
            content,
        }
    }

    /// Stored form: the content with `_id` set.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("_id", self.id);
        for (key, value) in &self.content {
            if key != "_id" {
                doc.insert(key.clone(), value.clone());
            }
        }
        doc
    }
}

impl TryFrom<Document> for Question {
    type Error = AppError;

    fn try_from(mut doc: Document) -> Result<Self, Self::Error> {
        let id = doc.get_object_id("_id").map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Question document has no ObjectId _id: {}", e))
        })?;
        doc.remove("_id");
        Ok(Self { id, content: doc })
    }
}
