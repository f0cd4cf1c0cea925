use crate::models::{Question, Quiz};
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use service_core::error::AppError;

/// Keyed lookup of quizzes.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// `Ok(None)` when no quiz has this id. Identifiers the store cannot
    /// interpret are an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<Quiz>, AppError>;
}

/// Batch lookup of questions.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Every question whose id is in `ids`, in store order. Unknown ids are skipped.
    async fn find_where_id_in(&self, ids: &[ObjectId]) -> Result<Vec<Question>, AppError>;
}

#[derive(Clone)]
pub struct QuizRepository {
    quiz_collection: Collection<Quiz>,
    question_collection: Collection<Document>,
}

impl QuizRepository {
    pub fn new(db: &MongoDb) -> Self {
        Self {
            quiz_collection: db.quizzes(),
            question_collection: db.questions(),
        }
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|e| {
        AppError::DatabaseError(anyhow::anyhow!(
            "Cast to ObjectId failed for value \"{}\": {}",
            id,
            e
        ))
    })
}

#[async_trait]
impl QuizStore for QuizRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Quiz>, AppError> {
        let oid = parse_object_id(id)?;
        let quiz = self
            .quiz_collection
            .find_one(doc! { "_id": oid }, None)
            .await?;
        Ok(quiz)
    }
}

#[async_trait]
impl QuestionStore for QuizRepository {
    async fn find_where_id_in(&self, ids: &[ObjectId]) -> Result<Vec<Question>, AppError> {
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let documents: Vec<Document> = self
            .question_collection
            .find(filter, None)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Question::try_from).collect()
    }
}
