use crate::models::Quiz;
use mongodb::{
    bson::{doc, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

pub const QUIZZES_COLLECTION: &str = "quizzes";
pub const QUESTIONS_COLLECTION: &str = "questions";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds the client. The driver connects lazily, so an unreachable
    /// server surfaces on the first operation rather than here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn quizzes(&self) -> Collection<Quiz> {
        self.db.collection(QUIZZES_COLLECTION)
    }

    /// Questions are read untyped; their fields belong to whoever writes them.
    pub fn questions(&self) -> Collection<Document> {
        self.db.collection(QUESTIONS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
