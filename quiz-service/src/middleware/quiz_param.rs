//! Extractor for the required `quiz` query parameter.

use crate::dtos::QuestionListParams;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use service_core::error::AppError;

/// The quiz identifier from `?quiz=`, guaranteed non-empty.
///
/// No format check happens here; the value goes to the store as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for QuizId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = QuestionListParams::from_query(parts.uri.query().unwrap_or_default());

        let quiz = params
            .quiz
            .filter(|quiz| !quiz.is_empty())
            .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("quiz is required")))?;

        tracing::Span::current().record("quiz_id", quiz.as_str());

        Ok(QuizId(quiz))
    }
}
