use crate::dtos::QuestionResponse;
use crate::middleware::QuizId;
use crate::models::Question;
use crate::startup::AppState;
use axum::{extract::State, Json};
use metrics::counter;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::collections::HashSet;

/// `GET /api/question?quiz=<id>`: the questions a quiz references.
///
/// References that no longer resolve are dropped without error. Order is
/// whatever the question store returns.
pub async fn list_questions(
    State(state): State<AppState>,
    QuizId(quiz_id): QuizId,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    tracing::debug!(quiz_id = %quiz_id, "Looking up quiz");

    let quiz = state.quizzes.find_by_id(&quiz_id).await?.ok_or_else(|| {
        counter!("quiz_question_lookups_total", "outcome" => "quiz_not_found").increment(1);
        AppError::NotFound(anyhow::anyhow!("Quiz not found"))
    })?;

    let questions = state.questions.find_where_id_in(&quiz.questions).await?;

    let missing = missing_references(&quiz.questions, &questions);
    if missing > 0 {
        tracing::warn!(
            quiz_id = %quiz_id,
            referenced = quiz.questions.len(),
            missing,
            "Quiz references questions that do not exist"
        );
    }

    tracing::info!(
        quiz_id = %quiz_id,
        returned = questions.len(),
        "Quiz questions resolved"
    );
    counter!("quiz_question_lookups_total", "outcome" => "ok").increment(1);

    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// Distinct referenced ids with no matching question. A batch lookup yields
/// each document once, so duplicate references must not count as missing.
fn missing_references(referenced: &[ObjectId], found: &[Question]) -> usize {
    let found: HashSet<ObjectId> = found.iter().map(|q| q.id).collect();
    referenced
        .iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|id| !found.contains(*id))
        .count()
}
