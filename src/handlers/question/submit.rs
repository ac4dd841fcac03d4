use crate::{error, extractors::Json, jwt::Claims, Result, StateTrait};
use axum::extract::State;
use chrono::Utc;
use entity::{questions, study_records, users, wrong_questions};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue::Set,
    EntityTrait, TransactionTrait,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Request {
    pub question_id: i32,
    pub user_answer: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    is_correct: bool,
    correct_answer: String,
}

/// Grades a submission and records its side effects.
///
/// The wrong-answer row and the daily counter commit together or not at all.
pub async fn submit<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let user = users::Entity::find_by_username(&claims.sub)
        .one(&txn)
        .await?
        .ok_or(error::UNKNOWN_USER)?;

    let question = questions::Entity::find_by_id(request.question_id)
        .one(&txn)
        .await?
        .ok_or(error::QUESTION_NOT_FOUND)?;

    let today = Utc::now().date_naive();
    let is_correct = request.user_answer.trim() == question.answer.trim();

    if !is_correct {
        let wrong = wrong_questions::ActiveModel {
            user_id: Set(user.id),
            question_id: Set(question.id),
            created_at: Set(today),
            ..Default::default()
        };

        wrong_questions::Entity::insert(wrong)
            .exec_without_returning(&txn)
            .await?;
    }

    // insert-or-increment, so two racing submissions never lose a count
    let record = study_records::ActiveModel {
        user_id: Set(user.id),
        date: Set(today),
        count: Set(1),
        ..Default::default()
    };

    study_records::Entity::insert(record)
        .on_conflict(
            OnConflict::columns([study_records::Column::UserId, study_records::Column::Date])
                .value(
                    study_records::Column::Count,
                    Expr::col(study_records::Column::Count).add(1),
                )
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

    txn.commit().await?;

    Ok(Json(Response {
        is_correct,
        correct_answer: question.answer,
    }))
}
