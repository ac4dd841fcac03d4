use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::{Path, State};
use entity::questions;
use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    id: i32,
    subject: String,
    content: String,
    /// serialized choice map, passed through as stored
    options: String,
    answer: String,
}

pub async fn list_questions<S: StateTrait>(
    State(state): State<S>,
    Path(subject): Path<String>,
) -> Result<Json<Vec<Response>>> {
    let res = questions::Entity::find_by_subject(&subject)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
