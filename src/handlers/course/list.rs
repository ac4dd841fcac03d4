use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::{Path, State};
use entity::courses;
use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    id: i32,
    title: String,
    subject: String,
    video_url: String,
}

/// Exact subject match; an unknown subject is an empty list, not an error.
pub async fn list_courses<S: StateTrait>(
    State(state): State<S>,
    Path(subject): Path<String>,
) -> Result<Json<Vec<Response>>> {
    let res = courses::Entity::find_by_subject(&subject)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
