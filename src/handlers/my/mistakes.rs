use crate::{error, extractors::Json, jwt::Claims, Result, StateTrait};
use axum::extract::State;
use entity::{questions, users};
use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    id: i32,
    subject: String,
    content: String,
    options: String,
    answer: String,
}

/// The join is deliberately not distinct: missing the same question twice
/// lists it twice.
pub async fn get_mistakes<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Vec<Response>>> {
    let user = users::Entity::find_by_username(&claims.sub)
        .one(state.db())
        .await?
        .ok_or(error::UNKNOWN_USER)?;

    let res = questions::Entity::find_missed_by(user.id)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
