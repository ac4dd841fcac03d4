use crate::{
    credentials,
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::users::{self, constraints::*, Role};
use sea_orm::{ActiveValue::Set, EntityTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 32))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub grade: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    id: i32,
    username: String,
    role: Role,
    grade: Option<String>,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let password = credentials::hash(request.password).await?;

    let user = users::ActiveModel {
        username: Set(request.username),
        password: Set(password),
        role: Set(Role::Student),
        grade: Set(request.grade),
        avatar: Set(None),
        ..Default::default()
    };

    let result = users::Entity::insert(user)
        .exec_with_returning(state.db())
        .await;

    let user = match result {
        Err(err) if err.unique_violation(UQ_USERS_USERNAME) => {
            return Err(error::DUPLICATE_USERNAME)
        }
        r => r?,
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id: user.id,
            username: user.username,
            role: user.role,
            grade: user.grade,
        }),
    ))
}
