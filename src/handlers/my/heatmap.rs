use crate::{error, extractors::Json, jwt::Claims, Result, StateTrait};
use axum::extract::State;
use chrono::NaiveDate;
use entity::{study_records, users};
use std::collections::BTreeMap;

/// One entry per study day, keyed by ISO date.
pub async fn get_heatmap<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<BTreeMap<NaiveDate, i32>>> {
    let user = users::Entity::find_by_username(&claims.sub)
        .one(state.db())
        .await?
        .ok_or(error::UNKNOWN_USER)?;

    let records = study_records::Entity::find_for_user(user.id)
        .all(state.db())
        .await?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| (record.date, record.count))
            .collect(),
    ))
}
