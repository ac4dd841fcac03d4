mod claims;

use crate::StateTrait;
use axum::{http::header::AUTHORIZATION, middleware::from_fn_with_state, Router};
pub use claims::*;
use std::iter;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    ServiceBuilderExt,
};

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    // open API, the frontend is served from a different origin
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middlewares = ServiceBuilder::new()
        .catch_panic()
        .sensitive_headers(iter::once(AUTHORIZATION))
        .propagate_x_request_id()
        .layer(from_fn_with_state(state.clone(), get_claims::<S>))
        .compression()
        .decompression()
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}
