use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::AuthResponse,
    },
};

#[post("/auth/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (identity, token) = state.auth_service.register(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: identity.into(),
    }))
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (identity, token) = state.auth_service.login(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: identity.into(),
    }))
}
