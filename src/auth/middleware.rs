use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures::future::LocalBoxFuture;

use crate::{app_state::AppState, errors::AppError, models::domain::Identity};

/// Per-request authentication: extracts the bearer token, verifies it, and
/// resolves the subject against the credential store. On success the caller's
/// Identity is attached to the request; every failure terminates the request
/// with a 401.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let outcome = async {
                let state = req
                    .app_data::<web::Data<Arc<AppState>>>()
                    .cloned()
                    .ok_or_else(|| {
                        AppError::Internal("auth state not configured".to_string())
                    })?;

                // Absent header and a non-Bearer scheme are the same failure
                let token = req
                    .headers()
                    .get(AUTHORIZATION)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|h| h.strip_prefix("Bearer "))
                    .ok_or(AppError::MissingCredential)?
                    .to_string();

                let claims = state.auth_service.verify_token(&token)?;

                // The subject must still exist; the Identity comes from the
                // store record, never from the token payload.
                state.auth_service.resolve_identity(&claims.sub).await
            }
            .await;

            match outcome {
                Ok(identity) => {
                    req.extensions_mut().insert(identity);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    let res = err.error_response().map_into_right_body();
                    Ok(req.into_response(res))
                }
            }
        })
    }
}

/// Extractor handing the resolved Identity to handlers. Using it on a route
/// that is not behind `AuthMiddleware` is a wiring error and surfaces as the
/// same 401 an unauthenticated caller would see.
pub struct AuthenticatedUser(pub Identity);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req
            .extensions()
            .get::<Identity>()
            .cloned()
            .ok_or(AppError::MissingCredential);

        ready(identity.map(AuthenticatedUser))
    }
}
