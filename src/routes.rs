use actix_web::{web, HttpResponse};

use crate::{
    auth::AuthMiddleware,
    errors::AppError,
    handlers::{auth_handler, health_handler, student_handler},
    models::dto::response::MessageResponse,
};

/// Route table. Token issuance and health stay public; everything under
/// `/students` sits behind the auth middleware and the per-route guards.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_handler::register)
        .service(auth_handler::login)
        .service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(
            web::scope("/students")
                .wrap(AuthMiddleware)
                .service(student_handler::get_all_students)
                .service(student_handler::create_student)
                .service(student_handler::create_students_bulk)
                .service(student_handler::get_student)
                .service(student_handler::update_student)
                .service(student_handler::delete_student),
        );
}

/// Maps body deserialization failures (malformed JSON, unknown enum
/// variants, wrong field types) onto the same `{"message": ...}` shape the
/// rest of the API speaks, instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new("Not Found"))
}
