use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{claim_owned, is_admin, require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateStudentRequest, UpdateStudentRequest},
        response::{BulkInsertResponse, DataResponse, MessageResponse, StudentDto},
    },
};

#[get("")]
pub async fn get_all_students(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let students = state.student_service.list().await?;
    let data: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();

    Ok(HttpResponse::Ok().json(DataResponse { data }))
}

#[post("")]
pub async fn create_student(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateStudentRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;
    request.validate()?;

    let student = state.student_service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(DataResponse {
        data: StudentDto::from(student),
    }))
}

#[post("/bulk")]
pub async fn create_students_bulk(
    state: web::Data<Arc<AppState>>,
    request: web::Json<Vec<CreateStudentRequest>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let students = state.student_service.create_bulk(request.into_inner()).await?;
    let data: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();

    Ok(HttpResponse::Created().json(BulkInsertResponse {
        message: "Students added successfully".to_string(),
        count: data.len(),
        data,
    }))
}

/// Admins read any record; everyone else only the record linked to their own
/// account.
#[get("/{id}")]
pub async fn get_student(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let student = if is_admin(&auth.0) {
        state.student_service.get(&id).await?
    } else {
        claim_owned(&auth.0, state.student_service.find(&id).await?)?
    };

    Ok(HttpResponse::Ok().json(DataResponse {
        data: StudentDto::from(student),
    }))
}

#[put("/{id}")]
pub async fn update_student(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    request: web::Json<UpdateStudentRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;
    request.validate()?;

    let student = state
        .student_service
        .update(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(DataResponse {
        data: StudentDto::from(student),
    }))
}

#[delete("/{id}")]
pub async fn delete_student(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.student_service.delete(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Student deleted")))
}
