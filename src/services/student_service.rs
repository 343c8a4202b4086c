use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Student, StudentPatch},
        dto::request::{CreateStudentRequest, UpdateStudentRequest},
    },
    repositories::StudentRepository,
};

pub struct StudentService {
    students: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| AppError::Validation("Invalid student id".to_string()))
    }

    fn from_request(request: CreateStudentRequest) -> AppResult<Student> {
        let user_id = request
            .user_id
            .as_deref()
            .map(ObjectId::parse_str)
            .transpose()
            .map_err(|_| AppError::Validation("Invalid user id".to_string()))?;

        Ok(Student::new(
            request.name.trim(),
            request.age,
            request.city,
            user_id,
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<Student>> {
        self.students.find_all().await
    }

    pub async fn create(&self, request: CreateStudentRequest) -> AppResult<Student> {
        self.students.insert(Self::from_request(request)?).await
    }

    pub async fn create_bulk(
        &self,
        requests: Vec<CreateStudentRequest>,
    ) -> AppResult<Vec<Student>> {
        if requests.is_empty() {
            return Err(AppError::Validation(
                "Request body must be a non-empty array of students".to_string(),
            ));
        }

        let mut students = Vec::with_capacity(requests.len());
        for request in requests {
            request.validate()?;
            students.push(Self::from_request(request)?);
        }

        self.students.insert_many(students).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Student> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Point lookup without the not-found mapping; the ownership guard wants
    /// the raw option so it can produce its own rejection.
    pub async fn find(&self, id: &str) -> AppResult<Option<Student>> {
        let id = Self::parse_id(id)?;
        self.students.find_by_id(&id).await
    }

    pub async fn update(&self, id: &str, request: UpdateStudentRequest) -> AppResult<Student> {
        if request.is_empty() {
            return Err(AppError::Validation(
                "at least one of name, age or city must be provided".to_string(),
            ));
        }

        let id = Self::parse_id(id)?;
        let patch = StudentPatch {
            name: request.name.map(|n| n.trim().to_string()),
            age: request.age,
            city: request.city,
        };

        self.students
            .update(&id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = Self::parse_id(id)?;

        if !self.students.delete(&id).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        Ok(())
    }
}
