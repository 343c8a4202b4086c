use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson, Document},
    options::ReturnDocument,
    Collection,
};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::{Student, StudentPatch},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, student: Student) -> AppResult<Student>;
    /// Unordered bulk insert; either all records land or the call errors.
    async fn insert_many(&self, students: Vec<Student>) -> AppResult<Vec<Student>>;
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Student>>;
    async fn find_all(&self) -> AppResult<Vec<Student>>;
    async fn update(&self, id: &ObjectId, patch: StudentPatch) -> AppResult<Option<Student>>;
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

pub struct MongoStudentRepository {
    collection: Collection<Student>,
}

impl MongoStudentRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.students_collection);
        Self { collection }
    }

    fn set_document(patch: StudentPatch) -> AppResult<Document> {
        let mut set = doc! { "updated_at": to_bson(&Utc::now())? };

        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(age) = patch.age {
            set.insert("age", age as i64);
        }
        if let Some(city) = patch.city {
            set.insert("city", city);
        }

        Ok(set)
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn insert(&self, mut student: Student) -> AppResult<Student> {
        let result = self.collection.insert_one(&student).await?;
        student.id = result.inserted_id.as_object_id();
        Ok(student)
    }

    async fn insert_many(&self, mut students: Vec<Student>) -> AppResult<Vec<Student>> {
        let result = self.collection.insert_many(&students).ordered(false).await?;

        for (index, id) in result.inserted_ids {
            if let Some(student) = students.get_mut(index) {
                student.id = id.as_object_id();
            }
        }

        Ok(students)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Student>> {
        let student = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(student)
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let cursor = self.collection.find(doc! {}).await?;
        let students: Vec<Student> = cursor.try_collect().await?;
        Ok(students)
    }

    async fn update(&self, id: &ObjectId, patch: StudentPatch) -> AppResult<Option<Student>> {
        let set = Self::set_document(patch)?;

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
