use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::auth::guards::OwnedResource;

/// A roster record. `user_id` links the record to the user account that owns
/// it; records created by administrators on someone's behalf may leave it
/// unset, in which case only admins can read the record.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Student {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    pub fn new(name: &str, age: Option<u32>, city: Option<String>, user_id: Option<ObjectId>) -> Self {
        let now = Utc::now();
        Student {
            id: None,
            name: name.to_string(),
            age,
            city,
            user_id,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Partial update applied to a roster record. At least one field is expected
/// to be set; the service layer enforces that before it reaches a repository.
#[derive(Clone, Debug, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
}

impl OwnedResource for Student {
    fn owner_ref(&self) -> Option<String> {
        self.user_id.as_ref().map(|oid| oid.to_hex())
    }
}
