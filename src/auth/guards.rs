use crate::{
    errors::{AppError, AppResult},
    models::domain::{Identity, Role},
};

/// Passes when the caller's role is in `allowed`, or when `allowed` is empty
/// (any authenticated role). Runs only on an already-resolved Identity; the
/// extractor guarantees that precondition.
pub fn require_role(identity: &Identity, allowed: &[Role]) -> AppResult<()> {
    if allowed.is_empty() || allowed.contains(&identity.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

pub fn require_admin(identity: &Identity) -> AppResult<()> {
    require_role(identity, &[Role::Admin])
}

pub fn is_admin(identity: &Identity) -> bool {
    identity.role == Role::Admin
}

/// A record with an owner reference, inspectable by the ownership guard.
pub trait OwnedResource {
    /// Hex id of the owning user account, if one is recorded.
    fn owner_ref(&self) -> Option<String>;
}

/// Ownership check over an already-fetched resource: missing resource is 404,
/// a record without an owner reference or owned by someone else is 403. On
/// success the resource is handed back to the caller, which is how it travels
/// to the handler.
pub fn claim_owned<R: OwnedResource>(identity: &Identity, resource: Option<R>) -> AppResult<R> {
    let resource = resource.ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;

    let owner = resource.owner_ref().ok_or(AppError::Forbidden)?;
    if owner != identity.id {
        return Err(AppError::NotOwner);
    }

    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str, role: Role) -> Identity {
        Identity {
            id: id.to_string(),
            role,
            name: "Test".to_string(),
            email: format!("{}@example.com", id),
        }
    }

    struct Note {
        owner: Option<String>,
    }

    impl OwnedResource for Note {
        fn owner_ref(&self) -> Option<String> {
            self.owner.clone()
        }
    }

    #[test]
    fn test_require_role_admits_member() {
        let admin = identity("u1", Role::Admin);
        assert!(require_role(&admin, &[Role::Admin]).is_ok());
        assert!(require_admin(&admin).is_ok());
    }

    #[test]
    fn test_require_role_rejects_non_member() {
        let student = identity("u1", Role::Student);
        assert!(matches!(
            require_role(&student, &[Role::Admin]),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_empty_role_set_admits_any_authenticated_caller() {
        let student = identity("u1", Role::Student);
        assert!(require_role(&student, &[]).is_ok());
    }

    #[test]
    fn test_claim_owned_matches_owner() {
        let caller = identity("u1", Role::Student);
        let note = Note {
            owner: Some("u1".to_string()),
        };

        assert!(claim_owned(&caller, Some(note)).is_ok());
    }

    #[test]
    fn test_claim_owned_rejects_other_owner() {
        let caller = identity("u1", Role::Student);
        let note = Note {
            owner: Some("u2".to_string()),
        };

        assert!(matches!(
            claim_owned(&caller, Some(note)),
            Err(AppError::NotOwner)
        ));
    }

    #[test]
    fn test_claim_owned_rejects_unowned_resource() {
        let caller = identity("u1", Role::Student);
        let note = Note { owner: None };

        assert!(matches!(
            claim_owned(&caller, Some(note)),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_claim_owned_missing_resource_is_not_found() {
        let caller = identity("u1", Role::Student);

        assert!(matches!(
            claim_owned::<Note>(&caller, None),
            Err(AppError::NotFound(_))
        ));
    }
}
