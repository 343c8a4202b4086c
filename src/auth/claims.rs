use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Identity, Role};

/// Token payload: subject id, role, and the time bounds. Nothing else is
/// embedded; the full profile is re-read from the store on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(identity: &Identity, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(ttl_hours);

        Self {
            sub: identity.id.clone(),
            role: identity.role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_identity;

    #[test]
    fn test_claims_carry_subject_and_role() {
        let identity = test_identity(Role::Student);
        let claims = Claims::new(&identity, 24);

        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.role, Role::Student);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_expiry_tracks_ttl() {
        let identity = test_identity(Role::Student);
        let short = Claims::new(&identity, 1);
        let long = Claims::new(&identity, 48);

        assert!(long.exp > short.exp);
    }
}
