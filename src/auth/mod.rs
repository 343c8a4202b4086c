pub mod claims;
pub mod codec;
pub mod guards;
pub mod middleware;
pub mod password;

pub use claims::Claims;
pub use codec::{JwtCodec, TokenCodec};
pub use guards::{claim_owned, is_admin, require_admin, require_role, OwnedResource};
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use password::{BcryptHasher, PasswordHasher};
