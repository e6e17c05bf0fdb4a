//! JWT claims carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

use crate::domain::user::Role;

/// Claims embedded in access tokens and inserted into request extensions
/// by the `JwtExtract` middleware.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the authenticated user's email.
    pub sub: String,
    /// Role at issuance time. Authorization re-resolves the user record,
    /// so a stale role claim never outlives the store.
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
