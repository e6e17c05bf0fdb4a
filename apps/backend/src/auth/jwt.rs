use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::domain::user::Role;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Access token lifetime: 30 minutes.
const ACCESS_TOKEN_TTL_SECS: i64 = 30 * 60;

/// Mint a HS256 JWT access token for the given subject and role.
pub fn mint_access_token(
    sub: &str,
    role: Role,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        role,
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a JWT and return its claims.
///
/// Errors:
/// - Expired token → `AppError::UnauthorizedExpiredJwt`
/// - Bad signature or any other decode failure → `AppError::UnauthorizedInvalidJwt`
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{mint_access_token, verify_access_token, ACCESS_TOKEN_TTL_SECS};
    use crate::domain::user::Role;
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        let sub = "student1@mergington.edu";
        let now = SystemTime::now();

        let token = mint_access_token(sub, Role::Student, now, &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.sub, sub);
        assert_eq!(claims.role, Role::Student);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        // 40 minutes ago so a 30-minute token is expired
        let now = SystemTime::now() - Duration::from_secs(40 * 60);

        let token =
            mint_access_token("teacher@mergington.edu", Role::Teacher, now, &security).unwrap();
        let result = verify_access_token(&token, &security);

        match result {
            Err(AppError::UnauthorizedExpiredJwt) => {}
            other => panic!("Expected expired-token error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_signature() {
        // Mint with secret A
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_access_token(
            "admin@mergington.edu",
            Role::Admin,
            SystemTime::now(),
            &security_a,
        )
        .unwrap();

        // Verify with secret B
        let security_b = SecurityConfig::new("secret-B".as_bytes());
        let result = verify_access_token(&token, &security_b);

        match result {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("Expected invalid-token error, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        match verify_access_token("not-a-jwt", &security) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("Expected invalid-token error, got {other:?}"),
        }
    }
}
