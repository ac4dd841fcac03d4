use crate::{
    config::Config,
    error::{self, Error, Result},
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use entity::users::{self, Role};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// username of the authenticated user
    pub sub: String,
    pub role: Role,
    pub id: i32,
    pub exp: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<Claims>()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

/// Issues and verifies the bearer tokens handed out by `/login`.
///
/// Symmetric HS256, keyed with the process-wide secret. The secret is fixed
/// for the process lifetime, there is no rotation.
pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl Jwt {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            lifetime: config.token_lifetime,
        }
    }

    pub fn issue(&self, user: &users::Model) -> Result<String> {
        let claims = Claims {
            sub: user.username.clone(),
            role: user.role.clone(),
            id: user.id,
            exp: (Utc::now() + self.lifetime).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding).map_err(Error::internal)
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(token, error = error.to_string(), "tried invalid token");
                Err(error::COULD_NOT_GET_CLAIMS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> users::Model {
        users::Model {
            id: 42,
            username: "alice".to_owned(),
            password: String::new(),
            role: Role::Student,
            grade: Some("初三".to_owned()),
            avatar: None,
        }
    }

    fn jwt_with_lifetime(lifetime: Duration) -> Jwt {
        let mut config = Config::from_env();
        config.jwt_secret = "test-secret".to_owned();
        config.token_lifetime = lifetime;

        Jwt::new(&config)
    }

    #[test]
    fn roundtrip() {
        let jwt = jwt_with_lifetime(Duration::hours(24));
        let token = jwt.issue(&test_user()).unwrap();

        let claims = jwt.get_claims(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, Role::Student);
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = jwt_with_lifetime(Duration::hours(-25));
        let token = jwt.issue(&test_user()).unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }

    #[test]
    fn rejects_wrong_secret() {
        let jwt = jwt_with_lifetime(Duration::hours(24));
        let token = jwt.issue(&test_user()).unwrap();

        let mut config = Config::from_env();
        config.jwt_secret = "other-secret".to_owned();
        let other = Jwt::new(&config);

        assert!(other.get_claims(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let jwt = jwt_with_lifetime(Duration::hours(24));

        assert!(jwt.get_claims("test.test.test").is_err());
    }
}
