//! # JWT 세션 토큰 서비스
//!
//! 로그인 성공 시 발급되는 세션 토큰의 생성과 검증을 담당합니다.
//!
//! HS256 대칭키 서명을 사용하며, 클레임에는 사용자명(`sub`)과 역할만
//! 담습니다. 카카오 액세스 토큰은 로그인 파이프라인 내부에서만 쓰이고
//! 세션 토큰에는 절대 포함되지 않습니다.

use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use crate::{
    config::JwtConfig,
    domain::entities::users::user::UserRole,
    domain::models::token::SessionClaims,
    errors::errors::AppError,
};

/// JWT 세션 토큰 생성/검증 서비스
pub struct TokenService;

impl TokenService {
    pub fn new() -> Self {
        Self
    }

    /// 세션 토큰을 생성합니다.
    ///
    /// # 인자
    ///
    /// * `username` - 토큰 주체가 될 사용자명
    /// * `role` - 사용자 역할
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 서명된 JWT
    /// * `Err(AppError::InternalError)` - 서명 실패
    pub fn create_token(&self, username: &str, role: UserRole) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expires_at = now + chrono::Duration::hours(JwtConfig::expiration_hours());

        let claims = SessionClaims {
            sub: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JwtConfig::secret().as_ref()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 세션 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(SessionClaims)` - 서명과 만료가 유효한 경우
    /// * `Err(AppError::AuthenticationError)` - 만료되었거나 위변조된 토큰
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, AppError> {
        let result = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(JwtConfig::secret().as_ref()),
            &Validation::default(),
        );

        match result {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(AppError::AuthenticationError(
                    "만료된 토큰입니다".to_string(),
                )),
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => Err(
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
                ),
                _ => Err(AppError::AuthenticationError(format!(
                    "토큰 검증 실패: {}",
                    e
                ))),
            },
        }
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, header_value: &'a str) -> Result<&'a str, AppError> {
        header_value.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string())
        })
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_round_trip() {
        let service = TokenService::new();

        let token = service.create_token("alice1a2b", UserRole::User).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "alice1a2b");
        assert_eq!(claims.role, UserRole::User);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let service = TokenService::new();

        let expired = SessionClaims {
            sub: "alice".to_string(),
            role: UserRole::User,
            iat: chrono::Utc::now().timestamp() - 7200,
            exp: chrono::Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(JwtConfig::secret().as_ref()),
        )
        .unwrap();

        let err = service.verify_token(&token).unwrap_err();

        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let service = TokenService::new();

        let err = service.verify_token("not.a.jwt").unwrap_err();

        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
