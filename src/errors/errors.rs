//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 카카오 로그인 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! 로그인 파이프라인의 각 단계는 고유한 에러 변형을 가집니다:
//!
//! | 변형 | 발생 단계 | HTTP 상태 |
//! |------|-----------|-----------|
//! | `TokenExchange` | 인가 코드 → 액세스 토큰 교환 | 401 |
//! | `ProfileFetch` | 액세스 토큰 → 카카오 프로필 조회 | 401 |
//! | `Reconciliation` | 계정 매칭/연동/생성 저장 실패 | 500 |
//!
//! 어느 단계에서 실패하든 파이프라인은 즉시 중단되며, 클라이언트에게는
//! 원인 분류 없는 불투명한 로그인 실패만 전달됩니다. 상세 원인(토큰 값 제외)은
//! 서버 로그에만 기록됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn exchange(code: &str) -> Result<String, AppError> {
//!     if code.is_empty() {
//!         return Err(AppError::ValidationError("code is required".to_string()));
//!     }
//!     // ...
//!     Ok(access_token)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 로그인 파이프라인과 주변 인프라에서 발생할 수 있는 모든 에러를 포괄하는
/// 열거형입니다. 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 인가 코드 → 액세스 토큰 교환 실패 (전송 오류, 비 2xx 응답, `access_token` 필드 누락)
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    /// 카카오 프로필 조회 실패 (전송 오류, 비 2xx 응답, JSON 파싱 실패, 필수 필드 누락)
    #[error("Profile fetch failed: {0}")]
    ProfileFetch(String),

    /// 계정 매칭/연동/생성 저장 실패 (예: 동시 생성 시 유니크 제약 위반)
    #[error("Reconciliation failed: {0}")]
    Reconciliation(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 원인 분류를 숨겨야 하는 로그인 단계 에러인지 확인합니다.
    fn is_opaque_login_failure(&self) -> bool {
        matches!(
            self,
            AppError::TokenExchange(_) | AppError::ProfileFetch(_) | AppError::Reconciliation(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 로그인 단계 에러는 상세 원인을 로그에만 남기고 불투명한 메시지로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_)
            | AppError::TokenExchange(_)
            | AppError::ProfileFetch(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if self.is_opaque_login_failure() {
            log::error!("로그인 실패: {}", self);
            serde_json::json!({ "error": "로그인에 실패했습니다" })
        } else {
            serde_json::json!({ "error": self.to_string() })
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("code is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_exchange_error_is_unauthorized() {
        let error = AppError::TokenExchange("provider returned 400".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_profile_fetch_error_is_unauthorized() {
        let error = AppError::ProfileFetch("missing nickname".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_reconciliation_error_is_internal() {
        let error = AppError::Reconciliation("duplicate kakao_id".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_login_stage_errors_are_opaque() {
        assert!(AppError::TokenExchange("x".to_string()).is_opaque_login_failure());
        assert!(AppError::ProfileFetch("x".to_string()).is_opaque_login_failure());
        assert!(AppError::Reconciliation("x".to_string()).is_opaque_login_failure());
        assert!(!AppError::ValidationError("x".to_string()).is_opaque_login_failure());
    }
}
