//! 인증 요청/응답 DTO
//!
//! 카카오 OAuth 콜백 쿼리 파라미터와 로그인 응답 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::user::UserRole;

/// 카카오 OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 카카오는 `code` 없이 `error`만 실어
/// 리다이렉트하므로, `code`는 역직렬화 단계에서는 비워둘 수 있게 하고
/// 핸들러의 검증 단계에서 확인합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct KakaoCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 카카오 인가 페이지 URL 응답 구조체
#[derive(Debug, Serialize)]
pub struct KakaoLoginUrlResponse {
    pub login_url: String,
}

/// 로그인 성공 응답 구조체
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// 발급된 JWT 세션 토큰
    pub token: String,
    pub token_type: &'static str,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}
