//! JWT 세션 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 포함합니다.
//! 개인정보 보호를 위해 최소한의 정보만 담습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserRole;

/// JWT 세션 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 이름)
/// - `role`: 사용자 역할 (권한 기반 접근 제어용)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 토큰의 주체 (사용자 이름)
    pub sub: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
