//! # Authentication Configuration Module
//!
//! 카카오 OAuth 프로바이더와 JWT 세션 토큰 관련 설정을 관리하는 모듈입니다.
//!
//! ## 카카오 개발자 콘솔 설정 가이드
//!
//! 1. [Kakao Developers](https://developers.kakao.com/) 접속
//! 2. 애플리케이션 생성 후 REST API 키 확인 → `KAKAO_API_KEY`
//! 3. 카카오 로그인 활성화
//! 4. Redirect URI 등록: `<SERVER_BASE_URL>/api/user/kakao/callback`
//!
//! ## 보안 고려사항
//!
//! - `JWT_SECRET`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
//! - 프로덕션에서는 HTTPS redirect URI만 사용하세요

use std::env;

/// 카카오 OAuth 2.0 설정을 관리하는 구조체
///
/// Kakao Developers 콘솔에서 발급받은 REST API 키와 콜백 주소 구성에
/// 필요한 값들을 환경 변수에서 읽어옵니다. 카카오 인증/API 호스트는
/// 사실상 고정값이므로 기본값을 제공하고, 테스트 환경에서만 재정의합니다.
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// 카카오 REST API 키 (OAuth client_id)를 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn api_key() -> String {
        env::var("KAKAO_API_KEY").expect("KAKAO_API_KEY must be set")
    }

    /// 서버의 외부 접근 가능한 기본 URL을 반환합니다.
    ///
    /// 카카오 콘솔에 등록된 redirect URI를 구성하는 데 사용됩니다.
    ///
    /// # Panics
    ///
    /// `SERVER_BASE_URL` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn server_base_url() -> String {
        env::var("SERVER_BASE_URL").expect("SERVER_BASE_URL must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// 고정 경로 `/api/user/kakao/callback`을 기본 URL 뒤에 붙여 구성합니다.
    /// 이 값은 토큰 교환 요청의 `redirect_uri` 파라미터와 정확히 일치해야 합니다.
    pub fn redirect_uri() -> String {
        format!("{}/api/user/kakao/callback", Self::server_base_url())
    }

    /// 카카오 인증 서버 호스트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://kauth.kakao.com`
    pub fn auth_host() -> String {
        env::var("KAKAO_AUTH_HOST")
            .unwrap_or_else(|_| "https://kauth.kakao.com".to_string())
    }

    /// 카카오 API 서버 호스트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://kapi.kakao.com`
    pub fn api_host() -> String {
        env::var("KAKAO_API_HOST")
            .unwrap_or_else(|_| "https://kapi.kakao.com".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 로그인 성공 시 발급되는 내부 세션 토큰의 서명 키와 만료 시간을 관리합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 세션 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}
