//! # 카카오 OAuth 2.0 클라이언트
//!
//! 카카오 인증 서버와의 두 가지 아웃바운드 HTTP 호출을 담당합니다.
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Token Exchange** | `https://kauth.kakao.com/oauth/token` | POST (form) |
//! | **User Info** | `https://kapi.kakao.com/v2/user/me` | POST (Bearer) |
//!
//! ## 요청 형식
//!
//! ```text
//! POST /oauth/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=authorization_code&
//! client_id=REST_API_KEY&
//! redirect_uri=SERVER_BASE_URL/api/user/kakao/callback&
//! code=AUTHORIZATION_CODE
//! ```
//!
//! 두 호출 모두 재시도하지 않으며, 실패는 각각 `TokenExchange` /
//! `ProfileFetch` 에러로 분류되어 로그인 시도 전체를 중단시킵니다.

use serde::Deserialize;

use crate::{
    config::KakaoOAuthConfig,
    domain::models::oauth::kakao_user::{KakaoUserInfo, KakaoUserResponse},
    errors::errors::AppError,
};

/// 카카오 토큰 엔드포인트 응답
///
/// 카카오는 `token_type`, `expires_in` 등도 내려주지만 이 서비스는
/// `access_token`만 사용합니다. 역직렬화 실패가 곧 필드 누락 검증입니다.
#[derive(Debug, Deserialize)]
struct KakaoTokenResponse {
    access_token: String,
}

/// 카카오 OAuth 2.0 HTTP 클라이언트
///
/// 인가 코드 교환과 사용자 정보 조회라는 두 호출만 담당하며,
/// 계정 처리 로직은 포함하지 않습니다. 엔드포인트 호스트를 생성자에서
/// 받으므로 테스트에서는 스텁 서버 주소를 주입할 수 있습니다.
pub struct KakaoAuthClient {
    http: reqwest::Client,
    auth_host: String,
    api_host: String,
    api_key: String,
    redirect_uri: String,
}

impl KakaoAuthClient {
    pub fn new(
        auth_host: String,
        api_host: String,
        api_key: String,
        redirect_uri: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_host,
            api_host,
            api_key,
            redirect_uri,
        }
    }

    /// 환경 변수 설정으로부터 클라이언트를 구성합니다.
    pub fn from_env() -> Self {
        Self::new(
            KakaoOAuthConfig::auth_host(),
            KakaoOAuthConfig::api_host(),
            KakaoOAuthConfig::api_key(),
            KakaoOAuthConfig::redirect_uri(),
        )
    }

    /// 카카오 동의 화면으로 보낼 인가 URL을 생성합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://kauth.kakao.com/oauth/authorize?
    ///   client_id=REST_API_KEY&
    ///   redirect_uri=SERVER_BASE_URL/api/user/kakao/callback&
    ///   response_type=code
    /// ```
    pub fn authorize_url(&self) -> String {
        let params = [
            ("client_id", self.api_key.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}/oauth/authorize?{}", self.auth_host, query_string)
    }

    /// 인가 코드를 액세스 토큰으로 교환합니다.
    ///
    /// # 인자
    ///
    /// * `code` - 카카오 동의 화면에서 발급된 일회용 인가 코드
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 액세스 토큰
    /// * `Err(AppError::TokenExchange)` - 전송 오류, 비 2xx 응답,
    ///   `access_token` 필드 누락
    pub async fn exchange_code(&self, code: &str) -> Result<String, AppError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.api_key.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self
            .http
            .post(format!("{}/oauth/token", self.auth_host))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::TokenExchange(format!("카카오 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::TokenExchange(format!(
                "카카오 토큰 엔드포인트 응답 오류: {}",
                response.status()
            )));
        }

        let token = response
            .json::<KakaoTokenResponse>()
            .await
            .map_err(|e| AppError::TokenExchange(format!("카카오 토큰 응답 파싱 실패: {}", e)))?;

        Ok(token.access_token)
    }

    /// 액세스 토큰으로 카카오 사용자 정보를 조회합니다.
    ///
    /// `id`와 닉네임은 필수이며 누락 시 에러입니다. 이메일은 동의항목
    /// 정책에 따라 없을 수 있는 정상 케이스로, 에러가 아닙니다.
    ///
    /// # 인자
    ///
    /// * `access_token` - 카카오에서 발급받은 액세스 토큰
    ///
    /// # 반환값
    ///
    /// * `Ok(KakaoUserInfo)` - 파싱된 사용자 프로필
    /// * `Err(AppError::ProfileFetch)` - 전송 오류, 비 2xx 응답,
    ///   JSON 파싱 실패, 필수 필드 누락
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError> {
        let response = self
            .http
            .post(format!("{}/v2/user/me", self.api_host))
            .bearer_auth(access_token)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded;charset=utf-8",
            )
            .send()
            .await
            .map_err(|e| AppError::ProfileFetch(format!("카카오 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ProfileFetch(format!(
                "카카오 사용자 정보 엔드포인트 응답 오류: {}",
                response.status()
            )));
        }

        let profile = response
            .json::<KakaoUserResponse>()
            .await
            .map_err(|e| {
                AppError::ProfileFetch(format!("카카오 사용자 정보 파싱 실패: {}", e))
            })?;

        Ok(KakaoUserInfo::from(profile))
    }
}
