//! Authentication HTTP Handlers
//!
//! 카카오 소셜 로그인과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **인가 URL**: `GET /api/user/kakao/page` — 카카오 동의 화면 URL 반환
//! - **콜백**: `GET /api/user/kakao/callback?code={code}` — 로그인 완성
//! - **내 정보**: `GET /api/user/me` — 세션 토큰 검증 및 클레임 조회

use actix_web::{HttpRequest, HttpResponse, get, web};
use validator::Validate;

use crate::domain::dto::auth::{KakaoCallbackQuery, KakaoLoginUrlResponse, LoginResponse};
use crate::errors::errors::AppError;
use crate::services::auth::{KakaoLoginService, TokenService};

/// 카카오 로그인 URL 생성 핸들러
///
/// 카카오 OAuth 2.0 인증을 시작하기 위한 동의 화면 URL을 생성합니다.
///
/// # Endpoint
/// `GET /api/user/kakao/page`
#[get("/kakao/page")]
pub async fn kakao_login_url(
    login_service: web::Data<KakaoLoginService>,
) -> Result<HttpResponse, AppError> {
    let response = KakaoLoginUrlResponse {
        login_url: login_service.authorize_url(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// 카카오 OAuth 콜백 처리 핸들러
///
/// 카카오 동의 완료 후 리다이렉트되는 콜백을 처리합니다.
/// 인가 코드를 받아 토큰 교환 → 프로필 조회 → 계정 매칭/연동/생성 →
/// 세션 토큰 발급까지의 파이프라인을 실행합니다.
///
/// # Endpoint
/// `GET /api/user/kakao/callback?code={code}`
#[get("/kakao/callback")]
pub async fn kakao_callback(
    query: web::Query<KakaoCallbackQuery>,
    login_service: web::Data<KakaoLoginService>,
) -> Result<HttpResponse, AppError> {
    // 사용자가 동의를 거부했거나 카카오 쪽에서 에러가 난 경우
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("카카오 인증이 취소되었거나 실패했습니다");
        log::warn!("카카오 OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = login_service.login(&query.code).await?;

    log::info!("카카오 로그인 성공 - 사용자: {}", result.user.username);

    let response = LoginResponse {
        token: result.token,
        token_type: "Bearer",
        username: result.user.username,
        email: result.user.email,
        role: result.user.role,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 사용자 정보 조회 핸들러
///
/// `Authorization: Bearer` 헤더의 세션 토큰을 검증하고 클레임을 반환합니다.
///
/// # Endpoint
/// `GET /api/user/me`
#[get("/me")]
pub async fn get_current_user(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let header_value = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 필요합니다".to_string())
        })?;

    let token = token_service.extract_bearer_token(header_value)?;
    let claims = token_service.verify_token(token)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "username": claims.sub,
        "role": claims.role,
        "expires_at": claims.exp
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use async_trait::async_trait;

    use crate::domain::entities::users::user::{User, UserRole};
    use crate::repositories::users::user_repo::UserStore;
    use crate::services::auth::KakaoAuthClient;

    /// 핸들러 단락 테스트용 빈 저장소. 어떤 호출도 일어나면 안 된다.
    struct UnreachableStore;

    #[async_trait]
    impl UserStore for UnreachableStore {
        async fn find_by_kakao_id(&self, _kakao_id: i64) -> Result<Option<User>, AppError> {
            panic!("저장소에 도달하면 안 됩니다");
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
            panic!("저장소에 도달하면 안 됩니다");
        }

        async fn insert(&self, _user: User) -> Result<User, AppError> {
            panic!("저장소에 도달하면 안 됩니다");
        }

        async fn link_kakao_id(&self, _id: &str, _kakao_id: i64) -> Result<User, AppError> {
            panic!("저장소에 도달하면 안 됩니다");
        }
    }

    fn stub_login_service() -> web::Data<KakaoLoginService> {
        let client = KakaoAuthClient::new(
            "http://127.0.0.1:1".to_string(),
            "http://127.0.0.1:1".to_string(),
            "test-api-key".to_string(),
            "http://localhost:8080/api/user/kakao/callback".to_string(),
        );
        web::Data::new(KakaoLoginService::new(
            client,
            Arc::new(UnreachableStore),
            Arc::new(TokenService::new()),
        ))
    }

    #[actix_web::test]
    async fn test_callback_provider_error_short_circuits() {
        let app = test::init_service(
            App::new()
                .app_data(stub_login_service())
                .service(web::scope("/api/user").service(kakao_callback)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/user/kakao/callback?error=access_denied&error_description=User%20denied")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_callback_without_code_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(stub_login_service())
                .service(web::scope("/api/user").service(kakao_callback)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/user/kakao/callback")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_kakao_login_url_returns_authorize_url() {
        let app = test::init_service(
            App::new()
                .app_data(stub_login_service())
                .service(web::scope("/api/user").service(kakao_login_url)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/user/kakao/page")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        let url = body["login_url"].as_str().unwrap();
        assert!(url.contains("/oauth/authorize?"));
        assert!(url.contains("response_type=code"));
    }

    #[actix_web::test]
    async fn test_get_current_user_without_header_is_unauthorized() {
        let token_service = web::Data::from(Arc::new(TokenService::new()));
        let app = test::init_service(
            App::new()
                .app_data(token_service)
                .service(web::scope("/api/user").service(get_current_user)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/user/me").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_current_user_with_valid_token() {
        let service = Arc::new(TokenService::new());
        let token = service.create_token("alice1a2b", UserRole::User).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .service(web::scope("/api/user").service(get_current_user)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/user/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["username"], "alice1a2b");
        assert_eq!(body["role"], "USER");
    }
}
