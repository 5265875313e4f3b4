//! # 카카오 로그인 서비스
//!
//! 인가 코드 하나를 받아 로그인을 완성하는 최상위 파이프라인입니다.
//!
//! ```text
//! 인가 코드
//!   → 액세스 토큰 교환      (KakaoAuthClient)
//!   → 사용자 프로필 조회     (KakaoAuthClient)
//!   → 계정 매칭/연동/생성    (AccountReconciler)
//!   → 세션 토큰 발급         (TokenService)
//! ```
//!
//! 어느 단계든 실패하면 파이프라인 전체가 중단되고, 부분적으로 로그인된
//! 상태는 남지 않습니다. 카카오 액세스 토큰은 프로필 조회까지만 쓰이고
//! 응답이나 로그에 노출되지 않습니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::entities::users::user::User,
    domain::models::oauth::kakao_user::KakaoUserInfo,
    errors::errors::AppError,
    repositories::users::user_repo::UserStore,
    services::auth::{kakao_auth_client::KakaoAuthClient, token_service::TokenService},
};

/// 로그인 성공 결과
///
/// 발급된 세션 토큰과 매칭/연동/생성된 사용자를 함께 반환합니다.
#[derive(Debug)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// 외부 신원 ↔ 로컬 계정 매칭기
///
/// 카카오 사용자 정보를 받아 로컬 계정을 결정합니다. 판정 순서는
/// 엄격하게 고정되어 있습니다:
///
/// 1. `kakao_id` 매칭 → 그대로 반환 (쓰기 없음)
/// 2. 이메일 매칭 → 기존 계정에 `kakao_id` 연동
/// 3. 신규 생성 (이메일이 없으면 합성 이메일 사용)
pub struct AccountReconciler {
    user_store: Arc<dyn UserStore>,
}

impl AccountReconciler {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 카카오 신원에 대응하는 로컬 계정을 찾거나 만듭니다.
    ///
    /// 동일한 신원으로 재로그인하면 1번 경로로 항상 같은 계정이
    /// 반환됩니다. 신규 생성이 유니크 제약 위반으로 실패하는 경우
    /// (동시 최초 로그인 경쟁) 재시도 없이 에러를 반환합니다.
    pub async fn reconcile(&self, info: &KakaoUserInfo) -> Result<User, AppError> {
        if let Some(existing) = self.user_store.find_by_kakao_id(info.id).await? {
            log::info!("기존 카카오 연동 계정 로그인: {}", existing.username);
            return Ok(existing);
        }

        if let Some(email) = &info.email {
            if let Some(existing) = self.user_store.find_by_email(email).await? {
                log::info!("이메일 매칭으로 카카오 계정 연동: {}", existing.username);

                let id = existing.id_string().ok_or_else(|| {
                    AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string())
                })?;

                return self
                    .user_store
                    .link_kakao_id(&id, info.id)
                    .await
                    .map_err(|e| AppError::Reconciliation(e.to_string()));
            }
        }

        self.create_account(info).await
    }

    async fn create_account(&self, info: &KakaoUserInfo) -> Result<User, AppError> {
        let username = Self::generate_username(&info.nickname);

        // 외부 인증 전용 계정이지만 비밀번호 필드는 채워야 하므로
        // 무작위 UUID를 해시하여 저장한다. 이 값으로는 로그인할 수 없다.
        let password_hash = bcrypt::hash(Uuid::new_v4().to_string(), bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해시 실패: {}", e)))?;

        let email = info
            .email
            .clone()
            .unwrap_or_else(|| format!("{}@kakao.com", username));

        let user = User::new_kakao(username, password_hash, email, info.id);

        log::info!("카카오 신규 계정 생성: {}", user.username);

        // 동시 최초 로그인이 겹치면 두 번째 insert는 저장소의 유니크
        // 인덱스 위반으로 돌아온다. 여기서 재시도하지 않는다.
        self.user_store
            .insert(user)
            .await
            .map_err(|e| AppError::Reconciliation(e.to_string()))
    }

    /// 닉네임에 UUIDv4 마지막 세그먼트를 붙여 사용자명을 생성합니다.
    fn generate_username(nickname: &str) -> String {
        let uuid = Uuid::new_v4().to_string();
        let suffix = uuid.rsplit('-').next().unwrap_or_default();

        format!("{}{}", nickname, suffix)
    }
}

/// 카카오 로그인 최상위 서비스
pub struct KakaoLoginService {
    kakao_client: KakaoAuthClient,
    reconciler: AccountReconciler,
    token_service: Arc<TokenService>,
}

impl KakaoLoginService {
    pub fn new(
        kakao_client: KakaoAuthClient,
        user_store: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            kakao_client,
            reconciler: AccountReconciler::new(user_store),
            token_service,
        }
    }

    /// 카카오 동의 화면으로 보낼 인가 URL을 반환합니다.
    pub fn authorize_url(&self) -> String {
        self.kakao_client.authorize_url()
    }

    /// 인가 코드로 로그인을 완성합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginResult)` - 세션 토큰과 로그인된 사용자
    /// * `Err(AppError)` - 실패한 단계에 따라 `TokenExchange`,
    ///   `ProfileFetch`, `Reconciliation` 중 하나
    pub async fn login(&self, code: &str) -> Result<LoginResult, AppError> {
        let access_token = self.kakao_client.exchange_code(code).await?;

        let info = self.kakao_client.fetch_user_info(&access_token).await?;

        log::info!(
            "카카오 프로필 조회 완료: id={}, nickname={}",
            info.id,
            info.nickname
        );

        let user = self.reconciler.reconcile(&info).await?;

        let token = self.token_service.create_token(&user.username, user.role)?;

        Ok(LoginResult { token, user })
    }
}
