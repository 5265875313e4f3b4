//! 인증 서비스 모듈
//!
//! 카카오 OAuth 2.0 소셜 로그인과 JWT 세션 토큰 발급을 담당하는
//! 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 카카오 인가 코드 → 액세스 토큰 교환
//! - 카카오 사용자 프로필 조회
//! - 외부 신원 ↔ 로컬 계정 매칭/연동/생성
//! - JWT 세션 토큰 생성 및 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::KakaoLoginService;
//!
//! let result = login_service.login(&code).await?;
//! println!("발급된 토큰: {}", result.token);
//! ```

pub mod kakao_auth_client;
pub mod kakao_login_service;
pub mod token_service;

pub use kakao_auth_client::*;
pub use kakao_login_service::*;
pub use token_service::*;
