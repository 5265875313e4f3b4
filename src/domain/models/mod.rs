//! 외부 시스템 통합 모델 모듈
//!
//! 카카오 OAuth API 응답과 JWT 세션 토큰 클레임 등
//! 외부 시스템과의 경계에서 쓰이는 모델을 정의합니다.

pub mod oauth;
pub mod token;
