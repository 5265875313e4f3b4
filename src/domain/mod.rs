//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`entities`] - 영속되는 핵심 도메인 엔티티 (`User`)
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체
//! - [`models`] - 외부 시스템 통합 모델 (카카오 OAuth 응답, JWT 클레임)

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
