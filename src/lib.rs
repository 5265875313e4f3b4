//! 카카오 로그인 백엔드
//!
//! Rust 기반의 카카오 OAuth 2.0 소셜 로그인 서비스입니다.
//! 인가 코드 한 번의 왕복으로 토큰 교환, 프로필 조회, 로컬 계정
//! 매칭/연동/생성, JWT 세션 토큰 발급까지를 처리합니다.
//!
//! # Features
//!
//! - **카카오 OAuth 2.0**: 인가 코드 → 액세스 토큰 → 사용자 프로필
//! - **계정 정합**: 카카오 신원과 로컬 계정의 매칭/연동/생성
//! - **JWT 인증**: HS256 세션 토큰 발급 및 검증
//! - **MongoDB**: 사용자 데이터 영구 저장 (유니크 인덱스 기반 무결성)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
