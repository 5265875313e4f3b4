//! HTTP 요청/응답 DTO 모듈

pub mod auth;

pub use auth::*;
