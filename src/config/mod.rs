//! # 설정 모듈
//!
//! 카카오 OAuth, JWT 토큰, 서버 주소 등 애플리케이션 설정을 관리합니다.
//! 모든 설정은 환경 변수에서 읽어오며, 변경 가능성이 낮은 값
//! (카카오 호스트 등)은 기본값을 제공합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export KAKAO_API_KEY="your-kakao-rest-api-key"
//! export SERVER_BASE_URL="http://localhost:8080"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export KAKAO_AUTH_HOST="https://kauth.kakao.com"   # 기본값 제공
//! export KAKAO_API_HOST="https://kapi.kakao.com"     # 기본값 제공
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="selectshop_auth_dev"
//! ```

pub mod auth_config;

pub use auth_config::*;
