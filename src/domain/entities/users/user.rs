//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증으로 가입한 계정과 카카오 로그인으로 생성된 계정을
//! 하나의 모델로 표현합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 시스템 내 권한 수준을 나타냅니다. 카카오 로그인으로 생성되는
/// 계정은 항상 `User` 역할로 시작합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl UserRole {
    /// 역할의 문자열 표현을 반환합니다 (JWT 클레임 및 로깅용).
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
///
/// ## 불변 조건
///
/// - `email`, `username`은 시스템 전체에서 유니크합니다.
/// - `kakao_id`가 존재하는 사용자는 최대 한 명입니다 (sparse 유니크 인덱스).
/// - `kakao_id`는 계정 생성 시 또는 이메일 매칭으로 연동될 때 정확히 한 번만
///   설정되며, 이후 이 코어에 의해 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 해시된 비밀번호. 카카오 로그인 계정은 외부 인증만 사용하지만
    /// 저장소의 non-null 제약을 위해 무작위 비밀번호를 해시하여 저장합니다.
    pub password_hash: String,
    /// 사용자 이메일 (unique). 카카오가 이메일을 제공하지 않은 경우
    /// 생성된 사용자 이름 기반의 합성 이메일이 저장됩니다.
    pub email: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 카카오 회원번호. 로컬 가입 계정은 None.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao_id: Option<i64>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 카카오 로그인으로 새 사용자를 생성합니다.
    ///
    /// 새 계정은 항상 `USER` 역할로 시작하며, 카카오 회원번호가
    /// 생성 시점에 연결됩니다.
    pub fn new_kakao(
        username: String,
        password_hash: String,
        email: String,
        kakao_id: i64,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            password_hash,
            email,
            role: UserRole::User,
            kakao_id: Some(kakao_id),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 카카오 계정과 연동된 사용자인지 확인
    pub fn is_kakao_linked(&self) -> bool {
        self.kakao_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_kakao_user_defaults() {
        let user = User::new_kakao(
            "Alexa1b2c3d4e5f6".to_string(),
            "$2b$12$hash".to_string(),
            "a@x.com".to_string(),
            42,
        );

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.kakao_id, Some(42));
        assert!(user.id.is_none());
        assert!(user.is_kakao_linked());
    }

    #[test]
    fn test_role_serialization_matches_store_format() {
        let json = serde_json::to_string(&UserRole::User).unwrap();
        assert_eq!(json, "\"USER\"");

        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(UserRole::User.as_str(), "USER");
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
    }
}
