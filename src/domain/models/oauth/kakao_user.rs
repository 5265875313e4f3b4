//! # 카카오 사용자 정보 모델
//!
//! 카카오 API (`/v2/user/me`) 응답을 타입이 있는 구조로 파싱합니다.
//!
//! ## 카카오 응답 구조
//!
//! ```json
//! {
//!   "id": 42,
//!   "kakao_account": {
//!     "profile": { "nickname": "Alex" },
//!     "email": "a@x.com"
//!   }
//! }
//! ```
//!
//! `id`와 `kakao_account.profile.nickname`은 필수이며, 하나라도 없으면
//! 파싱이 실패합니다. `kakao_account.email`은 동의항목 정책에 따라 카카오가
//! 아예 내려주지 않을 수 있으므로 선택 필드로 취급합니다. 과거 구현처럼
//! JSON 트리를 노드 단위로 더듬는 대신, 선택 필드를 `Option`으로 둔
//! 구조적 파싱 한 번으로 처리합니다.

use serde::Deserialize;

use crate::utils::string_utils::clean_optional_string;

/// 카카오 API 응답의 `kakao_account.profile` 객체
#[derive(Debug, Deserialize)]
pub struct KakaoProfile {
    /// 카카오 프로필 닉네임 (필수)
    pub nickname: String,
}

/// 카카오 API 응답의 `kakao_account` 객체
#[derive(Debug, Deserialize)]
pub struct KakaoAccount {
    pub profile: KakaoProfile,
    /// 이메일 동의 여부에 따라 누락될 수 있음
    #[serde(default)]
    pub email: Option<String>,
}

/// 카카오 API `/v2/user/me` 응답 전문
///
/// 역직렬화 성공이 곧 필수 필드(`id`, 닉네임) 존재 검증입니다.
#[derive(Debug, Deserialize)]
pub struct KakaoUserResponse {
    /// 카카오 회원번호
    pub id: i64,
    pub kakao_account: KakaoAccount,
}

/// 카카오 사용자 프로필 (외부 신원)
///
/// 계정 매칭/연동/생성 로직이 소비하는 불변 프로필입니다.
/// 와이어 포맷([`KakaoUserResponse`])과 분리하여 내부 로직이
/// 카카오 응답의 중첩 구조에 의존하지 않도록 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct KakaoUserInfo {
    /// 카카오 회원번호 (외부 신원 식별자)
    pub id: i64,
    /// 프로필 닉네임
    pub nickname: String,
    /// 동의된 경우에만 존재하는 이메일
    pub email: Option<String>,
}

impl From<KakaoUserResponse> for KakaoUserInfo {
    fn from(response: KakaoUserResponse) -> Self {
        Self {
            id: response.id,
            nickname: response.kakao_account.profile.nickname,
            // 빈 문자열 이메일은 미제공과 동일하게 취급
            email: clean_optional_string(response.kakao_account.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_with_email() {
        let json = r#"{
            "id": 42,
            "kakao_account": {
                "profile": { "nickname": "Alex" },
                "email": "a@x.com"
            }
        }"#;

        let response: KakaoUserResponse = serde_json::from_str(json).unwrap();
        let info = KakaoUserInfo::from(response);

        assert_eq!(info.id, 42);
        assert_eq!(info.nickname, "Alex");
        assert_eq!(info.email, Some("a@x.com".to_string()));
    }

    #[test]
    fn test_parse_profile_without_email_is_not_an_error() {
        let json = r#"{
            "id": 7,
            "kakao_account": {
                "profile": { "nickname": "민수" }
            }
        }"#;

        let response: KakaoUserResponse = serde_json::from_str(json).unwrap();
        let info = KakaoUserInfo::from(response);

        assert_eq!(info.id, 7);
        assert_eq!(info.nickname, "민수");
        assert_eq!(info.email, None);
    }

    #[test]
    fn test_empty_email_normalizes_to_none() {
        let json = r#"{
            "id": 7,
            "kakao_account": {
                "profile": { "nickname": "민수" },
                "email": "   "
            }
        }"#;

        let response: KakaoUserResponse = serde_json::from_str(json).unwrap();
        let info = KakaoUserInfo::from(response);

        assert_eq!(info.email, None);
    }

    #[test]
    fn test_missing_id_fails_to_parse() {
        let json = r#"{
            "kakao_account": {
                "profile": { "nickname": "Alex" }
            }
        }"#;

        assert!(serde_json::from_str::<KakaoUserResponse>(json).is_err());
    }

    #[test]
    fn test_missing_nickname_fails_to_parse() {
        let json = r#"{
            "id": 42,
            "kakao_account": {
                "profile": {},
                "email": "a@x.com"
            }
        }"#;

        assert!(serde_json::from_str::<KakaoUserResponse>(json).is_err());
    }
}
