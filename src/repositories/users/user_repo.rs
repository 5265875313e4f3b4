//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//!
//! 계정 매칭/연동/생성 로직은 [`UserStore`] trait에만 의존하며,
//! 운영 환경에서는 MongoDB 기반 [`UserRepository`]가 이를 구현합니다.
//! 테스트에서는 인메모리 구현을 대신 주입합니다.
//!
//! ## 데이터 무결성
//!
//! `email`, `username`은 유니크 인덱스로, `kakao_id`는 sparse 유니크
//! 인덱스로 보호됩니다. 동일한 카카오 신원으로 동시에 들어온 두 로그인이
//! 모두 신규 생성 경로를 타더라도, 두 번째 insert는 인덱스 위반으로
//! 실패합니다. 이 계층은 그 실패를 재시도하지 않고 그대로 반환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{DateTime, doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};

/// 로컬 사용자 저장소 인터페이스
///
/// 계정 매칭/연동/생성에 필요한 네 가지 연산만 노출합니다.
/// 저장소 구현의 유니크 제약 위반을 포함한 모든 쓰기 실패는
/// `AppError`로 전달되며, 이 계층에서 재시도하지 않습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 카카오 회원번호로 사용자를 조회합니다.
    async fn find_by_kakao_id(&self, kakao_id: i64) -> Result<Option<User>, AppError>;

    /// 이메일 주소로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고, ID가 채워진 사용자를 반환합니다.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 기존 사용자에 카카오 회원번호를 연동하고 갱신된 사용자를 반환합니다.
    ///
    /// 갱신 후의 레코드를 반환하는 함수형 업데이트로, 호출자는 반환값을
    /// 통해서만 변경 결과를 관찰합니다.
    async fn link_kakao_id(&self, id: &str, kakao_id: i64) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// `users` 컬렉션에 대한 모든 데이터 액세스를 담당합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 유니크 제약을 보장합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. `email` — 유니크
    /// 2. `username` — 유니크
    /// 3. `kakao_id` — 유니크 + sparse (로컬 가입 계정은 필드 자체가 없음)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let kakao_id_index = IndexModel::builder()
            .keys(doc! { "kakao_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("kakao_id_unique".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([email_index, username_index, kakao_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_kakao_id(&self, kakao_id: i64) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "kakao_id": kakao_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        // 유니크 제약은 인덱스가 보장한다. 동시 생성의 두 번째 쓰기는
        // 여기서 에러로 돌아온다.
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn link_kakao_id(&self, id: &str, kakao_id: i64) -> Result<User, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "kakao_id": kakao_id, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        updated_user.ok_or_else(|| {
            AppError::DatabaseError(format!("연동 대상 사용자를 찾을 수 없습니다: {}", id))
        })
    }
}
