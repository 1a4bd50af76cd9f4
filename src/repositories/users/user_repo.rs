//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 Users 레코드를 저장합니다.
//!
//! ## 식별자 할당
//!
//! MongoDB는 정수 자동 증가 키가 없으므로 `counters` 컬렉션의 시퀀스 문서를 씁니다.
//!
//! ```text
//! counters: { _id: "users", seq: <마지막으로 쓰인 식별자> }
//! ```
//!
//! - 새 레코드: `$inc`로 `seq`를 1 올리고 그 값을 식별자로 사용 (문서가 없으면 upsert)
//! - 명시적 식별자로 upsert: 덮어쓰기 전에 `$max`로 `seq`를 그 식별자 이상으로 올림
//!
//! 두 연산 모두 단일 문서 원자 연산이므로 동시 요청에서도 식별자가 겹치지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, FindOptions, ReplaceOptions, ReturnDocument, UpdateOptions},
    Collection,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";

/// `counters`에서 Users 시퀀스 문서를 고르는 필터
fn sequence_filter() -> Document {
    doc! { "_id": USERS_COLLECTION }
}

/// 시퀀스를 1 올리는 업데이트 문서
fn increment_sequence() -> Document {
    doc! { "$inc": { "seq": 1_i64 } }
}

/// 시퀀스를 `id` 이상으로 끌어올리는 업데이트 문서
fn raise_sequence(id: i64) -> Document {
    doc! { "$max": { "seq": id } }
}

/// MongoDB 기반 Users 리포지토리
///
/// ```rust,ignore
/// let database = Arc::new(Database::connect_from_env().await?);
/// let repo = MongoUserRepository::new(database);
///
/// let created = repo.save(user).await?;           // 식별자 할당
/// let found = repo.find_by_id(created.id.unwrap()).await?;
/// repo.delete_by_id(42).await?;                   // 없어도 Ok(())
/// ```
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 시퀀스를 1 올리고 새 식별자를 반환합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters()
            .find_one_and_update(sequence_filter(), increment_sequence())
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("시퀀스 문서를 읽을 수 없습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("시퀀스 값이 올바르지 않습니다: {}", e)))
    }

    /// 명시적으로 쓰인 식별자보다 시퀀스가 작으면 끌어올립니다.
    async fn raise_sequence_to(&self, id: i64) -> AppResult<()> {
        let options = UpdateOptions::builder().upsert(true).build();

        self.counters()
            .update_one(sequence_filter(), raise_sequence(id))
            .with_options(options)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            None => {
                let id = self.next_id().await?;
                user.id = Some(id);

                self.collection()
                    .insert_one(&user)
                    .await?;

                debug!("사용자 삽입: id={}", id);
            }
            Some(id) => {
                // 삽입이 일어나기 전에 시퀀스를 올려 두어야 동시 생성과 겹치지 않음
                self.raise_sequence_to(id).await?;

                let options = ReplaceOptions::builder().upsert(true).build();

                let result = self
                    .collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .with_options(options)
                    .await?;

                if result.upserted_id.is_some() {
                    debug!("사용자 upsert (신규 삽입): id={}", id);
                } else {
                    debug!("사용자 덮어쓰기: id={}", id);
                }
            }
        }

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        self.collection()
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await?;

        debug!("사용자 삭제: id={}, deleted_count={}", id, result.deleted_count);
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "MongoDB"
    }
}
