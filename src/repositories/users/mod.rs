//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] 계약과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 프로세스 메모리
//!
//! # 계약
//!
//! | 연산 | 동작 |
//! |------|------|
//! | `save` | 식별자가 없으면 새 식별자를 할당해 삽입, 있으면 해당 레코드를 통째로 덮어씀 (없으면 삽입) |
//! | `find_all` | 저장된 모든 레코드 (식별자 오름차순) |
//! | `find_by_id` | 식별자가 일치하는 레코드 또는 `None` |
//! | `delete_by_id` | 레코드 삭제. 없는 식별자는 에러 없이 무시 |
//!
//! 새로 할당되는 식별자는 명시적 식별자로 삽입된 레코드를 포함해
//! 지금까지 쓰인 어떤 식별자와도 겹치지 않습니다.

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

use async_trait::async_trait;

use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// Users 레코드 저장소 계약
///
/// 각 연산은 저장소에 대한 단일 원자 작업입니다.
/// 여러 호출을 묶는 트랜잭션은 제공하지 않습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 레코드를 저장하고, 할당된 식별자를 포함한 저장 결과를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 레코드를 삭제합니다. 존재하지 않는 식별자는 조용히 무시됩니다.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// 저장소 이름 (헬스체크와 로그용)
    fn store_name(&self) -> &'static str;
}
