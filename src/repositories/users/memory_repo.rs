//! # 메모리 사용자 리포지토리
//!
//! [`UserRepository`] 계약을 프로세스 메모리 위에서 구현합니다.
//! 테스트와 MongoDB 없이 띄우는 로컬 실행(`USER_STORE=memory`)에 사용하며,
//! 프로세스가 끝나면 데이터는 사라집니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;

use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

#[derive(Default)]
struct Store {
    users: BTreeMap<i64, User>,
    /// 지금까지 쓰인 가장 큰 식별자
    sequence: i64,
}

/// 메모리 기반 Users 리포지토리
///
/// 레코드와 시퀀스를 하나의 `RwLock` 아래 두어 각 연산이 원자적으로 수행됩니다.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut store = self.write()?;

        let id = match user.id {
            Some(id) => id,
            None => store.sequence.checked_add(1).ok_or_else(|| {
                AppError::InternalError("식별자 시퀀스 소진".to_string())
            })?,
        };
        store.sequence = store.sequence.max(id);

        user.id = Some(id);
        let previous = store.users.insert(id, user.clone());
        debug!("사용자 저장: id={}, replaced={}", id, previous.is_some());

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let removed = self.write()?.users.remove(&id);
        debug!("사용자 삭제: id={}, removed={}", id, removed.is_some());
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}
