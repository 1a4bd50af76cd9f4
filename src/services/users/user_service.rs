//! # Users 서비스 구현
//!
//! Users 레코드의 저장과 조회를 담당하는 서비스 계층입니다.
//!
//! ```text
//! ┌──────────────┐   UsersDto   ┌──────────────┐    User    ┌──────────────────┐
//! │   Handlers   │ ───────────▶ │ UserService  │ ─────────▶ │  UserRepository  │
//! │  (HTTP 계층)  │ ◀─────────── │ + UsersMapper│ ◀───────── │ (MongoDB/memory) │
//! └──────────────┘              └──────────────┘            └──────────────────┘
//! ```
//!
//! 서비스는 상태를 갖지 않으며 리포지토리 호출 하나가 곧 하나의 원자적 작업 단위입니다.

use std::sync::Arc;

use log::debug;

use crate::domain::dto::users::UsersDto;
use crate::domain::mapper::{EntityMapper, UsersMapper};
use crate::errors::AppResult;
use crate::repositories::users::UserRepository;

/// Users 서비스
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(MongoUserRepository::new(database)));
///
/// let created = service.save(dto).await?;
/// let all = service.find_all().await?;
/// let one = service.find_one(created.id.unwrap()).await?;
/// service.delete(42).await?;
/// ```
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    mapper: UsersMapper,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            mapper: UsersMapper,
        }
    }

    /// 레코드를 저장합니다.
    ///
    /// 식별자가 없으면 새 식별자가 할당되고, 있으면 해당 레코드를 통째로 덮어씁니다.
    /// 존재하지 않는 식별자는 그 식별자로 새로 삽입됩니다.
    pub async fn save(&self, dto: UsersDto) -> AppResult<UsersDto> {
        debug!("Users 저장 요청: {:?}", dto);

        let user = self.mapper.to_entity(dto)?;
        let saved = self.repository.save(user).await?;

        Ok(self.mapper.to_dto(saved))
    }

    /// 저장된 모든 레코드를 반환합니다.
    pub async fn find_all(&self) -> AppResult<Vec<UsersDto>> {
        debug!("Users 전체 조회 요청");

        let users = self.repository.find_all().await?;
        Ok(self.mapper.to_dtos(users))
    }

    pub async fn find_one(&self, id: i64) -> AppResult<Option<UsersDto>> {
        debug!("Users 조회 요청: id={}", id);

        let user = self.repository.find_by_id(id).await?;
        Ok(user.map(|u| self.mapper.to_dto(u)))
    }

    /// 레코드를 삭제합니다. 없는 식별자도 성공으로 처리됩니다.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        debug!("Users 삭제 요청: id={}", id);
        self.repository.delete_by_id(id).await
    }

    /// 사용 중인 저장소 이름 (헬스체크 응답용)
    pub fn store_name(&self) -> &'static str {
        self.repository.store_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn dto(name: &str, age: i32) -> UsersDto {
        UsersDto {
            id: None,
            name: Some(name.to_string()),
            age: Some(age),
            gender: Some("AAAAAAAAAA".to_string()),
            email: Some("AAAAAAAAAA".to_string()),
            country: Some("AAAAAAAAAA".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_save_returns_record_with_identifier() {
        let service = service();
        let input = dto("AAAAAAAAAA", 1);

        let saved = service.save(input.clone()).await.unwrap();

        assert!(saved.id.is_some());
        assert_eq!(saved.name, input.name);
        assert_eq!(saved.age, input.age);
        assert_eq!(saved.gender, input.gender);
        assert_eq!(saved.email, input.email);
        assert_eq!(saved.country, input.country);
    }

    #[actix_web::test]
    async fn test_save_rejects_missing_required_fields() {
        let service = service();
        let input = UsersDto { email: None, ..dto("AAAAAAAAAA", 1) };

        let result = service.save(input).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_find_one_round_trip() {
        let service = service();
        let saved = service.save(dto("AAAAAAAAAA", 1)).await.unwrap();

        let found = service.find_one(saved.id.unwrap()).await.unwrap().unwrap();

        assert_eq!(found, saved);
        assert_eq!(found.name, saved.name);
        assert!(service.find_one(i64::MAX).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_save_with_identifier_overwrites() {
        let service = service();
        let saved = service.save(dto("AAAAAAAAAA", 1)).await.unwrap();

        let update = UsersDto {
            id: saved.id,
            name: None,
            ..dto("BBBBBBBBBB", 2)
        };
        service.save(update).await.unwrap();

        let found = service.find_one(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, None);
        assert_eq!(found.age, Some(2));
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_and_store_name() {
        let service = service();
        let saved = service.save(dto("AAAAAAAAAA", 1)).await.unwrap();

        service.delete(saved.id.unwrap()).await.unwrap();
        service.delete(saved.id.unwrap()).await.unwrap();

        assert!(service.find_all().await.unwrap().is_empty());
        assert_eq!(service.store_name(), "memory");
    }
}
