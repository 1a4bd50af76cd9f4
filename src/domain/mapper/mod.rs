//! # Entity ↔ DTO Mapper Module
//!
//! 전송 표현(DTO)과 영속 표현(엔티티) 사이의 변환 계약을 정의합니다.
//! 변환은 필드를 그대로 복사할 뿐 부수 효과가 없습니다.
//!
//! ```text
//! HTTP JSON ──▶ UsersDto ──to_entity──▶ User ──▶ Repository
//!                  ▲                      │
//!                  └──────to_dto──────────┘
//! ```

pub mod users_mapper;

pub use users_mapper::UsersMapper;

use crate::errors::AppResult;

/// DTO `D`와 엔티티 `E` 사이의 변환 계약
///
/// 엔티티는 필수 필드를 구체 타입으로 가지므로 `D → E` 방향은 실패할 수 있습니다.
pub trait EntityMapper<D, E> {
    fn to_entity(&self, dto: D) -> AppResult<E>;

    fn to_dto(&self, entity: E) -> D;

    fn to_entities(&self, dtos: Vec<D>) -> AppResult<Vec<E>> {
        dtos.into_iter().map(|dto| self.to_entity(dto)).collect()
    }

    fn to_dtos(&self, entities: Vec<E>) -> Vec<D> {
        entities.into_iter().map(|entity| self.to_dto(entity)).collect()
    }
}
