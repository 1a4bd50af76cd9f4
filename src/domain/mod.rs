//! # Domain Layer Module
//!
//! Users 리소스의 두 가지 표현과 그 사이의 변환을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 표현 (MongoDB 문서)
//! ├── dto       - 전송 표현 (HTTP JSON)
//! └── mapper    - DTO ↔ 엔티티 변환
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 식별자
//!
//! 두 표현 모두 식별자를 `Option<i64>`로 가집니다. `None`은 "아직 할당되지 않음"이고
//! `Some(0)`과 구분되며, 이 구분은 요청부터 저장소까지 그대로 유지됩니다.
//! 동일성 역시 두 표현 모두 식별자 기반입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::{dto::users::UsersDto, mapper::{EntityMapper, UsersMapper}};
//!
//! let entity = UsersMapper.to_entity(dto)?;
//! let saved = repository.save(entity).await?;
//! let response: UsersDto = UsersMapper.to_dto(saved);
//! ```

pub mod dto;
pub mod entities;
pub mod mapper;
