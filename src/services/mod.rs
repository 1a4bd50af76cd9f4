//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러와 리포지토리 사이에서 DTO ↔ 엔티티 변환을 수행합니다.
//! 서비스는 생성자로 리포지토리를 주입받으며, `web::Data`로 감싸 워커 간에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::web;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! ```

pub mod users;
