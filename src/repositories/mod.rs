//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 레코드의 유일한 소유자입니다. 상위 계층은 [`users::UserRepository`]
//! trait만 알고, 구현체는 애플리케이션 시작 시 한 번 골라 생성자로 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let saved = repository.save(user).await?;
//! ```

pub mod users;
