//! Users Entity Module
//!
//! Users 리소스의 영속 표현을 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 식별자만 가진 참조용 엔티티
//! let reference = User::with_id(42);
//! assert!(!reference.is_new());
//! ```

pub mod user;

pub use user::User;
