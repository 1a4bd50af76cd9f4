//! # Domain Entities Module
//!
//! 저장소에 영속되는 엔티티들을 정의합니다.
//! 모든 엔티티는 MongoDB 문서와 1:1로 대응되며, 식별자는 `_id` 필드에 저장됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 표현)
//! ├── dto/          ← 데이터 전송 객체 (HTTP 경계)
//! └── mapper/       ← 두 표현 사이의 변환
//! ```

pub mod users;
