//! # Users Data Transfer Objects
//!
//! Users 리소스의 요청/응답 본문은 같은 형태를 공유하므로
//! 단일 DTO([`UsersDto`])로 정의합니다.

pub mod users_dto;

pub use users_dto::UsersDto;
