//! # Users DTO
//!
//! Users 리소스의 전송 표현입니다. 생성(`POST`), 수정(`PUT`) 요청 본문과
//! 모든 응답 본문에 같은 구조가 쓰입니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 타입 | 규칙 |
//! |------|------|------|
//! | `id` | 정수 | 생성 시 없어야 하고, 수정 시 있어야 함 (핸들러에서 검사) |
//! | `name` | 문자열 | 선택 |
//! | `age` | 정수 | 필수 |
//! | `gender` | 문자열 | 필수 |
//! | `email` | 문자열 | 필수 (형식 검증 없음) |
//! | `country` | 문자열 | 필수 |
//!
//! 모든 필드는 `Option`이며, 누락과 `null`은 역직렬화가 아닌 검증 단계에서
//! `fieldErrors`로 보고됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "id": null,
//!   "name": "AAAAAAAAAA",
//!   "age": 1,
//!   "gender": "AAAAAAAAAA",
//!   "email": "AAAAAAAAAA",
//!   "country": "AAAAAAAAAA"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 검증 에러 응답의 `objectName`으로 쓰이는 이름
pub const OBJECT_NAME: &str = "usersDto";

/// Users 전송 객체
///
/// 엔티티와 마찬가지로 식별자 기반 동일성을 가집니다.
/// 두 DTO는 양쪽 모두 `id`가 있고 같을 때만 같습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UsersDto {
    pub id: Option<i64>,

    pub name: Option<String>,

    #[validate(required)]
    pub age: Option<i32>,

    #[validate(required)]
    pub gender: Option<String>,

    #[validate(required)]
    pub email: Option<String>,

    #[validate(required)]
    pub country: Option<String>,
}

impl PartialEq for UsersDto {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
