//! 에러 타입 모듈
//!
//! [`errors`] 하위 모듈의 타입들을 그대로 재노출합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
