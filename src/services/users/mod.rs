//! Users 리소스 서비스 모듈
//!
//! 저장, 전체 조회, 단건 조회, 삭제를 제공합니다.
//! 입력 검증과 식별자 전제 조건은 핸들러에서 먼저 확인합니다.

pub mod user_service;

pub use user_service::UserService;
