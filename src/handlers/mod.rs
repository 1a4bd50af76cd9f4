//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb의 속성 매크로(`#[get]`, `#[post]` 등)로 엔드포인트를 선언하고,
//! 라우트 등록은 [`crate::routes`]에서 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, 식별자 전제 조건      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - DTO ↔ 엔티티 변환                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / 메모리 저장소          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `AppResult<HttpResponse>`를 반환하며, 에러는
//! [`crate::errors::AppError`]의 `ResponseError` 구현으로 응답이 됩니다.

pub mod users;
