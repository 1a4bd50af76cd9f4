//! Users 리소스 서비스 백엔드
//!
//! 사용자 레코드(이름, 나이, 성별, 이메일, 국가)를 JSON over HTTP로
//! 생성, 조회, 수정, 삭제하는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **CRUD API**: `/api/users` 아래 생성/전체 덮어쓰기/전체 조회/단건 조회/삭제
//! - **입력 검증**: `validator` 기반 필수 필드 검증과 `fieldErrors` 응답
//! - **알림 헤더**: `X-userSvcApp-*` 헤더로 처리 결과와 실패 사유 전달
//! - **MongoDB**: 정수 식별자 시퀀스를 갖는 영구 저장소
//! - **메모리 저장소**: 테스트와 로컬 실행용 (`USER_STORE=memory`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 추출기 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 식별자 전제 조건, 알림 헤더
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← DTO ↔ 엔티티 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_svc::repositories::users::InMemoryUserRepository;
//! use user_svc::routes::configure_all_routes;
//! use user_svc::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
