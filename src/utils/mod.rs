//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`header_util`] - `X-userSvcApp-*` 알림 헤더 생성
//! - [`response_util`] - `Option` 결과를 200/404 응답으로 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::header_util::create_entity_creation_alert;
//!
//! let headers = create_entity_creation_alert("userSvcUsers", "1");
//! ```

pub mod header_util;
pub mod response_util;
