//! # Data Transfer Objects Module
//!
//! HTTP 경계에서 주고받는 데이터 구조를 정의합니다.
//! DTO는 저장소와 연결이 끊긴 스냅샷이며, 수정해도 저장된 레코드에 영향이 없습니다.

pub mod users;
