//! 조회 결과를 HTTP 응답으로 감싸는 유틸리티

use actix_web::HttpResponse;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// 값이 있으면 200 OK + JSON, 없으면 빈 본문의 404 Not Found로 응답합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let user = service.find_one(id).await?;
/// response_util::wrap_or_not_found(user)
/// ```
pub fn wrap_or_not_found<T: Serialize>(value: Option<T>) -> AppResult<HttpResponse> {
    value
        .map(|body| HttpResponse::Ok().json(body))
        .ok_or(AppError::NotFound)
}
