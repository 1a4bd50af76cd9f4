//! API 라우트 설정 모듈
//!
//! Users 리소스 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST|PUT|GET /api/users` - 생성, 전체 덮어쓰기, 전체 조회
//! - `GET|DELETE /api/users/{id}` - 단건 조회, 삭제
//!
//! 해석할 수 없는 JSON 본문과 숫자가 아닌 `{id}` 경로는
//! [`AppError::MalformedRequest`]로 변환되어 400으로 응답합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 설정합니다
///
/// `web::Data<UserService>`는 호출하는 쪽에서 `App::app_data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 추출기 실패를 `AppError` 응답 형식으로 맞춥니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::MalformedRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::MalformedRequest(err.to_string()).into()),
    );
}

/// Users 리소스 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"AAAAAAAAAA","age":1,"gender":"AAAAAAAAAA","email":"AAAAAAAAAA","country":"AAAAAAAAAA"}'
///
/// curl http://localhost:8080/api/users/1
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_users)
            .service(handlers::users::update_users)
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_users)
            .service(handlers::users::delete_users),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_svc",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "store": "MongoDB"
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": service.store_name(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;

    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    #[actix_web::test]
    async fn test_health_check() {
        let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
        let app = test::init_service(App::new().app_data(service).configure(configure_all_routes))
            .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_svc");
        assert_eq!(body["store"], "memory");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
        let app = test::init_service(App::new().app_data(service).configure(configure_all_routes))
            .await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
