//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Users 리소스 API를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 응답(상태 코드 + JSON 본문 + 알림 헤더)을 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락 |
//! | `BadRequestAlert` | 400 Bad Request | 식별자 전제 조건 위반 (`idexists`, `idnull`) |
//! | `MalformedRequest` | 400 Bad Request | JSON 파싱 실패, 잘못된 경로 파라미터 |
//! | `NotFound` | 404 Not Found | 단건 조회 대상 없음 (본문 없음) |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! if dto.id.is_some() {
//!     return Err(AppError::bad_request_alert(
//!         "A new users cannot already have an ID",
//!         "userSvcUsers",
//!         "idexists",
//!     ));
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::header_util;

/// 검증에 실패한 단일 필드 정보
///
/// 클라이언트가 어떤 객체의 어떤 필드가 왜 실패했는지 알 수 있도록
/// `fieldErrors` 배열의 원소로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub object_name: String,
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(object_name: &str, field: &str, message: &str) -> Self {
        Self {
            object_name: object_name.to_string(),
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// `validator`의 검증 결과를 필드명 순으로 정렬된 목록으로 변환합니다.
    pub fn from_validation_errors(object_name: &str, errors: &ValidationErrors) -> Vec<Self> {
        let mut fields: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(|e| Self::new(object_name, &field, &e.code))
                    .collect::<Vec<_>>()
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field));
        fields
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 필수 필드 검증 에러 (400 Bad Request)
    #[error("Validation error: {}", field_names(.0))]
    ValidationError(Vec<FieldError>),

    /// 식별자 전제 조건 위반 (400 Bad Request)
    ///
    /// `error_key`는 기계가 읽을 수 있는 사유 코드(`idexists`, `idnull`)이고
    /// `entity_name`은 알림 헤더와 본문에 함께 실립니다.
    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity_name: String,
        error_key: String,
    },

    /// 요청 본문 또는 경로를 해석할 수 없음 (400 Bad Request)
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found, 본문 없음)
    #[error("Not found")]
    NotFound,

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn field_names(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    pub fn bad_request_alert(message: &str, entity_name: &str, error_key: &str) -> Self {
        AppError::BadRequestAlert {
            message: message.to_string(),
            entity_name: entity_name.to_string(),
            error_key: error_key.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::BadRequestAlert { .. }
            | AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 본문은 `error`(사람이 읽는 메시지)와 `status`를 공통으로 가지며,
    /// 변형별로 `fieldErrors`, `entityName`, `errorKey` 등이 추가됩니다.
    /// `NotFound`는 빈 본문으로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);

        match self {
            AppError::NotFound => builder.finish(),
            AppError::ValidationError(fields) => builder.json(serde_json::json!({
                "error": self.to_string(),
                "status": status.as_u16(),
                "message": "error.validation",
                "fieldErrors": fields,
            })),
            AppError::BadRequestAlert {
                message,
                entity_name,
                error_key,
            } => {
                header_util::create_failure_alert(entity_name, error_key).apply_to(&mut builder);
                builder.json(serde_json::json!({
                    "error": message,
                    "status": status.as_u16(),
                    "message": format!("error.{}", error_key),
                    "entityName": entity_name,
                    "errorKey": error_key,
                }))
            }
            _ => {
                if status.is_server_error() {
                    log::error!("요청 처리 실패: {}", self);
                }
                builder.json(serde_json::json!({
                    "error": self.to_string(),
                    "status": status.as_u16(),
                }))
            }
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(vec![FieldError::new("usersDto", "age", "required")]);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Validation error: age");
    }

    #[actix_web::test]
    async fn test_validation_error_body_lists_fields() {
        let error = AppError::ValidationError(vec![
            FieldError::new("usersDto", "age", "required"),
            FieldError::new("usersDto", "email", "required"),
        ]);

        let body = body_json(error.error_response()).await;
        assert_eq!(body["message"], "error.validation");
        assert_eq!(body["fieldErrors"][0]["field"], "age");
        assert_eq!(body["fieldErrors"][1]["field"], "email");
        assert_eq!(body["fieldErrors"][1]["objectName"], "usersDto");
    }

    #[actix_web::test]
    async fn test_bad_request_alert_response() {
        let error = AppError::bad_request_alert("Invalid id", "userSvcUsers", "idnull");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("x-usersvcapp-error").unwrap(),
            "error.idnull"
        );
        assert_eq!(
            response.headers().get("x-usersvcapp-params").unwrap(),
            "userSvcUsers"
        );

        let body = body_json(response).await;
        assert_eq!(body["errorKey"], "idnull");
        assert_eq!(body["entityName"], "userSvcUsers");
        assert_eq!(body["message"], "error.idnull");
    }

    #[actix_web::test]
    async fn test_not_found_error_has_empty_body() {
        let response = AppError::NotFound.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_server_error_responses() {
        let database = AppError::DatabaseError("connection refused".to_string());
        let internal = AppError::InternalError("Something went wrong".to_string());

        assert_eq!(database.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_driver_error_maps_to_database_error() {
        let driver: mongodb::error::Error = std::io::Error::other("connection refused").into();
        let error = AppError::from(driver);

        assert!(matches!(error, AppError::DatabaseError(_)));
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_malformed_request_response() {
        let error = AppError::MalformedRequest("expected i64".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_errors_from_validator_are_sorted() {
        #[derive(Validate)]
        struct Probe {
            #[validate(required)]
            zeta: Option<i32>,
            #[validate(required)]
            alpha: Option<String>,
        }

        let errors = Probe { zeta: None, alpha: None }.validate().unwrap_err();
        let fields = FieldError::from_validation_errors("probe", &errors);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "alpha");
        assert_eq!(fields[1].field, "zeta");
        assert_eq!(fields[0].message, "required");
        assert_eq!(fields[0].object_name, "probe");
    }
}
