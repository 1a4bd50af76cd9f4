//! # Users HTTP Handlers
//!
//! Users 리소스의 CRUD 엔드포인트입니다. 모든 경로는 `/api/users` 아래에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `POST` | `/api/users` | 생성 | 201 Created + `Location` | 400 (`idexists`, 검증 실패) |
//! | `PUT` | `/api/users` | 전체 덮어쓰기 | 200 OK | 400 (`idnull`, 검증 실패) |
//! | `GET` | `/api/users` | 전체 조회 | 200 OK | - |
//! | `GET` | `/api/users/{id}` | 단건 조회 | 200 OK | 404 (빈 본문) |
//! | `DELETE` | `/api/users/{id}` | 삭제 | 200 OK (빈 본문) | - |
//!
//! ## 처리 순서
//!
//! 생성과 수정은 항상 필수 필드 검증을 먼저 수행하고, 그 다음 식별자 전제 조건을 확인합니다.
//! 따라서 필드가 빠진 채 식별자까지 잘못된 요청은 `fieldErrors`를 담은 검증 실패로 응답합니다.
//!
//! ## 알림 헤더
//!
//! 성공한 생성/수정/삭제 응답에는 `X-userSvcApp-alert`와 `X-userSvcApp-params`가 실립니다.
//!
//! ```text
//! X-userSvcApp-alert: userSvcApp.userSvcUsers.created
//! X-userSvcApp-params: 1
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use log::debug;
use validator::Validate;

use crate::domain::dto::users::UsersDto;
use crate::domain::dto::users::users_dto::OBJECT_NAME;
use crate::errors::{AppError, AppResult, FieldError};
use crate::services::users::UserService;
use crate::utils::{header_util, response_util};

/// 알림 헤더와 에러 본문에 쓰이는 엔티티 이름
pub const ENTITY_NAME: &str = "userSvcUsers";

fn validate(dto: &UsersDto) -> AppResult<()> {
    dto.validate()
        .map_err(|e| AppError::ValidationError(FieldError::from_validation_errors(OBJECT_NAME, &e)))
}

fn saved_id(dto: &UsersDto) -> AppResult<i64> {
    dto.id
        .ok_or_else(|| AppError::InternalError("저장된 레코드에 식별자가 없습니다".to_string()))
}

/// 새 Users 레코드를 생성합니다.
///
/// # 요청 본문
///
/// ```json
/// { "name": "AAAAAAAAAA", "age": 1, "gender": "AAAAAAAAAA", "email": "AAAAAAAAAA", "country": "AAAAAAAAAA" }
/// ```
///
/// # 응답
///
/// - `201 Created`: 식별자가 할당된 레코드, `Location: /api/users/{id}`
/// - `400 Bad Request`: 필수 필드 누락 또는 식별자가 이미 있음 (`idexists`)
#[post("")]
pub async fn create_users(
    service: web::Data<UserService>,
    payload: web::Json<UsersDto>,
) -> AppResult<HttpResponse> {
    let dto = payload.into_inner();
    debug!("REST request to save Users : {:?}", dto);

    validate(&dto)?;
    if dto.id.is_some() {
        return Err(AppError::bad_request_alert(
            "A new users cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ));
    }

    let result = service.save(dto).await?;
    let id = saved_id(&result)?;

    let mut builder = HttpResponse::Created();
    builder.insert_header(("Location", format!("/api/users/{}", id)));
    header_util::create_entity_creation_alert(ENTITY_NAME, &id.to_string()).apply_to(&mut builder);

    Ok(builder.json(result))
}

/// 기존 Users 레코드를 통째로 덮어씁니다.
///
/// 존재 여부는 확인하지 않으므로 저장소에 없는 식별자는 그 식별자로 새로 삽입됩니다.
///
/// # 응답
///
/// - `200 OK`: 저장된 레코드
/// - `400 Bad Request`: 필수 필드 누락 또는 식별자 없음 (`idnull`)
#[put("")]
pub async fn update_users(
    service: web::Data<UserService>,
    payload: web::Json<UsersDto>,
) -> AppResult<HttpResponse> {
    let dto = payload.into_inner();
    debug!("REST request to update Users : {:?}", dto);

    validate(&dto)?;
    if dto.id.is_none() {
        return Err(AppError::bad_request_alert("Invalid id", ENTITY_NAME, "idnull"));
    }

    let result = service.save(dto).await?;
    let id = saved_id(&result)?;

    let mut builder = HttpResponse::Ok();
    header_util::create_entity_update_alert(ENTITY_NAME, &id.to_string()).apply_to(&mut builder);

    Ok(builder.json(result))
}

#[get("")]
pub async fn get_all_users(service: web::Data<UserService>) -> AppResult<HttpResponse> {
    debug!("REST request to get all Users");
    let users = service.find_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// 식별자로 Users 레코드를 조회합니다. 없으면 빈 본문의 404로 응답합니다.
#[get("/{id}")]
pub async fn get_users(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    debug!("REST request to get Users : {}", id);

    response_util::wrap_or_not_found(service.find_one(id).await?)
}

/// Users 레코드를 삭제합니다. 없는 식별자도 200으로 응답합니다.
#[delete("/{id}")]
pub async fn delete_users(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    debug!("REST request to delete Users : {}", id);

    service.delete(id).await?;

    let mut builder = HttpResponse::Ok();
    header_util::create_entity_deletion_alert(ENTITY_NAME, &id.to_string()).apply_to(&mut builder);

    Ok(builder.finish())
}
