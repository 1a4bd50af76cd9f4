//! # 알림 헤더 유틸리티
//!
//! 엔티티 생성/수정/삭제 결과와 실패 사유를 클라이언트에 알리는
//! `X-userSvcApp-*` 응답 헤더를 만듭니다.
//!
//! | 상황 | 헤더 |
//! |------|------|
//! | 성공 알림 | `X-userSvcApp-alert`, `X-userSvcApp-params` |
//! | 실패 알림 | `X-userSvcApp-error`, `X-userSvcApp-params` |

use actix_web::HttpResponseBuilder;

/// 헤더 접두어와 알림 메시지 키에 쓰이는 애플리케이션 이름
pub const APPLICATION_NAME: &str = "userSvcApp";

/// 응답에 실을 알림 헤더 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHeaders(Vec<(String, String)>);

impl AlertHeaders {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 헤더 값을 조회합니다. 헤더 이름은 대소문자를 구분하지 않습니다.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// 응답 빌더에 모든 헤더를 추가합니다.
    pub fn apply_to<'a>(&self, builder: &'a mut HttpResponseBuilder) -> &'a mut HttpResponseBuilder {
        for (name, value) in &self.0 {
            builder.insert_header((name.as_str(), value.as_str()));
        }
        builder
    }
}

/// 일반 알림 헤더를 생성합니다.
pub fn create_alert(message: &str, param: &str) -> AlertHeaders {
    AlertHeaders(vec![
        (format!("X-{}-alert", APPLICATION_NAME), message.to_string()),
        (format!("X-{}-params", APPLICATION_NAME), param.to_string()),
    ])
}

pub fn create_entity_creation_alert(entity_name: &str, param: &str) -> AlertHeaders {
    create_alert(&format!("{}.{}.created", APPLICATION_NAME, entity_name), param)
}

pub fn create_entity_update_alert(entity_name: &str, param: &str) -> AlertHeaders {
    create_alert(&format!("{}.{}.updated", APPLICATION_NAME, entity_name), param)
}

pub fn create_entity_deletion_alert(entity_name: &str, param: &str) -> AlertHeaders {
    create_alert(&format!("{}.{}.deleted", APPLICATION_NAME, entity_name), param)
}

/// 실패 알림 헤더를 생성합니다.
///
/// `error_key`는 `error.` 접두어가 붙은 메시지 키로 실립니다.
pub fn create_failure_alert(entity_name: &str, error_key: &str) -> AlertHeaders {
    log::warn!("엔티티 처리 실패: {} ({})", entity_name, error_key);
    AlertHeaders(vec![
        (format!("X-{}-error", APPLICATION_NAME), format!("error.{}", error_key)),
        (format!("X-{}-params", APPLICATION_NAME), entity_name.to_string()),
    ])
}
