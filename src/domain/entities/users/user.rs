//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 영속 표현입니다.
//! 필수 필드는 구체 타입으로 고정되어 있어, 저장소에 들어가는 모든 레코드는
//! 나이/성별/이메일/국가를 반드시 가집니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `id`는 최초 저장 전에는 `None`이고, 저장소가 생성 시점에 할당한 뒤로는
/// 변하지 않습니다. `Some(0)`은 할당된 식별자 0이며 `None`과 구분됩니다.
///
/// # 동일성
///
/// 두 엔티티는 양쪽 모두 식별자가 있고 그 값이 같을 때만 같습니다.
/// 필드 값이 모두 같아도 식별자가 없으면 서로 다르며, 자기 자신과도 같지 않습니다.
/// 그래서 `Eq`/`Hash`는 구현하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 이름 (선택)
    #[serde(default)]
    pub name: Option<String>,
    pub age: i32,
    pub gender: String,
    /// 이메일 (형식 검증 없음)
    pub email: String,
    pub country: String,
}

impl User {
    /// 식별자만 가진 최소 엔티티를 만듭니다. 나머지 필드는 기본값입니다.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// 저장된 적이 없는(식별자가 할당되지 않은) 엔티티인지 확인
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
