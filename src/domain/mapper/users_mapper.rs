//! Users 엔티티와 [`UsersDto`] 사이의 매퍼

use crate::domain::dto::users::users_dto::{UsersDto, OBJECT_NAME};
use crate::domain::entities::users::User;
use crate::domain::mapper::EntityMapper;
use crate::errors::{AppError, AppResult, FieldError};

/// Users 매퍼
///
/// 상태가 없으므로 서비스마다 값으로 들고 다닙니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsersMapper;

impl UsersMapper {
    /// 식별자만 채운 참조용 엔티티를 만듭니다.
    ///
    /// 전체 조회 없이 "id로 식별되는 레코드"를 표현할 때 씁니다.
    /// `id`가 없으면 `None`을 반환합니다.
    pub fn from_id(&self, id: Option<i64>) -> Option<User> {
        id.map(User::with_id)
    }
}

impl EntityMapper<UsersDto, User> for UsersMapper {
    /// DTO의 모든 필드를 엔티티로 복사합니다. 식별자도 그대로 옮깁니다.
    ///
    /// 필수 필드가 하나라도 비어 있으면 빠진 필드를 모두 담은
    /// `ValidationError`를 반환합니다.
    fn to_entity(&self, dto: UsersDto) -> AppResult<User> {
        let UsersDto {
            id,
            name,
            age,
            gender,
            email,
            country,
        } = dto;

        match (age, gender, email, country) {
            (Some(age), Some(gender), Some(email), Some(country)) => Ok(User {
                id,
                name,
                age,
                gender,
                email,
                country,
            }),
            (age, gender, email, country) => {
                let missing = [
                    ("age", age.is_none()),
                    ("country", country.is_none()),
                    ("email", email.is_none()),
                    ("gender", gender.is_none()),
                ]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(field, _)| FieldError::new(OBJECT_NAME, field, "required"))
                .collect();

                Err(AppError::ValidationError(missing))
            }
        }
    }

    fn to_dto(&self, entity: User) -> UsersDto {
        let User {
            id,
            name,
            age,
            gender,
            email,
            country,
        } = entity;

        UsersDto {
            id,
            name,
            age: Some(age),
            gender: Some(gender),
            email: Some(email),
            country: Some(country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dto(id: Option<i64>) -> UsersDto {
        UsersDto {
            id,
            name: Some("AAAAAAAAAA".to_string()),
            age: Some(1),
            gender: Some("F".to_string()),
            email: Some("a@example.com".to_string()),
            country: Some("KR".to_string()),
        }
    }

    fn assert_same_fields(left: &UsersDto, right: &UsersDto) {
        assert_eq!(left.id, right.id);
        assert_eq!(left.name, right.name);
        assert_eq!(left.age, right.age);
        assert_eq!(left.gender, right.gender);
        assert_eq!(left.email, right.email);
        assert_eq!(left.country, right.country);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mapper = UsersMapper;

        for dto in [full_dto(None), full_dto(Some(7)), UsersDto { name: None, ..full_dto(Some(0)) }] {
            let back = mapper.to_dto(mapper.to_entity(dto.clone()).unwrap());
            assert_same_fields(&back, &dto);
        }
    }

    #[test]
    fn test_to_entity_copies_identifier() {
        let entity = UsersMapper.to_entity(full_dto(Some(42))).unwrap();
        assert_eq!(entity.id, Some(42));
        assert_eq!(entity.age, 1);
        assert_eq!(entity.country, "KR");

        let new_entity = UsersMapper.to_entity(full_dto(None)).unwrap();
        assert!(new_entity.is_new());
    }

    #[test]
    fn test_to_entity_reports_missing_fields() {
        let dto = UsersDto {
            age: None,
            email: None,
            ..full_dto(None)
        };

        match UsersMapper.to_entity(dto) {
            Err(AppError::ValidationError(fields)) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["age", "email"]);
                assert!(fields.iter().all(|f| f.object_name == OBJECT_NAME));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_list_mapping() {
        let mapper = UsersMapper;
        let entities = mapper
            .to_entities(vec![full_dto(Some(1)), full_dto(Some(2))])
            .unwrap();
        assert_eq!(entities.len(), 2);

        let dtos = mapper.to_dtos(entities);
        assert_eq!(dtos[0].id, Some(1));
        assert_eq!(dtos[1].id, Some(2));

        assert!(mapper.to_entities(vec![full_dto(None), UsersDto::default()]).is_err());
    }

    #[test]
    fn test_entity_from_id() {
        let reference = UsersMapper.from_id(Some(42)).unwrap();
        assert_eq!(reference.id, Some(42));
        assert_eq!(reference.name, None);
        assert_eq!(reference.age, 0);
        assert!(reference.email.is_empty());

        assert!(UsersMapper.from_id(None).is_none());
    }
}
