//! Entity-DTO mappers.

use crate::dto::UserDto;
use strata_core::User;

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_to_dto() {
        let dto = UserDto::from(User::new(1, "Alice"));
        assert_eq!(
            dto,
            UserDto {
                id: 1,
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_zero_user_maps_to_zero_dto() {
        assert_eq!(UserDto::from(User::default()), UserDto::default());
    }

    #[test]
    fn test_dto_json_shape() {
        let json = serde_json::to_value(UserDto::from(User::new(2, "Bob"))).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "name": "Bob" }));
    }
}
