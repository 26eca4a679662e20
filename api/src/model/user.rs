use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub email: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest { name, email } = value;
        CreateUser { name, email }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name_and_email() {
        let blank_name = CreateUserRequest {
            name: "".into(),
            email: "alice@example.com".into(),
        };
        assert!(blank_name.validate(&()).is_err());

        let blank_email = CreateUserRequest {
            name: "Alice".into(),
            email: "".into(),
        };
        assert!(blank_email.validate(&()).is_err());
    }
}
