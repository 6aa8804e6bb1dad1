use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body; `username` is the email.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl JwtResponse {
    pub fn bearer(
        token: String,
        id: i64,
        username: String,
        first_name: String,
        last_name: String,
        admin: bool,
    ) -> Self {
        Self {
            token,
            token_type: "Bearer".into(),
            id,
            username,
            first_name,
            last_name,
            admin,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jwt_response_serializes_bearer_type_and_admin_flag() {
        let response = JwtResponse::bearer(
            "jwt-token".into(),
            1,
            "admin@mail.com".into(),
            "Fatou".into(),
            "Drame".into(),
            true,
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Bearer");
        assert_eq!(json["token"], "jwt-token");
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "admin@mail.com");
        assert_eq!(json["firstName"], "Fatou");
        assert_eq!(json["lastName"], "Drame");
        assert_eq!(json["admin"], true);
    }

    #[test]
    fn signup_request_tolerates_missing_fields() {
        // Missing fields surface as blanks so validation can reject with 400
        let req: SignupRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }
}
