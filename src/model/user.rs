use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: String,
    pub is_guest: bool,
}

/// Sign-in request carrying the user id asserted by the upstream identity
/// provider; Jolt never verifies credentials itself.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub user_id: String,
}
