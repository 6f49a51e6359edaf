//! Users API handlers.
//!
//! ```text
//! POST /users/ {"username":"manu","email":"manu@example.com"}
//! GET /users/42
//! ```
//!
//! The write path deserializes into [`CreateUserRequest`] (malformed bodies
//! are rejected with 400 before any persistence work) and issues a single
//! insert through the repository port. The read path is a pure echo of the
//! path segment and performs no lookup.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

const fn default_is_active() -> bool {
    true
}

/// Creation payload for `POST /users/`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Active flag; true unless the caller says otherwise.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self::new(request.username, request.email).with_active(request.is_active)
    }
}

/// Echo of the accepted payload.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserEcho {
    /// Accepted login name.
    pub username: String,
    /// Accepted contact address.
    pub email: String,
    /// Accepted active flag.
    pub is_active: bool,
}

impl From<&User> for UserEcho {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
        }
    }
}

/// Response body for a successful creation.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    /// Outcome message.
    pub message: String,
    /// Echo of the accepted payload.
    pub user_data: UserEcho,
    /// Database-generated identifier.
    pub id: i32,
    /// Accepted fields repeated at the top level.
    #[serde(flatten)]
    pub fields: UserEcho,
}

impl CreateUserResponse {
    fn for_created(user: &User) -> Self {
        Self {
            message: "user created sucessfully".to_owned(),
            user_data: UserEcho::from(user),
            id: user.id,
            fields: UserEcho::from(user),
        }
    }
}

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Duplicate { message } => Error::conflict(message),
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Malformed payload"),
        (status = 409, description = "Username or email already taken", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<CreateUserResponse>> {
    let new_user = NewUser::from(payload.into_inner());
    let created = state
        .users
        .create(&new_user)
        .await
        .map_err(map_user_persistence_error)?;

    Ok(web::Json(CreateUserResponse::for_created(&created)))
}

/// Path echo body for `GET /users/{user_id}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserIdEcho {
    /// Raw path segment, echoed without lookup or numeric validation.
    pub user_id: String,
}

/// Echo the path segment; performs no lookup.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = String, Path, description = "Opaque path value")),
    responses((status = 200, description = "Path echo", body = UserIdEcho)),
    tags = ["users"],
    operation_id = "readUser"
)]
#[get("/users/{user_id}")]
pub async fn read_user(user_id: web::Path<String>) -> web::Json<UserIdEcho> {
    web::Json(UserIdEcho {
        user_id: user_id.into_inner(),
    })
}
