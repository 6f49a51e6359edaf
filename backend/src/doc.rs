//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint and the schemas their bodies
//! reference. Debug builds serve the document through Swagger UI; see `main`.

use utoipa::OpenApi;

/// OpenAPI document covering greetings, search, users, and health probes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster backend API",
        description = "Greeting echoes and a single-table user registry."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::greetings::home,
        crate::inbound::http::greetings::hello,
        crate::inbound::http::search::search,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::read_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::error::ApiError,
        crate::inbound::http::users::CreateUserRequest,
        crate::inbound::http::users::CreateUserResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/",
            "/hello/{name}",
            "/search/",
            "/users/",
            "/users/{user_id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
