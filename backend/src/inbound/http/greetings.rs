//! Greeting handlers: stateless echoes with no persistence.
//!
//! ```text
//! GET /             {"message":"Hello this is the start"}
//! GET /hello/alice  {"hi":"hello alice"}
//! ```

use actix_web::{get, web};
use serde::Serialize;

/// Root greeting body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Greeting {
    /// Fixed welcome message.
    pub message: String,
}

/// Landing route.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = Greeting)),
    tags = ["greetings"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> web::Json<Greeting> {
    web::Json(Greeting {
        message: "Hello this is the start".to_owned(),
    })
}

/// Personalised hello body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Hello {
    /// Greeting addressed to the requested name.
    pub hi: String,
}

/// Greet the name given in the path.
#[utoipa::path(
    get,
    path = "/hello/{name}",
    params(("name" = String, Path, description = "Name to greet")),
    responses((status = 200, description = "Personalised greeting", body = Hello)),
    tags = ["greetings"],
    operation_id = "hello"
)]
#[get("/hello/{name}")]
pub async fn hello(name: web::Path<String>) -> web::Json<Hello> {
    let name = name.into_inner();
    web::Json(Hello {
        hi: format!("hello {name}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn home_returns_the_fixed_greeting() {
        let app = actix_test::init_service(App::new().service(home)).await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert!(response.status().is_success());
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value, json!({ "message": "Hello this is the start" }));
    }

    #[actix_web::test]
    async fn hello_echoes_the_path_name() {
        let app = actix_test::init_service(App::new().service(hello)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/hello/alice").to_request(),
        )
        .await;

        assert!(response.status().is_success());
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value, json!({ "hi": "hello alice" }));
    }
}
