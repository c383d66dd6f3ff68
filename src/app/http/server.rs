//! REST backend wiring
//!
//! Opens the farm store before binding the listener (a store that cannot be
//! opened is fatal: the process must not begin serving requests) and injects
//! it into the handlers as shared application data.

use crate::app::http::handlers;
use crate::app::services::query::QueryService;
use crate::app::services::store::FarmStore;
use crate::{Config, Result};
use actix_web::{error, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use tracing::info;

/// Mount the registry routes onto an actix application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health)).service(
        web::scope("/api/farms")
            .route("", web::get().to(handlers::list_farms))
            .route("", web::post().to(handlers::create_farm))
            .route("/{id}", web::get().to(handlers::get_farm))
            .route("/{id}", web::delete().to(handlers::delete_farm))
            .route("/{id}/production", web::get().to(handlers::production_curve)),
    );
}

/// Shape malformed JSON payloads as structured `{"message"}` errors
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(json!({ "message": message })),
    )
    .into()
}

/// Run the REST backend until shutdown
pub async fn run(config: Config) -> Result<()> {
    let store = FarmStore::open(&config.database_path)?;
    let store = web::Data::new(store);
    let query = web::Data::new(QueryService::new());

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(query.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(configure_routes)
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    Ok(())
}
