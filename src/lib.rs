use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod db;
mod handlers;
pub mod models;
mod routes;
pub mod telemetry;

use crate::db::MatchStore;
use crate::routes::init_routes;

pub fn run(listener: TcpListener, store: MatchStore) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let store_data = web::Data::new(store);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);

        // A body that fails JSON extraction is answered before any handler runs
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({"error": "Invalid data"})),
            )
            .into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(store_data.clone())
            .app_data(json_config)
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
