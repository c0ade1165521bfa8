use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::env;

use gs_api::app::{build_app_state, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting GeekStore API Server");

    // Load configuration
    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("SERVER_PORT must be a valid port number");

    let bind_address = format!("{}:{}", server_host, server_port);
    info!("Server will bind to: {}", bind_address);

    // Exception mappers and the message catalog are registered once,
    // before the server starts serving traffic.
    let app_state = web::Data::new(build_app_state());

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
