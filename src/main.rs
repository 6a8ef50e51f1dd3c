//! Career Compass Backend - Main Entry Point
//!
//! Starts the web API server for the Career Compass frontend.

use career_compass::{api::run_server, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Career Compass - Mock Career Guidance API    ║");
    println!("║   Quiz → Recommend → Simulate                  ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = ServerConfig::from_env();
    run_server(config).await
}
