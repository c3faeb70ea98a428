mod classifier;
mod config;
mod errors;
mod handlers;
mod models;
mod scoring;

use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use classifier::Classifier;
use config::{Args, UploadSettings};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Permissive CORS headers, added to every response.
fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let upload = web::Data::new(UploadSettings::from(&args));
    let classifier = web::Data::new(Classifier::new(args.classifier_url, args.hf_api_key));
    tracing::info!(endpoint = classifier.endpoint(), "using classification model");
    tracing::info!("Server running at http://{}:{}", args.host, args.port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(Logger::default())
            .app_data(classifier.clone())
            .app_data(upload.clone())
            .configure(handlers::configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;

    Ok(())
}
