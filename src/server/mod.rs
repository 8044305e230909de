pub mod error;
pub mod routes;

use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;

use crate::{
    config::Config,
    error::{GenerationError, Result},
    generator::ContentGenerator,
    provider::GenerativeModel,
};

pub use routes::configure_routes;

pub struct AppState {
    pub generator: ContentGenerator,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            generator: ContentGenerator::new(model),
        }
    }
}

/// Registers the routes together with the body-size limit.
pub fn configure(
    state: web::Data<AppState>,
    max_body_bytes: usize,
) -> impl Fn(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .configure(configure_routes);
    }
}

pub async fn run(config: Config, model: Arc<dyn GenerativeModel>) -> Result<()> {
    let state = web::Data::new(AppState::new(model));
    let max_body_bytes = config.max_body_bytes();
    let bind = (config.host().to_string(), config.port());

    log::info!(
        "🔄 Serving /api/generate with model {}",
        state.generator.model_name()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::new("%r %s %Dms"))
            .configure(configure(state.clone(), max_body_bytes))
    })
    .bind(bind)
    .map_err(|e| GenerationError::Config(format!("Failed to bind server: {}", e)))?
    .run()
    .await?;

    Ok(())
}
