use std::net::SocketAddr;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod cache;
mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::competitions::handlers::delete_competition,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::routines::handlers::list_for_competition,
        features::routines::handlers::get_routine,
        features::routines::handlers::list_scores,
        features::routines::handlers::create_routine,
        features::routines::handlers::update_routine,
        features::routines::handlers::delete_routine,
        features::leaderboard::handlers::get_leaderboard,
        features::exports::handlers::export_results,
    ),
    components(
        schemas(
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::UpdateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::routine::CreateRoutineRequest,
            storage::dto::routine::UpdateRoutineRequest,
            storage::dto::routine::RoutineResponse,
            storage::dto::routine::RoutineWithRelations,
            storage::dto::routine::RoutineAthlete,
            storage::dto::routine::RoutineEvent,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::leaderboard::GenderDivision,
            storage::dto::leaderboard::LevelGroup,
            storage::dto::leaderboard::AgeGroupStandings,
            storage::dto::leaderboard::AthleteStanding,
            storage::models::Competition,
            storage::models::Athlete,
            storage::models::Event,
            storage::models::Routine,
            storage::models::Score,
        )
    ),
    tags(
        (name = "competitions", description = "Competition endpoints"),
        (name = "athletes", description = "Athlete endpoints"),
        (name = "events", description = "Event endpoints"),
        (name = "routines", description = "Routine scoring endpoints"),
        (name = "leaderboard", description = "Computed leaderboard endpoints"),
        (name = "exports", description = "CSV export endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting scoring console API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .nest(
            "/api/competitions",
            features::competitions::routes::routes(api_keys.clone())
                .merge(features::routines::routes::competition_routes())
                .merge(features::leaderboard::routes::routes())
                .merge(features::exports::routes::routes()),
        )
        .nest(
            "/api/athletes",
            features::athletes::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/events",
            features::events::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/routines",
            features::routines::routes::routes(api_keys.clone()),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = bind_address.parse().context("Invalid bind address")?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
