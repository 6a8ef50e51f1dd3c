//! Web API Module
//!
//! Exposes the Career Compass endpoints for the React frontend.
//! Protected endpoints take an `AuthenticatedUser`, which resolves the
//! bearer token against the user table before the handler runs.

use crate::compass::{
    auth::{self, UserStore, TOKEN_TYPE},
    catalog,
    mock_data::{MockDataStore, TrendInsight},
    quiz::classify_personality,
    types::{
        CareerRecommendation, CareerTrendItem, PersonalityProfile, QuizSubmission,
        SimulationScenario, TimelineResponse, User,
    },
};
use crate::config::ServerConfig;
use crate::error::ApiError;
use actix_cors::Cors;
use actix_web::{
    dev::Payload, http::header, middleware::Logger, web, App, FromRequest, HttpRequest,
    HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::future::{ready, Ready};
use std::sync::Arc;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared, read-only application state
pub struct AppState {
    pub users: UserStore,
    pub mock_data: MockDataStore,
}

impl AppState {
    pub fn new(mock_data: MockDataStore) -> Self {
        Self {
            users: UserStore::seeded(),
            mock_data,
        }
    }
}

// ============================================================
// AUTHENTICATION
// ============================================================

/// The caller identified by the `Authorization: Bearer <username>` header
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate_request(req))
    }
}

fn authenticate_request(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let Some(state) = req.app_data::<web::Data<Arc<AppState>>>() else {
        log::error!("AppState missing from app data; rejecting {}", req.path());
        return Err(ApiError::unauthorized(auth::NOT_AUTHENTICATED));
    };

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let token = auth::parse_bearer(header_value)?;

    state.users.user_for_token(token).map(AuthenticatedUser)
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

/// OAuth2 password-grant form; the other grant fields are accepted and ignored
#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuizResponse {
    pub message: String,
    pub profile: PersonalityProfile,
    pub user: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<CareerRecommendation>,
    pub user: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SimulationResponse {
    pub scenario: SimulationScenario,
    pub user: String,
}

#[derive(Deserialize)]
pub struct TrendQuery {
    pub career: String,
    pub metric: String,
}

#[derive(Deserialize)]
pub struct SimulateQuery {
    pub person_id: String,
    /// Accepted for forward compatibility; not used yet
    pub scenario_params: Option<String>,
}

// ============================================================
// API HANDLERS
// ============================================================

/// Welcome message
async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the Career Trends API" }))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "Career Compass API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Exchange username/password for a bearer token (the username)
async fn login_for_access_token(
    data: web::Data<Arc<AppState>>,
    form: web::Form<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = data.users.authenticate(&form.username, &form.password)?;
    log::info!("Issued token for {}", user.username);

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token: user.username.clone(),
        token_type: TOKEN_TYPE.to_string(),
    }))
}

/// Classify a quiz submission
async fn submit_quiz(
    user: AuthenticatedUser,
    submission: web::Json<QuizSubmission>,
) -> impl Responder {
    let profile = classify_personality(&submission);

    HttpResponse::Ok().json(QuizResponse {
        message: "Quiz submitted successfully".to_string(),
        profile,
        user: user.username().to_string(),
    })
}

/// Static recommendations; a profile body is accepted but not consulted
async fn recommend_careers(
    user: AuthenticatedUser,
    profile: Option<web::Json<PersonalityProfile>>,
) -> impl Responder {
    if let Some(profile) = profile {
        log::debug!("Ignoring {} profile for {}", profile.mbti, user.username());
    }

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations: catalog::career_recommendations(),
        user: user.username().to_string(),
    })
}

async fn career_trends(_user: AuthenticatedUser) -> web::Json<Vec<CareerTrendItem>> {
    web::Json(catalog::career_trends())
}

async fn generate_simulation(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(SimulationResponse {
        scenario: catalog::simulation_scenario(),
        user: user.username().to_string(),
    })
}

/// Metric trend data for a career from the mock store
async fn metric_trends(
    data: web::Data<Arc<AppState>>,
    query: web::Query<TrendQuery>,
) -> Result<web::Json<TrendInsight>, ApiError> {
    data.mock_data
        .trend(&query.career, &query.metric)
        .map(web::Json)
}

/// Persona timeline built from event templates
async fn simulate_career(
    data: web::Data<Arc<AppState>>,
    query: web::Query<SimulateQuery>,
) -> Result<web::Json<TimelineResponse>, ApiError> {
    if let Some(params) = &query.scenario_params {
        log::debug!("scenario_params ignored for {}: {}", query.person_id, params);
    }

    data.mock_data.timeline(&query.person_id).map(web::Json)
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register every route; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(read_root))
        .route("/health", web::get().to(health_check))
        .route("/token", web::post().to(login_for_access_token))
        .route("/quiz/submit", web::post().to(submit_quiz))
        .route("/careers/recommend", web::get().to(recommend_careers))
        .route("/careers/trends", web::get().to(career_trends))
        .route("/simulation/generate", web::post().to(generate_simulation))
        .route("/api/trends", web::get().to(metric_trends))
        .route("/simulate", web::get().to(simulate_career));
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Load mock data, then configure and run the API server
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let mock_data = MockDataStore::load(&config.mock_data_path).await?;
    let state = Arc::new(AppState::new(mock_data));

    log::info!(
        "Career Compass API starting at http://{}:{} ({} users, {} mock records)",
        config.host,
        config.port,
        state.users.user_count(),
        state.mock_data.len()
    );
    println!("📚 API Endpoints:");
    println!("   POST /token                - Log in (token = username)");
    println!("   GET  /                     - Welcome message");
    println!("   GET  /health               - Health check");
    println!("   POST /quiz/submit          - Classify personality quiz   [auth]");
    println!("   GET  /careers/recommend    - Career recommendations      [auth]");
    println!("   GET  /careers/trends       - Career trend listing        [auth]");
    println!("   POST /simulation/generate  - Workplace scenario          [auth]");
    println!("   GET  /api/trends           - Metric trends for a career");
    println!("   GET  /simulate             - Persona career timeline");

    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
