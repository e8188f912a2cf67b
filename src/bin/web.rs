//! Single binary web server: lays out knockout brackets over REST. Stateless; the caller
//! supplies sides and any persisted rounds with every request.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Default match options come from DEFAULT_LEGS, DEFAULT_PLAYER_COUNT, DEFAULT_STARTING_SCORE.

use actix_web::{
    get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use dart_knockout_web::{
    check_unique_sides, import_sides_csv, lay_out_tournament, LayoutContext, LayoutError,
    LayoutRound, MatchOptions, Round, Side,
};
use serde::{Deserialize, Serialize};

/// Server settings read once at startup.
#[derive(Clone, Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    match_options: MatchOptions,
}

impl ServerConfig {
    fn from_env() -> Self {
        let defaults = MatchOptions::default();
        Self {
            host: env_value("HOST").unwrap_or_else(default_host),
            port: env_parsed("PORT").unwrap_or_else(default_port),
            match_options: MatchOptions {
                number_of_legs: env_parsed("DEFAULT_LEGS").unwrap_or(defaults.number_of_legs),
                player_count: env_parsed("DEFAULT_PLAYER_COUNT").unwrap_or(defaults.player_count),
                starting_score: env_parsed("DEFAULT_STARTING_SCORE")
                    .unwrap_or(defaults.starting_score),
            },
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Trimmed, non-empty value of an environment variable.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_value(key).and_then(|value| value.parse().ok())
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutBody {
    sides: Vec<Side>,
    /// First persisted round; later rounds hang off `nextRound`.
    #[serde(default)]
    round: Option<Round>,
    /// Overrides the server's default match options for this request.
    #[serde(default)]
    match_options: Option<MatchOptions>,
    /// Link for identified sides, with `{id}` replaced by the side id (e.g. `/sides/{id}`).
    #[serde(default)]
    link_template: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutResponse {
    generated_at: DateTime<Utc>,
    rounds: Vec<LayoutRound>,
}

fn bad_request(e: LayoutError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "dart-knockout-web",
    })
}

/// Lay out the bracket for the given sides and persisted rounds.
#[post("/api/layout")]
async fn api_layout(config: Data<ServerConfig>, body: Json<LayoutBody>) -> HttpResponse {
    let body = body.into_inner();
    let match_options = body.match_options.unwrap_or(config.match_options);
    if let Err(e) = check_unique_sides(&body.sides).and_then(|()| match_options.validate()) {
        return bad_request(e);
    }
    if match_options.number_of_legs % 2 == 0 {
        log::warn!(
            "Even number of legs ({}); drawn matches will have no winner",
            match_options.number_of_legs
        );
    }

    let template = body.link_template;
    let links = move |side: &Side| -> Option<String> {
        let template = template.as_deref()?;
        let id = side.id?;
        Some(template.replace("{id}", &id.to_string()))
    };
    let context = LayoutContext::with_links(match_options, &links);
    let rounds = lay_out_tournament(&body.sides, body.round.as_ref(), &context);
    log::info!(
        "Laid out {} side(s) into {} round(s) ({} persisted)",
        body.sides.len(),
        rounds.len(),
        body.round.as_ref().map_or(0, Round::depth)
    );

    HttpResponse::Ok().json(LayoutResponse {
        generated_at: Utc::now(),
        rounds,
    })
}

/// Read sides from a CSV body (header: name[,id][,noShow][,teamId]).
#[post("/api/sides/import")]
async fn api_import_sides(body: String) -> HttpResponse {
    match import_sides_csv(body.as_bytes()) {
        Ok(sides) => {
            log::info!("Imported {} side(s)", sides.len());
            HttpResponse::Ok().json(sides)
        }
        Err(e) => bad_request(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} (default legs: {})",
        bind.0,
        bind.1,
        config.match_options.number_of_legs
    );

    let config = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .service(api_health)
            .service(api_layout)
            .service(api_import_sides)
    })
    .bind(bind)?
    .run()
    .await
}
