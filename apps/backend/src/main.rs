use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use backend::config::http::{http_config_from_env, SeedProfile};
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::rate_limit;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let http = match http_config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let seed = match SeedProfile::from_env() {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Comunidad Admin Backend on http://{}:{}",
        http.host, http.port
    );

    // Create application state using unified builder
    let app_state = match build_state().with_seed(seed).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Storage ready");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);
    let limiter_backend = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let admin_limiter = RateLimiter::builder(
            limiter_backend.clone(),
            rate_limit::admin_rate_limit_config().build(),
        )
        .add_headers()
        .build();

        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(
                web::scope("/api/admin")
                    .wrap(admin_limiter)
                    .configure(routes::admin::configure_routes),
            )
            .configure(routes::configure_public)
    })
    .bind((http.host.as_str(), http.port))?
    .run()
    .await
}
