use actix_web::web;

pub mod activities;
pub mod admin;
pub mod applications;
pub mod areas;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod users;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires the admin scope with additional
/// middleware (rate limiting). For tests we register the same paths
/// without those wrappers so that endpoint behavior can be exercised
/// directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_public);

    // Admin routes: /api/admin/**
    cfg.service(web::scope("/api/admin").configure(admin::configure_routes));
}

/// Everything outside the admin scope: health plus the public API.
pub fn configure_public(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.configure(dashboard::configure_routes);
    cfg.configure(orders::configure_routes);
    cfg.configure(products::configure_routes);
    cfg.configure(activities::configure_routes);
    cfg.configure(users::configure_routes);
    cfg.configure(areas::configure_routes);
    cfg.configure(jobs::configure_routes);
    cfg.configure(profiles::configure_routes);
    cfg.configure(applications::configure_routes);
}
