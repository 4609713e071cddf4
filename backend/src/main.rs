use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request};
use axum::http::header::HeaderName;
use axum::response::Response;
use axum::{middleware, Router};
use once_cell::sync::Lazy;
use shared::ClientConfig;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info};

use crate::config::{Config, StorageBackend};
use crate::services::analytics_store::{AnalyticsStore, MemoryAnalyticsStore, PgAnalyticsStore};

mod config;
mod error;
mod handlers;
mod logging;
mod models;
mod services;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AnalyticsStore>,
    client: Arc<ClientConfig>,
}

// Track which IP addresses have been logged with timestamps
static LOGGED_IPS: Lazy<Mutex<HashMap<String, u64>>> = Lazy::new(|| {
    Mutex::new(HashMap::new())
});

// Time before we log the same IP again (in seconds)
const IP_LOG_EXPIRY: u64 = 3600;

// Forwarded headers are client controlled, so the table needs a hard ceiling
const MAX_TRACKED_IPS: usize = 10_000;

fn client_ip(request: &Request<Body>) -> String {
    let headers = request.headers();
    if let Some(ip) = headers.get("cf-connecting-ip").and_then(|v| v.to_str().ok()) {
        return ip.trim().to_string();
    }
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            return first.trim().to_string();
        }
    }
    if let Some(ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        return ip.trim().to_string();
    }
    "unknown".to_string()
}

/// Returns true when `ip` has not been seen within the last hour. Expired
/// entries are pruned on every new visitor, and once the table is full new
/// addresses are neither tracked nor logged.
fn record_visit(logged_ips: &mut HashMap<String, u64>, ip: &str, now: u64) -> bool {
    let fresh = logged_ips
        .get(ip)
        .is_some_and(|&last| now.saturating_sub(last) < IP_LOG_EXPIRY);
    if fresh {
        return false;
    }

    logged_ips.retain(|_, last| now.saturating_sub(*last) < IP_LOG_EXPIRY);
    if logged_ips.len() >= MAX_TRACKED_IPS {
        return false;
    }
    logged_ips.insert(ip.to_string(), now);
    true
}

async fn log_visit_middleware(request: Request<Body>, next: middleware::Next) -> Response {
    let ip = client_ip(&request);
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs();

    let should_log = match LOGGED_IPS.lock() {
        Ok(mut logged_ips) => record_visit(&mut logged_ips, &ip, now),
        Err(_) => false,
    };

    if should_log {
        info!("👋 Visitor {} on {} ({})", ip, path, user_agent);
    }

    next.run(request).await
}

async fn build_store(config: &Config) -> Result<Arc<dyn AnalyticsStore>, Box<dyn std::error::Error>> {
    match (config.storage, config.database_url.as_deref()) {
        (StorageBackend::Postgres, Some(url)) => {
            let pool = PgPool::connect(url).await?;
            sqlx::migrate!().run(&pool).await?;
            info!("Analytics stored in Postgres");
            Ok(Arc::new(PgAnalyticsStore::new(pool)))
        }
        _ => {
            info!("Analytics stored in memory; events are lost on restart");
            Ok(Arc::new(MemoryAnalyticsStore::default()))
        }
    }
}

fn build_app(state: AppState, static_path: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(vec![
            HeaderValue::from_static("http://127.0.0.1:8080"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://localhost:8080"),
        ])
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-requested-with"),
        ]);

    // The SPA owns every unknown path
    let static_service = ServeDir::new(static_path)
        .not_found_service(ServeFile::new(static_path.join("index.html")));

    Router::new()
        .merge(handlers::create_router())
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(cors)
        .layer(middleware::from_fn(log_visit_middleware))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = Config::from_env();
    info!(
        "Demo script {} with stake {} and {} starting balance",
        config.client.script, config.client.game.stake, config.client.game.initial_balance
    );

    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to set up {} analytics store: {}", config.storage, e);
            return Err(e);
        }
    };

    let state = AppState {
        store,
        client: Arc::new(config.client.clone()),
    };

    if !config.static_dir.exists() {
        info!("Static directory {} not found, only the API is served", config.static_dir.display());
    }
    let app = build_app(state, &config.static_dir);

    info!("listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
