use std::{env, net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use cinema_schedule_api::{app, catalogue::Catalogue};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_schedule_api=info,tower_http=info".into()),
        )
        .init();

    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let app_url = env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let port: u16 = match env::var("PORT") {
        Ok(value) => value.parse().context("PORT is not a valid port number")?,
        Err(_) => 4000,
    };

    // The snapshot is loaded exactly once per process; the resolver only
    // ever sees it as an immutable value.
    let catalogue = Catalogue::load(Path::new(&data_dir))
        .await
        .with_context(|| format!("could not load catalogue from '{data_dir}'"))?;
    tracing::info!(
        movies = catalogue.movies.len(),
        halls = catalogue.halls.len(),
        showtimes = catalogue.showtimes.len(),
        "catalogue snapshot loaded"
    );

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(
            app_url
                .parse::<HeaderValue>()
                .context("APP_URL is not a valid origin")?,
        )
        .allow_headers([header::CONTENT_TYPE]);

    let app = app(Arc::new(catalogue)).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
