use cueboard::{routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
        .unwrap_or_else(|_| "26214400".into())
        .parse()
        .expect("invalid MAX_UPLOAD_BYTES");

    let media = state::MediaPaths::from_env();
    tokio::fs::create_dir_all(&media.uploads_dir)
        .await
        .expect("failed to create uploads dir");

    let state = state::AppState::new(media);

    let app = routes::app(state, max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cueboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
