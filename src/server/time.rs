//! Standalone clock demo server.
//!
//! Serves the local wall-clock time behind a one-second meta refresh. Kept
//! as a minimal axum example with no dependency on the character index.

use std::net::SocketAddr;

use axum::{Router, response::Html, routing::get};

/// U+23F3 HOURGLASS WITH FLOWING SAND
const HOURGLASS: char = '\u{23F3}';

const PAGE: &str = "\
<html>
    <head>
        <meta http-equiv=\"refresh\" content=\"1\">
    </head>
    <body>
        <h1>{text}</h1>
    </body>
</html>
";

/// Serve the clock page on `port`.
pub async fn run(port: u16) -> anyhow::Result<()> {
    let app = Router::new().route("/", get(get_time));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving on: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn get_time() -> Html<String> {
    let now = chrono::Local::now().format("%H:%M:%S");
    Html(PAGE.replace("{text}", &format!("{} {}", HOURGLASS, now)))
}
