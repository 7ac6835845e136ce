use std::sync::Arc;

use anyhow::Result;
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use indoc::formatdoc;
use tracing::{info, warn};

use super::app::app;
use crate::chat_core::Bot;
use crate::config::Settings;

pub async fn start_server(settings: Settings) -> Result<()> {
    let engine = Arc::new(settings.engine()?);
    let view = dioxus_liveview::LiveViewPool::new();

    let glue = dioxus_liveview::interpreter_glue(&format!("ws://{}/ws", settings.reachable_addr));
    let page = formatdoc!(
        r#"
        <!DOCTYPE html>
        <html>
            <head>
                <title>Chatbot</title>
                <meta name="viewport"
                content="width=device-width,
                initial-scale=1,
                minimum-scale=1,
                maximum-scale=1,
                user-scalable=no">
            </head>
            <body> <div id="main"></div> </body>
            {glue}
        </html>
        "#,
        glue = glue
    );

    let app = Router::new()
        .route("/", get(move || async move { Html(page) }))
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    // one session per connection, dropped with the socket
                    let bot = Bot::spawn(engine);
                    if let Err(err) = view
                        .launch_with_props(dioxus_liveview::axum_socket(socket), app, bot)
                        .await
                    {
                        warn!(error = ?err, "liveview session ended with an error");
                    }
                })
            }),
        );

    info!(
        listen = %settings.listen_addr,
        reachable = %settings.reachable_addr,
        "Listening on http://{}", settings.listen_addr
    );

    axum::Server::bind(&settings.listen_addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
