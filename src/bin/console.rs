use std::sync::Arc;

use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyword_chatbot::chat_core::Bot;
use keyword_chatbot::config;

#[tokio::main]
async fn main() -> Result<()> {
    // keep the prompt readable unless RUST_LOG asks for more
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let bot = Bot::spawn(Arc::new(config::engine_from_env()?));

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout.write_all(b"Ask me anything\n> ").await?;
    stdout.flush().await?;
    while let Some(line) = lines.next_line().await? {
        if !line.is_empty() {
            let reply = bot.chat(&line).await?;
            stdout.write_all(format!("{}\n", reply.text()).as_bytes()).await?;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
