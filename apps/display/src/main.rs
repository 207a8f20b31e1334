mod config;
mod main_lib;
mod render;

use tokio::io::{AsyncBufReadExt, BufReader};

use config::Config;
use main_lib::{build_engine, build_news_service, init_tracing, select_from_input};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env()?;

    let news = build_news_service(&config);
    render::log_headlines(&news.fetch_top_news(config.news_limit).await);
    render::log_ticker(&config.symbols);

    let engine = build_engine(&config)?;
    let renderer = tokio::spawn(render::run_renderer(engine.subscribe_display()));
    tracing::info!("Type BTC, ETH or USDC and press enter to switch assets; Ctrl-C to quit");

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                break;
            }
            line = input.next_line(), if input_open => match line {
                Ok(Some(line)) => select_from_input(&engine, &line).await,
                Ok(None) => input_open = false,
                Err(e) => {
                    tracing::warn!("Stopped reading selections from stdin: {}", e);
                    input_open = false;
                }
            },
        }
    }

    tracing::info!("Shutting down");
    engine.shutdown().await;
    renderer.await?;
    Ok(())
}
