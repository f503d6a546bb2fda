use std::env;
use std::fs;

use anyhow::Context;
use dotenvy::dotenv;
use vbadeck::{convert_deck_to_vba, generate_deck_outline, StyleConfig};

/// Full pipeline: free-form text in, VBA macro script out. Reads the source
/// text from a file and the API key from GOOGLE_API_KEY (a .env file works).
///
/// Usage: cargo run --example generate_deck -- input.txt [out.vba]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let input_path = args
        .get(1)
        .context("usage: cargo run --example generate_deck -- <input.txt> [out.vba]")?;
    let output_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("presentation_macro.vba");

    let api_key = env::var("GOOGLE_API_KEY")
        .context("GOOGLE_API_KEY must be set in the environment or a .env file")?;
    let text_input = fs::read_to_string(input_path)
        .with_context(|| format!("unable to read {input_path}"))?;

    let http_client = reqwest::Client::new();
    log::info!("requesting deck outline for {} bytes of text", text_input.len());
    let slides = generate_deck_outline(&text_input, &api_key, &http_client).await?;
    log::info!("model produced {} slides", slides.len());

    for (i, slide) in slides.iter().enumerate() {
        log::info!("  slide {}: {} ({})", i + 1, slide.title, slide.kind().as_key());
    }

    let script = convert_deck_to_vba(&slides, &StyleConfig::default())?;
    fs::write(output_path, &script).with_context(|| format!("unable to write {output_path}"))?;
    log::info!("macro script saved to {output_path}");
    Ok(())
}
