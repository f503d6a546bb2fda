use std::env;
use std::fs;

use anyhow::Context;
use vbadeck::{convert_deck_to_vba, normalizer, StyleConfig};

/// Converts a deck JSON file (the wire format the AI produces) into a VBA
/// macro script, without touching the network.
///
/// Usage: cargo run --example convert_deck -- deck.json [out.vba]
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let input_path = args
        .get(1)
        .context("usage: cargo run --example convert_deck -- <deck.json> [out.vba]")?;
    let output_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("presentation_macro.vba");

    log::info!("loading deck from {input_path}");
    let json_string = fs::read_to_string(input_path)
        .with_context(|| format!("unable to read {input_path}"))?;
    let document: serde_json::Value = serde_json::from_str(&json_string)?;

    let slides = normalizer::normalize_document(&document);
    log::info!("normalized {} slides", slides.len());

    let script = convert_deck_to_vba(&slides, &StyleConfig::default())?;
    fs::write(output_path, &script).with_context(|| format!("unable to write {output_path}"))?;
    log::info!("macro script saved to {output_path}");
    Ok(())
}
