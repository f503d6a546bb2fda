use log::{debug, warn};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::{DeckApiError, Result};
use crate::models::slide::SlideRecord;
use crate::normalizer::normalize_document;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Instruction sent ahead of the user text. The model must answer with a
/// bare JSON array of slide objects in the wire format the normalizer
/// accepts; anything else is handled by the fence stripping and the
/// normalizer's fallbacks.
const SYSTEM_PROMPT: &str = r#"You are a presentation designer. Convert the input text into a JSON array of slide objects. Respond with JSON only, no prose.

Every slide object has "type", "title", and optionally "subhead" and "notes". The remaining fields depend on "type":

- "title": {"date": "YYYY-MM-DD"}
- "section": {"sectionNo": "1"}
- "content": {"points": ["..."]}
- "process": {"steps": ["..."]} (max 4 steps)
- "timeline": {"milestones": [{"date": "...", "label": "..."}]}
- "cycle": {"items": [{"label": "...", "subLabel": "..."}]} (max 4 items)
- "cards": {"items": [{"title": "...", "desc": "..."}]}
- "pyramid": {"levels": [{"title": "...", "description": "..."}]} (max 4 levels)
- "compare": {"leftTitle": "...", "rightTitle": "...", "leftItems": ["..."], "rightItems": ["..."]}
- "diagram": {"shapes": [{"shapeType": "rect|oval|rounded_rect", "label": "...", "x": 0, "y": 0, "w": 100, "h": 50}]}
- "flowChart": {"flows": [{"steps": ["..."]}]}
- "stepUp": {"steps": ["..."]}
- "imageText": {"imageDesc": "...", "text": "..."}
- "table": {"headers": ["..."], "rows": [["..."]]}
- "progress": {"items": [{"label": "...", "percent": 70}]}
- "quote": {"quote": "...", "author": "..."}
- "kpi": {"kpis": [{"label": "...", "value": "...", "change": "..."}]} (3 per row)
- "bulletCards": {"cards": [{"title": "...", "points": ["..."]}]} (max 2 cards)
- "faq": {"items": [{"q": "...", "a": "..."}]}
- "statsCompare": {"leftTitle": "...", "rightTitle": "...", "stats": [{"label": "...", "leftValue": "...", "rightValue": "..."}]}
- "barCompare": {"items": [{"label": "...", "valueA": 60, "valueB": 40}]} (values out of 100)

Start with one "title" slide and cover the whole input. Pick the type that fits each piece of content best; use "content" when unsure."#;

/// Standard Google API error envelope.
#[derive(Deserialize, Debug)]
struct GoogleApiErrorResponse {
    error: GoogleApiErrorDetail,
}

#[allow(unused)]
#[derive(Deserialize, Debug)]
struct GoogleApiErrorDetail {
    code: i32,
    message: String,
    status: String,
}

/// Asks Gemini to turn free-form text into a deck and returns it as
/// normalized slide records.
///
/// # Arguments
///
/// * `text_input` - The source text to structure into slides.
/// * `api_key` - A Generative Language API key.
/// * `http_client` - An asynchronous `reqwest::Client` instance.
///
/// # Errors
///
/// Returns `DeckApiError::InvalidInput` for empty input, `ApiError` for
/// non-success responses, `EmptyResponse` when the candidate payload is
/// missing, and `JsonDeserialization` when the model's output is not JSON.
pub async fn generate_deck_outline(
    text_input: &str,
    api_key: &str,
    http_client: &reqwest::Client,
) -> Result<Vec<SlideRecord>> {
    if text_input.trim().is_empty() {
        return Err(DeckApiError::InvalidInput(
            "Input text cannot be empty".to_string(),
        ));
    }

    let body = json!({
        "contents": [{
            "parts": [
                { "text": SYSTEM_PROMPT },
                { "text": format!("Input Text:\n{text_input}") }
            ]
        }],
        "generationConfig": { "responseMimeType": "application/json" }
    });

    let api_url = format!("{GEMINI_ENDPOINT}?key={api_key}");
    let response = http_client
        .post(&api_url)
        .header(ACCEPT, "application/json")
        .json(&body)
        .send()
        .await
        .map_err(DeckApiError::Network)?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<GoogleApiErrorResponse>(&error_text) {
            Ok(envelope) => envelope.error.message,
            Err(_) => {
                warn!("non-JSON error body from generateContent ({status})");
                error_text
            }
        };
        return Err(DeckApiError::ApiError { status, message });
    }

    let envelope: Value = response.json().await.map_err(DeckApiError::Network)?;
    let text = envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DeckApiError::EmptyResponse("response contained no candidate text".to_string())
        })?;

    debug!("model returned {} bytes of deck JSON", text.len());
    let document: Value = serde_json::from_str(strip_code_fences(text))?;
    Ok(normalize_document(&document))
}

/// Strips a Markdown code fence around the payload when the model ignores
/// the JSON-only instruction.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    for fence in ["```json", "```"] {
        if let Some(rest) = trimmed.strip_prefix(fence) {
            if let Some(inner) = rest.split("```").next() {
                return inner.trim();
            }
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(strip_code_fences("[{\"type\": \"title\"}]"), "[{\"type\": \"title\"}]");
    }

    #[test]
    fn json_fence_is_removed() {
        let fenced = "```json\n[1, 2]\n```";
        assert_eq!(strip_code_fences(fenced), "[1, 2]");
    }

    #[test]
    fn anonymous_fence_is_removed() {
        let fenced = "```\n{\"a\": 1}\n```\ntrailing commentary";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }
}
