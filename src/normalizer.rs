//! Turns the loosely-typed JSON document produced by the model (or by form
//! round trips) into the canonical [`SlideRecord`] sequence.
//!
//! Dispatch is kind-first: the `type` key selects the payload shape, and only
//! the fields that kind defines are read. The generic content fallback is the
//! one place where field shape is inspected, to recover from upstream
//! inconsistency. Missing fields are never errors; every accessor defaults to
//! an empty string, an empty list, or zero.

use serde_json::Value;

use crate::models::slide::{
    BarItem, BulletCard, CardItem, CycleItem, DiagramShape, DiagramShapeKind, FaqItem, KpiItem,
    Milestone, ProgressItem, PyramidLevel, SlideBody, SlideKind, SlideRecord, StatRow,
};

/// Normalizes a whole document. Anything that is not a JSON array yields an
/// empty deck.
pub fn normalize_document(value: &Value) -> Vec<SlideRecord> {
    match value.as_array() {
        Some(slides) => slides
            .iter()
            .enumerate()
            .map(|(index, slide)| normalize_slide(slide, index))
            .collect(),
        None => {
            log::warn!("slide document is not a JSON array; treating as empty deck");
            Vec::new()
        }
    }
}

/// Normalizes one slide object. `index` is the zero-based slide position,
/// used as the default section number.
pub fn normalize_slide(slide: &Value, index: usize) -> SlideRecord {
    let kind = SlideKind::from_key(&str_field(slide, "type"));
    SlideRecord {
        title: str_field(slide, "title"),
        subhead: opt_str_field(slide, "subhead"),
        notes: opt_str_field(slide, "notes"),
        body: normalize_body(kind, slide, index),
    }
}

fn normalize_body(kind: SlideKind, slide: &Value, index: usize) -> SlideBody {
    match kind {
        SlideKind::Title => SlideBody::Title {
            date: str_field(slide, "date"),
        },
        SlideKind::Section => SlideBody::Section {
            section_no: opt_str_field(slide, "sectionNo").or(Some(index.to_string())),
        },
        SlideKind::Process => SlideBody::Process {
            steps: string_list(slide, "steps"),
        },
        SlideKind::Timeline => SlideBody::Timeline {
            milestones: object_list(slide, "milestones", |m| Milestone {
                date: str_field(m, "date"),
                label: str_field(m, "label"),
            }),
        },
        SlideKind::Cycle => SlideBody::Cycle {
            items: object_list(slide, "items", |item| CycleItem {
                label: str_field(item, "label"),
                sub_label: opt_str_field(item, "subLabel"),
            }),
        },
        SlideKind::Cards => SlideBody::Cards {
            items: list_field(slide, "items")
                .iter()
                .map(|item| match item {
                    // Some model outputs flatten cards to bare strings.
                    Value::String(s) => CardItem {
                        title: s.clone(),
                        desc: String::new(),
                    },
                    other => CardItem {
                        title: str_field(other, "title"),
                        desc: str_field(other, "desc"),
                    },
                })
                .collect(),
        },
        SlideKind::Pyramid => SlideBody::Pyramid {
            levels: object_list(slide, "levels", |level| PyramidLevel {
                title: str_field(level, "title"),
                description: str_field(level, "description"),
            }),
        },
        SlideKind::Compare => SlideBody::Compare {
            left_title: str_field_or(slide, "leftTitle", "Option A"),
            right_title: str_field_or(slide, "rightTitle", "Option B"),
            left_items: string_list(slide, "leftItems"),
            right_items: string_list(slide, "rightItems"),
        },
        SlideKind::Diagram => SlideBody::Diagram {
            shapes: object_list(slide, "shapes", |shape| DiagramShape {
                shape_type: diagram_kind(&str_field(shape, "shapeType")),
                label: str_field(shape, "label"),
                x: num_field_or(shape, "x", 100.0),
                y: num_field_or(shape, "y", 100.0),
                w: num_field_or(shape, "w", 100.0),
                h: num_field_or(shape, "h", 50.0),
            }),
        },
        SlideKind::FlowChart => {
            // The wire format nests steps one level down under `flows`; only
            // the first flow is rendered.
            let steps = list_field(slide, "flows")
                .first()
                .map(|flow| string_list(flow, "steps"))
                .unwrap_or_else(|| string_list(slide, "steps"));
            SlideBody::FlowChart { steps }
        }
        SlideKind::StepUp => SlideBody::StepUp {
            steps: list_field(slide, "steps")
                .iter()
                .map(|step| match step {
                    Value::String(s) => s.clone(),
                    other => str_field(other, "label"),
                })
                .collect(),
        },
        SlideKind::ImageText => SlideBody::ImageText {
            image_desc: str_field(slide, "imageDesc"),
            text: str_field(slide, "text"),
        },
        SlideKind::Table => SlideBody::Table {
            headers: string_list(slide, "headers"),
            rows: list_field(slide, "rows")
                .iter()
                .map(|row| match row.as_array() {
                    Some(cells) => cells.iter().map(value_to_string).collect(),
                    None => vec![value_to_string(row)],
                })
                .collect(),
        },
        SlideKind::Progress => SlideBody::Progress {
            items: object_list(slide, "items", |item| ProgressItem {
                label: str_field(item, "label"),
                percent: percent_field(item, "percent"),
            }),
        },
        SlideKind::Quote => SlideBody::Quote {
            quote: str_field(slide, "quote"),
            author: str_field(slide, "author"),
        },
        SlideKind::Kpi => SlideBody::Kpi {
            items: object_list(slide, kpi_list_key(slide), |kpi| KpiItem {
                label: str_field(kpi, "label"),
                value: str_field(kpi, "value"),
                change: str_field(kpi, "change"),
            }),
        },
        SlideKind::BulletCards => SlideBody::BulletCards {
            cards: object_list(slide, "cards", |card| BulletCard {
                title: str_field(card, "title"),
                points: string_list(card, "points"),
            }),
        },
        SlideKind::Faq => SlideBody::Faq {
            items: object_list(slide, "items", |item| FaqItem {
                question: str_field(item, "q"),
                answer: str_field(item, "a"),
            }),
        },
        SlideKind::StatsCompare => SlideBody::StatsCompare {
            left_title: str_field(slide, "leftTitle"),
            right_title: str_field(slide, "rightTitle"),
            stats: object_list(slide, "stats", |stat| StatRow {
                label: str_field(stat, "label"),
                left_value: str_field(stat, "leftValue"),
                right_value: str_field(stat, "rightValue"),
            }),
        },
        SlideKind::BarCompare => SlideBody::BarCompare {
            items: object_list(slide, "items", |item| BarItem {
                label: str_field(item, "label"),
                value_a: num_field_or(item, "valueA", 0.0),
                value_b: num_field_or(item, "valueB", 0.0),
            }),
        },
        SlideKind::Content => SlideBody::Content {
            points: content_points(slide),
        },
    }
}

/// Field-shape fallback for unrecognized or plain content slides: render
/// whatever generic list field is present as bullet lines.
fn content_points(slide: &Value) -> Vec<String> {
    let points = string_list(slide, "points");
    if !points.is_empty() {
        return points;
    }
    let items = list_field(slide, "items");
    if !items.is_empty() {
        return items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other if other.get("title").is_some() => {
                    format!("{}: {}", str_field(other, "title"), str_field(other, "desc"))
                }
                other => format!(
                    "{}: {}",
                    str_field(other, "label"),
                    str_field(other, "subLabel")
                ),
            })
            .collect();
    }
    string_list(slide, "steps")
}

fn diagram_kind(key: &str) -> DiagramShapeKind {
    match key {
        "oval" => DiagramShapeKind::Oval,
        "rounded_rect" => DiagramShapeKind::RoundedRect,
        _ => DiagramShapeKind::Rect,
    }
}

/// Some model outputs name the KPI list `kpis`, others `items`.
fn kpi_list_key(slide: &Value) -> &'static str {
    if slide.get("kpis").is_some() {
        "kpis"
    } else {
        "items"
    }
}

// --- Field accessors (defaulting, never failing) ---

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value.get(key).map(value_to_string).unwrap_or_default()
}

fn str_field_or(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(v) => value_to_string(v),
        None => default.to_string(),
    }
}

fn opt_str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .map(value_to_string)
        .filter(|s| !s.is_empty())
}

fn list_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    list_field(value, key).iter().map(value_to_string).collect()
}

fn object_list<T>(value: &Value, key: &str, f: impl Fn(&Value) -> T) -> Vec<T> {
    list_field(value, key).iter().map(f).collect()
}

fn num_field_or(value: &Value, key: &str, default: f64) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Percents arrive either as numbers or as strings like `"75%"`; anything
/// unparseable defaults to 0.
fn percent_field(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_timeline_milestones() {
        let slide = json!({
            "type": "timeline",
            "title": "Roadmap",
            "milestones": [
                {"date": "Q1", "label": "Kickoff"},
                {"label": "Launch"}
            ]
        });
        let record = normalize_slide(&slide, 0);
        assert_eq!(record.title, "Roadmap");
        match record.body {
            SlideBody::Timeline { milestones } => {
                assert_eq!(milestones.len(), 2);
                assert_eq!(milestones[0].date, "Q1");
                assert_eq!(milestones[1].date, "");
                assert_eq!(milestones[1].label, "Launch");
            }
            other => panic!("expected timeline body, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_collects_generic_list_fields() {
        let slide = json!({
            "type": "mystery",
            "title": "???",
            "points": ["one", "two", "three"]
        });
        match normalize_slide(&slide, 0).body {
            SlideBody::Content { points } => assert_eq!(points, vec!["one", "two", "three"]),
            other => panic!("expected content body, got {other:?}"),
        }
    }

    #[test]
    fn content_fallback_inspects_item_shape() {
        let slide = json!({
            "type": "content",
            "items": [{"title": "A", "desc": "first"}, {"label": "B", "subLabel": "second"}]
        });
        match normalize_slide(&slide, 0).body {
            SlideBody::Content { points } => {
                assert_eq!(points, vec!["A: first", "B: second"]);
            }
            other => panic!("expected content body, got {other:?}"),
        }
    }

    #[test]
    fn flow_chart_flattens_first_flow() {
        let slide = json!({
            "type": "flowChart",
            "flows": [{"steps": ["plan", "build", "ship"]}, {"steps": ["ignored"]}]
        });
        match normalize_slide(&slide, 0).body {
            SlideBody::FlowChart { steps } => assert_eq!(steps, vec!["plan", "build", "ship"]),
            other => panic!("expected flowChart body, got {other:?}"),
        }
    }

    #[test]
    fn progress_percent_accepts_strings_and_defaults_to_zero() {
        let slide = json!({
            "type": "progress",
            "items": [
                {"label": "a", "percent": 55},
                {"label": "b", "percent": "75%"},
                {"label": "c", "percent": "n/a"}
            ]
        });
        match normalize_slide(&slide, 0).body {
            SlideBody::Progress { items } => {
                assert_eq!(items[0].percent, 55.0);
                assert_eq!(items[1].percent, 75.0);
                assert_eq!(items[2].percent, 0.0);
            }
            other => panic!("expected progress body, got {other:?}"),
        }
    }

    #[test]
    fn section_defaults_to_slide_index() {
        let slide = json!({"type": "section", "title": "Part"});
        match normalize_slide(&slide, 3).body {
            SlideBody::Section { section_no } => assert_eq!(section_no.as_deref(), Some("3")),
            other => panic!("expected section body, got {other:?}"),
        }
    }

    #[test]
    fn kpi_list_accepts_both_key_spellings() {
        let with_kpis = json!({"type": "kpi", "kpis": [{"label": "ARR", "value": "1M"}]});
        let with_items = json!({"type": "kpi", "items": [{"label": "ARR", "value": "1M"}]});
        for slide in [with_kpis, with_items] {
            match normalize_slide(&slide, 0).body {
                SlideBody::Kpi { items } => assert_eq!(items[0].label, "ARR"),
                other => panic!("expected kpi body, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_array_document_is_empty() {
        assert!(normalize_document(&json!({"type": "title"})).is_empty());
        assert!(normalize_document(&json!(null)).is_empty());
    }
}
