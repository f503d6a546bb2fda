//! Line-based outline of a slide for hand editing, and the reverse parse.
//!
//! The outline is the editable-text form shown between generation and
//! download: each payload collapses to one line per item with a small
//! per-kind syntax (`date: label`, `h1 | h2`, `Q:` / `A:` pairs), and
//! edited text parses back into the same payload shape. `flatten_slide`
//! followed by `parse_slide_body` preserves every field the outline can
//! express; fields the outline cannot carry (diagram coordinates, compare
//! column titles) reset to their defaults on re-parse.

use crate::models::slide::{
    BarItem, BulletCard, CardItem, CycleItem, DiagramShape, FaqItem, KpiItem, Milestone,
    ProgressItem, PyramidLevel, SlideBody, SlideKind, StatRow,
};

/// Flattens a slide payload to its editable outline text.
pub fn flatten_slide(body: &SlideBody) -> String {
    let lines: Vec<String> = match body {
        SlideBody::Title { date } => vec![date.clone()],
        SlideBody::Section { section_no } => section_no.iter().cloned().collect(),
        SlideBody::Process { steps }
        | SlideBody::FlowChart { steps }
        | SlideBody::StepUp { steps } => steps.clone(),
        SlideBody::Timeline { milestones } => milestones
            .iter()
            .map(|m| format!("{}: {}", m.date, m.label))
            .collect(),
        SlideBody::Cycle { items } => items
            .iter()
            .map(|item| match item.sub_label.as_deref().filter(|s| !s.is_empty()) {
                Some(sub) => format!("{}: {}", sub, item.label),
                None => item.label.clone(),
            })
            .collect(),
        SlideBody::Cards { items } => items
            .iter()
            .map(|item| format!("{}: {}", item.title, item.desc))
            .collect(),
        SlideBody::Pyramid { levels } => levels
            .iter()
            .map(|level| format!("{}: {}", level.title, level.description))
            .collect(),
        SlideBody::Compare {
            left_items,
            right_items,
            ..
        } => {
            let mut lines = vec!["--- Left ---".to_string()];
            lines.extend(left_items.iter().cloned());
            lines.push("--- Right ---".to_string());
            lines.extend(right_items.iter().cloned());
            lines
        }
        SlideBody::Diagram { shapes } => shapes.iter().map(|s| s.label.clone()).collect(),
        SlideBody::ImageText { image_desc, text } => {
            vec![format!("Image: {image_desc}"), format!("Text: {text}")]
        }
        SlideBody::Table { headers, rows } => {
            let mut lines = vec![headers.join(" | ")];
            lines.extend(rows.iter().map(|row| row.join(" | ")));
            lines
        }
        SlideBody::Progress { items } => items
            .iter()
            .map(|item| format!("{}: {}%", item.label, item.percent))
            .collect(),
        SlideBody::Quote { quote, author } => {
            vec![format!("Quote: {quote}"), format!("Author: {author}")]
        }
        SlideBody::Kpi { items } => items
            .iter()
            .map(|kpi| format!("{}: {} ({})", kpi.label, kpi.value, kpi.change))
            .collect(),
        SlideBody::BulletCards { cards } => {
            let mut lines = Vec::new();
            for card in cards {
                lines.push(format!("Title: {}", card.title));
                lines.extend(card.points.iter().map(|p| format!("- {p}")));
                lines.push("---".to_string());
            }
            lines
        }
        SlideBody::Faq { items } => {
            let mut lines = Vec::new();
            for item in items {
                lines.push(format!("Q: {}", item.question));
                lines.push(format!("A: {}", item.answer));
            }
            lines
        }
        SlideBody::StatsCompare { stats, .. } => stats
            .iter()
            .map(|s| format!("{}: {} / {}", s.label, s.left_value, s.right_value))
            .collect(),
        SlideBody::BarCompare { items } => items
            .iter()
            .map(|item| format!("{}: {} / {}", item.label, item.value_a, item.value_b))
            .collect(),
        SlideBody::Content { points } => points.clone(),
    };
    lines.join("\n")
}

/// Parses edited outline text back into the payload for `kind`. Blank lines
/// are dropped and every line is trimmed; numeric fields that fail to parse
/// become 0.
pub fn parse_slide_body(kind: SlideKind, text: &str) -> SlideBody {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match kind {
        SlideKind::Title => SlideBody::Title {
            date: lines.first().map(|s| s.to_string()).unwrap_or_default(),
        },
        SlideKind::Section => SlideBody::Section {
            section_no: lines.first().map(|s| s.to_string()),
        },
        SlideKind::Process => SlideBody::Process { steps: owned(&lines) },
        SlideKind::Timeline => SlideBody::Timeline {
            milestones: lines
                .iter()
                .map(|line| match split_label(line) {
                    Some((date, label)) => Milestone {
                        date: date.to_string(),
                        label: label.to_string(),
                    },
                    None => Milestone {
                        date: String::new(),
                        label: line.to_string(),
                    },
                })
                .collect(),
        },
        SlideKind::Cycle => SlideBody::Cycle {
            items: lines
                .iter()
                .map(|line| match split_label(line) {
                    Some((sub, label)) => CycleItem {
                        label: label.to_string(),
                        sub_label: Some(sub.to_string()),
                    },
                    None => CycleItem {
                        label: line.to_string(),
                        sub_label: None,
                    },
                })
                .collect(),
        },
        SlideKind::Cards => SlideBody::Cards {
            items: lines
                .iter()
                .map(|line| match split_label(line) {
                    Some((title, desc)) => CardItem {
                        title: title.to_string(),
                        desc: desc.to_string(),
                    },
                    None => CardItem {
                        title: line.to_string(),
                        desc: String::new(),
                    },
                })
                .collect(),
        },
        SlideKind::Pyramid => SlideBody::Pyramid {
            levels: lines
                .iter()
                .map(|line| match split_label(line) {
                    Some((title, description)) => PyramidLevel {
                        title: title.to_string(),
                        description: description.to_string(),
                    },
                    None => PyramidLevel {
                        title: line.to_string(),
                        description: String::new(),
                    },
                })
                .collect(),
        },
        SlideKind::Compare => {
            let mut left_items = Vec::new();
            let mut right_items = Vec::new();
            let mut on_right = false;
            for line in &lines {
                if line.contains("--- Left ---") {
                    on_right = false;
                } else if line.contains("--- Right ---") {
                    on_right = true;
                } else if on_right {
                    right_items.push(line.to_string());
                } else {
                    left_items.push(line.to_string());
                }
            }
            SlideBody::Compare {
                left_title: "Option A".to_string(),
                right_title: "Option B".to_string(),
                left_items,
                right_items,
            }
        }
        SlideKind::Diagram => SlideBody::Diagram {
            shapes: lines
                .iter()
                .map(|line| DiagramShape {
                    label: line.to_string(),
                    ..DiagramShape::default()
                })
                .collect(),
        },
        SlideKind::FlowChart => SlideBody::FlowChart { steps: owned(&lines) },
        SlideKind::StepUp => SlideBody::StepUp { steps: owned(&lines) },
        SlideKind::ImageText => {
            let mut image_desc = String::new();
            let mut text = String::new();
            for line in &lines {
                if let Some(rest) = line.strip_prefix("Image:") {
                    image_desc = rest.trim().to_string();
                } else if let Some(rest) = line.strip_prefix("Text:") {
                    text = rest.trim().to_string();
                } else if text.is_empty() {
                    text = line.to_string();
                } else {
                    text.push('\n');
                    text.push_str(line);
                }
            }
            SlideBody::ImageText { image_desc, text }
        }
        SlideKind::Table => {
            let headers = lines
                .first()
                .map(|line| split_cells(line))
                .unwrap_or_default();
            let rows = lines.iter().skip(1).map(|line| split_cells(line)).collect();
            SlideBody::Table { headers, rows }
        }
        SlideKind::Progress => SlideBody::Progress {
            items: lines
                .iter()
                .filter_map(|line| {
                    let (label, value) = split_label(line)?;
                    Some(ProgressItem {
                        label: label.to_string(),
                        percent: parse_number(value.trim_end_matches('%')),
                    })
                })
                .collect(),
        },
        SlideKind::Quote => {
            let mut quote = String::new();
            let mut author = String::new();
            for line in &lines {
                if let Some(rest) = line.strip_prefix("Quote:") {
                    quote = rest.trim().to_string();
                } else if let Some(rest) = line.strip_prefix("Author:") {
                    author = rest.trim().to_string();
                }
            }
            SlideBody::Quote { quote, author }
        }
        SlideKind::Kpi => SlideBody::Kpi {
            items: lines
                .iter()
                .map(|line| match split_label(line) {
                    Some((label, rest)) => {
                        let (value, change) = match rest.split_once('(') {
                            Some((value, change)) => {
                                (value.trim(), change.trim_end_matches(')').trim())
                            }
                            None => (rest, ""),
                        };
                        KpiItem {
                            label: label.to_string(),
                            value: value.to_string(),
                            change: change.to_string(),
                        }
                    }
                    None => KpiItem {
                        label: line.to_string(),
                        value: String::new(),
                        change: String::new(),
                    },
                })
                .collect(),
        },
        SlideKind::BulletCards => {
            let mut cards = Vec::new();
            let mut current: Option<BulletCard> = None;
            for line in &lines {
                if let Some(rest) = line.strip_prefix("Title:") {
                    if let Some(card) = current.take() {
                        cards.push(card);
                    }
                    current = Some(BulletCard {
                        title: rest.trim().to_string(),
                        points: Vec::new(),
                    });
                } else if *line == "---" {
                    if let Some(card) = current.take() {
                        cards.push(card);
                    }
                } else if let Some(rest) = line.strip_prefix('-') {
                    if let Some(card) = current.as_mut() {
                        card.points.push(rest.trim().to_string());
                    }
                }
            }
            if let Some(card) = current {
                cards.push(card);
            }
            SlideBody::BulletCards { cards }
        }
        SlideKind::Faq => {
            let mut items = Vec::new();
            let mut current: Option<FaqItem> = None;
            for line in &lines {
                if let Some(rest) = line.strip_prefix("Q:") {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                    current = Some(FaqItem {
                        question: rest.trim().to_string(),
                        answer: String::new(),
                    });
                } else if let Some(rest) = line.strip_prefix("A:") {
                    if let Some(item) = current.as_mut() {
                        item.answer = rest.trim().to_string();
                    }
                }
            }
            if let Some(item) = current {
                items.push(item);
            }
            SlideBody::Faq { items }
        }
        SlideKind::StatsCompare => SlideBody::StatsCompare {
            left_title: String::new(),
            right_title: String::new(),
            stats: lines
                .iter()
                .filter_map(|line| {
                    let (label, rest) = split_label(line)?;
                    let (left, right) = match rest.split_once('/') {
                        Some((left, right)) => (left.trim(), right.trim()),
                        None => (rest, ""),
                    };
                    Some(StatRow {
                        label: label.to_string(),
                        left_value: left.to_string(),
                        right_value: right.to_string(),
                    })
                })
                .collect(),
        },
        SlideKind::BarCompare => SlideBody::BarCompare {
            items: lines
                .iter()
                .filter_map(|line| {
                    let (label, rest) = split_label(line)?;
                    let (a, b) = match rest.split_once('/') {
                        Some((a, b)) => (a.trim(), b.trim()),
                        None => (rest, ""),
                    };
                    Some(BarItem {
                        label: label.to_string(),
                        value_a: parse_number(a),
                        value_b: parse_number(b),
                    })
                })
                .collect(),
        },
        SlideKind::Content => SlideBody::Content { points: owned(&lines) },
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Splits `label: rest` on the first colon, trimming both halves.
fn split_label(line: &str) -> Option<(&str, &str)> {
    let (label, rest) = line.split_once(':')?;
    Some((label.trim(), rest.trim()))
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(body: SlideBody) {
        let kind = body.kind();
        let text = flatten_slide(&body);
        assert_eq!(parse_slide_body(kind, &text), body);
    }

    #[test]
    fn title_date_round_trips() {
        round_trip(SlideBody::Title { date: "2024-04-01".into() });
    }

    #[test]
    fn timeline_round_trips() {
        round_trip(SlideBody::Timeline {
            milestones: vec![
                Milestone { date: "Q1".into(), label: "kickoff".into() },
                Milestone { date: "Q2".into(), label: "beta".into() },
            ],
        });
    }

    #[test]
    fn cycle_round_trips_with_and_without_sub_labels() {
        round_trip(SlideBody::Cycle {
            items: vec![
                CycleItem { label: "plan".into(), sub_label: Some("Phase 1".into()) },
                CycleItem { label: "review".into(), sub_label: None },
            ],
        });
    }

    #[test]
    fn table_round_trips() {
        round_trip(SlideBody::Table {
            headers: vec!["Item".into(), "Cost".into()],
            rows: vec![
                vec!["laptop".into(), "1200".into()],
                vec!["desk".into(), "300".into()],
            ],
        });
    }

    #[test]
    fn bullet_cards_round_trip() {
        round_trip(SlideBody::BulletCards {
            cards: vec![
                BulletCard { title: "Pros".into(), points: vec!["fast".into(), "cheap".into()] },
                BulletCard { title: "Cons".into(), points: vec!["new".into()] },
            ],
        });
    }

    #[test]
    fn faq_round_trips() {
        round_trip(SlideBody::Faq {
            items: vec![
                FaqItem { question: "when".into(), answer: "now".into() },
                FaqItem { question: "who".into(), answer: "us".into() },
            ],
        });
    }

    #[test]
    fn compare_items_survive_but_titles_reset() {
        let body = SlideBody::Compare {
            left_title: "Build".into(),
            right_title: "Buy".into(),
            left_items: vec!["control".into()],
            right_items: vec!["speed".into()],
        };
        let parsed = parse_slide_body(SlideKind::Compare, &flatten_slide(&body));
        assert_eq!(
            parsed,
            SlideBody::Compare {
                left_title: "Option A".into(),
                right_title: "Option B".into(),
                left_items: vec!["control".into()],
                right_items: vec!["speed".into()],
            }
        );
    }

    #[test]
    fn stats_compare_rows_survive_but_titles_reset_to_empty() {
        let body = SlideBody::StatsCompare {
            left_title: "Us".into(),
            right_title: "Them".into(),
            stats: vec![StatRow {
                label: "latency".into(),
                left_value: "12ms".into(),
                right_value: "40ms".into(),
            }],
        };
        let parsed = parse_slide_body(SlideKind::StatsCompare, &flatten_slide(&body));
        assert_eq!(
            parsed,
            SlideBody::StatsCompare {
                left_title: String::new(),
                right_title: String::new(),
                stats: vec![StatRow {
                    label: "latency".into(),
                    left_value: "12ms".into(),
                    right_value: "40ms".into(),
                }],
            }
        );
    }

    #[test]
    fn kpi_round_trips_including_change() {
        round_trip(SlideBody::Kpi {
            items: vec![KpiItem {
                label: "MAU".into(),
                value: "120k".into(),
                change: "+8%".into(),
            }],
        });
    }

    #[test]
    fn progress_percent_round_trips() {
        round_trip(SlideBody::Progress {
            items: vec![ProgressItem { label: "backend".into(), percent: 75.0 }],
        });
    }

    #[test]
    fn bar_compare_defaults_unparseable_values_to_zero() {
        let parsed = parse_slide_body(SlideKind::BarCompare, "metric: lots / 40");
        assert_eq!(
            parsed,
            SlideBody::BarCompare {
                items: vec![BarItem { label: "metric".into(), value_a: 0.0, value_b: 40.0 }],
            }
        );
    }

    #[test]
    fn blank_and_padded_lines_are_dropped() {
        let parsed = parse_slide_body(SlideKind::Process, "  first  \n\n second\n   \n");
        assert_eq!(
            parsed,
            SlideBody::Process { steps: vec!["first".into(), "second".into()] }
        );
    }
}
