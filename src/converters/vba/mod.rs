//! Converts normalized slide records into a VBA macro script that rebuilds
//! the deck inside a running PowerPoint instance.
//!
//! The emitted script is a single `Sub CreateCustomPresentation()` that
//! creates an A4-landscape presentation and appends one slide per record.
//! All geometry comes from the [`constants::Geometry`] table in design
//! pixels and is converted to points at emission time, so the script
//! contains only plain numeric literals and `RGB(...)` calls.

pub mod colors;
pub mod constants;
pub mod error;

mod elements;
mod structure;
mod utils;

use log::debug;

use crate::models::slide::{SlideBody, SlideKind, SlideRecord};
use crate::models::style::StyleConfig;

use colors::Rgb;
use constants::{Geometry, LayoutKey};
use error::Result;

/// Stateless slide-to-script converter. Style colors are parsed once at
/// construction so a bad hex string fails before any output is produced.
pub struct VbaConverter {
    geometry: Geometry,
    style: StyleConfig,
    primary: Rgb,
    title: Rgb,
    body: Rgb,
}

impl VbaConverter {
    pub fn new(style: StyleConfig) -> Result<VbaConverter> {
        VbaConverter::with_geometry(style, Geometry::default())
    }

    /// Builds a converter over a caller-supplied geometry table. Used by the
    /// default constructor and by tests that probe layout edge cases.
    pub fn with_geometry(style: StyleConfig, geometry: Geometry) -> Result<VbaConverter> {
        let primary = colors::hex_to_rgb(&style.primary_color)?;
        let title = colors::hex_to_rgb(&style.title_color)?;
        let body = colors::hex_to_rgb(&style.body_color)?;
        Ok(VbaConverter {
            geometry,
            style,
            primary,
            title,
            body,
        })
    }

    pub(super) fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub(super) fn font(&self) -> &str {
        &self.style.font_family
    }

    pub(super) fn primary_rgb(&self) -> Rgb {
        self.primary
    }

    pub(super) fn title_rgb(&self) -> Rgb {
        self.title
    }

    pub(super) fn body_rgb(&self) -> Rgb {
        self.body
    }

    /// Renders the whole deck. An empty deck yields an empty string rather
    /// than a macro that builds a zero-slide presentation.
    pub fn convert(&self, slides: &[SlideRecord]) -> Result<String> {
        if slides.is_empty() {
            return Ok(String::new());
        }
        let mut out = String::new();
        structure::write_prologue(&mut out, &self.geometry)?;

        for (index, slide) in slides.iter().enumerate() {
            debug!("rendering slide {}: {}", index + 1, slide.kind().as_key());
            structure::write_slide_open(&mut out, index, slide.kind().as_key())?;
            self.write_body(&mut out, slide, index)?;
        }

        structure::write_epilogue(&mut out)?;
        Ok(out)
    }

    fn write_body(&self, out: &mut String, slide: &SlideRecord, index: usize) -> Result<()> {
        match &slide.body {
            SlideBody::Title { date } => {
                return structure::write_title_slide(out, self, &slide.title, date);
            }
            SlideBody::Section { section_no } => {
                return structure::write_section_slide(
                    out,
                    self,
                    &slide.title,
                    section_no.as_deref(),
                    index,
                );
            }
            _ => {}
        }

        structure::write_common_header(out, self, slide, layout_for(slide.kind()))?;
        match &slide.body {
            SlideBody::Title { .. } | SlideBody::Section { .. } => unreachable!(),
            SlideBody::Process { steps } => elements::write_process(out, self, steps),
            SlideBody::Timeline { milestones } => elements::write_timeline(out, self, milestones),
            SlideBody::Cycle { items } => elements::write_cycle(out, self, items),
            SlideBody::Cards { items } => elements::write_cards(out, self, items),
            SlideBody::Pyramid { levels } => elements::write_pyramid(out, self, levels),
            SlideBody::Compare {
                left_title,
                right_title,
                left_items,
                right_items,
            } => elements::write_compare(out, self, left_title, right_title, left_items, right_items),
            SlideBody::Diagram { shapes } => elements::write_diagram(out, self, shapes),
            SlideBody::FlowChart { steps } => elements::write_flow_chart(out, self, steps),
            SlideBody::StepUp { steps } => elements::write_step_up(out, self, steps),
            SlideBody::ImageText { image_desc, text } => {
                elements::write_image_text(out, self, image_desc, text)
            }
            SlideBody::Table { headers, rows } => elements::write_table(out, self, headers, rows),
            SlideBody::Progress { items } => elements::write_progress(out, self, items),
            SlideBody::Quote { quote, author } => elements::write_quote(out, self, quote, author),
            SlideBody::Kpi { items } => elements::write_kpi(out, self, items),
            SlideBody::BulletCards { cards } => elements::write_bullet_cards(out, self, cards),
            SlideBody::Faq { items } => elements::write_faq(out, self, items),
            SlideBody::StatsCompare {
                left_title,
                right_title,
                stats,
            } => elements::write_stats_compare(out, self, left_title, right_title, stats),
            SlideBody::BarCompare { items } => elements::write_bar_compare(out, self, items),
            SlideBody::Content { points } => elements::write_content(out, self, points),
        }
    }
}

/// Geometry table row backing each slide kind.
fn layout_for(kind: SlideKind) -> LayoutKey {
    match kind {
        SlideKind::Title => LayoutKey::TitleSlide,
        SlideKind::Section => LayoutKey::SectionSlide,
        SlideKind::Content => LayoutKey::ContentSlide,
        SlideKind::Process => LayoutKey::ProcessSlide,
        SlideKind::Timeline => LayoutKey::TimelineSlide,
        SlideKind::Cycle => LayoutKey::CycleSlide,
        SlideKind::Cards => LayoutKey::CardsSlide,
        SlideKind::Pyramid => LayoutKey::PyramidSlide,
        SlideKind::Compare => LayoutKey::CompareSlide,
        SlideKind::Diagram => LayoutKey::DiagramSlide,
        SlideKind::FlowChart => LayoutKey::FlowChartSlide,
        SlideKind::StepUp => LayoutKey::StepUpSlide,
        SlideKind::ImageText => LayoutKey::ImageTextSlide,
        SlideKind::Table => LayoutKey::TableSlide,
        SlideKind::Progress => LayoutKey::ProgressSlide,
        SlideKind::Quote => LayoutKey::QuoteSlide,
        SlideKind::Kpi => LayoutKey::KpiSlide,
        SlideKind::BulletCards => LayoutKey::BulletCardsSlide,
        SlideKind::Faq => LayoutKey::FaqSlide,
        SlideKind::StatsCompare => LayoutKey::StatsCompareSlide,
        SlideKind::BarCompare => LayoutKey::BarCompareSlide,
    }
}

/// One-shot conversion with the default A4 geometry.
pub fn convert_deck_to_vba(slides: &[SlideRecord], style: &StyleConfig) -> Result<String> {
    let converter = VbaConverter::new(style.clone())?;
    converter.convert(slides)
}

#[cfg(test)]
mod tests {
    use super::error::VbaConversionError;
    use super::*;
    use crate::models::slide::SlideBody;

    fn record(title: &str, body: SlideBody) -> SlideRecord {
        SlideRecord {
            title: title.to_string(),
            ..SlideRecord::from_body(body)
        }
    }

    fn convert(slides: &[SlideRecord]) -> String {
        convert_deck_to_vba(slides, &StyleConfig::default()).unwrap()
    }

    #[test]
    fn empty_deck_produces_no_script() {
        assert_eq!(convert(&[]), "");
    }

    #[test]
    fn bad_style_color_is_rejected_before_rendering() {
        let style = StyleConfig {
            primary_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let slides = [record("x", SlideBody::Content { points: vec![] })];
        let err = convert_deck_to_vba(&slides, &style).unwrap_err();
        assert!(matches!(err, VbaConversionError::InvalidColor(_)));
    }

    #[test]
    fn title_slide_renders_title_and_date_only() {
        let slides = [record(
            "Q1 Review",
            SlideBody::Title {
                date: "2024-04-01".to_string(),
            },
        )];
        let script = convert(&slides);

        assert!(script.starts_with("Sub CreateCustomPresentation()"));
        assert!(script.trim_end().ends_with("End Sub"));
        assert!(script.contains("Text = \"Q1 Review\""));
        assert!(script.contains("Text = \"2024-04-01\""));
        assert!(script.contains("Font.Size = 48"));
        let text_sets = script.matches("TextFrame.TextRange.Text = ").count();
        assert_eq!(text_sets, 2);
    }

    #[test]
    fn process_emits_one_box_per_step_and_connecting_arrows() {
        let steps: Vec<String> = (1..=4).map(|i| format!("Do thing {i}")).collect();
        let slides = [record("Rollout", SlideBody::Process { steps })];
        let script = convert(&slides);

        assert_eq!(script.matches("\"STEP ").count(), 4);
        assert_eq!(script.matches("Shapes.AddShape(66, ").count(), 3);
        // One numbered header and one body panel per step.
        assert_eq!(script.matches("Shapes.AddShape(1, ").count(), 8);
        // One step-text box per step, plus the slide-title box.
        assert_eq!(script.matches("Shapes.AddTextbox(1, ").count(), 5);
        // Four steps squeeze into the shortest box height.
        let box_h = Geometry::default().px_to_pt(65.0);
        assert!(script.contains(&format!("{box_h}")));
    }

    #[test]
    fn compare_uses_both_column_titles() {
        let slides = [record(
            "Build vs Buy",
            SlideBody::Compare {
                left_title: "Build".to_string(),
                right_title: "Buy".to_string(),
                left_items: vec!["control".to_string()],
                right_items: vec!["speed".to_string()],
            },
        )];
        let script = convert(&slides);
        assert!(script.contains("Text = \"Build\""));
        assert!(script.contains("Text = \"Buy\""));
    }

    #[test]
    fn content_fallback_renders_bulleted_lines() {
        let slides = [record(
            "Notes",
            SlideBody::Content {
                points: vec!["one".to_string(), "two".to_string(), "three".to_string()],
            },
        )];
        let script = convert(&slides);
        assert!(script.contains("\u{30fb}one\" & vbCr & \"\u{30fb}two\" & vbCr & \"\u{30fb}three"));
    }

    #[test]
    fn unrecognized_kind_falls_back_to_bulleted_content() {
        let document = serde_json::json!([{
            "type": "mystery",
            "title": "Odds and ends",
            "points": ["one", "two", "three"]
        }]);
        let slides = crate::normalizer::normalize_document(&document);
        let script = convert(&slides);
        assert!(script.contains("' === Slide 1: content ==="));
        assert!(script.contains("\u{30fb}one\" & vbCr & \"\u{30fb}two\" & vbCr & \"\u{30fb}three"));
    }

    #[test]
    fn quoted_text_is_escaped() {
        let slides = [record(
            "He said \"go\"",
            SlideBody::Content {
                points: vec!["a \"quoted\" point".to_string()],
            },
        )];
        let script = convert(&slides);
        assert!(script.contains("He said \"\"go\"\""));
        assert!(script.contains("a \"\"quoted\"\" point"));
    }

    #[test]
    fn every_kind_renders_without_header_lookups_failing() {
        use crate::models::slide::*;

        let bodies = vec![
            SlideBody::Title { date: "2024".into() },
            SlideBody::Section { section_no: Some("2".into()) },
            SlideBody::Process { steps: vec!["a".into()] },
            SlideBody::Timeline {
                milestones: vec![Milestone { date: "Q1".into(), label: "kickoff".into() }],
            },
            SlideBody::Cycle {
                items: vec![CycleItem { label: "plan".into(), sub_label: None }],
            },
            SlideBody::Cards {
                items: vec![CardItem { title: "t".into(), desc: "d".into() }],
            },
            SlideBody::Pyramid {
                levels: vec![PyramidLevel { title: "apex".into(), description: "top".into() }],
            },
            SlideBody::Compare {
                left_title: "L".into(),
                right_title: "R".into(),
                left_items: vec!["x".into()],
                right_items: vec!["y".into()],
            },
            SlideBody::Diagram { shapes: vec![DiagramShape::default()] },
            SlideBody::FlowChart { steps: vec!["a".into(), "b".into()] },
            SlideBody::StepUp { steps: vec!["a".into(), "b".into()] },
            SlideBody::ImageText { image_desc: "chart".into(), text: "body".into() },
            SlideBody::Table {
                headers: vec!["h".into()],
                rows: vec![vec!["v".into()]],
            },
            SlideBody::Progress {
                items: vec![ProgressItem { label: "p".into(), percent: 40.0 }],
            },
            SlideBody::Quote { quote: "q".into(), author: "a".into() },
            SlideBody::Kpi {
                items: vec![KpiItem { label: "users".into(), value: "1k".into(), change: "+5%".into() }],
            },
            SlideBody::BulletCards {
                cards: vec![BulletCard { title: "c".into(), points: vec!["p".into()] }],
            },
            SlideBody::Faq {
                items: vec![FaqItem { question: "why".into(), answer: "because".into() }],
            },
            SlideBody::StatsCompare {
                left_title: "A".into(),
                right_title: "B".into(),
                stats: vec![StatRow {
                    label: "speed".into(),
                    left_value: "1".into(),
                    right_value: "2".into(),
                }],
            },
            SlideBody::BarCompare {
                items: vec![BarItem { label: "m".into(), value_a: 30.0, value_b: 70.0 }],
            },
            SlideBody::Content { points: vec!["p".into()] },
        ];
        let slides: Vec<SlideRecord> = bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| record(&format!("Slide {i}"), body))
            .collect();

        let script = convert(&slides);
        assert_eq!(script.matches("' === Slide ").count(), slides.len());
    }
}
