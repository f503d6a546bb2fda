//! Static geometry for the generated deck: slide dimensions, the pixel→point
//! scale, the font-size table, and the per-layout region rectangles.
//!
//! Region coordinates live in an abstract 960px-wide pixel space and are
//! scaled to points on emission. The table is exhaustive for every supported
//! layout; a lookup miss is a static-data bug, not a runtime condition, and
//! panics.

use std::collections::HashMap;

/// Width of the abstract layout canvas in pixels.
pub const BASE_WIDTH_PX: f64 = 960.0;
/// A4 landscape width in points (11.69 in × 72).
pub const SLIDE_WIDTH_PT: f64 = 841.68;
/// A4 landscape height in points (8.27 in × 72).
pub const SLIDE_HEIGHT_PT: f64 = 595.44;

/// Neutral light gray used for card bodies, panels and ghost arrows.
pub const PANEL_GRAY: &str = "#F8F9FA";

/// A named placement zone within a layout, in abstract pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

const fn rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect {
        left,
        top,
        width,
        height,
    }
}

/// Identifies one slide layout's region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKey {
    TitleSlide,
    SectionSlide,
    ContentSlide,
    ProcessSlide,
    TimelineSlide,
    CycleSlide,
    CardsSlide,
    PyramidSlide,
    CompareSlide,
    DiagramSlide,
    FlowChartSlide,
    StepUpSlide,
    ImageTextSlide,
    TableSlide,
    ProgressSlide,
    QuoteSlide,
    KpiSlide,
    BulletCardsSlide,
    FaqSlide,
    StatsCompareSlide,
    BarCompareSlide,
}

/// Font sizes in points for each text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub title: u32,
    pub date: u32,
    pub section_title: u32,
    pub content_title: u32,
    pub subhead: u32,
    pub body: u32,
    pub footer: u32,
}

/// Immutable layout configuration injected into the converter. Constructed
/// once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub base_width_px: f64,
    pub slide_width_pt: f64,
    pub slide_height_pt: f64,
    pub fonts: FontSizes,
    regions: HashMap<(LayoutKey, &'static str), Rect>,
}

impl Geometry {
    /// Linear pixel→point conversion keyed to the full slide width.
    pub fn px_to_pt(&self, px: f64) -> f64 {
        px * (self.slide_width_pt / self.base_width_px)
    }

    /// Looks up a named region of a layout.
    ///
    /// # Panics
    /// Panics if the (layout, region) pair is not in the table; the table is
    /// static and exhaustive, so a miss is a programming error.
    pub fn region(&self, layout: LayoutKey, name: &str) -> Rect {
        *self
            .regions
            .get(&(layout, name))
            .unwrap_or_else(|| panic!("undefined layout region {layout:?}.{name}"))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        let mut regions = HashMap::new();
        let mut put = |layout: LayoutKey, name: &'static str, r: Rect| {
            regions.insert((layout, name), r);
        };

        put(LayoutKey::TitleSlide, "title", rect(50.0, 200.0, 830.0, 90.0));
        put(LayoutKey::TitleSlide, "date", rect(50.0, 450.0, 250.0, 40.0));

        put(LayoutKey::SectionSlide, "title", rect(55.0, 230.0, 840.0, 80.0));
        put(
            LayoutKey::SectionSlide,
            "ghostNum",
            rect(35.0, 120.0, 400.0, 200.0),
        );

        // Every content-style layout shares the same header band.
        let content_layouts = [
            (LayoutKey::ContentSlide, "body", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::ProcessSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::TimelineSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::CycleSlide, "body", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::CardsSlide, "gridArea", rect(25.0, 120.0, 910.0, 340.0)),
            (
                LayoutKey::PyramidSlide,
                "pyramidArea",
                rect(25.0, 120.0, 910.0, 360.0),
            ),
            (LayoutKey::DiagramSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::FlowChartSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::StepUpSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::TableSlide, "tableArea", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::ProgressSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::KpiSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::BulletCardsSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::FaqSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
            (LayoutKey::BarCompareSlide, "area", rect(25.0, 132.0, 910.0, 330.0)),
        ];
        for (layout, name, r) in content_layouts {
            put(layout, "title", rect(25.0, 20.0, 830.0, 65.0));
            put(layout, "titleUnderline", rect(25.0, 80.0, 260.0, 4.0));
            put(layout, "subhead", rect(25.0, 90.0, 910.0, 40.0));
            put(layout, name, r);
        }

        // Layouts with two named content regions.
        for (layout, left, right) in [
            (
                LayoutKey::CompareSlide,
                rect(25.0, 112.0, 445.0, 350.0),
                rect(490.0, 112.0, 445.0, 350.0),
            ),
            (
                LayoutKey::ImageTextSlide,
                rect(25.0, 132.0, 440.0, 330.0),
                rect(495.0, 132.0, 440.0, 330.0),
            ),
            (
                LayoutKey::StatsCompareSlide,
                rect(25.0, 132.0, 440.0, 330.0),
                rect(495.0, 132.0, 440.0, 330.0),
            ),
            (
                LayoutKey::QuoteSlide,
                rect(100.0, 150.0, 760.0, 200.0),
                rect(100.0, 360.0, 760.0, 50.0),
            ),
        ] {
            put(layout, "title", rect(25.0, 20.0, 830.0, 65.0));
            put(layout, "titleUnderline", rect(25.0, 80.0, 260.0, 4.0));
            put(layout, "subhead", rect(25.0, 90.0, 910.0, 40.0));
            let (left_name, right_name) = match layout {
                LayoutKey::CompareSlide => ("leftBox", "rightBox"),
                LayoutKey::ImageTextSlide => ("imageArea", "textArea"),
                LayoutKey::StatsCompareSlide => ("leftBox", "rightBox"),
                LayoutKey::QuoteSlide => ("quoteArea", "authorArea"),
                _ => unreachable!(),
            };
            put(layout, left_name, left);
            put(layout, right_name, right);
        }

        Geometry {
            base_width_px: BASE_WIDTH_PX,
            slide_width_pt: SLIDE_WIDTH_PT,
            slide_height_pt: SLIDE_HEIGHT_PT,
            fonts: FontSizes {
                title: 48,
                date: 24,
                section_title: 44,
                content_title: 32,
                subhead: 24,
                body: 24,
                footer: 12,
            },
            regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_to_pt_is_linear_with_exact_ratio() {
        let geometry = Geometry::default();
        assert_eq!(geometry.px_to_pt(960.0), SLIDE_WIDTH_PT);
        for px in [0.0, 1.0, 25.0, 65.0, 910.0] {
            assert_eq!(geometry.px_to_pt(2.0 * px), 2.0 * geometry.px_to_pt(px));
            assert_eq!(geometry.px_to_pt(px), px * SLIDE_WIDTH_PT / BASE_WIDTH_PX);
        }
    }

    #[test]
    fn every_content_layout_has_a_header_band() {
        let geometry = Geometry::default();
        for layout in [
            LayoutKey::ContentSlide,
            LayoutKey::ProcessSlide,
            LayoutKey::TimelineSlide,
            LayoutKey::CycleSlide,
            LayoutKey::CardsSlide,
            LayoutKey::PyramidSlide,
            LayoutKey::CompareSlide,
            LayoutKey::DiagramSlide,
            LayoutKey::FlowChartSlide,
            LayoutKey::StepUpSlide,
            LayoutKey::ImageTextSlide,
            LayoutKey::TableSlide,
            LayoutKey::ProgressSlide,
            LayoutKey::QuoteSlide,
            LayoutKey::KpiSlide,
            LayoutKey::BulletCardsSlide,
            LayoutKey::FaqSlide,
            LayoutKey::StatsCompareSlide,
            LayoutKey::BarCompareSlide,
        ] {
            assert_eq!(geometry.region(layout, "title"), rect(25.0, 20.0, 830.0, 65.0));
            assert_eq!(
                geometry.region(layout, "titleUnderline"),
                rect(25.0, 80.0, 260.0, 4.0)
            );
        }
    }

    #[test]
    #[should_panic(expected = "undefined layout region")]
    fn region_lookup_miss_is_fatal() {
        Geometry::default().region(LayoutKey::TitleSlide, "noSuchRegion");
    }
}
