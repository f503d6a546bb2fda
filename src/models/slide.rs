use serde::{Deserialize, Serialize};

/// The kind of a slide. Discriminates the per-kind payload carried by
/// [`SlideBody`] and selects the layout table used when lowering to VBA.
///
/// Wire keys are case-sensitive; anything unrecognized maps to `Content`,
/// the generic bulleted fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    Title,
    Section,
    Content,
    Process,
    Timeline,
    Cycle,
    Cards,
    Pyramid,
    Compare,
    Diagram,
    FlowChart,
    StepUp,
    ImageText,
    Table,
    Progress,
    Quote,
    Kpi,
    BulletCards,
    Faq,
    StatsCompare,
    BarCompare,
}

impl SlideKind {
    /// Maps a wire-format `type` key to a kind. Unknown or missing keys fall
    /// back to `Content`, which renders whatever generic list field is present.
    pub fn from_key(key: &str) -> SlideKind {
        match key {
            "title" => SlideKind::Title,
            "section" => SlideKind::Section,
            "process" => SlideKind::Process,
            "timeline" => SlideKind::Timeline,
            "cycle" => SlideKind::Cycle,
            "cards" => SlideKind::Cards,
            "pyramid" => SlideKind::Pyramid,
            "compare" => SlideKind::Compare,
            "diagram" => SlideKind::Diagram,
            "flowChart" => SlideKind::FlowChart,
            "stepUp" => SlideKind::StepUp,
            "imageText" => SlideKind::ImageText,
            "table" => SlideKind::Table,
            "progress" => SlideKind::Progress,
            "quote" => SlideKind::Quote,
            "kpi" => SlideKind::Kpi,
            "bulletCards" => SlideKind::BulletCards,
            "faq" => SlideKind::Faq,
            "statsCompare" => SlideKind::StatsCompare,
            "barCompare" => SlideKind::BarCompare,
            _ => SlideKind::Content,
        }
    }

    /// The canonical wire key for this kind.
    pub fn as_key(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Section => "section",
            SlideKind::Content => "content",
            SlideKind::Process => "process",
            SlideKind::Timeline => "timeline",
            SlideKind::Cycle => "cycle",
            SlideKind::Cards => "cards",
            SlideKind::Pyramid => "pyramid",
            SlideKind::Compare => "compare",
            SlideKind::Diagram => "diagram",
            SlideKind::FlowChart => "flowChart",
            SlideKind::StepUp => "stepUp",
            SlideKind::ImageText => "imageText",
            SlideKind::Table => "table",
            SlideKind::Progress => "progress",
            SlideKind::Quote => "quote",
            SlideKind::Kpi => "kpi",
            SlideKind::BulletCards => "bulletCards",
            SlideKind::Faq => "faq",
            SlideKind::StatsCompare => "statsCompare",
            SlideKind::BarCompare => "barCompare",
        }
    }
}

/// One milestone on a timeline slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Milestone {
    pub date: String,
    pub label: String,
}

/// One item on a cycle-diagram slide. `sub_label` defaults to "Phase N"
/// (1-indexed) at render time when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleItem {
    pub label: String,
    pub sub_label: Option<String>,
}

/// One card in a card-grid slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CardItem {
    pub title: String,
    pub desc: String,
}

/// One level of a pyramid slide, ordered top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PyramidLevel {
    pub title: String,
    pub description: String,
}

/// Shape geometry primitive for free-form diagram slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagramShapeKind {
    #[default]
    Rect,
    Oval,
    RoundedRect,
}

/// One explicitly positioned shape on a diagram slide. Coordinates are in
/// the abstract pixel space of the layout tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramShape {
    pub shape_type: DiagramShapeKind,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for DiagramShape {
    fn default() -> Self {
        DiagramShape {
            shape_type: DiagramShapeKind::Rect,
            label: String::new(),
            x: 100.0,
            y: 100.0,
            w: 100.0,
            h: 50.0,
        }
    }
}

/// One labeled bar on a progress slide. `percent` is clamped to the
/// 0..=100 track at render time only through the width formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressItem {
    pub label: String,
    pub percent: f64,
}

/// One metric tile on a KPI slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct KpiItem {
    pub label: String,
    pub value: String,
    pub change: String,
}

/// One card of a bullet-cards slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletCard {
    pub title: String,
    pub points: Vec<String>,
}

/// One Q/A pair on an FAQ slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaqItem {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

/// One row of a side-by-side statistics comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatRow {
    pub label: String,
    pub left_value: String,
    pub right_value: String,
}

/// One labeled pair of bars on a bar-comparison slide. Values are scaled
/// against an assumed fixed maximum of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BarItem {
    pub label: String,
    pub value_a: f64,
    pub value_b: f64,
}

/// Kind-specific payload of a slide. Exactly the fields relevant to the
/// discriminating kind are carried; there is no way to populate a field the
/// renderer for that kind would not read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideBody {
    Title { date: String },
    Section { section_no: Option<String> },
    Process { steps: Vec<String> },
    Timeline { milestones: Vec<Milestone> },
    Cycle { items: Vec<CycleItem> },
    Cards { items: Vec<CardItem> },
    Pyramid { levels: Vec<PyramidLevel> },
    Compare {
        left_title: String,
        right_title: String,
        left_items: Vec<String>,
        right_items: Vec<String>,
    },
    Diagram { shapes: Vec<DiagramShape> },
    FlowChart { steps: Vec<String> },
    StepUp { steps: Vec<String> },
    ImageText { image_desc: String, text: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Progress { items: Vec<ProgressItem> },
    Quote { quote: String, author: String },
    Kpi { items: Vec<KpiItem> },
    BulletCards { cards: Vec<BulletCard> },
    Faq { items: Vec<FaqItem> },
    StatsCompare {
        left_title: String,
        right_title: String,
        stats: Vec<StatRow>,
    },
    BarCompare { items: Vec<BarItem> },
    Content { points: Vec<String> },
}

impl SlideBody {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideBody::Title { .. } => SlideKind::Title,
            SlideBody::Section { .. } => SlideKind::Section,
            SlideBody::Process { .. } => SlideKind::Process,
            SlideBody::Timeline { .. } => SlideKind::Timeline,
            SlideBody::Cycle { .. } => SlideKind::Cycle,
            SlideBody::Cards { .. } => SlideKind::Cards,
            SlideBody::Pyramid { .. } => SlideKind::Pyramid,
            SlideBody::Compare { .. } => SlideKind::Compare,
            SlideBody::Diagram { .. } => SlideKind::Diagram,
            SlideBody::FlowChart { .. } => SlideKind::FlowChart,
            SlideBody::StepUp { .. } => SlideKind::StepUp,
            SlideBody::ImageText { .. } => SlideKind::ImageText,
            SlideBody::Table { .. } => SlideKind::Table,
            SlideBody::Progress { .. } => SlideKind::Progress,
            SlideBody::Quote { .. } => SlideKind::Quote,
            SlideBody::Kpi { .. } => SlideKind::Kpi,
            SlideBody::BulletCards { .. } => SlideKind::BulletCards,
            SlideBody::Faq { .. } => SlideKind::Faq,
            SlideBody::StatsCompare { .. } => SlideKind::StatsCompare,
            SlideBody::BarCompare { .. } => SlideKind::BarCompare,
            SlideBody::Content { .. } => SlideKind::Content,
        }
    }
}

/// One normalized unit of deck content: common fields plus the kind-tagged
/// payload. Records are built per request by the normalizer, consumed once
/// by the VBA converter and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub title: String,
    pub subhead: Option<String>,
    pub notes: Option<String>,
    pub body: SlideBody,
}

impl SlideRecord {
    /// Builds a record with empty common fields around a payload.
    pub fn from_body(body: SlideBody) -> SlideRecord {
        SlideRecord {
            title: String::new(),
            subhead: None,
            notes: None,
            body,
        }
    }

    pub fn kind(&self) -> SlideKind {
        self.body.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_key_falls_back_to_content() {
        assert_eq!(SlideKind::from_key("mystery"), SlideKind::Content);
        assert_eq!(SlideKind::from_key(""), SlideKind::Content);
        // Keys are case-sensitive.
        assert_eq!(SlideKind::from_key("FlowChart"), SlideKind::Content);
    }

    #[test]
    fn kind_keys_round_trip() {
        for key in [
            "title", "section", "process", "timeline", "cycle", "cards", "pyramid", "compare",
            "diagram", "flowChart", "stepUp", "imageText", "table", "progress", "quote", "kpi",
            "bulletCards", "faq", "statsCompare", "barCompare",
        ] {
            assert_eq!(SlideKind::from_key(key).as_key(), key);
        }
    }

    #[test]
    fn body_reports_its_kind() {
        let body = SlideBody::Process {
            steps: vec!["a".into()],
        };
        assert_eq!(body.kind(), SlideKind::Process);
        assert_eq!(SlideRecord::from_body(body).kind(), SlideKind::Process);
    }
}
