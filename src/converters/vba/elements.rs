//! Per-kind layout algorithms. Each writer lowers one slide payload into a
//! self-contained block of drawing instructions inside the slide opened by
//! the caller; no layout state crosses slide boundaries.

use std::fmt::Write;

use super::colors::{ascending_ramp, cycle_colors, descending_ramp};
use super::constants::{LayoutKey, PANEL_GRAY};
use super::error::Result;
use super::structure::*;
use super::utils::{escape_vba, rgb_call, rgb_literal};
use super::VbaConverter;
use crate::models::slide::{
    BarItem, BulletCard, CardItem, CycleItem, DiagramShape, DiagramShapeKind, FaqItem, KpiItem,
    Milestone, ProgressItem, PyramidLevel, StatRow,
};

/// Vertical stack of numbered step boxes with down-arrow connectors.
/// Box height shrinks with step count to keep four steps inside the fixed
/// content area; at most 4 steps render.
pub(super) fn write_process(out: &mut String, conv: &VbaConverter, steps: &[String]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::ProcessSlide, "area");
    let steps = &steps[..steps.len().min(4)];
    if steps.is_empty() {
        return Ok(());
    }
    let n = steps.len();
    let colors = descending_ramp(conv.primary_rgb(), n, 0.5);

    let box_h_px = match n {
        0..=2 => 100.0,
        3 => 80.0,
        _ => 65.0,
    };
    let arrow_h_px = match n {
        0..=2 => 25.0,
        3 => 20.0,
        _ => 15.0,
    };
    let font_size = geometry.fonts.body;

    let box_h = geometry.px_to_pt(box_h_px);
    let arrow_h = geometry.px_to_pt(arrow_h_px);
    let header_w = geometry.px_to_pt(120.0);
    let body_left = geometry.px_to_pt(area.left) + header_w;
    let body_w = geometry.px_to_pt(area.width) - header_w;
    let panel = rgb_literal(PANEL_GRAY);

    let mut y = geometry.px_to_pt(area.top + 10.0);
    for (i, step) in steps.iter().enumerate() {
        // Numbered header box
        add_shape(out, MSO_RECTANGLE, geometry.px_to_pt(area.left), y, header_w, box_h)?;
        set_fill(out, &rgb_call(colors[i]))?;
        hide_outline(out)?;
        set_text(out, &format!("STEP {}", i + 1))?;
        set_font_color(out, "RGB(255, 255, 255)")?;
        set_font_size(out, font_size)?;
        set_font_bold(out)?;
        set_alignment(out, ALIGN_CENTER)?;

        // Body panel
        add_shape(out, MSO_RECTANGLE, body_left, y, body_w, box_h)?;
        set_fill(out, &panel)?;
        hide_outline(out)?;

        // Step text over the panel
        add_textbox(
            out,
            body_left + geometry.px_to_pt(20.0),
            y,
            body_w - geometry.px_to_pt(40.0),
            box_h,
        )?;
        set_text(out, &escape_vba(step))?;
        set_font_size(out, font_size)?;
        set_font_name(out, conv.font())?;
        set_font_color(out, &rgb_call(conv.body_rgb()))?;
        set_autosize(out)?;

        y += box_h;
        if i < n - 1 {
            let arrow_left = geometry.px_to_pt(area.left) + header_w / 2.0 - geometry.px_to_pt(8.0);
            add_shape(out, MSO_DOWN_ARROW, arrow_left, y, geometry.px_to_pt(16.0), arrow_h)?;
            set_fill(out, &panel)?;
            hide_outline(out)?;
            y += arrow_h;
        }
    }
    Ok(())
}

/// Milestones spaced evenly along a horizontal axis, cards alternating
/// above/below the line to avoid overlap, each with a connector, a dot
/// marker on the ramp color, and a two-part date/label card.
pub(super) fn write_timeline(out: &mut String, conv: &VbaConverter, milestones: &[Milestone]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::TimelineSlide, "area");
    if milestones.is_empty() {
        return Ok(());
    }
    let n = milestones.len();
    let colors = descending_ramp(conv.primary_rgb(), n, 0.6);

    let base_y = geometry.px_to_pt(area.top + area.height * 0.5);
    let inner_margin = geometry.px_to_pt(80.0);
    let left_x = geometry.px_to_pt(area.left) + inner_margin;
    let right_x = geometry.px_to_pt(area.left + area.width) - inner_margin;

    add_line(out, left_x, base_y, right_x, base_y)?;
    set_outline_color(out, "RGB(200, 200, 200)")?;
    set_line_weight(out, 2)?;

    let gap = if n > 1 { (right_x - left_x) / (n - 1) as f64 } else { 0.0 };
    let card_w = geometry.px_to_pt(180.0);
    let v_offset = geometry.px_to_pt(40.0);
    let header_h = geometry.px_to_pt(28.0);
    let body_h = geometry.px_to_pt(80.0);
    let panel = rgb_literal(PANEL_GRAY);

    for (i, milestone) in milestones.iter().enumerate() {
        let x = left_x + gap * i as f64;
        let is_above = i % 2 == 0;
        let card_left = x - card_w / 2.0;
        let card_top = if is_above {
            base_y - v_offset - header_h - body_h
        } else {
            base_y + v_offset
        };

        // Connector from card to axis
        let (conn_y1, conn_y2) = if is_above {
            (card_top + header_h + body_h, base_y)
        } else {
            (base_y, card_top)
        };
        add_line(out, x, conn_y1, x, conn_y2)?;
        set_outline_color(out, "RGB(150, 150, 150)")?;

        // Dot marker on the axis
        let dot_r = geometry.px_to_pt(10.0);
        add_shape(out, MSO_OVAL, x - dot_r / 2.0, base_y - dot_r / 2.0, dot_r, dot_r)?;
        set_fill(out, &rgb_call(colors[i]))?;
        hide_outline(out)?;

        // Colored date header
        add_shape(out, MSO_RECTANGLE, card_left, card_top, card_w, header_h)?;
        set_fill(out, &rgb_call(colors[i]))?;
        hide_outline(out)?;
        set_text(out, &escape_vba(&milestone.date))?;
        set_font_name(out, conv.font())?;
        set_font_color(out, "RGB(255, 255, 255)")?;
        set_font_bold(out)?;
        set_alignment(out, ALIGN_CENTER)?;

        // Gray label body
        add_shape(out, MSO_RECTANGLE, card_left, card_top + header_h, card_w, body_h)?;
        set_fill(out, &panel)?;
        hide_outline(out)?;
        set_text(out, &escape_vba(&milestone.label))?;
        set_font_name(out, conv.font())?;
        set_font_color(out, &rgb_call(conv.body_rgb()))?;
        set_font_size(out, geometry.fonts.body)?;
        set_alignment(out, ALIGN_CENTER)?;
        set_autosize(out)?;
    }
    Ok(())
}

/// Up to 4 items at fixed compass positions (right, bottom, left, top)
/// around the content area's ellipse center, all on the primary color.
pub(super) fn write_cycle(out: &mut String, conv: &VbaConverter, items: &[CycleItem]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::CycleSlide, "body");
    let items = &items[..items.len().min(4)];
    if items.is_empty() {
        return Ok(());
    }

    let center_x = geometry.px_to_pt(area.left + area.width / 2.0);
    let center_y = geometry.px_to_pt(area.top + area.height / 2.0);
    let radius_x = geometry.px_to_pt(area.width / 3.2);
    let radius_y = geometry.px_to_pt(area.height / 2.6);
    let card_w = geometry.px_to_pt(200.0);
    let card_h = geometry.px_to_pt(90.0);

    let positions = [
        (center_x + radius_x, center_y),
        (center_x, center_y + radius_y),
        (center_x - radius_x, center_y),
        (center_x, center_y - radius_y),
    ];
    let colors = cycle_colors(conv.primary_rgb(), items.len());

    for (i, item) in items.iter().enumerate() {
        let (pos_x, pos_y) = positions[i];
        add_shape(
            out,
            MSO_ROUNDED_RECTANGLE,
            pos_x - card_w / 2.0,
            pos_y - card_h / 2.0,
            card_w,
            card_h,
        )?;
        set_fill(out, &rgb_call(colors[i]))?;
        hide_outline(out)?;

        let sub = match item.sub_label.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => s.to_string(),
            None => format!("Phase {}", i + 1),
        };
        set_text(
            out,
            &format!("{}\" & vbCrLf & \"{}", escape_vba(&sub), escape_vba(&item.label)),
        )?;
        set_font_name(out, conv.font())?;
        set_font_color(out, "RGB(255, 255, 255)")?;
        set_alignment(out, ALIGN_CENTER)?;
        set_autosize(out)?;
    }
    Ok(())
}

/// Grid of rounded cards; 3 columns for more than 4 items, otherwise 2.
/// Cell sizes divide the area minus fixed gaps by the row/column count.
pub(super) fn write_cards(out: &mut String, conv: &VbaConverter, items: &[CardItem]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::CardsSlide, "gridArea");
    if items.is_empty() {
        return Ok(());
    }
    let cols = if items.len() > 4 { 3 } else { 2 };
    let rows = items.len().div_ceil(cols);
    let gap = geometry.px_to_pt(16.0);
    let area_w = geometry.px_to_pt(area.width);
    let area_h = geometry.px_to_pt(area.height);
    let card_w = (area_w - gap * (cols - 1) as f64) / cols as f64;
    let card_h = (area_h - gap * (rows - 1) as f64) / rows as f64;
    let panel = rgb_literal(PANEL_GRAY);

    for (i, item) in items.iter().enumerate() {
        let r = i / cols;
        let c = i % cols;
        let left = geometry.px_to_pt(area.left) + c as f64 * (card_w + gap);
        let top = geometry.px_to_pt(area.top) + r as f64 * (card_h + gap);

        add_shape(out, MSO_ROUNDED_RECTANGLE, left, top, card_w, card_h)?;
        set_fill(out, &panel)?;
        set_outline_color(out, &panel)?;
        set_text(
            out,
            &format!(
                "{}\" & vbCrLf & vbCrLf & \"{}",
                escape_vba(&item.title),
                escape_vba(&item.desc)
            ),
        )?;
        set_font_name(out, conv.font())?;
        set_font_color(out, &rgb_call(conv.body_rgb()))?;
        set_alignment(out, ALIGN_CENTER)?;
        set_autosize(out)?;
    }
    Ok(())
}

/// Width of pyramid level `i` (0 = apex) out of `n` levels: shrinks linearly
/// by `base / n` per level from the full base width.
pub(super) fn pyramid_level_width(base: f64, n: usize, i: usize) -> f64 {
    base - (base / n as f64) * (n - 1 - i) as f64
}

/// Up to 4 stacked levels narrowing toward the apex, each paired with a
/// description column on the right; shading follows the ascending ramp
/// (apex = base color).
pub(super) fn write_pyramid(out: &mut String, conv: &VbaConverter, levels: &[PyramidLevel]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::PyramidSlide, "pyramidArea");
    let levels = &levels[..levels.len().min(4)];
    if levels.is_empty() {
        return Ok(());
    }
    let n = levels.len();
    let colors = ascending_ramp(conv.primary_rgb(), n, 0.6);

    let level_h = geometry.px_to_pt(70.0);
    let gap = geometry.px_to_pt(2.0);
    let total_h = level_h * n as f64 + gap * (n - 1) as f64;
    let start_y = geometry.px_to_pt(area.top) + (geometry.px_to_pt(area.height) - total_h) / 2.0;
    let pyramid_w = geometry.px_to_pt(480.0);
    let center_x = geometry.px_to_pt(area.left) + pyramid_w / 2.0;
    let text_col_left = geometry.px_to_pt(area.left) + pyramid_w + geometry.px_to_pt(30.0);
    let text_col_w = geometry.px_to_pt(400.0);

    for (i, level) in levels.iter().enumerate() {
        let level_w = pyramid_level_width(pyramid_w, n, i);
        let level_x = center_x - level_w / 2.0;
        let level_y = start_y + i as f64 * (level_h + gap);

        add_shape(out, MSO_ROUNDED_RECTANGLE, level_x, level_y, level_w, level_h)?;
        set_fill(out, &rgb_call(colors[i]))?;
        hide_outline(out)?;
        set_text(out, &escape_vba(&level.title))?;
        set_font_name(out, conv.font())?;
        set_font_color(out, "RGB(255, 255, 255)")?;
        set_font_bold(out)?;
        set_alignment(out, ALIGN_CENTER)?;

        add_textbox(out, text_col_left, level_y, text_col_w, level_h)?;
        set_text(out, &escape_vba(&level.description))?;
        set_font_name(out, conv.font())?;
        set_font_size(out, geometry.fonts.body)?;
        set_font_color(out, &rgb_call(conv.body_rgb()))?;
        set_autosize(out)?;
    }
    Ok(())
}

/// Two parallel boxes, each with a centered title and a bulletless item list
/// in matched vertical rhythm.
pub(super) fn write_compare(
    out: &mut String,
    conv: &VbaConverter,
    left_title: &str,
    right_title: &str,
    left_items: &[String],
    right_items: &[String],
) -> Result<()> {
    let geometry = conv.geometry();
    let halves = [
        (geometry.region(LayoutKey::CompareSlide, "leftBox"), left_title, left_items),
        (geometry.region(LayoutKey::CompareSlide, "rightBox"), right_title, right_items),
    ];
    for (rect, title, items) in halves {
        let left = geometry.px_to_pt(rect.left);
        let top = geometry.px_to_pt(rect.top);
        let width = geometry.px_to_pt(rect.width);
        let height = geometry.px_to_pt(rect.height);

        add_shape(out, MSO_RECTANGLE, left, top, width, height)?;
        set_fill(out, &rgb_literal(PANEL_GRAY))?;
        hide_outline(out)?;

        add_textbox(out, left, top, width, 40.0)?;
        set_text(out, &escape_vba(title))?;
        set_font_name(out, conv.font())?;
        set_font_bold(out)?;
        set_alignment(out, ALIGN_CENTER)?;

        add_textbox(out, left + 10.0, top + 40.0, width - 20.0, height - 50.0)?;
        set_text(out, &escape_vba(&items.join("\n")))?;
        set_font_name(out, conv.font())?;
        set_font_size(out, geometry.fonts.body)?;
    }
    Ok(())
}

/// Arbitrary explicitly-positioned shapes from the record's own coordinates.
pub(super) fn write_diagram(out: &mut String, conv: &VbaConverter, shapes: &[DiagramShape]) -> Result<()> {
    let geometry = conv.geometry();
    for shape in shapes {
        let mso = match shape.shape_type {
            DiagramShapeKind::Rect => MSO_RECTANGLE,
            DiagramShapeKind::Oval => MSO_OVAL,
            DiagramShapeKind::RoundedRect => MSO_ROUNDED_RECTANGLE,
        };
        add_shape(
            out,
            mso,
            geometry.px_to_pt(shape.x),
            geometry.px_to_pt(shape.y),
            geometry.px_to_pt(shape.w),
            geometry.px_to_pt(shape.h),
        )?;
        set_fill(out, &rgb_call(conv.primary_rgb()))?;
        set_text(out, &escape_vba(&shape.label))?;
        set_font_name(out, conv.font())?;
        set_font_color(out, "RGB(255, 255, 255)")?;
    }
    Ok(())
}

/// Horizontal chain of boxes with right-arrows, centered in the content
/// area; total width is derived from box width, gap, and count.
pub(super) fn write_flow_chart(out: &mut String, conv: &VbaConverter, steps: &[String]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::FlowChartSlide, "area");
    if steps.is_empty() {
        return Ok(());
    }
    let n = steps.len();
    let box_w = geometry.px_to_pt(150.0);
    let box_h = geometry.px_to_pt(60.0);
    let gap = geometry.px_to_pt(30.0);

    let total_w = n as f64 * box_w + (n - 1) as f64 * gap;
    let center_x = geometry.px_to_pt(area.left + area.width / 2.0);
    let start_x = center_x - total_w / 2.0;
    let start_y = geometry.px_to_pt(area.top) + geometry.px_to_pt(50.0);

    for (i, step) in steps.iter().enumerate() {
        let x = start_x + i as f64 * (box_w + gap);
        add_shape(out, MSO_ROUNDED_RECTANGLE, x, start_y, box_w, box_h)?;
        set_fill(out, &rgb_call(conv.primary_rgb()))?;
        set_text(out, &escape_vba(step))?;
        set_font_name(out, conv.font())?;
        set_font_color(out, "RGB(255, 255, 255)")?;

        if i < n - 1 {
            let arrow_y = start_y + box_h / 2.0 - geometry.px_to_pt(5.0);
            add_shape(out, MSO_RIGHT_ARROW, x + box_w, arrow_y, gap, geometry.px_to_pt(10.0))?;
            set_fill(out, &rgb_literal(PANEL_GRAY))?;
        }
    }
    Ok(())
}

/// Ascending staircase: bar height grows linearly with index, fill lightens
/// with each step.
pub(super) fn write_step_up(out: &mut String, conv: &VbaConverter, steps: &[String]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::StepUpSlide, "area");
    if steps.is_empty() {
        return Ok(());
    }
    let n = steps.len();
    let step_w = geometry.px_to_pt(area.width) / n as f64;
    let step_h = geometry.px_to_pt(50.0);
    let base_y = geometry.px_to_pt(area.top) + geometry.px_to_pt(area.height);

    for (i, step) in steps.iter().enumerate() {
        let h = (i + 1) as f64 * step_h;
        let x = geometry.px_to_pt(area.left) + i as f64 * step_w;
        add_shape(out, MSO_RECTANGLE, x, base_y - h, step_w, h)?;
        set_fill(out, &rgb_call(conv.primary_rgb().lighten(0.1 * i as f64)))?;
        set_text(out, &escape_vba(step))?;
        set_font_name(out, conv.font())?;
        set_font_color(out, "RGB(255, 255, 255)")?;
    }
    Ok(())
}

/// Gray image placeholder on the left, text column on the right.
pub(super) fn write_image_text(
    out: &mut String,
    conv: &VbaConverter,
    image_desc: &str,
    text: &str,
) -> Result<()> {
    let geometry = conv.geometry();
    let image_area = geometry.region(LayoutKey::ImageTextSlide, "imageArea");
    let text_area = geometry.region(LayoutKey::ImageTextSlide, "textArea");

    add_shape(
        out,
        MSO_RECTANGLE,
        geometry.px_to_pt(image_area.left),
        geometry.px_to_pt(image_area.top),
        geometry.px_to_pt(image_area.width),
        geometry.px_to_pt(image_area.height),
    )?;
    set_fill(out, "RGB(230, 230, 230)")?;
    set_text(out, &format!("[IMAGE: {}]", escape_vba(image_desc)))?;
    set_font_name(out, conv.font())?;

    add_textbox(
        out,
        geometry.px_to_pt(text_area.left),
        geometry.px_to_pt(text_area.top),
        geometry.px_to_pt(text_area.width),
        geometry.px_to_pt(text_area.height),
    )?;
    set_text(out, &escape_vba(text))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, geometry.fonts.body)?;
    Ok(())
}

/// One (rows+1)×columns grid with a primary-filled white-text header row.
pub(super) fn write_table(
    out: &mut String,
    conv: &VbaConverter,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::TableSlide, "tableArea");
    if headers.is_empty() {
        return Ok(());
    }
    let num_cols = headers.len();
    writeln!(
        out,
        "    Set pptShape = pptSlide.Shapes.AddTable({}, {}, {}, {}, {}, {})",
        rows.len() + 1,
        num_cols,
        geometry.px_to_pt(area.left),
        geometry.px_to_pt(area.top),
        geometry.px_to_pt(area.width),
        geometry.px_to_pt(200.0),
    )?;

    for (c, header) in headers.iter().enumerate() {
        let cell = format!("pptShape.Table.Cell(1, {})", c + 1);
        writeln!(out, "    {cell}.Shape.TextFrame.TextRange.Text = \"{}\"", escape_vba(header))?;
        writeln!(out, "    {cell}.Shape.TextFrame.TextRange.Font.Name = \"{}\"", conv.font())?;
        writeln!(out, "    {cell}.Shape.Fill.ForeColor.RGB = {}", rgb_call(conv.primary_rgb()))?;
        writeln!(out, "    {cell}.Shape.TextFrame.TextRange.Font.Color.RGB = RGB(255, 255, 255)")?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().take(num_cols).enumerate() {
            let cell = format!("pptShape.Table.Cell({}, {})", r + 2, c + 1);
            writeln!(out, "    {cell}.Shape.TextFrame.TextRange.Text = \"{}\"", escape_vba(value))?;
            writeln!(out, "    {cell}.Shape.TextFrame.TextRange.Font.Name = \"{}\"", conv.font())?;
        }
    }
    Ok(())
}

/// Label, gray track and primary fill bar per item; fill width is the track
/// width scaled by percent/100.
pub(super) fn write_progress(out: &mut String, conv: &VbaConverter, items: &[ProgressItem]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::ProgressSlide, "area");
    let bar_h = geometry.px_to_pt(30.0);
    let gap = geometry.px_to_pt(20.0);
    let start_y = geometry.px_to_pt(area.top);
    let left = geometry.px_to_pt(area.left);
    let track_w = geometry.px_to_pt(area.width);

    for (i, item) in items.iter().enumerate() {
        let y = start_y + i as f64 * (bar_h + gap + 30.0);

        add_textbox(out, left, y, geometry.px_to_pt(300.0), 20.0)?;
        set_text(out, &escape_vba(&item.label))?;

        let y_bar = y + 25.0;
        add_shape(out, MSO_ROUNDED_RECTANGLE, left, y_bar, track_w, bar_h)?;
        set_fill(out, "RGB(230, 230, 230)")?;

        let fill_w = track_w * (item.percent / 100.0);
        add_shape(out, MSO_ROUNDED_RECTANGLE, left, y_bar, fill_w, bar_h)?;
        set_fill(out, &rgb_call(conv.primary_rgb()))?;
    }
    Ok(())
}

/// Large italic quote between typographic quotes, author right-aligned below.
pub(super) fn write_quote(out: &mut String, conv: &VbaConverter, quote: &str, author: &str) -> Result<()> {
    let geometry = conv.geometry();
    let quote_area = geometry.region(LayoutKey::QuoteSlide, "quoteArea");
    let author_area = geometry.region(LayoutKey::QuoteSlide, "authorArea");

    add_textbox(
        out,
        geometry.px_to_pt(quote_area.left),
        geometry.px_to_pt(quote_area.top),
        geometry.px_to_pt(quote_area.width),
        geometry.px_to_pt(quote_area.height),
    )?;
    set_text(out, &format!("\u{201c}{}\u{201d}", escape_vba(quote)))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, 32)?;
    set_font_italic(out)?;
    set_alignment(out, ALIGN_CENTER)?;

    add_textbox(
        out,
        geometry.px_to_pt(author_area.left),
        geometry.px_to_pt(author_area.top),
        geometry.px_to_pt(author_area.width),
        geometry.px_to_pt(author_area.height),
    )?;
    set_text(out, &format!("\u{2014} {}", escape_vba(author)))?;
    set_font_name(out, conv.font())?;
    set_alignment(out, ALIGN_RIGHT)?;
    Ok(())
}

/// Fixed 3-column grid of metric tiles: big bold primary value over a label.
pub(super) fn write_kpi(out: &mut String, conv: &VbaConverter, items: &[KpiItem]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::KpiSlide, "area");
    if items.is_empty() {
        return Ok(());
    }
    let cols = 3usize;
    let gap = geometry.px_to_pt(20.0);
    let w = (geometry.px_to_pt(area.width) - gap * (cols - 1) as f64) / cols as f64;
    let h = geometry.px_to_pt(150.0);

    for (i, kpi) in items.iter().enumerate() {
        let r = i / cols;
        let c = i % cols;
        let x = geometry.px_to_pt(area.left) + c as f64 * (w + gap);
        let y = geometry.px_to_pt(area.top) + r as f64 * (h + gap);

        add_shape(out, MSO_ROUNDED_RECTANGLE, x, y, w, h)?;
        set_fill(out, "RGB(245, 245, 245)")?;

        add_textbox(out, x, y + 10.0, w, h / 2.0)?;
        set_text(out, &escape_vba(&kpi.value))?;
        set_font_name(out, conv.font())?;
        set_font_size(out, 36)?;
        set_font_bold(out)?;
        set_alignment(out, ALIGN_CENTER)?;
        set_font_color(out, &rgb_call(conv.primary_rgb()))?;

        add_textbox(out, x, y + h / 2.0, w, h / 2.0)?;
        set_text(out, &escape_vba(&kpi.label))?;
        set_font_name(out, conv.font())?;
        set_alignment(out, ALIGN_CENTER)?;
    }
    Ok(())
}

/// Two side-by-side bordered cards, each a bold title over a bulleted point
/// list; anything past the second card is dropped.
pub(super) fn write_bullet_cards(out: &mut String, conv: &VbaConverter, cards: &[BulletCard]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::BulletCardsSlide, "area");
    let cards = &cards[..cards.len().min(2)];
    if cards.is_empty() {
        return Ok(());
    }
    let cols = 2usize;
    let gap = geometry.px_to_pt(20.0);
    let w = (geometry.px_to_pt(area.width) - gap * (cols - 1) as f64) / cols as f64;
    let h = geometry.px_to_pt(300.0);
    let y = geometry.px_to_pt(area.top);

    for (i, card) in cards.iter().enumerate() {
        let x = geometry.px_to_pt(area.left) + i as f64 * (w + gap);

        add_shape(out, MSO_RECTANGLE, x, y, w, h)?;
        set_fill(out, "RGB(250, 250, 250)")?;
        set_outline_color(out, &rgb_call(conv.primary_rgb()))?;

        add_textbox(out, x + 10.0, y + 10.0, w - 20.0, 40.0)?;
        set_text(out, &escape_vba(&card.title))?;
        set_font_name(out, conv.font())?;
        set_font_bold(out)?;

        let points = card
            .points
            .iter()
            .map(|p| format!("\u{30fb}{p}"))
            .collect::<Vec<_>>()
            .join("\n");
        add_textbox(out, x + 10.0, y + 50.0, w - 20.0, h - 60.0)?;
        set_text(out, &escape_vba(&points))?;
        set_font_name(out, conv.font())?;
    }
    Ok(())
}

/// Alternating bold Q. / plain A. lines down the content area.
pub(super) fn write_faq(out: &mut String, conv: &VbaConverter, items: &[FaqItem]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::FaqSlide, "area");
    let left = geometry.px_to_pt(area.left);
    let w = geometry.px_to_pt(area.width);
    let mut y = geometry.px_to_pt(area.top);

    for item in items {
        add_textbox(out, left, y, w, 30.0)?;
        set_text(out, &format!("Q. {}", escape_vba(&item.question)))?;
        set_font_name(out, conv.font())?;
        set_font_bold(out)?;
        set_font_color(out, &rgb_call(conv.primary_rgb()))?;
        y += 30.0;

        add_textbox(out, left, y, w, 40.0)?;
        set_text(out, &format!("A. {}", escape_vba(&item.answer)))?;
        set_font_name(out, conv.font())?;
        y += 50.0;
    }
    Ok(())
}

/// Column titles over two value columns with a shared center label column;
/// left values right-aligned, right values left-aligned, both bold.
pub(super) fn write_stats_compare(
    out: &mut String,
    conv: &VbaConverter,
    left_title: &str,
    right_title: &str,
    stats: &[StatRow],
) -> Result<()> {
    let geometry = conv.geometry();
    if stats.is_empty() {
        return Ok(());
    }
    let left_box = geometry.region(LayoutKey::StatsCompareSlide, "leftBox");
    let right_box = geometry.region(LayoutKey::StatsCompareSlide, "rightBox");

    for (rect, title) in [(left_box, left_title), (right_box, right_title)] {
        add_textbox(
            out,
            geometry.px_to_pt(rect.left),
            geometry.px_to_pt(rect.top) - 30.0,
            geometry.px_to_pt(rect.width),
            30.0,
        )?;
        set_text(out, &escape_vba(title))?;
        set_font_name(out, conv.font())?;
        set_alignment(out, ALIGN_CENTER)?;
    }

    let mut y = geometry.px_to_pt(left_box.top);
    let h = geometry.px_to_pt(50.0);
    for stat in stats {
        add_textbox(out, geometry.px_to_pt(460.0), y, geometry.px_to_pt(200.0), h)?;
        set_text(out, &escape_vba(&stat.label))?;
        set_font_name(out, conv.font())?;
        set_alignment(out, ALIGN_CENTER)?;

        add_textbox(out, geometry.px_to_pt(left_box.left), y, geometry.px_to_pt(left_box.width), h)?;
        set_text(out, &escape_vba(&stat.left_value))?;
        set_font_name(out, conv.font())?;
        set_alignment(out, ALIGN_RIGHT)?;
        set_font_bold(out)?;

        add_textbox(out, geometry.px_to_pt(right_box.left), y, geometry.px_to_pt(right_box.width), h)?;
        set_text(out, &escape_vba(&stat.right_value))?;
        set_font_name(out, conv.font())?;
        set_alignment(out, ALIGN_LEFT)?;
        set_font_bold(out)?;

        y += h + 10.0;
    }
    Ok(())
}

/// Two stacked horizontal bars per item, scaled linearly against an assumed
/// fixed maximum of 100. Out-of-range values simply over/undershoot the
/// base width; this mirrors the documented default rather than validated
/// behavior.
pub(super) fn write_bar_compare(out: &mut String, conv: &VbaConverter, items: &[BarItem]) -> Result<()> {
    let geometry = conv.geometry();
    let area = geometry.region(LayoutKey::BarCompareSlide, "area");
    if items.is_empty() {
        return Ok(());
    }
    let left = geometry.px_to_pt(area.left);
    let mut y = geometry.px_to_pt(area.top);
    let max_value = 100.0;
    let base_w = geometry.px_to_pt(300.0);

    for item in items {
        add_textbox(out, left, y, geometry.px_to_pt(area.width), 20.0)?;
        set_text(out, &escape_vba(&item.label))?;
        set_font_name(out, conv.font())?;
        y += 25.0;

        add_shape(out, MSO_RECTANGLE, left, y, base_w * (item.value_a / max_value), 20.0)?;
        set_fill(out, &rgb_call(conv.primary_rgb()))?;

        add_shape(out, MSO_RECTANGLE, left, y + 25.0, base_w * (item.value_b / max_value), 20.0)?;
        set_fill(out, "RGB(150, 150, 150)")?;

        y += 60.0;
    }
    Ok(())
}

/// Fallback content body: one textbox with every point as a bulleted line.
pub(super) fn write_content(out: &mut String, conv: &VbaConverter, points: &[String]) -> Result<()> {
    let geometry = conv.geometry();
    let body = geometry.region(LayoutKey::ContentSlide, "body");
    if points.is_empty() {
        return Ok(());
    }
    let text = points
        .iter()
        .map(|p| format!("\u{30fb}{p}"))
        .collect::<Vec<_>>()
        .join("\n");

    add_textbox(
        out,
        geometry.px_to_pt(body.left),
        geometry.px_to_pt(body.top),
        geometry.px_to_pt(body.width),
        geometry.px_to_pt(body.height),
    )?;
    set_text(out, &escape_vba(&text))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, geometry.fonts.body)?;
    set_font_color(out, &rgb_call(conv.body_rgb()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::pyramid_level_width;

    #[test]
    fn pyramid_widths_strictly_increase_toward_the_base() {
        for n in 1..=4 {
            let widths: Vec<f64> = (0..n).map(|i| pyramid_level_width(480.0, n, i)).collect();
            assert!(widths.windows(2).all(|w| w[0] < w[1]), "widths {widths:?}");
            assert_eq!(*widths.last().unwrap(), 480.0);
            assert_eq!(widths[0], 480.0 / n as f64);
        }
    }
}
