//! Script scaffolding: macro prologue/epilogue, per-slide opening, the shared
//! content header, and the low-level drawing-instruction writers used by the
//! per-kind layout code.

use std::fmt::Write;

use super::constants::{Geometry, LayoutKey};
use super::error::Result;
use super::utils::{escape_vba, rgb_call};
use super::VbaConverter;
use crate::models::slide::SlideRecord;

// MsoAutoShapeType / alignment values understood by the PowerPoint host.
pub(super) const MSO_RECTANGLE: u32 = 1;
pub(super) const MSO_ROUNDED_RECTANGLE: u32 = 5;
pub(super) const MSO_OVAL: u32 = 9;
pub(super) const MSO_RIGHT_ARROW: u32 = 33;
pub(super) const MSO_DOWN_ARROW: u32 = 66;

pub(super) const ALIGN_LEFT: u32 = 1;
pub(super) const ALIGN_CENTER: u32 = 2;
pub(super) const ALIGN_RIGHT: u32 = 3;

// --- Macro skeleton ---

pub(super) fn write_prologue(out: &mut String, geometry: &Geometry) -> Result<()> {
    writeln!(out, "Sub CreateCustomPresentation()")?;
    writeln!(out, "    Dim pptApp As Object")?;
    writeln!(out, "    Dim pptPres As Object")?;
    writeln!(out, "    Dim pptSlide As Object")?;
    writeln!(out, "    Dim pptShape As Object")?;
    writeln!(out, "    Dim slideIndex As Integer")?;
    writeln!(out)?;
    writeln!(out, "    Set pptApp = CreateObject(\"PowerPoint.Application\")")?;
    writeln!(out, "    pptApp.Visible = True")?;
    writeln!(out, "    Set pptPres = pptApp.Presentations.Add")?;
    writeln!(out)?;
    writeln!(out, "    ' Set to A4 Size")?;
    writeln!(out, "    pptPres.PageSetup.SlideWidth = {}", geometry.slide_width_pt)?;
    writeln!(out, "    pptPres.PageSetup.SlideHeight = {}", geometry.slide_height_pt)?;
    writeln!(out)?;
    Ok(())
}

pub(super) fn write_epilogue(out: &mut String) -> Result<()> {
    writeln!(out, "    MsgBox \"Presentation Created!\", vbInformation")?;
    writeln!(out, "End Sub")?;
    Ok(())
}

/// Opens slide `index` (zero-based) on a blank layout with a white background.
pub(super) fn write_slide_open(out: &mut String, index: usize, kind_key: &str) -> Result<()> {
    writeln!(out, "    ' === Slide {}: {} ===", index + 1, kind_key)?;
    writeln!(
        out,
        "    Set pptSlide = pptPres.Slides.Add(pptPres.Slides.Count + 1, 12) ' 12 = ppLayoutBlank"
    )?;
    writeln!(out, "    pptSlide.FollowMasterBackground = msoFalse")?;
    writeln!(out, "    pptSlide.Background.Fill.ForeColor.RGB = RGB(255, 255, 255)")?;
    Ok(())
}

// --- Low-level instruction writers ---
// Each targets the `pptShape` cursor variable, mirroring how a hand-written
// macro would be structured.

pub(super) fn add_textbox(out: &mut String, left: f64, top: f64, width: f64, height: f64) -> Result<()> {
    writeln!(
        out,
        "    Set pptShape = pptSlide.Shapes.AddTextbox(1, {left}, {top}, {width}, {height})"
    )?;
    Ok(())
}

pub(super) fn add_shape(out: &mut String, shape: u32, left: f64, top: f64, width: f64, height: f64) -> Result<()> {
    writeln!(
        out,
        "    Set pptShape = pptSlide.Shapes.AddShape({shape}, {left}, {top}, {width}, {height})"
    )?;
    Ok(())
}

pub(super) fn add_line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
    writeln!(out, "    Set pptShape = pptSlide.Shapes.AddLine({x1}, {y1}, {x2}, {y2})")?;
    Ok(())
}

/// Sets the shape text to a literal. `literal` is the full VBA string
/// expression body (already escaped, may contain `" & vbCrLf & "` splices).
pub(super) fn set_text(out: &mut String, literal: &str) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.Text = \"{literal}\"")?;
    Ok(())
}

pub(super) fn set_font_name(out: &mut String, family: &str) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.Font.Name = \"{family}\"")?;
    Ok(())
}

pub(super) fn set_font_size(out: &mut String, size: u32) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.Font.Size = {size}")?;
    Ok(())
}

pub(super) fn set_font_bold(out: &mut String) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.Font.Bold = msoTrue")?;
    Ok(())
}

pub(super) fn set_font_italic(out: &mut String) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.Font.Italic = msoTrue")?;
    Ok(())
}

pub(super) fn set_font_color(out: &mut String, rgb: &str) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.Font.Color.RGB = {rgb}")?;
    Ok(())
}

pub(super) fn set_alignment(out: &mut String, alignment: u32) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame.TextRange.ParagraphFormat.Alignment = {alignment}")?;
    Ok(())
}

pub(super) fn set_autosize(out: &mut String) -> Result<()> {
    writeln!(out, "    pptShape.TextFrame2.AutoSize = 2 ' msoAutoSizeTextToFitShape")?;
    Ok(())
}

pub(super) fn set_fill(out: &mut String, rgb: &str) -> Result<()> {
    writeln!(out, "    pptShape.Fill.ForeColor.RGB = {rgb}")?;
    Ok(())
}

pub(super) fn hide_outline(out: &mut String) -> Result<()> {
    writeln!(out, "    pptShape.Line.Visible = msoFalse")?;
    Ok(())
}

pub(super) fn set_outline_color(out: &mut String, rgb: &str) -> Result<()> {
    writeln!(out, "    pptShape.Line.ForeColor.RGB = {rgb}")?;
    Ok(())
}

pub(super) fn set_line_weight(out: &mut String, weight: u32) -> Result<()> {
    writeln!(out, "    pptShape.Line.Weight = {weight}")?;
    Ok(())
}

// --- Title and section slides (no content header) ---

pub(super) fn write_title_slide(
    out: &mut String,
    conv: &VbaConverter,
    title: &str,
    date: &str,
) -> Result<()> {
    let geometry = conv.geometry();
    let fonts = geometry.fonts;
    let title_rect = geometry.region(LayoutKey::TitleSlide, "title");
    let date_rect = geometry.region(LayoutKey::TitleSlide, "date");

    add_textbox(
        out,
        geometry.px_to_pt(title_rect.left),
        geometry.px_to_pt(title_rect.top),
        geometry.px_to_pt(title_rect.width),
        geometry.px_to_pt(title_rect.height),
    )?;
    set_text(out, &escape_vba(title))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, fonts.title)?;
    set_font_bold(out)?;
    set_font_color(out, &rgb_call(conv.title_rgb()))?;
    set_alignment(out, ALIGN_CENTER)?;
    set_autosize(out)?;

    add_textbox(
        out,
        geometry.px_to_pt(date_rect.left),
        geometry.px_to_pt(date_rect.top),
        geometry.px_to_pt(date_rect.width),
        geometry.px_to_pt(date_rect.height),
    )?;
    set_text(out, &escape_vba(date))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, fonts.date)?;
    set_font_color(out, &rgb_call(conv.body_rgb()))?;
    Ok(())
}

pub(super) fn write_section_slide(
    out: &mut String,
    conv: &VbaConverter,
    title: &str,
    section_no: Option<&str>,
    index: usize,
) -> Result<()> {
    let geometry = conv.geometry();
    let ghost_rect = geometry.region(LayoutKey::SectionSlide, "ghostNum");
    let title_rect = geometry.region(LayoutKey::SectionSlide, "title");

    // Oversized ghost number behind the section title; defaults to the
    // slide's position in the deck.
    let number = match section_no {
        Some(n) => n.to_string(),
        None => index.to_string(),
    };
    add_textbox(
        out,
        geometry.px_to_pt(ghost_rect.left),
        geometry.px_to_pt(ghost_rect.top),
        geometry.px_to_pt(ghost_rect.width),
        geometry.px_to_pt(ghost_rect.height),
    )?;
    set_text(out, &escape_vba(&number))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, 180)?;
    set_font_color(out, "RGB(240, 240, 240)")?;

    add_textbox(
        out,
        geometry.px_to_pt(title_rect.left),
        geometry.px_to_pt(title_rect.top),
        geometry.px_to_pt(title_rect.width),
        geometry.px_to_pt(title_rect.height),
    )?;
    set_text(out, &escape_vba(title))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, geometry.fonts.section_title)?;
    set_font_bold(out)?;
    set_font_color(out, &rgb_call(conv.title_rgb()))?;
    set_autosize(out)?;
    Ok(())
}

/// Shared header of every content-style slide: title textbox, a fixed-width
/// primary-color underline beneath it, optional centered subhead, and the
/// speaker notes attached to the slide's notes placeholder.
pub(super) fn write_common_header(
    out: &mut String,
    conv: &VbaConverter,
    slide: &SlideRecord,
    layout: LayoutKey,
) -> Result<()> {
    let geometry = conv.geometry();
    let title_rect = geometry.region(layout, "title");
    add_textbox(
        out,
        geometry.px_to_pt(title_rect.left),
        geometry.px_to_pt(title_rect.top),
        geometry.px_to_pt(title_rect.width),
        geometry.px_to_pt(title_rect.height),
    )?;
    set_text(out, &escape_vba(&slide.title))?;
    set_font_name(out, conv.font())?;
    set_font_size(out, geometry.fonts.content_title)?;
    set_font_bold(out)?;
    set_font_color(out, &rgb_call(conv.primary_rgb()))?;
    set_alignment(out, ALIGN_CENTER)?;
    set_autosize(out)?;

    let underline = geometry.region(layout, "titleUnderline");
    let line_x = geometry.px_to_pt(underline.left);
    let line_y = geometry.px_to_pt(underline.top);
    add_line(out, line_x, line_y, line_x + geometry.px_to_pt(underline.width), line_y)?;
    set_outline_color(out, &rgb_call(conv.primary_rgb()))?;
    set_line_weight(out, 2)?;

    if let Some(subhead) = slide.subhead.as_deref().filter(|s| !s.is_empty()) {
        let subhead_rect = geometry.region(layout, "subhead");
        add_textbox(
            out,
            geometry.px_to_pt(subhead_rect.left),
            geometry.px_to_pt(subhead_rect.top),
            geometry.px_to_pt(subhead_rect.width),
            geometry.px_to_pt(subhead_rect.height),
        )?;
        set_text(out, &escape_vba(subhead))?;
        set_font_name(out, conv.font())?;
        set_font_size(out, geometry.fonts.subhead)?;
        set_font_bold(out)?;
        set_font_color(out, &rgb_call(conv.title_rgb()))?;
        set_alignment(out, ALIGN_CENTER)?;
    }

    if let Some(notes) = slide.notes.as_deref().filter(|s| !s.is_empty()) {
        writeln!(
            out,
            "    pptSlide.NotesPage.Shapes.Placeholders(2).TextFrame.TextRange.Text = \"{}\"",
            escape_vba(notes)
        )?;
    }

    writeln!(out)?;
    Ok(())
}
