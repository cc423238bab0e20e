//! Document composer.
//!
//! Drives the page-drawing surface: per-page decorations around the planned
//! content, then a second pass that revisits every produced page to stamp
//! the page-number footer and the watermark — the total page count is only
//! known once layout completes, so this cannot stream.

use super::options::RenderOptions;
use super::surface::{Color, FontStyle, PageSurface, TextAlign};
use crate::error::Result;
use crate::layout::{
    content_top, plan, truncate_to, PageBody, PageGeometry, PlannedPage, TableSlice, CELL_PADDING,
    CONTINUED_BASELINE, MARGIN_X, ROW_NUMBER_WIDTH, TITLE_BASELINE,
};
use crate::model::{LineKind, Representation};
use chrono::Local;
use log::warn;

/// Fixed attribution line in the footer band.
const ATTRIBUTION: &str = "Generated with docpress";

/// Indent per structured nesting level, in points.
const INDENT_STEP: f32 = 12.0;

/// Watermark point size.
const WATERMARK_SIZE: f32 = 60.0;

/// Per-format presentation parameters.
///
/// One composer serves every source format; the format only contributes
/// its default title, accent color, and row-count label.
#[derive(Debug, Clone, Copy)]
pub struct FormatProfile {
    /// Title used when the options carry none
    pub default_title: &'static str,
    /// Accent color for the title, table header band, and markup tags
    pub accent: Color,
    /// Label for the content count in the metadata block ("rows", ...)
    pub count_label: &'static str,
}

/// What the composer produced.
#[derive(Debug, Clone, Copy)]
pub struct ComposeSummary {
    /// Total pages drawn
    pub page_count: usize,
    /// Whether the tabular layout was used
    pub is_table: bool,
    /// Content rows or lines across all pages
    pub content_count: usize,
    /// Column count for tables
    pub column_count: Option<usize>,
}

/// Compose the chosen representation onto the surface.
pub fn compose(
    representation: &Representation,
    options: &RenderOptions,
    profile: &FormatProfile,
    surface: &mut dyn PageSurface,
) -> Result<ComposeSummary> {
    let geometry = PageGeometry::new(options.page_size, options.orientation);
    let pages = plan(representation, geometry, options);
    let title = options.title.as_deref().unwrap_or(profile.default_title);

    // Pass 1: page content and top decorations.
    for page in &pages {
        surface.begin_page(geometry.width, geometry.height);
        draw_top(surface, geometry, page, options, profile, representation, title)?;

        let top = content_top(options, page.continuation);
        match &page.body {
            PageBody::Table {
                headers,
                column_widths,
                rows,
            } => draw_table(
                surface,
                geometry,
                options,
                profile,
                headers,
                column_widths,
                rows,
                top,
            ),
            PageBody::Lines(lines) => draw_lines(surface, options, profile, lines, top),
        }
    }

    // Pass 2: revisit each page now that the total is known. The watermark
    // is stamped after everything else so it overlays content.
    let total = surface.page_count();
    for index in 0..total {
        surface.select_page(index)?;
        draw_footer(surface, geometry, options, index + 1, total);
        draw_watermark(surface, geometry, options);
    }

    Ok(ComposeSummary {
        page_count: total,
        is_table: representation.is_table(),
        content_count: representation.content_count(),
        column_count: representation.column_count(),
    })
}

#[allow(clippy::too_many_arguments)]
fn draw_top(
    surface: &mut dyn PageSurface,
    geometry: PageGeometry,
    page: &PlannedPage,
    options: &RenderOptions,
    profile: &FormatProfile,
    representation: &Representation,
    title: &str,
) -> Result<()> {
    if let Some(logo) = &options.logo {
        // Bad image data is a skipped decoration, never a failed conversion.
        if let Err(err) = surface.image(logo, MARGIN_X, 8.0, 32.0, 32.0) {
            warn!("logo skipped: {}", err);
        }
    }

    if let Some(header) = &options.header_text {
        surface.set_font(FontStyle::regular(9.0, Color::GRAY));
        surface.text(
            geometry.width - MARGIN_X,
            24.0,
            header,
            TextAlign::Right,
            0.0,
        );
    }

    if page.continuation {
        surface.set_font(FontStyle::regular(options.font_tier.body(), Color::GRAY));
        surface.text(
            MARGIN_X,
            CONTINUED_BASELINE,
            &format!("{} (continued)", title),
            TextAlign::Left,
            0.0,
        );
        return Ok(());
    }

    surface.set_font(FontStyle::bold(options.font_tier.title(), profile.accent));
    surface.text(MARGIN_X, TITLE_BASELINE, title, TextAlign::Left, 0.0);

    if options.metadata {
        let line_height = options.font_tier.line_height();
        surface.set_font(FontStyle::regular(8.0, Color::GRAY));
        surface.text(
            MARGIN_X,
            TITLE_BASELINE + line_height,
            &format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M")),
            TextAlign::Left,
            0.0,
        );

        let counts = match representation.column_count() {
            Some(columns) => format!(
                "{} {} · {} columns",
                representation.content_count(),
                profile.count_label,
                columns
            ),
            None => format!("{} lines", representation.content_count()),
        };
        surface.text(
            MARGIN_X,
            TITLE_BASELINE + 2.0 * line_height,
            &counts,
            TextAlign::Left,
            0.0,
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_table(
    surface: &mut dyn PageSurface,
    geometry: PageGeometry,
    options: &RenderOptions,
    profile: &FormatProfile,
    headers: &[String],
    column_widths: &[f32],
    rows: &[TableSlice],
    top: f32,
) {
    let tier = options.font_tier;
    let row_height = tier.line_height();
    let header_height = row_height + 4.0;
    let char_width = tier.char_width();
    let data_x = if options.row_numbers {
        MARGIN_X + ROW_NUMBER_WIDTH
    } else {
        MARGIN_X
    };

    // Header band, repeated on every page.
    surface.fill_rect(
        MARGIN_X,
        top,
        geometry.usable_width(),
        header_height,
        profile.accent,
    );
    surface.set_font(FontStyle::bold(tier.header(), Color::WHITE));
    let header_baseline = top + header_height - 5.0;
    if options.row_numbers {
        surface.text(
            MARGIN_X + ROW_NUMBER_WIDTH / 2.0,
            header_baseline,
            "#",
            TextAlign::Center,
            0.0,
        );
    }
    let mut x = data_x;
    for (header, width) in headers.iter().zip(column_widths) {
        let max_chars = cell_capacity(*width, char_width);
        surface.text(
            x + CELL_PADDING,
            header_baseline,
            &truncate_to(header, max_chars),
            TextAlign::Left,
            0.0,
        );
        x += width;
    }

    let mut y = top + header_height;
    for slice in rows {
        // Alternating fill is cosmetic only; it never moves a page break.
        if slice.index % 2 == 1 {
            surface.fill_rect(MARGIN_X, y, geometry.usable_width(), row_height, Color::ROW_FILL);
        }

        let baseline = y + row_height - 3.0;
        if options.row_numbers {
            surface.set_font(FontStyle::regular(tier.body(), Color::GRAY));
            surface.text(
                MARGIN_X + ROW_NUMBER_WIDTH / 2.0,
                baseline,
                &(slice.index + 1).to_string(),
                TextAlign::Center,
                0.0,
            );
        }

        surface.set_font(FontStyle::regular(tier.body(), Color::BLACK));
        let mut x = data_x;
        for (cell, width) in slice.cells.iter().zip(column_widths) {
            let max_chars = cell_capacity(*width, char_width);
            surface.text(
                x + CELL_PADDING,
                baseline,
                &truncate_to(cell, max_chars),
                TextAlign::Left,
                0.0,
            );
            x += width;
        }

        y += row_height;
    }
}

fn cell_capacity(width: f32, char_width: f32) -> usize {
    (((width - 2.0 * CELL_PADDING) / char_width).floor() as usize).max(1)
}

fn draw_lines(
    surface: &mut dyn PageSurface,
    options: &RenderOptions,
    profile: &FormatProfile,
    lines: &[crate::model::DocumentLine],
    top: f32,
) {
    let tier = options.font_tier;
    let row_height = tier.line_height();
    let mut baseline = top + row_height - 4.0;

    for line in lines {
        let (color, bold) = line_style(line.kind, profile);
        let style = if bold {
            FontStyle::bold(tier.body(), color)
        } else {
            FontStyle::regular(tier.body(), color)
        };
        surface.set_font(style);
        surface.text(
            MARGIN_X + line.depth as f32 * INDENT_STEP,
            baseline,
            &line.text,
            TextAlign::Left,
            0.0,
        );
        baseline += row_height;
    }
}

/// Color and emphasis for a structured line. Kind never affects layout.
fn line_style(kind: LineKind, profile: &FormatProfile) -> (Color, bool) {
    match kind {
        LineKind::Declaration => (Color::GRAY, false),
        LineKind::OpenTag | LineKind::CloseTag | LineKind::SelfClosing => (profile.accent, false),
        LineKind::Text => (Color::BLACK, false),
        LineKind::Key => (Color::rgb(31, 87, 148), true),
        LineKind::StringValue => (Color::rgb(0, 128, 0), false),
        LineKind::NumberValue => (Color::rgb(176, 58, 46), false),
        LineKind::BooleanValue => (Color::rgb(142, 68, 173), false),
        LineKind::NullValue => (Color::GRAY, false),
        LineKind::Punctuation => (Color::GRAY, false),
    }
}

fn draw_footer(
    surface: &mut dyn PageSurface,
    geometry: PageGeometry,
    options: &RenderOptions,
    number: usize,
    total: usize,
) {
    let y = geometry.height - 30.0;

    surface.set_font(FontStyle::regular(9.0, Color::GRAY));
    surface.text(
        geometry.width / 2.0,
        y,
        &format!("Page {} of {}", number, total),
        TextAlign::Center,
        0.0,
    );

    if let Some(footer) = &options.footer_text {
        surface.text(geometry.width - MARGIN_X, y, footer, TextAlign::Right, 0.0);
    }

    surface.set_font(FontStyle::regular(7.0, Color::GRAY));
    surface.text(
        MARGIN_X,
        geometry.height - 16.0,
        ATTRIBUTION,
        TextAlign::Left,
        0.0,
    );
}

fn draw_watermark(
    surface: &mut dyn PageSurface,
    geometry: PageGeometry,
    options: &RenderOptions,
) {
    if let Some(text) = &options.watermark {
        surface.set_font(FontStyle::bold(WATERMARK_SIZE, Color::WATERMARK));
        surface.text(
            geometry.width / 2.0,
            geometry.height / 2.0,
            text,
            TextAlign::Center,
            45.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentLine, TableProjection};
    use crate::render::recording::{DrawOp, RecordingSurface};

    const PROFILE: FormatProfile = FormatProfile {
        default_title: "Test Export",
        accent: Color::rgb(52, 152, 219),
        count_label: "rows",
    };

    fn table_rep(rows: usize) -> Representation {
        Representation::Table(TableProjection::from_parts(
            vec!["a".into(), "b".into()],
            (0..rows).map(|i| vec![format!("{}", i), "x".into()]).collect(),
        ))
    }

    #[test]
    fn test_footer_on_every_page() {
        let rep = table_rep(150);
        let options = RenderOptions::new();
        let mut surface = RecordingSurface::new();
        let summary = compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        assert!(summary.page_count > 1);
        for page in 0..summary.page_count {
            assert!(surface.contains_text(page, &format!("Page {} of {}", page + 1, summary.page_count)));
        }
    }

    #[test]
    fn test_title_only_on_first_page() {
        let rep = table_rep(150);
        let options = RenderOptions::new().with_title("Orders");
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        assert_eq!(surface.texts(0)[0], "Orders");
        assert!(surface.contains_text(1, "Orders (continued)"));
        assert!(!surface.contains_text(1, "rows ·"));
    }

    #[test]
    fn test_ragged_row_overflow_cells_not_drawn() {
        let rep = Representation::Table(TableProjection::from_parts(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "x".into()],
                vec!["2".into(), "y".into(), "overflow".into()],
            ],
        ));
        let options = RenderOptions::new();
        let mut surface = RecordingSurface::new();
        let summary = compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        assert_eq!(summary.page_count, 1);
        assert!(surface.contains_text(0, "y"));
        assert!(!surface.contains_text(0, "overflow"));
    }

    #[test]
    fn test_metadata_block_counts() {
        let rep = table_rep(5);
        let options = RenderOptions::new();
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        assert!(surface.contains_text(0, "5 rows · 2 columns"));
        assert!(surface.contains_text(0, "Generated "));
    }

    #[test]
    fn test_metadata_disabled() {
        let rep = table_rep(5);
        let options = RenderOptions::new().with_metadata(false);
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();
        assert!(!surface.contains_text(0, "columns"));
    }

    #[test]
    fn test_watermark_is_last_op() {
        let rep = table_rep(3);
        let options = RenderOptions::new().with_watermark("CONFIDENTIAL");
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        let ops = surface.ops(0);
        match ops.last().unwrap() {
            DrawOp::Text { text, angle, .. } => {
                assert_eq!(text, "CONFIDENTIAL");
                assert_eq!(*angle, 45.0);
            }
            other => panic!("expected watermark text last, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_logo_is_skipped_not_fatal() {
        let rep = table_rep(3);
        let options = RenderOptions::new().with_logo(b"not an image".to_vec());
        let mut surface = RecordingSurface::new();
        let summary = compose(&rep, &options, &PROFILE, &mut surface).unwrap();
        assert_eq!(summary.page_count, 1);
    }

    #[test]
    fn test_row_numbers_column() {
        let rep = table_rep(3);
        let options = RenderOptions::new().with_row_numbers(true);
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        // 1-based row numbers appear alongside the cells.
        assert!(surface.texts(0).iter().any(|t| *t == "1"));
        assert!(surface.texts(0).iter().any(|t| *t == "3"));
    }

    #[test]
    fn test_structured_lines_indented() {
        let rep = Representation::Structured(vec![
            DocumentLine::new(0, "{", LineKind::Punctuation),
            DocumentLine::new(1, "\"a\": 1", LineKind::Key),
            DocumentLine::new(0, "}", LineKind::Punctuation),
        ]);
        let options = RenderOptions::new();
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        let xs: Vec<f32> = surface
            .ops(0)
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, text, .. } if text == "{" || text.starts_with("\"a\"") => {
                    Some(*x)
                }
                _ => None,
            })
            .collect();
        // The key line sits one indent step right of the braces.
        assert!(xs[1] > xs[0]);
    }

    #[test]
    fn test_custom_footer_and_header() {
        let rep = table_rep(2);
        let options = RenderOptions::new()
            .with_header_text("ACME Corp")
            .with_footer_text("internal use only");
        let mut surface = RecordingSurface::new();
        compose(&rep, &options, &PROFILE, &mut surface).unwrap();

        assert!(surface.contains_text(0, "ACME Corp"));
        assert!(surface.contains_text(0, "internal use only"));
        assert!(surface.contains_text(0, ATTRIBUTION));
    }
}
