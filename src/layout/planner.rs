//! Layout planner: distributes content rows and lines onto fixed-size pages.
//!
//! The planner owns all pagination math. Cosmetic concerns (alternating row
//! fills, line colors) are the composer's business and never influence page
//! breaks.

use super::geometry::{PageGeometry, CONTINUED_BASELINE, MARGIN_BOTTOM, TITLE_BASELINE};
use crate::model::{DocumentLine, Representation, TableProjection};
use crate::render::RenderOptions;
use log::debug;

/// Fixed width of the optional leading row-number column.
pub const ROW_NUMBER_WIDTH: f32 = 30.0;

/// Horizontal padding inside one table cell.
pub const CELL_PADDING: f32 = 4.0;

/// Extra height of the repeated header row over a body row.
const HEADER_EXTRA: f32 = 4.0;

/// Gap between the title band and the first content row.
const TITLE_GAP: f32 = 16.0;

/// Gap between the continuation marker and the first content row.
const CONTINUED_GAP: f32 = 20.0;

/// One page of planned content.
#[derive(Debug, Clone)]
pub struct PlannedPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Whether this is a continuation page (renders the lightweight
    /// "(continued)" marker instead of the title/metadata block)
    pub continuation: bool,

    /// Content bound to this page
    pub body: PageBody,
}

/// Content of one planned page.
#[derive(Debug, Clone)]
pub enum PageBody {
    /// Tabular content; the header row repeats on every page.
    Table {
        /// Header cells
        headers: Vec<String>,
        /// Column widths in points, spanning the usable width
        column_widths: Vec<f32>,
        /// Body rows bound to this page
        rows: Vec<TableSlice>,
    },

    /// Structured lines at a fixed line height.
    Lines(Vec<DocumentLine>),
}

/// One body row together with its 0-based index in the source table.
#[derive(Debug, Clone)]
pub struct TableSlice {
    /// Row index after the header (0-based), used for row numbering
    pub index: usize,
    /// Cell texts as parsed
    pub cells: Vec<String>,
}

/// Vertical position where page content starts.
pub fn content_top(options: &RenderOptions, continuation: bool) -> f32 {
    if continuation {
        CONTINUED_BASELINE + CONTINUED_GAP
    } else {
        let metadata_height = if options.metadata {
            2.0 * options.font_tier.line_height() + 6.0
        } else {
            0.0
        };
        TITLE_BASELINE + TITLE_GAP + metadata_height
    }
}

/// Lay the chosen representation out onto a sequence of pages.
pub fn plan(
    representation: &Representation,
    geometry: PageGeometry,
    options: &RenderOptions,
) -> Vec<PlannedPage> {
    let pages = match representation {
        Representation::Table(table) => plan_table(table, geometry, options),
        Representation::Structured(lines) => plan_lines(lines, geometry, options),
    };
    debug!("planned {} page(s)", pages.len());
    pages
}

fn plan_table(
    table: &TableProjection,
    geometry: PageGeometry,
    options: &RenderOptions,
) -> Vec<PlannedPage> {
    let row_height = options.font_tier.line_height();
    let header_height = row_height + HEADER_EXTRA;
    let column_widths = column_widths(table, geometry, options);

    let mut pages = Vec::new();
    let mut index = 0;

    loop {
        let continuation = !pages.is_empty();
        let top = content_top(options, continuation);
        let available = geometry.height - MARGIN_BOTTOM - top - header_height;
        let capacity = ((available / row_height).floor() as usize).max(1);

        let end = (index + capacity).min(table.rows.len());
        let rows = (index..end)
            .map(|i| TableSlice {
                index: i,
                cells: table.rows[i].clone(),
            })
            .collect();

        pages.push(PlannedPage {
            number: pages.len() as u32 + 1,
            continuation,
            body: PageBody::Table {
                headers: table.headers.clone(),
                column_widths: column_widths.clone(),
                rows,
            },
        });

        index = end;
        if index >= table.rows.len() {
            break;
        }
    }

    pages
}

fn plan_lines(
    lines: &[DocumentLine],
    geometry: PageGeometry,
    options: &RenderOptions,
) -> Vec<PlannedPage> {
    let line_height = options.font_tier.line_height();
    let budget = options.orientation.char_budget();

    let mut pages = Vec::new();
    let mut index = 0;

    loop {
        let continuation = !pages.is_empty();
        let top = content_top(options, continuation);
        // Break when the next baseline would fall below the footer band.
        let available = geometry.height - MARGIN_BOTTOM - top;
        let capacity = ((available / line_height).floor() as usize).max(1);

        let end = (index + capacity).min(lines.len());
        let page_lines = lines[index..end]
            .iter()
            .map(|line| DocumentLine {
                depth: line.depth,
                text: truncate_to(&line.text, budget),
                kind: line.kind,
            })
            .collect();

        pages.push(PlannedPage {
            number: pages.len() as u32 + 1,
            continuation,
            body: PageBody::Lines(page_lines),
        });

        index = end;
        if index >= lines.len() {
            break;
        }
    }

    pages
}

/// Column widths spanning the usable width, proportional to content needs.
///
/// Each column's need is the widest cell (or header) in characters at the
/// approximate body glyph width; the needs are then scaled so the grid
/// always fills the width left over after the optional row-number column.
/// The grid has exactly one width per header; overflow cells in ragged
/// rows get no column and are dropped at draw time.
fn column_widths(
    table: &TableProjection,
    geometry: PageGeometry,
    options: &RenderOptions,
) -> Vec<f32> {
    if table.headers.is_empty() {
        return Vec::new();
    }

    let char_width = options.font_tier.char_width();
    let mut widths: Vec<f32> = table
        .headers
        .iter()
        .enumerate()
        .map(|(c, header)| {
            let mut need = header.chars().count();
            for row in &table.rows {
                if let Some(cell) = row.get(c) {
                    need = need.max(cell.chars().count());
                }
            }
            need.max(3) as f32 * char_width + 2.0 * CELL_PADDING
        })
        .collect();

    let mut data_width = geometry.usable_width();
    if options.row_numbers {
        data_width -= ROW_NUMBER_WIDTH;
    }

    let total: f32 = widths.iter().sum();
    if total > 0.0 {
        let scale = data_width / total;
        for w in &mut widths {
            *w *= scale;
        }
    }

    widths
}

/// Clip text to a character budget, appending an ellipsis when cut.
pub fn truncate_to(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Orientation, PageSize};
    use crate::model::LineKind;

    fn options() -> RenderOptions {
        RenderOptions::new()
    }

    fn geometry() -> PageGeometry {
        PageGeometry::new(PageSize::A4, Orientation::Portrait)
    }

    fn lines(count: usize) -> Representation {
        Representation::Structured(
            (0..count)
                .map(|i| DocumentLine::new(0, format!("line {}", i), LineKind::Text))
                .collect(),
        )
    }

    #[test]
    fn test_structured_page_count_formula() {
        let opts = options();
        let geo = geometry();
        let line_height = opts.font_tier.line_height();

        // Capacity of a continuation page bounds the formula's denominator.
        let cont_capacity =
            ((geo.height - MARGIN_BOTTOM - content_top(&opts, true)) / line_height).floor() as usize;

        for count in [1, 10, 100, 500] {
            let pages = plan(&lines(count), geo, &opts);
            let expected = (count + cont_capacity - 1) / cont_capacity;
            // Within one page of ceil(L / floor(H/h)): the first page loses
            // some slots to the title/metadata block.
            assert!(
                pages.len() >= expected && pages.len() <= expected + 1,
                "count={} produced {} pages, expected about {}",
                count,
                pages.len(),
                expected
            );
        }
    }

    #[test]
    fn test_structured_pages_are_disjoint_and_complete() {
        let pages = plan(&lines(200), geometry(), &options());
        let mut total = 0;
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number as usize, i + 1);
            assert_eq!(page.continuation, i > 0);
            if let PageBody::Lines(lines) = &page.body {
                total += lines.len();
            }
        }
        assert_eq!(total, 200);
    }

    #[test]
    fn test_table_header_repeats_per_page() {
        let table = TableProjection::from_parts(
            vec!["a".into(), "b".into()],
            (0..120)
                .map(|i| vec![format!("{}", i), "x".into()])
                .collect(),
        );
        let pages = plan(&Representation::Table(table), geometry(), &options());
        assert!(pages.len() > 1);
        for page in &pages {
            match &page.body {
                PageBody::Table { headers, .. } => assert_eq!(headers, &vec!["a", "b"]),
                _ => panic!("expected table body"),
            }
        }
    }

    #[test]
    fn test_table_row_indices_continue_across_pages() {
        let table = TableProjection::from_parts(
            vec!["a".into()],
            (0..120).map(|i| vec![format!("{}", i)]).collect(),
        );
        let pages = plan(&Representation::Table(table), geometry(), &options());
        let mut expected = 0;
        for page in &pages {
            if let PageBody::Table { rows, .. } = &page.body {
                for slice in rows {
                    assert_eq!(slice.index, expected);
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, 120);
    }

    #[test]
    fn test_column_widths_fill_usable_width() {
        let table = TableProjection::from_parts(
            vec!["id".into(), "description".into()],
            vec![vec!["1".into(), "a much longer cell of text".into()]],
        );
        let geo = geometry();
        let widths = column_widths(&table, geo, &options());
        let total: f32 = widths.iter().sum();
        assert!((total - geo.usable_width()).abs() < 0.5);
        // Longer content earns the wider column.
        assert!(widths[1] > widths[0]);
    }

    #[test]
    fn test_column_widths_reserve_row_number_column() {
        let table =
            TableProjection::from_parts(vec!["a".into()], vec![vec!["1".into()]]);
        let geo = geometry();
        let opts = RenderOptions::new().with_row_numbers(true);
        let widths = column_widths(&table, geo, &opts);
        let total: f32 = widths.iter().sum();
        assert!((total - (geo.usable_width() - ROW_NUMBER_WIDTH)).abs() < 0.5);
    }

    #[test]
    fn test_truncate_to() {
        assert_eq!(truncate_to("short", 80), "short");
        let long = "x".repeat(100);
        let cut = truncate_to(&long, 80);
        assert_eq!(cut.chars().count(), 80);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_landscape_budget_applied() {
        let long = "y".repeat(200);
        let rep = Representation::Structured(vec![DocumentLine::new(0, long, LineKind::Text)]);

        let portrait = plan(&rep, geometry(), &options());
        if let PageBody::Lines(lines) = &portrait[0].body {
            assert_eq!(lines[0].text.chars().count(), 80);
        }

        let land_opts = RenderOptions::new().with_orientation(Orientation::Landscape);
        let geo = PageGeometry::new(PageSize::A4, Orientation::Landscape);
        let landscape = plan(&rep, geo, &land_opts);
        if let PageBody::Lines(lines) = &landscape[0].body {
            assert_eq!(lines[0].text.chars().count(), 120);
        }
    }

    #[test]
    fn test_empty_table_yields_single_page() {
        let rep = Representation::Table(TableProjection::new());
        let pages = plan(&rep, geometry(), &options());
        assert_eq!(pages.len(), 1);
        assert!(!pages[0].continuation);
    }
}
