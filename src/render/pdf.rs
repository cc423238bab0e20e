//! printpdf-backed drawing surface.
//!
//! printpdf 0.8 uses a data-oriented API: pages are `Vec<Op>` operation
//! lists collected into a `PdfDocument` and serialized with `save()`. The
//! engine's top-down coordinates are flipped to PDF's bottom-up space here,
//! at the last moment.

use super::surface::{Color, FontStyle, PageSurface, TextAlign};
use crate::error::{Error, Result};
use log::debug;
use printpdf::{
    BuiltinFont, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Polygon, PolygonRing, Pt, RawImage, RawImageData, RawImageFormat, TextItem, TextMatrix,
    WindingOrder, XObjectTransform,
};

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Approximate Helvetica advance ratio used for alignment offsets.
const CHAR_ADVANCE: f32 = 0.5;

/// One queued drawing operation.
///
/// Images cannot be turned into ops until the final document exists (the
/// xobject id is handed out by the document), so they are queued decoded
/// and resolved in [`finish`](PageSurface::finish).
enum PageOp {
    Pdf(Op),
    Image {
        image: RawImage,
        pixel_width: f32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// A [`PageSurface`] producing PDF bytes via printpdf.
pub struct PdfSurface {
    title: String,
    pages: Vec<Vec<PageOp>>,
    dimensions: Vec<(f32, f32)>,
    current: usize,
    font: FontStyle,
}

impl PdfSurface {
    /// Create a surface; the title lands in the PDF metadata.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            dimensions: Vec::new(),
            current: 0,
            font: FontStyle::regular(10.0, Color::BLACK),
        }
    }

    fn page_height(&self) -> f32 {
        self.dimensions[self.current].1
    }

    fn push(&mut self, op: PageOp) {
        self.pages[self.current].push(op);
    }

    fn font_face(&self) -> BuiltinFont {
        if self.font.bold {
            BuiltinFont::HelveticaBold
        } else {
            BuiltinFont::Helvetica
        }
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb {
        r: color.r as f32 / 255.0,
        g: color.g as f32 / 255.0,
        b: color.b as f32 / 255.0,
        icc_profile: None,
    })
}

impl PageSurface for PdfSurface {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.pages.push(Vec::new());
        self.dimensions.push((width, height));
        self.current = self.pages.len() - 1;
    }

    fn select_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(Error::PageOutOfRange(index, self.pages.len()));
        }
        self.current = index;
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_font(&mut self, style: FontStyle) {
        self.font = style;
    }

    fn text(&mut self, x: f32, y: f32, text: &str, align: TextAlign, angle: f32) {
        let size = self.font.size;
        let estimated = text.chars().count() as f32 * CHAR_ADVANCE * size;
        let x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - estimated / 2.0,
            TextAlign::Right => x - estimated,
        };
        let y = self.page_height() - y;
        let font = self.font_face();

        self.push(PageOp::Pdf(Op::StartTextSection));
        self.push(PageOp::Pdf(Op::SetFillColor {
            col: pdf_color(self.font.color),
        }));
        self.push(PageOp::Pdf(Op::SetFontSizeBuiltinFont {
            size: Pt(size),
            font,
        }));
        if angle == 0.0 {
            self.push(PageOp::Pdf(Op::SetTextCursor {
                pos: Point { x: Pt(x), y: Pt(y) },
            }));
        } else {
            self.push(PageOp::Pdf(Op::SetTextMatrix {
                matrix: TextMatrix::TranslateRotate(Pt(x), Pt(y), angle),
            }));
        }
        self.push(PageOp::Pdf(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font,
        }));
        self.push(PageOp::Pdf(Op::EndTextSection));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let top = self.page_height() - y;
        let bottom = top - height;
        let corners = [
            (x, top),
            (x + width, top),
            (x + width, bottom),
            (x, bottom),
        ];
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: corners
                    .iter()
                    .map(|&(px, py)| LinePoint {
                        p: Point {
                            x: Pt(px),
                            y: Pt(py),
                        },
                        bezier: false,
                    })
                    .collect(),
            }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        };

        self.push(PageOp::Pdf(Op::SetFillColor {
            col: pdf_color(color),
        }));
        self.push(PageOp::Pdf(Op::DrawPolygon { polygon }));
    }

    fn image(&mut self, data: &[u8], x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        let decoded =
            image::load_from_memory(data).map_err(|e| Error::ImageDecode(e.to_string()))?;
        let pixel_width = decoded.width() as f32;
        let pixel_height = decoded.height() as usize;
        let rgb = decoded.to_rgb8();
        let image = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: pixel_width as usize,
            height: pixel_height,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };

        self.push(PageOp::Image {
            image,
            pixel_width,
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new(&self.title);
        let pages = std::mem::take(&mut self.pages);
        let dimensions = std::mem::take(&mut self.dimensions);

        let mut pdf_pages = Vec::new();
        for (ops, (w, h)) in pages.into_iter().zip(dimensions) {
            let mut out: Vec<Op> = Vec::new();
            for op in ops {
                match op {
                    PageOp::Pdf(op) => out.push(op),
                    PageOp::Image {
                        image,
                        pixel_width,
                        x,
                        y,
                        width,
                        height,
                    } => {
                        let id = doc.add_image(&image);
                        // At 72 dpi one pixel is one point, so the scale is
                        // simply target over pixel width.
                        let scale = width / pixel_width.max(1.0);
                        out.push(Op::UseXobject {
                            id,
                            transform: XObjectTransform {
                                translate_x: Some(Pt(x)),
                                translate_y: Some(Pt(h - y - height)),
                                scale_x: Some(scale),
                                scale_y: Some(scale),
                                dpi: Some(72.0),
                                rotate: None,
                            },
                        });
                    }
                }
            }
            pdf_pages.push(PdfPage::new(
                Mm(w / PT_PER_MM),
                Mm(h / PT_PER_MM),
                out,
            ));
        }

        if pdf_pages.is_empty() {
            // Never serialize a zero-page document.
            pdf_pages.push(PdfPage::new(Mm(210.0), Mm(297.0), Vec::new()));
        }

        let page_count = pdf_pages.len();
        doc.with_pages(pdf_pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!("serialized {} page(s), {} bytes", page_count, bytes.len());
        Ok(bytes)
    }
}
