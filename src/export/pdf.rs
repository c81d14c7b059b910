use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const FONT: Name<'static> = Name(b"F1");
const GRID_GREY: f32 = 0.65;
const HEADER_FILL: [f32; 3] = [0.85, 0.87, 0.90];
const ZEBRA_FILL: [f32; 3] = [0.96, 0.96, 0.96];

/// Page geometry and type sizes, in points.
#[derive(Debug, Clone, Copy)]
struct Layout {
    width: f32,
    height: f32,
    margin: f32,
    row_h: f32,
    body_pt: f32,
    header_pt: f32,
    title_pt: f32,
}

impl Layout {
    /// A4 landscape with a tight grid: 33 recap columns must fit across.
    const A4_LANDSCAPE: Layout = Layout {
        width: 842.0,
        height: 595.0,
        margin: 30.0,
        row_h: 14.0,
        body_pt: 7.0,
        header_pt: 7.5,
        title_pt: 13.0,
    };

    /// Baseline of the column header band.
    fn header_y(&self) -> f32 {
        self.height - self.margin - self.row_h - 10.0
    }

    fn rows_per_page(&self) -> usize {
        let bands = ((self.header_y() - self.margin) / self.row_h).floor() as usize;
        bands.saturating_sub(1).max(1)
    }

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

/// Writes one titled table across as many pages as it needs.
pub struct PdfTable {
    pdf: Pdf,
    layout: Layout,
    legend: Option<String>,
    pages: Vec<Ref>,
    next_ref: i32,
}

impl PdfTable {
    const CATALOG: i32 = 1;
    const PAGE_TREE: i32 = 2;
    const HELVETICA: i32 = 3;

    pub fn landscape() -> Self {
        let mut pdf = Pdf::new();
        pdf.type1_font(Ref::new(Self::HELVETICA)).base_font(Name(b"Helvetica"));
        Self {
            pdf,
            layout: Layout::A4_LANDSCAPE,
            legend: None,
            pages: Vec::new(),
            next_ref: 4,
        }
    }

    /// Footnote printed at the bottom of every page.
    pub fn with_legend(mut self, legend: &str) -> Self {
        self.legend = Some(legend.to_string());
        self
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_ref);
        self.next_ref += 1;
        r
    }

    /// Widths from the longest text in each column, scaled down together
    /// when the table is wider than the page.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let l = &self.layout;
        let measure = |text: &str, pt: f32| text.chars().count() as f32 * pt * 0.62 + 6.0;

        let mut widths: Vec<f32> = headers.iter().map(|h| measure(h, l.header_pt)).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(measure(cell, l.body_pt));
            }
        }

        let total: f32 = widths.iter().sum();
        if total > l.usable_width() {
            let scale = l.usable_width() / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        widths
    }

    /// With no rows, a single page still carries the title and header band.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.column_widths(headers, rows);
        let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let per_page = self.layout.rows_per_page();
        let mut chunks: Vec<&[Vec<String>]> = rows.chunks(per_page).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        for (n, chunk) in chunks.into_iter().enumerate() {
            let mut content = Content::new();
            self.decorate(&mut content, title, n + 1);

            let mut y = self.layout.header_y();
            self.band(&mut content, y, &widths, HEADER_FILL);
            self.cells(&mut content, y, &widths, &header, self.layout.header_pt);

            for (i, row) in chunk.iter().enumerate() {
                y -= self.layout.row_h;
                if i % 2 == 0 {
                    self.band(&mut content, y, &widths, ZEBRA_FILL);
                }
                self.cells(&mut content, y, &widths, row, self.layout.body_pt);
            }

            self.push_page(content);
        }
    }

    fn push_page(&mut self, content: Content) {
        let page = self.alloc();
        let stream = self.alloc();
        let l = self.layout;

        {
            let mut writer = self.pdf.page(page);
            writer
                .parent(Ref::new(Self::PAGE_TREE))
                .media_box(Rect::new(0.0, 0.0, l.width, l.height))
                .contents(stream);
            writer
                .resources()
                .fonts()
                .pair(FONT, Ref::new(Self::HELVETICA));
        }

        self.pdf.stream(stream, &content.finish());
        self.pages.push(page);
    }

    /// Title on top, legend and page number along the bottom edge.
    fn decorate(&self, content: &mut Content, title: &str, page_no: usize) {
        let l = &self.layout;
        text(content, l.margin, l.height - l.margin, l.title_pt, title);
        if let Some(legend) = &self.legend {
            text(content, l.margin, l.margin / 2.0, l.body_pt, legend);
        }
        text(
            content,
            l.width - l.margin - 40.0,
            l.margin / 2.0,
            l.body_pt,
            &format!("Page {page_no}"),
        );
    }

    fn band(&self, content: &mut Content, y: f32, widths: &[f32], [r, g, b]: [f32; 3]) {
        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.rect(self.layout.margin, y, widths.iter().sum(), self.layout.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn cells(&self, content: &mut Content, y: f32, widths: &[f32], row: &[String], pt: f32) {
        let row_h = self.layout.row_h;
        let baseline = y + (row_h - pt) / 2.0 + 1.0;
        let mut x = self.layout.margin;

        for (w, cell) in widths.iter().zip(row) {
            text(content, x + 2.5, baseline, pt, cell);

            content.save_state();
            content.set_stroke_rgb(GRID_GREY, GRID_GREY, GRID_GREY);
            content.rect(x, y, *w, row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        let tree = Ref::new(Self::PAGE_TREE);
        self.pdf.catalog(Ref::new(Self::CATALOG)).pages(tree);
        self.pdf
            .pages(tree)
            .count(self.pages.len() as i32)
            .kids(self.pages.iter().copied());
        fs::write(path, self.pdf.finish())
    }
}

fn text(content: &mut Content, x: f32, y: f32, pt: f32, s: &str) {
    content
        .begin_text()
        .set_font(FONT, pt)
        .set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y])
        .show(Str(s.as_bytes()))
        .end_text();
}
