use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// A4 portrait, in points
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 48.0;
const ROW_H: f32 = 19.0;

const BODY_SIZE: f32 = 9.5;
const HEADER_SIZE: f32 = 10.5;
const TITLE_SIZE: f32 = 14.0;

const HEADER_FILL: (f32, f32, f32) = (0.85, 0.87, 0.90);
const STRIPE_FILL: (f32, f32, f32) = (0.96, 0.96, 0.96);

/// Minimal multi-page table writer on top of `pdf_writer`.
///
/// Object IDs are handed out manually; the catalog and pages tree are
/// assembled once in `save`.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,
    open_content_id: Option<Ref>,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        // One global font for everything
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),
            open_content_id: None,
        }
    }

    fn alloc_ref(&mut self) -> Ref {
        self.next_id += 1;
        Ref::new(self.next_id - 1)
    }

    /// Open a fresh page and return its empty content stream.
    fn open_page(&mut self) -> Content {
        let page_id = self.alloc_ref();
        let content_id = self.alloc_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.open_content_id = Some(content_id);
        Content::new()
    }

    fn close_page(&mut self, content: Content) {
        if let Some(id) = self.open_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn text_at(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Filled band spanning `width` at row position `y`.
    fn band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(MARGIN, y, width, ROW_H);
        content.fill_nonzero();
        content.restore_state();
    }

    fn table_row(&self, content: &mut Content, y: f32, col_w: &[f32], row: &[String], size: f32) {
        let mut x = MARGIN;
        for (cell, w) in row.iter().zip(col_w) {
            self.text_at(content, x + 4.0, y + 5.0, size, cell);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, ROW_H);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    fn page_chrome(&self, content: &mut Content, title: &str, page_no: usize) {
        self.text_at(content, MARGIN, PAGE_H - MARGIN + 15.0, TITLE_SIZE, title);
        self.text_at(
            content,
            PAGE_W - MARGIN - 60.0,
            MARGIN - 35.0,
            BODY_SIZE,
            &format!("Page {}", page_no),
        );
    }

    /// Width per column from header and cell lengths, scaled to the page.
    fn fit_columns(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut col_w: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();
        for row in rows {
            for (cell, w) in row.iter().zip(col_w.iter_mut()) {
                *w = w.max(cell.len() as f32 * 6.2);
            }
        }

        let sum_w: f32 = col_w.iter().sum();
        let usable = PAGE_W - 2.0 * MARGIN;
        if sum_w > usable {
            let scale = usable / sum_w;
            for w in &mut col_w {
                *w *= scale;
            }
        }
        col_w
    }

    /// Titled table split across as many pages as needed. An empty row set
    /// still produces one page carrying the header row.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_w = Self::fit_columns(headers, rows);
        let table_w: f32 = col_w.iter().sum();
        let head: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut pending: &[Vec<String>] = rows;
        let mut page_no = 0;

        loop {
            page_no += 1;

            let mut content = self.open_page();
            self.page_chrome(&mut content, title, page_no);

            let mut y = PAGE_H - MARGIN - 30.0;
            self.band(&mut content, y, table_w, HEADER_FILL);
            self.table_row(&mut content, y, &col_w, &head, HEADER_SIZE);
            y -= ROW_H;

            let mut taken = 0;
            for (i, row) in pending.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }
                if i % 2 == 0 {
                    self.band(&mut content, y, table_w, STRIPE_FILL);
                }
                self.table_row(&mut content, y, &col_w, row, BODY_SIZE);
                y -= ROW_H;
                taken += 1;
            }

            self.close_page(content);

            pending = &pending[taken..];
            if pending.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        File::create(path)?.write_all(&bytes)
    }
}
