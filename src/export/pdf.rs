//! Minimal PDF builder for the attendance report.
//!
//! Pages are A4 landscape; object ids are handed out manually and the
//! page tree is assembled once at save time.

use crate::core::report::{REPORT_HEADERS, ReportBody, ReportDocument};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
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
        let next_id = 4;

        // single global font
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 landscape
            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,
            line_h: 12.0,

            next_id,
            font_id,

            font_size: 8.0,
            header_font_size: 8.5,
            title_font_size: 13.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and its content stream; returns the content plus
    /// the starting y after the page header.
    fn new_page(&mut self, title: &str) -> (Content, f32) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.current_content_id = Some(content_id);

        let mut content = Content::new();

        let y = self.page_h - self.margin;
        self.draw_text(&mut content, self.margin, y, self.title_font_size, title);

        let page_no = format!("Page {}", self.page_refs.len());
        self.draw_text(
            &mut content,
            self.page_w - self.margin - 50.0,
            self.margin - 20.0,
            self.font_size,
            &page_no,
        );

        (content, y - 2.0 * self.line_h)
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 3.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    fn fill_row_background(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Column widths from header + content length, scaled down to fit the
    /// printable width when needed.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.0 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = (cell.len() as f32 * 5.2 + 8.0).max(widths[i]);
                widths[i] = w;
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_table_header(&self, content: &mut Content, y: f32, col_widths: &[f32]) {
        let header_row: Vec<String> = REPORT_HEADERS.iter().map(|s| s.to_string()).collect();

        self.fill_row_background(content, y, col_widths.iter().sum(), (0.17, 0.24, 0.31));
        self.draw_row(content, y, col_widths, &header_row, self.header_font_size);
    }

    /// Lay the whole document out: legend block, table (or notice), and
    /// the summary footer, breaking pages as rows run out of room.
    pub fn render_report(&mut self, doc: &ReportDocument) {
        let (mut content, mut y) = self.new_page(&doc.title);

        for line in &doc.legend {
            self.draw_text(&mut content, self.margin, y, self.font_size, line);
            y -= self.line_h;
        }
        y -= self.line_h;

        match &doc.body {
            ReportBody::Notice(msg) => {
                self.draw_text(&mut content, self.margin, y, self.header_font_size, msg);
                y -= 2.0 * self.line_h;
            }
            ReportBody::Table(rows) => {
                let col_widths = self.compute_col_widths(&REPORT_HEADERS, rows);
                let table_width: f32 = col_widths.iter().sum();

                y -= self.row_h;
                self.draw_table_header(&mut content, y, &col_widths);
                y -= self.row_h;

                for (i, row) in rows.iter().enumerate() {
                    if y < self.margin {
                        self.finalize_page(content);
                        let (c, top) = self.new_page(&doc.title);
                        content = c;
                        y = top - self.row_h;
                        self.draw_table_header(&mut content, y, &col_widths);
                        y -= self.row_h;
                    }

                    // zebra stripe
                    if i % 2 == 0 {
                        self.fill_row_background(&mut content, y, table_width, (0.96, 0.96, 0.96));
                    }

                    self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                    y -= self.row_h;
                }

                y -= self.line_h;
            }
        }

        for line in &doc.footer {
            if y < self.margin {
                self.finalize_page(content);
                let (c, top) = self.new_page(&doc.title);
                content = c;
                y = top;
            }

            self.draw_text(&mut content, self.margin, y, self.font_size, line);
            y -= self.line_h;
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
