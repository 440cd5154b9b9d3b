//! HTML renderer — turns the composer's call stream into one self-contained document.
//!
//! Text is always escaped. The loaded stylesheet is inlined after a small base sheet
//! that provides the column, button and badge layout. Local payloads (profile photo,
//! resume download) are not inlined: they are registered as [`ServedFile`]s and
//! referenced from the document as `/files/{name}`.

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::render::{
    Download, Gap, ImageSource, ListItem, PageMeta, RenderError, Renderer, Span,
};

/// URL prefix under which registered files are served.
pub const FILES_PREFIX: &str = "/files/";

const BASE_STYLE: &str = "\
.page { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
.columns { display: flex; flex-wrap: wrap; }
.columns.gap-small { gap: 1rem; }
.columns.gap-large { gap: 4rem; }
.column { flex: 1 1 0; min-width: 0; }
.download-button { display: inline-block; padding: 0.4rem 0.9rem; border: 1px solid #ccc; border-radius: 0.5rem; text-decoration: none; color: inherit; }
.badge img { height: 20px; }
.spacer { height: 1rem; }
";

const LINK_BUTTON_STYLE: &str = "background-color: #4CAF50; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

/// A payload the rendered document links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedFile {
    pub name: String,
    pub content_type: String,
    pub disposition: Disposition,
    pub data: Bytes,
}

impl ServedFile {
    pub fn url(&self) -> String {
        format!("{FILES_PREFIX}{}", self.name)
    }

    /// `Content-Disposition` header value for this file.
    pub fn content_disposition(&self) -> String {
        match self.disposition {
            Disposition::Inline => "inline".to_string(),
            Disposition::Attachment => {
                format!("attachment; filename=\"{}\"", self.name.replace('"', ""))
            }
        }
    }
}

/// Output of a finished render: the document plus every file it references.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub files: Vec<ServedFile>,
    pub rendered_at: DateTime<Utc>,
}

impl RenderedPage {
    pub fn file(&self, name: &str) -> Option<&ServedFile> {
        self.files.iter().find(|f| f.name == name)
    }
}

#[derive(Debug)]
struct ColumnLayout {
    count: usize,
    current: Option<usize>,
}

#[derive(Debug, Default)]
pub struct HtmlRenderer {
    title: String,
    icon: Option<String>,
    styles: Vec<String>,
    body: String,
    files: Vec<ServedFile>,
    layout: Option<ColumnLayout>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the document. Fails if a column layout is still open.
    pub fn finish(self) -> Result<RenderedPage, RenderError> {
        if self.layout.is_some() {
            return Err(RenderError::Layout(
                "column layout still open at end of page".to_string(),
            ));
        }

        let mut head = String::new();
        head.push_str("<meta charset=\"utf-8\">\n");
        head.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        head.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        if let Some(icon) = &self.icon {
            head.push_str(&favicon_link(icon));
        }
        head.push_str(&format!("<style>\n{BASE_STYLE}</style>\n"));
        for css in &self.styles {
            head.push_str(&format!("<style>\n{css}\n</style>\n"));
        }

        let html = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n<main class=\"page\">\n{}</main>\n</body>\n</html>\n",
            self.body
        );

        Ok(RenderedPage {
            html,
            files: self.files,
            rendered_at: Utc::now(),
        })
    }

    /// Registers a payload and returns the URL it will be served at.
    /// Re-registering identical content under the same name is a no-op.
    fn register_file(&mut self, file: ServedFile) -> Result<String, RenderError> {
        if let Some(existing) = self.files.iter().find(|f| f.name == file.name) {
            if *existing != file {
                return Err(RenderError::DuplicateFile(file.name));
            }
            return Ok(existing.url());
        }
        let url = file.url();
        self.files.push(file);
        Ok(url)
    }

    fn push_line(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }

    fn push_list(&mut self, items: &[ListItem]) {
        self.body.push_str("<ul>\n");
        for item in items {
            self.body.push_str("<li>");
            self.body.push_str(&render_spans(&item.spans));
            if !item.children.is_empty() {
                self.body.push('\n');
                self.push_list(&item.children);
            }
            self.body.push_str("</li>\n");
        }
        self.body.push_str("</ul>\n");
    }
}

impl Renderer for HtmlRenderer {
    fn set_page_meta(&mut self, meta: &PageMeta<'_>) -> Result<(), RenderError> {
        self.title = meta.title.to_string();
        self.icon = Some(icon_glyph(meta.icon).to_string());
        Ok(())
    }

    fn stylesheet(&mut self, css: &str) -> Result<(), RenderError> {
        // A stray closing tag would end the <style> element early.
        self.styles.push(css.replace("</style", "<\\/style"));
        Ok(())
    }

    fn columns(&mut self, count: usize, gap: Gap) -> Result<(), RenderError> {
        if self.layout.is_some() {
            return Err(RenderError::Layout(
                "nested column layouts are not supported".to_string(),
            ));
        }
        if count == 0 {
            return Err(RenderError::Layout(
                "column layout needs at least one column".to_string(),
            ));
        }
        self.layout = Some(ColumnLayout {
            count,
            current: None,
        });
        self.push_line(&format!("<div class=\"columns gap-{}\">", gap.as_str()));
        Ok(())
    }

    fn column(&mut self, index: usize) -> Result<(), RenderError> {
        let layout = self
            .layout
            .as_mut()
            .ok_or_else(|| RenderError::Layout(format!("column {index} outside a layout")))?;
        if index >= layout.count {
            return Err(RenderError::Layout(format!(
                "column {index} out of range for {} columns",
                layout.count
            )));
        }
        if matches!(layout.current, Some(current) if index <= current) {
            return Err(RenderError::Layout(format!(
                "column {index} selected out of order"
            )));
        }
        let close_previous = layout.current.is_some();
        layout.current = Some(index);

        if close_previous {
            self.push_line("</div>");
        }
        self.push_line("<div class=\"column\">");
        Ok(())
    }

    fn end_columns(&mut self) -> Result<(), RenderError> {
        let layout = self
            .layout
            .take()
            .ok_or_else(|| RenderError::Layout("no column layout to close".to_string()))?;
        if layout.current.is_some() {
            self.push_line("</div>");
        }
        self.push_line("</div>");
        Ok(())
    }

    fn image(&mut self, source: &ImageSource, width: Option<u32>) -> Result<(), RenderError> {
        let (src, alt) = match source {
            ImageSource::Local {
                file_name,
                content_type,
                data,
            } => {
                let url = self.register_file(ServedFile {
                    name: file_name.clone(),
                    content_type: content_type.clone(),
                    disposition: Disposition::Inline,
                    data: data.clone(),
                })?;
                (url, file_name.as_str())
            }
            ImageSource::Remote(url) => (url.clone(), ""),
        };
        let width_attr = width.map(|w| format!(" width=\"{w}\"")).unwrap_or_default();
        self.push_line(&format!(
            "<img src=\"{}\" alt=\"{}\"{width_attr}>",
            escape(&src),
            escape(alt)
        ));
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<(), RenderError> {
        self.push_line(&format!("<h1>{}</h1>", escape(text)));
        Ok(())
    }

    fn subheader(&mut self, text: &str) -> Result<(), RenderError> {
        self.push_line(&format!("<h2>{}</h2>", escape(text)));
        Ok(())
    }

    fn heading(&mut self, text: &str) -> Result<(), RenderError> {
        self.push_line(&format!("<h3>{}</h3>", escape(text)));
        Ok(())
    }

    fn paragraph(&mut self, text: &str) -> Result<(), RenderError> {
        self.push_line(&format!("<p>{}</p>", escape(text)));
        Ok(())
    }

    fn text(&mut self, spans: &[Span]) -> Result<(), RenderError> {
        self.push_line(&format!("<p>{}</p>", render_spans(spans)));
        Ok(())
    }

    fn bullet_list(&mut self, items: &[ListItem]) -> Result<(), RenderError> {
        self.push_list(items);
        Ok(())
    }

    fn download_button(&mut self, label: &str, download: &Download) -> Result<(), RenderError> {
        let url = self.register_file(ServedFile {
            name: download.file_name.clone(),
            content_type: download.content_type.clone(),
            disposition: Disposition::Attachment,
            data: download.data.clone(),
        })?;
        self.push_line(&format!(
            "<a class=\"download-button\" href=\"{}\" download=\"{}\">{}</a>",
            escape(&url),
            escape(&download.file_name),
            escape(label)
        ));
        Ok(())
    }

    fn link_button(&mut self, label: &str, url: &str) -> Result<(), RenderError> {
        self.push_line(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><button style=\"{LINK_BUTTON_STYLE}\">{}</button></a>",
            escape(url),
            escape(label)
        ));
        Ok(())
    }

    fn badge(&mut self, label: &str, image_url: &str, url: &str) -> Result<(), RenderError> {
        self.push_line(&format!(
            "<a class=\"badge\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><img src=\"{}\" alt=\"{}\"></a>",
            escape(url),
            escape(image_url),
            escape(label)
        ));
        Ok(())
    }

    fn link(&mut self, label: &str, url: &str) -> Result<(), RenderError> {
        self.push_line(&format!(
            "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
            escape(url),
            escape(label)
        ));
        Ok(())
    }

    fn spacer(&mut self) -> Result<(), RenderError> {
        self.push_line("<div class=\"spacer\"></div>");
        Ok(())
    }

    fn divider(&mut self) -> Result<(), RenderError> {
        self.push_line("<hr>");
        Ok(())
    }
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => escape(text),
            Span::Strong(text) => format!("<strong>{}</strong>", escape(text)),
        })
        .collect()
}

/// Maps an emoji shortcode to its glyph; anything else is used verbatim.
fn icon_glyph(icon: &str) -> &str {
    match icon {
        ":wave:" => "👋",
        ":rocket:" => "🚀",
        ":briefcase:" => "💼",
        ":page_facing_up:" => "📄",
        other => other,
    }
}

fn favicon_link(glyph: &str) -> String {
    format!(
        "<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{}</text></svg>\">\n",
        escape(glyph)
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
