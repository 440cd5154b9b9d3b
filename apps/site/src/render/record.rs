// Test renderer that records every call so the composer's output order can be asserted.

use crate::render::{
    Download, Gap, ImageSource, ListItem, PageMeta, RenderError, Renderer, Span,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    PageMeta { title: String, icon: String },
    Stylesheet(String),
    Columns { count: usize, gap: Gap },
    Column(usize),
    EndColumns,
    Image { source: ImageSource, width: Option<u32> },
    Title(String),
    Subheader(String),
    Heading(String),
    Paragraph(String),
    Text(Vec<Span>),
    BulletList(Vec<ListItem>),
    DownloadButton { label: String, download: Download },
    LinkButton { label: String, url: String },
    Badge { label: String, image_url: String, url: String },
    Link { label: String, url: String },
    Spacer,
    Divider,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    fail_at: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the call at position `index` (0-based) and every call after it.
    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(index),
        }
    }

    fn record(&mut self, call: Call) -> Result<(), RenderError> {
        if matches!(self.fail_at, Some(index) if self.calls.len() >= index) {
            return Err(RenderError::Rejected(format!("{call:?}")));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn set_page_meta(&mut self, meta: &PageMeta<'_>) -> Result<(), RenderError> {
        self.record(Call::PageMeta {
            title: meta.title.to_string(),
            icon: meta.icon.to_string(),
        })
    }

    fn stylesheet(&mut self, css: &str) -> Result<(), RenderError> {
        self.record(Call::Stylesheet(css.to_string()))
    }

    fn columns(&mut self, count: usize, gap: Gap) -> Result<(), RenderError> {
        self.record(Call::Columns { count, gap })
    }

    fn column(&mut self, index: usize) -> Result<(), RenderError> {
        self.record(Call::Column(index))
    }

    fn end_columns(&mut self) -> Result<(), RenderError> {
        self.record(Call::EndColumns)
    }

    fn image(&mut self, source: &ImageSource, width: Option<u32>) -> Result<(), RenderError> {
        self.record(Call::Image {
            source: source.clone(),
            width,
        })
    }

    fn title(&mut self, text: &str) -> Result<(), RenderError> {
        self.record(Call::Title(text.to_string()))
    }

    fn subheader(&mut self, text: &str) -> Result<(), RenderError> {
        self.record(Call::Subheader(text.to_string()))
    }

    fn heading(&mut self, text: &str) -> Result<(), RenderError> {
        self.record(Call::Heading(text.to_string()))
    }

    fn paragraph(&mut self, text: &str) -> Result<(), RenderError> {
        self.record(Call::Paragraph(text.to_string()))
    }

    fn text(&mut self, spans: &[Span]) -> Result<(), RenderError> {
        self.record(Call::Text(spans.to_vec()))
    }

    fn bullet_list(&mut self, items: &[ListItem]) -> Result<(), RenderError> {
        self.record(Call::BulletList(items.to_vec()))
    }

    fn download_button(&mut self, label: &str, download: &Download) -> Result<(), RenderError> {
        self.record(Call::DownloadButton {
            label: label.to_string(),
            download: download.clone(),
        })
    }

    fn link_button(&mut self, label: &str, url: &str) -> Result<(), RenderError> {
        self.record(Call::LinkButton {
            label: label.to_string(),
            url: url.to_string(),
        })
    }

    fn badge(&mut self, label: &str, image_url: &str, url: &str) -> Result<(), RenderError> {
        self.record(Call::Badge {
            label: label.to_string(),
            image_url: image_url.to_string(),
            url: url.to_string(),
        })
    }

    fn link(&mut self, label: &str, url: &str) -> Result<(), RenderError> {
        self.record(Call::Link {
            label: label.to_string(),
            url: url.to_string(),
        })
    }

    fn spacer(&mut self) -> Result<(), RenderError> {
        self.record(Call::Spacer)
    }

    fn divider(&mut self) -> Result<(), RenderError> {
        self.record(Call::Divider)
    }
}
