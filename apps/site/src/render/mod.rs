// Rendering collaborator: the narrow surface the page composer draws onto.
// `HtmlRenderer` is the production implementation; tests record the call stream instead.

pub mod html;
#[cfg(test)]
pub mod record;

use bytes::Bytes;
use thiserror::Error;

use crate::assets::{Document, Photo};

pub use html::{HtmlRenderer, RenderedPage};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Column calls arrived out of order (unopened, out of range, or left open).
    #[error("Layout error: {0}")]
    Layout(String),

    /// Two different payloads were registered under the same file name.
    #[error("Duplicate file name: {0}")]
    DuplicateFile(String),

    #[error("Renderer rejected call: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    /// Emoji shortcode (`:wave:`) or a literal glyph.
    pub icon: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    Small,
    Large,
}

impl Gap {
    pub fn as_str(self) -> &'static str {
        match self {
            Gap::Small => "small",
            Gap::Large => "large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Bytes loaded at startup; the renderer decides how to expose them.
    Local {
        file_name: String,
        content_type: String,
        data: Bytes,
    },
    /// Absolute URL embedded as-is.
    Remote(String),
}

impl ImageSource {
    pub fn local(photo: &Photo) -> Self {
        ImageSource::Local {
            file_name: photo.file_name.clone(),
            content_type: photo.content_type().to_string(),
            data: photo.data.clone(),
        }
    }
}

/// Payload behind a download button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl Download {
    pub const OCTET_STREAM: &'static str = "application/octet-stream";

    /// Serves the document verbatim under its own name with a generic binary type.
    pub fn octet_stream(document: &Document) -> Self {
        Self {
            file_name: document.file_name.clone(),
            content_type: Self::OCTET_STREAM.to_string(),
            data: document.data.clone(),
        }
    }
}

/// Inline text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Span::Strong(text.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub spans: Vec<Span>,
    pub children: Vec<ListItem>,
}

impl ListItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
            children: Vec::new(),
        }
    }

    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ListItem>) -> Self {
        self.children = children;
        self
    }
}

/// Every call either succeeds or fails the whole page; there is no partial render.
pub trait Renderer {
    fn set_page_meta(&mut self, meta: &PageMeta<'_>) -> Result<(), RenderError>;
    fn stylesheet(&mut self, css: &str) -> Result<(), RenderError>;

    /// Opens a row of `count` columns. Content goes into the column most recently
    /// selected with [`Renderer::column`] until [`Renderer::end_columns`].
    fn columns(&mut self, count: usize, gap: Gap) -> Result<(), RenderError>;
    fn column(&mut self, index: usize) -> Result<(), RenderError>;
    fn end_columns(&mut self) -> Result<(), RenderError>;

    fn image(&mut self, source: &ImageSource, width: Option<u32>) -> Result<(), RenderError>;
    fn title(&mut self, text: &str) -> Result<(), RenderError>;
    fn subheader(&mut self, text: &str) -> Result<(), RenderError>;
    fn heading(&mut self, text: &str) -> Result<(), RenderError>;
    fn paragraph(&mut self, text: &str) -> Result<(), RenderError>;
    fn text(&mut self, spans: &[Span]) -> Result<(), RenderError>;
    fn bullet_list(&mut self, items: &[ListItem]) -> Result<(), RenderError>;
    fn download_button(&mut self, label: &str, download: &Download) -> Result<(), RenderError>;
    /// Styled button that opens `url` in a new tab.
    fn link_button(&mut self, label: &str, url: &str) -> Result<(), RenderError>;
    /// Clickable badge image linking to `url`.
    fn badge(&mut self, label: &str, image_url: &str, url: &str) -> Result<(), RenderError>;
    fn link(&mut self, label: &str, url: &str) -> Result<(), RenderError>;
    fn spacer(&mut self) -> Result<(), RenderError>;
    fn divider(&mut self) -> Result<(), RenderError>;
}
