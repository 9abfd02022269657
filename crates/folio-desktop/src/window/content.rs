//! Window content payloads
//!
//! Each window kind displays a different sort of content. The payload is a
//! tagged union so a Finder folder can never end up in the image viewer.

use serde::{Deserialize, Serialize};

use crate::catalog::LocationRef;
use super::WindowId;

/// A text document shown in the text viewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

/// An image shown in the image viewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub name: String,
    pub image_url: String,
}

/// A snippet loaded into the code editor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub name: String,
    pub code: String,
}

/// Window-specific payload carried in [`WindowState::data`](super::WindowState)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowContent {
    /// Folder to browse in Finder
    Folder(LocationRef),
    /// Document for the text viewer
    Text(TextFile),
    /// Picture for the image viewer
    Image(ImageFile),
    /// Source for the code editor
    Code(CodeSnippet),
    /// Page for the browser window
    Link { url: String },
}

impl WindowContent {
    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            WindowContent::Folder(_) => "folder",
            WindowContent::Text(_) => "text",
            WindowContent::Image(_) => "image",
            WindowContent::Code(_) => "code",
            WindowContent::Link { .. } => "link",
        }
    }

    /// The window that displays this kind of content
    pub fn target(&self) -> WindowId {
        match self {
            WindowContent::Folder(_) => WindowId::Finder,
            WindowContent::Text(_) => WindowId::TxtFile,
            WindowContent::Image(_) => WindowId::ImgFile,
            WindowContent::Code(_) => WindowId::CodeEditor,
            WindowContent::Link { .. } => WindowId::Safari,
        }
    }

    /// Check whether `id` can display this payload
    #[inline]
    pub fn accepted_by(&self, id: WindowId) -> bool {
        self.target() == id
    }
}
