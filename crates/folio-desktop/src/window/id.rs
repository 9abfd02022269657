//! Window identifiers

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Stable identifier of a desktop window
///
/// The set is closed: every window the desktop can show is listed here and
/// gets exactly one registry slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    Finder,
    Contact,
    Resume,
    Safari,
    Photos,
    Terminal,
    TxtFile,
    ImgFile,
    CodeEditor,
}

impl WindowId {
    /// Every known window, in registry seed order
    pub const ALL: [WindowId; 9] = [
        WindowId::Finder,
        WindowId::Contact,
        WindowId::Resume,
        WindowId::Safari,
        WindowId::Photos,
        WindowId::Terminal,
        WindowId::TxtFile,
        WindowId::ImgFile,
        WindowId::CodeEditor,
    ];

    /// Wire name used by the browser shell
    pub fn as_str(self) -> &'static str {
        match self {
            WindowId::Finder => "finder",
            WindowId::Contact => "contact",
            WindowId::Resume => "resume",
            WindowId::Safari => "safari",
            WindowId::Photos => "photos",
            WindowId::Terminal => "terminal",
            WindowId::TxtFile => "txtfile",
            WindowId::ImgFile => "imgfile",
            WindowId::CodeEditor => "codeeditor",
        }
    }

    /// Human-readable title shown in notifications
    pub fn title(self) -> &'static str {
        match self {
            WindowId::Finder => "Portfolio",
            WindowId::Contact => "Contact",
            WindowId::Resume => "Resume",
            WindowId::Safari => "Articles",
            WindowId::Photos => "Gallery",
            WindowId::Terminal => "Skills",
            WindowId::TxtFile => "Text File",
            WindowId::ImgFile => "Image File",
            WindowId::CodeEditor => "Code Editor",
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownWindow(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!("finder".parse::<WindowId>(), Ok(WindowId::Finder));
        assert_eq!("codeeditor".parse::<WindowId>(), Ok(WindowId::CodeEditor));
        assert_eq!("imgfile".parse::<WindowId>(), Ok(WindowId::ImgFile));
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "trash".parse::<WindowId>().unwrap_err();
        assert_eq!(err, DesktopError::UnknownWindow("trash".to_string()));
        // Case matters: the shell always sends lowercase ids
        assert!("Finder".parse::<WindowId>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&WindowId::TxtFile).unwrap();
        assert_eq!(json, "\"txtfile\"");
        let id: WindowId = serde_json::from_str("\"codeeditor\"").unwrap();
        assert_eq!(id, WindowId::CodeEditor);
    }

    #[test]
    fn test_display_matches_as_str() {
        for id in WindowId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }
}
