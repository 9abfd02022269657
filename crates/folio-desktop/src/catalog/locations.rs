//! Finder locations and their folder trees

use core::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a file in Finder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Txt,
    Url,
    Img,
    Fig,
    Pdf,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Txt => "txt",
            FileKind::Url => "url",
            FileKind::Img => "img",
            FileKind::Fig => "fig",
            FileKind::Pdf => "pdf",
        }
    }
}

/// Folder or file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File(FileKind),
}

/// An entry in a Finder folder
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FinderNode {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub description: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub children: &'static [FinderNode],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

const BLANK: FinderNode = FinderNode {
    id: 0,
    name: "",
    icon: "",
    kind: NodeKind::Folder,
    href: None,
    image_url: None,
    subtitle: None,
    image: None,
    description: &[],
    children: &[],
};

impl FinderNode {
    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// File kind, or `None` for folders
    #[inline]
    pub fn file_kind(&self) -> Option<FileKind> {
        match self.kind {
            NodeKind::File(kind) => Some(kind),
            NodeKind::Folder => None,
        }
    }
}

/// Top-level Finder sidebar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKey {
    Work,
    About,
    Resume,
    Trash,
}

impl LocationKey {
    pub const ALL: [LocationKey; 4] = [
        LocationKey::Work,
        LocationKey::About,
        LocationKey::Resume,
        LocationKey::Trash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationKey::Work => "work",
            LocationKey::About => "about",
            LocationKey::Resume => "resume",
            LocationKey::Trash => "trash",
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Finder sidebar location with its contents
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Location {
    pub key: LocationKey,
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub children: &'static [FinderNode],
}

/// Pointer to a folder Finder can show: a location, or a project folder
/// directly inside it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRef {
    pub location: LocationKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<u32>,
}

impl LocationRef {
    /// Top level of a location
    #[inline]
    pub const fn top(location: LocationKey) -> Self {
        Self { location, folder: None }
    }

    /// A project folder inside a location
    #[inline]
    pub const fn project(location: LocationKey, folder: u32) -> Self {
        Self { location, folder: Some(folder) }
    }

    /// Display name of the referenced folder
    pub fn name(&self) -> Option<&'static str> {
        match self.folder {
            None => Some(location(self.location).name),
            Some(_) => find_folder(*self).map(|node| node.name),
        }
    }

    /// Entries of the referenced folder
    pub fn children(&self) -> Option<&'static [FinderNode]> {
        match self.folder {
            None => Some(location(self.location).children),
            Some(_) => find_folder(*self).map(|node| node.children),
        }
    }
}

impl Default for LocationRef {
    fn default() -> Self {
        Self::top(LocationKey::Work)
    }
}

/// All Finder locations in sidebar order
pub fn locations() -> &'static [Location] {
    &LOCATIONS
}

/// Location for a key
pub fn location(key: LocationKey) -> &'static Location {
    match key {
        LocationKey::Work => &LOCATIONS[0],
        LocationKey::About => &LOCATIONS[1],
        LocationKey::Resume => &LOCATIONS[2],
        LocationKey::Trash => &LOCATIONS[3],
    }
}

/// Project folder a reference points at
pub fn find_folder(loc: LocationRef) -> Option<&'static FinderNode> {
    let folder_id = loc.folder?;
    location(loc.location)
        .children
        .iter()
        .find(|node| node.is_folder() && node.id == folder_id)
}

const TXT_ICON: &str = "/images/txt.png";
const URL_ICON: &str = "/images/safari.png";
const IMG_ICON: &str = "/images/image.png";
const FIG_ICON: &str = "/images/plain.png";
const FOLDER_ICON: &str = "/images/folder.png";

const SEARCH_ENGINE: [FinderNode; 4] = [
    FinderNode {
        id: 1,
        name: "SearchEngine.txt",
        icon: TXT_ICON,
        kind: NodeKind::File(FileKind::Txt),
        description: &[
            "Built an end-to-end scholarly search engine using Information Retrieval techniques (TF-IDF, vector-space ranking).",
            "Implemented a modular IR pipeline for preprocessing, indexing, and query ranking",
            "Developed a web-based search interface to display ranked academic results.",
            "Improved retrieval relevance by tuning text preprocessing and similarity measures.",
        ],
        ..BLANK
    },
    FinderNode {
        id: 2,
        name: "github.com",
        icon: URL_ICON,
        kind: NodeKind::File(FileKind::Url),
        href: Some("https://github.com/sisodiajatin/CS547-IR-Scholarly-Search"),
        ..BLANK
    },
    FinderNode {
        id: 4,
        name: "search-engine.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/project-1.png"),
        ..BLANK
    },
    FinderNode {
        id: 5,
        name: "Design.fig",
        icon: FIG_ICON,
        kind: NodeKind::File(FileKind::Fig),
        href: Some("https://google.com"),
        ..BLANK
    },
];

const ATTACK_MAP: [FinderNode; 4] = [
    FinderNode {
        id: 1,
        name: "DDOS Attack Map",
        icon: TXT_ICON,
        kind: NodeKind::File(FileKind::Txt),
        description: &[
            "A front-end application that displays a map of distributed denial-of-service (DDoS) attacks using real-time or simulated data.",
            "The codebase uses TypeScript and React (Vite tooling), with components, services, and API integration structured for performance.",
            "Backend services fetch attack data and resolve IP addresses to geographic coordinates for mapping.",
            "Raw DDoS-related data becomes clear visual insight into large-scale attack patterns.",
        ],
        ..BLANK
    },
    FinderNode {
        id: 2,
        name: "sentinel-d-dos-attack-map.vercel.app",
        icon: URL_ICON,
        kind: NodeKind::File(FileKind::Url),
        href: Some("https://sentinel-d-dos-attack-map.vercel.app/"),
        ..BLANK
    },
    FinderNode {
        id: 4,
        name: "DDOSMap.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/DDOSmap.png"),
        ..BLANK
    },
    FinderNode {
        id: 5,
        name: "Design.fig",
        icon: FIG_ICON,
        kind: NodeKind::File(FileKind::Fig),
        href: Some("https://google.com"),
        ..BLANK
    },
];

const UPHORIA: [FinderNode; 4] = [
    FinderNode {
        id: 1,
        name: "Uphoria.txt",
        icon: TXT_ICON,
        kind: NodeKind::File(FileKind::Txt),
        description: &[
            "An Android application that detects user emotions from facial expressions and recommends music based on the detected mood.",
            "Built natively with Kotlin and CameraX, integrating Spotify for music metadata and playback.",
            "Uses DeepFace for real-time facial emotion classification across multiple emotional states.",
            "A Python/Flask backend handles emotion inference and recommendation logic.",
        ],
        ..BLANK
    },
    FinderNode {
        id: 2,
        name: "github.com",
        icon: URL_ICON,
        kind: NodeKind::File(FileKind::Url),
        href: Some("https://github.com/sisodiajatin/EmotionToMusic-App"),
        ..BLANK
    },
    FinderNode {
        id: 4,
        name: "food-delivery-app.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/project-3.png"),
        ..BLANK
    },
    FinderNode {
        id: 5,
        name: "Design.fig",
        icon: FIG_ICON,
        kind: NodeKind::File(FileKind::Fig),
        href: Some("https://google.com"),
        ..BLANK
    },
];

const WORK: [FinderNode; 3] = [
    FinderNode { id: 5, name: "Scholarly Search Engine", icon: FOLDER_ICON, children: &SEARCH_ENGINE, ..BLANK },
    FinderNode { id: 6, name: "Sentinel DDOS Attack Map", icon: FOLDER_ICON, children: &ATTACK_MAP, ..BLANK },
    FinderNode {
        id: 7,
        name: "Uphoria: Emotion Based Music Recommendation App",
        icon: FOLDER_ICON,
        children: &UPHORIA,
        ..BLANK
    },
];

const ABOUT: [FinderNode; 4] = [
    FinderNode {
        id: 1,
        name: "me.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/"),
        ..BLANK
    },
    FinderNode {
        id: 2,
        name: "casual-me.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/"),
        ..BLANK
    },
    FinderNode {
        id: 3,
        name: "conference-me.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/"),
        ..BLANK
    },
    FinderNode {
        id: 4,
        name: "about-me.txt",
        icon: TXT_ICON,
        kind: NodeKind::File(FileKind::Txt),
        subtitle: Some("Meet the Developer Behind the Code"),
        image: Some("/images/cat.jpg"),
        description: &[
            "Hey! I'm Jatin, a web developer who enjoys building sleek, interactive websites that actually work well.",
            "I specialize in JavaScript, React, and Next.js and I love making things feel smooth, fast, and just a little bit delightful.",
            "I'm big on clean UI, and writing code that doesn't need a search party to debug.",
        ],
        ..BLANK
    },
];

const RESUME: [FinderNode; 1] = [FinderNode {
    id: 1,
    name: "Resume.pdf",
    icon: "/images/pdf.png",
    kind: NodeKind::File(FileKind::Pdf),
    ..BLANK
}];

const TRASH: [FinderNode; 2] = [
    FinderNode {
        id: 1,
        name: "trash1.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/trash-1.png"),
        ..BLANK
    },
    FinderNode {
        id: 2,
        name: "trash2.png",
        icon: IMG_ICON,
        kind: NodeKind::File(FileKind::Img),
        image_url: Some("/images/trash-2.png"),
        ..BLANK
    },
];

static LOCATIONS: [Location; 4] = [
    Location { key: LocationKey::Work, id: 1, name: "Work", icon: "/icons/work.svg", children: &WORK },
    Location { key: LocationKey::About, id: 2, name: "About me", icon: "/icons/info.svg", children: &ABOUT },
    Location { key: LocationKey::Resume, id: 3, name: "Resume", icon: "/icons/file.svg", children: &RESUME },
    Location { key: LocationKey::Trash, id: 4, name: "Trash", icon: "/icons/trash.svg", children: &TRASH },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_lookup_matches_key() {
        for key in LocationKey::ALL {
            assert_eq!(location(key).key, key);
        }
    }

    #[test]
    fn test_find_project_folder() {
        let loc = LocationRef::project(LocationKey::Work, 6);
        assert_eq!(loc.name(), Some("Sentinel DDOS Attack Map"));
        assert_eq!(loc.children().map(<[_]>::len), Some(4));

        // Files are not folders
        assert!(find_folder(LocationRef::project(LocationKey::About, 4)).is_none());
        assert!(find_folder(LocationRef::project(LocationKey::Work, 99)).is_none());
    }

    #[test]
    fn test_top_level_ref() {
        let loc = LocationRef::top(LocationKey::About);
        assert_eq!(loc.name(), Some("About me"));
        assert!(find_folder(loc).is_none());
        assert_eq!(LocationRef::default().location, LocationKey::Work);
    }

    #[test]
    fn test_node_serializes_without_empty_fields() {
        let json = serde_json::to_value(RESUME[0]).unwrap();
        assert_eq!(json["name"], "Resume.pdf");
        assert!(json.get("children").is_none());
        assert!(json.get("href").is_none());
    }
}
