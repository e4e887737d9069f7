use serde::{Deserialize, Serialize};

/// The fixed set of platforms a scan fans out to.
///
/// Every generation call produces exactly one record per variant, in the
/// order of [`Platform::ALL`] — there are never partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Facebook,
    Linkedin,
    Github,
    Reddit,
    Tiktok,
    Youtube,
}

impl Platform {
    /// Canonical scan order. Generation and display both follow this.
    pub const ALL: [Platform; 8] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Linkedin,
        Platform::Github,
        Platform::Reddit,
        Platform::Tiktok,
        Platform::Youtube,
    ];

    /// Lowercase wire name, used in usernames, URLs, and filter matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Github => "github",
            Platform::Reddit => "reddit",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }

    /// Capitalized name for human-facing text (bios, card headers).
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Linkedin => "Linkedin",
            Platform::Github => "Github",
            Platform::Reddit => "Reddit",
            Platform::Tiktok => "Tiktok",
            Platform::Youtube => "Youtube",
        }
    }

    /// Parse a lowercase platform name. Unknown names return None so
    /// callers can degrade to a permissive filter rather than erroring.
    pub fn parse(name: &str) -> Option<Self> {
        Platform::ALL.iter().copied().find(|p| p.as_str() == name)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
