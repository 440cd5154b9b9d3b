/// The person the page is about. Exactly one instance exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub page_title: &'static str,
    /// Emoji shortcode used as the browser tab icon.
    pub page_icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
}

impl SocialLink {
    /// shields.io badge with the platform's brand logo.
    pub fn badge_image_url(&self) -> String {
        format!(
            "https://img.shields.io/badge/-{}-blue?style=flat-square&logo={}&logoColor=white",
            self.platform,
            self.platform.to_lowercase()
        )
    }
}

/// A single past role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    pub link_label: &'static str,
    pub link_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub heading: &'static str,
    pub caption: &'static str,
    pub image_url: &'static str,
}
