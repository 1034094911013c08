//! Static page content. The tables are kept in `assets/content.json` and
//! baked into the binary, so editing copy never touches component code.

use serde::Deserialize;

use crate::error::SiteError;

const CONTENT_JSON: &str = include_str!("../assets/content.json");

/// Relative to the asset base, like every `Project::image`.
pub const HERO_IMAGE: &str = "/images/engineering.svg";

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Database,
    Cpu,
    Globe,
    LineChart,
    Activity,
    Users,
    Award,
    MessageSquare,
    Target,
    Hexagon,
    Triangle,
    CheckCircle,
    MapPin,
    Phone,
    Mail,
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Database => "🗄️",
            Icon::Cpu => "🔌",
            Icon::Globe => "🌐",
            Icon::LineChart => "📈",
            Icon::Activity => "⚙️",
            Icon::Users => "👥",
            Icon::Award => "🏆",
            Icon::MessageSquare => "💬",
            Icon::Target => "🎯",
            Icon::Hexagon => "⬡",
            Icon::Triangle => "△",
            Icon::CheckCircle => "✔",
            Icon::MapPin => "📍",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::Twitter => "𝕏",
            Icon::Facebook => "f",
            Icon::Instagram => "◎",
            Icon::Linkedin => "in",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub icon: Icon,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub image: String,
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub position: String,
    pub company: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactEntry {
    pub icon: Icon,
    pub title: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub about_highlights: Vec<String>,
    pub stats: Vec<Stat>,
    pub principles: Vec<Feature>,
    pub services: Vec<Feature>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub contact_info: Vec<ContactEntry>,
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    pub fn load() -> Result<Self, SiteError> {
        Ok(serde_json::from_str(CONTENT_JSON)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tables_parse() {
        let content = SiteContent::load().expect("bundled content must parse");
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.principles.len(), 4);
        assert_eq!(content.contact_info.len(), 3);
        assert_eq!(content.social_links.len(), 4);
        assert_eq!(content.about_highlights.len(), 3);
    }

    #[test]
    fn stats_table_is_the_canonical_one() {
        let content = SiteContent::load().unwrap();
        let stats: Vec<(&str, u32)> = content
            .stats
            .iter()
            .map(|stat| (stat.label.as_str(), stat.value))
            .collect();
        assert_eq!(
            stats,
            vec![
                ("Projects Completed", 1250),
                ("Years Experience", 25),
                ("Client Satisfaction", 98),
                ("Countries Served", 45),
            ]
        );
        assert_eq!(content.stats[2].suffix, "%");
    }

    #[test]
    fn every_referenced_image_ships_with_the_assets() {
        let content = SiteContent::load().unwrap();
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let referenced = std::iter::once(HERO_IMAGE)
            .chain(content.projects.iter().map(|project| project.image.as_str()));
        for image in referenced {
            let file = assets.join(image.trim_start_matches('/'));
            assert!(file.is_file(), "{} is not under assets/", image);
        }
    }

    #[test]
    fn unknown_icon_is_a_content_error() {
        let err = serde_json::from_str::<Feature>(
            r#"{ "icon": "rocket", "title": "x", "description": "y" }"#,
        )
        .map_err(SiteError::from)
        .unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }
}
