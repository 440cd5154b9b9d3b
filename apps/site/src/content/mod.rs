// Authored page content. Everything here is fixed at compile time.

pub mod profile;
pub mod projects;
pub mod skills;

use crate::models::{Animation, Experience, Profile, ProjectCard, SkillCategory, SocialLink};

/// Everything the composer renders besides the loaded assets.
#[derive(Debug, Clone, Copy)]
pub struct SiteContent {
    pub profile: Profile,
    pub social_links: &'static [SocialLink],
    pub qualifications: &'static [&'static str],
    pub skills: &'static [SkillCategory],
    pub projects_heading: &'static str,
    pub projects_intro: &'static str,
    pub projects: &'static [ProjectCard],
    pub animation: Animation,
    pub experience: Experience,
}

impl SiteContent {
    pub const fn authored() -> Self {
        Self {
            profile: profile::PROFILE,
            social_links: profile::SOCIAL_LINKS,
            qualifications: profile::QUALIFICATIONS,
            skills: skills::SKILLS,
            projects_heading: projects::PROJECTS_HEADING,
            projects_intro: projects::PROJECTS_INTRO,
            projects: projects::PROJECTS,
            animation: projects::ANIMATION,
            experience: profile::EXPERIENCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_social_links_are_complete_and_unique() {
        let content = SiteContent::authored();
        assert!(!content.social_links.is_empty());

        let mut seen = HashSet::new();
        for link in content.social_links {
            assert!(!link.platform.trim().is_empty());
            assert!(!link.url.trim().is_empty(), "{} has no URL", link.platform);
            assert!(link.url.starts_with("https://"), "{}", link.url);
            assert!(seen.insert(link.platform), "duplicate {}", link.platform);

            let badge = link.badge_image_url();
            assert!(badge.contains(&format!("-{}-", link.platform)));
            assert!(badge.contains(&format!("logo={}", link.platform.to_lowercase())));
        }
    }

    #[test]
    fn test_social_link_order_is_authored_order() {
        let platforms: Vec<_> = SiteContent::authored()
            .social_links
            .iter()
            .map(|l| l.platform)
            .collect();
        assert_eq!(platforms, vec!["LinkedIn", "GitHub", "Twitter"]);
    }

    #[test]
    fn test_six_complete_project_cards() {
        let projects = SiteContent::authored().projects;
        assert_eq!(projects.len(), 6);

        for card in projects {
            assert!(!card.title.trim().is_empty());
            assert!(!card.description.trim().is_empty(), "{}", card.title);
            assert!(!card.tools.is_empty(), "{} lists no tools", card.title);
            assert!(card.tools.iter().all(|t| !t.trim().is_empty()));
            if let Some(link) = card.link {
                assert!(link.starts_with("https://"), "{link}");
            }
        }
    }

    #[test]
    fn test_project_titles_are_numbered_in_order() {
        for (index, card) in SiteContent::authored().projects.iter().enumerate() {
            assert!(
                card.title.contains(&format!("Project {}:", index + 1)),
                "{}",
                card.title
            );
        }
    }

    #[test]
    fn test_profile_and_experience_are_filled_in() {
        let content = SiteContent::authored();
        assert!(!content.profile.name.is_empty());
        assert!(content.profile.email.contains('@'));
        assert_eq!(content.qualifications.len(), 4);
        assert!(!content.experience.responsibilities.is_empty());
        assert!(!content.experience.link_url.is_empty());
    }

    #[test]
    fn test_skill_categories_have_summary_or_tools() {
        for category in SiteContent::authored().skills {
            assert!(
                category.summary.is_some() || !category.tools.is_empty(),
                "{} is empty",
                category.name
            );
        }
    }
}
