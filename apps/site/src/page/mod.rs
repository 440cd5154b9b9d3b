// Page composition: one linear pass of render calls, no branching on runtime data.
// Assets are loaded before the first call so a missing file never leaves a half-drawn page.

pub mod card;
pub mod social;

use thiserror::Error;
use tracing::{debug, info};

use crate::assets::{load_assets, AssetError, AssetPaths, LoadedAssets};
use crate::content::SiteContent;
use crate::render::{Download, Gap, ImageSource, ListItem, PageMeta, RenderError, Renderer, Span};

pub use card::render_card;
pub use social::render_social_row;

pub const PHOTO_WIDTH: u32 = 230;
pub const RESUME_LABEL: &str = " 📄 Download Resume";
pub const QUALIFICATIONS_HEADING: &str = "Experience & Qualifications";
pub const SKILLS_HEADING: &str = "Hard Skills";
pub const CONNECT_LABEL: &str = "Connect with me:";

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Loads the assets, then composes the page. Nothing reaches the renderer if loading fails.
pub fn build_page(
    paths: &AssetPaths,
    content: &SiteContent,
    renderer: &mut dyn Renderer,
) -> Result<(), PageError> {
    let assets = load_assets(paths)?;
    compose(renderer, &assets, content)?;
    Ok(())
}

pub fn compose(
    renderer: &mut dyn Renderer,
    assets: &LoadedAssets,
    content: &SiteContent,
) -> Result<(), RenderError> {
    let profile = &content.profile;

    renderer.set_page_meta(&PageMeta {
        title: profile.page_title,
        icon: profile.page_icon,
    })?;
    renderer.stylesheet(&assets.stylesheet)?;

    debug!("Rendering hero section");
    renderer.columns(2, Gap::Small)?;
    renderer.column(0)?;
    renderer.image(&ImageSource::local(&assets.photo), Some(PHOTO_WIDTH))?;
    renderer.column(1)?;
    renderer.title(profile.name)?;
    renderer.paragraph(profile.description)?;
    renderer.download_button(RESUME_LABEL, &Download::octet_stream(&assets.resume))?;
    renderer.text(&[Span::plain(format!("📫 {}", profile.email))])?;
    renderer.end_columns()?;

    renderer.spacer()?;
    render_social_row(renderer, content.social_links)?;

    debug!("Rendering qualifications and skills");
    renderer.spacer()?;
    renderer.subheader(QUALIFICATIONS_HEADING)?;
    renderer.bullet_list(&plain_items(content.qualifications))?;

    renderer.subheader(SKILLS_HEADING)?;
    let skills: Vec<ListItem> = content.skills.iter().map(|s| s.to_list_item()).collect();
    renderer.bullet_list(&skills)?;

    debug!("Rendering {} project cards", content.projects.len());
    renderer.title(content.projects_heading)?;
    renderer.paragraph(content.projects_intro)?;
    for project in content.projects {
        render_card(
            renderer,
            project.title,
            project.description,
            project.tools,
            project.link,
        )?;
    }

    let animation = &content.animation;
    renderer.subheader(animation.heading)?;
    renderer.paragraph(animation.caption)?;
    renderer.image(&ImageSource::Remote(animation.image_url.to_string()), None)?;

    debug!("Rendering experience and closing links");
    let experience = &content.experience;
    renderer.spacer()?;
    renderer.subheader(QUALIFICATIONS_HEADING)?;
    renderer.heading(experience.role)?;
    renderer.paragraph(experience.summary)?;
    renderer.bullet_list(&plain_items(experience.responsibilities))?;
    renderer.link(experience.link_label, experience.link_url)?;

    renderer.divider()?;
    renderer.text(&[Span::strong(CONNECT_LABEL)])?;
    render_social_row(renderer, content.social_links)?;

    info!(
        "Composed page for {} ({} projects)",
        profile.name,
        content.projects.len()
    );
    Ok(())
}

fn plain_items(lines: &[&str]) -> Vec<ListItem> {
    lines.iter().map(|line| ListItem::plain(*line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::assets::fixtures::sample_assets;
    use crate::assets::loader::tests::write_site_root;
    use crate::assets::{AssetKind, PHOTO_PATH, RESUME_PATH, STYLESHEET_PATH};
    use crate::render::record::{Call, RecordingRenderer};
    use crate::render::HtmlRenderer;

    fn recorded() -> Vec<Call> {
        let mut renderer = RecordingRenderer::new();
        compose(&mut renderer, &sample_assets(), &SiteContent::authored()).unwrap();
        renderer.calls
    }

    fn badge_rows(calls: &[Call]) -> Vec<Vec<Call>> {
        calls
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Call::Columns { count: 3, .. }))
            .map(|(start, _)| {
                calls[start..]
                    .iter()
                    .take_while(|c| **c != Call::EndColumns)
                    .filter(|c| matches!(c, Call::Badge { .. }))
                    .cloned()
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_page_opens_with_meta_and_stylesheet() {
        let calls = recorded();
        assert_eq!(
            calls[0],
            Call::PageMeta {
                title: "Digital CV | Sahil Tiwari".to_string(),
                icon: ":wave:".to_string(),
            }
        );
        assert_eq!(calls[1], Call::Stylesheet("body { color: #222; }".to_string()));
    }

    #[test]
    fn test_hero_section() {
        let calls = recorded();
        let assets = sample_assets();

        assert_eq!(
            &calls[2..12],
            &[
                Call::Columns {
                    count: 2,
                    gap: Gap::Small
                },
                Call::Column(0),
                Call::Image {
                    source: ImageSource::local(&assets.photo),
                    width: Some(230),
                },
                Call::Column(1),
                Call::Title("Sahil Tiwari".to_string()),
                Call::Paragraph(SiteContent::authored().profile.description.to_string()),
                Call::DownloadButton {
                    label: RESUME_LABEL.to_string(),
                    download: Download {
                        file_name: "burakork-resume.pdf".to_string(),
                        content_type: "application/octet-stream".to_string(),
                        data: assets.resume.data.clone(),
                    },
                },
                Call::Text(vec![Span::plain("📫 sahiltiwari1222@email.com")]),
                Call::EndColumns,
                Call::Spacer,
            ]
        );
    }

    #[test]
    fn test_both_social_rows_are_identical() {
        let rows = badge_rows(&recorded());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);

        let labels: Vec<_> = rows[0]
            .iter()
            .map(|c| match c {
                Call::Badge { label, .. } => label.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub", "Twitter"]);
    }

    #[test]
    fn test_six_cards_in_authored_order() {
        let calls = recorded();
        let content = SiteContent::authored();

        let starts: Vec<usize> = content
            .projects
            .iter()
            .map(|p| {
                calls
                    .iter()
                    .position(|c| *c == Call::Subheader(p.title.to_string()))
                    .unwrap_or_else(|| panic!("card {} not rendered", p.title))
            })
            .collect();
        assert_eq!(starts.len(), 6);
        assert!(starts.windows(2).all(|w| w[0] < w[1]));

        for (project, start) in content.projects.iter().zip(&starts) {
            let block = &calls[*start..];
            assert_eq!(block[1], Call::Paragraph(project.description.to_string()));
            assert_eq!(block[2], Call::Text(vec![Span::strong("Tools Used:")]));

            let tools: Vec<ListItem> = project.tools.iter().map(|t| ListItem::plain(*t)).collect();
            assert_eq!(block[3], Call::BulletList(tools));

            match project.link {
                Some(url) => {
                    assert_eq!(
                        block[4],
                        Call::LinkButton {
                            label: "Project Link".to_string(),
                            url: url.to_string(),
                        }
                    );
                    assert!(!matches!(block[5], Call::LinkButton { .. }));
                }
                None => assert!(!matches!(block[4], Call::LinkButton { .. })),
            }
        }
    }

    #[test]
    fn test_one_button_per_linked_card() {
        let calls = recorded();
        let buttons = calls
            .iter()
            .filter(|c| matches!(c, Call::LinkButton { .. }))
            .count();
        let linked = SiteContent::authored()
            .projects
            .iter()
            .filter(|p| p.link.is_some())
            .count();
        assert_eq!(buttons, linked);
    }

    #[test]
    fn test_animation_and_experience_follow_cards() {
        let calls = recorded();
        let animation = SiteContent::authored().animation;

        let image = calls
            .iter()
            .position(|c| {
                *c == Call::Image {
                    source: ImageSource::Remote(animation.image_url.to_string()),
                    width: None,
                }
            })
            .unwrap();
        let last_card = calls
            .iter()
            .rposition(|c| matches!(c, Call::LinkButton { .. }))
            .unwrap();
        assert!(image > last_card);

        let role = calls
            .iter()
            .position(|c| *c == Call::Heading("Bambhari (Frontend Developer)".to_string()))
            .unwrap();
        assert!(role > image);
        assert!(matches!(
            &calls[role + 3],
            Call::Link { label, .. } if label == "Bambhari Website"
        ));
    }

    #[test]
    fn test_page_closes_with_divider_and_connect_row() {
        let calls = recorded();
        let divider = calls.iter().position(|c| *c == Call::Divider).unwrap();
        assert_eq!(
            calls[divider + 1],
            Call::Text(vec![Span::strong("Connect with me:")])
        );
        assert!(matches!(calls[divider + 2], Call::Columns { count: 3, .. }));
        assert_eq!(calls.last(), Some(&Call::EndColumns));
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(recorded(), recorded());
    }

    #[test]
    fn test_missing_asset_aborts_before_any_render_call() {
        for (relative, expected) in [
            (STYLESHEET_PATH, AssetKind::Stylesheet),
            (RESUME_PATH, AssetKind::Resume),
            (PHOTO_PATH, AssetKind::Photo),
        ] {
            let dir = write_site_root();
            fs::remove_file(dir.path().join(relative)).unwrap();

            let mut renderer = RecordingRenderer::new();
            let err = build_page(
                &AssetPaths::under(dir.path()),
                &SiteContent::authored(),
                &mut renderer,
            )
            .unwrap_err();

            assert!(
                matches!(&err, PageError::Asset(AssetError::Missing { kind, .. }) if *kind == expected),
                "unexpected error {err}"
            );
            assert!(renderer.calls.is_empty());
        }
    }

    #[test]
    fn test_build_page_from_disk() {
        let dir = write_site_root();
        let mut renderer = RecordingRenderer::new();
        build_page(
            &AssetPaths::under(dir.path()),
            &SiteContent::authored(),
            &mut renderer,
        )
        .unwrap();
        assert_eq!(
            renderer.calls[1],
            Call::Stylesheet("h1 { color: navy; }".to_string())
        );
    }

    #[test]
    fn test_renderer_failure_stops_composition() {
        let mut renderer = RecordingRenderer::failing_at(5);
        let err = compose(&mut renderer, &sample_assets(), &SiteContent::authored()).unwrap_err();
        assert!(matches!(err, RenderError::Rejected(_)));
        assert_eq!(renderer.calls.len(), 5);
    }

    #[test]
    fn test_full_page_renders_to_html() {
        let mut renderer = HtmlRenderer::new();
        compose(&mut renderer, &sample_assets(), &SiteContent::authored()).unwrap();
        let page = renderer.finish().unwrap();

        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert_eq!(page.html.matches("Project Link</button>").count(), 6);
        assert_eq!(page.html.matches("class=\"badge\"").count(), 6);
        assert!(page.html.contains("<hr>"));
        assert!(page.file("burakork-resume.pdf").is_some());
        assert!(page.file("p.jpg").is_some());
        assert_eq!(page.files.len(), 2);
    }
}
