use crate::models::SocialLink;
use crate::render::{Gap, RenderError, Renderer};

/// One column per link, each holding a shields.io badge. Nothing is rendered for an empty table.
pub fn render_social_row(
    renderer: &mut dyn Renderer,
    links: &[SocialLink],
) -> Result<(), RenderError> {
    if links.is_empty() {
        return Ok(());
    }

    renderer.columns(links.len(), Gap::Small)?;
    for (index, link) in links.iter().enumerate() {
        renderer.column(index)?;
        renderer.badge(link.platform, &link.badge_image_url(), link.url)?;
    }
    renderer.end_columns()
}
