use crate::render::{ListItem, RenderError, Renderer, Span};

pub const TOOLS_LABEL: &str = "Tools Used:";
pub const LINK_LABEL: &str = "Project Link";

/// Renders one project card: heading, description, tool bullets in input order,
/// and a "Project Link" button only when `link` is present.
///
/// No validation: empty strings are rendered as-is and an empty `tools` slice
/// simply emits no list.
pub fn render_card(
    renderer: &mut dyn Renderer,
    title: &str,
    description: &str,
    tools: &[&str],
    link: Option<&str>,
) -> Result<(), RenderError> {
    renderer.subheader(title)?;
    renderer.paragraph(description)?;
    renderer.text(&[Span::strong(TOOLS_LABEL)])?;

    if !tools.is_empty() {
        let items: Vec<ListItem> = tools.iter().map(|tool| ListItem::plain(*tool)).collect();
        renderer.bullet_list(&items)?;
    }

    if let Some(url) = link {
        renderer.link_button(LINK_LABEL, url)?;
    }
    Ok(())
}
