/// One project card. `link == None` renders the card without a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub link: Option<&'static str>,
}
