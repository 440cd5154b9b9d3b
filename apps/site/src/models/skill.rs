use crate::render::{ListItem, Span};

/// Top-level skill bullet, optionally with a nested list of tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub emoji: &'static str,
    pub summary: Option<&'static str>,
    pub tools: &'static [SkillTool],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTool {
    pub name: &'static str,
    pub description: &'static str,
}

impl SkillCategory {
    /// `**Name** emoji: summary`, with one bold-named child per tool.
    pub fn to_list_item(&self) -> ListItem {
        let tail = match self.summary {
            Some(summary) => format!(" {}: {}", self.emoji, summary),
            None => format!(" {}:", self.emoji),
        };
        ListItem::new(vec![Span::strong(self.name), Span::plain(tail)])
            .with_children(self.tools.iter().map(SkillTool::to_list_item).collect())
    }
}

impl SkillTool {
    pub fn to_list_item(&self) -> ListItem {
        ListItem::new(vec![
            Span::strong(self.name),
            Span::plain(format!(": {}", self.description)),
        ])
    }
}
