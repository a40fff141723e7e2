use ratatui::layout::Constraint;

use crate::configs::style::ScreenScaffold;

pub struct ScreenScaffoldStyle {
    pub left_split: u16,
    pub right_split: u16,
}

impl ScreenScaffoldStyle {
    pub fn constraints(&self) -> [Constraint; 2] {
        [
            Constraint::Percentage(self.left_split),
            Constraint::Percentage(self.right_split),
        ]
    }
}

impl From<&ScreenScaffold> for ScreenScaffoldStyle {
    fn from(scaffold: &ScreenScaffold) -> Self {
        Self {
            left_split: scaffold.left_split,
            right_split: scaffold.right_split,
        }
    }
}
