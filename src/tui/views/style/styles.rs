use anyhow::{Error, Result};

use crate::{
    configs,
    tui::views::style::{ColorStyle, CounterStyle, ListStyle, ScreenScaffoldStyle, StatusStyle},
};

pub struct Styles {
    pub list: ListStyle,
    pub counter: CounterStyle,
    pub colors: ColorStyle,
    pub status: StatusStyle,
    pub screen_scaffold: ScreenScaffoldStyle,
}

impl TryFrom<&configs::Styles> for Styles {
    type Error = Error;

    fn try_from(styles: &configs::Styles) -> Result<Styles> {
        let styles = Self {
            list: ListStyle::from(&styles.list),
            counter: CounterStyle::from(&styles.counter),
            colors: ColorStyle::try_from(&styles.colors)?,
            status: StatusStyle::from(&styles.status),
            screen_scaffold: ScreenScaffoldStyle::from(&styles.screen_scaffold),
        };
        Ok(styles)
    }
}
