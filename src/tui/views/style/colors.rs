use anyhow::{Context, Error, Result, ensure};
use ratatui::style::Color;

use crate::configs::style::{Colors, DEFAULT_COLOR};

/// Resolved palette. Section colors left empty in the config inherit from
/// the matching base color (`borders`, `text`, `background`).
#[derive(Debug)]
pub struct ColorStyle {
    pub highlights_text: Color,
    pub highlights_background: Color,
    pub borders_list: Color,
    pub borders_counter: Color,
    pub borders_status: Color,
    pub text_list: Color,
    pub text_counter: Color,
    pub text_hint: Color,
    pub text_status: Color,
    pub button_enabled: Color,
    pub button_disabled: Color,
    pub background: Color,
    pub background_list: Color,
    pub background_counter: Color,
    pub background_status: Color,
}

impl TryFrom<&Colors> for ColorStyle {
    type Error = Error;

    fn try_from(colors: &Colors) -> Result<Self> {
        let borders = parse_color(&colors.borders)?.unwrap_or(Color::Reset);
        let text = parse_color(&colors.text)?.unwrap_or(Color::Reset);
        let background = parse_color(&colors.background)?.unwrap_or(Color::Reset);
        let text_counter = parse_color(&colors.text_counter)?.unwrap_or(text);

        let color_style = Self {
            highlights_text: parse_color(&colors.highlights_text)?.unwrap_or(Color::Reset),
            highlights_background: parse_color(&colors.highlights_background)?
                .unwrap_or(Color::Reset),
            borders_list: parse_color(&colors.borders_list)?.unwrap_or(borders),
            borders_counter: parse_color(&colors.borders_counter)?.unwrap_or(borders),
            borders_status: parse_color(&colors.borders_status)?.unwrap_or(borders),
            text_list: parse_color(&colors.text_list)?.unwrap_or(text),
            text_counter,
            text_hint: parse_color(&colors.text_hint)?.unwrap_or(text_counter),
            text_status: parse_color(&colors.text_status)?.unwrap_or(text),
            button_enabled: parse_color(&colors.button_enabled)?.unwrap_or(text_counter),
            button_disabled: parse_color(&colors.button_disabled)?.unwrap_or(Color::DarkGray),
            background,
            background_list: parse_color(&colors.background_list)?.unwrap_or(background),
            background_counter: parse_color(&colors.background_counter)?.unwrap_or(background),
            background_status: parse_color(&colors.background_status)?.unwrap_or(background),
        };

        Ok(color_style)
    }
}

/// Parses a named color, `terminal`, or `#rrggbb`. Empty input yields `None`.
pub fn parse_color(color: &str) -> Result<Option<Color>> {
    let normalized_color = color.trim().to_lowercase();

    if normalized_color.is_empty() {
        return Ok(None);
    }

    let color = match normalized_color.as_str() {
        DEFAULT_COLOR => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        hex => parse_hex(hex)?,
    };

    Ok(Some(color))
}

fn parse_hex(color: &str) -> Result<Color> {
    let hex = color
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.is_ascii())
        .with_context(|| {
            format!(
                "Color {} format is not correct, it must be in format of #ffffff",
                color
            )
        })?;

    let rgb = u32::from_str_radix(hex, 16).with_context(|| {
        format!(
            "Color {} is not a valid hex string, it must be in format of #ffffff",
            color
        )
    })?;
    ensure!(
        !hex.starts_with('+'),
        "Color {} is not a valid hex string, it must be in format of #ffffff",
        color
    );

    let [_, r, g, b] = rgb.to_be_bytes();
    Ok(Color::Rgb(r, g, b))
}
