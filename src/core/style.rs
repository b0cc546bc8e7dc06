//! Named text decorations backed by the `colored` styling engine
//!
//! A [`Style`] is one decoration addressed by name: a foreground color
//! (`red`, `bright_blue`, `#ff8800`), a background color (`on_red`,
//! `on_#202020`), a modifier (`bold`, `underline`, ...), `normal` or `clear`.
//! Names are the `Colorize` operations of `colored`, so the vocabulary is
//! exactly what the engine can render.

use super::config::ColorChoice;
use super::error::{LoggerError, Result};
use colored::{Color, ColoredString, Colorize, Styles};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Ordered sequence of styles; order is composition order.
pub type StyleList = Vec<Style>;

/// Text attribute that can be layered on top of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Bold,
    Dimmed,
    Italic,
    Underline,
    Blink,
    Reversed,
    Hidden,
    Strikethrough,
}

impl Modifier {
    pub const ALL: [Modifier; 8] = [
        Modifier::Bold,
        Modifier::Dimmed,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Blink,
        Modifier::Reversed,
        Modifier::Hidden,
        Modifier::Strikethrough,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Modifier::Bold => "bold",
            Modifier::Dimmed => "dimmed",
            Modifier::Italic => "italic",
            Modifier::Underline => "underline",
            Modifier::Blink => "blink",
            Modifier::Reversed => "reversed",
            Modifier::Hidden => "hidden",
            Modifier::Strikethrough => "strikethrough",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Modifier::Bold),
            "dimmed" | "dim" => Some(Modifier::Dimmed),
            "italic" => Some(Modifier::Italic),
            "underline" => Some(Modifier::Underline),
            "blink" => Some(Modifier::Blink),
            "reversed" => Some(Modifier::Reversed),
            "hidden" => Some(Modifier::Hidden),
            "strikethrough" => Some(Modifier::Strikethrough),
            _ => None,
        }
    }

    fn apply(&self, text: ColoredString) -> ColoredString {
        match self {
            Modifier::Bold => text.bold(),
            Modifier::Dimmed => text.dimmed(),
            Modifier::Italic => text.italic(),
            Modifier::Underline => text.underline(),
            Modifier::Blink => text.blink(),
            Modifier::Reversed => text.reversed(),
            Modifier::Hidden => text.hidden(),
            Modifier::Strikethrough => text.strikethrough(),
        }
    }
}

/// A single named decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Leaves the text untouched
    Normal,
    /// Drops every decoration applied before it
    Clear,
    Foreground(Color),
    Background(Color),
    Modifier(Modifier),
}

const NAMED_COLORS: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

fn brighten(color: Color) -> Option<Color> {
    match color {
        Color::Black => Some(Color::BrightBlack),
        Color::Red => Some(Color::BrightRed),
        Color::Green => Some(Color::BrightGreen),
        Color::Yellow => Some(Color::BrightYellow),
        Color::Blue => Some(Color::BrightBlue),
        Color::Magenta => Some(Color::BrightMagenta),
        Color::Cyan => Some(Color::BrightCyan),
        Color::White => Some(Color::BrightWhite),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn parse_color(name: &str) -> Option<Color> {
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(base) = name.strip_prefix("bright_") {
        return parse_color(base).and_then(brighten);
    }
    if name == "purple" {
        return Some(Color::Magenta);
    }
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

fn color_name(color: &Color) -> String {
    let base = |bright: Color| {
        NAMED_COLORS
            .iter()
            .find(|(_, c)| brighten(*c) == Some(bright))
            .map(|(name, _)| *name)
    };
    match *color {
        Color::TrueColor { r, g, b } => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => match NAMED_COLORS.iter().find(|(_, c)| *c == other) {
            Some((name, _)) => (*name).to_string(),
            None => format!("bright_{}", base(other).unwrap_or("white")),
        },
    }
}

/// Lower-cases a style name and folds the accepted separators onto `_`.
fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(|c: char| c == '-' || c.is_whitespace(), "_")
}

impl Style {
    /// Parse a list of style names, failing on the first unknown name.
    pub fn parse_list<I, S>(names: I) -> Result<StyleList>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| name.as_ref().parse()).collect()
    }

    fn apply(&self, text: ColoredString) -> ColoredString {
        match self {
            Style::Normal => text,
            Style::Clear => text.clear(),
            Style::Foreground(color) => text.color(*color),
            Style::Background(color) => text.on_color(*color),
            Style::Modifier(modifier) => modifier.apply(text),
        }
    }
}

impl FromStr for Style {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let name = normalize(s);
        let style = match name.as_str() {
            "normal" => Some(Style::Normal),
            "clear" => Some(Style::Clear),
            other => Modifier::parse(other)
                .map(Style::Modifier)
                .or_else(|| match other.strip_prefix("on_") {
                    Some(background) => parse_color(background).map(Style::Background),
                    None => parse_color(other).map(Style::Foreground),
                }),
        };
        style.ok_or_else(|| LoggerError::invalid_style(s))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Normal => write!(f, "normal"),
            Style::Clear => write!(f, "clear"),
            Style::Foreground(color) => write!(f, "{}", color_name(color)),
            Style::Background(color) => write!(f, "on_{}", color_name(color)),
            Style::Modifier(modifier) => write!(f, "{}", modifier.to_str()),
        }
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// SGR codes of the modifiers, in the order `colored` writes them
const MODIFIER_CODES: [(Styles, &str); 8] = [
    (Styles::Bold, "1"),
    (Styles::Dimmed, "2"),
    (Styles::Underline, "4"),
    (Styles::Reversed, "7"),
    (Styles::Italic, "3"),
    (Styles::Blink, "5"),
    (Styles::Hidden, "8"),
    (Styles::Strikethrough, "9"),
];

const RESET: &str = "\x1b[0m";

fn compose(message: &str, styles: &[Style]) -> ColoredString {
    styles
        .iter()
        .fold(message.normal(), |text, style| style.apply(text))
}

/// Escape sequence that opens `text`, `None` when nothing is set
fn opening_sequence(text: &ColoredString) -> Option<String> {
    if text.is_plain() {
        return None;
    }
    let modifiers = text.style();
    let mut codes: Vec<Cow<'static, str>> = MODIFIER_CODES
        .iter()
        .filter(|(flag, _)| modifiers.contains(*flag))
        .map(|(_, code)| Cow::Borrowed(*code))
        .collect();
    codes.extend(text.bgcolor().map(|color| color.to_bg_str()));
    codes.extend(text.fgcolor().map(|color| color.to_fg_str()));
    Some(format!("\x1b[{}m", codes.join(";")))
}

/// Apply `styles` to `message` in order.
///
/// An empty list returns the message untouched. Whether escape codes are
/// actually emitted is decided by `colored::control` (tty detection,
/// `NO_COLOR`, `CLICOLOR_FORCE`, or an explicit override).
pub fn format(message: &str, styles: &[Style]) -> String {
    if styles.is_empty() {
        return message.to_string();
    }
    compose(message, styles).to_string()
}

/// Like [`format`], but always emits escape codes and leaves
/// `colored::control` alone. The output matches what `colored` writes when
/// coloring is enabled, including re-opening the styles after any reset
/// embedded in `message`.
pub fn format_colored(message: &str, styles: &[Style]) -> String {
    let text = compose(message, styles);
    match opening_sequence(&text) {
        Some(open) => {
            let body = message.replace(RESET, &format!("{}{}", RESET, open));
            format!("{}{}{}", open, body, RESET)
        }
        None => message.to_string(),
    }
}

/// Render `message` under `styles` as `color` asks for
pub fn paint(message: &str, styles: &[Style], color: ColorChoice) -> String {
    match color {
        ColorChoice::Auto => format(message, styles),
        ColorChoice::Always => format_colored(message, styles),
        ColorChoice::Never => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_foreground_and_background() {
        assert_eq!("red".parse::<Style>().unwrap(), Style::Foreground(Color::Red));
        assert_eq!(
            "bright_blue".parse::<Style>().unwrap(),
            Style::Foreground(Color::BrightBlue)
        );
        assert_eq!(
            "on_yellow".parse::<Style>().unwrap(),
            Style::Background(Color::Yellow)
        );
        assert_eq!(
            "on_bright_black".parse::<Style>().unwrap(),
            Style::Background(Color::BrightBlack)
        );
        assert_eq!(
            "purple".parse::<Style>().unwrap(),
            Style::Foreground(Color::Magenta)
        );
    }

    #[test]
    fn test_parse_accepts_loose_spelling() {
        assert_eq!(
            "Bright Red".parse::<Style>().unwrap(),
            Style::Foreground(Color::BrightRed)
        );
        assert_eq!(
            "on-green".parse::<Style>().unwrap(),
            Style::Background(Color::Green)
        );
        assert_eq!(
            " BOLD ".parse::<Style>().unwrap(),
            Style::Modifier(Modifier::Bold)
        );
        assert_eq!(
            "on bright white".parse::<Style>().unwrap(),
            Style::Background(Color::BrightWhite)
        );
        assert_eq!(
            "dim".parse::<Style>().unwrap(),
            Style::Modifier(Modifier::Dimmed)
        );
    }

    #[test]
    fn test_parse_truecolor() {
        assert_eq!(
            "#ff8800".parse::<Style>().unwrap(),
            Style::Foreground(Color::TrueColor { r: 255, g: 136, b: 0 })
        );
        assert_eq!(
            "on_#202020".parse::<Style>().unwrap(),
            Style::Background(Color::TrueColor { r: 32, g: 32, b: 32 })
        );
        assert!("#ff88".parse::<Style>().is_err());
        assert!("#gg0000".parse::<Style>().is_err());
    }

    #[test]
    fn test_invalid_style_keeps_original_name() {
        let err = "Sparkly".parse::<Style>().unwrap_err();
        match err {
            LoggerError::InvalidStyle { name } => assert_eq!(name, "Sparkly"),
            other => panic!("unexpected error: {other}"),
        }
        assert!("bright_".parse::<Style>().is_err());
        assert!("on_bold".parse::<Style>().is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Style::Foreground(Color::BrightCyan).to_string(), "bright_cyan");
        assert_eq!(Style::Background(Color::Red).to_string(), "on_red");
        assert_eq!(
            Style::Foreground(Color::TrueColor { r: 1, g: 2, b: 255 }).to_string(),
            "#0102ff"
        );
        assert_eq!(Style::Modifier(Modifier::Strikethrough).to_string(), "strikethrough");
        for modifier in Modifier::ALL {
            let style = Style::Modifier(modifier);
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_parse_list_stops_at_first_invalid() {
        let styles = Style::parse_list(["yellow", "bold"]).unwrap();
        assert_eq!(
            styles,
            vec![
                Style::Foreground(Color::Yellow),
                Style::Modifier(Modifier::Bold)
            ]
        );

        let err = Style::parse_list(["yellow", "glitter", "nope"]).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidStyle { ref name } if name == "glitter"));
    }

    #[test]
    fn test_format_empty_list_is_identity() {
        assert_eq!(format("hello world", &[]), "hello world");
        assert_eq!(format("", &[]), "");
    }

    #[test]
    fn test_format_colored_emits_escape_codes() {
        let out = format_colored("hi", &[Style::Foreground(Color::Red)]);
        assert_eq!(out, "\x1b[31mhi\x1b[0m");

        // later color on the same layer wins
        let out = format_colored(
            "hi",
            &[Style::Foreground(Color::Red), Style::Foreground(Color::Green)],
        );
        assert_eq!(out, "\x1b[32mhi\x1b[0m");

        let out = format_colored("hi", &[Style::Foreground(Color::Red), Style::Clear]);
        assert_eq!(out, "hi");
        assert_eq!(format_colored("hi", &[]), "hi");
        assert_eq!(format_colored("hi", &[Style::Normal]), "hi");
    }

    #[test]
    fn test_format_colored_code_order() {
        let styles = Style::parse_list(["blue", "bold", "on_blue"]).unwrap();
        assert_eq!(format_colored("x", &styles), "\x1b[1;44;34mx\x1b[0m");

        let styles = Style::parse_list(["italic", "underline", "#ff8800"]).unwrap();
        assert_eq!(
            format_colored("x", &styles),
            "\x1b[4;3;38;2;255;136;0mx\x1b[0m"
        );
    }

    #[test]
    fn test_format_colored_reopens_after_embedded_reset() {
        let out = format_colored("a\x1b[0mb", &[Style::Foreground(Color::Red)]);
        assert_eq!(out, "\x1b[31ma\x1b[0m\x1b[31mb\x1b[0m");
    }

    #[test]
    fn test_paint_follows_color_choice() {
        let styles = [Style::Foreground(Color::Yellow), Style::Modifier(Modifier::Bold)];
        assert_eq!(
            paint("hi", &styles, ColorChoice::Always),
            "\x1b[1;33mhi\x1b[0m"
        );
        assert_eq!(paint("hi", &styles, ColorChoice::Never), "hi");
        assert_eq!(paint("hi", &[], ColorChoice::Auto), "hi");
    }

    #[test]
    fn test_serde_uses_names() {
        let styles: StyleList = serde_json::from_str(r#"["yellow", "on_blue", "bold"]"#).unwrap();
        assert_eq!(
            styles,
            vec![
                Style::Foreground(Color::Yellow),
                Style::Background(Color::Blue),
                Style::Modifier(Modifier::Bold),
            ]
        );
        assert_eq!(
            serde_json::to_string(&styles).unwrap(),
            r#"["yellow","on_blue","bold"]"#
        );
        assert!(serde_json::from_str::<StyleList>(r#"["glitter"]"#).is_err());
    }
}
