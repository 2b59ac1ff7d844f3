//! Named text styles resolved to terminal escape codes.
//!
//! A [`Paint`] is a chain of [`StyleToken`]s, either built directly
//! (`Paint::new().bold().red()`) or parsed from a dotted path such as
//! `"bold.red"` or `"chalk.dim.grey"`. Both forms produce identical output.

use std::fmt;
use std::str::FromStr;

use console::{Attribute, Color, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leading path segment naming the styling namespace itself; ignored.
const BASE_TOKEN: &str = "chalk";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown style `{token}` in `{path}`")]
    UnknownToken { token: String, path: String },
    #[error("empty segment in style path `{path}`")]
    EmptySegment { path: String },
}

/// The eight base terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Hue {
    const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Black => Color::Black,
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Blue => Color::Blue,
            Self::Magenta => Color::Magenta,
            Self::Cyan => Color::Cyan,
            Self::White => Color::White,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hue| hue.name() == name)
    }
}

/// A single style modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleToken {
    /// Drop everything applied so far.
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,
    Blink,
    Fg(Hue),
    FgBright(Hue),
    Bg(Hue),
    BgBright(Hue),
}

impl StyleToken {
    /// Look up a token by its chalk-style name (`bold`, `redBright`, `bgGrey`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let token = match name {
            "reset" => Self::Reset,
            "bold" => Self::Bold,
            "dim" => Self::Dim,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "inverse" => Self::Inverse,
            "hidden" => Self::Hidden,
            "strikethrough" => Self::Strikethrough,
            "blink" => Self::Blink,
            "grey" | "gray" => Self::FgBright(Hue::Black),
            "bgGrey" | "bgGray" => Self::BgBright(Hue::Black),
            _ => return Self::color_from_name(name),
        };
        Some(token)
    }

    fn color_from_name(name: &str) -> Option<Self> {
        let (background, rest) = name
            .strip_prefix("bg")
            .map_or((false, name), |rest| (true, rest));
        let (bright, rest) = rest
            .strip_suffix("Bright")
            .map_or((false, rest), |rest| (true, rest));

        // Background names capitalize the hue: `bgRed`, `bgRedBright`.
        let hue = if background {
            let mut chars = rest.chars();
            let first = chars.next()?;
            if !first.is_ascii_uppercase() {
                return None;
            }
            Hue::from_name(&format!("{}{}", first.to_ascii_lowercase(), chars.as_str()))?
        } else {
            Hue::from_name(rest)?
        };

        Some(match (background, bright) {
            (false, false) => Self::Fg(hue),
            (false, true) => Self::FgBright(hue),
            (true, false) => Self::Bg(hue),
            (true, true) => Self::BgBright(hue),
        })
    }

    /// Canonical name, the inverse of [`StyleToken::from_name`].
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Reset => "reset".to_string(),
            Self::Bold => "bold".to_string(),
            Self::Dim => "dim".to_string(),
            Self::Italic => "italic".to_string(),
            Self::Underline => "underline".to_string(),
            Self::Inverse => "inverse".to_string(),
            Self::Hidden => "hidden".to_string(),
            Self::Strikethrough => "strikethrough".to_string(),
            Self::Blink => "blink".to_string(),
            Self::Fg(hue) => hue.name().to_string(),
            Self::FgBright(Hue::Black) => "grey".to_string(),
            Self::FgBright(hue) => format!("{}Bright", hue.name()),
            Self::Bg(hue) => format!("bg{}", capitalize(hue.name())),
            Self::BgBright(Hue::Black) => "bgGrey".to_string(),
            Self::BgBright(hue) => format!("bg{}Bright", capitalize(hue.name())),
        }
    }

    const fn attribute(self) -> Option<Attribute> {
        match self {
            Self::Bold => Some(Attribute::Bold),
            Self::Dim => Some(Attribute::Dim),
            Self::Italic => Some(Attribute::Italic),
            Self::Underline => Some(Attribute::Underlined),
            Self::Inverse => Some(Attribute::Reverse),
            Self::Hidden => Some(Attribute::Hidden),
            Self::Strikethrough => Some(Attribute::StrikeThrough),
            Self::Blink => Some(Attribute::Blink),
            _ => None,
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        format!("{}{}", first.to_ascii_uppercase(), chars.as_str())
    })
}

/// A resolved text style: maps plain text to styled text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paint {
    tokens: Vec<StyleToken>,
}

impl Paint {
    /// An unstyled paint; applying it returns the text unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Resolve a dotted style path like `"bold.red"` or `"chalk.bold.red"`.
    ///
    /// A bare `"chalk"` is the unstyled paint.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::EmptySegment`] for an empty path or an empty
    /// segment, and [`StyleError::UnknownToken`] for a name not in the
    /// style table.
    pub fn parse(path: &str) -> Result<Self, StyleError> {
        let mut segments = path.split('.').peekable();
        if segments.peek() == Some(&BASE_TOKEN) {
            segments.next();
        }

        segments
            .try_fold(Self::new(), |paint, segment| {
                if segment.is_empty() {
                    return Err(StyleError::EmptySegment {
                        path: path.to_string(),
                    });
                }
                StyleToken::from_name(segment)
                    .map(|token| paint.with(token))
                    .ok_or_else(|| StyleError::UnknownToken {
                        token: segment.to_string(),
                        path: path.to_string(),
                    })
            })
    }

    /// Append a token to the chain.
    #[must_use]
    pub fn with(mut self, token: StyleToken) -> Self {
        self.tokens.push(token);
        self
    }

    #[must_use]
    pub fn tokens(&self) -> &[StyleToken] {
        &self.tokens
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with(StyleToken::Bold)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.with(StyleToken::Dim)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.with(StyleToken::Italic)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.with(StyleToken::Underline)
    }

    #[must_use]
    pub fn grey(self) -> Self {
        self.with(StyleToken::FgBright(Hue::Black))
    }

    #[must_use]
    pub fn red(self) -> Self {
        self.with(StyleToken::Fg(Hue::Red))
    }

    #[must_use]
    pub fn green(self) -> Self {
        self.with(StyleToken::Fg(Hue::Green))
    }

    #[must_use]
    pub fn yellow(self) -> Self {
        self.with(StyleToken::Fg(Hue::Yellow))
    }

    #[must_use]
    pub fn blue(self) -> Self {
        self.with(StyleToken::Fg(Hue::Blue))
    }

    #[must_use]
    pub fn cyan(self) -> Self {
        self.with(StyleToken::Fg(Hue::Cyan))
    }

    #[must_use]
    pub fn white(self) -> Self {
        self.with(StyleToken::Fg(Hue::White))
    }

    /// Fold the token chain into a `console` style.
    ///
    /// Later colors replace earlier ones, brightness included, so
    /// `grey.red` is plain red.
    fn style(&self) -> Style {
        let mut attributes = Vec::new();
        let mut fg: Option<(Hue, bool)> = None;
        let mut bg: Option<(Hue, bool)> = None;

        for &token in &self.tokens {
            match token {
                StyleToken::Reset => {
                    attributes.clear();
                    fg = None;
                    bg = None;
                }
                StyleToken::Fg(hue) => fg = Some((hue, false)),
                StyleToken::FgBright(hue) => fg = Some((hue, true)),
                StyleToken::Bg(hue) => bg = Some((hue, false)),
                StyleToken::BgBright(hue) => bg = Some((hue, true)),
                other => {
                    if let Some(attr) = other.attribute()
                        && !attributes.contains(&attr)
                    {
                        attributes.push(attr);
                    }
                }
            }
        }

        let mut style = Style::new();
        for attr in attributes {
            style = style.attr(attr);
        }
        if let Some((hue, bright)) = fg {
            style = style.fg(hue.color());
            if bright {
                style = style.bright();
            }
        }
        if let Some((hue, bright)) = bg {
            style = style.bg(hue.color());
            if bright {
                style = style.on_bright();
            }
        }
        style
    }

    /// Style `text` for terminal display.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        if self.tokens.is_empty() {
            return text.to_string();
        }
        self.style().apply_to(text).to_string()
    }
}

impl FromStr for Paint {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.tokens.iter().map(|t| t.name()).collect();
        write!(f, "{}", names.join("."))
    }
}

/// A color option as supplied by a caller: already resolved, or a dotted path.
///
/// Paths are resolved when a table is built, so a bad name is reported
/// before anything is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorSpec {
    Paint(Paint),
    Path(String),
}

impl ColorSpec {
    /// # Errors
    ///
    /// Returns a [`StyleError`] when a path does not name known styles.
    pub fn resolve(&self) -> Result<Paint, StyleError> {
        match self {
            Self::Paint(paint) => Ok(paint.clone()),
            Self::Path(path) => Paint::parse(path),
        }
    }
}

impl From<Paint> for ColorSpec {
    fn from(paint: Paint) -> Self {
        Self::Paint(paint)
    }
}

impl From<&str> for ColorSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<ColorSpec> for String {
    fn from(spec: ColorSpec) -> Self {
        match spec {
            ColorSpec::Paint(paint) => paint.to_string(),
            ColorSpec::Path(path) => path,
        }
    }
}
