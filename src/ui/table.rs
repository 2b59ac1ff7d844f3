//! Boxed key/value tables for CLI output.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::layout::{Layout, Section, text_width};
use super::paint::{ColorSpec, Paint, StyleError};
use super::screen::{Screen, TermScreen};

/// Vertical border drawn on both sides of banner and content rows.
const SIDE: char = '│';
/// Indent of the line printed below the table.
const AFTER_TEXT_INDENT: &str = "   ";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid color: {0}")]
    Style(#[from] StyleError),
    #[error("border `{name}` must be exactly 3 characters, got `{glyphs}`")]
    Border { name: &'static str, glyphs: String },
    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}

/// Everything a table can be configured with. Missing fields take the
/// defaults of [`TableOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub title: String,
    pub subtitle: String,
    pub after_text: String,
    pub border_top: String,
    pub border_mid: String,
    pub border_bot: String,
    pub border_color: ColorSpec,
    pub title_color: ColorSpec,
    pub subtitle_color: ColorSpec,
    pub content_key_color: ColorSpec,
    pub content_value_color: ColorSpec,
    pub footer_header_key_color: ColorSpec,
    pub footer_header_value_color: ColorSpec,
    pub footer_key_color: ColorSpec,
    pub footer_value_color: ColorSpec,
    pub after_text_color: ColorSpec,
    /// Clear the terminal before drawing.
    pub clear_screen: bool,
    pub content: Section,
    pub footer_headers: Section,
    pub footer: Section,
}

fn section(rows: &[(&str, &str)]) -> Section {
    rows.iter()
        .map(|&(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            title: "Welcome to NextWS".to_string(),
            subtitle: "NextJS + Websocket + Strapi -- Dockerized".to_string(),
            after_text: "by Blade".to_string(),
            border_top: "┌─┐".to_string(),
            border_mid: "├─┤".to_string(),
            border_bot: "└─┘".to_string(),
            border_color: Paint::new().dim().grey().into(),
            title_color: Paint::new().bold().red().into(),
            subtitle_color: Paint::new().grey().into(),
            content_key_color: Paint::new().white().into(),
            content_value_color: Paint::new().bold().yellow().into(),
            footer_header_key_color: Paint::new().grey().into(),
            footer_header_value_color: Paint::new().grey().into(),
            footer_key_color: Paint::new().white().into(),
            footer_value_color: Paint::new().yellow().into(),
            after_text_color: Paint::new().dim().grey().into(),
            clear_screen: true,
            content: section(&[("Name", "NextWS"), ("Icon", "default"), ("Color", "default")]),
            footer_headers: section(&[("Service", "URL")]),
            footer: section(&[
                ("NextJS - prod", "http://localhost:3100"),
                ("NextJS - dev", "http://localhost:3101"),
                ("Strapi", "http://localhost:1337"),
            ]),
        }
    }
}

/// Corner and fill characters for one horizontal border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub start: char,
    pub fill: char,
    pub end: char,
}

impl BorderGlyphs {
    /// Parse a 3-character glyph string such as `"┌─┐"`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Border`] unless `glyphs` is exactly 3 chars.
    pub fn parse(name: &'static str, glyphs: &str) -> Result<Self, TableError> {
        let chars: Vec<char> = glyphs.chars().collect();
        match chars.as_slice() {
            &[start, fill, end] => Ok(Self { start, fill, end }),
            _ => Err(TableError::Border {
                name,
                glyphs: glyphs.to_string(),
            }),
        }
    }
}

/// Which section a row belongs to; picks its key and value colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SectionKind {
    Content,
    FooterHeaders,
    Footer,
}

/// Colors resolved from a [`TableOptions`].
#[derive(Clone, Debug)]
struct Palette {
    border: Paint,
    title: Paint,
    subtitle: Paint,
    content_key: Paint,
    content_value: Paint,
    footer_header_key: Paint,
    footer_header_value: Paint,
    footer_key: Paint,
    footer_value: Paint,
    after_text: Paint,
}

impl Palette {
    fn resolve(options: &TableOptions) -> Result<Self, StyleError> {
        Ok(Self {
            border: options.border_color.resolve()?,
            title: options.title_color.resolve()?,
            subtitle: options.subtitle_color.resolve()?,
            content_key: options.content_key_color.resolve()?,
            content_value: options.content_value_color.resolve()?,
            footer_header_key: options.footer_header_key_color.resolve()?,
            footer_header_value: options.footer_header_value_color.resolve()?,
            footer_key: options.footer_key_color.resolve()?,
            footer_value: options.footer_value_color.resolve()?,
            after_text: options.after_text_color.resolve()?,
        })
    }

    const fn row(&self, kind: SectionKind) -> (&Paint, &Paint) {
        match kind {
            SectionKind::Content => (&self.content_key, &self.content_value),
            SectionKind::FooterHeaders => (&self.footer_header_key, &self.footer_header_value),
            SectionKind::Footer => (&self.footer_key, &self.footer_value),
        }
    }
}

/// A table with colors and widths resolved, ready to draw.
///
/// # Example
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │              Welcome to NextWS              │
/// │  NextJS + Websocket + Strapi -- Dockerized  │
/// ├─────────────────────────────────────────────┤
/// │  Name:          NextWS                      │
/// ...
/// └─────────────────────────────────────────────┘
///    by Blade
/// ```
pub struct TableRenderer {
    options: TableOptions,
    palette: Palette,
    top: BorderGlyphs,
    mid: BorderGlyphs,
    bot: BorderGlyphs,
    layout: Layout,
}

impl TableRenderer {
    /// Resolve colors and borders and compute the layout.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Style`] for an unknown color name and
    /// [`TableError::Border`] for a malformed border string.
    pub fn new(options: TableOptions) -> Result<Self, TableError> {
        let palette = Palette::resolve(&options)?;
        let top = BorderGlyphs::parse("border_top", &options.border_top)?;
        let mid = BorderGlyphs::parse("border_mid", &options.border_mid)?;
        let bot = BorderGlyphs::parse("border_bot", &options.border_bot)?;

        let layout = Layout::compute(
            &options.title,
            &options.subtitle,
            &[&options.content, &options.footer_headers, &options.footer],
        );
        debug!(
            key_width = layout.key_width,
            line_width = layout.line_width,
            value_width = layout.value_width,
            "computed table layout"
        );

        Ok(Self {
            options,
            palette,
            top,
            mid,
            bot,
            layout,
        })
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Every styled line of the table, top border to after text.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let options = &self.options;
        let palette = &self.palette;
        let mut lines = vec![
            self.border(self.top),
            self.banner(&options.title, &palette.title),
            self.banner(&options.subtitle, &palette.subtitle),
            self.border(self.mid),
        ];

        self.push_section(&mut lines, &options.content, SectionKind::Content);
        lines.push(self.border(self.mid));
        self.push_section(&mut lines, &options.footer_headers, SectionKind::FooterHeaders);
        lines.push(self.border(self.mid));
        self.push_section(&mut lines, &options.footer, SectionKind::Footer);
        lines.push(self.border(self.bot));
        lines.push(
            palette
                .after_text
                .apply(&format!("{AFTER_TEXT_INDENT}{}", options.after_text)),
        );

        lines
    }

    /// Draw the table, clearing the screen first unless disabled.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] if the screen rejects a write.
    pub fn render(&self, screen: &mut dyn Screen) -> Result<(), TableError> {
        if self.options.clear_screen {
            screen.clear()?;
        }
        for line in self.lines() {
            trace!(line = %console::strip_ansi_codes(&line), "table line");
            screen.write_line(&line)?;
        }
        Ok(())
    }

    fn push_section(&self, lines: &mut Vec<String>, section: &Section, kind: SectionKind) {
        let (key_paint, value_paint) = self.palette.row(kind);
        for (key, value) in section {
            lines.push(self.row(key, value, key_paint, value_paint));
        }
    }

    /// A centered text line: `│<fill><text><fill>│`.
    fn framed(&self, text: &str, start: char, fill: char, end: char, paint: &Paint) -> String {
        let (left, right) = self.layout.banner_padding(text_width(text));
        let border = &self.palette.border;
        let fill = fill.to_string();

        format!(
            "{}{}{}{}{}",
            border.apply(&start.to_string()),
            paint.apply(&fill.repeat(left)),
            paint.apply(text),
            paint.apply(&fill.repeat(right)),
            border.apply(&end.to_string()),
        )
    }

    fn border(&self, glyphs: BorderGlyphs) -> String {
        self.framed("", glyphs.start, glyphs.fill, glyphs.end, &self.palette.border)
    }

    fn banner(&self, text: &str, paint: &Paint) -> String {
        self.framed(text, SIDE, ' ', SIDE, paint)
    }

    /// A content row: `│  key:<pad> value<pad>│`.
    fn row(&self, key: &str, value: &str, key_paint: &Paint, value_paint: &Paint) -> String {
        let key_padding = " ".repeat(self.layout.key_padding(text_width(key)));
        let value_padding = " ".repeat(self.layout.value_padding(text_width(value)));
        let side = self.palette.border.apply(&SIDE.to_string());

        format!(
            "{side}  {}{key_padding} {}{value_padding}{side}",
            key_paint.apply(&format!("{key}:")),
            value_paint.apply(value),
        )
    }
}

/// Draw a table on stdout.
///
/// # Errors
///
/// Fails like [`TableRenderer::new`] and [`TableRenderer::render`].
pub fn log_table(options: TableOptions) -> Result<(), TableError> {
    TableRenderer::new(options)?.render(&mut TermScreen::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screen::MemoryScreen;

    fn plain(line: &str) -> String {
        console::strip_ansi_codes(line).into_owned()
    }

    fn render(options: TableOptions) -> MemoryScreen {
        let mut screen = MemoryScreen::default();
        TableRenderer::new(options)
            .unwrap()
            .render(&mut screen)
            .unwrap();
        screen
    }

    fn row(key: &str, gap: usize, value: &str, tail: usize) -> String {
        format!("│  {key}:{} {value}{}│", " ".repeat(gap), " ".repeat(tail))
    }

    #[test]
    fn default_render_clears_then_draws_in_order() {
        let screen = render(TableOptions::default());

        assert_eq!(screen.clears, 1);
        assert_eq!(screen.lines_before_clear, 0);

        let fill = "─".repeat(45);
        let expected = [
            format!("┌{fill}┐"),
            format!("│{0}Welcome to NextWS{0}│", " ".repeat(14)),
            "│  NextJS + Websocket + Strapi -- Dockerized  │".to_string(),
            format!("├{fill}┤"),
            row("Name", 10, "NextWS", 21),
            row("Icon", 10, "default", 20),
            row("Color", 9, "default", 20),
            format!("├{fill}┤"),
            row("Service", 7, "URL", 24),
            format!("├{fill}┤"),
            row("NextJS - prod", 1, "http://localhost:3100", 6),
            row("NextJS - dev", 2, "http://localhost:3101", 6),
            row("Strapi", 8, "http://localhost:1337", 6),
            format!("└{fill}┘"),
            "   by Blade".to_string(),
        ];

        let lines: Vec<String> = screen.lines.iter().map(|l| plain(l)).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn bordered_lines_share_one_width() {
        let screen = render(TableOptions::default());
        let (table, after) = screen.lines.split_at(screen.lines.len() - 1);

        for line in table {
            assert_eq!(text_width(&plain(line)), 47, "bad width: {line}");
        }
        assert_eq!(plain(&after[0]), "   by Blade");
    }

    #[test]
    fn borders_use_border_color_regardless_of_content_colors() {
        console::set_colors_enabled(true);
        let border = Paint::new().cyan();
        let options = TableOptions {
            border_color: border.clone().into(),
            content_key_color: "bold.red".into(),
            content_value_color: "bgBlue.white".into(),
            title_color: "magenta".into(),
            ..TableOptions::default()
        };
        let renderer = TableRenderer::new(options).unwrap();
        let side = border.apply("│");

        let lines = renderer.lines();
        for line in &lines[1..3] {
            assert!(line.starts_with(&side) && line.ends_with(&side));
        }
        assert!(lines[0].starts_with(&border.apply("┌")));
        assert!(lines[0].ends_with(&border.apply("┐")));
        assert!(lines[4].starts_with(&side) && lines[4].ends_with(&side));
        assert!(lines[13].starts_with(&border.apply("└")));
    }

    #[test]
    fn path_and_direct_colors_render_identically() {
        console::set_colors_enabled(true);
        let by_path = TableOptions {
            title_color: "bold.red".into(),
            ..TableOptions::default()
        };
        let direct = TableOptions {
            title_color: Paint::new().bold().red().into(),
            ..TableOptions::default()
        };

        assert_eq!(
            TableRenderer::new(by_path).unwrap().lines(),
            TableRenderer::new(direct).unwrap().lines()
        );
    }

    #[test]
    fn clear_can_be_disabled() {
        let screen = render(TableOptions {
            clear_screen: false,
            ..TableOptions::default()
        });
        assert_eq!(screen.clears, 0);
        assert_eq!(screen.lines.len(), 15);
    }

    #[test]
    fn custom_border_glyphs() {
        let options = TableOptions {
            border_top: "╔═╗".to_string(),
            border_bot: "╚═╝".to_string(),
            ..TableOptions::default()
        };
        let lines = TableRenderer::new(options).unwrap().lines();

        assert_eq!(plain(&lines[0]), format!("╔{}╗", "═".repeat(45)));
        assert_eq!(plain(&lines[13]), format!("╚{}╝", "═".repeat(45)));
    }

    #[test]
    fn bad_border_is_rejected() {
        let options = TableOptions {
            border_mid: "├─".to_string(),
            ..TableOptions::default()
        };
        let Err(err) = TableRenderer::new(options) else {
            panic!("short border accepted");
        };
        assert!(matches!(err, TableError::Border { name: "border_mid", .. }));
    }

    #[test]
    fn unknown_color_is_rejected_before_drawing() {
        let options = TableOptions {
            footer_value_color: "yellow.blod".into(),
            ..TableOptions::default()
        };
        let Err(err) = TableRenderer::new(options) else {
            panic!("misspelled color accepted");
        };
        assert!(matches!(err, TableError::Style(StyleError::UnknownToken { .. })));
    }

    #[test]
    fn empty_sections_render_bare_frame() {
        let options = TableOptions {
            title: String::new(),
            subtitle: String::new(),
            after_text: String::new(),
            content: Section::new(),
            footer_headers: Section::new(),
            footer: Section::new(),
            ..TableOptions::default()
        };
        let lines: Vec<String> = TableRenderer::new(options)
            .unwrap()
            .lines()
            .iter()
            .map(|l| plain(l))
            .collect();

        assert_eq!(
            lines,
            ["┌────┐", "│    │", "│    │", "├────┤", "├────┤", "├────┤", "└────┘", "   "]
        );
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut content = Section::new();
        content.insert("zeta".to_string(), "1".to_string());
        content.insert("alpha".to_string(), "2".to_string());
        let options = TableOptions {
            content,
            ..TableOptions::default()
        };
        let lines = TableRenderer::new(options).unwrap().lines();

        assert!(plain(&lines[4]).starts_with("│  zeta:"));
        assert!(plain(&lines[5]).starts_with("│  alpha:"));
    }

    #[test]
    fn border_glyphs_parse() {
        assert_eq!(
            BorderGlyphs::parse("border_top", "┌─┐").unwrap(),
            BorderGlyphs {
                start: '┌',
                fill: '─',
                end: '┐',
            }
        );
        assert!(BorderGlyphs::parse("border_top", "┌──┐").is_err());
    }
}
