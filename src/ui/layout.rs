//! Width computation for boxed tables.

use indexmap::IndexMap;

/// An ordered key/value section; one row per entry.
pub type Section = IndexMap<String, String>;

/// Spaces, colon and border cells around a content row.
const ROW_CHROME: usize = 4;
/// Extra room added to the widest row or banner.
const MARGIN: usize = 6;
/// Cells in a content row that belong to neither key nor value.
const ROW_OVERHEAD: usize = 8;

/// Naive display width: one cell per `char`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Column widths shared by every line of one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Widest key across all sections.
    pub key_width: usize,
    /// Total width of every bordered line, glyphs included.
    pub line_width: usize,
    /// Room left for values once keys and chrome are placed.
    pub value_width: usize,
}

impl Layout {
    /// Compute widths from the banner texts and every section row.
    ///
    /// Empty input counts as zero width, so an all-empty table still
    /// yields finite metrics.
    #[must_use]
    pub fn compute(title: &str, subtitle: &str, sections: &[&Section]) -> Self {
        let rows = || sections.iter().flat_map(|section| section.iter());

        let key_width = rows().map(|(key, _)| text_width(key)).max().unwrap_or(0);

        let widest_row = rows()
            .map(|(key, value)| text_width(key) + text_width(value) + ROW_CHROME)
            .max()
            .unwrap_or(0);

        let line_width = text_width(title)
            .max(text_width(subtitle))
            .max(widest_row)
            + MARGIN;

        Self {
            key_width,
            line_width,
            value_width: line_width.saturating_sub(key_width + ROW_OVERHEAD),
        }
    }

    /// Left and right fill for a centered banner of `text_width` cells.
    #[must_use]
    pub const fn banner_padding(&self, text_width: usize) -> (usize, usize) {
        let left = (self.line_width.saturating_sub(text_width) / 2).saturating_sub(1);
        let right = self.line_width.saturating_sub(left + text_width + 2);
        (left, right)
    }

    /// Spaces after `key:` so every value starts in the same column.
    #[must_use]
    pub const fn key_padding(&self, key_width: usize) -> usize {
        (self.key_width + 1).saturating_sub(key_width)
    }

    /// Spaces after a value so the right border lines up. Zero when the
    /// value is too long to fit.
    #[must_use]
    pub const fn value_padding(&self, value_width: usize) -> usize {
        (self.value_width + 1).saturating_sub(value_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(rows: &[(&str, &str)]) -> Section {
        rows.iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn key_width_spans_all_sections() {
        let content = section(&[("Name", "x"), ("Icon", "y")]);
        let headers = section(&[("Service", "URL")]);
        let footer = section(&[("NextJS - prod", "http://localhost:3100")]);

        let layout = Layout::compute("", "", &[&content, &headers, &footer]);
        assert_eq!(layout.key_width, 13); // "NextJS - prod"
    }

    #[test]
    fn line_width_uses_widest_of_banner_and_rows() {
        let content = section(&[("Key", "value")]);

        // Row wins: 3 + 5 + 4 = 12 > title 5
        let layout = Layout::compute("Hello", "", &[&content]);
        assert_eq!(layout.line_width, 18);
        assert_eq!(layout.value_width, 18 - 3 - 8);

        // Subtitle wins
        let layout = Layout::compute("Hi", "A much longer subtitle", &[&content]);
        assert_eq!(layout.line_width, 22 + 6);
    }

    #[test]
    fn default_table_metrics() {
        let content = section(&[("Name", "NextWS"), ("Icon", "default"), ("Color", "default")]);
        let headers = section(&[("Service", "URL")]);
        let footer = section(&[
            ("NextJS - prod", "http://localhost:3100"),
            ("NextJS - dev", "http://localhost:3101"),
            ("Strapi", "http://localhost:1337"),
        ]);

        let layout = Layout::compute(
            "Welcome to NextWS",
            "NextJS + Websocket + Strapi -- Dockerized",
            &[&content, &headers, &footer],
        );

        assert_eq!(
            layout,
            Layout {
                key_width: 13,
                line_width: 47,
                value_width: 26,
            }
        );
    }

    #[test]
    fn padding_left_justifies() {
        let content = section(&[("a", "1"), ("longer", "22")]);
        let layout = Layout::compute("title", "", &[&content]);

        for (key, value) in &content {
            assert_eq!(
                layout.key_padding(text_width(key)) + text_width(key),
                layout.key_width + 1
            );
            assert_eq!(
                layout.value_padding(text_width(value)) + text_width(value),
                layout.value_width + 1
            );
        }
    }

    #[test]
    fn banner_padding_centers() {
        let layout = Layout {
            key_width: 0,
            line_width: 47,
            value_width: 39,
        };

        for text in ["", "Welcome to NextWS", "x", "even"] {
            let width = text_width(text);
            let (left, right) = layout.banner_padding(width);
            assert_eq!(left, (47 - width) / 2 - 1);
            assert_eq!(left + right + width + 2, 47);
        }
    }

    #[test]
    fn empty_sections_stay_finite() {
        let empty = Section::new();
        let layout = Layout::compute("", "", &[&empty, &empty, &empty]);

        assert_eq!(layout.key_width, 0);
        assert_eq!(layout.line_width, 6);
        assert_eq!(layout.value_width, 0);
        assert_eq!(layout.banner_padding(0), (2, 2));
    }

    #[test]
    fn overlong_value_gets_no_padding() {
        let content = section(&[("Short", "x"), ("A very long key", "y")]);
        let footer = section(&[("k", "an extremely long value here")]);
        let layout = Layout::compute("", "", &[&content, &footer]);

        assert!(layout.value_width + 1 < text_width("an extremely long value here"));
        assert_eq!(layout.value_padding(text_width("an extremely long value here")), 0);
    }

    #[test]
    fn widths_count_chars_not_bytes() {
        let content = section(&[("Näme", "ünï")]);
        let layout = Layout::compute("", "", &[&content]);
        assert_eq!(layout.key_width, 4);
        assert_eq!(layout.line_width, 4 + 3 + 4 + 6);
    }
}
