//! Text rendering of the MultiCheck control.
//!
//! [`render_text`] draws a [`MultiCheckSurface`] as plain text: the label on
//! its own line, then a grid whose first column holds the "Select All" box
//! and whose remaining columns hold the option boxes, top to bottom.
//!
//! ```text
//! Toppings
//! [ ] Select All  [x] Cheese  [ ] Olives
//!                 [ ] Ham
//! ```
//!
//! Cell widths are measured in grapheme clusters so labels with combining
//! characters line up.

use unicode_segmentation::UnicodeSegmentation;

use multicheck_core::logging::span_names;

use super::widgets::{CheckBox, MultiCheckSurface};

/// How check indicators are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// `[x]` and `[ ]`.
    #[default]
    Ascii,
    /// Ballot box characters.
    Unicode,
}

impl IndicatorStyle {
    /// The indicator for a checkbox in the given state.
    pub fn indicator(&self, checked: bool) -> &'static str {
        match (self, checked) {
            (IndicatorStyle::Ascii, true) => "[x]",
            (IndicatorStyle::Ascii, false) => "[ ]",
            (IndicatorStyle::Unicode, true) => "\u{2611}",
            (IndicatorStyle::Unicode, false) => "\u{2610}",
        }
    }
}

/// Options for [`render_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indicator style.
    pub indicator: IndicatorStyle,
    /// Spaces between columns.
    pub column_gap: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indicator: IndicatorStyle::Ascii,
            column_gap: 2,
        }
    }
}

impl RenderOptions {
    /// Use the given indicator style.
    pub fn with_indicator(mut self, indicator: IndicatorStyle) -> Self {
        self.indicator = indicator;
        self
    }

    /// Use the given column gap.
    pub fn with_column_gap(mut self, column_gap: usize) -> Self {
        self.column_gap = column_gap;
        self
    }
}

/// The display width of `text` in grapheme clusters.
pub fn text_width(text: &str) -> usize {
    text.graphemes(true).count()
}

fn cell(checkbox: &CheckBox, options: &RenderOptions) -> String {
    format!("{} {}", options.indicator.indicator(checkbox.is_checked()), checkbox.text())
}

/// Render a surface as text. Every line ends with a newline and carries no
/// trailing spaces.
pub fn render_text(surface: &MultiCheckSurface, options: &RenderOptions) -> String {
    let _span = tracing::trace_span!(span_names::RENDER).entered();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(surface.columns.len() + 1);
    grid.push(vec![cell(&surface.select_all, options)]);
    for column in &surface.columns {
        grid.push(column.iter().map(|checkbox| cell(checkbox, options)).collect());
    }

    let widths: Vec<usize> = grid
        .iter()
        .map(|column| column.iter().map(|c| text_width(c)).max().unwrap_or(0))
        .collect();
    let rows = grid.iter().map(Vec::len).max().unwrap_or(0);

    let mut output = String::new();
    if let Some(label) = &surface.label {
        output.push_str(label);
        output.push('\n');
    }

    for row in 0..rows {
        let mut line = String::new();
        for (column, width) in grid.iter().zip(&widths) {
            let text = column.get(row).map_or("", String::as_str);
            line.push_str(text);
            line.push_str(&" ".repeat(width - text_width(text) + options.column_gap));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CheckOption;
    use crate::widget::widgets::MultiCheck;

    fn toppings() -> Vec<CheckOption> {
        vec![
            CheckOption::new("Cheese", "cheese"),
            CheckOption::new("Ham", "ham"),
            CheckOption::new("Olives", "olives"),
        ]
    }

    #[test]
    fn test_render_single_column() {
        let control = MultiCheck::new(toppings()).with_values(["ham"]);
        let text = control.render_text(&RenderOptions::default());
        assert_eq!(
            text,
            "[ ] Select All  [ ] Cheese\n                [x] Ham\n                [ ] Olives\n"
        );
    }

    #[test]
    fn test_render_label_and_columns() {
        let control = MultiCheck::new(toppings())
            .with_label("Toppings")
            .with_columns(2)
            .with_values(["cheese"]);
        let text = control.render_text(&RenderOptions::default());
        assert_eq!(
            text,
            "Toppings\n[ ] Select All  [x] Cheese  [ ] Olives\n                [ ] Ham\n"
        );
    }

    #[test]
    fn test_render_unicode_indicators() {
        let mut control = MultiCheck::new(toppings()).with_columns(3);
        control.toggle_all();
        let options = RenderOptions::default()
            .with_indicator(IndicatorStyle::Unicode)
            .with_column_gap(1);
        assert_eq!(
            control.render_text(&options),
            "\u{2611} Select All \u{2611} Cheese \u{2611} Ham \u{2611} Olives\n"
        );
    }

    #[test]
    fn test_render_empty_catalog() {
        let control = MultiCheck::new(Vec::new());
        assert_eq!(control.render_text(&RenderOptions::default()), "[x] Select All\n");
    }

    #[test]
    fn test_grapheme_width() {
        assert_eq!(text_width("Cafe\u{301}"), 4);
        assert_eq!(text_width(""), 0);
    }
}
