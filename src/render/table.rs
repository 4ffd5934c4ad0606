//! Plain-text table used by the CLI to mirror the expense table on a
//! terminal.

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Configuration for a single rendered column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment,
        }
    }

    pub fn capped(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A table with column metadata and rows of prepared cell text.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Computes the content width of each column from headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count().max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                match column.max_width {
                    Some(max_width) => width.min(max_width),
                    None => width,
                }
            })
            .collect()
    }

    /// Renders the full table with a header row and separator rule.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_row(&headers, &widths));
        out.push('\n');
        out.push_str(&horizontal_rule(&widths));

        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }

        out
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }
}

pub fn horizontal_rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let padding = width.saturating_sub(fitted.chars().count());
    match alignment {
        Alignment::Left => format!("{}{}", fitted, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), fitted),
    }
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('\u{2026}');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(header: &str) -> TableColumn {
        TableColumn::new(header, Alignment::Left)
    }

    #[test]
    fn width_calculation_respects_constraints() {
        let table = Table {
            columns: vec![column("Category").capped(8), column("Notes")],
            rows: vec![
                vec!["Entertainment".into(), "Short".into()],
                vec!["Food".into(), "Detailed overview entry".into()],
            ],
        };
        assert_eq!(table.compute_widths(), vec![8, 23]);
    }

    #[test]
    fn truncation_adds_ellipsis() {
        let table = Table {
            columns: vec![column("D").capped(5)],
            rows: vec![vec!["ExtremelyLongValue".into()]],
        };
        let rendered = table.render();
        let last = rendered.lines().last().unwrap();
        assert_eq!(last, "Extr\u{2026}");
    }

    #[test]
    fn right_alignment_pads_on_the_left() {
        let table = Table {
            columns: vec![TableColumn::new("Amount", Alignment::Right)],
            rows: vec![vec!["$1.00".into()]],
        };
        let rendered = table.render();
        assert!(rendered.ends_with(" $1.00"));
    }
}
