// Wed Aug 26 2026 - Alex

use colored::Colorize;
use std::cmp::max;

pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    alignment: Vec<CellAlign>,
    use_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Right,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: Vec::new(),
            alignment: Vec::new(),
            use_color: true,
        }
    }

    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|s| s.to_string()).collect();
        self.column_widths = self.headers.iter().map(|h| h.len()).collect();
        self.alignment = vec![CellAlign::Left; self.headers.len()];
        self
    }

    pub fn add_row<T: std::fmt::Display>(mut self, row: &[T]) -> Self {
        let string_row: Vec<String> = row.iter().map(|c| c.to_string()).collect();

        for (i, cell) in string_row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = max(self.column_widths[i], cell.len());
            } else {
                self.column_widths.push(cell.len());
            }
        }

        self.rows.push(string_row);
        self
    }

    pub fn with_alignment(mut self, column: usize, alignment: CellAlign) -> Self {
        if column < self.alignment.len() {
            self.alignment[column] = alignment;
        }
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn build(&self) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let mut output = Vec::new();
        output.push(self.horizontal_line());

        if !self.headers.is_empty() {
            output.push(self.build_row(&self.headers, true));
            output.push(self.horizontal_line());
        }

        for row in &self.rows {
            output.push(self.build_row(row, false));
        }

        output.push(self.horizontal_line());
        output.join("\n")
    }

    fn align_cell(&self, content: &str, width: usize, alignment: CellAlign) -> String {
        match alignment {
            CellAlign::Left => format!("{:<width$}", content, width = width),
            CellAlign::Right => format!("{:>width$}", content, width = width),
        }
    }

    fn build_row(&self, cells: &[String], is_header: bool) -> String {
        let mut parts = vec!["|".to_string()];

        for (i, cell) in cells.iter().enumerate() {
            let width = if i < self.column_widths.len() {
                self.column_widths[i]
            } else {
                cell.len()
            };
            let alignment = if i < self.alignment.len() {
                self.alignment[i]
            } else {
                CellAlign::Left
            };

            let aligned = self.align_cell(cell, width, alignment);
            let formatted = if is_header && self.use_color {
                aligned.cyan().bold().to_string()
            } else {
                aligned
            };

            parts.push(format!(" {} ", formatted));
            parts.push("|".to_string());
        }

        parts.join("")
    }

    fn horizontal_line(&self) -> String {
        let mut parts = vec!["+".to_string()];

        for &width in &self.column_widths {
            parts.push("-".repeat(width + 2));
            parts.push("+".to_string());
        }

        parts.join("")
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
