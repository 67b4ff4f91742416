use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: &str = "  ";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders the table as monospace text. Cells past the header count are ignored.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().take(col_count).enumerate() {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut table = String::with_capacity(
            (col_widths.iter().sum::<usize>() + col_count * COLUMN_GAP.len() + 1)
                * (self.rows.len() + 2),
        );

        self.write_line(&mut table, self.headers, &col_widths);

        let separator: Vec<Cow<'_, str>> = col_widths
            .iter()
            .map(|width| Cow::Owned("-".repeat(*width)))
            .collect();
        self.write_line(&mut table, &separator, &col_widths);

        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map(|cell| &**cell).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, *width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn pad_cell(out: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let padding = width.saturating_sub(display_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Center => (padding / 2, padding - padding / 2),
        Alignment::Right => (padding, 0),
    };
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', right));
}

/// Wide (non-ASCII) characters take two columns in a terminal.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
