//! Fixed-width table rendering driven by a declarative column spec, so the
//! exact spacing contract is testable in isolation.

#[derive(Debug, Clone, Copy)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
    pub align: Align,
    /// Literal text emitted before/after the padded cell, e.g. the
    /// `    |` ... `|    ` wrapper around the delivery-days column.
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, width: usize, align: Align) -> Self {
        Self {
            header,
            width,
            align,
            prefix: "",
            suffix: "",
        }
    }

    pub const fn wrapped(
        header: &'static str,
        width: usize,
        align: Align,
        prefix: &'static str,
        suffix: &'static str,
    ) -> Self {
        Self {
            header,
            width,
            align,
            prefix,
            suffix,
        }
    }

    fn cell(&self, value: &str) -> String {
        let padded = match self.align {
            Align::Left => format!("{:<width$}", value, width = self.width),
            Align::Right => format!("{:>width$}", value, width = self.width),
            Align::Center => format!("{:^width$}", value, width = self.width),
        };
        format!("{}{}{}", self.prefix, padded, self.suffix)
    }
}

pub const SEPARATOR_WIDTH: usize = 110;

/// Renders a header line, a dash separator, and one line per row. Each row
/// must supply one value per column.
pub fn render(columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut out = String::new();

    let header: String = columns.iter().map(|c| c.cell(c.header)).collect();
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    for row in rows {
        let line: String = columns
            .iter()
            .zip(row.iter())
            .map(|(column, value)| column.cell(value))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
