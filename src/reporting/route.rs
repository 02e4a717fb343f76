use std::io::{self, Write};

use crate::{analysis::extract::RouteEntry, reporting::color::ColorStrategy};

pub const DEFAULT_COLUMN_WIDTH: usize = 12;

const METHOD_HEADER: &str = "METHOD";
const PATH_HEADER: &str = "PATH";

/// Everything the table printer needs to know about layout and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub column_width: usize,
    pub color: ColorStrategy,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            column_width: DEFAULT_COLUMN_WIDTH,
            color: ColorStrategy::Plain,
        }
    }
}

impl TableStyle {
    fn pad(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.column_width)
    }

    pub fn header(&self) -> String {
        format!(
            "{} {}",
            self.color.header(&self.pad(METHOD_HEADER)),
            self.color.header(&self.pad(PATH_HEADER)),
        )
    }

    pub fn separator(&self) -> String {
        let dashes = "-".repeat(self.column_width);
        format!("{} {}", dashes, dashes)
    }

    pub fn row(&self, entry: &RouteEntry) -> String {
        format!(
            "{} {}",
            self.color.method(&self.pad(entry.method().as_str())),
            self.color.path(entry.path()),
        )
    }
}

pub fn write_table<W: Write>(
    out: &mut W,
    entries: &[RouteEntry],
    style: &TableStyle,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style.header())?;
    writeln!(out, "{}", style.separator())?;
    for entry in entries.iter() {
        writeln!(out, "{}", style.row(entry))?;
    }
    writeln!(out)?;
    out.flush()
}

pub fn render_table(entries: &[RouteEntry], style: &TableStyle) -> String {
    let mut lines = vec![String::new(), style.header(), style.separator()];
    lines.extend(entries.iter().map(|entry| style.row(entry)));
    lines.push(String::new());
    lines.join("\n") + "\n"
}
