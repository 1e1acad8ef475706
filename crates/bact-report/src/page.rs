//! Static HTML rendering of the dashboard page.

use std::io::{self, Write};

use bact_model::{StaticTable, WideTable};

/// One block of page content, rendered in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBlock {
    Heading(String),
    /// Emphasized paragraph text.
    Lead(String),
    Paragraph(String),
    Table(TableBlock),
    /// Inline SVG document.
    Chart(String),
    /// User-visible error message shown in place of skipped content.
    Error(String),
    /// Link to a generated file written next to the page.
    Download { label: String, href: String },
    Divider,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Prefix each row with its zero-based position.
    pub show_index: bool,
}

impl TableBlock {
    pub fn from_wide(table: &WideTable) -> Self {
        Self {
            columns: table.columns.clone(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
            show_index: true,
        }
    }

    pub fn from_static(table: &StaticTable) -> Self {
        Self {
            columns: table.columns.clone(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
            show_index: false,
        }
    }

    pub fn to_html(&self) -> String {
        let mut buffer = Vec::new();
        let _ = write_table(&mut buffer, self);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// A single-page dashboard assembled by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub title: String,
    pub blocks: Vec<PageBlock>,
}

impl DashboardPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: PageBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(PageBlock::Heading(text.into()))
    }

    pub fn lead(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(PageBlock::Lead(text.into()))
    }

    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(PageBlock::Paragraph(text.into()))
    }

    pub fn table(&mut self, table: TableBlock) -> &mut Self {
        self.push(PageBlock::Table(table))
    }

    pub fn chart(&mut self, svg: String) -> &mut Self {
        self.push(PageBlock::Chart(svg))
    }

    pub fn error(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(PageBlock::Error(message.into()))
    }

    pub fn download(&mut self, label: impl Into<String>, href: impl Into<String>) -> &mut Self {
        self.push(PageBlock::Download {
            label: label.into(),
            href: href.into(),
        })
    }

    pub fn divider(&mut self) -> &mut Self {
        self.push(PageBlock::Divider)
    }

    pub fn write_html<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(
            writer,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; max-width: 960px; margin: 0 auto; padding: 2rem; color: #262730; }}
        h1 {{ font-size: 2.2rem; }}
        table {{ border-collapse: collapse; margin: 1rem 0; }}
        th, td {{ border: 1px solid #e6e9ef; padding: 0.35rem 0.75rem; text-align: left; }}
        th {{ background: #f0f2f6; }}
        td.index {{ color: #808495; }}
        .error {{ background: #ffebee; color: #b71c1c; border-radius: 0.5rem; padding: 1rem; }}
        .chart svg {{ max-width: 100%; height: auto; }}
        hr {{ border: none; border-top: 1px solid #e6e9ef; margin: 2rem 0; }}
    </style>
</head>
<body>
<h1>{title}</h1>
"#,
            title = escape_html(&self.title)
        )?;
        for block in &self.blocks {
            write_block(writer, block)?;
        }
        writeln!(writer, "</body>\n</html>")
    }

    pub fn to_html(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_html(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

fn write_block<W: Write>(writer: &mut W, block: &PageBlock) -> io::Result<()> {
    match block {
        PageBlock::Heading(text) => writeln!(writer, "<h2>{}</h2>", escape_html(text)),
        PageBlock::Lead(text) => writeln!(writer, "<p><strong>{}</strong></p>", escape_html(text)),
        PageBlock::Paragraph(text) => writeln!(writer, "<p>{}</p>", escape_html(text)),
        PageBlock::Table(table) => write_table(writer, table),
        PageBlock::Chart(svg) => writeln!(writer, "<div class=\"chart\">{svg}</div>"),
        PageBlock::Error(message) => {
            writeln!(writer, "<div class=\"error\">{}</div>", escape_html(message))
        }
        PageBlock::Download { label, href } => writeln!(
            writer,
            "<p><a href=\"{}\" download>{}</a></p>",
            escape_html(href),
            escape_html(label)
        ),
        PageBlock::Divider => writeln!(writer, "<hr>"),
    }
}

fn write_table<W: Write>(writer: &mut W, table: &TableBlock) -> io::Result<()> {
    writeln!(writer, "<table>\n<thead><tr>")?;
    if table.show_index {
        write!(writer, "<th></th>")?;
    }
    for column in &table.columns {
        write!(writer, "<th>{}</th>", escape_html(column))?;
    }
    writeln!(writer, "</tr></thead>\n<tbody>")?;
    for (idx, row) in table.rows.iter().enumerate() {
        write!(writer, "<tr>")?;
        if table.show_index {
            write!(writer, "<td class=\"index\">{idx}</td>")?;
        }
        for cell in row {
            write!(writer, "<td>{}</td>", escape_html(cell))?;
        }
        writeln!(writer, "</tr>")?;
    }
    writeln!(writer, "</tbody>\n</table>")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn error_block_replaces_chart() {
        let mut page = DashboardPage::new("Bacteria");
        page.heading("Uploaded data").error("could not read spreadsheet: bad zip");
        let html = page.to_html();
        assert!(html.contains("<div class=\"error\">could not read spreadsheet: bad zip</div>"));
        assert!(!html.contains("class=\"chart\""));
    }
}
