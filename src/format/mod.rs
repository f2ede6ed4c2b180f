//! Output formatting for listings (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::listing::ProductRecord;
use serde::Serialize;

/// Width the name column is truncated and padded to in table output.
const NAME_WIDTH: usize = 30;

/// Formats listings for output.
pub struct Formatter {
    format: OutputFormat,
}

/// JSON shape of a listing, with the normalized price alongside the raw text.
#[derive(Serialize)]
struct Row<'a> {
    name: &'a str,
    price: u64,
    price_text: &'a str,
    link: &'a str,
    source: &'a str,
}

impl<'a> From<&'a ProductRecord> for Row<'a> {
    fn from(record: &'a ProductRecord) -> Self {
        Self {
            name: record.name().trim(),
            price: record.price(),
            price_text: record.price_text().trim(),
            link: record.link(),
            source: record.source(),
        }
    }
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a list of records, keeping their order.
    pub fn format_records(&self, records: &[ProductRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => Self::csv_header().to_string(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Table => self.table(records),
            OutputFormat::Json => self.json(records),
            OutputFormat::Markdown => self.markdown(records),
            OutputFormat::Csv => self.csv(records),
        }
    }

    // Table formatting

    fn table(&self, records: &[ProductRecord]) -> String {
        records.iter().map(Self::table_line).collect::<Vec<_>>().join("\n")
    }

    /// `name - Rs. price (source)` with the name cut and padded to 30 characters.
    ///
    /// The name is trimmed first, so page whitespace around it never counts
    /// toward the 30.
    fn table_line(record: &ProductRecord) -> String {
        let name = truncate_chars(record.name().trim(), NAME_WIDTH);
        format!(
            "{:<width$} - Rs. {} ({})",
            name,
            group_thousands(record.price()),
            record.source(),
            width = NAME_WIDTH
        )
    }

    // JSON formatting

    fn json(&self, records: &[ProductRecord]) -> String {
        let rows: Vec<Row> = records.iter().map(Row::from).collect();
        serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
    }

    // Markdown formatting

    fn markdown(&self, records: &[ProductRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| Price | Source | Name |".to_string());
        lines.push("|-------|--------|------|".to_string());

        for record in records {
            lines.push(format!(
                "| Rs. {} | {} | [{}]({}) |",
                group_thousands(record.price()),
                record.source(),
                record.name().trim().replace('|', "\\|"),
                record.link()
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", records.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header() -> &'static str {
        "name,price,price_text,source,link"
    }

    fn csv(&self, records: &[ProductRecord]) -> String {
        let mut lines = vec![Self::csv_header().to_string()];

        for record in records {
            lines.push(format!(
                "{},{},{},{},{}",
                Self::csv_escape(record.name().trim()),
                record.price(),
                Self::csv_escape(record.price_text().trim()),
                Self::csv_escape(record.source()),
                Self::csv_escape(record.link())
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Returns at most `max` characters of `s`, never splitting a character.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Formats `n` with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
