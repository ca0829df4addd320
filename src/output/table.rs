//
//  testrail-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Utilities
//!
//! [`TableBuilder`] wraps `comfy-table` with the CLI's preset, and the
//! `format_*` helpers colour individual cells.
//!
//! ```rust,no_run
//! use testrail_cli::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "NAME"])
//!     .row(["1", "Smoke"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::types::ResultStatus;

/// Creates a table with the CLI's default styling.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder over a `comfy_table::Table`.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row. Headers are cyan when colour is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a result status, coloured by outcome.
pub fn format_status(status: Option<ResultStatus>, color: bool) -> String {
    let Some(status) = status else {
        return "-".to_string();
    };
    let text = status.to_string();
    if !color {
        return text;
    }

    use console::style;
    match status {
        ResultStatus::Passed => style(text).green().to_string(),
        ResultStatus::Failed => style(text).red().to_string(),
        ResultStatus::Blocked => style(text).magenta().to_string(),
        ResultStatus::Retest => style(text).yellow().to_string(),
        ResultStatus::Untested => style(text).dim().to_string(),
        ResultStatus::Custom(_) => text,
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Renders an optional value, using `-` for `None`.
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Prüfung läuft", 7), "Prüf...");
    }

    #[test]
    fn test_format_status_plain() {
        assert_eq!(format_status(Some(ResultStatus::Failed), false), "failed");
        assert_eq!(format_status(None, false), "-");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(4)), "4");
        assert_eq!(format_optional(None::<u64>), "-");
    }

    #[test]
    fn test_format_bool_plain() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_bool(false, false), "No");
    }
}
