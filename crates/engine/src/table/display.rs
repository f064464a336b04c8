// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use super::Table;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn width(s: &str) -> usize {
	s.chars().count()
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		// Calculate column widths
		let mut col_widths: Vec<usize> = Vec::new();
		for col in &self.columns {
			let header_width = width(&escape_control_chars(&col.name));
			let mut max_val_width = 0;
			for i in 0..row_count {
				max_val_width = max_val_width.max(width(&escape_control_chars(&col.data.as_string(i))));
			}
			col_widths.push(header_width.max(max_val_width) + 2);
		}

		let sep: String = if col_widths.is_empty() {
			"++".to_string()
		} else {
			col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
		};

		writeln!(f, "{}", sep)?;

		let center = |text: &str, w: usize| {
			let pad = w - width(text);
			let l = pad / 2;
			let r = pad - l;
			format!(" {:l$}{}{:r$} ", "", text, "")
		};

		// Header
		let header_parts: Vec<String> = self
			.columns
			.iter()
			.zip(&col_widths)
			.map(|(col, w)| center(&escape_control_chars(&col.name), *w))
			.collect();
		writeln!(f, "|{}|", header_parts.join("|"))?;
		writeln!(f, "{}", sep)?;

		// Rows
		for row_idx in 0..row_count {
			let row_parts: Vec<String> = self
				.columns
				.iter()
				.zip(&col_widths)
				.map(|(col, w)| center(&escape_control_chars(&col.data.as_string(row_idx)), *w))
				.collect();
			writeln!(f, "|{}|", row_parts.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}
