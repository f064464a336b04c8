// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reframe_type::{Error, Type, Value};
use tracing::instrument;

use crate::column::{Column, ColumnData};
use crate::table::Table;

/// Collapse the named columns into (name, value) rows: every input row
/// produces one output row per collapsed column, in selection order, so the
/// row multiplication factor equals the selection's length. Non-collapsed
/// columns are carried unchanged.
///
/// The collapsed columns must share one semantic type; an all-missing
/// column conforms to any type.
#[instrument(name = "pivot_longer", level = "trace", skip_all)]
pub fn pivot_longer(table: &Table, columns: &[&str], names_to: &str, values_to: &str) -> crate::Result<Table> {
	if columns.is_empty() {
		return Err(Error::EmptyColumnSelection);
	}

	let mut selected = Vec::with_capacity(columns.len());
	for (idx, name) in columns.iter().enumerate() {
		if columns[..idx].contains(name) {
			return Err(Error::DuplicateColumn {
				column: name.to_string(),
			});
		}
		let at = table.column_index(name).ok_or_else(|| Error::UnknownColumn {
			column: name.to_string(),
		})?;
		selected.push(at);
	}

	let kept: Vec<usize> = (0..table.width()).filter(|idx| !selected.contains(idx)).collect();

	if names_to == values_to {
		return Err(Error::DuplicateOutputColumn {
			column: names_to.to_string(),
		});
	}
	for &idx in &kept {
		let name = table[idx].name.as_str();
		if name == names_to || name == values_to {
			return Err(Error::DuplicateOutputColumn {
				column: name.to_string(),
			});
		}
	}

	// The collapsed columns must agree on one semantic type; the first
	// typed column donates the value container (keeping categorical
	// levels)
	let mut value_prototype = ColumnData::Undefined(0);
	let mut value_type = Type::Undefined;
	for &idx in &selected {
		let found = table[idx].get_type();
		if found == Type::Undefined {
			continue;
		}
		if value_type == Type::Undefined {
			value_type = found;
			value_prototype = table[idx].data.empty_like();
		} else if found != value_type {
			return Err(Error::IncompatibleValueType {
				column: table[idx].name.clone(),
				expected: value_type,
				found,
			});
		}
	}

	let mut output: Vec<Column> =
		kept.iter().map(|&idx| Column::new(table[idx].name.clone(), table[idx].data.empty_like())).collect();
	output.push(Column::new(names_to, ColumnData::Utf8(Vec::new(), Vec::new())));
	output.push(Column::new(values_to, value_prototype));

	for row in 0..table.row_count() {
		for &idx in &selected {
			let mut values: Vec<Value> = kept.iter().map(|&k| table[k].data.get(row)).collect();
			values.push(Value::utf8(table[idx].name.clone()));
			values.push(table[idx].data.get(row));

			for (column, value) in output.iter_mut().zip(values) {
				column.data.push(value);
			}
		}
	}

	Table::new(output)
}
