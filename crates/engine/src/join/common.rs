// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashMap;

use reframe_type::Value;

use crate::column::Column;
use crate::table::Table;

/// Key column indices resolved against both tables, pairwise.
pub(crate) struct ResolvedKeys {
	pub left: Vec<usize>,
	pub right: Vec<usize>,
}

/// One row's key tuple. Only fully defined tuples are constructed, so map
/// lookups never equate missing with missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct JoinKey(Vec<Value>);

/// The key tuple of `row`, or `None` if any mapped column is missing there.
pub(crate) fn row_key(table: &Table, indices: &[usize], row: usize) -> Option<JoinKey> {
	let mut values = Vec::with_capacity(indices.len());
	for &idx in indices {
		let value = table[idx].data.get(row);
		if value.is_undefined() {
			return None;
		}
		values.push(value);
	}
	Some(JoinKey(values))
}

/// Multi-map from each fully defined right-side key tuple to the ordinals
/// of its rows, in right-table row order.
pub(crate) fn build_match_map(right: &Table, indices: &[usize]) -> HashMap<JoinKey, Vec<usize>> {
	let mut map: HashMap<JoinKey, Vec<usize>> = HashMap::new();
	for row in 0..right.row_count() {
		if let Some(key) = row_key(right, indices, row) {
			map.entry(key).or_default().push(row);
		}
	}
	map
}

/// Accumulates output rows into columns whose names and types were fixed up
/// front, so zero-row results still carry the full schema.
pub(crate) struct OutputBuilder {
	columns: Vec<Column>,
}

impl OutputBuilder {
	pub fn push_row(&mut self, values: impl IntoIterator<Item = Value>) {
		for (column, value) in self.columns.iter_mut().zip(values) {
			column.data.push(value);
		}
	}

	pub fn finish(self) -> crate::Result<Table> {
		Table::new(self.columns)
	}
}

/// Output schema of a mutating join: every left column, then every right
/// column that is not a mapped key (key columns coalesce under the left
/// name). Name collisions on the right are suffixed `_2`, `_3`, ...
///
/// Returns the builder and the kept right column indices.
pub(crate) fn mutating_schema(left: &Table, right: &Table, keys: &ResolvedKeys) -> (OutputBuilder, Vec<usize>) {
	let mut names: Vec<String> = left.iter().map(|c| c.name.clone()).collect();
	let mut columns: Vec<Column> =
		left.iter().map(|c| Column::new(c.name.clone(), c.data.empty_like())).collect();

	let mut keep = Vec::new();
	for (idx, col) in right.iter().enumerate() {
		if keys.right.contains(&idx) {
			continue;
		}

		let mut final_name = col.name.clone();
		if names.contains(&final_name) {
			let mut counter = 2;
			loop {
				let candidate = format!("{}_{}", col.name, counter);
				if !names.contains(&candidate) {
					final_name = candidate;
					break;
				}
				counter += 1;
			}
		}

		names.push(final_name.clone());
		columns.push(Column::new(final_name, col.data.empty_like()));
		keep.push(idx);
	}

	(
		OutputBuilder {
			columns,
		},
		keep,
	)
}

/// A matched output row: the left row followed by the kept right values.
pub(crate) fn matched_row(left: &Table, right: &Table, keep: &[usize], left_row: usize, right_row: usize) -> Vec<Value> {
	let mut values = left.row(left_row);
	values.extend(keep.iter().map(|&idx| right[idx].data.get(right_row)));
	values
}

/// An unmatched left output row: the left row with missing right values.
pub(crate) fn unmatched_left_row(left: &Table, keep_width: usize, left_row: usize) -> Vec<Value> {
	let mut values = left.row(left_row);
	values.extend(std::iter::repeat_n(Value::Undefined, keep_width));
	values
}

/// An unmatched right output row for a full join: left columns missing,
/// except the coalesced key columns, which carry the right row's key values.
pub(crate) fn unmatched_right_row(
	left: &Table,
	right: &Table,
	keys: &ResolvedKeys,
	keep: &[usize],
	right_row: usize,
) -> Vec<Value> {
	let mut values = vec![Value::Undefined; left.width()];
	for (key_at, &left_idx) in keys.left.iter().enumerate() {
		values[left_idx] = right[keys.right[key_at]].data.get(right_row);
	}
	values.extend(keep.iter().map(|&idx| right[idx].data.get(right_row)));
	values
}
