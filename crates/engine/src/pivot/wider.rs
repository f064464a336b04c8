// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashMap;

use reframe_type::{Error, Type, Value};
use tracing::instrument;

use crate::column::Column;
use crate::table::Table;
use crate::view::GroupKey;

/// Spread a long table into a wide one: one output column per distinct
/// label in `names_from`, one output row per combination of the remaining
/// columns.
///
/// Groups and labels appear in first-observation order. A (group, label)
/// combination observed more than once keeps its first value; callers
/// needing aggregation pre-aggregate. Combinations absent from the input
/// take `fill` (pass [`Value::Undefined`] for the missing marker). A
/// missing label names its column `undefined`.
#[instrument(name = "pivot_wider", level = "trace", skip_all)]
pub fn pivot_wider(table: &Table, names_from: &str, values_from: &str, fill: Value) -> crate::Result<Table> {
	let names_idx = table.column_index(names_from).ok_or_else(|| Error::UnknownColumn {
		column: names_from.to_string(),
	})?;
	let values_idx = table.column_index(values_from).ok_or_else(|| Error::UnknownColumn {
		column: values_from.to_string(),
	})?;

	let names_type = table[names_idx].get_type();
	if !names_type.is_comparable_with(&Type::Utf8) {
		return Err(Error::IncompatibleKeyType {
			left: names_from.to_string(),
			right: names_from.to_string(),
			left_type: names_type,
			right_type: Type::Utf8,
		});
	}

	let values_type = table[values_idx].get_type();
	let fill_type = fill.get_type();
	if !fill_type.is_comparable_with(&values_type) {
		return Err(Error::IncompatibleValueType {
			column: values_from.to_string(),
			expected: values_type,
			found: fill_type,
		});
	}

	let group_indices: Vec<usize> =
		(0..table.width()).filter(|&idx| idx != names_idx && idx != values_idx).collect();
	let group_names: Vec<&str> = group_indices.iter().map(|&idx| table[idx].name.as_str()).collect();

	let view = table.group_view(&group_names)?;

	// Distinct labels in first-observation order. The missing-label
	// bucket is tracked apart from any genuine text label, so a text
	// label spelled like the missing marker's rendering still collides
	// by name below instead of merging buckets.
	let mut labels: Vec<Option<String>> = Vec::new();
	let mut label_ordinals: HashMap<Option<String>, usize> = HashMap::new();
	for row in 0..table.row_count() {
		let label = if table[names_idx].data.is_defined(row) {
			Some(table[names_idx].data.as_string(row))
		} else {
			None
		};
		if !label_ordinals.contains_key(&label) {
			label_ordinals.insert(label.clone(), labels.len());
			labels.push(label);
		}
	}

	let label_names: Vec<String> =
		labels.iter().map(|l| l.clone().unwrap_or_else(|| Value::Undefined.to_string())).collect();
	for (idx, name) in label_names.iter().enumerate() {
		if label_names[..idx].contains(name) || group_names.contains(&name.as_str()) {
			return Err(Error::DuplicateOutputColumn {
				column: name.clone(),
			});
		}
	}

	// Keep the first observed value per (group, label) combination
	let mut cells: Vec<Vec<Option<Value>>> = vec![vec![None; labels.len()]; view.len()];
	for row in 0..table.row_count() {
		let key = GroupKey(group_indices.iter().map(|&idx| table[idx].data.get(row)).collect());
		let group = view.ordinal_of(&key).expect("row key must be grouped");
		let label = if table[names_idx].data.is_defined(row) {
			Some(table[names_idx].data.as_string(row))
		} else {
			None
		};
		let label = &label_ordinals[&label];

		let cell = &mut cells[group][*label];
		if cell.is_none() {
			*cell = Some(table[values_idx].data.get(row));
		}
	}

	let mut columns: Vec<Column> = group_indices
		.iter()
		.map(|&idx| Column::new(table[idx].name.clone(), table[idx].data.empty_like()))
		.collect();
	for name in &label_names {
		columns.push(Column::new(name.clone(), table[values_idx].data.empty_like()));
	}

	for (group, (key, _)) in view.iter().enumerate() {
		let mut values: Vec<Value> = key.0.clone();
		for label in 0..labels.len() {
			values.push(cells[group][label].clone().unwrap_or_else(|| fill.clone()));
		}
		for (column, value) in columns.iter_mut().zip(values) {
			column.data.push(value);
		}
	}

	Table::new(columns)
}

#[cfg(test)]
mod tests {
	use reframe_type::{Error, Type, Value};

	use super::pivot_wider;
	use crate::column::Column;
	use crate::table::Table;

	fn long_table() -> Table {
		Table::new(vec![
			Column::float8("id", [1.0, 1.0, 2.0]),
			Column::utf8("type", ["cases", "population", "cases"]),
			Column::float8("count", [5.0, 100.0, 3.0]),
		])
		.unwrap()
	}

	#[test]
	fn test_wider_spreads_labels_into_columns() {
		let result = pivot_wider(&long_table(), "type", "count", Value::Undefined).unwrap();

		let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["id", "cases", "population"]);
		assert_eq!(result.row_count(), 2);
		assert_eq!(result.row(0), vec![Value::float8(1.0), Value::float8(5.0), Value::float8(100.0)]);
		assert_eq!(result.row(1), vec![Value::float8(2.0), Value::float8(3.0), Value::Undefined]);
	}

	#[test]
	fn test_wider_uses_fill_value() {
		let result = pivot_wider(&long_table(), "type", "count", Value::float8(0.0)).unwrap();
		assert_eq!(result.row(1), vec![Value::float8(2.0), Value::float8(3.0), Value::float8(0.0)]);
	}

	#[test]
	fn test_wider_keeps_first_on_duplicates() {
		let table = Table::new(vec![
			Column::float8("id", [1.0, 1.0]),
			Column::utf8("type", ["cases", "cases"]),
			Column::float8("count", [5.0, 99.0]),
		])
		.unwrap();

		let result = pivot_wider(&table, "type", "count", Value::Undefined).unwrap();
		assert_eq!(result.row_count(), 1);
		assert_eq!(result.row(0), vec![Value::float8(1.0), Value::float8(5.0)]);
	}

	#[test]
	fn test_wider_missing_label_becomes_undefined_column() {
		let table = Table::new(vec![
			Column::float8("id", [1.0]),
			Column::utf8_with_validity("type", [""], [false]),
			Column::float8("count", [5.0]),
		])
		.unwrap();

		let result = pivot_wider(&table, "type", "count", Value::Undefined).unwrap();
		let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["id", "undefined"]);
	}

	#[test]
	fn test_wider_rejects_text_label_colliding_with_missing_bucket() {
		let table = Table::new(vec![
			Column::float8("id", [1.0, 1.0]),
			Column::utf8_with_validity("type", ["undefined", ""], [true, false]),
			Column::float8("count", [1.0, 2.0]),
		])
		.unwrap();

		// A real "undefined" label and a missing entry are distinct
		// labels whose output columns would share a name
		let result = pivot_wider(&table, "type", "count", Value::Undefined);
		assert_eq!(
			result.unwrap_err(),
			Error::DuplicateOutputColumn {
				column: "undefined".to_string(),
			}
		);
	}

	#[test]
	fn test_wider_rejects_non_text_names_column() {
		let table = long_table();
		let result = pivot_wider(&table, "count", "id", Value::Undefined);
		assert_eq!(
			result.unwrap_err(),
			Error::IncompatibleKeyType {
				left: "count".to_string(),
				right: "count".to_string(),
				left_type: Type::Float8,
				right_type: Type::Utf8,
			}
		);
	}

	#[test]
	fn test_wider_rejects_label_colliding_with_group_column() {
		let table = Table::new(vec![
			Column::float8("id", [1.0]),
			Column::utf8("type", ["id"]),
			Column::float8("count", [5.0]),
		])
		.unwrap();

		let result = pivot_wider(&table, "type", "count", Value::Undefined);
		assert_eq!(
			result.unwrap_err(),
			Error::DuplicateOutputColumn {
				column: "id".to_string(),
			}
		);
	}

	#[test]
	fn test_wider_rejects_mismatched_fill_type() {
		let result = pivot_wider(&long_table(), "type", "count", Value::utf8("zero"));
		assert_eq!(
			result.unwrap_err(),
			Error::IncompatibleValueType {
				column: "count".to_string(),
				expected: Type::Float8,
				found: Type::Utf8,
			}
		);
	}

	#[test]
	fn test_wider_categorical_names_column() {
		let table = Table::new(vec![
			Column::float8("id", [1.0, 1.0]),
			Column::categorical("type", ["a", "b"], ["b", "a"]),
			Column::float8("v", [1.0, 2.0]),
		])
		.unwrap();

		let result = pivot_wider(&table, "type", "v", Value::Undefined).unwrap();
		let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
		// Labels in first-observation order, not level order
		assert_eq!(names, vec!["id", "b", "a"]);
	}
}
