// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::{Deref, Index};

use reframe_type::{Error, Type, Value};
use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnData};

mod display;

/// An ordered collection of named columns with equal lengths.
///
/// Row identity is ordinal position only; no hidden row labels are carried
/// across operations. Constructors enforce the invariants (equal column
/// lengths, unique column names); operations never mutate a table in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
	pub columns: Vec<Column>,
}

impl Deref for Table {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Table {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Table {
	pub fn new(columns: Vec<Column>) -> crate::Result<Self> {
		let expected = columns.first().map_or(0, |c| c.data.len());

		for col in &columns {
			let found = col.data.len();
			if found != expected {
				return Err(Error::ColumnLengthMismatch {
					column: col.name.clone(),
					expected,
					found,
				});
			}
		}

		for (idx, col) in columns.iter().enumerate() {
			if columns[..idx].iter().any(|c| c.name == col.name) {
				return Err(Error::DuplicateColumn {
					column: col.name.clone(),
				});
			}
		}

		Ok(Self {
			columns,
		})
	}

	pub fn empty() -> Self {
		Self {
			columns: Vec::new(),
		}
	}

	/// Build a table from row tuples. Each column's type is inferred from
	/// its first defined value; later defined values must agree.
	pub fn from_rows(names: &[&str], rows: &[Vec<Value>]) -> crate::Result<Self> {
		for (idx, name) in names.iter().enumerate() {
			if names[..idx].contains(name) {
				return Err(Error::DuplicateColumn {
					column: name.to_string(),
				});
			}
		}

		for (row, values) in rows.iter().enumerate() {
			if values.len() != names.len() {
				return Err(Error::RowWidthMismatch {
					row,
					expected: names.len(),
					found: values.len(),
				});
			}
		}

		let mut columns = Vec::with_capacity(names.len());
		for (idx, name) in names.iter().enumerate() {
			let ty = rows.iter().map(|r| r[idx].get_type()).find(|t| *t != Type::Undefined);

			let mut data = match ty {
				Some(ty) => ColumnData::with_capacity(ty, rows.len()),
				None => ColumnData::Undefined(0),
			};

			for values in rows {
				let value = &values[idx];
				let found = value.get_type();
				if found != Type::Undefined && Some(found) != ty {
					return Err(Error::IncompatibleValueType {
						column: name.to_string(),
						expected: ty.unwrap_or(Type::Undefined),
						found,
					});
				}
				data.push(value.clone());
			}

			columns.push(Column::new(*name, data));
		}

		Self::new(columns)
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data.len())
	}

	pub fn width(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.row_count() == 0
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name == name)
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn column_type(&self, name: &str) -> crate::Result<Type> {
		self.column(name).map(|c| c.get_type()).ok_or_else(|| Error::UnknownColumn {
			column: name.to_string(),
		})
	}

	/// A new table holding only the named columns, in the requested order,
	/// with row order preserved.
	pub fn select(&self, names: &[&str]) -> crate::Result<Table> {
		let mut columns = Vec::with_capacity(names.len());

		for (idx, name) in names.iter().enumerate() {
			if names[..idx].contains(name) {
				return Err(Error::DuplicateColumn {
					column: name.to_string(),
				});
			}
			let column = self.column(name).ok_or_else(|| Error::UnknownColumn {
				column: name.to_string(),
			})?;
			columns.push(column.clone());
		}

		Table::new(columns)
	}

	/// The values of row `index`, in column order. Panics if `index` is out
	/// of range, like slice indexing.
	pub fn row(&self, index: usize) -> Vec<Value> {
		self.columns.iter().map(|c| c.data.get(index)).collect()
	}

	/// Caller-requested uniqueness check: whether the combination of the
	/// named columns identifies every row at most once. Missing values
	/// bucket together, so two rows that are both missing a key count as a
	/// duplicate.
	pub fn is_unique(&self, names: &[&str]) -> crate::Result<bool> {
		let view = self.group_view(names)?;
		Ok(view.iter().all(|(_, rows)| rows.len() == 1))
	}
}

#[cfg(test)]
mod tests {
	use reframe_type::{Error, Type, Value};

	use crate::column::Column;
	use crate::table::Table;

	fn people() -> Table {
		Table::new(vec![
			Column::float8("id", [1.0, 2.0, 3.0]),
			Column::utf8("name", ["ada", "grace", "edsger"]),
			Column::bool_with_validity("active", [true, false, false], [true, true, false]),
		])
		.unwrap()
	}

	#[test]
	fn test_new_rejects_ragged_columns() {
		let result = Table::new(vec![
			Column::float8("id", [1.0, 2.0]),
			Column::utf8("name", ["only"]),
		]);
		assert_eq!(
			result.unwrap_err(),
			Error::ColumnLengthMismatch {
				column: "name".to_string(),
				expected: 2,
				found: 1,
			}
		);
	}

	#[test]
	fn test_new_rejects_duplicate_names() {
		let result = Table::new(vec![Column::float8("id", [1.0]), Column::utf8("id", ["x"])]);
		assert_eq!(
			result.unwrap_err(),
			Error::DuplicateColumn {
				column: "id".to_string(),
			}
		);
	}

	#[test]
	fn test_select_preserves_row_order() {
		let table = people();
		let selected = table.select(&["name", "id"]).unwrap();

		assert_eq!(selected.width(), 2);
		assert_eq!(selected[0].name, "name");
		assert_eq!(selected.row(1), vec![Value::utf8("grace"), Value::float8(2.0)]);
	}

	#[test]
	fn test_select_unknown_column() {
		let table = people();
		assert_eq!(
			table.select(&["missing"]).unwrap_err(),
			Error::UnknownColumn {
				column: "missing".to_string(),
			}
		);
	}

	#[test]
	fn test_column_type() {
		let table = people();
		assert_eq!(table.column_type("active").unwrap(), Type::Boolean);
		assert!(table.column_type("nope").is_err());
	}

	#[test]
	fn test_row_surfaces_missing() {
		let table = people();
		assert_eq!(
			table.row(2),
			vec![Value::float8(3.0), Value::utf8("edsger"), Value::Undefined]
		);
	}

	#[test]
	fn test_from_rows_infers_types() {
		let table = Table::from_rows(
			&["id", "name"],
			&[
				vec![Value::Undefined, Value::utf8("a")],
				vec![Value::float8(2.0), Value::Undefined],
			],
		)
		.unwrap();

		assert_eq!(table.column_type("id").unwrap(), Type::Float8);
		assert_eq!(table.row(0), vec![Value::Undefined, Value::utf8("a")]);
	}

	#[test]
	fn test_from_rows_rejects_mixed_types() {
		let result = Table::from_rows(
			&["v"],
			&[vec![Value::float8(1.0)], vec![Value::utf8("two")]],
		);
		assert_eq!(
			result.unwrap_err(),
			Error::IncompatibleValueType {
				column: "v".to_string(),
				expected: Type::Float8,
				found: Type::Utf8,
			}
		);
	}

	#[test]
	fn test_from_rows_rejects_ragged_rows() {
		let result = Table::from_rows(&["a", "b"], &[vec![Value::float8(1.0)]]);
		assert_eq!(
			result.unwrap_err(),
			Error::RowWidthMismatch {
				row: 0,
				expected: 2,
				found: 1,
			}
		);
	}

	#[test]
	fn test_is_unique() {
		let table = Table::new(vec![
			Column::utf8("k", ["a", "b", "a"]),
			Column::float8("v", [1.0, 2.0, 3.0]),
		])
		.unwrap();

		assert!(!table.is_unique(&["k"]).unwrap());
		assert!(table.is_unique(&["k", "v"]).unwrap());
	}

	#[test]
	fn test_serde_roundtrip() {
		let table = people();
		let json = serde_json::to_string(&table).unwrap();
		let back: Table = serde_json::from_str(&json).unwrap();
		assert_eq!(back, table);
	}
}
