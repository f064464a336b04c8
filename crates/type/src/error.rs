// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use thiserror::Error;

use crate::value::Type;

/// Error type shared by every table, join and reshape operation.
///
/// Operations either fully succeed and return a new table or fail with one of
/// these variants, leaving their inputs untouched. All variants are
/// deterministic: retrying a failed call with the same arguments fails
/// identically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	#[error("column '{column}' not found")]
	UnknownColumn {
		column: String,
	},

	#[error("key columns '{left}' ({left_type}) and '{right}' ({right_type}) are not comparable")]
	IncompatibleKeyType {
		left: String,
		right: String,
		left_type: Type,
		right_type: Type,
	},

	#[error("operation would produce duplicate output column '{column}'")]
	DuplicateOutputColumn {
		column: String,
	},

	#[error("join requires at least one key column pair")]
	EmptyKeyMapping,

	#[error("duplicate column name '{column}'")]
	DuplicateColumn {
		column: String,
	},

	#[error("column '{column}' has {found} rows, expected {expected}")]
	ColumnLengthMismatch {
		column: String,
		expected: usize,
		found: usize,
	},

	#[error("row {row} has {found} values, expected {expected}")]
	RowWidthMismatch {
		row: usize,
		expected: usize,
		found: usize,
	},

	#[error("column '{column}' has type {found}, expected {expected}")]
	IncompatibleValueType {
		column: String,
		expected: Type,
		found: Type,
	},

	#[error("at least one column must be selected to collapse")]
	EmptyColumnSelection,
}
