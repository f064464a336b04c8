// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use super::common::{ResolvedKeys, build_match_map, row_key};
use super::semi::filter_rows;
use crate::table::Table;

/// Left rows with zero matches, left columns only. A left row whose key is
/// missing matches nothing and is therefore kept.
pub(crate) fn anti_join(left: &Table, right: &Table, keys: &ResolvedKeys) -> crate::Result<Table> {
	let matches = build_match_map(right, &keys.right);

	let kept: Vec<usize> = (0..left.row_count())
		.filter(|&row| {
			row_key(left, &keys.left, row).map_or(true, |key| !matches.contains_key(&key))
		})
		.collect();

	filter_rows(left, &kept)
}

#[cfg(test)]
mod tests {
	use reframe_type::Value;

	use crate::column::Column;
	use crate::join::{JoinKind, KeyMapping, join};
	use crate::table::Table;

	#[test]
	fn test_anti_join_keeps_unmatched() {
		let left = Table::new(vec![
			Column::float8("id", [1.0, 2.0]),
			Column::utf8("val", ["x", "y"]),
		])
		.unwrap();
		let right = Table::new(vec![Column::float8("id", [2.0, 3.0])]).unwrap();

		let result = join(JoinKind::Anti, &left, &right, &KeyMapping::columns(["id"])).unwrap();

		assert_eq!(result.row_count(), 1);
		assert_eq!(result.row(0), vec![Value::float8(1.0), Value::utf8("x")]);
	}

	#[test]
	fn test_anti_join_empty_result_keeps_columns() {
		let left = Table::new(vec![Column::float8("id", [2.0]), Column::utf8("val", ["y"])]).unwrap();
		let right = Table::new(vec![Column::float8("id", [2.0])]).unwrap();

		let result = join(JoinKind::Anti, &left, &right, &KeyMapping::columns(["id"])).unwrap();

		assert_eq!(result.row_count(), 0);
		let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["id", "val"]);
	}

	#[test]
	fn test_anti_join_missing_key_is_kept() {
		let left = Table::new(vec![Column::float8_with_validity("id", [0.0], [false])]).unwrap();
		let right = Table::new(vec![Column::float8_with_validity("id", [0.0], [false])]).unwrap();

		let result = join(JoinKind::Anti, &left, &right, &KeyMapping::columns(["id"])).unwrap();
		assert_eq!(result.row_count(), 1);
	}
}
