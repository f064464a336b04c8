// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use super::common::{
	ResolvedKeys, build_match_map, matched_row, mutating_schema, row_key, unmatched_left_row, unmatched_right_row,
};
use crate::table::Table;

/// The left-join rows, then every right row that matched nothing, appended
/// in right-table order with the left side filled missing. The coalesced
/// key columns of an appended row carry the right row's key values.
pub(crate) fn full_join(left: &Table, right: &Table, keys: &ResolvedKeys) -> crate::Result<Table> {
	let matches = build_match_map(right, &keys.right);
	let (mut builder, keep) = mutating_schema(left, right, keys);

	let mut right_matched = vec![false; right.row_count()];

	for left_row in 0..left.row_count() {
		let matched = row_key(left, &keys.left, left_row).and_then(|key| matches.get(&key));

		match matched {
			Some(right_rows) => {
				for &right_row in right_rows {
					right_matched[right_row] = true;
					builder.push_row(matched_row(left, right, &keep, left_row, right_row));
				}
			}
			None => builder.push_row(unmatched_left_row(left, keep.len(), left_row)),
		}
	}

	for (right_row, matched) in right_matched.iter().enumerate() {
		if !matched {
			builder.push_row(unmatched_right_row(left, right, keys, &keep, right_row));
		}
	}

	builder.finish()
}

#[cfg(test)]
mod tests {
	use reframe_type::Value;

	use crate::column::Column;
	use crate::join::{JoinKind, KeyMapping, join};
	use crate::table::Table;

	#[test]
	fn test_full_join_unions_both_sides() {
		let left = Table::new(vec![
			Column::float8("id", [1.0, 2.0]),
			Column::utf8("val", ["x", "y"]),
		])
		.unwrap();
		let right = Table::new(vec![
			Column::float8("id", [2.0, 3.0]),
			Column::float8("score", [9.0, 4.0]),
		])
		.unwrap();

		let result = join(JoinKind::Full, &left, &right, &KeyMapping::columns(["id"])).unwrap();

		assert_eq!(result.row_count(), 3);
		assert_eq!(result.row(0), vec![Value::float8(1.0), Value::utf8("x"), Value::Undefined]);
		assert_eq!(result.row(1), vec![Value::float8(2.0), Value::utf8("y"), Value::float8(9.0)]);
		// Right-only row carries its key in the coalesced id column
		assert_eq!(result.row(2), vec![Value::float8(3.0), Value::Undefined, Value::float8(4.0)]);
	}

	#[test]
	fn test_full_join_missing_keys_survive_both_sides() {
		let left = Table::new(vec![Column::float8_with_validity("id", [0.0], [false])]).unwrap();
		let right = Table::new(vec![
			Column::float8_with_validity("id", [0.0], [false]),
			Column::float8("score", [7.0]),
		])
		.unwrap();

		let result = join(JoinKind::Full, &left, &right, &KeyMapping::columns(["id"])).unwrap();

		// Neither missing key matches the other; both rows survive
		assert_eq!(result.row_count(), 2);
		assert_eq!(result.row(0), vec![Value::Undefined, Value::Undefined]);
		assert_eq!(result.row(1), vec![Value::Undefined, Value::float8(7.0)]);
	}
}
