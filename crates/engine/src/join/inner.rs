// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use super::common::{ResolvedKeys, build_match_map, matched_row, mutating_schema, row_key};
use crate::table::Table;

/// Only rows with at least one match on both sides, in left-table order,
/// matches in right-table order.
pub(crate) fn inner_join(left: &Table, right: &Table, keys: &ResolvedKeys) -> crate::Result<Table> {
	let matches = build_match_map(right, &keys.right);
	let (mut builder, keep) = mutating_schema(left, right, keys);

	for left_row in 0..left.row_count() {
		if let Some(right_rows) = row_key(left, &keys.left, left_row).and_then(|key| matches.get(&key)) {
			for &right_row in right_rows {
				builder.push_row(matched_row(left, right, &keep, left_row, right_row));
			}
		}
	}

	builder.finish()
}
