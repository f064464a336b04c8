// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashMap;

use reframe_type::{Error, Value};

use crate::table::Table;

/// The key values identifying one group. Missing values bucket together
/// here: a group is an observation bucket, not an equality claim between
/// unknowns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(pub Vec<Value>);

/// Row ordinals bucketed by key, retaining first-observation order of the
/// groups and ascending row order within each group.
#[derive(Debug)]
pub struct GroupView {
	index: HashMap<GroupKey, usize>,
	groups: Vec<(GroupKey, Vec<usize>)>,
}

impl GroupView {
	fn new() -> Self {
		Self {
			index: HashMap::new(),
			groups: Vec::new(),
		}
	}

	fn insert(&mut self, key: GroupKey, row: usize) {
		match self.index.get(&key) {
			Some(&at) => self.groups[at].1.push(row),
			None => {
				self.index.insert(key.clone(), self.groups.len());
				self.groups.push((key, vec![row]));
			}
		}
	}

	pub fn len(&self) -> usize {
		self.groups.len()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// The first-observation ordinal of the group holding `key`.
	pub fn ordinal_of(&self, key: &GroupKey) -> Option<usize> {
		self.index.get(key).copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = &(GroupKey, Vec<usize>)> {
		self.groups.iter()
	}
}

impl Table {
	/// Bucket row ordinals by the values of the named columns. With an
	/// empty key list every row lands in one group.
	pub fn group_view(&self, keys: &[&str]) -> crate::Result<GroupView> {
		let mut key_indices = Vec::with_capacity(keys.len());
		for &key in keys {
			let idx = self.column_index(key).ok_or_else(|| Error::UnknownColumn {
				column: key.to_string(),
			})?;
			key_indices.push(idx);
		}

		let mut view = GroupView::new();
		for row in 0..self.row_count() {
			let values = key_indices.iter().map(|&idx| self.columns[idx].data.get(row)).collect();
			view.insert(GroupKey(values), row);
		}

		Ok(view)
	}
}

#[cfg(test)]
mod tests {
	use reframe_type::Value;

	use super::GroupKey;
	use crate::column::Column;
	use crate::table::Table;

	fn table() -> Table {
		Table::new(vec![
			Column::utf8("k", ["a", "b", "a", "b"]),
			Column::float8_with_validity("v", [1.0, 2.0, 3.0, 0.0], [true, true, true, false]),
		])
		.unwrap()
	}

	#[test]
	fn test_groups_in_first_observation_order() {
		let view = table().group_view(&["k"]).unwrap();

		let groups: Vec<_> = view.iter().collect();
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].0, GroupKey(vec![Value::utf8("a")]));
		assert_eq!(groups[0].1, vec![0, 2]);
		assert_eq!(groups[1].0, GroupKey(vec![Value::utf8("b")]));
		assert_eq!(groups[1].1, vec![1, 3]);
	}

	#[test]
	fn test_missing_keys_bucket_together() {
		let table = Table::new(vec![Column::utf8_with_validity("k", ["", "x", ""], [false, true, false])])
			.unwrap();
		let view = table.group_view(&["k"]).unwrap();

		assert_eq!(view.len(), 2);
		let undefined = view.ordinal_of(&GroupKey(vec![Value::Undefined])).unwrap();
		assert_eq!(view.iter().nth(undefined).unwrap().1, vec![0, 2]);
	}

	#[test]
	fn test_empty_key_list_single_group() {
		let view = table().group_view(&[]).unwrap();
		assert_eq!(view.len(), 1);
		assert_eq!(view.iter().next().unwrap().1, vec![0, 1, 2, 3]);
	}

	#[test]
	fn test_unknown_key_column() {
		assert!(table().group_view(&["missing"]).is_err());
	}
}
