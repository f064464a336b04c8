// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reframe_engine::{Column, Table, Type, Value, pivot_longer, pivot_wider};

fn table2() -> Table {
	Table::new(vec![
		Column::utf8("country", ["Afghanistan", "Afghanistan", "Brazil", "Brazil"]),
		Column::float8("year", [1999.0, 2000.0, 1999.0, 2000.0]),
		Column::float8("cases", [745.0, 2666.0, 37737.0, 80488.0]),
		Column::float8("population", [19987071.0, 20595360.0, 172006362.0, 174504898.0]),
	])
	.unwrap()
}

#[test]
fn test_scenario_longer_cases_population() {
	let result = pivot_longer(&table2(), &["cases", "population"], "metric", "count").unwrap();

	assert_eq!(result.row_count(), 8);
	assert_eq!(result.column_names(), vec!["country", "year", "metric", "count"]);

	// Each source row expands into one row per selected column, in
	// selection order
	assert_eq!(
		result.row(0),
		vec![
			Value::utf8("Afghanistan"),
			Value::float8(1999.0),
			Value::utf8("cases"),
			Value::float8(745.0)
		]
	);
	assert_eq!(
		result.row(1),
		vec![
			Value::utf8("Afghanistan"),
			Value::float8(1999.0),
			Value::utf8("population"),
			Value::float8(19987071.0)
		]
	);
	assert_eq!(
		result.row(7),
		vec![
			Value::utf8("Brazil"),
			Value::float8(2000.0),
			Value::utf8("population"),
			Value::float8(174504898.0)
		]
	);
}

#[test]
fn test_scenario_wider_year_cases() {
	let narrow = pivot_longer(&table2(), &["cases", "population"], "metric", "count").unwrap();
	let wide = pivot_wider(&narrow, "metric", "count", Value::Undefined).unwrap();

	assert_eq!(wide.column_names(), vec!["country", "year", "cases", "population"]);
	assert_eq!(wide.row_count(), 4);
	assert_eq!(wide, table2());
}

#[test]
fn test_round_trip_preserves_value_types() {
	let wide = Table::new(vec![
		Column::utf8("name", ["a", "b"]),
		Column::float8("x", [1.0, 2.0]),
		Column::float8("y", [3.0, 4.0]),
	])
	.unwrap();

	let long = pivot_longer(&wide, &["x", "y"], "axis", "coord").unwrap();
	assert_eq!(long.column_type("coord").unwrap(), Type::Float8);

	let back = pivot_wider(&long, "axis", "coord", Value::Undefined).unwrap();
	assert_eq!(back, wide);
}

#[test]
fn test_wider_fills_absent_combinations() {
	let long = Table::new(vec![
		Column::utf8("name", ["a", "a", "b"]),
		Column::utf8("key", ["x", "y", "x"]),
		Column::float8("value", [1.0, 2.0, 3.0]),
	])
	.unwrap();

	let wide = pivot_wider(&long, "key", "value", Value::float8(0.0)).unwrap();

	assert_eq!(wide.row_count(), 2);
	assert_eq!(wide.row(0), vec![Value::utf8("a"), Value::float8(1.0), Value::float8(2.0)]);
	assert_eq!(wide.row(1), vec![Value::utf8("b"), Value::float8(3.0), Value::float8(0.0)]);
}

#[test]
fn test_pivot_does_not_mutate_input() {
	let input = table2();

	let _ = pivot_longer(&input, &["cases", "population"], "metric", "count").unwrap();
	assert_eq!(input, table2());

	assert!(pivot_wider(&input, "missing", "cases", Value::Undefined).is_err());
	assert_eq!(input, table2());
}
