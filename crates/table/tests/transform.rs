//! End-to-end tests for the transformation operators: projection,
//! filtering, sorting, slicing, dedup and renaming, plus the guarantees
//! they share (immutability, stability, null ordering, structural reuse).

use slate_table::{DataType, RowKey, Table, Value};

fn sample() -> Table {
    // id: 1, 2, 3 / name: a, b, a
    Table::builder(vec![
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("2"), Value::from("b")],
        vec![Value::from("3"), Value::from("a")],
    ])
    .column_names(["id", "name"])
    .build()
    .unwrap()
}

fn ids(table: &Table) -> Vec<i64> {
    table
        .rows()
        .iter()
        .map(|row| row["id"].as_int().unwrap())
        .collect()
}

#[test]
fn select_projects_and_reorders() {
    let table = sample();

    let names = table.select("name").unwrap();
    assert_eq!(names.column_names(), ["name"]);
    assert_eq!(names.column_types(), &[DataType::Text]);
    let values: Vec<&Value> = names.rows().iter().map(|r| &r[0]).collect();
    assert_eq!(values, [&Value::from("a"), &Value::from("b"), &Value::from("a")]);

    // Key order wins over source order.
    let flipped = table.select(["name", "id"]).unwrap();
    assert_eq!(flipped.column_names(), ["name", "id"]);
    assert_eq!(flipped.column_types(), &[DataType::Text, DataType::Number]);
    assert_eq!(flipped.rows()[0][0], Value::from("a"));
    assert_eq!(flipped.rows()[0][1], Value::Int(1));
}

#[test]
fn select_unknown_column_fails() {
    assert!(sample().select("missing").is_err());
}

#[test]
fn select_all_columns_round_trips() {
    let table = sample();
    let same = table.select(["id", "name"]).unwrap();
    assert_eq!(same.rows(), table.rows());
    assert_eq!(same.column_names(), table.column_names());
}

#[test]
fn exclude_is_complement_in_original_order() {
    let table = sample();
    let selected = table.select(["name"]).unwrap();
    let excluded = table.exclude(["name"]).unwrap();

    assert_eq!(selected.column_names(), ["name"]);
    assert_eq!(excluded.column_names(), ["id"]);
    assert_eq!(excluded.rows()[2][0], Value::Int(3));
}

#[test]
fn filter_keeps_matching_rows_in_order() {
    let table = sample();
    let big = table.filter(|row| row["id"].as_int() > Some(1));

    assert_eq!(ids(&big), [2, 3]);
    assert_eq!(big.column_names(), table.column_names());
    // Receiver unchanged.
    assert_eq!(ids(&table), [1, 2, 3]);
}

#[test]
fn filter_carries_row_names() {
    let table = Table::builder(vec![
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("2"), Value::from("b")],
    ])
    .column_names(["id", "name"])
    .row_names("name")
    .build()
    .unwrap();

    let only_b = table.filter(|row| row["name"] == Value::from("b"));
    assert_eq!(only_b.row_names(), Some(&[Value::from("b")][..]));
    assert_eq!(only_b.rows().get_by_str("b").unwrap()["id"], Value::Int(2));
    assert!(only_b.rows().get_by_str("a").is_none());
}

#[test]
fn find_short_circuits() {
    let table = sample();
    let row = table.find(|row| row["name"] == Value::from("a")).unwrap();
    assert_eq!(row["id"], Value::Int(1));
    assert!(table.find(|row| row["id"].as_int() > Some(99)).is_none());
}

#[test]
fn order_by_sorts_and_reverses() {
    let table = sample();

    let asc = table.order_by("id", false).unwrap();
    assert_eq!(ids(&asc), [1, 2, 3]);

    let desc = table.order_by("id", true).unwrap();
    assert_eq!(ids(&desc), [3, 2, 1]);

    // The receiver keeps its original order.
    assert_eq!(ids(&table), [1, 2, 3]);
}

#[test]
fn order_by_is_stable() {
    // Equal "name" keys keep original relative order of ids.
    let sorted = sample().order_by("name", false).unwrap();
    assert_eq!(ids(&sorted), [1, 3, 2]);

    let reversed = sample().order_by("name", true).unwrap();
    assert_eq!(ids(&reversed), [2, 1, 3]);
}

#[test]
fn order_by_composite_key() {
    let table = Table::builder(vec![
        vec![Value::from("x"), Value::from("2")],
        vec![Value::from("x"), Value::from("1")],
        vec![Value::from("a"), Value::from("9")],
    ])
    .column_names(["group", "rank"])
    .build()
    .unwrap();

    let sorted = table.order_by(["group", "rank"], false).unwrap();
    let pairs: Vec<(String, i64)> = sorted
        .rows()
        .iter()
        .map(|r| (r["group"].as_str(), r["rank"].as_int().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("a".to_string(), 9),
            ("x".to_string(), 1),
            ("x".to_string(), 2)
        ]
    );
}

#[test]
fn order_by_nulls_first_ascending_last_descending() {
    let table = Table::builder(vec![
        vec![Value::from("5")],
        vec![Value::from("")],
        vec![Value::from("1")],
    ])
    .column_names(["n"])
    .build()
    .unwrap();

    let asc = table.order_by("n", false).unwrap();
    let first: Vec<&Value> = asc.rows().iter().map(|r| &r[0]).collect();
    assert_eq!(first, [&Value::Null, &Value::Int(1), &Value::Int(5)]);

    let desc = table.order_by("n", true).unwrap();
    let last: Vec<&Value> = desc.rows().iter().map(|r| &r[0]).collect();
    assert_eq!(last, [&Value::Int(5), &Value::Int(1), &Value::Null]);
}

#[test]
fn order_by_null_in_composite_key_sorts_first() {
    let table = Table::builder(vec![
        vec![Value::from("x"), Value::from("1")],
        vec![Value::from("x"), Value::from("")],
    ])
    .column_names(["a", "b"])
    .build()
    .unwrap();

    let sorted = table.order_by(["a", "b"], false).unwrap();
    assert_eq!(sorted.rows()[0]["b"], Value::Null);
}

#[test]
fn order_by_row_function() {
    let table = sample();
    let sorted = table
        .order_by(
            RowKey::function(|row| Value::Int(-row["id"].as_int().unwrap_or(0))),
            false,
        )
        .unwrap();
    assert_eq!(ids(&sorted), [3, 2, 1]);
}

#[test]
fn order_by_permutes_row_names_identically() {
    let table = Table::builder(vec![
        vec![Value::from("2"), Value::from("b")],
        vec![Value::from("1"), Value::from("a")],
    ])
    .column_names(["id", "name"])
    .row_names("name")
    .build()
    .unwrap();

    let sorted = table.order_by("id", false).unwrap();
    assert_eq!(
        sorted.row_names(),
        Some(&[Value::from("a"), Value::from("b")][..])
    );
}

#[test]
fn limit_single_argument_is_stop_bound() {
    let table = sample();
    let first_two = table.limit(2, None, None).unwrap();
    assert_eq!(ids(&first_two), [1, 2]);
}

#[test]
fn limit_matches_slice_semantics() {
    let table = sample();

    // rows[1..3]
    let middle = table.limit(1, Some(3), None).unwrap();
    assert_eq!(ids(&middle), [2, 3]);

    // rows[0..3:2]
    let stepped = table.limit(0, Some(3), Some(2)).unwrap();
    assert_eq!(ids(&stepped), [1, 3]);

    // Out-of-range bounds clamp like slices do.
    let clamped = table.limit(1, Some(99), None).unwrap();
    assert_eq!(ids(&clamped), [2, 3]);
}

#[test]
fn limit_zero_step_is_an_error() {
    assert!(sample().limit(0, Some(2), Some(0)).is_err());
}

#[test]
fn limit_slices_row_names() {
    let table = Table::builder(vec![
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("2"), Value::from("b")],
        vec![Value::from("3"), Value::from("c")],
    ])
    .column_names(["id", "name"])
    .row_names("name")
    .build()
    .unwrap();

    let sliced = table.limit(1, Some(3), None).unwrap();
    assert_eq!(
        sliced.row_names(),
        Some(&[Value::from("b"), Value::from("c")][..])
    );
}

#[test]
fn distinct_by_column_keeps_first() {
    let table = sample();
    let unique = table.distinct_by("name").unwrap();
    assert_eq!(ids(&unique), [1, 2]);
}

#[test]
fn distinct_whole_row() {
    let table = Table::builder(vec![
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("1"), Value::from("b")],
    ])
    .column_names(["id", "name"])
    .build()
    .unwrap();

    let unique = table.distinct();
    assert_eq!(unique.rows().len(), 2);
}

#[test]
fn distinct_uses_value_equality() {
    // Two distinct allocations of the same text compare equal.
    let table = Table::builder(vec![
        vec![Value::Text("a".to_string())],
        vec![Value::Text("a".to_string())],
    ])
    .column_names(["name"])
    .build()
    .unwrap();

    assert_eq!(table.distinct().rows().len(), 1);
}

#[test]
fn distinct_keeps_rows_whose_cells_contain_control_characters() {
    // Cell boundaries must not be confusable with cell content: these two
    // rows differ, even though a naive concatenation of their cells would
    // not.
    let table = Table::builder(vec![
        vec![Value::from("a\x1fSb"), Value::from("c")],
        vec![Value::from("a"), Value::from("b\x1fSc")],
    ])
    .column_names(["x", "y"])
    .column_types([DataType::Text, DataType::Text])
    .build()
    .unwrap();

    assert_eq!(table.distinct().rows().len(), 2);
    assert_eq!(
        table.distinct_by(["x", "y"]).unwrap().rows().len(),
        2
    );
}

#[test]
fn distinct_by_function_key() {
    let table = sample();
    let unique = table
        .distinct_by(RowKey::function(|row| {
            Value::Int(row["id"].as_int().unwrap_or(0) % 2)
        }))
        .unwrap();
    // 1 (odd) and 2 (even) kept, 3 (odd again) dropped.
    assert_eq!(ids(&unique), [1, 2]);
}

#[test]
fn rename_columns_full_and_partial() {
    let table = sample();

    let full = table.rename_columns(["a", "b"]).unwrap();
    assert_eq!(full.column_names(), ["a", "b"]);
    assert_eq!(full.rows()[0]["a"], Value::Int(1));

    let partial = table.rename_columns([("name", "label")]).unwrap();
    assert_eq!(partial.column_names(), ["id", "label"]);
    assert_eq!(partial.rows()[2]["label"], Value::from("a"));

    // The receiver keeps its names.
    assert_eq!(table.column_names(), ["id", "name"]);
}

#[test]
fn rename_columns_revalidates_uniqueness() {
    let table = sample();
    let collided = table.rename_columns(["x", "x"]).unwrap();
    assert_eq!(collided.column_names(), ["x", "x_2"]);
    assert!(!collided.warnings().is_empty());
}

#[test]
fn rename_columns_wrong_length_fails() {
    assert!(sample().rename_columns(vec!["only_one".to_string()]).is_err());
}

#[test]
fn rename_row_names() {
    let table = Table::builder(vec![
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("2"), Value::from("b")],
    ])
    .column_names(["id", "name"])
    .row_names("name")
    .build()
    .unwrap();

    let renamed = table
        .rename_row_names(vec![(Value::from("a"), Value::from("alpha"))])
        .unwrap();
    assert_eq!(
        renamed.row_names(),
        Some(&[Value::from("alpha"), Value::from("b")][..])
    );
    // Rows untouched.
    assert_eq!(renamed.rows(), table.rows());

    // Full replacement may name a previously unnamed table.
    let unnamed = sample();
    let named = unnamed
        .rename_row_names(vec![
            Value::from("x"),
            Value::from("y"),
            Value::from("z"),
        ])
        .unwrap();
    assert_eq!(named.rows().get_by_str("z").unwrap()["id"], Value::Int(3));
}

#[test]
fn rename_row_names_rejects_integers() {
    let table = sample();
    assert!(table
        .rename_row_names(vec![Value::Int(1), Value::from("b"), Value::from("c")])
        .is_err());
}

#[test]
fn operators_never_touch_the_receiver() {
    let table = Table::builder(vec![
        vec![Value::from("2"), Value::from("b")],
        vec![Value::from("1"), Value::from("a")],
        vec![Value::from("1"), Value::from("a")],
    ])
    .column_names(["id", "name"])
    .build()
    .unwrap();

    let before_ids = ids(&table);
    let before_names = table.column_names().to_vec();

    let _ = table.select("name").unwrap();
    let _ = table.exclude("id").unwrap();
    let _ = table.filter(|r| r["id"].as_int() == Some(1));
    let _ = table.order_by("id", true).unwrap();
    let _ = table.limit(1, None, None).unwrap();
    let _ = table.distinct();
    let _ = table.rename_columns([("id", "key")]).unwrap();

    assert_eq!(ids(&table), before_ids);
    assert_eq!(table.column_names(), before_names);
    assert_eq!(table.column_types(), &[DataType::Number, DataType::Text]);
    assert!(table.row_names().is_none());
}

#[test]
fn chained_operators() {
    let table = Table::from_csv_str(
        "city,population\nParis,2100000\nLyon,510000\nParis,2100000\nNice,340000",
    )
    .unwrap();

    let result = table
        .distinct()
        .filter(|r| r["population"].as_int() > Some(400_000))
        .order_by("population", true)
        .unwrap()
        .select("city")
        .unwrap();

    let cities: Vec<String> = result.rows().iter().map(|r| r["city"].as_str()).collect();
    assert_eq!(cities, ["Paris", "Lyon"]);
}
