use datafusion::arrow::datatypes::DataType;
use datafusion::error::Result as DataFusionResult;
use datafusion::logical_expr::{create_udf, ColumnarValue, ScalarUDF, Volatility};
use datafusion::prelude::{col, lit};
use floe_common::{Error, KeyAllocator, OperatorKey};
use floe_engine::operators::{
    AggregateExec, FilterExec, HashJoinExec, JoinType, ParquetScanExec, ProjectionExec,
};
use floe_engine::{PhysicalOperator, PhysicalPlan};
use std::sync::Arc;

// Helper to build a pass-through scalar UDF with a fully-qualified name
fn a_udf(name: &str) -> ScalarUDF {
    create_udf(
        name,
        vec![DataType::Utf8],
        DataType::Utf8,
        Volatility::Immutable,
        Arc::new(|args: &[ColumnarValue]| -> DataFusionResult<ColumnarValue> {
            Ok(args[0].clone())
        }),
    )
}

#[test]
fn test_scan_has_no_udfs() {
    let mut keys = KeyAllocator::new("test").unwrap();
    let scan = ParquetScanExec::new(keys.next_key(), "data/orders.parquet".into(), Some(vec![0, 2]));
    assert_eq!(scan.name(), "ParquetScan");
    assert_eq!(scan.projection(), Some(&[0usize, 2][..]));
    assert!(scan.udfs().is_empty());
}

#[test]
fn test_operators_report_udfs_from_their_expressions() {
    let mut keys = KeyAllocator::new("test").unwrap();
    let upper = a_udf("com.acme.udf.Upper");
    let trim = a_udf("com.acme.udf.Trim");

    let filter = FilterExec::new(keys.next_key(), upper.call(vec![col("name")]).eq(lit("A")));
    assert_eq!(filter.udfs().len(), 1);
    assert!(filter.udfs().contains("com.acme.udf.Upper"));

    let projection = ProjectionExec::new(
        keys.next_key(),
        vec![
            (col("id"), "id".to_string()),
            (trim.call(vec![col("name")]), "name".to_string()),
        ],
    );
    assert!(projection.udfs().contains("com.acme.udf.Trim"));

    let aggregate = AggregateExec::new(keys.next_key(), vec![upper.call(vec![col("k")])], vec![]);
    assert!(aggregate.udfs().contains("com.acme.udf.Upper"));

    let join = HashJoinExec::new(keys.next_key(), vec![(col("a"), col("b"))], JoinType::Inner)
        .with_filter(trim.call(vec![col("c")]).eq(lit("x")));
    assert_eq!(join.join_type(), JoinType::Inner);
    assert!(join.udfs().contains("com.acme.udf.Trim"));
}

#[test]
fn test_plan_keeps_insertion_order_and_unions_udfs() {
    let mut keys = KeyAllocator::new("test").unwrap();
    let upper = a_udf("com.acme.udf.Upper");
    let trim = a_udf("com.acme.udf.Trim");

    let mut plan = PhysicalPlan::new();
    assert!(plan.is_empty());
    plan.add(Box::new(ParquetScanExec::new(keys.next_key(), "t".into(), None)));
    plan.add(Box::new(FilterExec::new(keys.next_key(), upper.call(vec![col("a")]).eq(lit("b")))));
    plan.add(Box::new(ProjectionExec::new(
        keys.next_key(),
        vec![(trim.call(vec![col("a")]), "a".to_string())],
    )));

    let names: Vec<_> = plan.operators().map(|op| op.name().to_string()).collect();
    assert_eq!(names, vec!["ParquetScan", "Filter", "Projection"]);
    assert_eq!(plan.udfs().len(), 2);
}

#[test]
fn test_connect_links_operators() {
    let mut keys = KeyAllocator::new("test").unwrap();
    let scan_key = keys.next_key();
    let filter_key = keys.next_key();

    let mut plan = PhysicalPlan::new();
    plan.add(Box::new(ParquetScanExec::new(scan_key.clone(), "t".into(), None)));
    plan.add(Box::new(FilterExec::new(filter_key.clone(), col("a").gt(lit(1)))));

    plan.connect(&scan_key, &filter_key).unwrap();
    // Repeating an edge is a no-op
    plan.connect(&scan_key, &filter_key).unwrap();

    let successors = plan.successors(&scan_key);
    assert_eq!(successors.len(), 1);
    assert_eq!(successors[0].key(), &filter_key);
    assert_eq!(plan.predecessors(&filter_key)[0].key(), &scan_key);
}

#[test]
fn test_connect_unknown_operator_fails() {
    let mut keys = KeyAllocator::new("test").unwrap();
    let scan_key = keys.next_key();
    let mut plan = PhysicalPlan::new();
    plan.add(Box::new(ParquetScanExec::new(scan_key.clone(), "t".into(), None)));

    let stranger = OperatorKey::new("elsewhere", 7).unwrap();
    let result = plan.connect(&scan_key, &stranger);
    assert!(matches!(result, Err(Error::Plan(_))));
}
