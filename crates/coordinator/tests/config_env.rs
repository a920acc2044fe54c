use floe_coordinator::Settings;
use std::io::Write;

// Kept in its own test binary: it changes the process environment.
#[test]
fn test_env_overrides_use_double_underscore_after_prefix() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"default_partitioner = \"HashPartitioner\"\ncombine_small_splits = true\n")
        .unwrap();

    std::env::set_var("FLOE_COORDINATOR__DEFAULT_PARTITIONER", "RangePartitioner");
    std::env::set_var("FLOE_COORDINATOR_COMBINE_SMALL_SPLITS", "false");
    let settings = Settings::from_file(file.path().to_str().unwrap()).unwrap();
    std::env::remove_var("FLOE_COORDINATOR__DEFAULT_PARTITIONER");
    std::env::remove_var("FLOE_COORDINATOR_COMBINE_SMALL_SPLITS");

    assert_eq!(settings.default_partitioner, "RangePartitioner");
    // A single underscore after the prefix is not picked up.
    assert!(settings.combine_small_splits);
}
