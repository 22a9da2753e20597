//! Integration test harness for the batrep binary.

mod integration {
    pub mod helpers;

    mod analyze_test;
    mod export_test;
    mod sessions_test;
    mod validate_test;
}
