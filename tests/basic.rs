use browserhistory::output::csv_file_name;
use browserhistory::Platform;

#[test]
fn test_version() {
    assert!(!browserhistory::VERSION.is_empty());
}

#[test]
fn test_platform_mapping_rejects_linux() {
    assert!(Platform::from_os_name("linux").is_err());
    assert_eq!(
        Platform::from_os_name("darwin").expect("darwin"),
        Platform::MacOs
    );
}

#[test]
fn test_csv_file_name() {
    assert_eq!(csv_file_name("edge"), "edge_history.csv");
}
