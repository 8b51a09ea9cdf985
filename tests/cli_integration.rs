use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn test_cli_help_succeeds() {
    let output = cargo_bin_cmd!("browserhistory")
        .arg("--help")
        .output()
        .expect("run browserhistory");
    assert!(output.status.success(), "help should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help should include usage text");
}

#[test]
fn test_cli_rejects_unknown_browser() {
    let output = cargo_bin_cmd!("browserhistory")
        .args(["--browser", "netscape"])
        .output()
        .expect("run browserhistory");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported browser: netscape"));
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
#[test]
fn test_cli_fails_on_unsupported_platform() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cargo_bin_cmd!("browserhistory")
        .current_dir(dir.path())
        .output()
        .expect("run browserhistory");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported platform"));
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
#[test]
fn test_cli_exports_history_from_home_override() {
    use browserhistory::browser::chrome::history_path;
    use browserhistory::config::Browser;
    use browserhistory::Platform;
    use rusqlite::Connection;

    let home = tempfile::tempdir().expect("home");
    let out = tempfile::tempdir().expect("out");
    let platform = Platform::current().expect("platform");
    let db_path = history_path(Browser::Chrome, platform, home.path());
    std::fs::create_dir_all(db_path.parent().expect("parent")).expect("profile dir");
    let conn = Connection::open(&db_path).expect("open db");
    conn.execute_batch(
        "CREATE TABLE urls (id INTEGER PRIMARY KEY, url LONGVARCHAR, title LONGVARCHAR,
             last_visit_time INTEGER NOT NULL);
         INSERT INTO urls (url, title, last_visit_time)
             VALUES ('https://example.com/', 'Example', 13350000000000000);",
    )
    .expect("seed db");
    drop(conn);

    let output = cargo_bin_cmd!("browserhistory")
        .arg("--home")
        .arg(home.path())
        .arg("--output-dir")
        .arg(out.path())
        .output()
        .expect("run browserhistory");
    assert!(output.status.success());

    let csv = std::fs::read_to_string(out.path().join("chrome_history.csv")).expect("csv");
    assert!(csv.starts_with("\"https://example.com/\",\"Example\",\""));
}
