use anyhow::Result;

use crate::CliTest;

#[test]
fn test_validate_without_config_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("validate").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid"));
    assert!(stdout.contains("needs attention"));

    Ok(())
}

#[test]
fn test_validate_reports_malformed_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ci.yaml", "i18n_functions:\n  - name: ''\n")?;

    let output = test.command().arg("validate").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid"));

    Ok(())
}

#[test]
fn test_validate_accepts_generated_config() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    let output = test.command().arg("validate").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config file:"));
    assert!(stdout.contains("valid"));
    assert!(!stdout.contains("invalid"));

    // Overall readiness also depends on the Go toolchain.
    if crate::go_available() {
        assert_eq!(output.status.code(), Some(0));
        assert!(stdout.contains("ready"));
    } else {
        assert_eq!(output.status.code(), Some(1));
    }

    Ok(())
}
