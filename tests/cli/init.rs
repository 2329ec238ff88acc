use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config_and_locales() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    assert!(test.root().join("ci.yaml").exists());
    assert!(test.root().join("locales/zh-CN.json").exists());

    // The generated config parses back as YAML with the expected sections.
    let content = test.read_file("ci.yaml")?;
    let parsed: serde_yaml::Value = serde_yaml::from_str(&content)?;
    assert!(parsed.get("i18n_functions").is_some());
    assert!(parsed.get("scan_config").is_some());
    assert!(parsed.get("script_detection").is_some());
    assert!(parsed.get("output_config").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ci.yaml", "i18n_functions: []\n")?;

    let output = test.command().arg("init").output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));

    // The existing file is untouched.
    assert_eq!(test.read_file("ci.yaml")?, "i18n_functions: []\n");

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ci.yaml", "i18n_functions: []\n")?;

    let output = test.command().args(["init", "--force"]).output()?;
    assert!(output.status.success());
    assert_ne!(test.read_file("ci.yaml")?, "i18n_functions: []\n");

    Ok(())
}

#[test]
fn test_init_example_creates_sample_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["init", "--example"]).output()?;
    assert!(output.status.success());

    assert!(test.root().join("hanscan-example/src/main.go").exists());
    assert!(test.root().join("hanscan-example/ci.yaml").exists());
    assert!(
        test.root()
            .join("hanscan-example/locales/zh-CN.json")
            .exists()
    );

    let source = test.read_file("hanscan-example/src/main.go")?;
    assert!(source.contains("i18n.T"));

    Ok(())
}
