//! End-to-end scan tests driving the real Go toolchain.
//!
//! Skipped when `go` is not installed.

use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, go_available};

const MAIN_GO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println(t("你好，世界！"))
	fmt.Println(i18n.T("欢迎使用词条扫描器"))
	Translate("这是一个测试消息")
	fmt.Println("不是翻译调用")
	t("plain english")
}

func showMessage(name string) {
	msg := t("用户" + name + "登录成功")
	fmt.Println(msg)
}
"#;

const OTHER_GO: &str = r#"package main

func other() {
	t("你好，世界！")
}
"#;

const CONFIG: &str = r#"scan_config:
  source_dirs:
    - ./src
translated_files:
  zh_cn: ./locales/zh-CN.json
output_config:
  output_file: ./extracted_terms.json
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("src/main.go", MAIN_GO)?;
    test.write_file("src/other.go", OTHER_GO)?;
    test.write_file("ci.yaml", CONFIG)?;
    Ok(test)
}

#[test]
fn test_scan_extracts_and_writes_output() -> Result<()> {
    if !go_available() {
        return Ok(());
    }

    let test = project()?;
    let output = test.command().arg("scan").output()?;
    assert!(
        output.status.success(),
        "scan failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let document: Value = serde_json::from_str(&test.read_file("extracted_terms.json")?)?;
    let terms = document["terms"].as_array().unwrap();
    let texts: Vec<&str> = terms.iter().map(|t| t["text"].as_str().unwrap()).collect();

    assert!(texts.contains(&"欢迎使用词条扫描器"));
    assert!(texts.contains(&"这是一个测试消息"));
    // Partially-dynamic concatenation keeps its literal portions.
    assert!(texts.contains(&"用户登录成功"));
    // Non-translation calls and non-CJK text are not extracted.
    assert!(!texts.contains(&"不是翻译调用"));
    assert!(!texts.contains(&"plain english"));

    // "你好，世界！" appears in both files and is merged into one term
    // with two locations.
    let hello: Vec<&Value> = terms
        .iter()
        .filter(|t| t["text"] == "你好，世界！")
        .collect();
    assert_eq!(hello.len(), 1);
    assert_eq!(hello[0]["locations"].as_array().unwrap().len(), 2);

    assert_eq!(document["metadata"]["summary"]["totalFiles"], 2);
    assert_eq!(document["metadata"]["summary"]["successFiles"], 2);

    Ok(())
}

#[test]
fn test_scan_filters_translated_terms() -> Result<()> {
    if !go_available() {
        return Ok(());
    }

    let test = project()?;
    test.write_file(
        "locales/zh-CN.json",
        r#"{ "你好，世界！": "Hello, World!", "这是一个测试消息": "" }"#,
    )?;

    let output = test.command().arg("scan").output()?;
    assert!(output.status.success());

    let document: Value = serde_json::from_str(&test.read_file("extracted_terms.json")?)?;
    let texts: Vec<&str> = document["terms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();

    // Translated terms are dropped; blank translations are kept.
    assert!(!texts.contains(&"你好，世界！"));
    assert!(texts.contains(&"这是一个测试消息"));

    Ok(())
}

#[test]
fn test_scan_include_translated_keeps_everything() -> Result<()> {
    if !go_available() {
        return Ok(());
    }

    let test = project()?;
    test.write_file(
        "locales/zh-CN.json",
        r#"{ "你好，世界！": "Hello, World!" }"#,
    )?;

    let output = test
        .command()
        .args(["scan", "--include-translated"])
        .output()?;
    assert!(output.status.success());

    let document: Value = serde_json::from_str(&test.read_file("extracted_terms.json")?)?;
    let texts: Vec<&str> = document["terms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert!(texts.contains(&"你好，世界！"));

    Ok(())
}

#[test]
fn test_scan_isolates_broken_files() -> Result<()> {
    if !go_available() {
        return Ok(());
    }

    let test = project()?;
    test.write_file("src/broken.go", "package main\nfunc {")?;

    let output = test.command().arg("scan").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("broken.go"));

    let document: Value = serde_json::from_str(&test.read_file("extracted_terms.json")?)?;
    assert_eq!(document["metadata"]["summary"]["totalFiles"], 3);
    assert_eq!(document["metadata"]["summary"]["successFiles"], 2);
    assert_eq!(document["metadata"]["summary"]["errorFiles"], 1);
    // Terms from the healthy files are still extracted.
    assert!(!document["terms"].as_array().unwrap().is_empty());

    Ok(())
}

#[test]
fn test_scan_no_output_writes_nothing() -> Result<()> {
    if !go_available() {
        return Ok(());
    }

    let test = project()?;
    let output = test.command().args(["scan", "--no-output"]).output()?;
    assert!(output.status.success());
    assert!(!test.root().join("extracted_terms.json").exists());

    Ok(())
}

#[test]
fn test_scan_csv_format_override() -> Result<()> {
    if !go_available() {
        return Ok(());
    }

    let test = project()?;
    let output = test
        .command()
        .args(["scan", "--format", "csv", "--output", "terms.csv"])
        .output()?;
    assert!(
        output.status.success(),
        "scan failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let csv = test.read_file("terms.csv")?;
    assert!(csv.starts_with("text,file,argumentIndex,discoveredAt"));
    assert!(csv.contains("欢迎使用词条扫描器"));

    Ok(())
}

#[test]
fn test_scan_without_config_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("scan").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));

    Ok(())
}
