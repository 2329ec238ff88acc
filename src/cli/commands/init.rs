use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::args::InitCommand;
use crate::cli::exit_status::ExitStatus;
use crate::config::default_config_yaml;
use crate::report::SUCCESS_MARK;

const CONFIG_PATH: &str = "ci.yaml";
const EXAMPLE_PATH: &str = "hanscan-example";

/// Sample Go source with the call shapes the extractor understands.
const EXAMPLE_GO_SOURCE: &str = r#"package main

import (
	"fmt"

	"github.com/example/i18n"
)

func main() {
	fmt.Println(t("你好，世界！"))
	fmt.Println(i18n.T("欢迎使用词条扫描器"))
	Translate("这是一个测试消息")
}

func showMessage(name string) {
	msg := t("用户" + name + "登录成功")
	fmt.Println(msg)
}
"#;

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let args = cmd.args;

    if args.example {
        create_example(Path::new(EXAMPLE_PATH), args.force)?;
    } else {
        create_config(Path::new(CONFIG_PATH), args.force)?;
    }

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        "Initialization complete".green()
    );
    println!("{}", "Run \"hanscan\" to start scanning".cyan());
    Ok(ExitStatus::Success)
}

fn create_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    fs::write(config_path, default_config_yaml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        SUCCESS_MARK.green(),
        config_path.display()
    );

    let locales = Path::new("locales");
    fs::create_dir_all(locales)
        .with_context(|| format!("Failed to create {}", locales.display()))?;
    let translations = locales.join("zh-CN.json");
    if !translations.exists() {
        fs::write(&translations, "{}\n")
            .with_context(|| format!("Failed to write {}", translations.display()))?;
        println!(
            "{} Created {}",
            SUCCESS_MARK.green(),
            translations.display()
        );
    }

    Ok(())
}

/// Create a self-contained sample project: a Go file with translation
/// calls, a default config and a starter translation map.
fn create_example(root: &Path, force: bool) -> Result<()> {
    if root.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            root.display()
        );
    }

    let src = root.join("src");
    fs::create_dir_all(&src).with_context(|| format!("Failed to create {}", src.display()))?;
    fs::write(src.join("main.go"), EXAMPLE_GO_SOURCE)?;

    fs::write(root.join("ci.yaml"), default_config_yaml()?)?;

    let locales = root.join("locales");
    fs::create_dir_all(&locales)?;
    let translations = serde_json::json!({
        "你好，世界！": "Hello, World!",
        "欢迎使用词条扫描器": "Welcome to the term scanner"
    });
    fs::write(
        locales.join("zh-CN.json"),
        format!("{}\n", serde_json::to_string_pretty(&translations)?),
    )?;

    println!(
        "{} Sample project created at {}",
        SUCCESS_MARK.green(),
        root.display()
    );
    Ok(())
}
