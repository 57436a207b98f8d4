use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use gbuilder::{BuildReport, Builder, BuilderConfig, SystemRunner};

/// gbuilder - go project structure build tool
///
/// 在可执行文件所在目录下生成 `<name>/`，包含 go.mod、文档、许可证和源文件桩
#[derive(Parser)]
#[command(name = "gbuilder")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Scaffold a Go project: go.mod, .gitignore, README.md, LICENSE,\n\
                  library/ example/ docs/ images/ and <name>.go / <name>_test.go stubs.\n\
                  Set GBUILDER_GO_BIN to use a specific go executable."
)]
struct Cli {
    /// 项目名称
    #[arg(short, long)]
    name: String,

    /// 项目作者
    #[arg(short, long)]
    author: String,

    /// 生成位置（默认：gbuilder 可执行文件所在目录）
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// 输出每一步的创建结果
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<BuildReport> {
    let config = BuilderConfig::new(&cli.name, &cli.author, cli.dir.as_deref())
        .context("invalid arguments")?;

    if cli.verbose {
        println!(
            "{} {}",
            "🏗️  Building".cyan().bold(),
            config.project_path.display().to_string().yellow()
        );
    }

    let runner = SystemRunner;
    let report = Builder::new(&config, &runner)
        .verbose(cli.verbose)
        .run()?;

    Ok(report)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            println!(
                "{} {} ({}, {} entries)",
                "✅ Project created:".green().bold(),
                report.project_path.display().to_string().cyan(),
                report.go_version,
                report.created.len()
            );
        }
        Err(e) => {
            eprintln!("{} {:#}", "❌".red(), e);
            std::process::exit(1);
        }
    }
}
