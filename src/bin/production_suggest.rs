//! 生產建議命令列工具
//!
//! 用法: production-suggest <seed.json> [--text] [--config <config.json>]

use anyhow::{bail, Context};
use production_planner::{suggest_from_seed, CatalogConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "用法: production-suggest <seed.json> [--text] [--config <config.json>]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut seed_path = None;
    let mut config_path = None;
    let mut text = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => text = true,
            "--config" => {
                config_path = Some(args.next().context("--config 需要檔案路徑")?);
            }
            _ if seed_path.is_none() => seed_path = Some(arg),
            _ => bail!("無法識別的參數: {arg}"),
        }
    }

    let seed_path = seed_path.context(USAGE)?;

    let config = match config_path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("無法讀取配置 {path}"))?;
            CatalogConfig::from_json(&json)?
        }
        None => CatalogConfig::default(),
    };

    tracing::info!("讀取初始資料 {}", seed_path);
    let json = std::fs::read_to_string(&seed_path)
        .with_context(|| format!("無法讀取初始資料 {seed_path}"))?;
    let report = suggest_from_seed(&json, config)
        .with_context(|| format!("計算失敗: {seed_path}"))?;

    if text {
        println!("{report}");
    } else {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
