//! 命令行入口
//!
//! 地址来自参数；没有参数时逐行读取标准输入。每条地址输出一行 JSON。

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use addrparse_core::{
    to_json, AddressParser, Catalog, ExtraRegionData, ParseOptions, RegionStore, Strategy,
};
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "addrparse", version, about = "解析中文收货地址")]
struct Cli {
    /// 待解析的地址，省略时从标准输入逐行读取
    addresses: Vec<String>,

    /// 省市区识别方式: prefix | tree
    #[arg(long, short)]
    strategy: Option<Strategy>,

    /// 姓名最大长度
    #[arg(long, value_name = "N")]
    name_max_length: Option<usize>,

    /// 额外清洗掉的词，可重复
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// JSON 格式的解析选项
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 替换内置区划数据的层级 JSON
    #[arg(long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// 追加的区划记录（JSON）
    #[arg(long, value_name = "FILE")]
    extra_regions: Option<PathBuf>,

    /// 格式化输出
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = build_options(&cli)?;
    let parser = build_parser(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.addresses.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("读取标准输入失败")?;
            emit(&mut out, &parser, &line, &options, cli.pretty)?;
        }
    } else {
        for address in &cli.addresses {
            emit(&mut out, &parser, address, &options, cli.pretty)?;
        }
    }

    Ok(())
}

fn build_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = match &cli.config {
        Some(path) => ParseOptions::from_path(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => ParseOptions::from_env(),
    };

    if let Some(strategy) = cli.strategy {
        options = options.with_strategy(strategy);
    }
    if let Some(len) = cli.name_max_length {
        options = options.with_name_max_length(len);
    }
    Ok(options.with_stop_words(cli.stop_words.iter().cloned()))
}

fn build_parser(cli: &Cli) -> Result<AddressParser> {
    let store = match &cli.dataset {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("加载区划数据失败: {}", path.display()))?;
            Arc::new(RegionStore::new(catalog))
        }
        None => RegionStore::global(),
    };

    if let Some(path) = &cli.extra_regions {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("读取追加区划失败: {}", path.display()))?;
        let extra: ExtraRegionData = serde_json::from_str(&raw)
            .with_context(|| format!("解析追加区划失败: {}", path.display()))?;
        if !store.extend(&extra) {
            log::warn!("[CLI] {} 未追加任何区划", path.display());
        }
    }

    Ok(AddressParser::new(store))
}

fn emit(
    out: &mut impl Write,
    parser: &AddressParser,
    address: &str,
    options: &ParseOptions,
    pretty: bool,
) -> Result<()> {
    let result = parser.parse(address, options);
    let value = to_json(result.as_ref())?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        value.to_string()
    };
    writeln!(out, "{}", text)?;
    Ok(())
}
