//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! 工具只有一项任务，不设子命令：不带任何参数运行时扫描当前
//! 目录下的 `src/` 子树，与历史行为保持一致。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Parser;
use std::path::PathBuf;

/// Transcheck - 前端源码批量转换检查工具
#[derive(Parser)]
#[command(name = "transcheck")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch transform checker for front-end source trees", long_about = None)]
pub struct Cli {
    /// Root directory to scan for source files
    #[arg(default_value = "src")]
    pub root: PathBuf,

    /// Comma-separated list of file extensions to check
    #[arg(short, long, default_value = "js,jsx,ts,tsx")]
    pub ext: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
