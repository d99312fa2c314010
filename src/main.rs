//! # Transcheck - 前端源码批量转换检查工具
//!
//! 递归扫描源码目录中的 js/jsx/ts/tsx 文件，逐个交给编译器前端
//! 按预设方言解析转换，汇报无法通过的文件。用于在 CI 或依赖升级
//! 前快速定位语法不兼容的源码。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── check.rs
//!   ├── batch/      (文件收集与并行执行)
//!   ├── transform/  (编译器前端封装)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod transform;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::check::execute(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
