//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! 失败报告与成功提示的文本内容是对外契约（CI 脚本会匹配），
//! 只加颜色，不改措辞。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印单个文件的两行转换失败报告
pub fn print_failure_block(path: &str, message: &str) {
    eprintln!("{}", format!("Error in {}:", path).red().bold());
    eprintln!("{}", message);
}

/// 打印全部通过提示
pub fn print_all_transformed() {
    println!("{}", "All files transformed successfully".green().bold());
}
