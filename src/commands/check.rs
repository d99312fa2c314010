//! # check 命令实现
//!
//! 扫描源码目录并逐个检查文件能否通过编译器前端转换。
//!
//! ## 功能
//! - 递归收集匹配扩展名的源码文件
//! - 并行调用编译器前端解析
//! - 逐个打印失败文件的两行诊断报告
//! - 全部通过时打印成功提示
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `batch/`, `transform/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::Cli;
use crate::error::{Result, TranscheckError};
use crate::transform::{self, Preset};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行 check 命令
pub fn execute(args: Cli) -> Result<()> {
    output::print_header("Transform check");

    let files = FileCollector::new(args.root.clone())
        .with_extensions(&args.ext)?
        .collect()?;

    output::print_info(&format!(
        "Found {} source files under {}",
        files.len(),
        args.root.display()
    ));

    let preset = Preset::default();
    let runner = BatchRunner::new(args.jobs);
    let batch = runner.run(files, |file| check_file(file, &preset));

    // 失败报告在全部处理完成后统一打印，按文件分组、按路径字典序排列
    for (path, message) in &batch.failures {
        output::print_failure_block(path, message);
    }

    if batch.all_succeeded() {
        output::print_all_transformed();
        Ok(())
    } else {
        Err(TranscheckError::ChecksFailed {
            failed: batch.failed,
            total: batch.total(),
        })
    }
}

/// 检查单个文件
///
/// 读取失败与转换失败同样作为该文件的失败记录，不中断整体扫描。
fn check_file(path: &Path, preset: &Preset) -> ProcessResult {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            return ProcessResult::Failed(
                path.display().to_string(),
                format!("Failed to read file: {}", e),
            );
        }
    };

    match transform::transform_source(&source, path, preset) {
        Ok(()) => ProcessResult::Success(path.display().to_string()),
        Err(diag) => ProcessResult::Failed(path.display().to_string(), diag.message),
    }
}
