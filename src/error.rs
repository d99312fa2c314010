//! # 统一错误处理模块
//!
//! 定义 Transcheck 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的转换诊断不属于这里：它是数据（`batch::ProcessResult`），
//! 被逐条记录并完整汇报，不会中断扫描。此处只定义致命错误与
//! 最终的失败汇总。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Transcheck 统一错误类型
#[derive(Error, Debug)]
pub enum TranscheckError {
    // ─────────────────────────────────────────────────────────────
    // 目录扫描错误（致命，中止运行）
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to scan directory: {path}")]
    ScanError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 检查结果汇总
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} files failed to transform")]
    ChecksFailed { failed: usize, total: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TranscheckError>;
