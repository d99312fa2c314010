//! # 命令执行模块
//!
//! 实现检查命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli.rs`, `batch/`, `transform/`, `utils/`

pub mod check;
