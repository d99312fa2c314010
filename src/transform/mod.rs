//! # 编译器前端封装
//!
//! 将 oxc 编译器前端封装为单一的转换检查入口：给定源码内容与
//! 文件路径提示，返回成功或携带诊断信息的失败。解析规则、方言
//! 支持均由 oxc 提供，本模块不实现任何语法逻辑。
//!
//! ## 功能
//! - 根据文件扩展名推断源码方言 (js/jsx/ts/tsx)
//! - 调用 oxc 解析器做完整语法分析
//! - 收集全部诊断信息（不截断、不去重）
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 调用
//! - 使用 `oxc_allocator`, `oxc_parser`, `oxc_span`

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// 转换预设
///
/// 决定每个文件按哪种源码方言解析。预设作为显式参数随每次调用
/// 传入，不依赖任何进程级全局状态。
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// 扩展名无法判定方言时的回退方言
    fallback: SourceType,
}

impl Default for Preset {
    fn default() -> Self {
        // 与前端生态的默认行为一致：未知扩展按启用 JSX 的 JavaScript 处理
        Self {
            fallback: SourceType::jsx(),
        }
    }
}

impl Preset {
    /// 根据文件路径推断源码方言
    ///
    /// 已知扩展 (.js/.jsx/.ts/.tsx 等) 由 oxc 判定，普通 .js 同样
    /// 启用 JSX；无法判定时使用回退方言。
    pub fn source_type(&self, path: &Path) -> SourceType {
        SourceType::from_path(path).unwrap_or(self.fallback)
    }
}

/// 转换失败诊断
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// 人类可读的诊断信息
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.message.fmt(f)
    }
}

/// 尝试按预设方言转换一段源码
///
/// 成功返回 `Ok(())`；失败返回携带全部解析诊断的 [`Diagnostic`]，
/// 多条诊断按出现顺序换行拼接。
pub fn transform_source(
    source: &str,
    path: &Path,
    preset: &Preset,
) -> std::result::Result<(), Diagnostic> {
    let source_type = preset.source_type(path);
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();

    if ret.errors.is_empty() && !ret.panicked {
        return Ok(());
    }

    let message = if ret.errors.is_empty() {
        // 解析器中途放弃但没有产生诊断
        "Parser bailed out without diagnostics".to_string()
    } else {
        ret.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    Err(Diagnostic { message })
}
