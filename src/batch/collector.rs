//! # 文件收集器
//!
//! 根据根目录和扩展名集合收集待检查文件列表。
//!
//! ## 功能
//! - 递归目录搜索
//! - 按扩展名集合过滤
//! - 路径按字典序排序，保证输出可复现
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, TranscheckError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 扫描根目录
    root: PathBuf,
    /// 匹配模式列表（由扩展名集合生成）
    patterns: Vec<glob::Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: Vec::new(),
        }
    }

    /// 设置要收集的扩展名集合（逗号分隔，如 "js,jsx,ts,tsx"）
    pub fn with_extensions(mut self, extensions: &str) -> Result<Self> {
        self.patterns = extensions
            .split(',')
            .map(|s| s.trim().trim_start_matches('.'))
            .filter(|s| !s.is_empty())
            .map(|ext| {
                glob::Pattern::new(&format!("*.{}", ext)).map_err(|e| {
                    TranscheckError::InvalidArgument(format!("Invalid extension '{}': {}", ext, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if self.patterns.is_empty() {
            return Err(TranscheckError::InvalidArgument(
                "Extension list is empty".to_string(),
            ));
        }

        Ok(self)
    }

    /// 递归收集所有匹配的文件，按字典序排序
    ///
    /// 根目录不存在或遍历出错视为致命错误，立即返回。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(TranscheckError::DirectoryNotFound {
                path: self.root.display().to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| TranscheckError::ScanError {
                path: self.root.display().to_string(),
                source: e,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if self.matches_patterns(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collect_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.js"));
        touch(&dir.path().join("b.ts"));
        touch(&dir.path().join("style.css"));
        touch(&dir.path().join("data.json"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_extensions("js,jsx,ts,tsx")
            .unwrap()
            .collect()
            .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.js", "b.ts"]);
    }

    #[test]
    fn test_collect_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("z.js"));
        touch(&dir.path().join("components/Button.tsx"));
        touch(&dir.path().join("components/nested/index.jsx"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_extensions("js,jsx,ts,tsx")
            .unwrap()
            .collect()
            .unwrap();

        assert_eq!(files.len(), 3);
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_collect_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileCollector::new(dir.path().to_path_buf())
            .with_extensions("js,jsx,ts,tsx")
            .unwrap()
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_missing_root_is_fatal() {
        let result = FileCollector::new(PathBuf::from("/nonexistent/transcheck-root"))
            .with_extensions("js")
            .unwrap()
            .collect();
        assert!(matches!(
            result,
            Err(TranscheckError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_extension_list_accepts_dots_and_spaces() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.ts"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_extensions(" .ts , js ")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_empty_extension_list_rejected() {
        let result = FileCollector::new(PathBuf::from(".")).with_extensions(" , ");
        assert!(matches!(
            result,
            Err(TranscheckError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_extension_match_is_exact_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("module.mjs"));
        touch(&dir.path().join("plain.js"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_extensions("js")
            .unwrap()
            .collect()
            .unwrap();

        // *.js 不应匹配 .mjs
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("plain.js"));
    }
}
