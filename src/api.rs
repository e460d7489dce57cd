//! Public API Types
//!
//! 公開APIで使用する設定値と型を定義するモジュール。

use std::collections::BTreeSet;

/// デフォルトで変換対象から除外するシート名
///
/// シート名の比較は大文字・小文字を区別する完全一致です。
pub const DEFAULT_IGNORE_SHEETS: [&str; 3] = ["Key", "Gardening", "Holotactics"];

/// ETA疑似ロケーションを示すLOCATION列の接頭辞（大文字・小文字を区別しない）
pub const DEFAULT_SKIP_PREFIX: &str = "ETA";

/// 変換対象から除外するシート名の集合
///
/// # 使用例
///
/// ```rust
/// use xlsxroutes::IgnoreSheets;
///
/// let ignore = IgnoreSheets::from_list("Key, Notes,, ");
/// assert!(ignore.contains("Key"));
/// assert!(ignore.contains("Notes"));
/// assert_eq!(ignore.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSheets {
    names: BTreeSet<String>,
}

impl IgnoreSheets {
    /// 空の集合（すべてのシートを変換する）
    pub fn none() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// カンマ区切りのシート名リストから集合を生成する
    ///
    /// 各名前は前後の空白が除去され、空の名前は破棄されます。
    pub fn from_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// 指定されたシート名が除外対象かどうか
    pub fn contains(&self, sheet_name: &str) -> bool {
        self.names.contains(sheet_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoreSheets {
    /// `DEFAULT_IGNORE_SHEETS`を含む集合
    fn default() -> Self {
        DEFAULT_IGNORE_SHEETS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSheets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
