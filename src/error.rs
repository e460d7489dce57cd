//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;

use thiserror::Error;

/// xlsxroutesクレート全体で使用するエラー型
///
/// ワークブックの読み込み、シートの解析、Markdownの書き込み中に発生する
/// すべてのエラーを統一的に扱います。いずれのエラーも回復不能であり、
/// 変換処理はその時点で中断されます（部分的な出力は行いません）。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxroutes::{ConverterBuilder, RoutesToMdError};
///
/// let converter = ConverterBuilder::new().build().unwrap();
/// match converter.convert("missing.xlsx", "routes.md") {
///     Err(RoutesToMdError::InputNotFound { path }) => {
///         eprintln!("not found: {}", path.display());
///     }
///     Err(e) => eprintln!("{}", e),
///     Ok(()) => {}
/// }
/// ```
#[derive(Error, Debug)]
pub enum RoutesToMdError {
    /// 入力ファイルが存在しない
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// 指定された入力パス
        path: PathBuf,
    },

    /// 入力ファイルは存在するが読み込めない（権限不足、ディレクトリ指定など）
    #[error("Failed to read input file '{}': {source}", path.display())]
    InputUnreadable {
        /// 指定された入力パス
        path: PathBuf,
        /// 元のI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// ワークブックの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// 出力ファイルを書き込めない（ディレクトリが存在しない、権限不足など）
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputUnwritable {
        /// 指定された出力パス
        path: PathBuf,
        /// 元のI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// シートの列数がLOCATION/ROUTE/NOTESの3列に満たない
    #[error("Sheet '{sheet}' has {columns} column(s), at least 3 are required")]
    MalformedSheet {
        /// シート名
        sheet: String,
        /// 実際の列数
        columns: usize,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に無効な設定が検出された場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// その他のI/O操作中に発生したエラー
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
