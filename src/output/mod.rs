//! Output Module
//!
//! セクションの一覧をMarkdownドキュメントとして出力するモジュール。

mod markdown;
mod table;

pub use markdown::MarkdownRenderer;
pub use table::render_table;

/// ルート表の列見出し
pub const TABLE_HEADERS: [&str; 2] = ["ROUTE", "NOTES"];
