//! xlsxroutes - Convert route-planning workbooks into location-grouped Markdown
//!
//! ロケーション・ルート・メモを記載したワークブックを読み込み、
//! ロケーションごとの見出しとルート表からなるMarkdownドキュメントに変換します。
//!
//! 各シートの先頭3列をLOCATION / ROUTE / NOTESとして扱い、先頭行はヘッダーとして
//! 読み飛ばします。LOCATION列に値がある行で新しいロケーションが始まり、
//! `ETA`で始まるLOCATIONの行は無視されます。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxroutes::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定（Key, Gardening, Holotacticsシートを除外）
//!     let converter = ConverterBuilder::new().build()?;
//!     converter.convert("routes.xlsx", "routes.md")?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use xlsxroutes::{ConverterBuilder, IgnoreSheets};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_ignore_sheets(IgnoreSheets::from_list("Key, Legend").iter())
//!         .build()?;
//!
//!     let markdown = converter.convert_to_string(std::fs::File::open("routes.xlsx")?)?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod grouping;
mod output;
mod parser;
mod types;

// 公開API
pub use api::{IgnoreSheets, DEFAULT_IGNORE_SHEETS, DEFAULT_SKIP_PREFIX};
pub use builder::{Converter, ConverterBuilder};
pub use error::RoutesToMdError;
pub use output::{render_table, MarkdownRenderer, TABLE_HEADERS};
pub use parser::{WorkbookParser, WorkbookReader};
pub use types::{Document, RouteEntry, Row, Section};
