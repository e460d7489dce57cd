//! Parser Module
//!
//! ワークブックの読み込みを抽象化するモジュール。
//! 変換処理は`WorkbookReader`トレイトのみに依存し、calamineによる実装は`WorkbookParser`が担当します。

mod workbook;

pub use workbook::WorkbookParser;

use crate::error::RoutesToMdError;
use crate::types::Row;

/// ワークブックの読み取りインターフェース
///
/// 変換処理が必要とするのは、シート名の一覧とシートごとの行データのみです。
pub trait WorkbookReader {
    /// ワークブック上の順序でシート名を返す
    fn sheet_names(&self) -> Vec<String>;

    /// シートのデータ行を上から順に返す
    ///
    /// 先頭行（ヘッダー行）は含まれません。各行はLOCATION/ROUTE/NOTESの3列に
    /// 位置で割り当てられ、空セルは空文字列になります。
    ///
    /// # エラー
    ///
    /// * `RoutesToMdError::MalformedSheet` - シートの列数が3に満たない場合
    /// * `RoutesToMdError::Parse` - シートの解析に失敗した場合
    fn read_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>, RoutesToMdError>;
}
