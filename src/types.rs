//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

/// シートの1行（先頭3列のみ）
///
/// 空セル・欠損セルは空文字列に正規化されています。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// LOCATION列（A列）
    pub location: String,

    /// ROUTE列（B列）
    pub route: String,

    /// NOTES列（C列）
    pub notes: String,
}

impl Row {
    /// 新しい行を生成
    pub fn new(
        location: impl Into<String>,
        route: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            route: route.into(),
            notes: notes.into(),
        }
    }
}

/// ロケーションに属するルート1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: String,
    pub notes: String,
}

impl RouteEntry {
    pub fn new(route: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            notes: notes.into(),
        }
    }
}

/// ロケーション単位のセクション
///
/// `location`は空でなく、ETA疑似ロケーションでもありません。
/// `entries`はシート上の行順を保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// 見出しとして出力されるロケーション名（trim済み）
    pub location: String,

    /// ルートの一覧（空の場合もある）
    pub entries: Vec<RouteEntry>,
}

impl Section {
    pub fn new(location: impl Into<String>, entries: Vec<RouteEntry>) -> Self {
        Self {
            location: location.into(),
            entries,
        }
    }
}

/// 出力ドキュメント
///
/// 除外されなかったすべてのシートのセクションを、ワークブック上のシート順に連結したもの。
/// 同名のロケーションがあっても統合しません。
pub type Document = Vec<Section>;
