//! Grouping Module
//!
//! シートの行を上から順に走査し、ロケーション単位のセクションに分割するモジュール。
//!
//! LOCATION列に値がある行が新しいロケーションの開始を示し、以降のROUTE列が空でない行が
//! そのロケーションのルートとして集められます。
//!
//! セクションの確定条件は走査中とシート末尾で異なります。
//!
//! * 走査中: 次のロケーションが現れた時点で、ルートが0件でもセクションを確定する
//! * シート末尾: ルートが1件以上ある場合のみセクションを確定する

use crate::types::{RouteEntry, Row, Section};

/// 1シート分の行走査の状態
#[derive(Debug)]
pub(crate) struct SectionScanner {
    /// ETA疑似ロケーションの接頭辞（大文字化済み）
    skip_prefix: String,

    /// 現在開いているロケーション
    current_location: Option<String>,

    /// 現在のロケーションに属するルート
    location_rows: Vec<RouteEntry>,

    /// 確定したセクション
    sections: Vec<Section>,
}

impl SectionScanner {
    /// 新しいスキャナーを生成
    ///
    /// # 引数
    ///
    /// * `skip_prefix` - この接頭辞で始まるLOCATION（大文字・小文字を区別しない）の行は無視される
    pub fn new(skip_prefix: &str) -> Self {
        Self {
            skip_prefix: skip_prefix.to_uppercase(),
            current_location: None,
            location_rows: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// 行を1つ処理する
    pub fn push(&mut self, row: Row) {
        let location = row.location.trim();

        if !location.is_empty() {
            if location.to_uppercase().starts_with(&self.skip_prefix) {
                log::trace!("Skipping pseudo-location row '{}'", location);
                return;
            }

            // 空のロケーションもここでは確定する
            if let Some(previous) = self.current_location.take() {
                let entries = std::mem::take(&mut self.location_rows);
                self.sections.push(Section::new(previous, entries));
            }
            self.current_location = Some(location.to_string());
        }

        // ROUTEはtrimせずに空判定する
        if self.current_location.is_some() && !row.route.is_empty() {
            self.location_rows
                .push(RouteEntry::new(row.route, row.notes));
        }
    }

    /// シート末尾の処理を行い、確定したセクションを返す
    ///
    /// 最後のロケーションはルートが1件以上ある場合のみ出力されます。
    pub fn finish(mut self) -> Vec<Section> {
        if let Some(location) = self.current_location.take() {
            if self.location_rows.is_empty() {
                log::debug!("Dropping trailing location '{}' without routes", location);
            } else {
                self.sections
                    .push(Section::new(location, self.location_rows));
            }
        }
        self.sections
    }

    /// 行の列をまとめて走査する
    pub fn scan<I>(skip_prefix: &str, rows: I) -> Vec<Section>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut scanner = Self::new(skip_prefix);
        for row in rows {
            scanner.push(row);
        }
        scanner.finish()
    }
}
