//! Formatter Module
//!
//! セル値をテキストに変換する処理を提供するモジュール。
//! 数値・日付・真偽値などの型付きセルは、表計算ソフトで見える値に近いテキストへ変換します。

use calamine::{Data, ExcelDateTime};
use chrono::Duration;

/// セルフォーマッター
///
/// セル値のフォーマット処理のファサードとして機能します。
/// 空セルとエラーセルは空文字列になります。
#[derive(Debug, Default)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,

    /// 数値フォーマッター
    number_formatter: NumberFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// セル値をテキストに変換
    ///
    /// # 引数
    ///
    /// * `cell` - calamineから取得したセル値（範囲外の場合は`None`）
    ///
    /// # 戻り値
    ///
    /// テキスト化したセル値。値がない場合は空文字列
    pub fn format_cell(&self, cell: Option<&Data>) -> String {
        let Some(cell) = cell else {
            return String::new();
        };

        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => self.number_formatter.format(*f),
            Data::Bool(b) => if *b { "True" } else { "False" }.to_string(),
            Data::DateTime(dt) => self
                .date_formatter
                .format(dt)
                .unwrap_or_else(|| self.number_formatter.format(dt.as_f64())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
            // エラー値は欠損値として扱う
            Data::Error(_) => String::new(),
            Data::Empty => String::new(),
        }
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。
/// エポック（1900年／1904年システム）の判定はcalamineに委ねます。
#[derive(Debug, Default)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// 日付・時刻・経過時間を文字列に変換
    ///
    /// * 経過時間: `H:MM:SS`（時間は24を超えても繰り上げない）
    /// * シリアル値が1未満: 時刻のみ `HH:MM:SS`
    /// * それ以外: `YYYY-MM-DD HH:MM:SS`
    ///
    /// 表現できない日付の場合は`None`を返します。
    pub fn format(&self, value: &ExcelDateTime) -> Option<String> {
        if value.is_duration() {
            return value.as_duration().map(Self::format_duration);
        }

        let datetime = value.as_datetime()?;
        if (0.0..1.0).contains(&value.as_f64()) {
            Some(datetime.format("%H:%M:%S").to_string())
        } else {
            Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        }
    }

    fn format_duration(duration: Duration) -> String {
        let total = duration.num_seconds();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.abs();
        format!(
            "{}{}:{:02}:{:02}",
            sign,
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

/// 数値フォーマッター
///
/// 整数値の浮動小数点数は小数部なしで出力します（`12.0` → `12`）。
#[derive(Debug, Default)]
pub(crate) struct NumberFormatter;

impl NumberFormatter {
    /// f64で整数を正確に表現できる上限
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    pub fn format(&self, value: f64) -> String {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= Self::MAX_EXACT_INTEGER {
            (value as i64).to_string()
        } else {
            value.to_string()
        }
    }
}
