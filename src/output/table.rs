//! Markdown Table
//!
//! ルート一覧をパイプ区切りのMarkdownテーブルに変換します。
//! すべての列は左揃え（区切り行は`:---`形式）で出力します。

use unicode_width::UnicodeWidthStr;

use crate::types::RouteEntry;

/// 列見出しの左右に確保する最小余白
const HEADER_PADDING: usize = 2;

/// ルート一覧をMarkdownテーブルとして出力する
///
/// # 引数
///
/// * `headers` - 列見出し（ROUTE, NOTES）
/// * `rows` - データ行
///
/// # 戻り値
///
/// 行を`\n`で連結したテーブル文字列（末尾に改行なし）。
/// データ行が空の場合は見出し行と区切り行のみを返します。
///
/// # 出力例
///
/// ```markdown
/// | ROUTE   | NOTES   |
/// |:--------|:--------|
/// | R1      | n1      |
/// ```
pub fn render_table(headers: [&str; 2], rows: &[RouteEntry]) -> String {
    // セル内容はtrimしてから出力する
    let cells: Vec<[&str; 2]> = rows
        .iter()
        .map(|entry| [entry.route.trim(), entry.notes.trim()])
        .collect();

    // 1. 列幅の計算（表示幅: 全角文字は2）
    let mut widths = headers.map(|header| header.width() + HEADER_PADDING);
    for row in &cells {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.width());
        }
    }

    // 2. 見出し行・区切り行・データ行
    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_row(&headers, &widths));
    lines.push(format_separator(&widths));
    for row in &cells {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn format_row(cells: &[&str; 2], widths: &[usize; 2]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let fill = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(fill))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn format_separator(widths: &[usize; 2]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|&width| format!(":{}", "-".repeat(width + 1)))
        .collect();
    format!("|{}|", segments.join("|"))
}
