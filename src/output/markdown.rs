//! Markdown Document Renderer
//!
//! セクションごとに`## <ロケーション>`見出しとルート表を出力し、
//! 見出しと表の間の空行を取り除いたドキュメントを生成します。

use std::io::Write;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::RoutesToMdError;
use crate::output::{render_table, TABLE_HEADERS};
use crate::types::Section;

/// 見出し行の直後の空行にマッチするパターン
fn header_gap_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\n## .+?)\n\n").expect("Hardcode regex pattern"))
}

/// Markdownドキュメントのレンダラー
///
/// # 出力形式
///
/// ドキュメントは空行で始まり、各セクションは見出し行の直後に表が続きます。
/// セクション間は空行1行で区切られ、末尾に改行は付きません。
///
/// ```markdown
///
///
/// ## Town A
/// | ROUTE   | NOTES   |
/// |:--------|:--------|
/// | R1      | n1      |
///
/// ## Town B
/// | ROUTE   | NOTES   |
/// |:--------|:--------|
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// セクションの一覧をMarkdown文字列に変換
    ///
    /// ロケーション名はエスケープせずにそのまま見出しに使用します。
    pub fn render(&self, sections: &[Section]) -> String {
        let mut blocks = Vec::with_capacity(sections.len() * 2 + 1);
        blocks.push("\n".to_string());

        for section in sections {
            blocks.push(format!("## {}", section.location));
            blocks.push(render_table(TABLE_HEADERS, &section.entries));
        }

        Self::collapse_header_gaps(&blocks.join("\n\n"))
    }

    /// セクションの一覧をMarkdownとしてライターに書き込む
    pub fn render_to<W: Write>(
        &self,
        sections: &[Section],
        writer: &mut W,
    ) -> Result<(), RoutesToMdError> {
        writer.write_all(self.render(sections).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// 見出し行と表の間の空行を取り除く
    ///
    /// 表と次の見出しの間の空行はそのまま残します。
    fn collapse_header_gaps(markdown: &str) -> String {
        header_gap_pattern()
            .replace_all(markdown, "${1}\n")
            .into_owned()
    }
}
