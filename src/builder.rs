//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use std::io::{Read, Write};
use std::path::Path;

use crate::api::{IgnoreSheets, DEFAULT_SKIP_PREFIX};
use crate::error::RoutesToMdError;
use crate::grouping::SectionScanner;
use crate::output::MarkdownRenderer;
use crate::parser::{WorkbookParser, WorkbookReader};
use crate::types::Document;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConversionConfig {
    /// 変換対象から除外するシート
    pub ignore_sheets: IgnoreSheets,

    /// ETA疑似ロケーションの接頭辞
    pub skip_prefix: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            ignore_sheets: IgnoreSheets::default(),
            skip_prefix: DEFAULT_SKIP_PREFIX.to_string(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxroutes::ConverterBuilder;
///
/// # fn main() -> Result<(), xlsxroutes::RoutesToMdError> {
/// let converter = ConverterBuilder::new()
///     .with_ignore_sheets(["Key", "Legend"])
///     .build()?;
/// converter.convert("routes.xlsx", "routes.md")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 除外シート: `Key`, `Gardening`, `Holotactics`
    /// - ETA接頭辞: `ETA`
    pub fn new() -> Self {
        Self::default()
    }

    /// 変換対象から除外するシートを指定する（デフォルトの集合を置き換える）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxroutes::{ConverterBuilder, IgnoreSheets};
    ///
    /// // 名前を列挙
    /// let builder = ConverterBuilder::new().with_ignore_sheets(["Key"]);
    ///
    /// // カンマ区切りのリストから
    /// let builder = ConverterBuilder::new()
    ///     .with_ignore_sheets(IgnoreSheets::from_list("Key, Gardening").iter());
    /// ```
    pub fn with_ignore_sheets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignore_sheets = names.into_iter().collect();
        self
    }

    /// ETA疑似ロケーションとして無視するLOCATIONの接頭辞を指定する
    ///
    /// 比較は前後の空白を除去したLOCATIONに対して、大文字・小文字を区別せずに行います。
    pub fn with_skip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.skip_prefix = prefix.into();
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `RoutesToMdError::Config(String)`: 接頭辞が空、または空白のみの場合
    ///   （すべてのロケーションが無視されてしまうため）
    pub fn build(self) -> Result<Converter, RoutesToMdError> {
        if self.config.skip_prefix.trim().is_empty() {
            return Err(RoutesToMdError::Config(
                "Skip prefix must not be empty".to_string(),
            ));
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// ワークブックを読み込み、ロケーション単位のMarkdownドキュメントに変換します。
///
/// # 処理フロー
///
/// 1. ワークブックを開く
/// 2. 除外対象でないシートをワークブック上の順序で走査し、セクションを収集
/// 3. Markdownを生成
/// 4. 出力先に一度だけ書き込む
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// Markdownレンダラー
    renderer: MarkdownRenderer,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            renderer: MarkdownRenderer,
        }
    }

    /// ワークブックファイルをMarkdownファイルに変換
    ///
    /// 出力ファイルが既に存在する場合は上書きします。エラーが発生した場合、
    /// 出力ファイルは書き込まれません。
    ///
    /// # エラー
    ///
    /// * `RoutesToMdError::InputNotFound` / `InputUnreadable` - 入力ファイルを読み込めない場合
    /// * `RoutesToMdError::Parse` - ワークブックとして解析できない場合
    /// * `RoutesToMdError::MalformedSheet` - 列数が3に満たないシートがある場合
    /// * `RoutesToMdError::OutputUnwritable` - 出力ファイルを書き込めない場合
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxroutes::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsxroutes::RoutesToMdError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// converter.convert("routes.xlsx", "routes.md")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<P, Q>(&self, input_path: P, output_path: Q) -> Result<(), RoutesToMdError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let mut workbook = WorkbookParser::open_path(input_path)?;
        let document = self.collect_sections(&mut workbook)?;
        let markdown = self.render(&document);

        std::fs::write(output_path, markdown).map_err(|source| {
            RoutesToMdError::OutputUnwritable {
                path: output_path.to_path_buf(),
                source,
            }
        })?;

        log::info!(
            "Converted '{}' -> '{}' ({} section(s))",
            input_path.display(),
            output_path.display(),
            document.len()
        );

        Ok(())
    }

    /// リーダーから読み込んだワークブックをMarkdownとしてライターに書き込む
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use xlsxroutes::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsxroutes::RoutesToMdError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("routes.xlsx")?;
    /// converter.convert_reader(input, std::io::stdout())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_reader<R: Read, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<(), RoutesToMdError> {
        let mut workbook = WorkbookParser::open(input)?;
        let document = self.collect_sections(&mut workbook)?;
        self.renderer.render_to(&document, &mut output)
    }

    /// リーダーから読み込んだワークブックをMarkdown文字列に変換
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::io::Cursor;
    /// use xlsxroutes::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsxroutes::RoutesToMdError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let workbook_bytes: Vec<u8> = vec![]; // ワークブックのバイト列
    /// let markdown = converter.convert_to_string(Cursor::new(workbook_bytes))?;
    /// println!("{}", markdown);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_string<R: Read>(&self, input: R) -> Result<String, RoutesToMdError> {
        let mut workbook = WorkbookParser::open(input)?;
        let document = self.collect_sections(&mut workbook)?;
        Ok(self.render(&document))
    }

    /// 除外対象でないシートを順に走査し、セクションを収集する
    ///
    /// 除外対象のシートは読み込まれません。同名のロケーションが複数のシートにあっても
    /// 統合せず、出現順にそのまま並べます。
    pub fn collect_sections<W: WorkbookReader>(
        &self,
        workbook: &mut W,
    ) -> Result<Document, RoutesToMdError> {
        let mut document = Document::new();

        for sheet_name in workbook.sheet_names() {
            if self.config.ignore_sheets.contains(&sheet_name) {
                log::debug!("Skipping ignored sheet '{}'", sheet_name);
                continue;
            }

            let rows = workbook.read_rows(&sheet_name)?;
            let sections = SectionScanner::scan(&self.config.skip_prefix, rows);
            log::debug!("Sheet '{}': {} section(s)", sheet_name, sections.len());
            document.extend(sections);
        }

        Ok(document)
    }

    /// セクションの一覧をMarkdown文字列に変換
    pub fn render(&self, document: &Document) -> String {
        self.renderer.render(document)
    }
}
