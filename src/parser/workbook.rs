//! Workbook Parser
//!
//! calamineのラッパーとして、シート名の列挙と先頭3列の行データ抽出を提供します。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Cursor, ErrorKind, Read, Seek};
use std::path::Path;

use crate::error::RoutesToMdError;
use crate::formatter::CellFormatter;
use crate::parser::WorkbookReader;
use crate::types::Row;

/// LOCATION/ROUTE/NOTESとして読み込む列数
const REQUIRED_COLUMNS: usize = 3;

/// ワークブックパーサー
///
/// calamineの自動判別（xlsx / xlsm / xlsb / xls / ods）でワークブックを開きます。
/// ワークブックは読み取り専用として扱い、変更しません。
pub struct WorkbookParser<RS: Read + Seek> {
    /// calamineのワークブック
    workbook: Sheets<RS>,

    /// セル値のテキスト変換
    formatter: CellFormatter,
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// パスを指定してワークブックを開く
    ///
    /// ファイルは一度に全体を読み込み、直後に閉じます。
    ///
    /// # エラー
    ///
    /// * `RoutesToMdError::InputNotFound` - ファイルが存在しない場合
    /// * `RoutesToMdError::InputUnreadable` - ファイルを読み込めない場合
    /// * `RoutesToMdError::Parse` - ワークブックとして解析できない場合
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, RoutesToMdError> {
        let path = path.as_ref();
        let buffer = std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => RoutesToMdError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => RoutesToMdError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        log::debug!("Read {} bytes from '{}'", buffer.len(), path.display());
        Self::from_bytes(buffer)
    }

    /// リーダーからワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックを読み込むためのリーダー
    pub fn open<R: Read>(mut reader: R) -> Result<Self, RoutesToMdError> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::from_bytes(buffer)
    }

    /// メモリ上のバイト列からワークブックを開く
    pub fn from_bytes(buffer: Vec<u8>) -> Result<Self, RoutesToMdError> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self {
            workbook,
            formatter: CellFormatter::new(),
        })
    }
}

impl<RS: Read + Seek> WorkbookParser<RS> {
    /// ヘッダー行の絶対位置（最初に空でないセルを含む行）
    ///
    /// 先頭の空行は読み飛ばされます。すべてのセルが空の場合は`None`を返します。
    fn header_row(&self, range: &Range<Data>) -> Option<u32> {
        let (start_row, _) = range.start()?;
        range
            .rows()
            .position(|cells| {
                cells
                    .iter()
                    .any(|cell| !self.formatter.format_cell(Some(cell)).is_empty())
            })
            .map(|offset| start_row + offset as u32)
    }

    /// 範囲の1行分を先頭3列の`Row`に変換
    ///
    /// 座標は絶対位置（A列=0）で参照するため、使用範囲がB列以降から始まるシートでも
    /// 列の割り当ては変わりません。
    fn extract_row(&self, range: &Range<Data>, row: u32) -> Row {
        let cell = |col: u32| self.formatter.format_cell(range.get_value((row, col)));
        Row {
            location: cell(0),
            route: cell(1),
            notes: cell(2),
        }
    }
}

impl<RS: Read + Seek> WorkbookReader for WorkbookParser<RS> {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn read_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>, RoutesToMdError> {
        // 1. シートの取得
        let range = self.workbook.worksheet_range(sheet_name)?;

        // 2. 列数の検証（絶対位置での最終列 + 1）
        let (last_row, columns) = match range.end() {
            Some((row, col)) => (row, col as usize + 1),
            None => (0, 0),
        };
        if columns < REQUIRED_COLUMNS {
            return Err(RoutesToMdError::MalformedSheet {
                sheet: sheet_name.to_string(),
                columns,
            });
        }

        // 3. 最初の空でない行をヘッダーとして読み飛ばす
        let Some(header_row) = self.header_row(&range) else {
            log::debug!("Sheet '{}': no header row", sheet_name);
            return Ok(Vec::new());
        };
        let rows: Vec<Row> = (header_row + 1..=last_row)
            .map(|row| self.extract_row(&range, row))
            .collect();

        log::debug!(
            "Sheet '{}': {} data row(s), {} column(s)",
            sheet_name,
            rows.len(),
            columns
        );

        Ok(rows)
    }
}

// ワークブックを伴うテストは統合テスト（tests/）で実装します。
