//! # 스프레드시트 읽기
//!
//! calamine으로 엑셀 파일(xlsx, xlsm, xlsb, xls, ods)을 열고,
//! 지정한 위치의 시트를 **문자열 행 목록**(`Vec<Vec<String>>`)으로 변환합니다.
//! 행/열 위치는 시트의 실제 위치와 같게 맞춥니다 (A1부터 시작).
//!
//! calamine은 동기(블로킹) API이므로, 비동기 핸들러에서는
//! `load_*` 함수로 `spawn_blocking` 스레드에서 실행합니다.

use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, ExcelDateTime, Reader, Sheets};
use chrono::Timelike;
use thiserror::Error;

/// 스프레드시트를 읽는 중 발생하는 에러
///
/// "파일 없음"과 "시트 없음"은 서로 다른 variant입니다.
/// 백업 폴백은 `NotFound`에만 적용됩니다.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("spreadsheet file not found: '{path}'")]
    NotFound { path: String },

    #[error("failed to access spreadsheet '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 손상되었거나 지원하지 않는 형식
    #[error("failed to open Excel file '{origin}': {message}")]
    Unreadable { origin: String, message: String },

    /// 요청한 위치의 시트가 없음 (예: 시트가 1개인 파일에서 두 번째 시트 요청)
    #[error("sheet at index {index} not found in '{origin}' ({available} sheet(s) available)")]
    MissingSheet {
        origin: String,
        index: usize,
        available: usize,
    },

    #[error("failed to read rows from sheet '{sheet}' in '{origin}': {message}")]
    UnreadableSheet {
        origin: String,
        sheet: String,
        message: String,
    },

    #[error("spreadsheet reader task failed: {0}")]
    Task(String),
}

/// 디스크(로컬 또는 UNC 경로)의 파일에서 `sheet_index`번째 시트를 읽습니다.
pub fn read_rows_from_path(path: &Path, sheet_index: usize) -> Result<Vec<Vec<String>>, SheetError> {
    let origin = path.display().to_string();

    // 파일 상태를 먼저 확인하여 "없음"과 "권한/접근 문제"를 구분합니다.
    if let Err(e) = std::fs::metadata(path) {
        return Err(match e.kind() {
            std::io::ErrorKind::NotFound => SheetError::NotFound { path: origin },
            _ => SheetError::Access {
                path: origin,
                source: e,
            },
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| SheetError::Unreadable {
        origin: origin.clone(),
        message: e.to_string(),
    })?;

    read_sheet(&mut workbook, sheet_index, &origin)
}

/// 업로드된 파일 바이트에서 `sheet_index`번째 시트를 읽습니다.
///
/// `origin`은 에러 메시지에 표시할 이름(보통 업로드 파일명)입니다.
pub fn read_rows_from_bytes(
    bytes: Vec<u8>,
    sheet_index: usize,
    origin: &str,
) -> Result<Vec<Vec<String>>, SheetError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| SheetError::Unreadable {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

    read_sheet(&mut workbook, sheet_index, origin)
}

/// `read_rows_from_path`를 블로킹 스레드 풀에서 실행합니다.
pub async fn load_rows_from_path(
    path: PathBuf,
    sheet_index: usize,
) -> Result<Vec<Vec<String>>, SheetError> {
    tokio::task::spawn_blocking(move || read_rows_from_path(&path, sheet_index))
        .await
        .map_err(|e| SheetError::Task(e.to_string()))?
}

/// `read_rows_from_bytes`를 블로킹 스레드 풀에서 실행합니다.
pub async fn load_rows_from_bytes(
    bytes: Vec<u8>,
    sheet_index: usize,
    origin: String,
) -> Result<Vec<Vec<String>>, SheetError> {
    tokio::task::spawn_blocking(move || read_rows_from_bytes(bytes, sheet_index, &origin))
        .await
        .map_err(|e| SheetError::Task(e.to_string()))?
}

fn read_sheet<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    sheet_index: usize,
    origin: &str,
) -> Result<Vec<Vec<String>>, SheetError> {
    let sheet_names = workbook.sheet_names();
    let sheet = sheet_names
        .get(sheet_index)
        .cloned()
        .ok_or_else(|| SheetError::MissingSheet {
            origin: origin.to_string(),
            index: sheet_index,
            available: sheet_names.len(),
        })?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| SheetError::UnreadableSheet {
            origin: origin.to_string(),
            sheet: sheet.clone(),
            message: e.to_string(),
        })?;

    // 사용 범위(range)가 A1이 아닌 곳에서 시작하면,
    // 앞쪽 빈 행/열을 채워서 행/열 번호를 시트 위치와 맞춥니다.
    let (row_offset, column_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_offset];
    for cells in range.rows() {
        let mut row = vec![String::new(); column_offset];
        row.extend(cells.iter().map(cell_text));
        trim_trailing_empty(&mut row);
        rows.push(row);
    }

    tracing::debug!(origin, sheet = %sheet, rows = rows.len(), "Read spreadsheet rows");
    Ok(rows)
}

fn trim_trailing_empty(row: &mut Vec<String>) {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
}

/// 셀 값을 화면에 보이는 형태의 문자열로 변환합니다.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => datetime_text(dt),
    }
}

/// 엑셀은 모든 숫자를 실수로 저장하므로, `100.0`은 `"100"`으로 표시합니다.
fn float_text(value: f64) -> String {
    // -0.0 == 0.0 이므로 부호 있는 0도 "0"이 됩니다.
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn datetime_text(value: &ExcelDateTime) -> String {
    match value.as_datetime() {
        Some(dt) if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 => {
            dt.format("%Y-%m-%d").to_string()
        }
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => float_text(value.as_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.xlsx");

        let err = read_rows_from_path(&path, 0).unwrap_err();
        assert!(matches!(err, SheetError::NotFound { .. }), "{err:?}");
        assert!(err.to_string().contains("orders.xlsx"));
    }

    #[test]
    fn corrupt_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"this is not a spreadsheet").unwrap();

        let err = read_rows_from_path(&path, 0).unwrap_err();
        assert!(matches!(err, SheetError::Unreadable { .. }), "{err:?}");
    }

    #[test]
    fn corrupt_bytes_are_unreadable() {
        let err = read_rows_from_bytes(b"not a zip".to_vec(), 0, "upload.xlsx").unwrap_err();
        match err {
            SheetError::Unreadable { origin, .. } => assert_eq!(origin, "upload.xlsx"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_from_path_runs_off_the_executor() {
        let err = load_rows_from_path(PathBuf::from("/definitely/missing/file.xlsx"), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, SheetError::NotFound { .. }));
    }

    #[test]
    fn cell_text_formats_numbers_like_the_sheet() {
        assert_eq!(cell_text(&Data::Float(100.0)), "100");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Float(-0.0)), "0");
        assert_eq!(cell_text(&Data::Float(-3.0)), "-3");
        assert_eq!(cell_text(&Data::Int(-4)), "-4");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_text(&Data::String("PO-1".to_string())), "PO-1");
    }

    #[test]
    fn trailing_empty_cells_are_trimmed() {
        let mut row = vec!["a".to_string(), String::new(), "b".to_string(), String::new()];
        trim_trailing_empty(&mut row);
        assert_eq!(row, vec!["a".to_string(), String::new(), "b".to_string()]);
    }

    #[test]
    fn real_workbook_cells_render_as_text() {
        use crate::fixtures::{workbook_bytes, Cell};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cells.xlsx");
        let bytes = workbook_bytes(vec![(
            "Data",
            vec![
                (0, 0, Cell::Text("PO-1")),
                (0, 1, Cell::Number(100.0)),
                (0, 2, Cell::Number(2.5)),
                (0, 3, Cell::Date(2024, 5, 1)),
                (1, 0, Cell::Text("x")),
            ],
        )]);
        std::fs::write(&path, bytes).unwrap();

        let rows = read_rows_from_path(&path, 0).unwrap();
        assert_eq!(rows, vec![vec!["PO-1", "100", "2.5", "2024-05-01"], vec!["x"]]);
    }

    #[test]
    fn cells_keep_their_sheet_position() {
        use crate::fixtures::{workbook_bytes, Cell};

        let bytes = workbook_bytes(vec![("Data", vec![(2, 1, Cell::Text("B3"))])]);
        let rows = read_rows_from_bytes(bytes, 0, "offset.xlsx").unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty() && rows[1].is_empty());
        assert_eq!(rows[2], vec!["", "B3"]);
    }

    #[test]
    fn single_sheet_file_has_no_second_sheet() {
        use crate::fixtures::{workbook_bytes, Cell};

        let bytes = workbook_bytes(vec![("Only", vec![(0, 0, Cell::Text("J-1"))])]);
        let err = read_rows_from_bytes(bytes, 1, "one.xlsx").unwrap_err();

        match &err {
            SheetError::MissingSheet { origin, index, available } => {
                assert_eq!((origin.as_str(), *index, *available), ("one.xlsx", 1, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "sheet at index 1 not found in 'one.xlsx' (1 sheet(s) available)"
        );
    }

    #[test]
    fn network_sheet_maps_to_orders() {
        use crate::services::{layout::NETWORK_V2, mapper::map_rows};

        let rows = read_rows_from_bytes(crate::fixtures::network_orders(), 1, "orders.xlsx").unwrap();
        let orders = map_rows(&rows, &NETWORK_V2, None);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].job_id_no.as_deref(), Some("J-1"));
        assert_eq!(orders[0].r#type.as_deref(), Some("HW"));
        assert_eq!(orders[0].ordered, Some(5));
        assert_eq!(orders[0].pr_date.as_deref(), Some("2024-04-02"));
        assert_eq!(orders[0].remark.as_deref(), Some("urgent"));
        assert_eq!(orders[0].status.as_deref(), Some("Completed"));

        assert_eq!(orders[1].job_id_no.as_deref(), Some("J-2"));
        assert_eq!(orders[1].received, None);
        assert_eq!(orders[1].status.as_deref(), Some("Not Completed"));
    }

    #[test]
    fn same_bytes_give_identical_orders() {
        use crate::services::{layout::NETWORK_V2, mapper::map_rows};

        let bytes = crate::fixtures::network_orders();
        let first = map_rows(&read_rows_from_bytes(bytes.clone(), 1, "a.xlsx").unwrap(), &NETWORK_V2, None);
        let second = map_rows(&read_rows_from_bytes(bytes, 1, "a.xlsx").unwrap(), &NETWORK_V2, None);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn missing_sheet_message_names_the_index() {
        let err = SheetError::MissingSheet {
            origin: "orders.xlsx".to_string(),
            index: 1,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "sheet at index 1 not found in 'orders.xlsx' (1 sheet(s) available)"
        );
    }
}
