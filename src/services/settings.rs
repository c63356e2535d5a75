//! # 설정 시트 조회
//!
//! 설정 엑셀 파일의 첫 번째 시트는 (경로, 이름) 두 열로 되어 있습니다.
//! 이름으로 실제 구매 주문 엑셀 파일의 경로를 찾을 때 사용합니다.

use std::path::PathBuf;

use crate::models::SettingExcelData;
use crate::services::workbook::{self, SheetError};

const SETTINGS_SHEET_INDEX: usize = 0;
const SETTINGS_HEADER_ROWS: usize = 1;

/// 설정 파일을 읽어 (경로, 이름) 목록을 반환합니다.
pub async fn read_settings(path: PathBuf) -> Result<Vec<SettingExcelData>, SheetError> {
    let rows = workbook::load_rows_from_path(path, SETTINGS_SHEET_INDEX).await?;
    Ok(settings_from_rows(&rows))
}

/// 헤더 1행을 건너뛰고, 셀이 2개 미만인 행은 무시합니다.
pub fn settings_from_rows(rows: &[Vec<String>]) -> Vec<SettingExcelData> {
    rows.iter()
        .skip(SETTINGS_HEADER_ROWS)
        .filter(|row| row.len() >= 2)
        .map(|row| SettingExcelData {
            path: row[0].clone(),
            name: row[1].clone(),
        })
        .collect()
}

/// 이름이 정확히 일치하는 첫 번째 설정
pub fn find_setting<'a>(settings: &'a [SettingExcelData], name: &str) -> Option<&'a SettingExcelData> {
    settings.iter().find(|s| s.name == name)
}
