use serde::{Deserialize, Serialize};

/// 설정 시트의 한 행: (파일 경로, 이름)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingExcelData {
    pub path: String,
    pub name: String,
}
