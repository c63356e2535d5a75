//! # 테스트용 엑셀 파일 생성
//!
//! rust_xlsxwriter로 실제 xlsx 바이트를 만들어, calamine 읽기부터
//! 레코드 변환, HTTP 응답까지 같은 파일로 검증합니다.

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

/// 시트에 쓸 셀 값
pub enum Cell {
    Text(&'static str),
    Number(f64),
    /// (년, 월, 일). `yyyy-mm-dd` 날짜 서식으로 기록합니다.
    Date(u16, u8, u8),
}

/// (행, 열, 값) 목록으로 된 시트
pub type SheetCells = Vec<(u32, u16, Cell)>;

/// 주어진 순서대로 시트를 추가한 워크북의 바이트
pub fn workbook_bytes(sheets: Vec<(&str, SheetCells)>) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, cells) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name).unwrap();
        for (row, col, cell) in cells {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text).unwrap();
                }
                Cell::Number(value) => {
                    worksheet.write_number(row, col, value).unwrap();
                }
                Cell::Date(year, month, day) => {
                    let date = ExcelDateTime::from_ymd(year, month, day).unwrap();
                    worksheet
                        .write_datetime_with_format(row, col, &date, &date_format)
                        .unwrap();
                }
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// `network-v2` 형식: 두 번째 시트, 헤더 3행
///
/// - J-1: 주문 5, 납품 2+3 → Completed
/// - J-2: 주문 4, 납품 1 → Not Completed, 입고 수량 0
/// - Job ID가 빈 행 1개
pub fn network_orders() -> Vec<u8> {
    use Cell::*;

    let orders: SheetCells = vec![
        (0, 0, Text("PURCHASE ORDER STATUS")),
        (2, 0, Text("Job ID No")),
        (2, 12, Text("Ordered")),
        (2, 52, Text("Stock Picking Out Date")),
        (3, 0, Text("J-1")),
        (3, 1, Text("HW")),
        (3, 12, Number(5.0)),
        (3, 26, Date(2024, 4, 2)),
        (3, 52, Text("2024-05-01 (2 pcs), 2024-05-10 (3 pcs)")),
        (3, 57, Text("urgent")),
        (4, 0, Text("J-2")),
        (4, 12, Number(4.0)),
        (4, 13, Number(0.0)),
        (4, 52, Text("(1 pcs)")),
        (5, 1, Text("orphan")),
    ];

    workbook_bytes(vec![
        ("Summary", vec![(0, 0, Text("see next sheet"))]),
        ("Orders", orders),
    ])
}

/// `upload-v1` 형식: 첫 번째 시트, 헤더 2행, 가격 필드 포함
///
/// 상태 열(53)에는 "Not Completed"가 적혀 있지만 계산 결과는 Completed입니다.
pub fn upload_orders() -> Vec<u8> {
    use Cell::*;

    workbook_bytes(vec![(
        "Upload",
        vec![
            (0, 0, Text("Job ID No")),
            (1, 0, Text("(no.)")),
            (2, 0, Text("J-10")),
            (2, 4, Text("CPO-1")),
            (2, 5, Number(1200.0)),
            (2, 11, Number(3.0)),
            (2, 52, Text("(3 pcs)")),
            (2, 53, Text("Not Completed")),
        ],
    )])
}
