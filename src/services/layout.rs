//! # 시트 레이아웃(Sheet Layout)
//!
//! 엑셀 파일의 열 구성은 버전마다 다릅니다. 열 번호를 코드에 직접 쓰는 대신,
//! "몇 번째 시트의, 몇 행을 건너뛰고, 어느 열이 어느 필드인지"를
//! 이름이 붙은 `SheetLayout` 값으로 표현합니다.
//! 열 구성이 바뀌면 새 레이아웃을 추가하고 설정(`*_SHEET_LAYOUT`)에서 이름만 바꾸면 됩니다.
//!
//! ## 내장 레이아웃
//! | 이름 | 시트 | 헤더 행 | 용도 |
//! |------|------|---------|------|
//! | `upload-v1` | 첫 번째 | 2 | 업로드 파일 (가격 필드 포함) |
//! | `network-v2` | 두 번째 | 3 | 로컬/네트워크 공유 경로 파일 |

use crate::models::PurchaseOrder;
use crate::services::coercion::{int_or_nil, string_or_nil, IntPolicy};

/// 레이아웃이 채울 수 있는 구매 주문 필드
///
/// `status`는 여기에 없습니다. 시트의 상태 열은 읽지 않고
/// `StatusSource`로부터 항상 다시 계산합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobIdNo,
    Type,
    SalesTeam,
    ProjectManager,
    Purchasing,
    CustomerPo,
    JobAmount,
    PeriodStart,
    PeriodEnd,
    Customer,
    ProductCode,
    ProductDescription,
    Ordered,
    Received,
    Remain,
    Currency,
    UnitListPrice,
    ExtendListPrice,
    DiscountPercent,
    DiscountAmount,
    ExtendUnitNetPrice,
    ExtendNetPrice,
    Pr,
    PrDate,
    Po,
    PoDate,
    RequestDate,
    PoReceiveDate,
    Distribution,
    PaymentTerm,
    ReceivedDate,
    StockPickingOutDate,
    DeliveryDate,
    Remark,
}

impl Field {
    /// 셀 문자열을 변환하여 레코드의 해당 필드에 기록합니다.
    pub fn apply(self, order: &mut PurchaseOrder, raw: &str, policy: IntPolicy) {
        // 텍스트 필드와 정수 필드를 각각 한 번에 처리하기 위한 지역 헬퍼
        let text = || string_or_nil(raw);
        let int = || int_or_nil(raw, policy);

        match self {
            Field::JobIdNo => order.job_id_no = text(),
            Field::Type => order.r#type = text(),
            Field::SalesTeam => order.sales_team = text(),
            Field::ProjectManager => order.project_manager = text(),
            Field::Purchasing => order.purchasing = text(),
            Field::CustomerPo => order.customer_po = text(),
            Field::JobAmount => order.job_amount = int(),
            Field::PeriodStart => order.period_start = text(),
            Field::PeriodEnd => order.period_end = text(),
            Field::Customer => order.customer = text(),
            Field::ProductCode => order.product_code = text(),
            Field::ProductDescription => order.product_description = text(),
            Field::Ordered => order.ordered = int(),
            Field::Received => order.received = int(),
            Field::Remain => order.remain = int(),
            Field::Currency => order.currency = text(),
            Field::UnitListPrice => order.unit_list_price = int(),
            Field::ExtendListPrice => order.extend_list_price = int(),
            Field::DiscountPercent => order.discount_percent = int(),
            Field::DiscountAmount => order.discount_amount = int(),
            Field::ExtendUnitNetPrice => order.extend_unit_net_price = int(),
            Field::ExtendNetPrice => order.extend_net_price = int(),
            Field::Pr => order.pr = text(),
            Field::PrDate => order.pr_date = text(),
            Field::Po => order.po = text(),
            Field::PoDate => order.po_date = text(),
            Field::RequestDate => order.request_date = text(),
            Field::PoReceiveDate => order.po_receive_date = text(),
            Field::Distribution => order.distribution = text(),
            Field::PaymentTerm => order.payment_term = text(),
            Field::ReceivedDate => order.received_date = text(),
            Field::StockPickingOutDate => order.stock_picking_out_date = text(),
            Field::DeliveryDate => order.delivery_date = text(),
            Field::Remark => order.remark = text(),
        }
    }
}

/// 완료 상태 계산에 쓰이는 두 열의 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSource {
    /// 괄호 수량이 적힌 납품일 메모 열
    pub delivery_column: usize,
    /// 주문 수량 열
    pub ordered_column: usize,
}

/// 버전이 붙은 열 매핑 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub name: &'static str,
    /// 읽을 시트의 위치 (0 = 첫 번째 시트)
    pub sheet_index: usize,
    /// 데이터 앞의 헤더 행 수
    pub header_rows: usize,
    /// 비어 있으면 행을 건너뛰는 식별자(Job ID) 열
    pub id_column: usize,
    pub int_policy: IntPolicy,
    pub columns: &'static [(Field, usize)],
    pub status: Option<StatusSource>,
}

const UPLOAD_V1_COLUMNS: &[(Field, usize)] = &[
    (Field::JobIdNo, 0),
    (Field::SalesTeam, 1),
    (Field::ProjectManager, 2),
    (Field::Purchasing, 3),
    (Field::CustomerPo, 4),
    (Field::JobAmount, 5),
    (Field::PeriodStart, 6),
    (Field::PeriodEnd, 7),
    (Field::Customer, 8),
    (Field::ProductCode, 9),
    (Field::ProductDescription, 10),
    (Field::Ordered, 11),
    (Field::Received, 12),
    (Field::Remain, 13),
    (Field::Currency, 14),
    (Field::UnitListPrice, 15),
    (Field::ExtendListPrice, 16),
    (Field::DiscountPercent, 17),
    (Field::DiscountAmount, 18),
    (Field::ExtendUnitNetPrice, 19),
    (Field::ExtendNetPrice, 20),
    (Field::DeliveryDate, 52),
];

const NETWORK_V2_COLUMNS: &[(Field, usize)] = &[
    (Field::JobIdNo, 0),
    (Field::Type, 1),
    (Field::SalesTeam, 2),
    (Field::ProjectManager, 3),
    (Field::Purchasing, 4),
    (Field::Customer, 9),
    (Field::ProductCode, 10),
    (Field::ProductDescription, 11),
    (Field::Ordered, 12),
    (Field::Received, 13),
    (Field::Remain, 14),
    (Field::Pr, 25),
    (Field::PrDate, 26),
    (Field::Po, 27),
    (Field::PoDate, 28),
    (Field::RequestDate, 29),
    (Field::PoReceiveDate, 30),
    (Field::Distribution, 32),
    (Field::ReceivedDate, 36),
    (Field::StockPickingOutDate, 52),
    (Field::Remark, 57),
];

/// 업로드 파일용: 첫 번째 시트, 헤더 2행, 가격 필드 포함.
/// 53번 열(상태)은 읽지 않습니다.
pub const UPLOAD_V1: SheetLayout = SheetLayout {
    name: "upload-v1",
    sheet_index: 0,
    header_rows: 2,
    id_column: 0,
    int_policy: IntPolicy::ZeroIsAbsent,
    columns: UPLOAD_V1_COLUMNS,
    status: Some(StatusSource {
        delivery_column: 52,
        ordered_column: 11,
    }),
};

/// 경로(로컬/UNC) 파일용: 두 번째 시트, 헤더 3행.
pub const NETWORK_V2: SheetLayout = SheetLayout {
    name: "network-v2",
    sheet_index: 1,
    header_rows: 3,
    id_column: 0,
    int_policy: IntPolicy::ZeroIsAbsent,
    columns: NETWORK_V2_COLUMNS,
    status: Some(StatusSource {
        delivery_column: 52,
        ordered_column: 12,
    }),
};

/// 이름으로 찾을 수 있는 모든 내장 레이아웃
pub const BUILTIN_LAYOUTS: &[SheetLayout] = &[UPLOAD_V1, NETWORK_V2];

impl SheetLayout {
    /// 이름으로 내장 레이아웃을 찾습니다.
    pub fn by_name(name: &str) -> Option<SheetLayout> {
        BUILTIN_LAYOUTS.iter().find(|l| l.name == name).cloned()
    }

    /// 정수 정책만 바꾼 복사본
    pub fn with_int_policy(mut self, policy: IntPolicy) -> Self {
        self.int_policy = policy;
        self
    }

    /// 행을 읽기 위해 필요한 최소 열 수 (참조하는 가장 큰 열 번호 + 1)
    pub fn required_width(&self) -> usize {
        let status_columns = self
            .status
            .iter()
            .flat_map(|s| [s.delivery_column, s.ordered_column]);

        self.columns
            .iter()
            .map(|&(_, column)| column)
            .chain(status_columns)
            .chain(std::iter::once(self.id_column))
            .max()
            .map_or(0, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layouts_are_found_by_name() {
        assert_eq!(SheetLayout::by_name("upload-v1"), Some(UPLOAD_V1));
        assert_eq!(SheetLayout::by_name("network-v2"), Some(NETWORK_V2));
        assert_eq!(SheetLayout::by_name("v3"), None);
    }

    #[test]
    fn required_width_covers_every_referenced_column() {
        assert_eq!(UPLOAD_V1.required_width(), 53);
        assert_eq!(NETWORK_V2.required_width(), 58);
    }

    #[test]
    fn no_layout_maps_a_column_twice() {
        for layout in BUILTIN_LAYOUTS {
            let mut columns: Vec<usize> = layout.columns.iter().map(|&(_, c)| c).collect();
            columns.sort_unstable();
            columns.dedup();
            assert_eq!(columns.len(), layout.columns.len(), "{}", layout.name);
        }
    }

    #[test]
    fn identifier_column_maps_to_job_id() {
        for layout in BUILTIN_LAYOUTS {
            assert!(layout
                .columns
                .contains(&(Field::JobIdNo, layout.id_column)));
        }
    }

    #[test]
    fn apply_respects_int_policy() {
        let mut order = PurchaseOrder::default();
        Field::Ordered.apply(&mut order, "0", IntPolicy::ZeroIsAbsent);
        assert_eq!(order.ordered, None);
        Field::Ordered.apply(&mut order, "0", IntPolicy::EmptyOnly);
        assert_eq!(order.ordered, Some(0));
        Field::Type.apply(&mut order, "Standard", IntPolicy::EmptyOnly);
        assert_eq!(order.r#type.as_deref(), Some("Standard"));
    }

    #[test]
    fn with_int_policy_keeps_columns() {
        let layout = NETWORK_V2.with_int_policy(IntPolicy::EmptyOnly);
        assert_eq!(layout.int_policy, IntPolicy::EmptyOnly);
        assert_eq!(layout.columns, NETWORK_V2.columns);
    }
}
