use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fundline_shared::types::{AgreementId, CanId};

use super::*;
use crate::budget_line::{AgreementRef, BudgetLine, BudgetLineStatus, CanRef};

fn sample_line() -> BudgetLine {
    BudgetLine::new(1, dec!(1200), BudgetLineStatus::Planned)
        .with_fee(dec!(0.05))
        .with_fiscal_year(2025)
        .with_agreement(AgreementRef {
            id: Some(AgreementId::new(7)),
            name: Some("Contract #1".to_string()),
            agreement_type: Some("CONTRACT".to_string()),
        })
        .with_can(CanRef {
            id: CanId::new(500),
            display_name: Some("G99HRF2".to_string()),
        })
}

fn export(lines: &[BudgetLine], decimal_places: u32) -> String {
    let mut buffer = Vec::new();
    write_budget_lines_csv(lines, decimal_places, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_export_writes_header_and_rows() {
    let csv = export(&[sample_line()], 2);
    let mut rows = csv.lines();

    assert_eq!(
        rows.next(),
        Some("BL ID #,Agreement,CAN,FY,Status,Amount,Fee Rate (%),Fee,Total")
    );
    assert_eq!(
        rows.next(),
        Some("1,Contract #1,G99HRF2,2025,Planned,1200.00,5,60.00,1260.00")
    );
    assert_eq!(rows.next(), None);
}

#[test]
fn test_export_leaves_missing_fields_blank() {
    let line = BudgetLine::new(2, None, BudgetLineStatus::Draft);
    let csv = export(&[line], 2);

    assert_eq!(csv.lines().nth(1), Some("2,,,,Draft,0.00,0,0.00,0.00"));
}

#[test]
fn test_export_uses_effective_status_label() {
    let mut line = BudgetLine::new(3, dec!(10), BudgetLineStatus::Planned);
    line.in_review = true;

    let row = BudgetLineExportRow::from_line(&line, 2);
    assert_eq!(row.status, "In Review");
}

#[test]
fn test_export_falls_back_to_can_id() {
    let line = BudgetLine::new(4, dec!(10), BudgetLineStatus::Planned).with_can(CanRef {
        id: CanId::new(501),
        display_name: None,
    });

    let row = BudgetLineExportRow::from_line(&line, 2);
    assert_eq!(row.can, "501");
}

#[test]
fn test_export_of_no_lines_writes_nothing() {
    let mut buffer = Vec::new();
    let rows = write_budget_lines_csv(&[], 2, &mut buffer).unwrap();

    assert_eq!(rows, 0);
    assert!(buffer.is_empty());
}

#[rstest]
#[case(dec!(10.005), 2, "10.01")]
#[case(dec!(-10.005), 2, "-10.01")]
#[case(dec!(10.004), 2, "10.00")]
#[case(dec!(7), 0, "7")]
#[case(dec!(2.5), 0, "3")]
#[case(dec!(1.5), 3, "1.500")]
fn test_format_amount(#[case] value: Decimal, #[case] places: u32, #[case] expected: &str) {
    assert_eq!(format_amount(value, places), expected);
}

#[test]
fn test_export_error_codes() {
    let err = ExportError::from(std::io::Error::other("disk full"));
    assert_eq!(err.error_code(), "EXPORT_WRITE_FAILED");
}
