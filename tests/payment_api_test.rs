// ==========================================
// PaymentApi 集成测试
// ==========================================
// 职责: 验证付款表单状态、出资核算与管理端列表接口
// ==========================================


use chrono::NaiveDate;
use dsrp_core::api::{ApiError, PaymentApi};
use dsrp_core::domain::types::PaymentType;
use dsrp_core::engine::InterimReportDeadline;
use dsrp_core::i18n;
use rust_decimal::Decimal;
use std::sync::Mutex;
use test_helpers::ApprovedWorkBuilder;

// rust-i18n 的 locale 为全局状态
static LOCALE_LOCK: Mutex<()> = Mutex::new(());

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_calculate_contribution_by_name() {
    let api = PaymentApi::default();
    let work = ApprovedWorkBuilder::new(1, "1.1").shared_cost(10_000).build();

    let result = api
        .calculate_contribution("interim", &work, Some(Decimal::from(5_000)))
        .unwrap();
    assert_eq!(result.max_amount, Decimal::from(6_000));
    assert_eq!(result.estimated_financial_contribution, Decimal::from(2_500));

    let err = api.calculate_contribution("deposit", &work, None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
fn test_final_form_locked_until_interim_submitted() {
    let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    i18n::set_locale("en");

    let api = PaymentApi::default();
    let work = ApprovedWorkBuilder::new(1, "1.1").build();

    let state = api.payment_form_state("final", &work, date(2020, 6, 1)).unwrap();
    assert_eq!(state.payment_type, PaymentType::Final);
    assert!(state.view_only);
    assert_eq!(state.notices.len(), 1);
    assert!(state.notices[0].starts_with("You must complete"));
    assert_eq!(state.interim_report_deadline, InterimReportDeadline::NotStarted);

    let interim = api.payment_form_state("interim", &work, date(2020, 6, 1)).unwrap();
    assert!(!interim.view_only);
    assert!(interim.notices.is_empty());

    i18n::set_locale("zh-CN");
}

#[test]
fn test_interim_report_notice_after_submission() {
    let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    i18n::set_locale("en");

    let api = PaymentApi::default();
    let mut work = ApprovedWorkBuilder::new(1, "1.1")
        .interim_status("READY_FOR_REVIEW")
        .build();
    if let Some(payment) = work.contracted_work_payment.as_mut() {
        payment.interim_payment_submission_date = Some(date(2020, 6, 1));
    }

    let state = api.payment_form_state("interim", &work, date(2020, 6, 11)).unwrap();
    assert!(state.view_only);
    assert_eq!(
        state.notices,
        vec!["Interim Progress Report due by 2020-07-01 (20 days left)".to_string()]
    );

    let overdue = api.payment_form_state("final", &work, date(2020, 7, 4)).unwrap();
    assert!(!overdue.view_only);
    assert_eq!(
        overdue.notices,
        vec!["Interim Progress Report is 3 days overdue".to_string()]
    );

    i18n::set_locale("zh-CN");
}

#[test]
fn test_form_state_includes_persisted_contribution() {
    let api = PaymentApi::default();
    let work = ApprovedWorkBuilder::new(1, "1.1")
        .shared_cost(10_000)
        .interim_actual_cost(4_000)
        .build();

    let state = api.payment_form_state("interim", &work, date(2020, 6, 1)).unwrap();
    assert_eq!(state.contribution.max_amount, Decimal::from(6_000));
    assert_eq!(
        state.contribution.estimated_financial_contribution,
        Decimal::from(2_000)
    );
}

#[test]
fn test_start_preview() {
    let api = PaymentApi::default();
    let work = ApprovedWorkBuilder::new(1, "1.1").shared_cost(10_000).build();

    let mut preview = api.start_preview("final", &work).unwrap();
    assert_eq!(preview.current().estimated_financial_contribution, Decimal::ZERO);

    let result = preview.on_input(api.calculator(), &work, "2,000.00");
    assert_eq!(result.estimated_financial_contribution, Decimal::from(1_000));

    assert!(api.start_preview("", &work).is_err());
}

#[test]
fn test_list_approved_contracted_work() {
    let api = PaymentApi::default();
    let records = vec![
        ApprovedWorkBuilder::new(2, "2.1").build(),
        ApprovedWorkBuilder::new(1, "1.1").build(),
    ];

    let page = api
        .list_approved_contracted_work(&records, &api.default_query())
        .unwrap();
    assert_eq!(page.records[0].application_id, 1);
    assert_eq!(page.total, 2);

    let mut query = api.default_query();
    query.per_page = 0;
    let err = api.list_approved_contracted_work(&records, &query).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}
