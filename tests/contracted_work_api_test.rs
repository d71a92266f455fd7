// ==========================================
// ContractedWorkApi 集成测试
// ==========================================
// 职责: 验证参考数据获取 + 聚合 的 API 流程
// ==========================================


use async_trait::async_trait;
use dsrp_core::api::{ApiError, ContractedWorkApi, InMemoryReferenceSource, ReferenceDataSource};
use dsrp_core::config::ProgramRules;
use dsrp_core::domain::reference::{ExternalLiabilityRecord, ExternalWellRecord};
use dsrp_core::importer::ApplicationParser;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use test_helpers::{liabilities_json, nested_review, single_abandonment_application, wells_json};

// ==========================================
// 测试用数据源
// ==========================================

/// 总是失败的数据源
struct UnavailableSource;

#[async_trait]
impl ReferenceDataSource for UnavailableSource {
    async fn fetch_wells(&self, _numbers: &[String]) -> anyhow::Result<Vec<ExternalWellRecord>> {
        anyhow::bail!("OGC service returned 503")
    }

    async fn fetch_liabilities(&self, _numbers: &[String]) -> anyhow::Result<Vec<ExternalLiabilityRecord>> {
        Ok(Vec::new())
    }
}

/// 记录请求次数的数据源
#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl ReferenceDataSource for CountingSource {
    async fn fetch_wells(&self, _numbers: &[String]) -> anyhow::Result<Vec<ExternalWellRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn fetch_liabilities(&self, _numbers: &[String]) -> anyhow::Result<Vec<ExternalLiabilityRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

async fn seeded_source() -> Arc<InMemoryReferenceSource> {
    let source = Arc::new(InMemoryReferenceSource::new());
    source
        .upsert_well(ExternalWellRecord {
            well_authorization_number: "12345".to_string(),
            current_status: Some("ABANDONED".to_string()),
            surface_location: Some("10-20-030-05W5".to_string()),
        })
        .await;
    source
        .upsert_liability(ExternalLiabilityRecord {
            well_authorization_number: "12345".to_string(),
            abandonment_liability: Some(Decimal::from(42000)),
            ..ExternalLiabilityRecord::default()
        })
        .await;
    source
}

// ==========================================
// 测试用例
// ==========================================

#[tokio::test]
async fn test_list_well_sites_contracted_work() {
    dsrp_core::logging::init_test();

    let api = ContractedWorkApi::new(seeded_source().await, ProgramRules::default());
    let applications = ApplicationParser::parse_applications(&json!([
        single_abandonment_application(Some(nested_review("12345", "abandonment", "APPROVED")))
    ]));

    let rows = api
        .list_well_sites_contracted_work(&applications)
        .await
        .expect("aggregation should succeed");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].est_shared_cost, Decimal::from(750));
    assert_eq!(rows[0].lmr, Some(Decimal::from(42000)));
    assert_eq!(rows[0].ogc_status.as_deref(), Some("ABANDONED"));
}

#[tokio::test]
async fn test_reference_failure_surfaces_as_unavailable() {
    let api = ContractedWorkApi::new(Arc::new(UnavailableSource), ProgramRules::default());
    let applications =
        ApplicationParser::parse_applications(&json!([single_abandonment_application(None)]));

    let err = api
        .list_well_sites_contracted_work(&applications)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::ReferenceDataUnavailable(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_no_well_numbers_skips_reference_fetch() {
    let source = Arc::new(CountingSource::default());
    let api = ContractedWorkApi::new(source.clone(), ProgramRules::default());

    let rows = api.list_well_sites_contracted_work(&[]).await.unwrap();

    assert!(rows.is_empty());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_in_memory_source_replace_all() {
    let source = seeded_source().await;
    source
        .replace_all(
            vec![ExternalWellRecord {
                well_authorization_number: "999".to_string(),
                current_status: Some("SUSPENDED".to_string()),
                surface_location: None,
            }],
            Vec::new(),
        )
        .await;

    let numbers = vec!["12345".to_string(), "999".to_string()];
    let wells = source.fetch_wells(&numbers).await.unwrap();
    assert_eq!(wells.len(), 1);
    assert_eq!(wells[0].well_authorization_number, "999");
    assert!(source.fetch_liabilities(&numbers).await.unwrap().is_empty());
}

#[test]
fn test_aggregate_json_matches_async_flow() {
    let api = ContractedWorkApi::new(
        Arc::new(InMemoryReferenceSource::new()),
        ProgramRules::default(),
    );

    let rows = api.aggregate_json(
        &json!([single_abandonment_application(None)]),
        &wells_json(),
        &liabilities_json(),
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].shared_cost, Decimal::from(750));
    assert_eq!(rows[0].est_shared_cost, Decimal::ZERO);
    assert_eq!(rows[0].location.as_deref(), Some("10-20-030-05W5"));
}

#[test]
fn test_contracted_work_totals() {
    let api = ContractedWorkApi::new(
        Arc::new(InMemoryReferenceSource::new()),
        ProgramRules::default(),
    );
    let applications =
        ApplicationParser::parse_applications(&json!([single_abandonment_application(None)]));

    let totals = api.contracted_work_totals(&applications[0]);
    assert_eq!(totals.grand_total, Decimal::from(1500));
    assert_eq!(totals.well(0).map(|w| w.well_total), Some(Decimal::from(1500)));
}
