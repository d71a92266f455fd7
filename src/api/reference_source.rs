// ==========================================
// 废弃井场修复计划 - 外部参考数据源
// ==========================================
// 用途: OGC 井记录 / 负债记录的获取接口
// 实现者: 宿主应用的 HTTP 客户端；本模块提供内存实现
// ==========================================

use crate::domain::reference::{ExternalLiabilityRecord, ExternalWellRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

// ==========================================
// ReferenceDataSource Trait
// ==========================================
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    /// 按井许可编号获取井记录（未找到的编号不返回记录）
    async fn fetch_wells(
        &self,
        well_authorization_numbers: &[String],
    ) -> anyhow::Result<Vec<ExternalWellRecord>>;

    /// 按井许可编号获取负债记录（未找到的编号不返回记录）
    async fn fetch_liabilities(
        &self,
        well_authorization_numbers: &[String],
    ) -> anyhow::Result<Vec<ExternalLiabilityRecord>>;
}

// ==========================================
// InMemoryReferenceSource - 内存数据源
// ==========================================
#[derive(Default)]
pub struct InMemoryReferenceSource {
    wells: RwLock<HashMap<String, ExternalWellRecord>>,
    liabilities: RwLock<HashMap<String, ExternalLiabilityRecord>>,
}

impl InMemoryReferenceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert_well(&self, record: ExternalWellRecord) {
        self.wells
            .write()
            .await
            .insert(record.well_authorization_number.clone(), record);
    }

    pub async fn upsert_liability(&self, record: ExternalLiabilityRecord) {
        self.liabilities
            .write()
            .await
            .insert(record.well_authorization_number.clone(), record);
    }

    /// 替换全部记录
    pub async fn replace_all(
        &self,
        wells: Vec<ExternalWellRecord>,
        liabilities: Vec<ExternalLiabilityRecord>,
    ) {
        let mut well_map = self.wells.write().await;
        well_map.clear();
        well_map.extend(wells.into_iter().map(|w| (w.well_authorization_number.clone(), w)));

        let mut liability_map = self.liabilities.write().await;
        liability_map.clear();
        liability_map.extend(
            liabilities
                .into_iter()
                .map(|l| (l.well_authorization_number.clone(), l)),
        );
    }
}

#[async_trait]
impl ReferenceDataSource for InMemoryReferenceSource {
    async fn fetch_wells(
        &self,
        well_authorization_numbers: &[String],
    ) -> anyhow::Result<Vec<ExternalWellRecord>> {
        let wells = self.wells.read().await;
        Ok(well_authorization_numbers
            .iter()
            .filter_map(|wan| wells.get(wan).cloned())
            .collect())
    }

    async fn fetch_liabilities(
        &self,
        well_authorization_numbers: &[String],
    ) -> anyhow::Result<Vec<ExternalLiabilityRecord>> {
        let liabilities = self.liabilities.read().await;
        Ok(well_authorization_numbers
            .iter()
            .filter_map(|wan| liabilities.get(wan).cloned())
            .collect())
    }
}
