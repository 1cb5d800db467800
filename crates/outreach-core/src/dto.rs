use crate::analytics::DashboardStats;
use crate::domain::OutreachRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub stats: DashboardStats,
    pub today: Vec<OutreachRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReportDto {
    pub output: String,
    pub count: usize,
}
