pub mod dto;

pub use dto::{
    ProfitExportRow, ProfitReportFilters, ProfitReportRequest, ProfitReportResponse,
    SourcingComparison, SourcingOption,
};
