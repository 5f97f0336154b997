pub mod progress;
pub mod request;
pub mod response;

pub use progress::ReportPhase;
pub use request::BuildReportRequest;
pub use response::ReportSnapshot;
