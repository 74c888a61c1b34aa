mod dashboard;
pub use dashboard::Dashboard;

mod reports;
pub use reports::Reports;
