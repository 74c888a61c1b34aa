//! Report cards and the page controller shared by the dashboard and reports views.

mod controller;
pub use controller::{use_report_controller, PageEvent, ReportController};

mod overview;
pub use overview::ReportOverview;

mod chart;
pub use chart::{BarChart, SchemaChart};

mod schemas;
pub use schemas::SchemaUsageTable;

mod confidence;
pub use confidence::ConfidencePanel;

mod coverage;
pub use coverage::FieldCoveragePanel;

mod recent;
pub use recent::RecentDocuments;

mod documents;
pub use documents::DocumentTable;

mod upload;
pub use upload::UploadWidget;

mod confirmation;
pub use confirmation::UploadConfirmation;

mod status;
pub use status::{FailedPanel, LoadingPanel};
