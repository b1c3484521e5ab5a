pub mod fetch;
pub mod model;
pub mod orchestrator;
pub mod process;
pub mod reconcile;
pub mod sheet;
pub mod site;

pub use fetch::{FetchConfig, FetchError, fetch};
pub use model::{PlannerRecord, QueuePayload, RemoteFile};
pub use orchestrator::{Credential, Orchestrator, OrchestratorError};
pub use process::{ProcessError, RunReport, run};
pub use reconcile::{ReconcileReport, reconcile};
pub use sheet::{SheetError, read_planner_sheet};
pub use site::{SiteClient, SiteError};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
