//! Case domain entities.

pub mod model;
pub mod summary;

pub use model::{Case, CreateCase};
pub use summary::{CaseDetail, CaseSummary};
