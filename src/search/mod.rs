// src/search/mod.rs
//
// Query coordination core. Leaf-first: mode → cancel → results → coordinator.

pub mod cancel;
pub mod coordinator;
pub mod mode;
pub mod results;

pub use cancel::{CancelSignal, QueryCancellationManager, Token};
pub use coordinator::{Outcome, SearchCoordinator, SubmitError, Waker};
pub use mode::{NameFilter, SearchMode, SearchModeState, TeamFilter};
pub use results::{DisplayStatus, QueryStatus, ResultKind, ResultSet, ResultStore};
