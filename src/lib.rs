pub mod application;
pub mod domain;
pub mod infra;

use std::future::Future;
use tokio::runtime::Runtime;

lazy_static::lazy_static! {
    static ref RUNTIME: Runtime = Runtime::new().expect("Failed to create Tokio runtime");
}

/// Drive `future` to completion on the shared runtime.
///
/// Meant for worker threads; calling it from inside the runtime panics.
pub fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
