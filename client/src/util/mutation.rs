//! Sequencing for user-triggered mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never merge a mutation's effect locally. They await the mutation,
//! then re-fetch the affected records, and only then touch view state. These
//! helpers own that ordering so it holds the same way for every action and
//! can be driven without a browser.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::future::Future;

/// Await `mutate`, then `refresh` only if it succeeded.
///
/// The refresh starts strictly after the mutation response, so it observes the
/// write. On failure nothing is re-fetched and the error is returned as is.
pub async fn mutate_then_refresh<T, E, M, R, F>(mutate: M, refresh: F) -> Result<T, E>
where
    M: Future<Output = Result<T, E>>,
    F: FnOnce() -> R,
    R: Future<Output = ()>,
{
    let value = mutate.await?;
    refresh().await;
    Ok(value)
}

/// Run `task` only if `begin` claims the busy flag, and release it afterwards.
///
/// Returns `None` without polling `task` when the flag was already held.
/// `finish` runs once `task` completes, whatever its outcome.
pub async fn with_busy_flag<T, B, W, F>(begin: B, task: W, finish: F) -> Option<T>
where
    B: FnOnce() -> bool,
    W: Future<Output = T>,
    F: FnOnce(),
{
    if !begin() {
        return None;
    }
    let out = task.await;
    finish();
    Some(out)
}
