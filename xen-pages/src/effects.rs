use std::future::Future;
use xen_client::XenClientError;

/// Apply a local effect immediately, then run the server call.
///
/// The effect is never rolled back: a failed call is logged and the local
/// state keeps the assumed-successful value. Worst case is a transient
/// over-count that self-corrects on the next full fetch.
pub async fn optimistic<T, E, Fut>(target: &mut T, effect: E, action: Fut)
where
    E: FnOnce(&mut T),
    Fut: Future<Output = Result<(), XenClientError>>,
{
    effect(target);

    if let Err(e) = action.await {
        tracing::warn!(error = %e, "optimistic action failed; keeping local state");
    }
}
