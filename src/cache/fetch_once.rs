use std::future::Future;
use tokio::sync::OnceCell;

/// A single-flight memo slot. The first caller runs its fetch; callers
/// arriving while that fetch is in flight await the same fetch instead of
/// issuing their own; every later caller gets the memoized value.
pub struct FetchOnce<T> {
    cell: OnceCell<T>,
}

impl<T: Clone> FetchOnce<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Memoize whatever the fetch resolves to.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell.get_or_init(fetch).await.clone()
    }

    /// Like [`FetchOnce::get_or_fetch`], except an `Err` leaves the slot
    /// empty, so the next caller fetches again.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(fetch).await.map(Clone::clone)
    }
}

impl<T: Clone> Default for FetchOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}
