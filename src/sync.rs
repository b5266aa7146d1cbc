//! Lock used by the table, backed by `std` or `spin`.

pub struct Mutex<T> {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<T>,
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    inner: spin::Mutex<T>,
}

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self {
            #[cfg(feature = "std")]
            inner: std::sync::Mutex::new(value),
            #[cfg(all(not(feature = "std"), feature = "alloc"))]
            inner: spin::Mutex::new(value),
        }
    }

    /// Runs `f` with the lock held. A poisoned lock is recovered.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        let mut guard = self.inner.lock();

        f(&mut guard)
    }
}
