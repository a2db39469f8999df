//! `RelinkableHandle<T>`: a shared, late-bound reference to a value.
//!
//! Clones of a handle share one slot. Linking a value through any clone is
//! visible to all of them, which lets an index be created before the curve
//! it forecasts from and be bound to that curve once it is built.
//!
//! `T` may be unsized, so `RelinkableHandle<dyn Trait>` holds any
//! implementor behind an `Arc`.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A handle whose target can be (re)linked at runtime.
///
/// The slot is guarded by an `RwLock`: readers take a cheap snapshot of the
/// current `Arc`, the writer replaces it. A poisoned lock still holds a
/// valid `Option<Arc<T>>`, so poisoning is recovered from rather than
/// propagated.
pub struct RelinkableHandle<T: ?Sized> {
    inner: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T: ?Sized> RelinkableHandle<T> {
    /// Create a new relinkable handle, initially empty.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a handle already linked to `target`.
    pub fn from_arc(target: Arc<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(target))),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<T>>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<T>>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Link every clone of this handle to `target`.
    pub fn link_to(&self, target: Arc<T>) {
        *self.write() = Some(target);
    }

    /// Detach the handle from its target.
    pub fn unlink(&self) {
        *self.write() = None;
    }

    /// Return `true` if the handle currently has no target.
    pub fn is_empty(&self) -> bool {
        self.read().is_none()
    }

    /// Snapshot of the current target, or `None` if empty.
    pub fn current(&self) -> Option<Arc<T>> {
        self.read().clone()
    }

    /// Run `f` against the current target.
    ///
    /// Returns `None` if the handle is empty.
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.read().as_deref().map(f)
    }

    /// `true` if both handles share the same slot.
    pub fn same_slot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for RelinkableHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Default for RelinkableHandle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> fmt::Debug for RelinkableHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("RelinkableHandle(empty)")
        } else {
            f.write_str("RelinkableHandle(linked)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Shape: Send + Sync {
        fn area(&self) -> f64;
    }

    struct Square(f64);

    impl Shape for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }
    }

    #[test]
    fn link_is_visible_through_clones() {
        let handle: RelinkableHandle<dyn Shape> = RelinkableHandle::empty();
        let reader = handle.clone();
        assert!(reader.is_empty());
        assert!(reader.with(|s| s.area()).is_none());

        handle.link_to(Arc::new(Square(2.0)));
        assert!(!reader.is_empty());
        assert_eq!(reader.with(|s| s.area()), Some(4.0));

        handle.link_to(Arc::new(Square(3.0)));
        assert_eq!(reader.current().map(|s| s.area()), Some(9.0));
    }

    #[test]
    fn unlink_empties_all_clones() {
        let handle = RelinkableHandle::from_arc(Arc::new(5_i32));
        let other = handle.clone();
        assert!(handle.same_slot(&other));
        other.unlink();
        assert!(handle.is_empty());
    }

    #[test]
    fn independent_handles_do_not_share() {
        let a: RelinkableHandle<i32> = RelinkableHandle::empty();
        let b: RelinkableHandle<i32> = RelinkableHandle::empty();
        a.link_to(Arc::new(1));
        assert!(b.is_empty());
        assert!(!a.same_slot(&b));
    }

    #[test]
    fn readers_on_other_threads_see_the_link() {
        let handle: RelinkableHandle<dyn Shape> = RelinkableHandle::empty();
        handle.link_to(Arc::new(Square(1.5)));
        let reader = handle.clone();
        let area = std::thread::spawn(move || reader.with(|s| s.area()))
            .join()
            .unwrap();
        assert_eq!(area, Some(2.25));
    }
}
