use crate::prelude::*;
use parking_lot::Mutex as RegistryLock;

/// Identifies a registration, returned when a listener is added.
pub(crate) type ListenerId = u64;

struct Registration<L: ?Sized> {
    id: ListenerId,
    listener: Arc<L>,
}

/// Ordered set of listeners, unique by reference identity. Insertion order is
/// notification order.
///
/// Mutation and [`ListenerRegistry::snapshot`] are mutually exclusive, and
/// listeners are always invoked on a snapshot, never under the lock, so a
/// listener may add or remove listeners while being notified.
pub(crate) struct ListenerRegistry<L: ?Sized> {
    inner: RegistryLock<RegistryInner<L>>,
}

struct RegistryInner<L: ?Sized> {
    next_id: ListenerId,
    registrations: Vec<Registration<L>>,
}

/// Pointer identity of the listener, ignoring any vtable.
fn same_listener<L: ?Sized>(lhs: &Arc<L>, rhs: &Arc<L>) -> bool {
    std::ptr::eq(Arc::as_ptr(lhs) as *const (), Arc::as_ptr(rhs) as *const ())
}

impl<L: ?Sized> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self {
            inner: RegistryLock::new(RegistryInner {
                next_id: 1,
                registrations: Vec::new(),
            }),
        }
    }
}

impl<L: ?Sized> ListenerRegistry<L> {
    /// Appends `listener`, unless that very listener is already registered in
    /// which case its existing id is returned and nothing changes.
    pub(crate) fn add(&self, listener: Arc<L>) -> ListenerId {
        let mut inner = self.inner.lock();
        if let Some(existing) = inner
            .registrations
            .iter()
            .find(|r| same_listener(&r.listener, &listener))
        {
            return existing.id;
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.registrations.push(Registration { id, listener });
        id
    }

    /// Removes `listener` by reference, `false` if it was not registered.
    pub(crate) fn remove(&self, listener: &Arc<L>) -> bool {
        self.remove_where(|r| same_listener(&r.listener, listener))
    }

    /// Removes the registration with `id`, `false` if there is none.
    pub(crate) fn remove_by_id(&self, id: ListenerId) -> bool {
        self.remove_where(|r| r.id == id)
    }

    fn remove_where(&self, predicate: impl Fn(&Registration<L>) -> bool) -> bool {
        let mut inner = self.inner.lock();
        match inner.registrations.iter().position(predicate) {
            Some(index) => {
                inner.registrations.remove(index);
                true
            }
            None => false,
        }
    }

    /// The currently registered listeners, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Arc<L>> {
        self.inner
            .lock()
            .registrations
            .iter()
            .map(|r| r.listener.clone())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().registrations.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
