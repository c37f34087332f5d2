/// Capacity-bounded free list for reusable simulation objects.
///
/// `get` hands out an instance by value and `put` takes it back, so an object
/// is owned either by the pool or by the caller's active list, never both.
/// The pool never touches object state; callers re-initialize after `get`.
pub struct ObjectPool<T: Default> {
    free: Vec<T>,
    max_size: usize,
}

impl<T: Default> ObjectPool<T> {
    /// Create a pool holding at most `max_size` instances, pre-filled with
    /// `initial_size` defaulted ones (clamped to `max_size`).
    pub fn new(max_size: usize, initial_size: usize) -> Self {
        let initial = initial_size.min(max_size);
        let mut free = Vec::with_capacity(initial);
        free.resize_with(initial, T::default);
        Self { free, max_size }
    }

    /// Take an instance, reusing a pooled one when available.
    pub fn get(&mut self) -> T {
        self.free.pop().unwrap_or_default()
    }

    /// Return a spent instance. Silently dropped once the pool is full.
    pub fn put(&mut self, obj: T) {
        if self.free.len() < self.max_size {
            self.free.push(obj);
        }
    }

    /// Number of pooled (free) instances.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}
