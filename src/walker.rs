//! One ordered pass of a callable over every element of a slice.
//!
//! A closure and a struct are interchangeable here: any `FnMut(T)` is a
//! [`Visit`], any `FnMut(&mut T)` is a [`VisitMut`], and stateful types
//! implement the traits directly. Both walks hand the visitor back so its
//! accumulated state can be read once the pass is over.

use tracing::{debug, trace};

/// Receives each element by value. The walked slice cannot change.
pub trait Visit<T> {
    fn visit(&mut self, item: T);
}

/// Receives each element by mutable reference.
pub trait VisitMut<T> {
    fn visit_mut(&mut self, item: &mut T);
}

impl<T, F> Visit<T> for F
where
    F: FnMut(T),
{
    fn visit(&mut self, item: T) {
        self(item)
    }
}

impl<T, F> VisitMut<T> for F
where
    F: FnMut(&mut T),
{
    fn visit_mut(&mut self, item: &mut T) {
        self(item)
    }
}

/// Calls `visitor` once per element, in index order, and returns it.
pub fn walk<T, V>(sequence: &[T], mut visitor: V) -> V
where
    T: Copy,
    V: Visit<T>,
{
    debug!(len = sequence.len(), "walk");
    for (index, item) in sequence.iter().enumerate() {
        trace!(index, "visit");
        visitor.visit(*item);
    }
    visitor
}

/// Like [`walk`], but each element is lent mutably. A write made for element
/// `i` is already in place when element `i + 1` is visited.
pub fn walk_mut<T, V>(sequence: &mut [T], mut visitor: V) -> V
where
    V: VisitMut<T>,
{
    debug!(len = sequence.len(), "walk_mut");
    for (index, item) in sequence.iter_mut().enumerate() {
        trace!(index, "visit_mut");
        visitor.visit_mut(item);
    }
    visitor
}
