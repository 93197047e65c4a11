//! The four walk patterns. Each one writes through a borrowed [`Emitter`],
//! so a single output stream can span any number of walks.

use std::io::{Sink, Write};

use crate::emitter::Emitter;
use crate::walker::{Visit, VisitMut};
use crate::{Error, Result};

/// Emits every element unchanged.
pub struct Print<'a, W> {
    out: &'a mut Emitter<W>,
}

impl<'a, W: Write> Print<'a, W> {
    pub fn new(out: &'a mut Emitter<W>) -> Self {
        Self { out }
    }
}

impl<W: Write> Visit<i32> for Print<'_, W> {
    fn visit(&mut self, item: i32) {
        self.out.emit_value(item);
    }
}

/// Adds one to every element, then emits it.
pub struct Increment<'a, W> {
    out: &'a mut Emitter<W>,
}

impl<'a, W: Write> Increment<'a, W> {
    pub fn new(out: &'a mut Emitter<W>) -> Self {
        Self { out }
    }
}

impl<W: Write> VisitMut<i32> for Increment<'_, W> {
    fn visit_mut(&mut self, item: &mut i32) {
        add_and_emit(item, 1, self.out);
    }
}

/// Adds a constant fixed at construction to every element, then emits it.
pub struct Add<'a, W> {
    amount: i32,
    out: &'a mut Emitter<W>,
}

impl<'a, W: Write> Add<'a, W> {
    pub fn new(amount: i32, out: &'a mut Emitter<W>) -> Self {
        Self { amount, out }
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }
}

impl<W: Write> VisitMut<i32> for Add<'_, W> {
    fn visit_mut(&mut self, item: &mut i32) {
        add_and_emit(item, self.amount, self.out);
    }
}

/// Adds `amount` to `item` and emits the result. On overflow the element is
/// left as it was and [`Error::Overflow`] is kept in `out`; once `out` has
/// failed, later elements are not touched either.
pub fn add_and_emit<W: Write>(item: &mut i32, amount: i32, out: &mut Emitter<W>) {
    if out.has_failed() {
        return;
    }
    match item.checked_add(amount) {
        Some(value) => {
            *item = value;
            out.emit_value(value);
        }
        None => out.fail(Error::Overflow {
            value: *item,
            amount,
        }),
    }
}

/// Emits every element while keeping a running sum and count.
///
/// The mean only means something once the walk is over, so it is read
/// through [`Mean::mean`] on the visitor that the walk hands back. Cloning
/// before a walk gives two independent accumulators; only the one that was
/// walked sees the elements.
#[derive(Debug)]
pub struct Mean<'a, W = Sink> {
    sum: i64,
    count: usize,
    out: Option<&'a mut Emitter<W>>,
}

impl Mean<'static, Sink> {
    /// An accumulator that prints nothing.
    pub fn detached() -> Self {
        Self {
            sum: 0,
            count: 0,
            out: None,
        }
    }
}

impl<'a, W: Write> Mean<'a, W> {
    pub fn new(out: &'a mut Emitter<W>) -> Self {
        Self {
            sum: 0,
            count: 0,
            out: Some(out),
        }
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `sum / count`, or [`Error::EmptyMean`] if nothing was visited.
    pub fn mean(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(Error::EmptyMean);
        }
        Ok(self.sum as f64 / self.count as f64)
    }

    /// Gives the output back, e.g. to print the mean once the walk is done.
    pub fn into_emitter(self) -> Option<&'a mut Emitter<W>> {
        self.out
    }
}

// A mutable borrow cannot be duplicated, so a clone keeps the counts but
// starts without an output.
impl<'a, W> Clone for Mean<'a, W> {
    fn clone(&self) -> Self {
        Self {
            sum: self.sum,
            count: self.count,
            out: None,
        }
    }
}

impl<W: Write> Visit<i32> for Mean<'_, W> {
    fn visit(&mut self, item: i32) {
        if let Some(out) = self.out.as_mut() {
            out.emit_value(item);
        }
        self.sum += i64::from(item);
        self.count += 1;
    }
}
