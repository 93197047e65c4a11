pub mod emitter;
pub mod error;
pub mod runner;
pub mod sequence;
pub mod tracer;
pub mod visitors;
pub mod walker;

pub use error::{Error, Result};
pub use sequence::Sequence;
pub use walker::{Visit, VisitMut, walk, walk_mut};
