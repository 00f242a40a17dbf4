//! Grid search.
//!
//! Responsibilities:
//!
//! - generate the candidate values of each axis
//! - adapt model objectives to a uniform `Evaluation` interface
//! - scan the grid (sequentially or on the rayon pool) for the best admissible point
//!
//! Grid search is exhaustive and deterministic: the same inputs always give the
//! same maximizer, and ties resolve to the first point in row-major order.

pub mod axis;
pub mod line;
pub mod maximizer;
pub mod objective;

pub use axis::*;
pub use line::*;
pub use maximizer::*;
pub use objective::*;
