//! Small fixed-capacity collection utilities.
//!
//! These back the presentation subsystem, which caps how much data is kept
//! in memory when describing large collections:
//! - `BoundedQueue` - fixed capacity, rejects inserts once full
//! - `RotatingQueue` - fixed capacity, evicts the oldest element once full
//! - `HeadTailAccumulator` - keeps the first N and last M elements added

mod head_tail;
mod queues;

pub use head_tail::HeadTailAccumulator;
pub use queues::{BoundedQueue, QueueError, RotatingQueue};
