//! Racing Environment Abstraction Layer
//!
//! This crate isolates the one source of non-determinism in a race: the
//! random draw that decides whether a racer moves.
//!
//! # Implementations
//!
//! - **Production**: [`ThreadRngDraw`] - backed by `rand::thread_rng()`
//! - **Testing**: [`ScriptedDraw`] - replays a fixed sequence of values
//!
//! The seeded simulation source lives in `racing_sim`.
//!
//! # Example
//!
//! ```
//! use racing_env::{RandomDraw, ScriptedDraw};
//!
//! let mut draw = ScriptedDraw::new(vec![4, 1]);
//! assert_eq!(draw.draw(9), 4);
//! assert_eq!(draw.draw(9), 1);
//! ```

mod draw;
mod rand_impl;
mod scripted;

pub use draw::RandomDraw;
pub use rand_impl::ThreadRngDraw;
pub use scripted::ScriptedDraw;
