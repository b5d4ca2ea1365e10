//! Lustre Core Runtime
//!
//! Foundational primitives shared by the Lustre effects crates:
//!
//! - **Events**: Pointer and lifecycle events with a per-surface dispatcher
//! - **Frame Timers**: Fixed-interval tick sources that never block
//! - **Errors**: Shared error types for fallible primitives
//!
//! # Example
//!
//! ```rust
//! use lustre_core::timer::FrameTimer;
//! use std::time::Duration;
//!
//! let mut timer = FrameTimer::default();
//! timer.start();
//!
//! // 40ms of frame time at a 16ms interval yields two ticks
//! assert_eq!(timer.advance(Duration::from_millis(40)), 2);
//! ```

pub mod error;
pub mod events;
pub mod timer;

pub use error::CoreError;
pub use events::{Event, EventData, EventDispatcher, EventType, HandlerId};
pub use timer::{FrameTimer, DEFAULT_TICK_INTERVAL};
