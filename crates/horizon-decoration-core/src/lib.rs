//! Core systems for Horizon Decoration.
//!
//! This crate provides the foundational primitives the decoration crate is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_decoration_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_decoration_core::{Property, Signal};
//!
//! // A toggle with change notification
//! struct Toggle {
//!     checked: Property<bool>,
//!     checked_changed: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_checked(&self, checked: bool) {
//!         if self.checked.set(checked) {
//!             self.checked_changed.emit(checked);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle {
//!     checked: Property::new(false),
//!     checked_changed: Signal::new(),
//! };
//! toggle.set_checked(true);
//! assert!(toggle.checked.get());
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
