//! Core systems for Quadrille.
//!
//! This crate provides the foundational components of the Quadrille grid
//! controller:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Value Model**: JSON-isomorphic dynamic values for cells and properties
//! - **Property Bags**: String-keyed value maps with shallow-merge semantics
//! - **Logging**: `tracing` targets for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use quadrille_core::Signal;
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
//! # Property Bag Example
//!
//! ```
//! use quadrille_core::{PropertyBag, Value};
//!
//! let mut column_props = PropertyBag::new();
//! column_props.set("halign", "right");
//! column_props.set("width", 120);
//!
//! let mut overrides = PropertyBag::new();
//! overrides.set("width", 90);
//!
//! // Shallow merge: "width" is replaced, "halign" survives
//! column_props.merge(&overrides);
//! assert_eq!(column_props.get_int("width"), Some(90));
//! assert_eq!(column_props.get("halign"), Some(&Value::from("right")));
//! ```

pub mod logging;
pub mod property;
pub mod signal;
pub mod value;

pub use property::PropertyBag;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use value::Value;
