//! Value models on both sides of the bridge
//!
//! - `WireValue`: positional tree handed to and from the engine
//! - `HostValue`: dynamic value of the calling system
//! - `HostType` / `RecordDescriptor`: declared decode targets

mod host;
mod wire;

pub use host::{Bytes, FieldDescriptor, HostType, HostValue, RecordDescriptor, RecordValue};
pub use wire::WireValue;
