//! BlueGatt - GATT attribute lifecycle management for BLE peripherals
//!
//! This library translates declarative descriptions of GATT services,
//! characteristics and characteristic descriptors into operations against an
//! underlying BLE stack's attribute table, tracks the handles the stack
//! assigns, and mediates how attribute values are produced (fixed buffer vs.
//! on-demand callback) and pushed to the stack on update.
//!
//! The stack itself is an external collaborator behind the
//! [`AttributeTable`] trait; connection management, advertising and security
//! negotiation all live on that side of the seam.

pub mod gatt;
pub mod stack;
pub mod uuid;

// Re-export common types for convenience
pub use gatt::{
    AccessPermissions, Characteristic, CharacteristicDescriptor, CharacteristicInstance,
    CharacteristicProperties, DataSource, EventMask, GattServer, SecurityPermissions, ServiceType,
    StaticValue, ValueOverride, ValueProvider,
};
pub use stack::{AttributeTable, BleStatus, Handle};
pub use uuid::{Uuid, UuidParseError};
