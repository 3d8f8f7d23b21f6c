//! GATT attribute lifecycle
//!
//! This module holds the declarative attribute descriptions, the data-source
//! machinery that produces their values, and the server that registers them
//! with the underlying stack and pushes updates.

pub mod characteristic;
pub mod constants;
pub mod server;
pub mod types;


pub use characteristic::{
    Characteristic, CharacteristicDescriptor, CharacteristicInstance, DataSource, StaticValue,
    ValueOverride, ValueProvider,
};
pub use server::GattServer;
pub use types::{
    AccessPermissions, CharacteristicProperties, EventMask, SecurityPermissions, ServiceType,
};
