//! The BLE stack collaborator seam
//!
//! Everything this crate does ends in a call against a vendor BLE stack's
//! attribute table. That stack is not implemented here; it is an opaque
//! service reached through the [`AttributeTable`] trait, reporting each
//! operation's outcome as a raw status code where zero means success.
//!
//! All operations are blocking: each call completes (or is rejected) before
//! it returns, and nothing suspends or runs in the background. Adapters are
//! expected to be driven from the single task that owns the stack.

use crate::gatt::{
    AccessPermissions, CharacteristicProperties, EventMask, SecurityPermissions, ServiceType,
};
use crate::uuid::Uuid;
use std::fmt;

/// Runtime identifier the stack assigns to each attribute it creates.
pub type Handle = u16;

/// Raw status code returned by the stack for every attribute-table
/// operation. Zero is success; everything else is a vendor error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BleStatus(pub u8);

impl BleStatus {
    pub const SUCCESS: BleStatus = BleStatus(0x00);
    pub const FAILED: BleStatus = BleStatus(0x41);
    pub const INVALID_PARAMS: BleStatus = BleStatus(0x42);
    pub const BUSY: BleStatus = BleStatus(0x43);
    pub const NOT_ALLOWED: BleStatus = BleStatus(0x46);
    pub const ERROR: BleStatus = BleStatus(0x47);
    pub const OUT_OF_MEMORY: BleStatus = BleStatus(0x48);
    pub const TIMEOUT: BleStatus = BleStatus(0xFF);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Fold a raw status into a `Result`, keeping the code on failure.
    ///
    /// Meant for adapters wrapping C-style APIs:
    /// `BleStatus(raw).ok().map(|_| handle)`.
    pub fn ok(self) -> Result<(), BleStatus> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for BleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Attribute-table operations offered by the underlying BLE stack.
///
/// `Err` always carries the non-zero status the stack reported. Handles
/// returned from the `add_*` operations scope every later call on the same
/// attribute; the service handle additionally scopes all characteristic and
/// descriptor operations beneath it.
pub trait AttributeTable {
    /// Create a service declaration with room for `max_attribute_records`
    /// attribute records.
    fn add_service(
        &mut self,
        uuid: Uuid,
        service_type: ServiceType,
        max_attribute_records: u8,
    ) -> Result<Handle, BleStatus>;

    /// Create a characteristic under `service`, advertising a value of
    /// `size` bytes.
    #[allow(clippy::too_many_arguments)]
    fn add_characteristic(
        &mut self,
        service: Handle,
        uuid: Uuid,
        size: u16,
        properties: CharacteristicProperties,
        permissions: SecurityPermissions,
        event_mask: EventMask,
        min_encryption_key_size: u8,
        is_variable: bool,
    ) -> Result<Handle, BleStatus>;

    /// Create a characteristic descriptor under `characteristic`, seeded
    /// with `value` (its initial size is the slice length; `max_size` caps
    /// later growth).
    #[allow(clippy::too_many_arguments)]
    fn add_characteristic_descriptor(
        &mut self,
        service: Handle,
        characteristic: Handle,
        uuid: Uuid,
        max_size: u16,
        value: &[u8],
        permissions: SecurityPermissions,
        access: AccessPermissions,
        event_mask: EventMask,
        min_encryption_key_size: u8,
        is_variable: bool,
    ) -> Result<Handle, BleStatus>;

    /// Replace a characteristic's value starting at `offset`.
    ///
    /// `size` is the published value length. It is passed alongside the
    /// slice because the two can legitimately differ: a fixed-length
    /// characteristic updated through an override buffer still publishes its
    /// declared length.
    fn update_characteristic_value(
        &mut self,
        service: Handle,
        characteristic: Handle,
        offset: u16,
        size: u16,
        value: &[u8],
    ) -> Result<(), BleStatus>;

    /// Remove a characteristic (and its descendants) from the table.
    fn delete_characteristic(
        &mut self,
        service: Handle,
        characteristic: Handle,
    ) -> Result<(), BleStatus>;

    /// Remove a service from the table.
    fn delete_service(&mut self, service: Handle) -> Result<(), BleStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_zero_is_success() {
        assert!(BleStatus::SUCCESS.is_success());
        assert!(BleStatus(0).ok().is_ok());
        assert_eq!(BleStatus::FAILED.ok(), Err(BleStatus(0x41)));
    }

    #[test]
    fn status_displays_as_hex() {
        assert_eq!(BleStatus::FAILED.to_string(), "0x41");
        assert_eq!(BleStatus(0x0a).to_string(), "0x0a");
    }
}
