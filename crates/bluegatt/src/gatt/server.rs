//! GATT server: attribute registration, update and removal
//!
//! [`GattServer`] owns the stack adapter and exposes the five lifecycle
//! operations. Stack rejections are logged and surfaced as return values,
//! never as panics; retry policy belongs entirely to the caller.

use log::{debug, error};

use crate::stack::{AttributeTable, BleStatus, Handle};
use crate::uuid::Uuid;

use super::characteristic::{Characteristic, CharacteristicInstance, ValueOverride};
use super::constants::MIN_ENCRYPTION_KEY_SIZE;
use super::types::ServiceType;

/// Manages GATT attributes on top of an [`AttributeTable`] adapter.
///
/// Operations are synchronous and complete before returning. Nothing here is
/// internally synchronized; confine a server and its instances to the task
/// that owns the stack.
pub struct GattServer<T: AttributeTable> {
    table: T,
}

impl<T: AttributeTable> GattServer<T> {
    pub fn new(table: T) -> Self {
        GattServer { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut T {
        &mut self.table
    }

    pub fn into_table(self) -> T {
        self.table
    }

    /// Add a service declaration.
    ///
    /// Returns the stack-assigned handle that scopes all characteristic
    /// operations under this service, or `None` if the stack rejected the
    /// call (logged with the raw status).
    pub fn add_service(
        &mut self,
        uuid: Uuid,
        service_type: ServiceType,
        max_attribute_records: u8,
    ) -> Option<Handle> {
        match self
            .table
            .add_service(uuid, service_type, max_attribute_records)
        {
            Ok(handle) => {
                debug!("Added service {} at handle 0x{:04x}", uuid, handle);
                Some(handle)
            }
            Err(status) => {
                error!("Failed to add service: {}", status);
                None
            }
        }
    }

    /// Delete a service.
    ///
    /// Returns `true` on success. Instances registered under the service are
    /// not cascade-deleted; their bookkeeping stays with the caller.
    pub fn delete_service(&mut self, service: Handle) -> bool {
        match self.table.delete_service(service) {
            Ok(()) => true,
            Err(status) => {
                error!("Failed to delete service: {}", status);
                false
            }
        }
    }

    /// Register a characteristic under `service`.
    ///
    /// The description is copied into the returned instance, so the caller's
    /// original may be transient. The advertised size comes from the fixed
    /// buffer's length or from one size probe of the callback provider.
    ///
    /// Always returns an instance. If the stack rejects the characteristic,
    /// the failure is logged, the instance's handle is `None`, and no
    /// descriptor attachment is attempted. If the characteristic succeeds
    /// but its descriptor fails, only the descriptor handle is left `None`
    /// (logged independently); the characteristic remains usable.
    pub fn add_characteristic(
        &mut self,
        service: Handle,
        characteristic: &Characteristic,
    ) -> CharacteristicInstance {
        // Copy the description first; the caller's may live on its stack frame.
        let characteristic = Box::new(characteristic.clone());

        let size = characteristic.source.size();
        let handle = match self.table.add_characteristic(
            service,
            characteristic.uuid,
            size,
            characteristic.properties,
            characteristic.permissions,
            characteristic.event_mask,
            MIN_ENCRYPTION_KEY_SIZE,
            characteristic.is_variable,
        ) {
            Ok(handle) => {
                debug!(
                    "Added {} characteristic at handle 0x{:04x}",
                    characteristic.name, handle
                );
                Some(handle)
            }
            Err(status) => {
                error!(
                    "Failed to add {} characteristic: {}",
                    characteristic.name, status
                );
                None
            }
        };

        let mut descriptor_handle = None;
        if let (Some(char_handle), Some(descriptor)) = (handle, characteristic.descriptor.as_ref())
        {
            // Owned provider data drops as soon as the stack call returns.
            let value = descriptor.source.value();
            match self.table.add_characteristic_descriptor(
                service,
                char_handle,
                descriptor.uuid,
                descriptor.max_size,
                &value,
                descriptor.permissions,
                descriptor.access,
                descriptor.event_mask,
                MIN_ENCRYPTION_KEY_SIZE,
                descriptor.is_variable,
            ) {
                Ok(handle) => descriptor_handle = Some(handle),
                Err(status) => {
                    error!(
                        "Failed to add {} characteristic descriptor: {}",
                        characteristic.name, status
                    );
                }
            }
        }

        CharacteristicInstance {
            handle,
            descriptor_handle,
            characteristic,
        }
    }

    /// Push a characteristic's current value to the stack.
    ///
    /// The value is re-resolved on every call: fixed sources publish their
    /// buffer (or the override buffer at the declared length), callback
    /// sources are consulted once per call. On stack rejection the failure
    /// is logged and the status returned so the caller can decide on retry.
    ///
    /// # Panics
    ///
    /// Panics if the instance was never successfully registered; updating an
    /// unregistered characteristic is a caller bug, not a runtime condition.
    pub fn update_characteristic(
        &mut self,
        service: Handle,
        instance: &CharacteristicInstance,
        value_override: Option<ValueOverride<'_>>,
    ) -> Result<(), BleStatus> {
        let handle = instance
            .handle
            .expect("update on a characteristic that was never registered");
        let characteristic = instance.characteristic();
        debug!("Updating {} characteristic", characteristic.name);

        let resolved = characteristic.source.resolve(value_override);
        let result = self.table.update_characteristic_value(
            service,
            handle,
            0,
            resolved.size,
            &resolved.data,
        );
        if let Err(status) = result {
            error!(
                "Failed to update {} characteristic: {}",
                characteristic.name, status
            );
        }
        result
    }

    /// Remove a characteristic from the stack and end the instance.
    ///
    /// Consuming the instance releases its owned description copy exactly
    /// once, even when the stack rejects the deletion. A rejected delete is
    /// logged and may leave the attribute live in the stack's table; this
    /// core still considers the instance's identity ended.
    pub fn delete_characteristic(&mut self, service: Handle, instance: CharacteristicInstance) {
        if let Some(handle) = instance.handle {
            if let Err(status) = self.table.delete_characteristic(service, handle) {
                error!(
                    "Failed to delete {} characteristic: {}",
                    instance.characteristic().name,
                    status
                );
            }
        }
        // The instance (and with it the description copy) drops here.
    }
}
