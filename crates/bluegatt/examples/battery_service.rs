//! Example demonstrating a battery service
//!
//! This example registers a battery service (callback-sourced level with a
//! client characteristic configuration descriptor) and a fixed-source device
//! name against an in-memory attribute table, then pushes updates and tears
//! everything down. Run with `RUST_LOG=debug` to see the library's logging.

use std::borrow::Cow;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use bluegatt::gatt::constants::{
    BATTERY_LEVEL_UUID, BATTERY_SERVICE_UUID, CLIENT_CHAR_CONFIG_UUID, DEVICE_NAME_UUID,
    GENERIC_ACCESS_SERVICE_UUID,
};
use bluegatt::{
    AccessPermissions, AttributeTable, BleStatus, Characteristic, CharacteristicDescriptor,
    CharacteristicProperties, DataSource, EventMask, GattServer, Handle, SecurityPermissions,
    ServiceType, StaticValue, Uuid, ValueProvider,
};

/// Attribute table keeping everything in memory, standing in for a vendor
/// stack. Handles are assigned sequentially.
#[derive(Default)]
struct InMemoryTable {
    next_handle: Handle,
    attributes: Vec<(Handle, Uuid, Vec<u8>)>,
}

impl InMemoryTable {
    fn assign_handle(&mut self) -> Handle {
        self.next_handle += 2;
        self.next_handle
    }
}

impl AttributeTable for InMemoryTable {
    fn add_service(
        &mut self,
        uuid: Uuid,
        _service_type: ServiceType,
        _max_attribute_records: u8,
    ) -> Result<Handle, BleStatus> {
        let handle = self.assign_handle();
        self.attributes.push((handle, uuid, Vec::new()));
        Ok(handle)
    }

    fn add_characteristic(
        &mut self,
        _service: Handle,
        uuid: Uuid,
        size: u16,
        _properties: CharacteristicProperties,
        _permissions: SecurityPermissions,
        _event_mask: EventMask,
        _min_encryption_key_size: u8,
        _is_variable: bool,
    ) -> Result<Handle, BleStatus> {
        let handle = self.assign_handle();
        self.attributes
            .push((handle, uuid, vec![0; usize::from(size)]));
        Ok(handle)
    }

    fn add_characteristic_descriptor(
        &mut self,
        _service: Handle,
        _characteristic: Handle,
        uuid: Uuid,
        _max_size: u16,
        value: &[u8],
        _permissions: SecurityPermissions,
        _access: AccessPermissions,
        _event_mask: EventMask,
        _min_encryption_key_size: u8,
        _is_variable: bool,
    ) -> Result<Handle, BleStatus> {
        let handle = self.assign_handle();
        self.attributes.push((handle, uuid, value.to_vec()));
        Ok(handle)
    }

    fn update_characteristic_value(
        &mut self,
        _service: Handle,
        characteristic: Handle,
        offset: u16,
        _size: u16,
        value: &[u8],
    ) -> Result<(), BleStatus> {
        let Some((_, _, stored)) = self
            .attributes
            .iter_mut()
            .find(|(handle, _, _)| *handle == characteristic)
        else {
            return Err(BleStatus::INVALID_PARAMS);
        };
        let offset = usize::from(offset);
        if stored.len() < offset + value.len() {
            stored.resize(offset + value.len(), 0);
        }
        stored[offset..offset + value.len()].copy_from_slice(value);
        Ok(())
    }

    fn delete_characteristic(
        &mut self,
        _service: Handle,
        characteristic: Handle,
    ) -> Result<(), BleStatus> {
        self.attributes.retain(|(handle, _, _)| *handle != characteristic);
        Ok(())
    }

    fn delete_service(&mut self, service: Handle) -> Result<(), BleStatus> {
        self.attributes.retain(|(handle, _, _)| *handle != service);
        Ok(())
    }
}

/// Simulated battery that drains by one percent per reading.
struct BatteryLevel(AtomicU8);

impl ValueProvider for BatteryLevel {
    fn size(&self) -> u16 {
        1
    }

    fn value(&self) -> Cow<'_, [u8]> {
        Cow::Owned(vec![self.0.fetch_sub(1, Ordering::Relaxed)])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut server = GattServer::new(InMemoryTable::default());

    // Battery service with a callback-sourced level characteristic
    let battery_service = server
        .add_service(Uuid::from_u16(BATTERY_SERVICE_UUID), ServiceType::Primary, 8)
        .ok_or("battery service rejected")?;
    println!("Added battery service at handle 0x{:04x}", battery_service);

    let battery = Arc::new(BatteryLevel(AtomicU8::new(100)));
    let level = Characteristic {
        name: "Battery Level",
        uuid: Uuid::from_u16(BATTERY_LEVEL_UUID),
        properties: CharacteristicProperties::READ | CharacteristicProperties::NOTIFY,
        permissions: SecurityPermissions::empty(),
        event_mask: EventMask::READ_REQUEST,
        is_variable: false,
        source: DataSource::callback(battery),
        descriptor: Some(CharacteristicDescriptor {
            uuid: Uuid::from_u16(CLIENT_CHAR_CONFIG_UUID),
            max_size: 2,
            permissions: SecurityPermissions::empty(),
            access: AccessPermissions::read_write(),
            event_mask: EventMask::ATTRIBUTE_WRITE,
            is_variable: false,
            source: Arc::new(StaticValue::new(&[0u8, 0][..])),
        }),
    };
    let level = server.add_characteristic(battery_service, &level);
    println!(
        "Added battery level characteristic at handle 0x{:04x} (CCCD at 0x{:04x})",
        level.handle().ok_or("battery level rejected")?,
        level.descriptor_handle().ok_or("CCCD rejected")?
    );

    // Generic access service with a fixed-source device name
    let access_service = server
        .add_service(
            Uuid::from_u16(GENERIC_ACCESS_SERVICE_UUID),
            ServiceType::Primary,
            4,
        )
        .ok_or("generic access service rejected")?;

    let name = Characteristic {
        name: "Device Name",
        uuid: Uuid::from_u16(DEVICE_NAME_UUID),
        properties: CharacteristicProperties::READ,
        permissions: SecurityPermissions::empty(),
        event_mask: EventMask::empty(),
        is_variable: false,
        source: DataSource::fixed(&b"BlueGatt Peripheral"[..]),
        descriptor: None,
    };
    let name = server.add_characteristic(access_service, &name);
    println!(
        "Added device name characteristic at handle 0x{:04x}",
        name.handle().ok_or("device name rejected")?
    );

    // Each update consults the battery afresh
    for _ in 0..3 {
        server
            .update_characteristic(battery_service, &level, None)
            .map_err(|status| format!("battery update rejected: {status}"))?;
    }
    let stored = server
        .table()
        .attributes
        .iter()
        .find(|(handle, _, _)| Some(*handle) == level.handle())
        .expect("battery level attribute");
    println!("Battery level after three updates: {}%", stored.2[0]);

    // Tear down
    server.delete_characteristic(battery_service, level);
    server.delete_characteristic(access_service, name);
    assert!(server.delete_service(battery_service));
    assert!(server.delete_service(access_service));
    println!("Deleted services and characteristics");

    Ok(())
}
