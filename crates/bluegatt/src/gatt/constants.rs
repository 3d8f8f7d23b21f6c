//! GATT constants

/// Minimum encryption key size demanded for every attribute this crate
/// creates, passed through to the stack on each add operation.
pub const MIN_ENCRYPTION_KEY_SIZE: u8 = 10;

// Descriptor UUIDs
pub const CHAR_EXTENDED_PROPERTIES_UUID: u16 = 0x2900;
pub const CHAR_USER_DESCRIPTION_UUID: u16 = 0x2901;
pub const CLIENT_CHAR_CONFIG_UUID: u16 = 0x2902;
pub const SERVER_CHAR_CONFIG_UUID: u16 = 0x2903;
pub const CHAR_PRESENTATION_FORMAT_UUID: u16 = 0x2904;

// Well-known service UUIDs
pub const GENERIC_ACCESS_SERVICE_UUID: u16 = 0x1800;
pub const GENERIC_ATTRIBUTE_SERVICE_UUID: u16 = 0x1801;
pub const DEVICE_INFORMATION_SERVICE_UUID: u16 = 0x180A;
pub const BATTERY_SERVICE_UUID: u16 = 0x180F;

// Well-known characteristic UUIDs
pub const DEVICE_NAME_UUID: u16 = 0x2A00;
pub const APPEARANCE_UUID: u16 = 0x2A01;
pub const BATTERY_LEVEL_UUID: u16 = 0x2A19;
pub const MODEL_NUMBER_UUID: u16 = 0x2A24;
pub const FIRMWARE_REVISION_UUID: u16 = 0x2A26;
pub const SOFTWARE_REVISION_UUID: u16 = 0x2A28;
pub const MANUFACTURER_NAME_UUID: u16 = 0x2A29;
