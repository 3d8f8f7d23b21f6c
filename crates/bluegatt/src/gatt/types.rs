//! Common types for GATT attribute descriptions
//!
//! Bit fields here carry the values the stack expects on the wire, so they
//! pass straight through the [`AttributeTable`](crate::stack::AttributeTable)
//! seam without translation.

use bitflags::bitflags;

bitflags! {
    /// Characteristic properties as defined in the Bluetooth specification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharacteristicProperties: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharacteristicProperties {
    pub fn can_read(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_write(&self) -> bool {
        self.contains(Self::WRITE)
    }

    pub fn can_notify(&self) -> bool {
        self.contains(Self::NOTIFY)
    }

    pub fn can_indicate(&self) -> bool {
        self.contains(Self::INDICATE)
    }
}

bitflags! {
    /// Security requirements an attribute imposes on reads and writes.
    ///
    /// `empty()` means the attribute is accessible without pairing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SecurityPermissions: u8 {
        const AUTHENTICATED_READ = 0x01;
        const AUTHORIZED_READ = 0x02;
        const ENCRYPTED_READ = 0x04;
        const AUTHENTICATED_WRITE = 0x08;
        const AUTHORIZED_WRITE = 0x10;
        const ENCRYPTED_WRITE = 0x20;
    }
}

bitflags! {
    /// Access modes a characteristic descriptor grants to clients.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessPermissions: u8 {
        const READ = 0x01;
        const WRITE_REQUEST = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const SIGNED_WRITE = 0x08;
    }
}

impl AccessPermissions {
    pub fn read_write() -> Self {
        Self::READ | Self::WRITE_REQUEST
    }
}

bitflags! {
    /// GATT events the stack forwards to the application for an attribute.
    ///
    /// `empty()` tells the stack not to notify anything.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventMask: u8 {
        /// Notify after a client write has been applied.
        const ATTRIBUTE_WRITE = 0x01;
        /// Forward write requests and wait for the application's response.
        const WRITE_REQUEST = 0x02;
        /// Forward read requests and wait for the application's response.
        const READ_REQUEST = 0x04;
    }
}

/// Service declaration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Primary,
    Secondary,
}

impl ServiceType {
    /// On-wire value the stack expects.
    pub fn value(self) -> u8 {
        match self {
            ServiceType::Primary => 0x01,
            ServiceType::Secondary => 0x02,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_bits_match_the_specification() {
        assert_eq!(CharacteristicProperties::READ.bits(), 0x02);
        assert_eq!(CharacteristicProperties::NOTIFY.bits(), 0x10);
        let props = CharacteristicProperties::READ | CharacteristicProperties::NOTIFY;
        assert!(props.can_read());
        assert!(props.can_notify());
        assert!(!props.can_write());
    }

    #[test]
    fn service_type_values() {
        assert_eq!(ServiceType::Primary.value(), 0x01);
        assert_eq!(ServiceType::Secondary.value(), 0x02);
    }

    #[test]
    fn empty_event_mask_means_no_notifications() {
        assert_eq!(EventMask::empty().bits(), 0x00);
    }
}
