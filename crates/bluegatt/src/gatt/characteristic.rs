//! Characteristic and descriptor descriptions, and value resolution
//!
//! Callers author immutable descriptions of their characteristics; the
//! server in [`super::server`] turns each one into a registered
//! [`CharacteristicInstance`] that owns a private copy of the description
//! for as long as the attribute exists in the stack's table.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::stack::Handle;
use crate::uuid::Uuid;

use super::types::{
    AccessPermissions, CharacteristicProperties, EventMask, SecurityPermissions,
};

/// Produces attribute values on demand.
///
/// The size probe is a separate operation so a provider is never asked for
/// data and size through one ambiguous call: `size` must report the current
/// value length without materializing anything, and `value` must return the
/// bytes to publish. Returning `Cow::Owned` hands the buffer to the caller,
/// which drops it once the stack call has consumed it; `Cow::Borrowed` data
/// is left alone.
pub trait ValueProvider: Send + Sync {
    /// Byte length of the current value, without materializing it.
    fn size(&self) -> u16;

    /// The current value.
    fn value(&self) -> Cow<'_, [u8]>;
}

/// [`ValueProvider`] over a caller-supplied buffer that never changes.
///
/// Useful for descriptors such as user-description strings or a client
/// characteristic configuration seeded with `[0, 0]`.
pub struct StaticValue(Arc<[u8]>);

impl StaticValue {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        StaticValue(data.into())
    }
}

impl ValueProvider for StaticValue {
    fn size(&self) -> u16 {
        value_size(&self.0)
    }

    fn value(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.0)
    }
}

/// Where a characteristic's bytes come from.
#[derive(Clone)]
pub enum DataSource {
    /// A caller-owned buffer published as-is. Its length is the
    /// characteristic's declared value length; the core never copies or
    /// frees the buffer itself.
    Fixed(Arc<[u8]>),
    /// A provider consulted at registration (size probe) and again on every
    /// update.
    Callback(Arc<dyn ValueProvider>),
}

impl DataSource {
    pub fn fixed(data: impl Into<Arc<[u8]>>) -> Self {
        DataSource::Fixed(data.into())
    }

    pub fn callback(provider: Arc<dyn ValueProvider>) -> Self {
        DataSource::Callback(provider)
    }

    /// Size to advertise at registration, without materializing callback
    /// data.
    pub fn size(&self) -> u16 {
        match self {
            DataSource::Fixed(data) => value_size(data),
            DataSource::Callback(provider) => provider.size(),
        }
    }

    /// Resolve the bytes and size to publish right now.
    ///
    /// Run on every update; callback values are expected to change between
    /// calls, so nothing is cached. For fixed sources an override swaps the
    /// buffer but never the declared length.
    pub(crate) fn resolve<'a>(
        &'a self,
        value_override: Option<ValueOverride<'a>>,
    ) -> ResolvedValue<'a> {
        match (self, value_override) {
            (DataSource::Fixed(data), None) => ResolvedValue {
                size: value_size(data),
                data: Cow::Borrowed(&data[..]),
            },
            (DataSource::Fixed(data), Some(ValueOverride::Buffer(buffer))) => ResolvedValue {
                size: value_size(data),
                data: Cow::Borrowed(buffer),
            },
            (DataSource::Callback(provider), None) => {
                let data = provider.value();
                ResolvedValue {
                    size: value_size(&data),
                    data,
                }
            }
            (DataSource::Callback(_), Some(ValueOverride::Provider(provider))) => {
                let data = provider.value();
                ResolvedValue {
                    size: value_size(&data),
                    data,
                }
            }
            (DataSource::Fixed(..), Some(ValueOverride::Provider(_)))
            | (DataSource::Callback(_), Some(ValueOverride::Buffer(_))) => {
                panic!("value override kind does not match the characteristic's data source")
            }
        }
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Fixed(data) => f.debug_tuple("Fixed").field(&data.len()).finish(),
            DataSource::Callback(_) => f.write_str("Callback"),
        }
    }
}

/// Alternate value source for a single update call.
///
/// The kind must match the characteristic's [`DataSource`]: a buffer for
/// fixed sources, a provider for callback sources. Passing the wrong kind is
/// a caller bug and panics.
#[derive(Clone, Copy)]
pub enum ValueOverride<'a> {
    /// Publish this buffer instead of the fixed source's own.
    Buffer(&'a [u8]),
    /// Consult this provider instead of the characteristic's own.
    Provider(&'a dyn ValueProvider),
}

/// Outcome of value resolution: the bytes to hand to the stack and the size
/// to publish alongside them.
pub(crate) struct ResolvedValue<'a> {
    pub data: Cow<'a, [u8]>,
    pub size: u16,
}

fn value_size(data: &[u8]) -> u16 {
    u16::try_from(data.len()).expect("attribute value exceeds 65535 bytes")
}

/// Immutable description of a characteristic, authored by the caller.
///
/// Registration clones the description, so it may live anywhere, including
/// the caller's stack frame.
#[derive(Debug, Clone)]
pub struct Characteristic {
    /// Human-readable name, used in diagnostics only.
    pub name: &'static str,
    pub uuid: Uuid,
    pub properties: CharacteristicProperties,
    pub permissions: SecurityPermissions,
    /// GATT events the stack should forward for this attribute.
    pub event_mask: EventMask,
    /// Whether the attribute value may vary in length.
    pub is_variable: bool,
    pub source: DataSource,
    /// Optional descriptor attached beneath this characteristic.
    pub descriptor: Option<CharacteristicDescriptor>,
}

/// Immutable description of a characteristic descriptor.
///
/// Descriptor values are always produced by a provider; there is no fixed
/// variant at this level.
#[derive(Clone)]
pub struct CharacteristicDescriptor {
    pub uuid: Uuid,
    /// Upper bound on the descriptor value length.
    pub max_size: u16,
    pub permissions: SecurityPermissions,
    pub access: AccessPermissions,
    pub event_mask: EventMask,
    pub is_variable: bool,
    pub source: Arc<dyn ValueProvider>,
}

impl fmt::Debug for CharacteristicDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacteristicDescriptor")
            .field("uuid", &self.uuid)
            .field("max_size", &self.max_size)
            .field("permissions", &self.permissions)
            .field("access", &self.access)
            .field("event_mask", &self.event_mask)
            .field("is_variable", &self.is_variable)
            .finish_non_exhaustive()
    }
}

/// A characteristic registered with the stack.
///
/// Owns the description copy for its whole lifetime; deleting the
/// characteristic consumes the instance and releases the copy exactly once.
/// Handles are `None` when the corresponding stack creation failed or was
/// never attempted.
#[derive(Debug)]
pub struct CharacteristicInstance {
    pub(crate) handle: Option<Handle>,
    pub(crate) descriptor_handle: Option<Handle>,
    pub(crate) characteristic: Box<Characteristic>,
}

impl CharacteristicInstance {
    /// Handle of the characteristic value attribute, if registration
    /// succeeded.
    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    /// Handle of the attached descriptor, if one was described and its
    /// creation succeeded.
    pub fn descriptor_handle(&self) -> Option<Handle> {
        self.descriptor_handle
    }

    /// The instance's own copy of the description.
    pub fn characteristic(&self) -> &Characteristic {
        &self.characteristic
    }

    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }
}
