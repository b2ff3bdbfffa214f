//! Field introspection: bindable slots and descriptor collection

use crate::de;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// A type whose fields can be collected for binding.
///
/// Implemented by `#[derive(EnvCfg)]`. A manual implementation pushes one
/// descriptor per bound field, in declaration order, and splices nested
/// structs in place (see [`collect_into`]).
pub trait EnvCfg {
    /// Append this value's bindable fields to `fields`.
    fn collect_fields<'a>(&'a mut self, fields: &mut Vec<FieldDescriptor<'a>>);
}

/// A value that can sit in a configuration struct.
///
/// The returned [`Slot`] tells the collector whether to recurse into the
/// value or to bind it as a leaf.
pub trait Bindable {
    /// Borrow this value as a typed slot.
    fn slot(&mut self) -> Slot<'_>;
}

/// Mutable handle to a field, tagged by the coercion family of its type.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    Int(IntSlot<'a>),
    Uint(UintSlot<'a>),
    Float(FloatSlot<'a>),
    Str(&'a mut String),
    /// A nested struct; collected recursively, never bound directly.
    Nested(&'a mut dyn EnvCfg),
    /// A type outside the supported set, named by kind.
    Unsupported(&'static str),
}

/// Signed integer slot, one variant per width.
pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
}

/// Unsigned integer slot, one variant per width.
pub enum UintSlot<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
}

/// Floating point slot, one variant per width.
pub enum FloatSlot<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

impl Slot<'_> {
    /// Short name of the slot's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::Int(_) => "signed integer",
            Slot::Uint(_) => "unsigned integer",
            Slot::Float(_) => "float",
            Slot::Str(_) => "string",
            Slot::Nested(_) => "struct",
            Slot::Unsupported(kind) => *kind,
        }
    }

    /// Coerce `value` to the slot's type and write it.
    ///
    /// On error the field keeps its previous value.
    pub fn assign(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Slot::Bool(field) => **field = de::parse_bool(key, value)?,
            Slot::Int(slot) => slot.assign(key, value)?,
            Slot::Uint(slot) => slot.assign(key, value)?,
            Slot::Float(slot) => slot.assign(key, value)?,
            Slot::Str(field) => **field = value.to_string(),
            Slot::Nested(_) => return Err(Error::unsupported(key, "struct")),
            Slot::Unsupported(kind) => return Err(Error::unsupported(key, *kind)),
        }
        Ok(())
    }
}

impl IntSlot<'_> {
    fn assign(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            IntSlot::I8(field) => **field = de::parse_int(key, value)?,
            IntSlot::I16(field) => **field = de::parse_int(key, value)?,
            IntSlot::I32(field) => **field = de::parse_int(key, value)?,
            IntSlot::I64(field) => **field = de::parse_int(key, value)?,
            IntSlot::I128(field) => **field = de::parse_int(key, value)?,
            IntSlot::Isize(field) => **field = de::parse_int(key, value)?,
        }
        Ok(())
    }
}

impl UintSlot<'_> {
    fn assign(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            UintSlot::U8(field) => **field = de::parse_uint(key, value)?,
            UintSlot::U16(field) => **field = de::parse_uint(key, value)?,
            UintSlot::U32(field) => **field = de::parse_uint(key, value)?,
            UintSlot::U64(field) => **field = de::parse_uint(key, value)?,
            UintSlot::U128(field) => **field = de::parse_uint(key, value)?,
            UintSlot::Usize(field) => **field = de::parse_uint(key, value)?,
        }
        Ok(())
    }
}

impl FloatSlot<'_> {
    fn assign(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            FloatSlot::F32(field) => **field = de::parse_float(key, value)?,
            FloatSlot::F64(field) => **field = de::parse_float(key, value)?,
        }
        Ok(())
    }
}

/// A bindable field: its key and a mutable handle to its storage.
///
/// Borrows the target struct, so descriptors live no longer than one load.
pub struct FieldDescriptor<'a> {
    pub key: &'a str,
    pub slot: Slot<'a>,
}

impl std::fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .field("kind", &self.slot.kind())
            .finish()
    }
}

/// Add one struct field to the descriptor list.
///
/// Nested structs are recursed into and their `key` is ignored. Leaves are
/// emitted only when `key` is present and non-empty.
///
/// Used by macro-generated code.
#[doc(hidden)]
pub fn collect_into<'a>(
    slot: Slot<'a>,
    key: Option<&'a str>,
    fields: &mut Vec<FieldDescriptor<'a>>,
) {
    match slot {
        Slot::Nested(inner) => inner.collect_fields(fields),
        slot => {
            if let Some(key) = key.filter(|key| !key.is_empty()) {
                fields.push(FieldDescriptor { key, slot });
            }
        }
    }
}

impl Bindable for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Bindable for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Str(self)
    }
}

macro_rules! bindable_number {
    ($family:ident :: $variant:ident ($slot:ident) => $($ty:ty : $width:ident),+ $(,)?) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    $family::$variant($slot::$width(self))
                }
            }
        )+
    };
}

bindable_number!(Slot::Int(IntSlot) => i8: I8, i16: I16, i32: I32, i64: I64, i128: I128, isize: Isize);
bindable_number!(Slot::Uint(UintSlot) => u8: U8, u16: U16, u32: U32, u64: U64, u128: U128, usize: Usize);
bindable_number!(Slot::Float(FloatSlot) => f32: F32, f64: F64);

macro_rules! bindable_unsupported {
    ($($kind:literal => [$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported($kind)
                }
            }
        )+
    };
}

bindable_unsupported! {
    "char" => [] char,
    "path" => [] PathBuf,
    "duration" => [] Duration,
    "ip address" => [] IpAddr,
    "socket address" => [] SocketAddr,
    "option" => [T] Option<T>,
    "vec" => [T] Vec<T>,
    "box" => [T: ?Sized] Box<T>,
    "array" => [T, const N: usize] [T; N],
    "map" => [K, V, S] HashMap<K, V, S>,
    "map" => [K, V] BTreeMap<K, V>,
}
