/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Dynamic values and object handles.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::rc::Rc;

use crate::meta::error::{ConvertError, PropertyError};
use crate::meta::{FromScript, NativeFn};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// ScriptValue

/// Dynamically typed value crossing the native/script boundary.
///
/// Primitives are stored inline; objects are shared by reference, so cloning a `ScriptValue::Object` clones the handle, not the object.
#[derive(Clone, Default)]
pub enum ScriptValue {
    #[default]
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    Object(ObjectRef),
}

impl ScriptValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Name of the dynamic type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(obj) if obj.native_fn().is_some() => "function",
            Self::Object(obj) => obj.native_type_name().unwrap_or("object"),
        }
    }

    /// Whether this is a handle created for the native type `T`.
    pub fn is_instance_of<T: 'static>(&self) -> bool {
        self.as_object()
            .is_some_and(|obj| obj.native_type_id() == Some(TypeId::of::<T>()))
    }

    /// Looks up `name` on an object value (walking the prototype chain). Non-objects have no properties.
    pub fn property(&self, name: &str) -> ScriptValue {
        self.as_object()
            .map(|obj| obj.property(name))
            .unwrap_or_default()
    }
}

impl PartialEq for ScriptValue {
    /// Primitives compare by value, objects by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Object(obj) => write!(f, "{obj:?}"),
        }
    }
}

macro_rules! impl_from_number {
    ($($T:ty),+) => {
        $(
            impl From<$T> for ScriptValue {
                fn from(value: $T) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(i32, u32, f32, f64);

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ObjectRef> for ScriptValue {
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Property flags

/// Attributes of an object property.
///
/// `READ_ONLY` properties refuse script-side writes, `UNDELETABLE` properties refuse deletion. Host-side
/// [`ObjectRef::define_property()`] is not restricted by either.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct PropertyFlags(u8);

impl PropertyFlags {
    pub const NONE: Self = Self(0);
    pub const READ_ONLY: Self = Self(1 << 0);
    pub const UNDELETABLE: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_read_only(self) -> bool {
        self.contains(Self::READ_ONLY)
    }

    pub fn is_undeletable(self) -> bool {
        self.contains(Self::UNDELETABLE)
    }
}

impl BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PropertyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.is_read_only() {
            names.push("READ_ONLY");
        }
        if self.is_undeletable() {
            names.push("UNDELETABLE");
        }

        if names.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Objects

/// How a marshalled native value is held by its handle.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HandleKind {
    /// Calls through the handle write their mutations back onto it.
    Mutable,

    /// Read-only recursive copy; its properties are `READ_ONLY | UNDELETABLE`.
    ConstSnapshot,
}

#[derive(Copy, Clone)]
pub(crate) enum ObjectKind {
    Plain,
    Handle(HandleKind),
    Function(NativeFn),
}

#[derive(Clone, Debug)]
struct Property {
    value: ScriptValue,
    flags: PropertyFlags,
}

#[derive(Copy, Clone)]
struct NativeType {
    id: TypeId,
    name: &'static str,
}

/// Object storage. Only reachable through [`ObjectRef`].
pub struct ScriptObject {
    kind: ObjectKind,
    properties: BTreeMap<String, Property>,
    prototype: Option<ObjectRef>,
    native_type: Option<NativeType>,
    payloads: Vec<Rc<dyn Any>>,
}

/// Shared handle to a script object.
///
/// Cloning yields another handle to the same object; equality is identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<ScriptObject>>);

impl ObjectRef {
    pub(crate) fn new(kind: ObjectKind) -> Self {
        let object = ScriptObject {
            kind,
            properties: BTreeMap::new(),
            prototype: None,
            native_type: None,
            payloads: Vec::new(),
        };

        Self(Rc::new(RefCell::new(object)))
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn handle_kind(&self) -> Option<HandleKind> {
        match self.0.borrow().kind {
            ObjectKind::Handle(kind) => Some(kind),
            _ => None,
        }
    }

    /// True for handles whose native value may be updated after a mutating call.
    pub fn is_mutable(&self) -> bool {
        self.handle_kind() == Some(HandleKind::Mutable)
    }

    pub fn native_fn(&self) -> Option<NativeFn> {
        match self.0.borrow().kind {
            ObjectKind::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn native_type_id(&self) -> Option<TypeId> {
        self.0.borrow().native_type.map(|ty| ty.id)
    }

    pub fn native_type_name(&self) -> Option<&'static str> {
        self.0.borrow().native_type.map(|ty| ty.name)
    }

    pub(crate) fn set_native_type<T: 'static>(&self) {
        self.0.borrow_mut().native_type = Some(NativeType {
            id: TypeId::of::<T>(),
            name: short_type_name::<T>(),
        });
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Properties

    /// Host-side definition: creates or overwrites `name`, regardless of existing flags.
    pub fn define_property(&self, name: &str, value: impl Into<ScriptValue>, flags: PropertyFlags) {
        let property = Property {
            value: value.into(),
            flags,
        };

        self.0.borrow_mut().properties.insert(name.to_owned(), property);
    }

    /// Script-side assignment. Refuses to overwrite a read-only own property.
    pub fn put(&self, name: &str, value: impl Into<ScriptValue>) -> Result<(), PropertyError> {
        let mut object = self.0.borrow_mut();

        match object.properties.get_mut(name) {
            Some(property) if property.flags.is_read_only() => {
                Err(PropertyError::ReadOnly(name.to_owned()))
            }
            Some(property) => {
                property.value = value.into();
                Ok(())
            }
            None => {
                let property = Property {
                    value: value.into(),
                    flags: PropertyFlags::NONE,
                };
                object.properties.insert(name.to_owned(), property);
                Ok(())
            }
        }
    }

    /// Script-side deletion. Deleting a missing property succeeds.
    pub fn delete(&self, name: &str) -> Result<(), PropertyError> {
        let mut object = self.0.borrow_mut();

        match object.properties.get(name) {
            Some(property) if property.flags.is_undeletable() => {
                Err(PropertyError::Undeletable(name.to_owned()))
            }
            Some(_) => {
                object.properties.remove(name);
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub fn own_property(&self, name: &str) -> Option<ScriptValue> {
        self.0
            .borrow()
            .properties
            .get(name)
            .map(|property| property.value.clone())
    }

    pub fn property_flags(&self, name: &str) -> Option<PropertyFlags> {
        self.0
            .borrow()
            .properties
            .get(name)
            .map(|property| property.flags)
    }

    /// Names of own properties, sorted.
    pub fn property_names(&self) -> Vec<String> {
        self.0.borrow().properties.keys().cloned().collect()
    }

    /// Looks up `name` on this object, then along the prototype chain. Missing properties are `Undefined`.
    pub fn property(&self, name: &str) -> ScriptValue {
        let mut current = Some(self.clone());

        while let Some(object) = current {
            if let Some(value) = object.own_property(name) {
                return value;
            }
            current = object.prototype();
        }

        ScriptValue::Undefined
    }

    /// Reads `name` and converts it, attributing a failure to that property.
    pub fn property_as<T: FromScript>(&self, name: &str) -> Result<T, ConvertError> {
        let value = self.property(name);
        T::from_script(&value).map_err(|e| e.in_property(name))
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.0.borrow().prototype.clone()
    }

    pub fn set_prototype(&self, prototype: Option<ObjectRef>) {
        self.0.borrow_mut().prototype = prototype;
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Opaque payloads

    /// Attaches a native value to the object. A payload of the same type is replaced.
    pub fn set_data<T: 'static>(&self, value: T) {
        let mut object = self.0.borrow_mut();
        object.payloads.retain(|payload| !payload.is::<T>());
        object.payloads.push(Rc::new(value));
    }

    /// Returns a copy of the attached payload of type `T`, if any.
    pub fn data<T: Clone + 'static>(&self) -> Option<T> {
        self.0
            .borrow()
            .payloads
            .iter()
            .find_map(|payload| payload.downcast_ref::<T>())
            .cloned()
    }

    pub fn has_data<T: 'static>(&self) -> bool {
        self.0.borrow().payloads.iter().any(|payload| payload.is::<T>())
    }
}

impl fmt::Debug for ObjectRef {
    // Properties are not printed; constructor and prototype objects would make this recurse deeply.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = self.0.borrow();
        let kind = match object.kind {
            ObjectKind::Plain => "object",
            ObjectKind::Handle(HandleKind::Mutable) => "handle",
            ObjectKind::Handle(HandleKind::ConstSnapshot) => "const-handle",
            ObjectKind::Function(_) => "function",
        };

        match object.native_type {
            Some(ty) => write!(f, "[{kind} {}]", ty.name),
            None => write!(f, "[{kind}]"),
        }
    }
}

/// `std::any::type_name()` without the module path, e.g. `Vector3` instead of `my_crate::math::Vector3`.
fn short_type_name<T: 'static>() -> &'static str {
    let full = std::any::type_name::<T>();

    // Generic types keep their full name; stripping the prefix would cut inside the argument list.
    if full.contains('<') {
        return full;
    }

    full.rsplit("::").next().unwrap_or(full)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
