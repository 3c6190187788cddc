/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversion traits and call plumbing shared by all generated bindings.

mod call_context;
mod impls;
mod selector;

pub mod error;

pub use call_context::CallContext;
pub use selector::{Overload, Selector, SelectorKind, TypeCheck};

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::ScriptEngine;
use crate::meta::error::{ConvertError, InvocationError};
use crate::value::{ObjectRef, ScriptValue};

/// Signature of every native function reachable from scripts: wrappers, selectors and constructors.
pub type NativeFn = fn(&mut CallContext, &mut ScriptEngine) -> CallResult;

pub type CallResult = Result<ScriptValue, InvocationError>;

/// Handle form of a native class: script handles created from it keep pointing at the same native value.
pub type Shared<T> = Rc<RefCell<T>>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion traits

/// Conversion of a native value into a script value.
pub trait ToScript {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue;

    /// Read-only form of [`to_script()`][Self::to_script]. Same as `to_script()` for primitives, since those are copied anyway.
    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        self.to_script(engine)
    }
}

/// Conversion of a script value into a native value.
pub trait FromScript: Sized {
    fn from_script(value: &ScriptValue) -> Result<Self, ConvertError>;
}

/// Runtime type test, used by overload selectors to match arguments against parameter types.
pub trait ScriptType {
    fn is_of_type(value: &ScriptValue) -> bool;
}

/// Marshalling contract of a native class exposed to scripts. Implemented by generated code.
pub trait ScriptClass: Clone + Default + 'static {
    /// Name under which the constructor is published on the global object.
    const CLASS_NAME: &'static str;

    /// Writes the public state of `value` onto an existing handle.
    fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef);

    /// Creates a new mutable handle holding `value`.
    fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue;

    /// Creates a read-only snapshot of `value`, converting nested class fields recursively.
    fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue;

    /// Reads the public state of a handle into `out`.
    fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result<(), ConvertError>;

    /// Installs prototype and constructor in `engine` and publishes the constructor under [`CLASS_NAME`][Self::CLASS_NAME].
    fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue;
}

/// [`FromScript`] for class types: starts from the default value and reads the handle into it.
pub fn from_script_class<T: ScriptClass>(value: &ScriptValue) -> Result<T, ConvertError> {
    let mut out = T::default();
    T::from_script_value(value, &mut out)?;
    Ok(out)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Shared<T>

impl<T: ScriptClass> ToScript for Shared<T> {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        let value = T::to_script_value(engine, &self.borrow());

        if let Some(handle) = value.as_object() {
            if let Some(prototype) = engine.default_prototype::<Shared<T>>() {
                handle.set_prototype(Some(prototype));
            }
            handle.set_data(Rc::clone(self));
        }

        value
    }
}

impl<T: ScriptClass> FromScript for Shared<T> {
    /// Handles created from a `Shared<T>` yield the original pointer, updated with the handle's current properties.
    fn from_script(value: &ScriptValue) -> Result<Self, ConvertError> {
        let existing = value.as_object().and_then(|obj| obj.data::<Shared<T>>());

        match existing {
            Some(shared) => {
                let mut updated = shared.borrow().clone();
                T::from_script_value(value, &mut updated)?;
                *shared.borrow_mut() = updated;
                Ok(shared)
            }
            None => from_script_class::<T>(value).map(|v| Rc::new(RefCell::new(v))),
        }
    }
}

impl<T: ScriptClass> ScriptType for Shared<T> {
    fn is_of_type(value: &ScriptValue) -> bool {
        value.is_instance_of::<T>()
    }
}
