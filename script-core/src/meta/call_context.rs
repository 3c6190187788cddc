/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::engine::ScriptEngine;
use crate::meta::error::InvocationError;
use crate::meta::{FromScript, ScriptClass};
use crate::value::ScriptValue;

/// Receiver and arguments of one native call, as seen by a generated wrapper.
///
/// The `*_as()` helpers convert and attribute failures to the calling function, so wrappers can use `?` throughout.
#[derive(Debug)]
pub struct CallContext {
    this: ScriptValue,
    args: Vec<ScriptValue>,
    backtrace: Vec<String>,
    is_construct_call: bool,
}

impl CallContext {
    pub fn new(
        this: ScriptValue,
        args: Vec<ScriptValue>,
        backtrace: Vec<String>,
        is_construct_call: bool,
    ) -> Self {
        Self {
            this,
            args,
            backtrace,
            is_construct_call,
        }
    }

    pub fn argument_count(&self) -> usize {
        self.args.len()
    }

    /// Positional argument; `Undefined` if out of range.
    pub fn argument(&self, index: usize) -> ScriptValue {
        self.args.get(index).cloned().unwrap_or_default()
    }

    pub fn arguments(&self) -> &[ScriptValue] {
        &self.args
    }

    pub fn this_object(&self) -> &ScriptValue {
        &self.this
    }

    /// Call stack of the engine when this call started, innermost frame first.
    pub fn backtrace(&self) -> &[String] {
        &self.backtrace
    }

    pub fn is_construct_call(&self) -> bool {
        self.is_construct_call
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Helpers for generated code

    pub fn check_arg_count(&self, function_name: &str, expected: usize) -> Result<(), InvocationError> {
        InvocationError::check_arg_count(function_name, self.args.len(), expected)
    }

    pub fn argument_as<T: FromScript>(&self, function_name: &str, index: usize) -> Result<T, InvocationError> {
        let value = self.argument(index);
        T::from_script(&value)
            .map_err(|e| InvocationError::failed_param_conversion::<T>(function_name, index, e))
    }

    /// Reconstructs the native receiver from `this`.
    pub fn this_as<T: ScriptClass>(&self, function_name: &str) -> Result<T, InvocationError> {
        Self::receiver_from::<T>(&self.this, function_name)
    }

    /// Like [`this_as()`][Self::this_as], but prefers argument 0 if present.
    ///
    /// Some hosts call the built-in `toString` with the receiver as first argument rather than as `this`.
    pub fn this_or_first_argument_as<T: ScriptClass>(&self, function_name: &str) -> Result<T, InvocationError> {
        match self.args.first() {
            Some(first) => Self::receiver_from::<T>(first, function_name),
            None => self.this_as::<T>(function_name),
        }
    }

    /// Propagates a mutated receiver back onto the `this` handle.
    ///
    /// Only mutable handles are updated; const snapshots and non-handle receivers are left untouched.
    pub fn write_back<T: ScriptClass>(&self, engine: &mut ScriptEngine, value: &T) {
        if let Some(handle) = self.this.as_object().filter(|obj| obj.is_mutable()) {
            T::to_existing_script_value(engine, value, handle);
        }
    }

    fn receiver_from<T: ScriptClass>(value: &ScriptValue, function_name: &str) -> Result<T, InvocationError> {
        let mut receiver = T::default();
        T::from_script_value(value, &mut receiver)
            .map_err(|e| InvocationError::failed_this_conversion(function_name, T::CLASS_NAME, e))?;

        Ok(receiver)
    }
}
