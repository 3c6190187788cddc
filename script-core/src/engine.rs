/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Host side of the runtime: owns globals, prototypes and the call stack.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use crate::meta::error::InvocationError;
use crate::meta::{CallContext, CallResult, NativeFn};
use crate::value::{HandleKind, ObjectKind, ObjectRef, PropertyFlags, ScriptValue};

/// Numeric id assigned to each native type the first time it is marshalled or registered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MetaTypeId(i32);

impl MetaTypeId {
    /// Ids below this are reserved for built-in types.
    pub const FIRST_USER: i32 = 1024;

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MetaTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MetaTypeId> for ScriptValue {
    fn from(id: MetaTypeId) -> Self {
        ScriptValue::Number(id.0 as f64)
    }
}

/// Single-threaded host for generated bindings.
///
/// Calls from the host go through [`call()`][Self::call], [`construct()`][Self::construct] or [`invoke_method()`][Self::invoke_method].
/// Each pushes a frame onto the call stack, which failing selectors report as backtrace. Failed calls are logged at error level
/// (unless disabled with [`set_error_reporting()`][Self::set_error_reporting]) and returned to the caller.
pub struct ScriptEngine {
    global: ObjectRef,
    default_prototypes: HashMap<TypeId, ObjectRef>,
    meta_types: HashMap<TypeId, MetaTypeId>,
    call_stack: Vec<String>,
    report_errors: bool,
}

impl ScriptEngine {
    pub fn new() -> Self {
        Self {
            global: ObjectRef::new(ObjectKind::Plain),
            default_prototypes: HashMap::new(),
            meta_types: HashMap::new(),
            call_stack: Vec::new(),
            report_errors: true,
        }
    }

    pub fn global_object(&self) -> ObjectRef {
        self.global.clone()
    }

    /// Property of the global object, e.g. a registered constructor.
    pub fn global(&self, name: &str) -> ScriptValue {
        self.global.property(name)
    }

    pub fn set_error_reporting(&mut self, enabled: bool) {
        self.report_errors = enabled;
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Types and prototypes

    /// Returns the id of `T`, registering it on first use.
    pub fn meta_type_id<T: 'static>(&mut self) -> MetaTypeId {
        let next = MetaTypeId(MetaTypeId::FIRST_USER + self.meta_types.len() as i32);
        *self.meta_types.entry(TypeId::of::<T>()).or_insert(next)
    }

    pub fn set_default_prototype<T: 'static>(&mut self, prototype: ObjectRef) {
        self.default_prototypes.insert(TypeId::of::<T>(), prototype);
    }

    pub fn default_prototype<T: 'static>(&self) -> Option<ObjectRef> {
        self.default_prototypes.get(&TypeId::of::<T>()).cloned()
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Allocation

    pub fn new_object(&mut self) -> ObjectRef {
        ObjectRef::new(ObjectKind::Plain)
    }

    /// Handle for a native value of type `T`, with `T`'s default prototype (if registered).
    pub fn new_handle<T: 'static>(&mut self, kind: HandleKind) -> ObjectRef {
        self.meta_type_id::<T>();

        let handle = ObjectRef::new(ObjectKind::Handle(kind));
        handle.set_native_type::<T>();
        handle.set_prototype(self.default_prototype::<T>());
        handle
    }

    /// Function object; `length` is the declared parameter count.
    pub fn new_function(&mut self, name: &str, function: NativeFn, length: usize) -> ObjectRef {
        let object = ObjectRef::new(ObjectKind::Function(function));
        let fixed = PropertyFlags::READ_ONLY | PropertyFlags::UNDELETABLE;

        object.define_property("name", name, fixed);
        object.define_property("length", ScriptValue::Number(length as f64), fixed);
        object
    }

    /// Function object used with [`construct()`][Self::construct]; new instances inherit from `prototype`.
    pub fn new_constructor(
        &mut self,
        name: &str,
        function: NativeFn,
        prototype: &ObjectRef,
        length: usize,
    ) -> ObjectRef {
        let ctor = self.new_function(name, function, length);
        ctor.define_property(
            "prototype",
            prototype.clone(),
            PropertyFlags::READ_ONLY | PropertyFlags::UNDELETABLE,
        );
        ctor
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Calls

    /// Calls `function` with the given receiver.
    pub fn call(&mut self, function: &ScriptValue, this: ScriptValue, args: Vec<ScriptValue>) -> CallResult {
        let label = function_label(function);
        self.invoke(&label, function, this, args, false)
    }

    /// Calls `constructor` as in `new C(args)`: `this` is a fresh object inheriting from the constructor's `prototype`.
    pub fn construct(&mut self, constructor: &ScriptValue, args: Vec<ScriptValue>) -> CallResult {
        let this = self.new_object();
        if let Some(prototype) = constructor.property("prototype").as_object() {
            this.set_prototype(Some(prototype.clone()));
        }

        let label = format!("new {}", function_label(constructor));
        self.invoke(&label, constructor, ScriptValue::Object(this), args, true)
    }

    /// Looks up `name` on `receiver` (including its prototype chain) and calls it with `receiver` as `this`.
    pub fn invoke_method(&mut self, receiver: &ScriptValue, name: &str, args: Vec<ScriptValue>) -> CallResult {
        let function = receiver.property(name);
        self.invoke(name, &function, receiver.clone(), args, false)
    }

    /// Fail-soft variant of [`call()`][Self::call]: errors are reported and yield `Undefined`.
    pub fn call_or_undefined(
        &mut self,
        function: &ScriptValue,
        this: ScriptValue,
        args: Vec<ScriptValue>,
    ) -> ScriptValue {
        self.call(function, this, args).unwrap_or_default()
    }

    /// Current call stack, innermost frame first.
    pub fn backtrace(&self) -> Vec<String> {
        self.call_stack.iter().rev().cloned().collect()
    }

    fn invoke(
        &mut self,
        label: &str,
        function: &ScriptValue,
        this: ScriptValue,
        args: Vec<ScriptValue>,
        is_construct_call: bool,
    ) -> CallResult {
        let Some(native) = function.as_object().and_then(ObjectRef::native_fn) else {
            let err = InvocationError::failed_not_callable(label, function);
            self.report(&err);
            return Err(err);
        };

        self.call_stack.push(label.to_owned());
        let mut ctx = CallContext::new(this, args, self.backtrace(), is_construct_call);
        let result = native(&mut ctx, self);
        self.call_stack.pop();

        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    fn report(&self, err: &InvocationError) {
        // Nested calls report once, at the outermost frame.
        if self.report_errors && self.call_stack.is_empty() {
            tracing::error!("{err}");
        }
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn function_label(function: &ScriptValue) -> String {
    match function.property("name") {
        ScriptValue::String(name) => name,
        _ => String::from("<anonymous>"),
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_args(ctx: &mut CallContext, _engine: &mut ScriptEngine) -> CallResult {
        Ok(ScriptValue::Number(ctx.argument_count() as f64))
    }

    fn nested(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
        let inner = ctx.argument(0);
        engine.call(&inner, ScriptValue::Undefined, vec![])
    }

    fn report_backtrace(ctx: &mut CallContext, _engine: &mut ScriptEngine) -> CallResult {
        Ok(ScriptValue::String(ctx.backtrace().join(" <- ")))
    }

    fn is_constructing(ctx: &mut CallContext, _engine: &mut ScriptEngine) -> CallResult {
        Ok(ScriptValue::Bool(ctx.is_construct_call()))
    }

    #[test]
    fn meta_type_ids_are_stable() {
        let mut engine = ScriptEngine::new();
        let a = engine.meta_type_id::<u8>();
        let b = engine.meta_type_id::<String>();

        assert_eq!(a.value(), MetaTypeId::FIRST_USER);
        assert_eq!(b.value(), MetaTypeId::FIRST_USER + 1);
        assert_eq!(engine.meta_type_id::<u8>(), a);
    }

    #[test]
    fn function_has_fixed_length() {
        let mut engine = ScriptEngine::new();
        let f = engine.new_function("echo", echo_args, 2);

        assert_eq!(f.property("length"), ScriptValue::Number(2.0));
        assert!(f.put("length", 5.0).is_err());

        let result = engine
            .call(&ScriptValue::Object(f), ScriptValue::Undefined, vec![true.into()])
            .expect("call");
        assert_eq!(result, ScriptValue::Number(1.0));
    }

    #[test]
    fn nested_backtrace() {
        let mut engine = ScriptEngine::new();
        let inner = ScriptValue::Object(engine.new_function("inner", report_backtrace, 0));
        let outer = ScriptValue::Object(engine.new_function("outer", nested, 1));

        let result = engine
            .call(&outer, ScriptValue::Undefined, vec![inner])
            .expect("call");
        assert_eq!(result, ScriptValue::from("inner <- outer"));
        assert!(engine.backtrace().is_empty());
    }

    #[test]
    fn construct_uses_prototype() {
        let mut engine = ScriptEngine::new();
        let proto = engine.new_object();
        proto.define_property("kind", "thing", PropertyFlags::NONE);

        let ctor = engine.new_constructor("Thing", is_constructing, &proto, 0);
        let result = engine
            .construct(&ScriptValue::Object(ctor), vec![])
            .expect("construct");
        assert_eq!(result, ScriptValue::Bool(true));
    }

    #[test]
    fn calling_non_function_fails() {
        let mut engine = ScriptEngine::new();
        engine.set_error_reporting(false);

        let err = engine
            .invoke_method(&ScriptValue::Number(1.0), "missing", vec![])
            .expect_err("not callable");
        assert_eq!(err.function_name(), "missing");
        assert_eq!(
            engine.call_or_undefined(&ScriptValue::Undefined, ScriptValue::Undefined, vec![]),
            ScriptValue::Undefined
        );
    }
}
