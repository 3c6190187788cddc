/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Runtime half of the script bindings.
//!
//! Bindings emitted by `script-codegen` are plain Rust functions operating on the types of this crate:
//! * [`ScriptValue`][value::ScriptValue] and [`ObjectRef`][value::ObjectRef]: dynamically typed values and shared object handles.
//! * [`ScriptEngine`][engine::ScriptEngine]: global object, metatype ids, default prototypes and the call stack.
//! * [`CallContext`][meta::CallContext]: arguments and receiver of one native call.
//! * [`ScriptClass`][meta::ScriptClass]: marshalling contract implemented by every generated class.
//!
//! There is no script interpreter here. Host code drives calls through [`ScriptEngine::call()`][engine::ScriptEngine::call],
//! [`construct()`][engine::ScriptEngine::construct] and [`invoke_method()`][engine::ScriptEngine::invoke_method].

pub mod engine;
pub mod meta;
pub mod value;

/// Everything generated binding code needs, glob-imported at the top of each generated file.
pub mod prelude {
    pub use crate::engine::{MetaTypeId, ScriptEngine};
    pub use crate::meta::error::{ConvertError, InvocationError, PropertyError};
    pub use crate::meta::{
        from_script_class, CallContext, CallResult, FromScript, NativeFn, Overload, ScriptClass,
        ScriptType, Selector, SelectorKind, Shared, ToScript, TypeCheck,
    };
    pub use crate::value::{HandleKind, ObjectRef, PropertyFlags, ScriptValue};
}
