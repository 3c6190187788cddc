/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::engine::ScriptEngine;
use crate::meta::error::ConvertError;
use crate::meta::{FromScript, ScriptType, ToScript};
use crate::value::{PropertyFlags, ScriptValue};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Numbers

// Scripts have a single number type. Conversions from it use `as` semantics: fractions are truncated towards zero, out-of-range
// values saturate and NaN becomes 0 for integers.
macro_rules! impl_script_number {
    ($($T:ty),+ $(,)?) => {
        $(
            impl ToScript for $T {
                fn to_script(&self, _engine: &mut ScriptEngine) -> ScriptValue {
                    ScriptValue::Number(*self as f64)
                }
            }

            impl FromScript for $T {
                fn from_script(value: &ScriptValue) -> Result<Self, ConvertError> {
                    match value {
                        ScriptValue::Number(n) => Ok(*n as $T),
                        other => Err(ConvertError::wrong_type("number", other)),
                    }
                }
            }

            impl ScriptType for $T {
                fn is_of_type(value: &ScriptValue) -> bool {
                    matches!(value, ScriptValue::Number(_))
                }
            }
        )+
    };
}

impl_script_number!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// bool, strings

impl ToScript for bool {
    fn to_script(&self, _engine: &mut ScriptEngine) -> ScriptValue {
        ScriptValue::Bool(*self)
    }
}

impl FromScript for bool {
    fn from_script(value: &ScriptValue) -> Result<Self, ConvertError> {
        value
            .as_bool()
            .ok_or_else(|| ConvertError::wrong_type("bool", value))
    }
}

impl ScriptType for bool {
    fn is_of_type(value: &ScriptValue) -> bool {
        matches!(value, ScriptValue::Bool(_))
    }
}

impl ToScript for str {
    fn to_script(&self, _engine: &mut ScriptEngine) -> ScriptValue {
        ScriptValue::String(self.to_owned())
    }
}

impl ToScript for String {
    fn to_script(&self, _engine: &mut ScriptEngine) -> ScriptValue {
        ScriptValue::String(self.clone())
    }
}

impl FromScript for String {
    fn from_script(value: &ScriptValue) -> Result<Self, ConvertError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ConvertError::wrong_type("string", value))
    }
}

impl ScriptType for String {
    fn is_of_type(value: &ScriptValue) -> bool {
        matches!(value, ScriptValue::String(_))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Lists

// Lists are plain objects with index properties "0".."n-1" and a `length`.

impl<T: ToScript> ToScript for Vec<T> {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        list_to_script(self, engine, PropertyFlags::NONE, T::to_script)
    }

    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        let flags = PropertyFlags::READ_ONLY | PropertyFlags::UNDELETABLE;
        list_to_script(self, engine, flags, T::to_script_const)
    }
}

fn list_to_script<T>(
    elements: &[T],
    engine: &mut ScriptEngine,
    flags: PropertyFlags,
    convert: fn(&T, &mut ScriptEngine) -> ScriptValue,
) -> ScriptValue {
    let list = engine.new_object();

    for (i, element) in elements.iter().enumerate() {
        let value = convert(element, engine);
        list.define_property(&i.to_string(), value, flags);
    }
    list.define_property(
        "length",
        ScriptValue::Number(elements.len() as f64),
        flags | PropertyFlags::READ_ONLY,
    );

    ScriptValue::Object(list)
}

impl<T: FromScript> FromScript for Vec<T> {
    fn from_script(value: &ScriptValue) -> Result<Self, ConvertError> {
        let list = value
            .as_object()
            .ok_or_else(|| ConvertError::wrong_type("list", value))?;

        let len = list.property_as::<usize>("length")?;
        (0..len)
            .map(|i| list.property_as::<T>(&i.to_string()))
            .collect()
    }
}

impl<T> ScriptType for Vec<T> {
    fn is_of_type(value: &ScriptValue) -> bool {
        value
            .as_object()
            .is_some_and(|list| list.native_type_id().is_none() && list.own_property("length").is_some())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
