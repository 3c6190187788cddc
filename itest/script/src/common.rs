/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use script_core::prelude::*;

use crate::gen;

/// Engine with all generated classes registered. Errors are returned to the test rather than logged.
pub fn engine() -> ScriptEngine {
    let mut engine = ScriptEngine::new();
    engine.set_error_reporting(false);
    gen::register_all_prototypes(&mut engine);
    engine
}

pub fn num(n: f64) -> ScriptValue {
    ScriptValue::Number(n)
}

/// `new Vector3(x, y, z)`.
pub fn new_vector3(engine: &mut ScriptEngine, x: f64, y: f64, z: f64) -> ScriptValue {
    let ctor = engine.global("Vector3");
    engine
        .construct(&ctor, vec![num(x), num(y), num(z)])
        .expect("Vector3 constructor")
}

pub fn object(value: &ScriptValue) -> &ObjectRef {
    value.as_object().expect("object value")
}
