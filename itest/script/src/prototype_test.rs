/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use script_core::engine::MetaTypeId;
use script_core::prelude::*;

use crate::common::{engine, new_vector3, object};
use crate::gen;
use crate::natives::{Entity, Marker, Payload, Transform, Vector3};

const CLASS_NAMES: [&str; 5] = ["Vector3", "Transform", "Entity", "Payload", "Marker"];

fn prototype_of(engine: &ScriptEngine, class_name: &str) -> ObjectRef {
    let ctor = engine.global(class_name);
    object(&ctor.property("prototype")).clone()
}

#[test]
fn constructors_published_globally() {
    let engine = engine();
    let global = engine.global_object();

    for class_name in CLASS_NAMES {
        let ctor = engine.global(class_name);
        assert_eq!(ctor.type_name(), "function", "{class_name}");
        assert_eq!(ctor.property("name"), ScriptValue::from(class_name));

        let flags = global.property_flags(class_name).unwrap();
        assert!(flags.is_read_only() && flags.is_undeletable(), "{class_name}");
    }
}

#[test]
fn register_prototype_returns_published_constructor() {
    let mut engine = ScriptEngine::new();
    let ctor = gen::vector3::register_prototype(&mut engine);

    assert_eq!(ctor, engine.global("Vector3"));
    assert!(engine.global("Transform").is_undefined());
}

#[test]
fn constructor_length_is_max_param_count() {
    let engine = engine();

    let lengths = CLASS_NAMES.map(|class_name| engine.global(class_name).property("length"));
    let expected = [3.0, 0.0, 2.0, 0.0, 0.0].map(ScriptValue::Number);

    assert_eq!(lengths, expected);
}

#[test]
fn meta_type_id_on_prototype() {
    let mut engine = engine();

    let ids = [
        engine.meta_type_id::<Vector3>(),
        engine.meta_type_id::<Transform>(),
        engine.meta_type_id::<Entity>(),
        engine.meta_type_id::<Payload>(),
        engine.meta_type_id::<Marker>(),
    ];

    for (class_name, id) in CLASS_NAMES.into_iter().zip(ids) {
        assert!(id.value() >= MetaTypeId::FIRST_USER);

        let proto = prototype_of(&engine, class_name);
        assert_eq!(proto.own_property("metaTypeId"), Some(ScriptValue::from(id)));
        assert_eq!(proto.property_flags("metaTypeId"), Some(PropertyFlags::NONE));
    }

    let distinct = ids.iter().collect::<HashSet<_>>();
    assert_eq!(distinct.len(), ids.len());
}

#[test]
fn instance_methods_on_prototype() {
    let engine = engine();
    let proto = prototype_of(&engine, "Vector3");

    // Operators and static methods are not instance properties.
    assert_eq!(
        proto.property_names(),
        ["Length", "Normalize", "Scale", "metaTypeId", "toString"]
    );

    let fixed = PropertyFlags::READ_ONLY | PropertyFlags::UNDELETABLE;
    assert_eq!(proto.property_flags("Length"), Some(fixed));

    // Both overloads take one parameter, so a single binding to the selector.
    let scale = proto.property("Scale");
    assert_eq!(scale.property("name"), ScriptValue::from("Scale"));
    assert_eq!(scale.property("length"), ScriptValue::Number(1.0));
}

#[test]
fn static_members_on_constructor() {
    let engine = engine();
    let ctor = engine.global("Vector3");
    let ctor_obj = object(&ctor);

    assert_eq!(
        ctor_obj.property_names(),
        ["Dot", "length", "name", "prototype", "zero"]
    );

    assert_eq!(ctor.property("Dot").property("length"), ScriptValue::Number(2.0));

    let zero = ctor.property("zero");
    assert!(zero.is_instance_of::<Vector3>());
    assert_eq!(zero.property("x"), ScriptValue::Number(0.0));

    let flags = ctor_obj.property_flags("zero").unwrap();
    assert!(flags.is_read_only() && flags.is_undeletable());
}

#[test]
fn filtered_members_not_bound() {
    let engine = engine();
    let proto = prototype_of(&engine, "Entity");

    assert_eq!(proto.property_names(), ["Describe", "Rename", "metaTypeId"]);

    for filtered in ["Hidden", "UsesBoolPtr", "Helper"] {
        assert!(proto.property(filtered).is_undefined(), "{filtered}");
    }
}

#[test]
fn handles_inherit_prototype() {
    let mut engine = engine();
    let proto = prototype_of(&engine, "Vector3");

    let v = new_vector3(&mut engine, 1.0, 2.0, 3.0);
    let handle = object(&v);

    assert!(handle.prototype().unwrap().ptr_eq(&proto));
    assert_eq!(handle.property_names(), ["x", "y", "z"]);
    assert_eq!(
        engine.default_prototype::<Shared<Vector3>>().map(|p| p.ptr_eq(&proto)),
        Some(true)
    );
}
