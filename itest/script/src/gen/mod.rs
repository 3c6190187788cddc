pub mod vector3;
pub mod transform;
pub mod entity;
pub mod payload;
pub mod marker;
#[doc = r" Registers every generated class, in generation order."]
pub fn register_all_prototypes(engine: &mut script_core::prelude::ScriptEngine) {
    vector3::register_prototype(engine);
    transform::register_prototype(engine);
    entity::register_prototype(engine);
    payload::register_prototype(engine);
    marker::register_prototype(engine);
}