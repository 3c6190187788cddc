#![allow(non_snake_case, unused_variables, unused_mut, dead_code, clippy::all)]
use script_core::prelude::*;
use crate::natives::*;
fn Marker_Marker(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Marker_Marker";
    let ret: Marker = < Marker > ::default();
    Ok(< Marker as ScriptClass > ::to_script_value(engine, &ret))
}
fn Marker_Kind_const(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Marker_Kind_const";
    ctx.check_arg_count(FN, 0) ?;
    let this: Marker = ctx.this_as::< Marker > (FN) ?;
    let ret = this.kind() . to_script(engine);
    Ok(ret)
}
fn Marker_ctor(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const SELECTOR: Selector = Selector {
        name: "Marker_ctor", kind: SelectorKind::Constructor {
            class_name: "Marker"
        },
        overloads: &[Overload {
            params: &[], wrapper: Marker_Marker,
        }],
    };
    SELECTOR.dispatch(ctx, engine)
}
impl ScriptClass for Marker {
    const CLASS_NAME: &'static str = "Marker";
    fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef) {
    }
    fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::Mutable);
        Self::to_existing_script_value(engine, value, &handle);
        ScriptValue::Object(handle)
    }
    fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::ConstSnapshot);
        ScriptValue::Object(handle)
    }
    fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result < (), ConvertError > {
        let handle = value.as_object() . ok_or_else(|| ConvertError::wrong_type(Self::CLASS_NAME, value)) ?;
        Ok(())
    }
    fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
        let fixed = PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY;
        let proto = engine.new_object();
        proto.define_property("Kind", engine.new_function("Kind", Marker_Kind_const, 0), fixed);
        let meta_type_id = engine.meta_type_id::< Self > ();
        proto.define_property("metaTypeId", meta_type_id, PropertyFlags::NONE);
        engine.set_default_prototype::< Self > (proto.clone());
        engine.set_default_prototype::< Shared < Self >> (proto.clone());
        let ctor = engine.new_constructor("Marker", Marker_ctor, &proto, 0);
        engine.global_object() . define_property("Marker", ctor.clone(), fixed);
        ScriptValue::Object(ctor)
    }
}
impl ToScript for Marker {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value(engine, self)
    }
    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value_const(engine, self)
    }
}
impl FromScript for Marker {
    fn from_script(value: &ScriptValue) -> Result < Self, ConvertError > {
        from_script_class::< Self > (value)
    }
}
impl ScriptType for Marker {
    fn is_of_type(value: &ScriptValue) -> bool {
        value.is_instance_of::< Self > ()
    }
}
#[doc = r" Publishes the constructor on the engine's global object."]
pub fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
    < Marker as ScriptClass > ::register_prototype(engine)
}