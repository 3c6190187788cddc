#![allow(non_snake_case, unused_variables, unused_mut, dead_code, clippy::all)]
use script_core::prelude::*;
use crate::natives::*;
fn Payload_Payload(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Payload_Payload";
    let ret: Payload = < Payload > ::default();
    Ok(< Payload as ScriptClass > ::to_script_value(engine, &ret))
}
fn Payload_Fill_int(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Payload_Fill_int";
    ctx.check_arg_count(FN, 1) ?;
    let mut this: Payload = ctx.this_as::< Payload > (FN) ?;
    let arg0: i32 = ctx.argument_as::< i32 > (FN, 0) ?;
    this.fill(arg0);
    ctx.write_back::< Payload > (engine, &this);
    Ok(ScriptValue::Undefined)
}
fn Payload_Checksum_const(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Payload_Checksum_const";
    ctx.check_arg_count(FN, 0) ?;
    let this: Payload = ctx.this_as::< Payload > (FN) ?;
    let ret = this.checksum() . to_script(engine);
    Ok(ret)
}
fn Payload_ctor(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const SELECTOR: Selector = Selector {
        name: "Payload_ctor", kind: SelectorKind::Constructor {
            class_name: "Payload"
        },
        overloads: &[Overload {
            params: &[], wrapper: Payload_Payload,
        }],
    };
    SELECTOR.dispatch(ctx, engine)
}
impl ScriptClass for Payload {
    const CLASS_NAME: &'static str = "Payload";
    fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef) {
        handle.define_property("size", value.size.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.set_data(value.clone());
    }
    fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::Mutable);
        Self::to_existing_script_value(engine, value, &handle);
        ScriptValue::Object(handle)
    }
    fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::ConstSnapshot);
        handle.define_property("size", value.size.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.set_data(value.clone());
        ScriptValue::Object(handle)
    }
    fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result < (), ConvertError > {
        let handle = value.as_object() . ok_or_else(|| ConvertError::wrong_type(Self::CLASS_NAME, value)) ?;
        if let Some(data) = handle.data::< Self > () {
            * out = data;
        }
        out.size = handle.property_as::< i32 > ("size") ?;
        Ok(())
    }
    fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
        let fixed = PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY;
        let proto = engine.new_object();
        proto.define_property("Fill", engine.new_function("Fill", Payload_Fill_int, 1), fixed);
        proto.define_property("Checksum", engine.new_function("Checksum", Payload_Checksum_const, 0), fixed);
        let meta_type_id = engine.meta_type_id::< Self > ();
        proto.define_property("metaTypeId", meta_type_id, PropertyFlags::NONE);
        engine.set_default_prototype::< Self > (proto.clone());
        engine.set_default_prototype::< Shared < Self >> (proto.clone());
        let ctor = engine.new_constructor("Payload", Payload_ctor, &proto, 0);
        engine.global_object() . define_property("Payload", ctor.clone(), fixed);
        ScriptValue::Object(ctor)
    }
}
impl ToScript for Payload {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value(engine, self)
    }
    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value_const(engine, self)
    }
}
impl FromScript for Payload {
    fn from_script(value: &ScriptValue) -> Result < Self, ConvertError > {
        from_script_class::< Self > (value)
    }
}
impl ScriptType for Payload {
    fn is_of_type(value: &ScriptValue) -> bool {
        value.is_instance_of::< Self > ()
    }
}
#[doc = r" Publishes the constructor on the engine's global object."]
pub fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
    < Payload as ScriptClass > ::register_prototype(engine)
}