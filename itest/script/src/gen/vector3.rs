#![allow(non_snake_case, unused_variables, unused_mut, dead_code, clippy::all)]
use script_core::prelude::*;
use crate::natives::*;
fn Vector3_Vector3(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Vector3";
    let ret: Vector3 = < Vector3 > ::default();
    Ok(< Vector3 as ScriptClass > ::to_script_value(engine, &ret))
}
fn Vector3_Vector3_float_float_float(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Vector3_float_float_float";
    let arg0: f32 = ctx.argument_as::< f32 > (FN, 0) ?;
    let arg1: f32 = ctx.argument_as::< f32 > (FN, 1) ?;
    let arg2: f32 = ctx.argument_as::< f32 > (FN, 2) ?;
    let ret: Vector3 = < Vector3 > ::new(arg0, arg1, arg2);
    Ok(< Vector3 as ScriptClass > ::to_script_value(engine, &ret))
}
fn Vector3_Length_const(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Length_const";
    ctx.check_arg_count(FN, 0) ?;
    let this: Vector3 = ctx.this_as::< Vector3 > (FN) ?;
    let ret = this.length() . to_script(engine);
    Ok(ret)
}
fn Vector3_Normalize(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Normalize";
    ctx.check_arg_count(FN, 0) ?;
    let mut this: Vector3 = ctx.this_as::< Vector3 > (FN) ?;
    this.normalize();
    ctx.write_back::< Vector3 > (engine, &this);
    Ok(ScriptValue::Undefined)
}
fn Vector3_Scale_float(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Scale_float";
    ctx.check_arg_count(FN, 1) ?;
    let mut this: Vector3 = ctx.this_as::< Vector3 > (FN) ?;
    let arg0: f32 = ctx.argument_as::< f32 > (FN, 0) ?;
    this.scale(arg0);
    ctx.write_back::< Vector3 > (engine, &this);
    Ok(ScriptValue::Undefined)
}
fn Vector3_Scale_Vector3(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Scale_Vector3";
    ctx.check_arg_count(FN, 1) ?;
    let mut this: Vector3 = ctx.this_as::< Vector3 > (FN) ?;
    let arg0: Vector3 = ctx.argument_as::< Vector3 > (FN, 0) ?;
    this.scale_by(&arg0);
    ctx.write_back::< Vector3 > (engine, &this);
    Ok(ScriptValue::Undefined)
}
fn Vector3_Dot_Vector3_Vector3(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_Dot_Vector3_Vector3";
    let arg0: Vector3 = ctx.argument_as::< Vector3 > (FN, 0) ?;
    let arg1: Vector3 = ctx.argument_as::< Vector3 > (FN, 1) ?;
    let ret = < Vector3 > ::dot(&arg0, &arg1) . to_script(engine);
    Ok(ret)
}
fn Vector3_toString_const(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Vector3_toString_const";
    let this: Vector3 = ctx.this_or_first_argument_as::< Vector3 > (FN) ?;
    let ret = this.to_string() . to_script(engine);
    Ok(ret)
}
fn Vector3_ctor(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const SELECTOR: Selector = Selector {
        name: "Vector3_ctor", kind: SelectorKind::Constructor {
            class_name: "Vector3"
        },
        overloads: &[Overload {
            params: &[], wrapper: Vector3_Vector3,
        },
        Overload {
            params: &[< f32 as ScriptType > ::is_of_type, < f32 as ScriptType > ::is_of_type, < f32 as ScriptType > ::is_of_type], wrapper: Vector3_Vector3_float_float_float,
        }],
    };
    SELECTOR.dispatch(ctx, engine)
}
fn Vector3_Scale_selector(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const SELECTOR: Selector = Selector {
        name: "Vector3_Scale_selector", kind: SelectorKind::Method, overloads: &[Overload {
            params: &[< f32 as ScriptType > ::is_of_type], wrapper: Vector3_Scale_float,
        },
        Overload {
            params: &[< Vector3 as ScriptType > ::is_of_type], wrapper: Vector3_Scale_Vector3,
        }],
    };
    SELECTOR.dispatch(ctx, engine)
}
impl ScriptClass for Vector3 {
    const CLASS_NAME: &'static str = "Vector3";
    fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef) {
        handle.define_property("x", value.x.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.define_property("y", value.y.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.define_property("z", value.z.to_script(engine), PropertyFlags::UNDELETABLE);
    }
    fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::Mutable);
        Self::to_existing_script_value(engine, value, &handle);
        ScriptValue::Object(handle)
    }
    fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::ConstSnapshot);
        handle.define_property("x", value.x.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("y", value.y.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("z", value.z.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        ScriptValue::Object(handle)
    }
    fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result < (), ConvertError > {
        let handle = value.as_object() . ok_or_else(|| ConvertError::wrong_type(Self::CLASS_NAME, value)) ?;
        out.x = handle.property_as::< f32 > ("x") ?;
        out.y = handle.property_as::< f32 > ("y") ?;
        out.z = handle.property_as::< f32 > ("z") ?;
        Ok(())
    }
    fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
        let fixed = PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY;
        let proto = engine.new_object();
        proto.define_property("Length", engine.new_function("Length", Vector3_Length_const, 0), fixed);
        proto.define_property("Normalize", engine.new_function("Normalize", Vector3_Normalize, 0), fixed);
        proto.define_property("Scale", engine.new_function("Scale", Vector3_Scale_selector, 1), fixed);
        proto.define_property("toString", engine.new_function("toString", Vector3_toString_const, 0), fixed);
        let meta_type_id = engine.meta_type_id::< Self > ();
        proto.define_property("metaTypeId", meta_type_id, PropertyFlags::NONE);
        engine.set_default_prototype::< Self > (proto.clone());
        engine.set_default_prototype::< Shared < Self >> (proto.clone());
        let ctor = engine.new_constructor("Vector3", Vector3_ctor, &proto, 3);
        ctor.define_property("Dot", engine.new_function("Dot", Vector3_Dot_Vector3_Vector3, 2), fixed);
        ctor.define_property("zero", Self::ZERO.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY);
        engine.global_object() . define_property("Vector3", ctor.clone(), fixed);
        ScriptValue::Object(ctor)
    }
}
impl ToScript for Vector3 {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value(engine, self)
    }
    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value_const(engine, self)
    }
}
impl FromScript for Vector3 {
    fn from_script(value: &ScriptValue) -> Result < Self, ConvertError > {
        from_script_class::< Self > (value)
    }
}
impl ScriptType for Vector3 {
    fn is_of_type(value: &ScriptValue) -> bool {
        value.is_instance_of::< Self > ()
    }
}
#[doc = r" Publishes the constructor on the engine's global object."]
pub fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
    < Vector3 as ScriptClass > ::register_prototype(engine)
}