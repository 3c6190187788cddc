#![allow(non_snake_case, unused_variables, unused_mut, dead_code, clippy::all)]
use script_core::prelude::*;
use crate::natives::*;
fn Transform_Transform(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Transform_Transform";
    let ret: Transform = < Transform > ::default();
    Ok(< Transform as ScriptClass > ::to_script_value(engine, &ret))
}
fn Transform_Translate_Vector3(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Transform_Translate_Vector3";
    ctx.check_arg_count(FN, 1) ?;
    let mut this: Transform = ctx.this_as::< Transform > (FN) ?;
    let arg0: Vector3 = ctx.argument_as::< Vector3 > (FN, 0) ?;
    this.translate(&arg0);
    ctx.write_back::< Transform > (engine, &this);
    Ok(ScriptValue::Undefined)
}
fn Transform_ctor(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const SELECTOR: Selector = Selector {
        name: "Transform_ctor", kind: SelectorKind::Constructor {
            class_name: "Transform"
        },
        overloads: &[Overload {
            params: &[], wrapper: Transform_Transform,
        }],
    };
    SELECTOR.dispatch(ctx, engine)
}
impl ScriptClass for Transform {
    const CLASS_NAME: &'static str = "Transform";
    fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef) {
        handle.define_property("position", value.position.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.define_property("scale", value.scale.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.define_property("name", value.name.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.define_property("origin", value.origin.to_script_const(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("tags", value.tags.to_script(engine), PropertyFlags::UNDELETABLE);
    }
    fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::Mutable);
        Self::to_existing_script_value(engine, value, &handle);
        ScriptValue::Object(handle)
    }
    fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::ConstSnapshot);
        handle.define_property("position", value.position.to_script_const(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("scale", value.scale.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("name", value.name.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("origin", value.origin.to_script_const(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("tags", value.tags.to_script_const(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        ScriptValue::Object(handle)
    }
    fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result < (), ConvertError > {
        let handle = value.as_object() . ok_or_else(|| ConvertError::wrong_type(Self::CLASS_NAME, value)) ?;
        out.position = handle.property_as::< Vector3 > ("position") ?;
        out.scale = handle.property_as::< f32 > ("scale") ?;
        out.name = handle.property_as::< String > ("name") ?;
        out.origin = handle.property_as::< Vector3 > ("origin") ?;
        out.tags = handle.property_as::< Vec < String > > ("tags") ?;
        Ok(())
    }
    fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
        let fixed = PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY;
        let proto = engine.new_object();
        proto.define_property("Translate", engine.new_function("Translate", Transform_Translate_Vector3, 1), fixed);
        let meta_type_id = engine.meta_type_id::< Self > ();
        proto.define_property("metaTypeId", meta_type_id, PropertyFlags::NONE);
        engine.set_default_prototype::< Self > (proto.clone());
        engine.set_default_prototype::< Shared < Self >> (proto.clone());
        let ctor = engine.new_constructor("Transform", Transform_ctor, &proto, 0);
        engine.global_object() . define_property("Transform", ctor.clone(), fixed);
        ScriptValue::Object(ctor)
    }
}
impl ToScript for Transform {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value(engine, self)
    }
    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value_const(engine, self)
    }
}
impl FromScript for Transform {
    fn from_script(value: &ScriptValue) -> Result < Self, ConvertError > {
        from_script_class::< Self > (value)
    }
}
impl ScriptType for Transform {
    fn is_of_type(value: &ScriptValue) -> bool {
        value.is_instance_of::< Self > ()
    }
}
#[doc = r" Publishes the constructor on the engine's global object."]
pub fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
    < Transform as ScriptClass > ::register_prototype(engine)
}