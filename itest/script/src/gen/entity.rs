#![allow(non_snake_case, unused_variables, unused_mut, dead_code, clippy::all)]
use script_core::prelude::*;
use crate::natives::*;
fn Entity_Entity(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Entity_Entity";
    let ret: Entity = < Entity > ::default();
    Ok(< Entity as ScriptClass > ::to_script_value(engine, &ret))
}
fn Entity_Entity_u32_QString(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Entity_Entity_u32_QString";
    let arg0: u32 = ctx.argument_as::< u32 > (FN, 0) ?;
    let arg1: String = ctx.argument_as::< String > (FN, 1) ?;
    let ret: Entity = < Entity > ::new(arg0, &arg1);
    Ok(< Entity as ScriptClass > ::to_script_value(engine, &ret))
}
fn Entity_Rename_QString(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Entity_Rename_QString";
    ctx.check_arg_count(FN, 1) ?;
    let mut this: Entity = ctx.this_as::< Entity > (FN) ?;
    let arg0: String = ctx.argument_as::< String > (FN, 0) ?;
    this.rename(&arg0);
    ctx.write_back::< Entity > (engine, &this);
    Ok(ScriptValue::Undefined)
}
fn Entity_Describe_const(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const FN: &str = "Entity_Describe_const";
    ctx.check_arg_count(FN, 0) ?;
    let this: Entity = ctx.this_as::< Entity > (FN) ?;
    let ret = this.describe() . to_script(engine);
    Ok(ret)
}
fn Entity_ctor(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
    const SELECTOR: Selector = Selector {
        name: "Entity_ctor", kind: SelectorKind::Constructor {
            class_name: "Entity"
        },
        overloads: &[Overload {
            params: &[], wrapper: Entity_Entity,
        },
        Overload {
            params: &[< u32 as ScriptType > ::is_of_type, < String as ScriptType > ::is_of_type], wrapper: Entity_Entity_u32_QString,
        }],
    };
    SELECTOR.dispatch(ctx, engine)
}
impl ScriptClass for Entity {
    const CLASS_NAME: &'static str = "Entity";
    fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef) {
        handle.define_property("id", value.id.to_script(engine), PropertyFlags::UNDELETABLE);
        handle.define_property("name", value.name.to_script(engine), PropertyFlags::UNDELETABLE);
    }
    fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::Mutable);
        Self::to_existing_script_value(engine, value, &handle);
        ScriptValue::Object(handle)
    }
    fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
        let handle = engine.new_handle::< Self > (HandleKind::ConstSnapshot);
        handle.define_property("id", value.id.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        handle.define_property("name", value.name.to_script(engine), PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,);
        ScriptValue::Object(handle)
    }
    fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result < (), ConvertError > {
        let handle = value.as_object() . ok_or_else(|| ConvertError::wrong_type(Self::CLASS_NAME, value)) ?;
        out.id = handle.property_as::< u32 > ("id") ?;
        out.name = handle.property_as::< String > ("name") ?;
        Ok(())
    }
    fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
        let fixed = PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY;
        let proto = engine.new_object();
        proto.define_property("Rename", engine.new_function("Rename", Entity_Rename_QString, 1), fixed);
        proto.define_property("Describe", engine.new_function("Describe", Entity_Describe_const, 0), fixed);
        let meta_type_id = engine.meta_type_id::< Self > ();
        proto.define_property("metaTypeId", meta_type_id, PropertyFlags::NONE);
        engine.set_default_prototype::< Self > (proto.clone());
        engine.set_default_prototype::< Shared < Self >> (proto.clone());
        let ctor = engine.new_constructor("Entity", Entity_ctor, &proto, 2);
        engine.global_object() . define_property("Entity", ctor.clone(), fixed);
        ScriptValue::Object(ctor)
    }
}
impl ToScript for Entity {
    fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value(engine, self)
    }
    fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
        < Self as ScriptClass > ::to_script_value_const(engine, self)
    }
}
impl FromScript for Entity {
    fn from_script(value: &ScriptValue) -> Result < Self, ConvertError > {
        from_script_class::< Self > (value)
    }
}
impl ScriptType for Entity {
    fn is_of_type(value: &ScriptValue) -> bool {
        value.is_instance_of::< Self > ()
    }
}
#[doc = r" Publishes the constructor on the engine's global object."]
pub fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
    < Entity as ScriptClass > ::register_prototype(engine)
}