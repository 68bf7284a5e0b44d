use nora_value::error::RuntimeError;
use nora_value::{BuiltinVars, Value};

/// Returns the default [`BuiltinVars`] that should be used.
pub fn default_builtin_vars() -> BuiltinVars {
    let mut builtin_vars = BuiltinVars::new();
    builtin_vars.add_native_fn("len", &len, 1);
    builtin_vars.add_native_fn("print", &print, 1);
    builtin_vars.add_native_fn("println", &println, 1);
    builtin_vars.add_native_fn("assert_eq", &assert_eq, 2);
    builtin_vars.add_native_fn("assert", &assert, 1);
    builtin_vars.add_native_fn("clock", &clock, 0);
    builtin_vars
}

/// Length of a string value. Other argument types are a typed runtime
/// error, not a crash.
pub fn len(args: &mut [Value]) -> Result<Value, RuntimeError> {
    match args[0].cast_to_str() {
        Some(string) => Ok(Value::Int(string.len() as i64)),
        None => Err(RuntimeError::UnsupportedArgument {
            builtin: "len",
            got: args[0].type_name(),
        }),
    }
}

pub fn print(args: &mut [Value]) -> Result<Value, RuntimeError> {
    let arg = &args[0];
    print!("{}", arg);

    Ok(Value::Bool(true))
}

pub fn println(args: &mut [Value]) -> Result<Value, RuntimeError> {
    let arg = &args[0];
    println!("{}", arg);

    Ok(Value::Bool(true))
}

pub fn assert(args: &mut [Value]) -> Result<Value, RuntimeError> {
    let arg = &args[0];

    assert!(arg.is_truthy(), "assertion failed: {}", arg);
    Ok(Value::Bool(true))
}

pub fn assert_eq(args: &mut [Value]) -> Result<Value, RuntimeError> {
    let left = &args[0];
    let right = &args[1];

    assert_eq!(left, right);
    Ok(Value::Bool(true))
}

pub fn clock(_args: &mut [Value]) -> Result<Value, RuntimeError> {
    let now = std::time::SystemTime::now();
    let since_the_epoch_secs = now
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();
    Ok(Value::Int(since_the_epoch_secs as i64))
}
