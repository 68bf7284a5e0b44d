pub mod builtin_functions;

/// For testing purposes only.
pub fn interpret(source: &str) {
    use nora_interp::interpreter::Interpreter;
    use nora_parser::parser::Parser;

    let source = source.into();
    let mut parser = Parser::new(&source);
    let program = parser.parse_program();

    eprintln!("{}", source.errors);
    assert!(source.has_no_errors());

    let builtin_vars = builtin_functions::default_builtin_vars();
    let mut interpreter = Interpreter::with_builtin_vars(&builtin_vars);
    if let Err(error) = interpreter.eval_program(&program) {
        panic!("runtime error: {}", error);
    }
}
