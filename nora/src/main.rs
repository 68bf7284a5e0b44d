use nora::builtin_functions;
use nora_interp::interpreter::Interpreter;
use nora_parser::parser::Parser;
use std::io::{self, Write};

fn main() {
    let mut stdout = io::stdout();
    let stdin = io::stdin();

    let builtin_vars = builtin_functions::default_builtin_vars();
    let mut interpreter = Interpreter::with_builtin_vars(&builtin_vars);

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut input = String::new();
        if stdin.read_line(&mut input).unwrap() == 0 {
            break; // reached end of input
        }

        let source = input.as_str().into();
        let mut parser = Parser::new(&source);
        let program = parser.parse_program();

        eprint!("{}", source.errors);
        if source.has_no_errors() {
            // global bindings persist across lines
            match interpreter.eval_program(&program) {
                Ok(value) => println!("{}", value),
                Err(error) => eprintln!("runtime error: {}", error),
            }
        }
    }
}
