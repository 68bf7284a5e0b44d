//! Front end for the nora language: lexer, AST and Pratt parser.

pub mod ast;
pub mod lexer;
pub mod parser;
