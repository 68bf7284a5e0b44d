//! Tree-walking evaluator for the nora language.

pub mod interpreter;
