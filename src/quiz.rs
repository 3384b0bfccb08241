//! Main module for quizmix library functionality

pub mod answer_key;
pub mod assemble;
pub mod ast;
pub mod docx;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod shuffle;
