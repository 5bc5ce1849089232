// Line parsing: raw text line -> validated problem

pub mod line_parser;
mod scanner;

pub use line_parser::LineParser;
