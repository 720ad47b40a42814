// Carbon: two-document plagiarism checker
//
// This is the library root. Each module is one stage of the comparison
// pipeline; `compare::Checker` ties them together.

pub mod compare;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod text;
