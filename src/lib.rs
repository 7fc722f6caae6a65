// Resumatch: compare a resume against a job description.
//
// This is the library root. The pipeline runs strictly forward:
// extract -> matching -> analysis -> output. `session` and `shell` are the
// interactive surface on top of it.

pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod matching;
pub mod output;
pub mod session;
pub mod shell;
