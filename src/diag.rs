//! Diagnostics hook. Stages call it at error sites only; it never affects
//! the outcome of a run.

pub trait Diagnostics {
    fn report(&self, stage: &str, message: &str);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn report(&self, _stage: &str, _message: &str) {}
}

/// Writes `[stage] message` lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Diagnostics for Stderr {
    fn report(&self, stage: &str, message: &str) {
        eprintln!("[{}] {}", stage, message);
    }
}
