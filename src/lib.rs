pub mod catalog;
pub mod config;
pub mod diag;
pub mod emit;
pub mod error;
pub mod ir;
pub mod normalize;
pub mod operand;
pub mod parse;

use catalog::Catalog;
use config::Config;
use diag::{Diagnostics, Silent};
use error::Error;

/// Runs the whole pipeline: normalize, analyze, emit. Nothing is produced
/// unless every line is valid.
pub fn compile_with(
    text: &str,
    catalog: &Catalog,
    config: &Config,
    diag: &dyn Diagnostics,
) -> Result<String, Error> {
    // Stage 0
    let lines = normalize::stage0(text, diag)?;

    // Stage 1
    let program = parse::stage1(&lines, catalog, diag)?;

    // Stage 2
    emit::emit_xml(&program, catalog, config)
}

/// [`compile_with`] using the IPPcode23 catalog and no diagnostics.
pub fn compile(text: &str, config: &Config) -> Result<String, Error> {
    compile_with(text, &Catalog::ippcode23(), config, &Silent)
}
