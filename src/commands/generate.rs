//! Implementation of the `artgen generate` command.

use super::{report_warnings, sampling_rng};
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::template::Template;

pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let (template, warnings) = Template::load(&args.template)?;
    report_warnings(&warnings);

    let mut rng = sampling_rng(args.seed);
    for _ in 0..args.count {
        println!("{}", template.pick_random(&mut rng));
    }

    Ok(())
}
