//! Implementation of the `artgen run` command.
//!
//! For each template: parse it, produce prompts per the template's mode
//! (`random` draws, `combination` walks the cross product), resolve a random
//! init image when `random_input_image_dir` is set, then build and dispatch
//! one render command per prompt. `--dry-run` prints the commands instead.

use super::{report_warnings, sampling_rng};
use crate::cli::RunArgs;
use crate::config::Mode;
use crate::dispatch::build_command;
use crate::error::{ArtgenError, Result};
use crate::history::{GenerationRecord, append_record};
use crate::inputs::InputDir;
use crate::listfile::ListFile;
use crate::template::Template;
use rand::Rng;
use std::path::{Path, PathBuf};

pub fn cmd_run(args: RunArgs) -> Result<()> {
    let templates = resolve_templates(&args)?;
    if templates.is_empty() {
        return Err(ArtgenError::UserError(
            "no templates to process; pass template paths or --list <file>".to_string(),
        ));
    }

    let mut rng = sampling_rng(args.seed);
    for template_path in &templates {
        run_template(template_path, &args, &mut rng)?;
    }

    Ok(())
}

/// Combine positional template paths with entries from `--list`, in order.
fn resolve_templates(args: &RunArgs) -> Result<Vec<PathBuf>> {
    let mut templates = args.templates.clone();
    if let Some(list_path) = &args.list {
        for line in ListFile::load(list_path)? {
            templates.push(PathBuf::from(line));
        }
    }
    Ok(templates)
}

fn run_template<R: Rng + ?Sized>(
    template_path: &Path,
    args: &RunArgs,
    rng: &mut R,
) -> Result<()> {
    let (template, warnings) = Template::load(template_path)?;
    report_warnings(&warnings);

    let prompts = collect_prompts(&template, args.count, rng)?;

    // One scan per template; each prompt then draws its own init image.
    let input_dir = if template.config.input_image.is_empty()
        && !template.config.random_input_image_dir.is_empty()
    {
        Some(InputDir::scan(&template.config.random_input_image_dir)?)
    } else {
        None
    };
    if let Some(dir) = &input_dir {
        if dir.is_empty() {
            eprintln!(
                "Input image directory '{}' is empty; init images will not be used.",
                dir.directory.display()
            );
        } else {
            eprintln!(
                "Using {} init images from '{}'.",
                dir.len(),
                dir.directory.display()
            );
        }
    }

    for prompt in prompts {
        let mut config = template.config.clone();
        if let Some(dir) = &input_dir {
            if let Some(picked) = dir.pick_random(rng) {
                config.input_image = dir.full_path(picked).to_string_lossy().to_string();
            }
        }

        let command = build_command(&config, &prompt, template_path);
        if args.dry_run {
            println!("{}", command.display());
            continue;
        }

        eprintln!("Rendering: {}", prompt);
        command.execute()?;

        let record = GenerationRecord::new(
            template_path.to_string_lossy(),
            prompt,
            config.seed,
        )
        .with_command(command.display());
        append_record(Path::new(&command.output_dir), &record)?;
    }

    Ok(())
}

/// Produce the prompt list for one template according to its mode.
fn collect_prompts<R: Rng + ?Sized>(
    template: &Template,
    count: u32,
    rng: &mut R,
) -> Result<Vec<String>> {
    match template.config.mode {
        Mode::Random => {
            if count == 0 {
                return Err(ArtgenError::UserError(
                    "--count 0 only makes sense in combination mode".to_string(),
                ));
            }
            Ok((0..count).map(|_| template.pick_random(rng)).collect())
        }
        Mode::Combination => {
            let combos = template.combinations();
            Ok(if count == 0 {
                combos.collect()
            } else {
                combos.take(count as usize).collect()
            })
        }
    }
}
