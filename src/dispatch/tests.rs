//! Tests for render command construction.

use crate::config::RenderConfig;
use crate::dispatch::{build_command, slugify};
use std::path::Path;

fn template_path() -> &'static Path {
    Path::new("templates/castle prompts.txt")
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

#[test]
fn test_txt2img_selected_by_default() {
    let config = RenderConfig::default();
    let cmd = build_command(&config, "a cat", template_path());

    assert_eq!(cmd.program, "python");
    assert_eq!(cmd.args[0], "scripts/txt2img.py");
    assert_eq!(arg_value(&cmd.args, "--W"), Some("512"));
    assert_eq!(arg_value(&cmd.args, "--H"), Some("512"));
    assert!(!cmd.args.contains(&"--init-img".to_string()));
}

#[test]
fn test_img2img_selected_when_input_image_set() {
    let config = RenderConfig {
        input_image: "inputs/base.png".to_string(),
        ..Default::default()
    };
    let cmd = build_command(&config, "a cat", template_path());

    assert_eq!(cmd.args[0], "scripts/img2img.py");
    assert_eq!(arg_value(&cmd.args, "--init-img"), Some("inputs/base.png"));
    assert_eq!(arg_value(&cmd.args, "--strength"), Some("0.75"));
    assert!(!cmd.args.contains(&"--W".to_string()));
}

#[test]
fn test_low_memory_script_variants() {
    let config = RenderConfig {
        sd_low_memory: true,
        ..Default::default()
    };
    let cmd = build_command(&config, "a cat", template_path());
    assert_eq!(cmd.args[0], "scripts/optimized_txt2img.py");

    let config = RenderConfig {
        sd_low_memory: true,
        input_image: "base.png".to_string(),
        ..Default::default()
    };
    let cmd = build_command(&config, "a cat", template_path());
    assert_eq!(cmd.args[0], "scripts/optimized_img2img.py");
}

#[test]
fn test_turbo_requires_both_low_memory_flags() {
    let turbo_only = RenderConfig {
        sd_low_mem_turbo: true,
        ..Default::default()
    };
    let cmd = build_command(&turbo_only, "a cat", template_path());
    assert!(!cmd.args.contains(&"--turbo".to_string()));

    let both = RenderConfig {
        sd_low_memory: true,
        sd_low_mem_turbo: true,
        ..Default::default()
    };
    let cmd = build_command(&both, "a cat", template_path());
    assert!(cmd.args.contains(&"--turbo".to_string()));
}

#[test]
fn test_render_parameters_pass_through() {
    let config = RenderConfig {
        samples: 3,
        steps: 25,
        scale: 9.5,
        seed: 12345,
        ..Default::default()
    };
    let cmd = build_command(&config, "a cat, sitting", template_path());

    assert_eq!(arg_value(&cmd.args, "--n_iter"), Some("3"));
    assert_eq!(arg_value(&cmd.args, "--ddim_steps"), Some("25"));
    assert_eq!(arg_value(&cmd.args, "--scale"), Some("9.5"));
    assert_eq!(arg_value(&cmd.args, "--seed"), Some("12345"));
    assert_eq!(arg_value(&cmd.args, "--prompt"), Some("a cat, sitting"));
    assert!(cmd.args.contains(&"--skip_grid".to_string()));
}

#[test]
fn test_outdir_is_dated_and_slugged() {
    let config = RenderConfig::default();
    let cmd = build_command(&config, "a cat", template_path());

    assert!(cmd.output_dir.starts_with("output/"));
    assert!(cmd.output_dir.ends_with("-castle-prompts"));
    assert_eq!(arg_value(&cmd.args, "--outdir"), Some(cmd.output_dir.as_str()));
}

#[test]
fn test_display_quotes_the_prompt() {
    let config = RenderConfig::default();
    let cmd = build_command(&config, "a cat, sitting on a hill", template_path());
    let display = cmd.display();

    assert!(display.starts_with("python scripts/txt2img.py"));
    assert!(display.contains("'a cat, sitting on a hill'"));
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Castle Prompts"), "castle-prompts");
    assert_eq!(slugify("  lots   of   spaces  "), "lots-of-spaces");
    assert_eq!(slugify("punct!u@a#t$i%on"), "punctuation");
    assert_eq!(slugify("already-slugged"), "already-slugged");
    assert_eq!(slugify("_underscored_"), "underscored");
    assert_eq!(slugify(""), "");
}

#[test]
fn test_slugify_drops_non_ascii() {
    assert_eq!(slugify("café niño"), "caf-nio");
}

#[test]
fn test_slugify_caps_length() {
    let long = "a".repeat(500);
    assert_eq!(slugify(&long).len(), 180);
}
