//! Implementation of the `artgen show` command.

use super::report_warnings;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::template::Template;

pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let (template, warnings) = Template::load(&args.template)?;
    report_warnings(&warnings);

    println!("Template: {}", args.template.display());
    println!("Sections: {}", template.sections.len());
    println!();

    for (index, section) in template.sections.iter().enumerate() {
        println!(
            "  [{}] pick {}-{}, delim ({})",
            index + 1,
            section.min_pick,
            section.max_pick,
            section.delim
        );
        for token in &section.tokens {
            println!("    >> {}", token);
        }
        println!();
    }

    if args.config {
        println!("Effective config:");
        print!("{}", indent(&template.config.to_yaml()?));
    }

    Ok(())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}\n", line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb"), "  a\n  b\n");
    }
}
