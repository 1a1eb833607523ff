//! Prompt generation from parsed template sections.
//!
//! Each generation walks the section list in file order, draws a pick count
//! uniformly from the section's `[min_pick, max_pick]` range, samples that
//! many tokens without replacement, and joins the resulting fragments with
//! the global delimiter. A fixed set of cleanup substitutions then patches
//! the seams that independently-authored fragments tend to leave behind
//! (doubled commas, a dangling "and" before an empty section, "by and"
//! when an artist section contributed nothing).
//!
//! Sections are never mutated: sampling draws distinct indices over the
//! immutable token list, so concurrent callers can share one parsed
//! template as long as each brings its own RNG.

#[cfg(test)]
mod tests;

use crate::template::{PromptSection, Template};
use rand::Rng;
use rand::seq::index;

impl Template {
    /// Generate one random prompt from this template.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_random(&self.sections, &self.config.delim, rng)
    }

    /// Iterate the deterministic cross product of this template's sections.
    pub fn combinations(&self) -> Combinations<'_> {
        combinations(&self.sections, &self.config.delim)
    }
}

/// Generate one prompt by randomly sampling each section.
pub fn pick_random<R: Rng + ?Sized>(
    sections: &[PromptSection],
    global_delim: &str,
    rng: &mut R,
) -> String {
    let fragments = sections.iter().map(|section| sample_fragment(section, rng));
    assemble(fragments, global_delim)
}

/// Draw one fragment from a section.
///
/// With enough tokens, this samples `x` distinct tokens in random order;
/// with fewer than `x` tokens it takes all of them in file order instead.
fn sample_fragment<R: Rng + ?Sized>(section: &PromptSection, rng: &mut R) -> String {
    let x = rng.random_range(section.min_pick..=section.max_pick) as usize;

    if section.tokens.len() >= x {
        let picks = index::sample(rng, section.tokens.len(), x);
        let mut fragment = String::new();
        for (picked, idx) in picks.iter().enumerate() {
            if picked > 0 {
                fragment.push_str(&section.delim);
            }
            fragment.push_str(&section.tokens[idx]);
        }
        fragment
    } else {
        section.tokens.join(&section.delim)
    }
}

/// Concatenate fragments in section order, inserting the global delimiter
/// between non-empty fragments unless the next fragment leads with its own
/// punctuation, then normalize the result.
fn assemble(fragments: impl Iterator<Item = String>, global_delim: &str) -> String {
    let mut full_prompt = String::new();
    let mut count = 0;

    for fragment in fragments {
        if fragment.is_empty() {
            continue;
        }
        if count > 0 && !(fragment.starts_with(',') || fragment.starts_with(';')) {
            full_prompt.push_str(global_delim);
        }
        full_prompt.push_str(&fragment);
        count += 1;
    }

    normalize(&full_prompt)
}

/// Apply the fixed cleanup substitutions, in order, then trim surrounding
/// whitespace and any leading/trailing commas.
///
/// The substitution order is part of the output contract; do not reorder.
pub fn normalize(prompt: &str) -> String {
    let cleaned = prompt
        .replace(",,", ",")
        .replace(", ,", ",")
        .replace(" and,", ",")
        .replace(" by and ", " by ");
    cleaned.trim().trim_matches(',').to_string()
}

/// Build the cross-product iterator over a section list.
pub fn combinations<'a>(
    sections: &'a [PromptSection],
    global_delim: &'a str,
) -> Combinations<'a> {
    Combinations {
        sections,
        global_delim,
        indices: vec![0; sections.len()],
        done: sections.is_empty() || sections.iter().any(|s| s.tokens.is_empty()),
    }
}

/// Iterator over every combination of one token per section, in file order.
///
/// This is the deterministic counterpart of [`pick_random`] used by
/// `combination` mode: the last section varies fastest, and each assembled
/// prompt goes through the same delimiter and normalization rules.
#[derive(Debug)]
pub struct Combinations<'a> {
    sections: &'a [PromptSection],
    global_delim: &'a str,
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let fragments = self
            .sections
            .iter()
            .zip(&self.indices)
            .map(|(section, &idx)| section.tokens[idx].clone());
        let prompt = assemble(fragments, self.global_delim);

        // Odometer increment, last section fastest.
        self.done = true;
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sections[pos].tokens.len() {
                self.done = false;
                break;
            }
            self.indices[pos] = 0;
        }

        Some(prompt)
    }
}
