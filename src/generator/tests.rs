//! Tests for prompt generation and normalization.

use crate::generator::{combinations, normalize, pick_random};
use crate::template::{PromptSection, Template};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn section(tokens: &[&str], min: u32, max: u32, delim: &str) -> PromptSection {
    PromptSection {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        min_pick: min,
        max_pick: max,
        delim: delim.to_string(),
    }
}

#[test]
fn test_fixed_cardinality_yields_exactly_k_distinct_tokens() {
    let sections = [section(&["red", "blue", "green", "gold"], 2, 2, ", ")];
    let mut rng = rng();

    for _ in 0..50 {
        let prompt = pick_random(&sections, " ", &mut rng);
        let picked: Vec<&str> = prompt.split(", ").collect();
        assert_eq!(picked.len(), 2, "prompt was: {:?}", prompt);
        assert_ne!(picked[0], picked[1], "sampled the same token twice");
        for token in &picked {
            assert!(sections[0].tokens.iter().any(|t| t == token));
        }
    }
}

#[test]
fn test_insufficient_tokens_takes_all_in_file_order() {
    let sections = [section(&["first", "second"], 5, 5, " + ")];
    let mut rng = rng();

    for _ in 0..10 {
        assert_eq!(pick_random(&sections, " ", &mut rng), "first + second");
    }
}

#[test]
fn test_single_token_section_is_forced() {
    let sections = [section(&["a cat"], 1, 1, " ")];
    let mut rng = rng();
    assert_eq!(pick_random(&sections, " ", &mut rng), "a cat");
}

#[test]
fn test_two_token_section_picks_one_never_both() {
    let sections = [section(&["a cat", "a dog"], 1, 1, " ")];
    let mut rng = rng();

    for _ in 0..50 {
        let prompt = pick_random(&sections, " ", &mut rng);
        assert!(prompt == "a cat" || prompt == "a dog", "got {:?}", prompt);
    }
}

#[test]
fn test_pick_count_stays_within_bounds() {
    let sections = [section(&["a", "b", "c", "d", "e"], 1, 3, "|")];
    let mut rng = rng();

    for _ in 0..100 {
        let prompt = pick_random(&sections, " ", &mut rng);
        let count = prompt.split('|').count();
        assert!((1..=3).contains(&count), "picked {} tokens", count);
    }
}

#[test]
fn test_fragments_join_with_global_delimiter() {
    let sections = [
        section(&["a cat"], 1, 1, " "),
        section(&["on a hill"], 1, 1, " "),
    ];
    let mut rng = rng();
    assert_eq!(pick_random(&sections, " and ", &mut rng), "a cat and on a hill");
}

#[test]
fn test_comma_led_fragment_suppresses_global_delimiter() {
    let sections = [
        section(&["a cat"], 1, 1, " "),
        section(&[", sitting"], 1, 1, " "),
    ];
    let mut rng = rng();
    assert_eq!(pick_random(&sections, " ", &mut rng), "a cat, sitting");
}

#[test]
fn test_semicolon_led_fragment_suppresses_global_delimiter() {
    let sections = [
        section(&["a cat"], 1, 1, " "),
        section(&["; oil painting"], 1, 1, " "),
    ];
    let mut rng = rng();
    assert_eq!(pick_random(&sections, " ", &mut rng), "a cat; oil painting");
}

#[test]
fn test_zero_pick_section_contributes_nothing() {
    let sections = [
        section(&["a cat"], 1, 1, " "),
        section(&["ignored"], 0, 0, " "),
        section(&["on a hill"], 1, 1, " "),
    ];
    let mut rng = rng();
    assert_eq!(pick_random(&sections, " ", &mut rng), "a cat on a hill");
}

#[test]
fn test_empty_section_list_yields_empty_prompt() {
    let mut rng = rng();
    assert_eq!(pick_random(&[], " ", &mut rng), "");
}

#[test]
fn test_sections_are_not_mutated_across_generations() {
    let sections = [section(&["a", "b", "c"], 2, 2, " ")];
    let mut rng = rng();

    let before = sections[0].tokens.clone();
    for _ in 0..20 {
        pick_random(&sections, " ", &mut rng);
    }
    assert_eq!(sections[0].tokens, before);
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let sections = [
        section(&["a", "b", "c", "d"], 1, 3, ", "),
        section(&["x", "y", "z"], 1, 2, " "),
    ];

    let first: Vec<String> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..10).map(|_| pick_random(&sections, " ", &mut rng)).collect()
    };
    let second: Vec<String> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..10).map(|_| pick_random(&sections, " ", &mut rng)).collect()
    };
    assert_eq!(first, second);
}

#[test]
fn test_normalize_substitutions() {
    assert_eq!(normalize("a cat,, oil painting"), "a cat, oil painting");
    assert_eq!(normalize("a cat, , oil painting"), "a cat, oil painting");
    assert_eq!(normalize("a cat and, oil painting"), "a cat, oil painting");
    assert_eq!(normalize("a portrait by and me"), "a portrait by me");
}

#[test]
fn test_normalize_trims_whitespace_then_commas() {
    assert_eq!(normalize("  a cat  "), "a cat");
    assert_eq!(normalize(",a cat,"), "a cat");
    // Commas are stripped after whitespace, so spaces they guarded survive.
    assert_eq!(normalize(" , a cat , "), " a cat ");
}

#[test]
fn test_normalize_is_idempotent_on_normalized_output() {
    let inputs = [
        "a cat,, oil painting",
        "a cat and, by the sea",
        "a portrait by and rembrandt",
        ",a cat, sitting,",
        "plain prompt with nothing to fix",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_dangling_connector_is_patched_end_to_end() {
    // A trailing "and" fragment followed by a comma-led fragment is the
    // artifact the " and," rule exists for.
    let sections = [
        section(&["a cat and"], 1, 1, " "),
        section(&[", sitting"], 1, 1, " "),
    ];
    let mut rng = rng();
    assert_eq!(pick_random(&sections, " ", &mut rng), "a cat, sitting");
}

#[test]
fn test_combinations_cross_product() {
    let sections = [
        section(&["a", "b"], 1, 1, " "),
        section(&["x", "y", "z"], 1, 1, " "),
    ];
    let all: Vec<String> = combinations(&sections, " ").collect();

    assert_eq!(all.len(), 6);
    assert_eq!(all[0], "a x");
    assert_eq!(all[1], "a y");
    assert_eq!(all[2], "a z");
    assert_eq!(all[3], "b x");
    assert_eq!(all[5], "b z");
}

#[test]
fn test_combinations_single_section() {
    let sections = [section(&["one", "two"], 1, 1, " ")];
    let all: Vec<String> = combinations(&sections, " ").collect();
    assert_eq!(all, vec!["one", "two"]);
}

#[test]
fn test_combinations_of_nothing_is_empty() {
    assert_eq!(combinations(&[], " ").count(), 0);
}

#[test]
fn test_template_convenience_methods() {
    let (template, _) = Template::parse(
        "[config]\n!delim=\", \"\n\n[prompt]\na cat\n\n[prompt]\nsitting\nsleeping\n",
    );

    let mut rng = rng();
    let prompt = template.pick_random(&mut rng);
    assert!(prompt == "a cat, sitting" || prompt == "a cat, sleeping");

    let all: Vec<String> = template.combinations().collect();
    assert_eq!(all, vec!["a cat, sitting", "a cat, sleeping"]);
}
