// crates/core/src/workflow/estimate.rs

/// Prompts mentioning these get one extra step.
const COMPLEXITY_KEYWORDS: &[&str] = &[
    "detailed", "comprehensive", "complete", "professional", "polished",
    "complex", "advanced", "multiple", "several", "full",
];

/// More than two of these in one prompt reads as a multi-part request.
const CONJUNCTIONS: &[&str] = &["and", "then", "after", "before", "also", "plus"];

/// Estimate how many plan steps a prompt deserves, always within [2, 5].
pub fn estimate_step_count(prompt: &str) -> usize {
    let t = prompt.to_lowercase();
    let mut count = 2;

    let chars = t.chars().count();
    if chars > 100 {
        count += 1;
    }
    if chars > 200 {
        count += 1;
    }

    let words: Vec<&str> = t
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();
    if words.len() > 20 {
        count += 1;
    }

    if COMPLEXITY_KEYWORDS.iter().any(|w| t.contains(w)) {
        count += 1;
    }

    let conjunctions = words.iter().filter(|w| CONJUNCTIONS.contains(w)).count();
    if conjunctions > 2 {
        count += 1;
    }

    count.clamp(2, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_within_bounds() {
        let long = "step ".repeat(200);
        for prompt in ["", "short", &long] {
            let n = estimate_step_count(prompt);
            assert!((2..=5).contains(&n), "{prompt:.20}: {n}");
        }
    }

    #[test]
    fn empty_prompt_is_two_steps() {
        assert_eq!(estimate_step_count(""), 2);
    }

    #[test]
    fn short_simple_prompt_stays_at_two() {
        assert_eq!(estimate_step_count("make a music video about space"), 2);
    }

    #[test]
    fn length_and_word_count_add_steps() {
        // 101+ chars but few distinct signals
        let medium = "a".repeat(101);
        assert_eq!(estimate_step_count(&medium), 3);

        // 201+ chars adds the second length bump
        let long = "a".repeat(201);
        assert_eq!(estimate_step_count(&long), 4);
    }

    #[test]
    fn complexity_keywords_add_a_step() {
        assert_eq!(estimate_step_count("a detailed plan"), 3);
    }

    #[test]
    fn many_conjunctions_add_a_step() {
        assert_eq!(estimate_step_count("research and draft then edit and publish"), 3);
    }

    #[test]
    fn everything_at_once_clamps_to_five() {
        let prompt = format!(
            "{} and then also plus after a detailed comprehensive professional pass",
            "write the chapter ".repeat(15)
        );
        assert_eq!(estimate_step_count(&prompt), 5);
    }
}
