// crates/core/src/workflow/diversify.rs
//
// Single forward sweep: a fix applied at position i is not re-validated
// against later positions, so a substitution can in principle leave a new
// adjacent pair further down. Known limitation, kept single-pass on purpose.

use crate::catalog::Tool;
use crate::schemas::TaskStep;

const RESEARCH_POOL: &[Tool] = &[Tool::Perplexity, Tool::Chatgpt];
const WRITING_POOL: &[Tool] = &[Tool::Chatgpt, Tool::Perplexity];
const EDITING_POOL: &[Tool] = &[Tool::Chatgpt, Tool::Descript, Tool::Canva];
const PLANNING_POOL: &[Tool] = &[Tool::Chatgpt, Tool::Gamma, Tool::Perplexity];
const CREATION_POOL: &[Tool] = &[
    Tool::Chatgpt,
    Tool::Dalle,
    Tool::Runway,
    Tool::Suno,
    Tool::FramerAi,
    Tool::Gamma,
];

/// Last resort when the role pool is exhausted.
const ANY_POOL: &[Tool] = &[
    Tool::Chatgpt,
    Tool::Perplexity,
    Tool::Dalle,
    Tool::Runway,
    Tool::Suno,
    Tool::Gamma,
    Tool::Canva,
];

fn pool_for(step: &TaskStep) -> &'static [Tool] {
    let text = format!("{} {}", step.title, step.description).to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if mentions(&["research"]) {
        RESEARCH_POOL
    } else if mentions(&["write", "draft", "script"]) {
        WRITING_POOL
    } else if mentions(&["edit", "refine", "polish"]) {
        EDITING_POOL
    } else if mentions(&["plan", "outline", "organize"]) {
        PLANNING_POOL
    } else {
        CREATION_POOL
    }
}

fn alternative_for(step: &TaskStep, duplicate: Tool) -> Tool {
    pool_for(step)
        .iter()
        .chain(ANY_POOL.iter())
        .copied()
        .find(|t| *t != duplicate)
        // Every pool holds at least two distinct tools, so keeping the
        // duplicate is the documented relaxation, not a reachable state here.
        .unwrap_or(duplicate)
}

/// Break up back-to-back identical tool assignments. Length and orders are
/// untouched; only `tool` fields may change.
pub fn diversify(mut steps: Vec<TaskStep>) -> Vec<TaskStep> {
    for i in 1..steps.len() {
        let Some(prev) = steps[i - 1].tool else { continue };
        let Some(cur) = steps[i].tool else { continue };
        if prev != cur {
            continue;
        }

        // Prefer swapping with the next step when that actually removes
        // the duplicate.
        let next = steps.get(i + 1).and_then(|s| s.tool);
        match next {
            Some(next_tool) if next_tool != cur => {
                steps[i].tool = Some(next_tool);
                steps[i + 1].tool = Some(cur);
            }
            _ => {
                steps[i].tool = Some(alternative_for(&steps[i], cur));
            }
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &str, tool: Option<Tool>, order: u32) -> TaskStep {
        TaskStep {
            id: order.to_string(),
            title: title.to_string(),
            description: String::new(),
            tool,
            prompt: None,
            order,
        }
    }

    fn tools(steps: &[TaskStep]) -> Vec<Option<Tool>> {
        steps.iter().map(|s| s.tool).collect()
    }

    #[test]
    fn already_diverse_is_untouched() {
        let steps = vec![
            step("Research", Some(Tool::Perplexity), 1),
            step("Write", Some(Tool::Chatgpt), 2),
            step("Create", Some(Tool::Runway), 3),
        ];
        assert_eq!(diversify(steps.clone()), steps);
    }

    #[test]
    fn swaps_with_next_when_possible() {
        let steps = vec![
            step("Research", Some(Tool::Chatgpt), 1),
            step("Draft", Some(Tool::Chatgpt), 2),
            step("Create", Some(Tool::Runway), 3),
        ];
        let fixed = diversify(steps);
        assert_eq!(
            tools(&fixed),
            vec![Some(Tool::Chatgpt), Some(Tool::Runway), Some(Tool::Chatgpt)]
        );
    }

    #[test]
    fn substitutes_from_role_pool_at_the_end() {
        let steps = vec![
            step("Draft Content", Some(Tool::Chatgpt), 1),
            step("Refine & Edit", Some(Tool::Chatgpt), 2),
        ];
        let fixed = diversify(steps);
        // "Refine & Edit" reads as an editing step; first editing-pool
        // member that is not the duplicate.
        assert_eq!(fixed[1].tool, Some(Tool::Descript));
        assert_eq!(fixed[0].tool, Some(Tool::Chatgpt));
    }

    #[test]
    fn substitutes_when_next_shares_the_tool() {
        let steps = vec![
            step("Research topic", Some(Tool::Chatgpt), 1),
            step("Plan & Organize", Some(Tool::Chatgpt), 2),
            step("Execute", Some(Tool::Chatgpt), 3),
        ];
        let fixed = diversify(steps);
        // Swap can't help at i=1 (next is also chatgpt): planning pool fills
        // in. The sweep then clears i=2 as well.
        assert_eq!(fixed[1].tool, Some(Tool::Gamma));
        assert_ne!(fixed[2].tool, fixed[1].tool);
    }

    #[test]
    fn ignores_undefined_tools() {
        let steps = vec![
            step("One", None, 1),
            step("Two", None, 2),
            step("Three", Some(Tool::Dalle), 3),
        ];
        assert_eq!(diversify(steps.clone()), steps);
    }

    #[test]
    fn preserves_length_and_orders() {
        let steps = vec![
            step("A", Some(Tool::Suno), 1),
            step("B", Some(Tool::Suno), 2),
            step("C", Some(Tool::Suno), 3),
            step("D", Some(Tool::Suno), 4),
        ];
        let fixed = diversify(steps);
        assert_eq!(fixed.len(), 4);
        for (i, s) in fixed.iter().enumerate() {
            assert_eq!(s.order, (i + 1) as u32);
        }
    }
}
