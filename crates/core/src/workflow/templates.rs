// crates/core/src/workflow/templates.rs

use crate::schemas::{StepTemplate, TaskStep};

/// Pick exactly `count` steps out of an ordered template list, keeping the
/// first and last templates as anchors.
///
/// When `count` is below the template count, the middle slots sample the
/// interior templates in order (repeats are allowed). When `count` exceeds it,
/// the template nearest the midpoint is duplicated as a "(Continued)" step
/// until the plan is long enough. Either way the result has exactly `count`
/// entries with contiguous 1-based orders.
///
/// Preconditions: `count >= 2` and `templates` non-empty. An empty template
/// list is a caller bug and panics.
pub fn select_templates(templates: &[StepTemplate], count: usize) -> Vec<TaskStep> {
    debug_assert!(count >= 2, "plans are never shorter than two steps");

    let mut picked: Vec<StepTemplate> = if count <= templates.len() {
        let mut out = vec![templates[0].clone()];
        if count > 2 {
            let middle = &templates[1..templates.len() - 1];
            let middle_count = count - 2;
            for i in 0..middle_count {
                out.push(middle[i * middle.len() / middle_count].clone());
            }
        }
        out.push(templates[templates.len() - 1].clone());
        out
    } else {
        let mut out = templates.to_vec();
        while out.len() < count {
            let mid = out.len() / 2;
            let mut extra = out[mid].clone();
            extra.title = format!("{} (Continued)", extra.title);
            extra.description = format!("Continue {}", extra.description.to_lowercase());
            out.insert(mid, extra);
        }
        out
    };

    picked.truncate(count);
    picked
        .into_iter()
        .enumerate()
        .map(|(i, t)| TaskStep {
            id: (i + 1).to_string(),
            title: t.title,
            description: t.description,
            tool: t.tool,
            prompt: t.prompt,
            order: (i + 1) as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tool;

    fn template(title: &str) -> StepTemplate {
        StepTemplate {
            title: title.to_string(),
            description: format!("{title} description"),
            tool: Some(Tool::Chatgpt),
            prompt: Some(format!("{title} prompt")),
        }
    }

    fn fixtures(n: usize) -> Vec<StepTemplate> {
        (1..=n).map(|i| template(&format!("T{i}"))).collect()
    }

    #[test]
    fn keeps_first_and_last_anchors() {
        for len in 2..=6 {
            let templates = fixtures(len);
            for count in 2..=len {
                let steps = select_templates(&templates, count);
                assert_eq!(steps.len(), count);
                assert_eq!(steps[0].title, "T1", "len={len} count={count}");
                assert_eq!(steps[count - 1].title, format!("T{len}"), "len={len} count={count}");
            }
        }
    }

    #[test]
    fn two_of_many_is_first_and_last() {
        let steps = select_templates(&fixtures(5), 2);
        assert_eq!(steps[0].title, "T1");
        assert_eq!(steps[1].title, "T5");
    }

    #[test]
    fn middle_slots_sample_in_order() {
        let steps = select_templates(&fixtures(5), 4);
        // middle of [T2, T3, T4] sampled at floor(i * 3 / 2): T2, T3
        let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["T1", "T2", "T3", "T5"]);
    }

    #[test]
    fn extends_past_template_count_with_continued_steps() {
        let steps = select_templates(&fixtures(3), 5);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].title, "T1");
        assert_eq!(steps[4].title, "T3");
        let continued = steps.iter().filter(|s| s.title.ends_with("(Continued)")).count();
        assert_eq!(continued, 2);
        let c = steps.iter().find(|s| s.title.ends_with("(Continued)")).unwrap();
        assert!(c.description.starts_with("Continue "), "{}", c.description);
    }

    #[test]
    fn orders_are_contiguous_and_ids_match() {
        for count in [2, 3, 5] {
            let steps = select_templates(&fixtures(3), count);
            for (i, step) in steps.iter().enumerate() {
                assert_eq!(step.order, (i + 1) as u32);
                assert_eq!(step.id, (i + 1).to_string());
            }
        }
    }
}
