// crates/core/src/workflow/mod.rs
//
// Category detection here is a set of independent predicates, not a cascade:
// a title mentioning both video and writing gets a quick+thorough pair for
// each. The router's first-match priority rules live in router.rs instead.

pub mod diversify;
pub mod estimate;
pub mod templates;

pub use diversify::diversify;
pub use estimate::estimate_step_count;
pub use templates::select_templates;

use crate::catalog::Tool;
use crate::schemas::{StepTemplate, TaskStep, Workflow};

fn has_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn template(title: &str, description: &str, tool: Tool, prompt: String) -> StepTemplate {
    StepTemplate {
        title: title.to_string(),
        description: description.to_string(),
        tool: Some(tool),
        prompt: Some(prompt),
    }
}

fn quick(
    id: &str,
    description: &str,
    estimated_time: &str,
    step_title: &str,
    step_description: &str,
    tool: Tool,
    title: &str,
) -> Workflow {
    Workflow {
        id: id.to_string(),
        name: "Quick Path".to_string(),
        description: description.to_string(),
        estimated_time: Some(estimated_time.to_string()),
        steps: vec![TaskStep {
            id: "1".to_string(),
            title: step_title.to_string(),
            description: step_description.to_string(),
            tool: Some(tool),
            prompt: Some(title.to_string()),
            order: 1,
        }],
    }
}

fn thorough(
    id: &str,
    description: &str,
    estimated_time: &str,
    title: &str,
    templates: Vec<StepTemplate>,
) -> Workflow {
    // The estimate only ever extends the authored path: a terse title keeps
    // all the templates, a complex one grows "(Continued)" steps up to five.
    let count = estimate_step_count(title).max(templates.len()).min(5);
    let steps = diversify(select_templates(&templates, count));
    Workflow {
        id: id.to_string(),
        name: "Thorough Path".to_string(),
        description: description.to_string(),
        estimated_time: Some(estimated_time.to_string()),
        steps,
    }
}

/// Suggest a quick and a thorough workflow for every category the project
/// title matches, or a default pair when nothing matches. Pure and total.
pub fn suggest_workflows(title: &str) -> Vec<Workflow> {
    let t = title.to_lowercase();
    let mut workflows = Vec::new();

    // Video
    if has_any(&t, &["video", "film", "movie"]) {
        workflows.push(quick(
            "quick-video",
            "Jump straight to the best video platform",
            "5-10 min",
            "Create Video",
            "Generate your video using AI video tools",
            Tool::Runway,
            title,
        ));
        workflows.push(thorough(
            "thorough-video",
            "Research first, then script, then create video",
            "30-60 min",
            title,
            vec![
                template(
                    "Research",
                    "Gather information and facts about your topic",
                    Tool::Perplexity,
                    format!("Research information about: {title}"),
                ),
                template(
                    "Write Script",
                    "Create a script or outline for your video",
                    Tool::Chatgpt,
                    format!(
                        "Write a script for a video about: {title}. \
                         Include engaging content, clear structure, and key points."
                    ),
                ),
                template(
                    "Create Video",
                    "Generate your video using the script",
                    Tool::Runway,
                    format!("Create a video about: {title}"),
                ),
            ],
        ));
    }

    // Image / design
    if has_any(&t, &["image", "design", "graphic", "logo"]) {
        workflows.push(quick(
            "quick-image",
            "Generate image directly",
            "2-5 min",
            "Generate Image",
            "Create your image using AI",
            Tool::Dalle,
            title,
        ));
        workflows.push(thorough(
            "thorough-image",
            "Research and refine before creating",
            "15-30 min",
            title,
            vec![
                template(
                    "Research Styles",
                    "Find inspiration and style references",
                    Tool::Perplexity,
                    format!("Find design inspiration and styles for: {title}"),
                ),
                template(
                    "Generate Image",
                    "Create your image with refined prompts",
                    Tool::Dalle,
                    title.to_string(),
                ),
                template(
                    "Edit in Canva",
                    "Polish and edit your design",
                    Tool::Canva,
                    title.to_string(),
                ),
            ],
        ));
    }

    // Audio / music
    if has_any(&t, &["audio", "music", "song", "podcast"]) {
        workflows.push(quick(
            "quick-audio",
            "Generate audio directly",
            "3-5 min",
            "Generate Audio",
            "Create your audio content",
            Tool::Suno,
            title,
        ));
        workflows.push(thorough(
            "thorough-audio",
            "Plan and produce polished audio",
            "20-40 min",
            title,
            vec![
                template(
                    "Research",
                    "Research your topic",
                    Tool::Perplexity,
                    format!("Research information about: {title}"),
                ),
                template(
                    "Write Script",
                    "Create script or lyrics",
                    Tool::Chatgpt,
                    format!("Write a script or lyrics for: {title}"),
                ),
                template(
                    "Generate Audio",
                    "Produce your audio content",
                    Tool::Suno,
                    title.to_string(),
                ),
            ],
        ));
    }

    // Presentation
    if has_any(&t, &["presentation", "slide", "deck"]) {
        workflows.push(quick(
            "quick-presentation",
            "Generate presentation directly",
            "5-10 min",
            "Create Presentation",
            "Generate your presentation",
            Tool::Gamma,
            title,
        ));
        workflows.push(thorough(
            "thorough-presentation",
            "Research and structure before creating",
            "30-45 min",
            title,
            vec![
                template(
                    "Research",
                    "Gather information for your presentation",
                    Tool::Perplexity,
                    format!("Research information about: {title}"),
                ),
                template(
                    "Outline Content",
                    "Structure your presentation content",
                    Tool::Chatgpt,
                    format!("Create an outline for a presentation about: {title}"),
                ),
                template(
                    "Create Presentation",
                    "Generate your polished presentation",
                    Tool::Gamma,
                    title.to_string(),
                ),
            ],
        ));
    }

    // Web / app
    if has_any(&t, &["website", "web", "app", "page"]) {
        workflows.push(quick(
            "quick-web",
            "Generate website directly",
            "5-10 min",
            "Create Website",
            "Generate your website",
            Tool::FramerAi,
            title,
        ));
        workflows.push(thorough(
            "thorough-web",
            "Plan and design before building",
            "45-90 min",
            title,
            vec![
                template(
                    "Research & Plan",
                    "Research similar websites and plan features",
                    Tool::Perplexity,
                    format!("Research best practices and features for: {title}"),
                ),
                template(
                    "Design Mockup",
                    "Create design concepts",
                    Tool::Canva,
                    format!("Design mockup for: {title}"),
                ),
                template(
                    "Build Website",
                    "Generate your website",
                    Tool::FramerAi,
                    title.to_string(),
                ),
            ],
        ));
    }

    // Writing / content
    if has_any(&t, &["write", "article", "blog", "content"]) {
        workflows.push(quick(
            "quick-writing",
            "Generate content directly",
            "3-5 min",
            "Write Content",
            "Generate your content",
            Tool::Chatgpt,
            title,
        ));
        workflows.push(thorough(
            "thorough-writing",
            "Research and refine your content",
            "20-30 min",
            title,
            vec![
                template(
                    "Research",
                    "Gather information and facts",
                    Tool::Perplexity,
                    format!("Research information about: {title}"),
                ),
                template(
                    "Draft Content",
                    "Write your first draft",
                    Tool::Chatgpt,
                    format!("Write content about: {title}"),
                ),
                template(
                    "Refine & Edit",
                    "Improve and polish your content",
                    Tool::Chatgpt,
                    format!("Improve and refine this content: {title}"),
                ),
            ],
        ));
    }

    // Default pair when nothing matched
    if workflows.is_empty() {
        workflows.push(quick(
            "quick-default",
            "Get started immediately",
            "5-10 min",
            "Start Task",
            "Begin working on your project",
            Tool::Chatgpt,
            title,
        ));
        workflows.push(thorough(
            "thorough-default",
            "Plan and execute systematically",
            "30-60 min",
            title,
            vec![
                template(
                    "Research",
                    "Research your topic",
                    Tool::Perplexity,
                    format!("Research information about: {title}"),
                ),
                template(
                    "Plan & Organize",
                    "Create a plan for your project",
                    Tool::Chatgpt,
                    format!("Create a detailed plan for: {title}"),
                ),
                template(
                    "Execute",
                    "Work on your project",
                    Tool::Chatgpt,
                    title.to_string(),
                ),
            ],
        ));
    }

    workflows
}
