// crates/core/src/router.rs
//
// First-match keyword cascade. Category order and the sub-rule order inside
// each category are load-bearing: an ambiguous prompt ("write code for a
// website") resolves to whichever branch is tested first, so reordering
// changes output.

use crate::catalog::Tool;
use crate::schemas::RouteDecision;

fn has_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn decide(tool: Tool, confidence: f64, alternatives: [Tool; 2]) -> RouteDecision {
    RouteDecision {
        tool,
        confidence,
        alternatives: alternatives.to_vec(),
    }
}

const CODING_KEYWORDS: &[&str] = &[
    "code", "coding", "programming", "program", "script", "function", "algorithm",
    "debug", "bug", "fix", "error", "syntax", "api", "framework", "library",
    "javascript", "python", "typescript", "react", "node", "html", "css",
    "database", "sql", "query", "backend", "frontend", "full-stack",
    "component", "module", "package", "npm", "git", "repository", "repo",
    "test", "testing", "unit test", "integration", "deploy", "build",
];

const APP_BUILDER_KEYWORDS: &[&str] = &[
    "app", "website", "web app", "application", "prototype", "ui builder",
];

const REASONING_KEYWORDS: &[&str] = &[
    "analyze", "analysis", "reasoning", "logic", "think", "solve", "problem",
    "strategy", "plan", "decide", "decision", "recommend", "suggest", "advice",
    "explain", "understand", "concept", "theory", "how does", "why", "what if",
    "complex", "sophisticated", "multi-step", "workflow", "process", "automate",
    "agent", "assistant", "task",
];

const RESEARCH_KEYWORDS: &[&str] = &[
    "research", "sources", "citations", "cite", "reference", "latest", "recent",
    "news", "article", "data", "statistics", "facts", "accurate", "verify",
    "compare", "comparison", "versus", "vs", "difference", "find", "search",
    "what is", "who is", "when did", "where is", "current", "up-to-date",
];

const IMAGE_KEYWORDS: &[&str] = &[
    "image", "picture", "photo", "logo", "poster", "thumbnail", "art", "illustration",
    "graphic", "design", "visual", "drawing", "painting", "icon", "avatar",
    "banner", "header", "cover", "background", "wallpaper", "meme", "cartoon",
];

const WEBSITE_KEYWORDS: &[&str] = &[
    "website", "landing page", "web page", "site", "portfolio", "homepage",
    "layout", "ui", "user interface", "design system", "component library",
];

const VIDEO_KEYWORDS: &[&str] = &[
    "video", "b-roll", "shot list", "motion", "tiktok", "reel", "short",
    "clip", "footage", "animation", "animate", "moving", "dynamic",
];

const VOICE_KEYWORDS: &[&str] = &[
    "voice", "narration", "voiceover", "tts", "text-to-speech", "speak",
    "say", "audio", "sound", "vocal", "narrate",
];

const TRANSCRIPTION_KEYWORDS: &[&str] = &[
    "transcribe", "transcription", "speech to text", "stt", "convert audio",
    "audio to text", "subtitles", "captions", "dictation",
];

const MUSIC_KEYWORDS: &[&str] = &[
    "song", "music", "melody", "lyrics", "track", "beat", "instrumental",
    "composition", "musical", "audio track", "background music",
];

const PRESENTATION_KEYWORDS: &[&str] = &[
    "slides", "deck", "presentation", "pitch", "pitch deck", "slideshow",
    "powerpoint", "ppt", "keynote",
];

const NARRATIVE_KEYWORDS: &[&str] = &[
    "script", "narrative", "story", "podcast", "storytelling", "content",
    "video script", "audio script", "text-based", "edit video", "edit audio",
];

const WRITING_KEYWORDS: &[&str] = &[
    "write", "writing", "essay", "article", "blog", "content", "copy",
    "draft", "compose", "generate text", "create text",
];

/// Map free text to the best-fitting tool, with a confidence and up to two
/// alternatives. Total over all strings; unmatched input lands on the default
/// branch rather than failing.
pub fn route(text: &str) -> RouteDecision {
    let t = text.to_lowercase();

    // ===== CODING & PROGRAMMING =====
    if has_any(&t, CODING_KEYWORDS) {
        // Full app/website builds go to an app builder instead of a chat model
        if has_any(&t, APP_BUILDER_KEYWORDS) {
            return decide(Tool::Lovable, 0.85, [Tool::Chatgpt, Tool::FramerAi]);
        }
        return decide(Tool::Chatgpt, 0.88, [Tool::Perplexity, Tool::Lovable]);
    }

    // ===== REASONING & AGENTIC TASKS =====
    if has_any(&t, REASONING_KEYWORDS) {
        return decide(Tool::Chatgpt, 0.86, [Tool::Perplexity, Tool::Gamma]);
    }

    // ===== RESEARCH & FACTUAL INFORMATION =====
    // Web-aware research with citations
    if has_any(&t, RESEARCH_KEYWORDS) {
        return decide(Tool::Perplexity, 0.87, [Tool::Chatgpt, Tool::Gamma]);
    }

    // ===== VISUAL CREATION =====
    if has_any(&t, IMAGE_KEYWORDS) {
        // Detailed/parameterized image generation
        if has_any(&t, &["detailed", "specific", "parameter", "style", "control", "precise"]) {
            return decide(Tool::SdImage, 0.82, [Tool::Dalle, Tool::Canva]);
        }
        // Logos, brand assets, quick templates
        if has_any(&t, &["logo", "brand", "template", "quick", "professional"]) {
            return decide(Tool::Canva, 0.80, [Tool::Dalle, Tool::SdImage]);
        }
        return decide(Tool::Dalle, 0.81, [Tool::SdImage, Tool::Canva]);
    }

    // ===== WEBSITES & UI =====
    if has_any(&t, WEBSITE_KEYWORDS) {
        return decide(Tool::FramerAi, 0.83, [Tool::Canva, Tool::Lovable]);
    }

    // ===== VIDEO & MOTION =====
    if has_any(&t, VIDEO_KEYWORDS) {
        // Cinematic, music-driven visuals
        if has_any(&t, &["cinematic", "music video", "lyric", "visualizer", "ambient", "atmospheric"]) {
            return decide(Tool::Kaiber, 0.84, [Tool::Runway, Tool::Pika]);
        }
        // Fast stylized videos
        if has_any(&t, &["fast", "quick", "stylized", "style", "artistic"]) {
            return decide(Tool::Pika, 0.82, [Tool::Runway, Tool::Kaiber]);
        }
        return decide(Tool::Runway, 0.85, [Tool::Pika, Tool::Kaiber]);
    }

    // ===== AUDIO, VOICE & MUSIC =====
    if has_any(&t, VOICE_KEYWORDS) {
        return decide(Tool::Elevenlabs, 0.84, [Tool::Descript, Tool::Chatgpt]);
    }

    if has_any(&t, TRANSCRIPTION_KEYWORDS) {
        return decide(Tool::Whisper, 0.86, [Tool::Descript, Tool::Chatgpt]);
    }

    if has_any(&t, MUSIC_KEYWORDS) {
        // Lyrics-aware generation
        if has_any(&t, &["lyrics", "song with lyrics", "vocal", "singing"]) {
            return decide(Tool::Udio, 0.83, [Tool::Suno, Tool::Chatgpt]);
        }
        return decide(Tool::Suno, 0.85, [Tool::Udio, Tool::Chatgpt]);
    }

    // ===== PRESENTATIONS & NARRATIVES =====
    if has_any(&t, PRESENTATION_KEYWORDS) {
        return decide(Tool::Gamma, 0.83, [Tool::Tome, Tool::Canva]);
    }

    if has_any(&t, NARRATIVE_KEYWORDS) {
        if has_any(&t, &["edit", "editing", "video edit", "audio edit"]) {
            return decide(Tool::Descript, 0.82, [Tool::Chatgpt, Tool::Gamma]);
        }
        if has_any(&t, &["story", "narrative", "tome", "presentation story"]) {
            return decide(Tool::Tome, 0.79, [Tool::Gamma, Tool::Chatgpt]);
        }
        return decide(Tool::Descript, 0.78, [Tool::Chatgpt, Tool::Gamma]);
    }

    // ===== WRITING & GENERAL TASKS =====
    if has_any(&t, WRITING_KEYWORDS) {
        // Needs citations/research
        if has_any(&t, &["research", "sources", "cite", "facts", "accurate"]) {
            return decide(Tool::Perplexity, 0.84, [Tool::Chatgpt, Tool::Gamma]);
        }
        return decide(Tool::Chatgpt, 0.80, [Tool::Perplexity, Tool::Gamma]);
    }

    // ===== DEFAULT =====
    decide(Tool::Chatgpt, 0.75, [Tool::Perplexity, Tool::Gamma])
}
