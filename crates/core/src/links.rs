// crates/core/src/links.rs

use crate::catalog::Tool;
use crate::schemas::DeepLink;

/// Build a URL that opens `tool` pre-filled with `text`. Only constructs the
/// string; nothing is fetched.
pub fn build_deep_link(tool: Tool, text: &str) -> DeepLink {
    let (prefix, label) = tool.link_parts();
    let q = urlencoding::encode(text);
    DeepLink {
        url: format!("{prefix}{q}"),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_query_text() {
        let link = build_deep_link(Tool::Dalle, "a cat");
        assert_eq!(link.url, "https://labs.openai.com/?prompt=a%20cat");
        assert_eq!(link.label, "Open DALL·E");
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            build_deep_link(Tool::Perplexity, "rust borrow checker"),
            build_deep_link(Tool::Perplexity, "rust borrow checker"),
        );
    }

    #[test]
    fn every_tool_produces_a_usable_link() {
        for tool in Tool::ALL {
            let link = build_deep_link(*tool, "hello world");
            assert!(link.url.starts_with("https://"), "{}", link.url);
            assert!(link.url.ends_with("hello%20world"), "{}", link.url);
            assert!(link.label.starts_with("Open"), "{}", link.label);
        }
    }

    #[test]
    fn empty_text_is_fine() {
        let link = build_deep_link(Tool::Chatgpt, "");
        assert_eq!(link.url, "https://chat.openai.com/?q=");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let link = build_deep_link(Tool::Suno, "lo-fi & chill?");
        assert!(!link.url[link.url.find('=').unwrap()..].contains('&'));
        assert!(link.url.ends_with("lo-fi%20%26%20chill%3F"), "{}", link.url);
    }
}
