use crate::define_catalog;

/// Tool the router and deep links fall back to when nothing better fits.
pub const FALLBACK: Tool = Tool::Chatgpt;

define_catalog! {
    // Text & research
    Chatgpt => "chatgpt" {
        link: "https://chat.openai.com/?q=",
        label: "Open in ChatGPT"
    },
    Perplexity => "perplexity" {
        link: "https://www.perplexity.ai/search?q=",
        label: "Open in Perplexity"
    },

    // Images & design
    Dalle => "dalle" {
        link: "https://labs.openai.com/?prompt=",
        label: "Open DALL·E"
    },
    SdImage => "sd_image" {
        link: "https://clipdrop.co/stable-diffusion?prompt=",
        label: "Open Stable Diffusion"
    },
    Canva => "canva" {
        link: "https://www.canva.com/?query=",
        label: "Open Canva"
    },
    FramerAi => "framer_ai" {
        link: "https://www.framer.com/ai/?prompt=",
        label: "Open Framer AI"
    },
    Lovable => "lovable" {
        link: "https://lovable.dev/?prompt=",
        label: "Open Loveable"
    },

    // Video
    Runway => "runway" {
        link: "https://app.runwayml.com/?prompt=",
        label: "Open Runway"
    },
    Pika => "pika" {
        link: "https://pika.art/?prompt=",
        label: "Open Pika Labs"
    },
    Kaiber => "kaiber" {
        link: "https://www.kaiber.ai/?prompt=",
        label: "Open Kaiber"
    },

    // Audio, voice & music
    Elevenlabs => "elevenlabs" {
        link: "https://elevenlabs.io/app/speech-synthesis?text=",
        label: "Open ElevenLabs"
    },
    Whisper => "whisper" {
        link: "https://huggingface.co/spaces/openai/whisper?prompt=",
        label: "Open Whisper"
    },
    Suno => "suno" {
        link: "https://suno.com/?prompt=",
        label: "Open Suno"
    },
    Udio => "udio" {
        link: "https://www.udio.com/?prompt=",
        label: "Open Udio"
    },

    // Narrative & presentations
    Descript => "descript" {
        link: "https://www.descript.com/app?prompt=",
        label: "Open Descript"
    },
    Gamma => "gamma" {
        link: "https://gamma.app/?prompt=",
        label: "Open Gamma"
    },
    Tome => "tome" {
        link: "https://tome.app/?prompt=",
        label: "Open Tome"
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_tag(tool.tag()), Some(*tool));
        }
        assert_eq!(Tool::from_tag("does_not_exist"), None);
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Tool::SdImage).unwrap(), "\"sd_image\"");
        let parsed: Tool = serde_json::from_str("\"framer_ai\"").unwrap();
        assert_eq!(parsed, Tool::FramerAi);
    }
}
