// crates/core/src/macros.rs

#[macro_export]
macro_rules! define_catalog {
    (
        $(
            $variant:ident => $tag:literal {
                link: $link:literal,
                label: $label:literal
            }
        ),* $(,)?
    ) => {
        /// The closed catalog of external AI tools. Serializes as the short tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum Tool {
            $(
                #[serde(rename = $tag)]
                $variant
            ),*
        }

        impl Tool {
            pub const ALL: &'static [Tool] = &[$(Tool::$variant),*];

            pub fn tag(&self) -> &'static str {
                match self {
                    $(Tool::$variant => $tag),*
                }
            }

            pub fn from_tag(tag: &str) -> Option<Tool> {
                match tag {
                    $($tag => Some(Tool::$variant),)*
                    _ => None,
                }
            }

            /// URL prefix the encoded query text gets appended to, plus the
            /// human label shown on the open button.
            pub fn link_parts(&self) -> (&'static str, &'static str) {
                match self {
                    $(Tool::$variant => ($link, $label)),*
                }
            }
        }
    };
}
