use crate::entity::MarkupLanguage;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Template selector: the payload-free face of an entity kind.
///
/// `PreLanguage` is the HTML fenced-code-with-language template; the group
/// renderer never selects it, but it is reachable through
/// [`apply_template`] for callers assembling markup themselves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TemplateKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    PreLanguage,
    TextLink,
    TextMention,
}

impl TemplateKind {
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Bold => "bold",
            TemplateKind::Italic => "italic",
            TemplateKind::Underline => "underline",
            TemplateKind::Strikethrough => "strikethrough",
            TemplateKind::Code => "code",
            TemplateKind::Pre => "pre",
            TemplateKind::PreLanguage => "pre_language",
            TemplateKind::TextLink => "text_link",
            TemplateKind::TextMention => "text_mention",
        }
    }
}

// Process-wide, read-only: initialized on first use, never mutated after.
static MARKUP_MAP: Lazy<HashMap<(MarkupLanguage, TemplateKind), &'static str>> = Lazy::new(|| {
    use MarkupLanguage::{Html, Markdown};
    use TemplateKind::*;

    let mut map = HashMap::new();
    map.insert((Html, Bold), "<b>%s</b>");
    map.insert((Html, Italic), "<i>%s</i>");
    map.insert((Html, Underline), "<u>%s</u>");
    map.insert((Html, Strikethrough), "<s>%s</s>");
    map.insert((Html, TextLink), "<a href=\"%s\">%s</a>");
    map.insert((Html, TextMention), "<a href=\"tg://user?id=%s\">%s</a>");
    map.insert((Html, Code), "<code>%s</code>");
    map.insert((Html, Pre), "<pre>%s</pre>");
    map.insert(
        (Html, PreLanguage),
        "<pre><code class=\"language-%s\">%s</code></pre>",
    );
    map.insert((Markdown, Bold), "*%s*");
    map.insert((Markdown, Italic), "_%s_\r");
    map.insert((Markdown, Underline), "__%s__");
    map.insert((Markdown, Strikethrough), "~%s~");
    map.insert((Markdown, TextLink), "[%s](%s)");
    map.insert((Markdown, TextMention), "[%s](tg://user?id=%s)");
    map.insert((Markdown, Code), "`%s`");
    map.insert((Markdown, Pre), "```%s\n%s\n```");
    map
});

/// Fills the template registered for `(language, kind)` with `args`,
/// substituted positionally. Surplus arguments are dropped and missing
/// ones substitute as empty, so a template may ignore trailing arguments.
///
/// The argument order is kind-specific; see [`crate::render`] for the
/// orders the renderer uses. No escaping is applied to the arguments.
pub fn apply_template(
    language: MarkupLanguage,
    kind: TemplateKind,
    args: &[&str],
) -> Result<String, MarkupError> {
    let template = MARKUP_MAP
        .get(&(language, kind))
        .ok_or(MarkupError::UnsupportedMarkup {
            language,
            kind: kind.name(),
        })?;
    Ok(substitute(template, args))
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        out.push_str(args.next().copied().unwrap_or(""));
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MarkupError {
    /// The requested markup language has no template for this entity kind.
    UnsupportedMarkup {
        language: MarkupLanguage,
        kind: &'static str,
    },
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::UnsupportedMarkup { language, kind } => {
                write!(f, "no {} markup for entity kind `{}`", language.name(), kind)
            }
        }
    }
}

impl Error for MarkupError {}

#[cfg(test)]
mod tests {
    use super::{MarkupError, TemplateKind, apply_template, substitute};
    use crate::entity::MarkupLanguage;

    #[test]
    fn substitution_is_positional() {
        assert_eq!(substitute("<b>%s</b>", &["x"]), "<b>x</b>");
        assert_eq!(substitute("[%s](%s)", &["text", "url"]), "[text](url)");
        // Surplus arguments drop, missing ones go empty.
        assert_eq!(substitute("<pre>%s</pre>", &["x", "rust"]), "<pre>x</pre>");
        assert_eq!(substitute("[%s](%s)", &["text"]), "[text]()");
    }

    #[test]
    fn link_templates_differ_by_family() {
        let html = apply_template(
            MarkupLanguage::Html,
            TemplateKind::TextLink,
            &["https://example.com", "here"],
        );
        assert_eq!(
            html.as_deref(),
            Ok("<a href=\"https://example.com\">here</a>")
        );

        let markdown = apply_template(
            MarkupLanguage::Markdown,
            TemplateKind::TextLink,
            &["here", "https://example.com"],
        );
        assert_eq!(markdown.as_deref(), Ok("[here](https://example.com)"));
    }

    #[test]
    fn missing_pair_is_unsupported() {
        let result = apply_template(MarkupLanguage::Markdown, TemplateKind::PreLanguage, &["x"]);
        assert_eq!(
            result,
            Err(MarkupError::UnsupportedMarkup {
                language: MarkupLanguage::Markdown,
                kind: "pre_language",
            })
        );
    }

    #[test]
    fn pre_language_is_reachable_directly() {
        let html = apply_template(
            MarkupLanguage::Html,
            TemplateKind::PreLanguage,
            &["rust", "fn main() {}"],
        );
        assert_eq!(
            html.as_deref(),
            Ok("<pre><code class=\"language-rust\">fn main() {}</code></pre>")
        );
    }
}
