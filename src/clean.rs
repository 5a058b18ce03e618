use regex::Regex;

use select::node::Node;

use lazy_static::lazy_static;

lazy_static! {

    /// Class/id names that mark a subtree as page chrome rather than article body.
    pub(crate) static ref RE_BOILERPLATE_NODES: Regex = Regex::new(r###"(?i)media-caption|credit|byline|promo|share|social|tags|related-content|skip-link|audio-module|play-button|header|footer|meta|timestamp"###).unwrap();

    /// Ordered cleanup passes over the assembled body text. Later rules clean
    /// residue left by earlier ones, so order matters; each pass runs on the
    /// whole accumulated text with trimming in between.
    pub(crate) static ref CLEANUP_RULES: Vec<CleanupRule> = vec![
        CleanupRule::new(r"(?i)toggle caption", ""),
        CleanupRule::new(r"(?i)download audio", ""),
        CleanupRule::new(r"(?i)listen to the story", ""),
        CleanupRule::new(r"(?i)read more", ""),
        CleanupRule::new(r"This story was produced by\s*.*", ""),
        CleanupRule::new(r"(\s*\(AP\)\s*|\s*\(Reuters\)\s*|\s*\(NPR\)\s*|\s*\(CNN\)\s*|\s*\(New York Times\)\s*)", ""),
        CleanupRule::new(r"(\s*NPR is a\s*.*)", ""),
        CleanupRule::new(r"(\s*Copyright\s*\d{4}\s*NPR)", ""),
        CleanupRule::new(r"^[A-Z][a-z]+ [A-Z][a-z]+/(Getty|AP|NPR) Images(hide caption)?\s*", ""),
        CleanupRule::new(r"^(Getty|AP|NPR) Images(hide caption)?\s*", ""),
        CleanupRule::new(r"^(.*?)/(Associated Press|Reuters|AFP|NPR)(hide caption)?\s*", ""),
        CleanupRule::new(r"(?i)^(.*?)\s*hide caption\s*", ""),
        CleanupRule::new(r"(?i)^(Credit|Source|Photo by|AP Photo|REUTERS/|NPR photo|Image caption):?\s*.*", ""),
        CleanupRule::new(r"(?i)^(Image|Photo|Video)\s+via\s+.*", ""),
        CleanupRule::new(r"(?i)\b(embed|enlarge|audio|video|picture|photo|illustration|graphic)\b", ""),
        CleanupRule::new(r"\s{2,}", " "),
    ];

}

/// Tag names whose subtrees never contribute article text.
const SKIP_TAGS: [&str; 8] = [
    "script",
    "style",
    "figure",
    "img",
    "blockquote",
    "aside",
    "ul",
    "ol",
];

const ATTR_TO_CHECK: [&str; 2] = ["class", "id"];

/// One pass of the boilerplate phrase cleanup chain. Rules are data, not
/// code, so each can be exercised on its own.
#[derive(Debug)]
pub struct CleanupRule {
    pattern: Regex,
    replacement: &'static str,
}

impl CleanupRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Applies this rule to the text and trims the result.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .trim()
            .to_string()
    }
}

/// Runs the full cleanup chain over the assembled body text.
pub fn strip_boilerplate_phrases(text: &str) -> String {
    CLEANUP_RULES
        .iter()
        .fold(text.trim().to_string(), |txt, rule| rule.apply(&txt))
}

pub trait DocumentCleaner {
    /// Whether this node roots a subtree that does not belong to the article:
    /// a non-content tag, or any element whose class/id matches the
    /// boilerplate name pattern.
    fn is_boilerplate(node: &Node) -> bool {
        if let Some(name) = node.name() {
            if SKIP_TAGS.contains(&name) {
                return true;
            }
        }
        for attr in ATTR_TO_CHECK.iter() {
            if let Some(value) = node.attr(attr) {
                if RE_BOILERPLATE_NODES.is_match(value) {
                    return true;
                }
            }
        }
        false
    }

    /// Extract all textual content below the node, pruning boilerplate
    /// subtrees entirely. The document itself is never mutated; excluded
    /// subtrees simply contribute nothing downstream.
    fn clean_node_text(node: &Node) -> String {
        fn recur_text<T: DocumentCleaner + ?Sized>(node: &Node, string: &mut String) {
            if T::is_boilerplate(node) {
                return;
            }
            if let Some(text) = node.as_text() {
                string.push_str(text);
            }
            for child in node.children() {
                recur_text::<T>(&child, string)
            }
        }

        let mut txt = String::new();
        recur_text::<Self>(node, &mut txt);
        txt
    }
}

/// A standard implementation of a cleaner that only extracts good textual
/// content from the nodes descendants.
pub struct DefaultDocumentCleaner;

impl DocumentCleaner for DefaultDocumentCleaner {}

#[cfg(test)]
mod tests {
    use super::*;
    use select::document::Document;
    use select::predicate::Name;

    fn first_node_text(html: &str, tag: &str) -> String {
        let doc = Document::from(html);
        let node = doc.find(Name(tag)).next().unwrap();
        DefaultDocumentCleaner::clean_node_text(&node)
    }

    #[test]
    fn prunes_boilerplate_classes() {
        let html = r#"<p>City council voted on Tuesday.<span class="credit">Jane Doe/AP</span></p>"#;
        assert_eq!(first_node_text(html, "p"), "City council voted on Tuesday.");
    }

    #[test]
    fn prunes_script_and_figure_subtrees() {
        let html = r#"<div><p>Kept text.</p><script>var x = 1;</script><figure><p>Caption text inside figure.</p></figure></div>"#;
        assert_eq!(first_node_text(html, "div"), "Kept text.");
    }

    #[test]
    fn matches_boilerplate_names_anywhere_in_attr() {
        let doc = Document::from(r#"<div class="story share-tools">x</div>"#);
        let node = doc.find(Name("div")).next().unwrap();
        assert!(DefaultDocumentCleaner::is_boilerplate(&node));
    }

    #[test]
    fn plain_paragraph_is_not_boilerplate() {
        let doc = Document::from(r#"<p class="story-paragraph">x</p>"#);
        let node = doc.find(Name("p")).next().unwrap();
        assert!(!DefaultDocumentCleaner::is_boilerplate(&node));
    }

    #[test]
    fn rule_caption_toggle() {
        assert_eq!(
            CLEANUP_RULES[0].apply("Toggle Caption The mayor spoke."),
            "The mayor spoke."
        );
    }

    #[test]
    fn rule_wire_service_attribution() {
        assert_eq!(
            CLEANUP_RULES[5].apply("WASHINGTON (AP) Lawmakers met."),
            "WASHINGTONLawmakers met."
        );
    }

    #[test]
    fn rule_hide_caption_prefix() {
        assert_eq!(
            CLEANUP_RULES[11].apply("A crowd outside the court hide caption The trial opened."),
            "The trial opened."
        );
    }

    #[test]
    fn rule_leading_credit_line() {
        assert_eq!(
            CLEANUP_RULES[12].apply("Photo by Jane Doe for the paper"),
            ""
        );
    }

    #[test]
    fn chain_strips_media_nouns_and_double_spaces() {
        assert_eq!(
            strip_boilerplate_phrases("The audio recording surfaced  later."),
            "The recording surfaced later."
        );
    }

    #[test]
    fn chain_is_idempotent_on_clean_text() {
        let clean = "Senators debated the measure for six hours before the final vote.";
        assert_eq!(strip_boilerplate_phrases(clean), clean);
        let once = strip_boilerplate_phrases("Toggle caption Senators debated the measure.");
        assert_eq!(strip_boilerplate_phrases(&once), once);
    }
}
