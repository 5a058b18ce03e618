use select::document::Document;
use select::node::Node;
use select::predicate::{Attr, Class, Name, Predicate};

use crate::article::ArticleBody;
use crate::clean::{strip_boilerplate_phrases, DefaultDocumentCleaner, DocumentCleaner};
use crate::text;

/// Shortest paragraph line kept when assembling the body.
pub const MIN_LINE_LEN: usize = 20;

/// Bodies shorter than this after cleaning count as extraction failure.
pub const MIN_BODY_LEN: usize = 50;

/// Hard cap on the body handed to summarization.
pub const MAX_BODY_LEN: usize = 5000;

/// Placeholder when no heuristic matched a content region.
pub const NO_CONTAINER_PLACEHOLDER: &str = "Could not identify primary article content area.";

/// Placeholder when cleaning left too little text behind.
pub const INSUFFICIENT_CONTENT_PLACEHOLDER: &str =
    "Could not extract sufficient main article content after aggressive cleaning.";

/// A single container discovery heuristic.
type ContainerHeuristic = for<'a> fn(&'a Document) -> Option<Node<'a>>;

fn semantic_article(doc: &Document) -> Option<Node> {
    doc.find(Name("article")).next()
}

fn storytext_class(doc: &Document) -> Option<Node> {
    doc.find(Name("div").and(Class("storytext"))).next()
}

fn story_body_class(doc: &Document) -> Option<Node> {
    doc.find(Name("div").and(Class("story-body"))).next()
}

fn storytext_id(doc: &Document) -> Option<Node> {
    doc.find(Name("div").and(Attr("id", "storytext"))).next()
}

/// Structural matchers for the main content region, evaluated in order with
/// the most specific markup first. The first match wins.
const CONTAINER_HEURISTICS: [ContainerHeuristic; 4] = [
    semantic_article,
    storytext_class,
    story_body_class,
    storytext_id,
];

pub trait ContentExtractor {
    /// Locate the main content region of the page.
    fn content_container<'a>(&self, doc: &'a Document) -> Option<Node<'a>> {
        CONTAINER_HEURISTICS
            .iter()
            .find_map(|heuristic| heuristic(doc))
    }

    /// The cleaned body text of the page, or a diagnostic placeholder.
    ///
    /// Paragraphs below the container are collected with boilerplate subtrees
    /// pruned, short fragments dropped, the joined text whitespace-folded and
    /// run through the phrase cleanup chain, then capped at
    /// [`MAX_BODY_LEN`] chars.
    fn body_text(&self, doc: &Document) -> ArticleBody {
        let container = match self.content_container(doc) {
            Some(node) => node,
            None => return ArticleBody::unavailable(NO_CONTAINER_PLACEHOLDER),
        };

        let mut paragraphs: Vec<Node> = container.find(Name("p")).collect();
        if paragraphs.is_empty() {
            // some layouts carry prose in text blocks instead of paragraphs
            paragraphs = container
                .find(Name("div").and(Class("text-block")))
                .collect();
        }

        let lines: Vec<String> = paragraphs
            .iter()
            .filter(|p| !below_boilerplate(&container, p))
            .filter_map(|p| {
                let line = DefaultDocumentCleaner::clean_node_text(p);
                let line = line.trim();
                if text::char_len(line) > MIN_LINE_LEN {
                    Some(line.to_string())
                } else {
                    None
                }
            })
            .collect();

        let body = text::fold_whitespace(&lines.join("\n"));
        let body = strip_boilerplate_phrases(&body);
        let body = text::truncate_chars(&body, MAX_BODY_LEN).trim().to_string();

        if text::char_len(&body) < MIN_BODY_LEN {
            return ArticleBody::unavailable(INSUFFICIENT_CONTENT_PLACEHOLDER);
        }
        ArticleBody::Text(body)
    }
}

/// Whether a node sits below a pruned subtree inside the container. Such
/// paragraphs belong to figures, asides or chrome blocks, not to the body.
fn below_boilerplate(container: &Node, node: &Node) -> bool {
    let mut current = *node;
    while let Some(parent) = current.parent() {
        if parent.index() == container.index() {
            return false;
        }
        if DefaultDocumentCleaner::is_boilerplate(&parent) {
            return true;
        }
        current = parent;
    }
    false
}

/// Extractor tuned for story-page markup, the default strategy set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContentExtractor;

impl ContentExtractor for DefaultContentExtractor {}
