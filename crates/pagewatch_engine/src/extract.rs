use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Element subtrees whose text is never rendered.
const SKIPPED_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

pub trait Extractor: Send + Sync {
    fn extract_text(&self, html: &str) -> String;
}

/// Extracts the visible text of a document: every rendered text node,
/// trimmed, with empties dropped and the rest joined by single newlines.
///
/// The output is what gets snapshotted and diffed, so it must be
/// deterministic for identical input markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibleTextExtractor;

impl Extractor for VisibleTextExtractor {
    fn extract_text(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut lines: Vec<String> = Vec::new();
        for child in document.tree.root().children() {
            visit_node(child, &mut lines);
        }
        lines.join("\n")
    }
}

fn visit_node(node: NodeRef<'_, Node>, lines: &mut Vec<String>) {
    match node.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        Node::Element(element) => {
            let tag = element.name().to_ascii_lowercase();
            if SKIPPED_TAGS.contains(&tag.as_str()) {
                return;
            }
            for child in node.children() {
                visit_node(child, lines);
            }
        }
        _ => {
            for child in node.children() {
                visit_node(child, lines);
            }
        }
    }
}
