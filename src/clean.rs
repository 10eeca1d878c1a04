use select::document::Document;
use select::node::Node;

/// Elements whose content is never rendered as text.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements that start a new line when rendered.
const BLOCK_ELEMENTS: [&str; 34] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

pub trait DocumentCleaner {
    /// Ignore nodes that do not contain visible text.
    fn is_hidden(node: &Node) -> bool {
        node.name()
            .map(|name| HIDDEN_ELEMENTS.contains(&name))
            .unwrap_or_default()
    }

    /// Whether the text of the node is separated from its surroundings.
    fn is_block(node: &Node) -> bool {
        node.name()
            .map(|name| BLOCK_ELEMENTS.contains(&name))
            .unwrap_or_default()
    }

    /// Extract all textual content from the node, but ignore those nodes that
    /// are not displayed.
    ///
    /// Text nodes are concatenated as is, block elements are surrounded by a
    /// space.
    fn clean_node_text(node: &Node) -> String {
        fn separate(string: &mut String) {
            if !string.is_empty() && !string.ends_with(char::is_whitespace) {
                string.push(' ');
            }
        }

        fn recur_text<T: DocumentCleaner + ?Sized>(node: &Node, string: &mut String) {
            if T::is_hidden(node) {
                return;
            }
            let block = T::is_block(node);
            if block {
                separate(string);
            }
            if let Some(text) = node.as_text() {
                string.push_str(text);
            }
            for child in node.children() {
                recur_text::<T>(&child, string)
            }
            if block {
                separate(string);
            }
        }

        let mut txt = String::new();
        recur_text::<Self>(node, &mut txt);
        txt
    }

    /// All visible text of the document.
    fn clean_document_text(doc: &Document) -> String {
        // top level nodes are the ones without a parent
        let mut txt = String::new();
        for node in (0..doc.nodes.len())
            .filter_map(|i| doc.nth(i))
            .filter(|node| node.parent().is_none())
        {
            let node_txt = Self::clean_node_text(&node);
            if node_txt.is_empty() {
                continue;
            }
            if !txt.is_empty() {
                txt.push(' ');
            }
            txt.push_str(&node_txt);
        }
        txt
    }
}

/// A standard implementation of a cleaner that skips scripts, styles and
/// other non rendered elements.
pub struct DefaultDocumentCleaner;

impl DocumentCleaner for DefaultDocumentCleaner {}
