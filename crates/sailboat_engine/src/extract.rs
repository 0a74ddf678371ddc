//! Flattens a parsed document into the display elements the viewport draws.

use sailboat_core::{DisplayElement, ElementSequence, EMPTY_PAGE};
use sailboat_logging::sail_debug;
use scraper::Html;

use crate::markup::{collect_text, find_element};
use crate::{MarkupNode, NodeKind, PageContent};

/// Elements whose whole subtree is never displayed.
const SKIPPED_TAGS: [&str; 5] = ["style", "script", "head", "title", "meta"];

/// Extracts the display elements of acquired content.
///
/// A failed acquisition yields exactly its error; otherwise the markup is
/// parsed and handed to [`extract_tree`]. The result is never empty.
pub fn extract(content: &PageContent) -> ElementSequence {
    if !content.success {
        return vec![DisplayElement::error(content.error_message.as_str())];
    }
    let document = Html::parse_document(&content.html);
    let elements = extract_tree(document.tree.root());
    sail_debug!("extracted {} elements", elements.len());
    elements
}

/// Extracts the display elements below a document root.
///
/// Without a `<body>`, a document that has text is read from its `<html>`
/// element, or as plain lines when that is missing too.
pub fn extract_tree<'a, N: MarkupNode<'a>>(root: N) -> ElementSequence {
    let body = match find_element(root, "body") {
        Some(body) => body,
        None => {
            let text = collect_text(root);
            if text.trim().is_empty() {
                return vec![DisplayElement::error(EMPTY_PAGE)];
            }
            match find_element(root, "html") {
                Some(html) => html,
                None => return plaintext(&text),
            }
        }
    };

    let mut elements = extract_node(body);
    if let Some(title) = document_title(root) {
        elements.insert(0, DisplayElement::Title { text: title });
    }
    if elements.is_empty() {
        return vec![DisplayElement::error(EMPTY_PAGE)];
    }
    elements
}

fn plaintext(text: &str) -> ElementSequence {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(DisplayElement::text)
        .collect()
}

fn document_title<'a, N: MarkupNode<'a>>(root: N) -> Option<String> {
    let head = find_element(root, "head")?;
    let title = find_element(head, "title")?;
    Some(collect_text(title).trim().to_string())
}

/// One unit of pending work for the document walk.
enum Step<N> {
    Visit(N),
    /// Wraps the innermost open output into a compound link.
    CloseLink(Option<String>),
}

/// Flattens the subtree under `node` in document order.
///
/// The walk keeps its own stack so nesting depth is bounded by memory, not by
/// the thread stack. `outputs` holds one sequence per open compound link on top
/// of the result itself.
fn extract_node<'a, N: MarkupNode<'a>>(node: N) -> ElementSequence {
    let mut steps = vec![Step::Visit(node)];
    let mut outputs: Vec<ElementSequence> = vec![Vec::new()];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(node) => visit(node, &mut steps, &mut outputs),
            Step::CloseLink(href) => {
                let children = outputs.pop().unwrap_or_default();
                emit(
                    &mut outputs,
                    DisplayElement::Link {
                        href,
                        text: None,
                        children: Some(children),
                    },
                );
            }
        }
    }
    outputs.pop().unwrap_or_default()
}

fn visit<'a, N: MarkupNode<'a>>(
    node: N,
    steps: &mut Vec<Step<N>>,
    outputs: &mut Vec<ElementSequence>,
) {
    match node.kind() {
        NodeKind::Document | NodeKind::Comment | NodeKind::Other => {}
        NodeKind::Text(text) => {
            if !text.trim().is_empty() {
                let in_link = outputs.len() > 1;
                emit(
                    outputs,
                    DisplayElement::Text {
                        content: text.to_string(),
                        is_link_context: in_link,
                    },
                );
            }
        }
        NodeKind::Element(name) => match name.to_ascii_lowercase().as_str() {
            tag if SKIPPED_TAGS.contains(&tag) => {}
            "img" => emit(
                outputs,
                DisplayElement::Image {
                    source: node.attribute("src").unwrap_or_default().to_string(),
                    alt: node.attribute("alt").map(str::to_string),
                },
            ),
            "br" => emit(outputs, DisplayElement::line_break()),
            "a" => visit_anchor(node, steps, outputs),
            _ => push_children(node, steps),
        },
    }
}

/// Only the first child decides between a plain and a compound link.
fn visit_anchor<'a, N: MarkupNode<'a>>(
    anchor: N,
    steps: &mut Vec<Step<N>>,
    outputs: &mut Vec<ElementSequence>,
) {
    let href = anchor.attribute("href").map(str::to_string);
    let Some(first) = anchor.child_nodes().next() else {
        return;
    };

    match first.kind() {
        NodeKind::Text(text) if text.trim().is_empty() => {}
        NodeKind::Text(text) => emit(
            outputs,
            DisplayElement::Link {
                href,
                text: Some(text.to_string()),
                children: None,
            },
        ),
        _ => {
            outputs.push(Vec::new());
            steps.push(Step::CloseLink(href));
            push_children(anchor, steps);
        }
    }
}

/// Queues the children of `node` so they are visited in document order.
fn push_children<'a, N: MarkupNode<'a>>(node: N, steps: &mut Vec<Step<N>>) {
    let children: Vec<N> = node.child_nodes().collect();
    steps.extend(children.into_iter().rev().map(Step::Visit));
}

fn emit(outputs: &mut [ElementSequence], element: DisplayElement) {
    if let Some(out) = outputs.last_mut() {
        out.push(element);
    }
}
