//! Loader for JFLAP `.jff` documents.
//!
//! A `.jff` file is an XML tree; the only parts this tool cares about are the
//! `<state>` and `<transition>` elements, wherever they sit in the tree.

use jff2tcdf_core::{State, Transition};

/// The state and transition elements of one `.jff` file, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub states: Vec<State>,
    pub transitions: Vec<Transition>,
}

/// A document that cannot be converted at all. Every variant is fatal to the
/// run: nothing is written for a document that fails to load.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not valid xml: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("<state> element is missing its id attribute")]
    MissingStateId,

    #[error("<transition> element is missing or has an empty <{0}>")]
    MissingEndpoint(&'static str),

    #[error("expected an integer id, got `{0}`")]
    BadId(String),
}

/// Reads the states and transitions out of `.jff` XML text.
pub fn parse(text: &str) -> Result<Document, Error> {
    let xml = roxmltree::Document::parse(text)?;
    let mut document = Document::default();
    for node in xml.descendants() {
        if node.has_tag_name("state") {
            // JFLAP also writes a name and coordinates; only the id and the
            // marker elements matter downstream.
            let id = node.attribute("id").ok_or(Error::MissingStateId)?;
            document.states.push(State {
                id: parse_id(id)?,
                is_final: node.children().any(|child| child.has_tag_name("final")),
                is_initial: node.children().any(|child| child.has_tag_name("initial")),
            });
        } else if node.has_tag_name("transition") {
            document.transitions.push(Transition {
                from: parse_id(endpoint(node, "from")?)?,
                to: parse_id(endpoint(node, "to")?)?,
                // JFLAP writes `<read/>` for epsilon edges; an empty label
                // expands to zero codes.
                read: child_text(node, "read").unwrap_or_default().to_owned(),
            });
        }
    }
    Ok(document)
}

fn endpoint<'a>(node: roxmltree::Node<'a, '_>, tag: &'static str) -> Result<&'a str, Error> {
    child_text(node, tag).ok_or(Error::MissingEndpoint(tag))
}

fn child_text<'a>(node: roxmltree::Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.has_tag_name(tag))
        .and_then(|child| child.text())
}

fn parse_id(text: &str) -> Result<u32, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::BadId(text.to_owned()))
}
