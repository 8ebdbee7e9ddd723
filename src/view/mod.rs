//! Headless render tree of the form.
//!
//! The tree is what the terminal renderer draws, and what tests query the
//! way a user would look at the screen: by label, role, test id or text.

pub mod node;

pub use node::{Binding, Role, ViewNode};

use crate::form::field::Field;
use crate::form::state::{FormState, SubmittedRecord};
use crate::form::validation::ValidationErrors;

pub const TITLE: &str = "Contact Form";
pub const SUBMIT_TEXT: &str = "Submit";
pub const SUMMARY_TITLE: &str = "You Submitted:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    nodes: Vec<ViewNode>,
}

impl View {
    pub fn contact_form(
        state: &FormState,
        errors: &ValidationErrors,
        submitted: Option<&SubmittedRecord>,
    ) -> Self {
        let mut nodes = vec![ViewNode::heading(TITLE)];

        for field in Field::ALL {
            nodes.push(ViewNode::input(field, state.get(field)));
            if let Some(err) = errors.get(field) {
                nodes.push(ViewNode::error(field, err.to_string()));
            }
        }

        nodes.push(ViewNode::button(SUBMIT_TEXT));

        if let Some(record) = submitted {
            nodes.push(ViewNode::text(SUMMARY_TITLE));
            nodes.extend(
                record
                    .displayed()
                    .into_iter()
                    .map(|(field, value)| ViewNode::display(field, value)),
            );
        }

        Self { nodes }
    }

    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    pub fn by_label(&self, label: &str) -> Option<&ViewNode> {
        self.nodes.iter().find(|node| node.label == Some(label))
    }

    pub fn all_by_test_id(&self, test_id: &str) -> Vec<&ViewNode> {
        self.nodes
            .iter()
            .filter(|node| node.test_id == Some(test_id))
            .collect()
    }

    /// The single node carrying `test_id`; `None` when absent or ambiguous.
    pub fn by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        match self.all_by_test_id(test_id).as_slice() {
            [node] => Some(*node),
            _ => None,
        }
    }

    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        self.nodes.iter().find(|node| node.test_id == Some(test_id))
    }

    pub fn by_role(&self, role: Role) -> Vec<&ViewNode> {
        self.nodes.iter().filter(|node| node.role == role).collect()
    }

    /// First non-input node whose text contains `needle`, ignoring case.
    /// Input values are not visible text, so text boxes never match.
    pub fn query_text(&self, needle: &str) -> Option<&ViewNode> {
        self.nodes
            .iter()
            .filter(|node| node.role != Role::TextBox)
            .find(|node| node.has_text(needle))
    }
}
