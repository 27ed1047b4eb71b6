//! DOM Operation Errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found in the arena
    #[error("node {0} not found")]
    NotFound(NodeId),
    /// Operation needs an element node
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),
    /// Node is not a child of the given parent
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    /// Hierarchy error (e.g., inserting an ancestor into its descendant)
    #[error("cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomError::NotFound(NodeId(7)).to_string(), "node #7 not found");
        assert_eq!(
            DomError::NotAChild { parent: NodeId(1), child: NodeId(2) }.to_string(),
            "node #2 is not a child of #1"
        );
    }
}
