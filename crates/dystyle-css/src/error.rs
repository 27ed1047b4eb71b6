//! Compile errors

use std::fmt;

use dystyle_dom::{DomError, NodeId};

/// Everything known about a class name whose properties and values disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchReport {
    pub class_name: String,
    pub properties: String,
    pub values: String,
    pub validated_properties: Vec<String>,
    pub rejected_properties: Vec<String>,
    pub validated_values: Vec<String>,
    pub rejected_values: Vec<String>,
    /// Start tag of the element carrying the class
    pub element: String,
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "properties and values count mismatch in `{}`: {} properties {:?} (rejected {:?}) from `{}`, \
             {} values {:?} (rejected {:?}) from `{}`, element {}",
            self.class_name,
            self.validated_properties.len(),
            self.validated_properties,
            self.rejected_properties,
            self.properties,
            self.validated_values.len(),
            self.validated_values,
            self.rejected_values,
            self.values,
            self.element,
        )
    }
}

/// Fatal failure compiling one class name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("{0}")]
    CountMismatch(Box<MismatchReport>),
    #[error("class name `{class_name}` resolved to no declarations")]
    NoDeclarations { class_name: String },
    #[error("element {0} is not attached to the document")]
    DetachedElement(NodeId),
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl CompileError {
    /// Raw class name the error refers to, when known
    pub fn class_name(&self) -> Option<&str> {
        match self {
            CompileError::CountMismatch(report) => Some(&report.class_name),
            CompileError::NoDeclarations { class_name } => Some(class_name),
            CompileError::DetachedElement(_) | CompileError::Dom(_) => None,
        }
    }
}
