//! Rule compiler
//!
//! Compiles one [`ClassNameMatch`] against its element into a [`CssRule`].
//! The stages run in order and each is a plain function of its input:
//!
//! 1. [`validate_properties`] resolves the property tokens
//! 2. [`validate_values`] parses the value tokens
//! 3. [`validate_media_query`] turns the `MQ` token into a condition
//! 4. the accepted counts are cross-checked, a mismatch is fatal
//! 5. the selector is derived and the rule text emitted
//!
//! Rejected tokens in stages 1 to 3 are soft: they are logged and dropped.

use dystyle_dom::{DomError, DomTree, NodeId};

use crate::error::{CompileError, MismatchReport};
use crate::grammar::{ClassNameMatch, Pseudo};
use crate::media::MediaCondition;
use crate::patterns::sanitize_class_name;
use crate::structure::{Selector, SelectorContext, StructuralSpec};
use crate::values::Value;
use crate::{CssRule, Declaration, properties};

/// Accepted and rejected tokens of one validation stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    pub accepted: Vec<T>,
    pub rejected: Vec<String>,
}

impl<T> Default for Validated<T> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Resolve dot-joined property tokens into canonical names
pub fn validate_properties(token: &str) -> Validated<String> {
    let mut out = Validated::default();
    for part in token.split('.') {
        let resolved = properties::resolve(part);
        if resolved.is_empty() {
            tracing::trace!("Rejected property token `{}`", part);
            out.rejected.push(part.to_string());
        } else {
            tracing::trace!("Property `{}` -> {:?}", part, resolved);
            out.accepted.extend(resolved);
        }
    }
    out
}

/// Parse dot-joined value tokens
pub fn validate_values(token: &str) -> Validated<Value> {
    let mut out = Validated::default();
    for part in token.split('.') {
        match Value::parse(part) {
            Some(value) => {
                tracing::trace!("Value `{}` -> `{}`", part, value);
                out.accepted.push(value);
            }
            None => {
                tracing::trace!("Rejected value token `{}`", part);
                out.rejected.push(part.to_string());
            }
        }
    }
    out
}

/// Turn an `MQ...` token into a media condition; failures only drop the wrapper
pub fn validate_media_query(token: &str) -> Option<MediaCondition> {
    match MediaCondition::parse(token) {
        Ok(condition) => Some(condition),
        Err(err) => {
            tracing::warn!("Ignoring media query `{}`: {}", token, err);
            None
        }
    }
}

/// Class name the rule is keyed on, before sanitising
///
/// `lcsBackgroundColor_red` gives `_BackgroundColor_red`; the media, spec and
/// pseudo tokens lead when present so that differently scoped rules never
/// share a class.
pub fn class_source(m: &ClassNameMatch) -> String {
    let mut source = String::new();
    for token in [m.media_query.as_deref(), m.structure.as_deref(), m.pseudo.map(Pseudo::code)]
        .into_iter()
        .flatten()
    {
        source.push_str(token);
        source.push('_');
    }
    source.push('_');
    source.push_str(&m.properties);
    source.push('_');
    source.push_str(&m.values);
    if m.important {
        source.push_str("_IMPT");
    }
    source
}

/// Result of compiling one class name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    pub css: CssRule,
    /// Class added to the element, `None` for tag selectors
    pub class_name: Option<String>,
}

/// Compiles encoded class names into CSS rules
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCompiler;

impl RuleCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile without touching the tree
    pub fn plan(&self, tree: &DomTree, element: NodeId, m: &ClassNameMatch) -> Result<CompiledRule, CompileError> {
        if tree.get(element).is_none() {
            return Err(DomError::NotFound(element).into());
        }
        let tag = tree.tag_name(element).ok_or(DomError::NotAnElement(element))?;

        let properties = validate_properties(&m.properties);
        let values = validate_values(&m.values);
        let media = m.media_query.as_deref().and_then(validate_media_query);

        if properties.accepted.len() != values.accepted.len() {
            return Err(CompileError::CountMismatch(Box::new(MismatchReport {
                class_name: m.raw.clone(),
                properties: m.properties.clone(),
                values: m.values.clone(),
                validated_properties: properties.accepted,
                rejected_properties: properties.rejected,
                validated_values: values.accepted.iter().map(ToString::to_string).collect(),
                rejected_values: values.rejected,
                element: tree.start_tag(element),
            })));
        }
        if properties.accepted.is_empty() {
            return Err(CompileError::NoDeclarations {
                class_name: m.raw.clone(),
            });
        }

        let class_name = sanitize_class_name(&class_source(m));
        let parent_tag = tree.parent_element(element).and_then(|p| tree.tag_name(p));
        let selector = derive_selector(m.structure.as_deref(), &SelectorContext {
            class_name: &class_name,
            tag,
            parent_tag,
        });

        let declarations = properties
            .accepted
            .into_iter()
            .zip(values.accepted.iter())
            .map(|(property, value)| Declaration {
                property,
                value: value.to_string(),
                important: m.important,
            })
            .collect::<Vec<_>>();

        let css = emit(selector.render(m.pseudo), declarations, media);

        if !tree.is_connected(element) {
            return Err(CompileError::DetachedElement(element));
        }
        tracing::trace!("Compiled `{}` -> {}", m.raw, css);

        Ok(CompiledRule {
            css,
            class_name: selector.uses_class.then_some(class_name),
        })
    }

    /// Compile and apply the class mutation
    pub fn compile(&self, tree: &mut DomTree, element: NodeId, m: &ClassNameMatch) -> Result<CompiledRule, CompileError> {
        let compiled = self.plan(tree, element, m)?;
        if let Some(class_name) = &compiled.class_name {
            tree.add_class(element, class_name)?;
        }
        Ok(compiled)
    }
}

/// Selector for a rule, falling back to the class selector without a spec
pub fn derive_selector(structure: Option<&str>, ctx: &SelectorContext<'_>) -> Selector {
    let Some(token) = structure else {
        return Selector::class(ctx.class_name);
    };
    match StructuralSpec::parse(token) {
        Some(spec) => spec.selector(ctx),
        None => {
            tracing::warn!("Unsupported structural spec `{}`, using the class selector", token);
            Selector::class(ctx.class_name)
        }
    }
}

/// Assemble `selector{decls}`, nested in `@media cond{...}` when present
pub fn emit(selector: String, declarations: Vec<Declaration>, media: Option<MediaCondition>) -> CssRule {
    let body = declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let block = format!("{selector}{{{body}}}");
    let text = match &media {
        Some(condition) => format!("{}{{{block}}}", condition.at_rule()),
        None => block,
    };
    CssRule {
        text,
        selector,
        declarations,
        media,
    }
}
