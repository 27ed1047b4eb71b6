//! Engine - collection and flush driver

use dystyle_css::{CompileError, Grammar, RuleCompiler};
use dystyle_dom::{Document, NodeId};

use crate::{Config, EngineError, StyleContext};

/// Outcome of one pass over a document
#[derive(Debug, Default)]
pub struct PassReport {
    /// `<body>` carried the opt-out marker, nothing was scanned
    pub opted_out: bool,
    /// Elements with a `class` attribute that were visited
    pub elements_scanned: usize,
    /// Class names the grammar recognised
    pub matched: usize,
    /// Rules new to the context
    pub emitted: usize,
    /// Rules that were already in a bucket
    pub duplicates: usize,
    /// Rules written to the stylesheet by this pass
    pub flushed: usize,
    /// Class names that failed to compile, in document order
    pub failures: Vec<CompileError>,
}

/// The dySTYLE engine
pub struct Engine {
    config: Config,
    grammar: Grammar,
    compiler: RuleCompiler,
}

impl Engine {
    /// Create an engine with the given configuration
    pub fn new(config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        let grammar = config.grammar()?;
        tracing::debug!("dySTYLE engine {} ready (prefix `{}`)", crate::VERSION, config.prefix);
        Ok(Self {
            config,
            grammar,
            compiler: RuleCompiler::new(),
        })
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Style context for `doc` using this engine's configuration
    pub fn context(&self, doc: &mut Document) -> Result<StyleContext, EngineError> {
        Ok(StyleContext::new(doc, &self.config)?)
    }

    /// Compile every encoded class name under `<body>` and flush the new rules
    ///
    /// A failing class name is logged and recorded in the report; the pass
    /// carries on with the next one. Running again appends only rules the
    /// context has not seen.
    pub fn run(&self, doc: &mut Document, ctx: &mut StyleContext) -> Result<PassReport, EngineError> {
        let mut report = PassReport::default();
        let body = doc.body();
        if !body.is_valid() {
            tracing::debug!("Document has no body, nothing to do");
            return Ok(report);
        }
        if self.config.is_opted_out(doc.tree(), body) {
            tracing::debug!("Body opts out via {}", self.config.opt_out_attribute);
            report.opted_out = true;
            return Ok(report);
        }

        for (element, classes) in self.collect(doc, body) {
            report.elements_scanned += 1;
            for class in classes {
                let Some(m) = self.grammar.parse(&class) else {
                    continue;
                };
                report.matched += 1;
                match self.compiler.compile(doc.tree_mut(), element, &m) {
                    Ok(compiled) => {
                        if ctx.insert(&compiled.css) {
                            report.emitted += 1;
                        } else {
                            report.duplicates += 1;
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Skipping class `{}` on {}: {}", class, element, err);
                        report.failures.push(err);
                    }
                }
            }
        }

        report.flushed = ctx.flush(doc)?;
        tracing::debug!(
            "Pass done: {} elements, {} matched, {} new rules, {} duplicates, {} failures",
            report.elements_scanned,
            report.matched,
            report.emitted,
            report.duplicates,
            report.failures.len()
        );
        Ok(report)
    }

    /// Elements under `root` with a `class` attribute and their class tokens
    ///
    /// Opted-out elements are listed with no classes. Tokens are copied up
    /// front since compiling adds classes to the elements.
    fn collect(&self, doc: &Document, root: NodeId) -> Vec<(NodeId, Vec<String>)> {
        let tree = doc.tree();
        tree.descendants(root)
            .filter(|&id| tree.has_attribute(id, "class"))
            .map(|id| {
                let classes = if self.config.is_opted_out(tree, id) {
                    Vec::new()
                } else {
                    tree.class_list(id)
                        .map(|list| list.iter().map(str::to_string).collect())
                        .unwrap_or_default()
                };
                (id, classes)
            })
            .collect()
    }
}
