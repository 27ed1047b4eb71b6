//! dySTYLE Engine
//!
//! Scans a document for encoded class names, compiles them into CSS rules
//! and writes the rules into a `<style>` element in `<head>`.
//!
//! # Example
//! ```rust,ignore
//! use dystyle_engine::{compile_html, Config};
//!
//! let output = compile_html(r#"<div class="lcsColor_red"></div>"#, &Config::default())?;
//! assert_eq!(output.css, "._Color_red{color: red;}");
//! ```

mod config;
mod context;
mod engine;

pub use config::{Config, ConfigError};
pub use context::{RuleBucket, StyleContext};
pub use engine::{Engine, PassReport};

// Re-export sub-crates for advanced usage
pub use dystyle_css as css;
pub use dystyle_dom as dom;
pub use dystyle_html as html;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] dystyle_html::ParseError),

    #[error("DOM error: {0}")]
    Dom(#[from] dystyle_dom::DomError),
}

/// Result of [`compile_html`]
#[derive(Debug)]
pub struct Output {
    /// Generated stylesheet text, plain rules first
    pub css: String,
    /// Serialised document including the class mutations and `<style>` element
    pub html: String,
    pub report: PassReport,
}

/// Parse `html`, run one pass and return the stylesheet and the rewritten document
pub fn compile_html(html: &str, config: &Config) -> Result<Output, EngineError> {
    let mut doc = dystyle_html::parse(html)?;
    let engine = Engine::new(config.clone())?;
    let mut ctx = engine.context(&mut doc)?;
    let report = engine.run(&mut doc, &mut ctx)?;
    Ok(Output {
        css: ctx.stylesheet_text(),
        html: doc.tree().outer_html(doc.tree().root()),
        report,
    })
}

/// Install a `tracing-subscriber` fmt subscriber honouring `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
