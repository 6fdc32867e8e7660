//! Rust bindings for the `tree-sitter-numscript` grammar.
//!
//! Numscript describes monetary transactions: `send` and `save` statements
//! moving assets between accounts through sources, destinations and
//! allotments.
//!
//! ```
//! let code = r#"
//! send [USD/2 100] (
//!   source = @world
//!   destination = @users:1234
//! )
//! "#;
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_numscript::language())
//!     .expect("Error loading Numscript grammar");
//! let tree = parser.parse(code, None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```

use tree_sitter::{Language, LanguageError, LogType, Parser, Query, QueryError, Tree};

extern "C" {
    fn tree_sitter_numscript() -> Language;
}

/// Returns the Tree-sitter [`Language`] for this grammar.
///
/// Every call hands out the same static parse tables, so loading is cheap
/// and can be repeated freely.
pub fn language() -> Language {
    unsafe { tree_sitter_numscript() }
}

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers#static-node-types
pub const NODE_TYPES: &str = include_str!("../../src/node-types.json");

/// The syntax highlighting query for this grammar.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// Errors surfaced while setting up or running a Numscript parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The runtime refused the generated language, usually an ABI mismatch.
    #[error("Error loading Numscript grammar")]
    Load(#[from] LanguageError),

    /// The bundled highlights query does not match the grammar.
    #[error("invalid highlights query: {0}")]
    Query(#[from] QueryError),

    /// The runtime gave up without producing a tree.
    #[error("parser did not produce a syntax tree")]
    Parse,
}

/// Creates a [`Parser`] with the Numscript language loaded.
///
/// The runtime's own log is forwarded to `tracing` at `TRACE`, under the
/// `tree_sitter_numscript::parse` and `tree_sitter_numscript::lex` targets.
/// Each target is checked separately when the parser is created.
pub fn parser() -> Result<Parser, Error> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;

    let log_parse = tracing::enabled!(
        target: "tree_sitter_numscript::parse",
        tracing::Level::TRACE
    );
    let log_lex = tracing::enabled!(target: "tree_sitter_numscript::lex", tracing::Level::TRACE);
    if log_parse || log_lex {
        parser.set_logger(Some(Box::new(move |log_type, message| match log_type {
            LogType::Parse if log_parse => {
                tracing::trace!(target: "tree_sitter_numscript::parse", "{message}")
            }
            LogType::Lex if log_lex => {
                tracing::trace!(target: "tree_sitter_numscript::lex", "{message}")
            }
            _ => {}
        })));
    }

    Ok(parser)
}

/// Parses a complete Numscript program.
///
/// Syntax errors do not fail the call: they show up as `ERROR` and
/// `MISSING` nodes in the returned tree.
pub fn parse(source: impl AsRef<[u8]>) -> Result<Tree, Error> {
    let source = source.as_ref();
    let tree = parser()?.parse(source, None).ok_or(Error::Parse)?;

    tracing::debug!(
        bytes = source.len(),
        has_error = tree.root_node().has_error(),
        "parsed numscript source"
    );

    Ok(tree)
}

/// Compiles [`HIGHLIGHTS_QUERY`] against [`language()`].
pub fn highlights_query() -> Result<Query, Error> {
    Ok(Query::new(&language(), HIGHLIGHTS_QUERY)?)
}
