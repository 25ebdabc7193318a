//! Documentor - directives for schema documentation comments
//!
//! Table and column comments can carry `[@documentor ...]` directives that
//! steer documentation generation: skip an entity, pull in a related one, or
//! drop a reference. This crate extracts those directives, answers queries
//! about them, and produces the comment text with the directives removed.
//!
//! ```
//! use documentor::directives::DirectiveParser;
//!
//! let parser = DirectiveParser::new(Some(
//!     "Customer orders. [@documentor include-ref table:public.customers]",
//! ));
//! assert!(!parser.is_entity_ignored());
//! assert!(parser.include_references().contains("table:public.customers"));
//! assert_eq!(parser.stripped_text().as_deref(), Some("Customer orders. "));
//! ```
//!
//! ## Module Structure
//!
//! - `directives`: Marker pattern, directive parsing and lookups
//! - `info`: Bundled packaging information (version, readme)
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer
//! - `logger`: Diagnostic logging setup for the binary

pub mod cli;
pub mod config;
pub mod directives;
pub mod info;
pub mod logger;
