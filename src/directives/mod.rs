//! Directive extraction for documentation comments.
//!
//! Comments on tables and columns can carry control directives:
//! - `[@documentor ignore]` - leave the entity out of the documentation
//! - `[@documentor include-ref table:public.orders]` - also document the referenced entity
//! - `[@documentor ignore-ref table:public.audit]` - drop the reference to an entity
//!
//! Any other name is kept but not interpreted. References are opaque strings
//! here; resolving them is up to the documentation generator.

mod directive;
mod marker;
mod parser;


pub use directive::{Directive, DirectiveKind};
pub use marker::{DEFAULT_MARKER, Marker};
pub use parser::DirectiveParser;
