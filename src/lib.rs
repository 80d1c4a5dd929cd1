#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! `sigtext` decodes and encodes compact type signatures, the textual type encoding used
//! by source-level Java tooling, e.g., `Ljava.util.Map$Entry<TK;TV;>;` or
//! `<T:Ljava.lang.Object;>(TT;[I)V^Ljava.io.IOException;`.
//!
//! Signatures are parsed into the syntax tree in [`types::signatures`] and rendered back as
//! readable names:
//!
//! ```
//! use sigtext::{create_type_signature, decode, get_parameter_types};
//!
//! assert_eq!(decode("[Ljava.lang.String;").unwrap(), "java.lang.String[]");
//! assert_eq!(create_type_signature("java.util.List<java.lang.String>", true).unwrap(),
//!            "Ljava.util.List<Ljava.lang.String;>;");
//! assert_eq!(get_parameter_types("(I[Ljava.lang.String;)V").unwrap(),
//!            vec!["I", "[Ljava.lang.String;"]);
//! ```
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events when it rejects malformed input
//! and never installs a subscriber itself.
//!
//! ## Features
#![doc = document_features::document_features!()]

pub mod decoder;
pub mod descriptor;
pub mod encoder;
pub mod errors;
pub mod extraction;
pub mod types;
pub mod utils;

pub use decoder::{decode, decode_method, decode_simple, decode_with};
pub use descriptor::SignatureDescriptor;
pub use encoder::{
    create_array_type_signature, create_intersection_type_signature, create_method_signature,
    create_type_parameter_signature, create_type_signature, parse_type_name,
};
pub use errors::{SyntaxError, SyntaxErrorKind};
pub use extraction::{
    get_array_count, get_element_type, get_erased_qualified_name, get_intersection_type_bounds,
    get_parameter_count, get_parameter_types, get_qualifier, get_return_type,
    get_signature_kind, get_signature_qualifier, get_signature_simple_name, get_simple_name,
    get_thrown_exception_types, get_type_arguments, get_type_erasure, get_type_parameter_bounds,
    get_type_parameters, get_type_variable, remove_capture,
};
pub use types::signatures::{
    MethodSignature, SignatureKind, TypeParameter, TypeSignature,
    render::{MethodRenderOptions, RenderFlags},
};
pub use utils::{
    box_primitive_signature, create_method_identifier, is_unresolved, to_fully_qualified_name,
    unbox_to_primitive_signature,
};

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
