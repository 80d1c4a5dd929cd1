//! A precomputed summary of the names in a type signature.

use std::str::FromStr;

use itertools::Itertools;

use crate::{
    errors::SyntaxError,
    extraction::{qualifier_of, qualify},
    types::{
        markers::C_DOT,
        signatures::{ClassType, SignatureKind, TypeSignature, render::RenderFlags},
    },
    utils::is_unresolved,
};

/// The names derived from a type signature, computed once.
///
/// Nested classes are treated like package members when splitting the qualified name,
/// so the qualifier of `Ljava.util.Map$Entry;` is `java.util.Map` while its package is
/// `java.util`. The qualifier never carries type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureDescriptor {
    /// The signature the descriptor was computed from.
    pub signature: String,
    /// Whether the signature is a primitive type or `void`.
    pub is_base_type: bool,
    /// Whether the signature names an unresolved class, looking through wildcard, capture
    /// and array prefixes.
    pub is_unresolved: bool,
    /// The package, absent for base types, unresolved names, and types without one.
    pub package_name: Option<String>,
    /// Everything before the simple name, absent when the qualified name has no `.`.
    pub qualifier: Option<String>,
    /// The last segment of the qualified name, with its type arguments.
    pub simple_name: String,
    /// The readable name.
    pub qualified_name: String,
}

impl SignatureDescriptor {
    /// Computes the descriptor of `signature`.
    ///
    /// # Errors
    /// Returns [`SyntaxError`] if the signature is malformed.
    ///
    /// # Examples
    /// ```
    /// use sigtext::SignatureDescriptor;
    ///
    /// let entry = SignatureDescriptor::new("Ljava.util.Map$Entry;").unwrap();
    /// assert_eq!(entry.package_name.as_deref(), Some("java.util"));
    /// assert_eq!(entry.qualifier.as_deref(), Some("java.util.Map"));
    /// assert_eq!(entry.simple_name, "Entry");
    /// assert_eq!(entry.qualified_name, "java.util.Map.Entry");
    /// ```
    pub fn new(signature: &str) -> Result<Self, SyntaxError> {
        let parsed: TypeSignature = signature.parse()?;
        let is_base_type = parsed.kind() == SignatureKind::Base;
        let is_unresolved = is_unresolved(signature);
        if is_base_type || is_unresolved {
            let name = parsed.render(RenderFlags::FULLY_QUALIFIED);
            return Ok(Self {
                signature: signature.to_owned(),
                is_base_type,
                is_unresolved,
                package_name: None,
                qualifier: None,
                simple_name: name.clone(),
                qualified_name: name,
            });
        }

        let (qualifier, simple_name) = split_name(&parsed);
        let qualified_name = qualify(&qualifier, &simple_name);
        Ok(Self {
            signature: signature.to_owned(),
            is_base_type,
            is_unresolved,
            package_name: Some(qualifier_of(&parsed)).filter(|it| !it.is_empty()),
            qualifier: Some(qualifier).filter(|it| !it.is_empty()),
            simple_name,
            qualified_name,
        })
    }
}

/// Splits the readable name of `sig` before its innermost class segment.
fn split_name(sig: &TypeSignature) -> (String, String) {
    match sig {
        TypeSignature::Class(class) => split_class(class),
        TypeSignature::Array(array) => {
            let (qualifier, mut simple_name) = split_name(&array.element);
            simple_name.push_str(&"[]".repeat(array.dimensions));
            (qualifier, simple_name)
        }
        it => (String::new(), it.render(RenderFlags::FULLY_QUALIFIED)),
    }
}

fn split_class(class: &ClassType) -> (String, String) {
    let enclosing = class
        .nested
        .split_last()
        .map_or(&[][..], |(_, rest)| rest)
        .iter()
        .map(|it| it.class.name.as_str());
    let qualifier = class
        .package
        .iter()
        .map(String::as_str)
        .chain(class.nested.first().map(|_| class.outer.name.as_str()))
        .chain(enclosing)
        .join(&C_DOT.to_string());
    let innermost = ClassType {
        resolved: class.resolved,
        package: Vec::new(),
        outer: class.innermost().clone(),
        nested: Vec::new(),
    };
    (qualifier, innermost.render_path(RenderFlags::FULLY_QUALIFIED))
}

impl FromStr for SignatureDescriptor {
    type Err = SyntaxError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Self::new(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_type() {
        let desc = SignatureDescriptor::new("J").unwrap();
        assert!(desc.is_base_type);
        assert!(!desc.is_unresolved);
        assert_eq!(desc.package_name, None);
        assert_eq!(desc.qualifier, None);
        assert_eq!(desc.simple_name, "long");
        assert_eq!(desc.qualified_name, "long");
    }

    #[test]
    fn unresolved_name() {
        let desc: SignatureDescriptor = "Qjava.util.Map$Entry;".parse().unwrap();
        assert!(desc.is_unresolved);
        assert_eq!(desc.package_name, None);
        assert_eq!(desc.qualifier, None);
        assert_eq!(desc.simple_name, "java.util.Map$Entry");
        assert_eq!(desc.qualified_name, desc.simple_name);
    }

    #[test]
    fn unresolved_array_element() {
        let desc = SignatureDescriptor::new("[QString;").unwrap();
        assert!(desc.is_unresolved);
        assert_eq!(desc.qualified_name, "String[]");
    }

    #[test]
    fn generic_class() {
        let desc = SignatureDescriptor::new("Ljava.util.List<Ljava.lang.String;>;").unwrap();
        assert_eq!(desc.package_name.as_deref(), Some("java.util"));
        assert_eq!(desc.qualifier.as_deref(), Some("java.util"));
        assert_eq!(desc.simple_name, "List<java.lang.String>");
        assert_eq!(desc.qualified_name, "java.util.List<java.lang.String>");
    }

    #[test]
    fn default_package() {
        let desc = SignatureDescriptor::new("LMain;").unwrap();
        assert_eq!(desc.package_name, None);
        assert_eq!(desc.qualifier, None);
        assert_eq!(desc.qualified_name, "Main");
    }

    #[test]
    fn array_of_nested_class() {
        let desc = SignatureDescriptor::new("[Ljava.util.Map$Entry;").unwrap();
        assert_eq!(desc.package_name.as_deref(), Some("java.util"));
        assert_eq!(desc.qualifier.as_deref(), Some("java.util.Map"));
        assert_eq!(desc.simple_name, "Entry[]");
    }

    #[test]
    fn member_of_generic_class() {
        for sig in ["Lp.Outer<TT;>$Inner;", "Lp.Outer<TT;>.Inner;", "Lp.Outer$Inner;"] {
            let desc = SignatureDescriptor::new(sig).unwrap();
            assert_eq!(desc.package_name.as_deref(), Some("p"), "{sig}");
            assert_eq!(desc.qualifier.as_deref(), Some("p.Outer"), "{sig}");
            assert_eq!(desc.simple_name, "Inner", "{sig}");
            assert_eq!(desc.qualified_name, "p.Outer.Inner", "{sig}");
        }
        let desc = SignatureDescriptor::new("La.B<TT;>$C$D<TU;>;").unwrap();
        assert_eq!(desc.qualifier.as_deref(), Some("a.B.C"));
        assert_eq!(desc.simple_name, "D<U>");
    }

    #[test]
    fn type_variable() {
        let desc = SignatureDescriptor::new("TT;").unwrap();
        assert!(!desc.is_base_type);
        assert_eq!(desc.qualifier, None);
        assert_eq!(desc.qualified_name, "T");
    }

    #[test]
    fn malformed() {
        assert!(SignatureDescriptor::new("Ljava.util.Map").is_err());
    }
}
