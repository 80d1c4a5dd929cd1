//! Small helpers derived from the decoding and extraction APIs.

use itertools::Itertools;

use crate::{
    errors::SyntaxError,
    extraction::get_type_erasure,
    types::{
        markers::{C_ARRAY, C_CAPTURE, C_EXTENDS, C_SUPER, C_UNRESOLVED},
        signatures::{TypeSignature, render::RenderFlags},
    },
};

/// Primitive codes and the signatures of their wrapper classes.
const BOXES: [(&str, &str); 8] = [
    ("Z", "Ljava.lang.Boolean;"),
    ("B", "Ljava.lang.Byte;"),
    ("C", "Ljava.lang.Character;"),
    ("D", "Ljava.lang.Double;"),
    ("F", "Ljava.lang.Float;"),
    ("I", "Ljava.lang.Integer;"),
    ("J", "Ljava.lang.Long;"),
    ("S", "Ljava.lang.Short;"),
];

/// Checks whether a signature names an unresolved class, skipping any leading
/// wildcard, capture and array markers. The rest of the signature is not validated.
/// Intersection types are never reported as unresolved.
///
/// ```
/// use sigtext::is_unresolved;
///
/// assert!(is_unresolved("[QString;"));
/// assert!(is_unresolved("!+QNumber;"));
/// assert!(!is_unresolved("Ljava.lang.String;"));
/// ```
#[must_use]
pub fn is_unresolved(signature: &str) -> bool {
    signature
        .trim_start_matches([C_EXTENDS, C_SUPER, C_CAPTURE, C_ARRAY])
        .starts_with(C_UNRESOLVED)
}

/// Builds an identifier `name(sig1,sig2,...)` for a method.
/// With `erasure_only`, every parameter signature is erased first so that overloads
/// differing only in type arguments get the same identifier.
///
/// # Errors
/// Returns [`SyntaxError`] if `erasure_only` is set and a parameter signature is malformed.
pub fn create_method_identifier<S: AsRef<str>>(
    name: &str,
    parameter_types: &[S],
    erasure_only: bool,
) -> Result<String, SyntaxError> {
    let parameters: Vec<String> = if erasure_only {
        parameter_types
            .iter()
            .map(|it| get_type_erasure(it.as_ref()))
            .try_collect()?
    } else {
        parameter_types
            .iter()
            .map(|it| it.as_ref().to_owned())
            .collect()
    };
    Ok(format!("{name}({})", parameters.join(",")))
}

/// Renders a type signature fully qualified, keeping the nesting marker `$` so that member
/// classes stay distinguishable from package members. Type arguments are rendered as well.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
///
/// ```
/// use sigtext::to_fully_qualified_name;
///
/// assert_eq!(
///     to_fully_qualified_name("Ljava.util.Map$Entry<Ljava.lang.String;TV;>;").unwrap(),
///     "java.util.Map$Entry<java.lang.String,V>"
/// );
/// ```
pub fn to_fully_qualified_name(signature: &str) -> Result<String, SyntaxError> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(parsed.render(RenderFlags::FULLY_QUALIFIED | RenderFlags::PRESERVE_NESTING))
}

/// Returns the signature of the wrapper class of a primitive signature.
/// Any other signature is returned unchanged.
#[must_use]
pub fn box_primitive_signature(signature: &str) -> &str {
    BOXES
        .iter()
        .find(|(primitive, _)| *primitive == signature)
        .map_or(signature, |&(_, boxed)| boxed)
}

/// Returns the primitive signature of a wrapper class signature.
/// Any other signature is returned unchanged.
#[must_use]
pub fn unbox_to_primitive_signature(signature: &str) -> &str {
    BOXES
        .iter()
        .find(|(_, boxed)| *boxed == signature)
        .map_or(signature, |&(primitive, _)| primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::base_type::BaseType;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn box_unbox_inverse(base in any::<BaseType>()) {
            prop_assume!(base != BaseType::Void);
            let code = base.code().to_string();
            let boxed = box_primitive_signature(&code);
            prop_assert_ne!(boxed, code.as_str());
            prop_assert_eq!(unbox_to_primitive_signature(boxed), code.as_str());
        }

        #[test]
        fn box_unbox_fixed_points(sig in "[A-Za-z.;<>]{0,24}") {
            prop_assume!(BOXES.iter().all(|(p, b)| *p != sig && *b != sig));
            prop_assert_eq!(box_primitive_signature(&sig), sig.as_str());
            prop_assert_eq!(unbox_to_primitive_signature(&sig), sig.as_str());
        }
    }

    #[test]
    fn void_is_not_boxed() {
        assert_eq!(box_primitive_signature("V"), "V");
        assert_eq!(unbox_to_primitive_signature("Ljava.lang.Void;"), "Ljava.lang.Void;");
    }

    #[test]
    fn unresolved_detection() {
        assert!(is_unresolved("QObject;"));
        assert!(is_unresolved("+QObject;"));
        assert!(is_unresolved("-[[QObject;"));
        assert!(!is_unresolved("TQ;"));
        assert!(!is_unresolved("I"));
        assert!(!is_unresolved(""));
        assert!(!is_unresolved("|Qa.X;:Qb.Y;"));
    }

    #[test]
    fn method_identifiers() {
        let params = ["Ljava.util.List<Ljava.lang.String;>;", "I"];
        assert_eq!(
            create_method_identifier("add", &params, false).unwrap(),
            "add(Ljava.util.List<Ljava.lang.String;>;,I)"
        );
        assert_eq!(
            create_method_identifier("add", &params, true).unwrap(),
            "add(Ljava.util.List;,I)"
        );
        assert_eq!(
            create_method_identifier("visit", &["Lp.Outer<TT;>.Inner;"], true).unwrap(),
            "visit(Lp.Outer.Inner;)"
        );
        assert_eq!(create_method_identifier::<&str>("run", &[], true).unwrap(), "run()");
        assert!(create_method_identifier("bad", &["Ljava.util.List<"], true).is_err());
    }

    #[test]
    fn fully_qualified_names_keep_nesting() {
        assert_eq!(to_fully_qualified_name("Lp.Outer$1;").unwrap(), "p.Outer$1");
        assert_eq!(
            to_fully_qualified_name("[Ljava.util.Map$Entry;").unwrap(),
            "java.util.Map$Entry[]"
        );
        assert_eq!(
            to_fully_qualified_name("Ljava.util.List<+Ljava.util.Map$Entry;>;").unwrap(),
            "java.util.List<? extends java.util.Map$Entry>"
        );
    }
}
