//! Decomposing signatures into their parts.
//!
//! Every function parses its whole input first, so a malformed signature is rejected
//! with a [`SyntaxError`] even when the requested part could be located without
//! looking at the rest.

use itertools::Itertools;

use crate::{
    decoder::is_method_signature,
    errors::{SyntaxError, SyntaxErrorKind},
    types::{
        markers::{C_DOT, C_GENERIC_END, C_GENERIC_START},
        signatures::{
            MethodSignature, SignatureKind, TypeParameter, TypeSignature, class::ClassSignature,
            render::RenderFlags,
        },
    },
};

type Result<T> = std::result::Result<T, SyntaxError>;

const VARIADIC: &str = "...";

fn to_strings<'a, T: ToString + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    items.into_iter().map(ToString::to_string).collect()
}

/// Returns the number of array dimensions of a type signature, zero for non-array types.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_array_count(signature: &str) -> Result<usize> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(parsed.array_dimensions())
}

/// Returns the element type of an array signature, or the signature itself for other types.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_element_type(signature: &str) -> Result<String> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(parsed.element_type().to_string())
}

pub(crate) fn qualifier_of(sig: &TypeSignature) -> String {
    match sig {
        TypeSignature::Class(class) => class.package.join(&C_DOT.to_string()),
        TypeSignature::Array(array) => qualifier_of(&array.element),
        _ => String::new(),
    }
}

fn simple_name_of(sig: &TypeSignature) -> String {
    match sig {
        TypeSignature::Class(class) => class.render_path(RenderFlags::FULLY_QUALIFIED),
        TypeSignature::Array(array) => {
            let mut name = simple_name_of(&array.element);
            name.push_str(&"[]".repeat(array.dimensions));
            name
        }
        it => it.render(RenderFlags::FULLY_QUALIFIED),
    }
}

/// Returns the package of a class signature as a dotted name.
/// Arrays yield the qualifier of their element type; other kinds yield an empty string.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
///
/// # Examples
/// ```
/// use sigtext::get_signature_qualifier;
///
/// assert_eq!(get_signature_qualifier("Ljava.util.Map$Entry;").unwrap(), "java.util");
/// ```
pub fn get_signature_qualifier(signature: &str) -> Result<String> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(qualifier_of(&parsed))
}

/// Returns the readable name of a signature without its package.
/// Type arguments are kept and rendered fully qualified.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
///
/// # Examples
/// ```
/// use sigtext::get_signature_simple_name;
///
/// assert_eq!(get_signature_simple_name("Ljava.util.Map$Entry;").unwrap(), "Map.Entry");
/// ```
pub fn get_signature_simple_name(signature: &str) -> Result<String> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(simple_name_of(&parsed))
}

/// Finds the last `.` of a readable name that is not inside a type argument list.
fn last_top_level_dot(name: &str) -> Result<Option<usize>> {
    let body = name.strip_suffix(VARIADIC).unwrap_or(name);
    let mut depth = 0usize;
    let mut last = None;
    for (idx, c) in body.char_indices() {
        match c {
            C_GENERIC_START => depth += 1,
            C_GENERIC_END => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    SyntaxError::new(name, idx, SyntaxErrorKind::Unbalanced).reported()
                })?;
            }
            C_DOT if depth == 0 => last = Some(idx),
            _ => {}
        }
    }
    if depth == 0 {
        Ok(last)
    } else {
        Err(SyntaxError::new(name, body.len(), SyntaxErrorKind::Unbalanced).reported())
    }
}

/// Returns everything before the last top-level `.` of a readable name, e.g.,
/// `java.util` for `java.util.List<java.lang.String>`.
///
/// # Errors
/// Returns [`SyntaxError`] if the type argument brackets are unbalanced.
pub fn get_qualifier(name: &str) -> Result<String> {
    Ok(last_top_level_dot(name)?.map_or_else(String::new, |dot| name[..dot].to_owned()))
}

/// Returns everything after the last top-level `.` of a readable name, e.g.,
/// `List<java.lang.String>` for `java.util.List<java.lang.String>`.
///
/// # Errors
/// Returns [`SyntaxError`] if the type argument brackets are unbalanced.
pub fn get_simple_name(name: &str) -> Result<String> {
    Ok(last_top_level_dot(name)?.map_or_else(|| name.to_owned(), |dot| name[dot + 1..].to_owned()))
}

/// Returns the fully qualified readable name of the erasure of a type signature.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_erased_qualified_name(signature: &str) -> Result<String> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(parsed.erasure().render(RenderFlags::FULLY_QUALIFIED))
}

/// Returns the type arguments of a class signature, or of the element type of an array.
/// For a member of a generic class only the arguments of the innermost class are returned.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_type_arguments(signature: &str) -> Result<Vec<String>> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(match parsed.element_type() {
        TypeSignature::Class(class) => to_strings(class.type_arguments()),
        _ => Vec::new(),
    })
}

/// Returns the signature with all type arguments removed.
/// Method signatures are erased parameter by parameter.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_type_erasure(signature: &str) -> Result<String> {
    if is_method_signature(signature) {
        let method: MethodSignature = signature.parse()?;
        Ok(method.erasure().to_string())
    } else {
        let parsed: TypeSignature = signature.parse()?;
        Ok(parsed.erasure().to_string())
    }
}

/// Returns the number of parameters of a method signature.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is not a well-formed method signature.
pub fn get_parameter_count(signature: &str) -> Result<usize> {
    let method: MethodSignature = signature.parse()?;
    Ok(method.parameter_types.len())
}

/// Returns the parameter type signatures of a method signature.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is not a well-formed method signature.
pub fn get_parameter_types(signature: &str) -> Result<Vec<String>> {
    let method: MethodSignature = signature.parse()?;
    Ok(to_strings(&method.parameter_types))
}

/// Returns the return type signature of a method signature.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is not a well-formed method signature.
pub fn get_return_type(signature: &str) -> Result<String> {
    let method: MethodSignature = signature.parse()?;
    Ok(method.return_type.to_string())
}

/// Returns the thrown exception type signatures of a method signature, in order.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is not a well-formed method signature.
pub fn get_thrown_exception_types(signature: &str) -> Result<Vec<String>> {
    let method: MethodSignature = signature.parse()?;
    Ok(to_strings(&method.exception_types))
}

/// Returns the formal type parameter signatures of a method or class signature.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is neither a well-formed method signature nor
/// a well-formed class signature. The error reported is the one of the method parse.
pub fn get_type_parameters(signature: &str) -> Result<Vec<String>> {
    let type_parameters = match signature.parse::<MethodSignature>() {
        Ok(method) => method.type_parameters,
        Err(err) => {
            signature
                .parse::<ClassSignature>()
                .map_err(|_| err)?
                .type_parameters
        }
    };
    Ok(to_strings(&type_parameters))
}

/// Returns the name of a formal type parameter signature, e.g., `T` for `T:Ljava.lang.Object;`.
///
/// # Errors
/// Returns [`SyntaxError`] if the type parameter signature is malformed.
pub fn get_type_variable(formal_type_parameter: &str) -> Result<String> {
    let param: TypeParameter = formal_type_parameter.parse()?;
    Ok(param.name)
}

/// Returns the bound signatures of a formal type parameter signature, class bound first.
///
/// # Errors
/// Returns [`SyntaxError`] if the type parameter signature is malformed.
pub fn get_type_parameter_bounds(formal_type_parameter: &str) -> Result<Vec<String>> {
    let param: TypeParameter = formal_type_parameter.parse()?;
    Ok(to_strings(param.bounds()))
}

/// Classifies a type signature.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_signature_kind(signature: &str) -> Result<SignatureKind> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(parsed.kind())
}

/// Returns the bounds of an intersection type signature.
/// Any other type signature is its own single bound.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn get_intersection_type_bounds(signature: &str) -> Result<Vec<String>> {
    let parsed: TypeSignature = signature.parse()?;
    Ok(match parsed {
        TypeSignature::Intersection(bounds) => to_strings(&bounds),
        it => vec![it.to_string()],
    })
}

/// Replaces every captured wildcard in a type or method signature with the wildcard itself.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn remove_capture(signature: &str) -> Result<String> {
    if is_method_signature(signature) {
        let method: MethodSignature = signature.parse()?;
        Ok(method.without_capture().to_string())
    } else {
        let parsed: TypeSignature = signature.parse()?;
        Ok(parsed.without_capture().to_string())
    }
}

/// Joins a qualifier and a simple name, omitting the `.` when the qualifier is empty.
pub(crate) fn qualify(qualifier: &str, simple_name: &str) -> String {
    [qualifier, simple_name]
        .into_iter()
        .filter(|it| !it.is_empty())
        .join(&C_DOT.to_string())
}
