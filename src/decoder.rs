//! Decoding signatures into human-readable type names.

use crate::{
    errors::SyntaxError,
    types::{
        markers::{C_GENERIC_START, C_PARAM_START},
        signatures::{
            MethodSignature, TypeSignature,
            render::{MethodRenderOptions, RenderFlags},
        },
    },
};

/// Checks whether `signature` is shaped like a method signature rather than a type signature.
pub(crate) fn is_method_signature(signature: &str) -> bool {
    signature.starts_with([C_PARAM_START, C_GENERIC_START])
}

/// Decodes a type or method signature into a fully qualified readable name.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
///
/// # Examples
/// ```
/// use sigtext::decode;
///
/// assert_eq!(decode("[Ljava.lang.String;").unwrap(), "java.lang.String[]");
/// assert_eq!(decode("+QObject;").unwrap(), "? extends Object");
/// assert_eq!(decode("(I)Z").unwrap(), "boolean (int)");
/// ```
pub fn decode(signature: &str) -> Result<String, SyntaxError> {
    decode_with(signature, RenderFlags::FULLY_QUALIFIED)
}

/// Decodes a signature, dropping the packages of resolved class names.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn decode_simple(signature: &str) -> Result<String, SyntaxError> {
    decode_with(signature, RenderFlags::empty())
}

/// Decodes a type or method signature with the given rendering flags.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is malformed.
pub fn decode_with(signature: &str, flags: RenderFlags) -> Result<String, SyntaxError> {
    if is_method_signature(signature) {
        let options = MethodRenderOptions {
            flags,
            ..MethodRenderOptions::default()
        };
        decode_method(signature, &options)
    } else {
        let parsed: TypeSignature = signature.parse()?;
        Ok(parsed.render(flags))
    }
}

/// Decodes a method signature into a readable declaration.
///
/// # Errors
/// Returns [`SyntaxError`] if the signature is not a well-formed method signature.
pub fn decode_method(
    signature: &str,
    options: &MethodRenderOptions<'_>,
) -> Result<String, SyntaxError> {
    let method: MethodSignature = signature.parse()?;
    Ok(method.render(options))
}
