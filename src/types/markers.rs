//! Character codes of the signature grammar.
//!
//! These values are fixed; any producer or consumer of signatures relies on
//! them matching exactly.

/// Starts an array type; repeated once per dimension.
pub const C_ARRAY: char = '[';
/// Starts a resolved class type.
pub const C_RESOLVED: char = 'L';
/// Starts an unresolved class type.
pub const C_UNRESOLVED: char = 'Q';
/// Ends a class type or a type variable.
pub const C_NAME_END: char = ';';
/// Opens a type argument or type parameter list.
pub const C_GENERIC_START: char = '<';
/// Closes a type argument or type parameter list.
pub const C_GENERIC_END: char = '>';
/// Opens a method parameter list.
pub const C_PARAM_START: char = '(';
/// Closes a method parameter list.
pub const C_PARAM_END: char = ')';
/// The unbounded wildcard `?`.
pub const C_STAR: char = '*';
/// Prefix of an upper-bounded wildcard (`? extends`).
pub const C_EXTENDS: char = '+';
/// Prefix of a lower-bounded wildcard (`? super`).
pub const C_SUPER: char = '-';
/// Prefix of a captured wildcard.
pub const C_CAPTURE: char = '!';
/// Prefix of each thrown exception type in a method signature.
pub const C_EXCEPTION_START: char = '^';
/// Separates type parameter bounds and intersection bounds.
pub const C_COLON: char = ':';
/// Starts an intersection type.
pub const C_INTERSECTION: char = '|';
/// Starts a type variable.
pub const C_TYPE_VARIABLE: char = 'T';
/// Separates package segments, and member types after type arguments.
pub const C_DOT: char = '.';
/// Separates a nested type from its enclosing type.
pub const C_DOLLAR: char = '$';

/// `boolean`
pub const C_BOOLEAN: char = 'Z';
/// `byte`
pub const C_BYTE: char = 'B';
/// `char`
pub const C_CHAR: char = 'C';
/// `double`
pub const C_DOUBLE: char = 'D';
/// `float`
pub const C_FLOAT: char = 'F';
/// `int`
pub const C_INT: char = 'I';
/// `long`
pub const C_LONG: char = 'J';
/// `short`
pub const C_SHORT: char = 'S';
/// `void`
pub const C_VOID: char = 'V';

/// Checks whether `c` terminates an identifier inside a signature.
#[must_use]
pub(crate) const fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        C_DOT
            | C_NAME_END
            | C_GENERIC_START
            | C_GENERIC_END
            | C_COLON
            | C_PARAM_START
            | C_PARAM_END
            | C_ARRAY
            | C_EXCEPTION_START
            | C_INTERSECTION
            | C_DOLLAR
            | ','
    ) || c.is_ascii_whitespace()
}
