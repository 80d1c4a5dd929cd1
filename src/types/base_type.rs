//! Primitive types and `void`.

use std::fmt::Display;

use super::markers::{
    C_BOOLEAN, C_BYTE, C_CHAR, C_DOUBLE, C_FLOAT, C_INT, C_LONG, C_SHORT, C_VOID,
};

/// A primitive type or `void`, encoded as a single character.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum BaseType {
    /// The `boolean` type.
    Boolean,
    /// The `byte` type.
    Byte,
    /// The `char` type.
    Char,
    /// The `double` type.
    Double,
    /// The `float` type.
    Float,
    /// The `int` type.
    Int,
    /// The `long` type.
    Long,
    /// The `short` type.
    Short,
    /// The `void` pseudo type. Only meaningful as a return type.
    Void,
}

impl BaseType {
    /// All the base types, in grammar order.
    pub const ALL: [BaseType; 9] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
        Self::Void,
    ];

    /// Returns the single-character code of this type.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Boolean => C_BOOLEAN,
            Self::Byte => C_BYTE,
            Self::Char => C_CHAR,
            Self::Double => C_DOUBLE,
            Self::Float => C_FLOAT,
            Self::Int => C_INT,
            Self::Long => C_LONG,
            Self::Short => C_SHORT,
            Self::Void => C_VOID,
        }
    }

    /// Returns the Java keyword naming this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Void => "void",
        }
    }

    /// Looks up the base type spelled as `keyword`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.keyword() == keyword)
    }
}

impl TryFrom<char> for BaseType {
    type Error = char;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            C_BOOLEAN => Ok(Self::Boolean),
            C_BYTE => Ok(Self::Byte),
            C_CHAR => Ok(Self::Char),
            C_DOUBLE => Ok(Self::Double),
            C_FLOAT => Ok(Self::Float),
            C_INT => Ok(Self::Int),
            C_LONG => Ok(Self::Long),
            C_SHORT => Ok(Self::Short),
            C_VOID => Ok(Self::Void),
            other => Err(other),
        }
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
