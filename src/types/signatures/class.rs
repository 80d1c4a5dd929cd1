//! Signatures of generic class declarations.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    errors::SyntaxError,
    types::markers::{C_GENERIC_END, C_GENERIC_START},
};

use super::{ClassType, TypeParameter, parser::Parser};

/// The signature of a class declaration, e.g.,
/// `<T:Ljava.lang.Object;>Ljava.util.AbstractList<TT;>;Ljava.util.RandomAccess;`.
#[instability::unstable(feature = "class-signatures")]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ClassSignature {
    /// The formal type parameters of the class.
    pub type_parameters: Vec<TypeParameter>,
    /// The superclass.
    pub super_class: ClassType,
    /// The implemented interfaces.
    pub interfaces: Vec<ClassType>,
}

impl Display for ClassSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.type_parameters.is_empty() {
            write!(
                f,
                "{C_GENERIC_START}{}{C_GENERIC_END}",
                self.type_parameters.iter().join("")
            )?;
        }
        write!(f, "{}{}", self.super_class, self.interfaces.iter().join(""))
    }
}

impl FromStr for ClassSignature {
    type Err = SyntaxError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Parser::parse_all(signature, Parser::class_signature)
    }
}
