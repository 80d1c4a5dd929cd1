//! Method signatures and formal type parameters.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    errors::SyntaxError,
    types::markers::{
        C_COLON, C_EXCEPTION_START, C_GENERIC_END, C_GENERIC_START, C_PARAM_END, C_PARAM_START,
    },
};

use super::{TypeSignature, parser::Parser};

/// The signature of a method.
/// Consists of the type parameters, the parameter types, the return type, and the thrown
/// exception types.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct MethodSignature {
    /// The formal type parameters, empty for non-generic methods.
    pub type_parameters: Vec<TypeParameter>,
    /// The types of the parameters.
    pub parameter_types: Vec<TypeSignature>,
    /// The return type, [`BaseType::Void`](crate::types::base_type::BaseType::Void) if the
    /// method returns nothing.
    pub return_type: TypeSignature,
    /// The thrown exception types. Class types or type variables.
    pub exception_types: Vec<TypeSignature>,
}

/// A formal type parameter, e.g., `T:Ljava.lang.Object;:Ljava.lang.Comparable<TT;>;`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TypeParameter {
    /// The name of the type variable.
    pub name: String,
    /// The class bound, if any.
    pub class_bound: Option<TypeSignature>,
    /// The interface bounds.
    pub interface_bounds: Vec<TypeSignature>,
}

impl MethodSignature {
    /// Returns the signature with type arguments erased from every type in it.
    /// Type parameter bounds are erased as well.
    #[must_use]
    pub fn erasure(&self) -> Self {
        Self {
            type_parameters: self
                .type_parameters
                .iter()
                .map(TypeParameter::erasure)
                .collect(),
            parameter_types: self
                .parameter_types
                .iter()
                .map(TypeSignature::erasure)
                .collect(),
            return_type: self.return_type.erasure(),
            exception_types: self
                .exception_types
                .iter()
                .map(TypeSignature::erasure)
                .collect(),
        }
    }

    /// Returns the signature with every captured wildcard replaced by the plain wildcard.
    #[must_use]
    pub fn without_capture(&self) -> Self {
        let map_all = |types: &[TypeSignature]| {
            types
                .iter()
                .map(TypeSignature::without_capture)
                .collect::<Vec<_>>()
        };
        Self {
            type_parameters: self
                .type_parameters
                .iter()
                .map(TypeParameter::without_capture)
                .collect(),
            parameter_types: map_all(&self.parameter_types),
            return_type: self.return_type.without_capture(),
            exception_types: map_all(&self.exception_types),
        }
    }
}

impl TypeParameter {
    /// Returns the class bound followed by the interface bounds.
    pub fn bounds(&self) -> impl Iterator<Item = &TypeSignature> {
        self.class_bound.iter().chain(self.interface_bounds.iter())
    }

    fn erasure(&self) -> Self {
        Self {
            name: self.name.clone(),
            class_bound: self.class_bound.as_ref().map(TypeSignature::erasure),
            interface_bounds: self
                .interface_bounds
                .iter()
                .map(TypeSignature::erasure)
                .collect(),
        }
    }

    fn without_capture(&self) -> Self {
        Self {
            name: self.name.clone(),
            class_bound: self.class_bound.as_ref().map(TypeSignature::without_capture),
            interface_bounds: self
                .interface_bounds
                .iter()
                .map(TypeSignature::without_capture)
                .collect(),
        }
    }
}

impl Display for MethodSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.type_parameters.is_empty() {
            write!(
                f,
                "{C_GENERIC_START}{}{C_GENERIC_END}",
                self.type_parameters.iter().join("")
            )?;
        }
        write!(f, "{C_PARAM_START}")?;
        for param in &self.parameter_types {
            write!(f, "{param}")?;
        }
        write!(f, "{C_PARAM_END}{}", self.return_type)?;
        for exception in &self.exception_types {
            write!(f, "{C_EXCEPTION_START}{exception}")?;
        }
        Ok(())
    }
}

impl Display for TypeParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{C_COLON}", self.name)?;
        if let Some(bound) = &self.class_bound {
            write!(f, "{bound}")?;
        }
        for bound in &self.interface_bounds {
            write!(f, "{C_COLON}{bound}")?;
        }
        Ok(())
    }
}

impl FromStr for MethodSignature {
    type Err = SyntaxError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Parser::parse_all(signature, Parser::method_signature)
    }
}

impl FromStr for TypeParameter {
    type Err = SyntaxError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Parser::parse_all(signature, Parser::type_parameter)
    }
}
