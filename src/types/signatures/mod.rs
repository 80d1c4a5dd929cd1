//! The signature grammar as an explicit syntax tree.
//!
//! Every node implements [`FromStr`] (parse) and [`Display`] (write back the
//! compact signature text). Parsing followed by printing reproduces the input
//! exactly for every well-formed signature.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use super::{
    base_type::BaseType,
    markers::{
        C_ARRAY, C_CAPTURE, C_COLON, C_DOLLAR, C_DOT, C_EXTENDS, C_GENERIC_END, C_GENERIC_START,
        C_INTERSECTION, C_NAME_END, C_RESOLVED, C_STAR, C_SUPER, C_TYPE_VARIABLE, C_UNRESOLVED,
    },
};
use crate::errors::SyntaxError;

pub mod class;
mod method;
pub(crate) mod parser;
pub mod render;

pub use method::{MethodSignature, TypeParameter};

use parser::Parser;

/// The coarse shape of a [`TypeSignature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SignatureKind {
    /// An array type, e.g., `[I`.
    #[display("array")]
    Array,
    /// A class type, e.g., `Ljava.lang.String;`.
    #[display("class")]
    Class,
    /// A primitive type or `void`.
    #[display("base")]
    Base,
    /// A type variable, e.g., `TT;`.
    #[display("type variable")]
    TypeVariable,
    /// A wildcard type argument, e.g., `+Ljava.lang.Number;`.
    #[display("wildcard")]
    Wildcard,
    /// A captured wildcard, e.g., `!*`.
    #[display("capture")]
    Capture,
    /// An intersection type, e.g., `|Ljava.lang.Object;:Ljava.io.Serializable;`.
    #[display("intersection")]
    Intersection,
}

/// A type signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    /// A primitive type or `void`.
    Base(BaseType),
    /// An array type.
    Array(ArrayType),
    /// A (possibly generic, possibly nested) class type.
    Class(ClassType),
    /// A reference to a type variable by name.
    TypeVariable(String),
    /// A wildcard type argument.
    Wildcard(Wildcard),
    /// A captured wildcard.
    Capture(Wildcard),
    /// An intersection of class types.
    Intersection(Vec<ClassType>),
}

/// An array type with one or more dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    /// The number of dimensions, at least one.
    pub dimensions: usize,
    /// The element type. Either a non-void base type, a class type, or a type variable.
    pub element: Box<TypeSignature>,
}

/// A wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(Box<TypeSignature>),
    /// `? super T`
    Super(Box<TypeSignature>),
}

/// A class type: an optional package, the outermost class, and a chain of member classes.
///
/// For `Ljava.util.Map$Entry<TK;TV;>;` the package is `["java", "util"]`, the outermost
/// class is `Map`, and the nested chain holds `Entry<TK;TV;>` separated by `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    /// Whether the name is known to refer to an existing type (`L`) or not (`Q`).
    pub resolved: bool,
    /// The package segments.
    pub package: Vec<String>,
    /// The outermost class.
    pub outer: SimpleClassType,
    /// The member classes, outermost first.
    pub nested: Vec<NestedClassType>,
}

/// A single class name segment with its type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleClassType {
    /// The identifier.
    pub name: String,
    /// The type arguments, empty if the segment is not parameterized.
    pub type_arguments: Vec<TypeSignature>,
}

/// How a member class is attached to its enclosing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nesting {
    /// The nesting marker `$`.
    Dollar,
    /// A `.`, which follows type arguments of the enclosing class.
    Dot,
}

/// A member class segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestedClassType {
    /// The separator preceding this segment.
    pub separator: Nesting,
    /// The member class.
    pub class: SimpleClassType,
}

impl TypeSignature {
    /// Returns the kind of this signature.
    #[must_use]
    pub fn kind(&self) -> SignatureKind {
        match self {
            Self::Base(_) => SignatureKind::Base,
            Self::Array(_) => SignatureKind::Array,
            Self::Class(_) => SignatureKind::Class,
            Self::TypeVariable(_) => SignatureKind::TypeVariable,
            Self::Wildcard(_) => SignatureKind::Wildcard,
            Self::Capture(_) => SignatureKind::Capture,
            Self::Intersection(_) => SignatureKind::Intersection,
        }
    }

    /// Creates an array type of `element` with `dimensions` dimensions.
    /// Arrays of arrays are flattened, and zero dimensions returns `element` unchanged.
    #[must_use]
    pub fn array_of(element: TypeSignature, dimensions: usize) -> Self {
        match (element, dimensions) {
            (it, 0) => it,
            (Self::Array(ArrayType { dimensions: d, element }), n) => Self::Array(ArrayType {
                dimensions: d + n,
                element,
            }),
            (it, n) => Self::Array(ArrayType {
                dimensions: n,
                element: Box::new(it),
            }),
        }
    }

    /// Returns the number of array dimensions, zero for non-array types.
    #[must_use]
    pub fn array_dimensions(&self) -> usize {
        match self {
            Self::Array(ArrayType { dimensions, .. }) => *dimensions,
            _ => 0,
        }
    }

    /// Returns the element type for arrays, or `self` for any other type.
    #[must_use]
    pub fn element_type(&self) -> &TypeSignature {
        match self {
            Self::Array(ArrayType { element, .. }) => element,
            it => it,
        }
    }

    /// Returns this signature with all type arguments removed, at every nesting level.
    #[must_use]
    pub fn erasure(&self) -> Self {
        match self {
            Self::Base(_) | Self::TypeVariable(_) => self.clone(),
            Self::Array(ArrayType {
                dimensions,
                element,
            }) => Self::Array(ArrayType {
                dimensions: *dimensions,
                element: Box::new(element.erasure()),
            }),
            Self::Class(class) => Self::Class(class.erasure()),
            Self::Wildcard(wildcard) => Self::Wildcard(wildcard.erasure()),
            Self::Capture(wildcard) => Self::Capture(wildcard.erasure()),
            Self::Intersection(bounds) => {
                Self::Intersection(bounds.iter().map(ClassType::erasure).collect())
            }
        }
    }

    /// Returns this signature with every capture replaced by the wildcard it captures.
    #[must_use]
    pub fn without_capture(&self) -> Self {
        match self {
            Self::Base(_) | Self::TypeVariable(_) => self.clone(),
            Self::Array(ArrayType {
                dimensions,
                element,
            }) => Self::Array(ArrayType {
                dimensions: *dimensions,
                element: Box::new(element.without_capture()),
            }),
            Self::Class(class) => Self::Class(class.map_arguments(&Self::without_capture)),
            Self::Wildcard(wildcard) | Self::Capture(wildcard) => {
                Self::Wildcard(wildcard.map_bound(&Self::without_capture))
            }
            Self::Intersection(bounds) => Self::Intersection(
                bounds
                    .iter()
                    .map(|it| it.map_arguments(&Self::without_capture))
                    .collect(),
            ),
        }
    }
}

impl Wildcard {
    fn erasure(&self) -> Self {
        self.map_bound(&TypeSignature::erasure)
    }

    fn map_bound(&self, f: &impl Fn(&TypeSignature) -> TypeSignature) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Extends(bound) => Self::Extends(Box::new(f(bound))),
            Self::Super(bound) => Self::Super(Box::new(f(bound))),
        }
    }
}

impl ClassType {
    /// Returns the innermost class segment.
    #[must_use]
    pub fn innermost(&self) -> &SimpleClassType {
        self.nested.last().map_or(&self.outer, |it| &it.class)
    }

    /// Returns the type arguments of the innermost class segment.
    #[must_use]
    pub fn type_arguments(&self) -> &[TypeSignature] {
        &self.innermost().type_arguments
    }

    /// Returns the class type with all type arguments removed.
    /// Package segments, names and separators are kept as they are.
    #[must_use]
    pub fn erasure(&self) -> Self {
        Self {
            resolved: self.resolved,
            package: self.package.clone(),
            outer: SimpleClassType::new(self.outer.name.clone()),
            nested: self
                .nested
                .iter()
                .map(|it| NestedClassType {
                    separator: it.separator,
                    class: SimpleClassType::new(it.class.name.clone()),
                })
                .collect(),
        }
    }

    fn map_arguments(&self, f: &impl Fn(&TypeSignature) -> TypeSignature) -> Self {
        let map_segment = |segment: &SimpleClassType| SimpleClassType {
            name: segment.name.clone(),
            type_arguments: segment.type_arguments.iter().map(f).collect(),
        };
        Self {
            resolved: self.resolved,
            package: self.package.clone(),
            outer: map_segment(&self.outer),
            nested: self
                .nested
                .iter()
                .map(|it| NestedClassType {
                    separator: it.separator,
                    class: map_segment(&it.class),
                })
                .collect(),
        }
    }
}

impl SimpleClassType {
    /// Creates a segment without type arguments.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }
}

impl Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(base) => base.fmt(f),
            Self::Array(array) => array.fmt(f),
            Self::Class(class) => class.fmt(f),
            Self::TypeVariable(name) => write!(f, "{C_TYPE_VARIABLE}{name}{C_NAME_END}"),
            Self::Wildcard(wildcard) => wildcard.fmt(f),
            Self::Capture(wildcard) => write!(f, "{C_CAPTURE}{wildcard}"),
            Self::Intersection(bounds) => {
                write!(f, "{C_INTERSECTION}{}", bounds.iter().join(&C_COLON.to_string()))
            }
        }
    }
}

impl Display for ArrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.dimensions {
            write!(f, "{C_ARRAY}")?;
        }
        self.element.fmt(f)
    }
}

impl Display for Wildcard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "{C_STAR}"),
            Self::Extends(bound) => write!(f, "{C_EXTENDS}{bound}"),
            Self::Super(bound) => write!(f, "{C_SUPER}{bound}"),
        }
    }
}

impl Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.resolved { C_RESOLVED } else { C_UNRESOLVED };
        write!(f, "{marker}")?;
        for segment in &self.package {
            write!(f, "{segment}{C_DOT}")?;
        }
        self.outer.fmt(f)?;
        for NestedClassType { separator, class } in &self.nested {
            let separator = match separator {
                Nesting::Dollar => C_DOLLAR,
                Nesting::Dot => C_DOT,
            };
            write!(f, "{separator}{class}")?;
        }
        write!(f, "{C_NAME_END}")
    }
}

impl Display for SimpleClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_arguments.is_empty() {
            write!(
                f,
                "{C_GENERIC_START}{}{C_GENERIC_END}",
                self.type_arguments.iter().join("")
            )?;
        }
        Ok(())
    }
}

impl FromStr for TypeSignature {
    type Err = SyntaxError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Parser::parse_all(signature, Parser::type_signature)
    }
}

impl FromStr for ClassType {
    type Err = SyntaxError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Parser::parse_all(signature, Parser::class_type)
    }
}
