//! A single-pass recursive descent parser for the signature grammar.

use crate::{
    errors::{MAX_DEPTH, SyntaxError, SyntaxErrorKind},
    types::{
        base_type::BaseType,
        markers::{
            C_ARRAY, C_CAPTURE, C_COLON, C_DOLLAR, C_DOT, C_EXCEPTION_START, C_EXTENDS,
            C_GENERIC_END, C_GENERIC_START, C_INTERSECTION, C_NAME_END, C_PARAM_END,
            C_PARAM_START, C_RESOLVED, C_STAR, C_SUPER, C_TYPE_VARIABLE, C_UNRESOLVED,
            is_delimiter,
        },
    },
};

use super::{
    ArrayType, ClassType, MethodSignature, NestedClassType, Nesting, SimpleClassType,
    TypeParameter, TypeSignature, Wildcard, class::ClassSignature,
};

type Result<T> = std::result::Result<T, SyntaxError>;

/// A cursor over a signature.
///
/// The position is a byte offset. Every grammar marker is ASCII, so the
/// offsets where the parser stops are always character boundaries.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Runs `production` over the whole of `input`, rejecting any trailing characters.
    pub(crate) fn parse_all<T>(
        input: &'a str,
        production: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let mut parser = Self::new(input);
        production(&mut parser)
            .and_then(|it| parser.finish().map(|()| it))
            .map_err(SyntaxError::reported)
    }

    pub(crate) fn finish(&self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.error(SyntaxErrorKind::TrailingCharacters))
        }
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(self.input, self.pos, kind)
    }

    fn unexpected(&self) -> SyntaxError {
        match self.peek() {
            Some(c) => self.error(SyntaxErrorKind::UnexpectedChar(c)),
            None => self.error(SyntaxErrorKind::UnexpectedEnd),
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else if self.peek().is_none() {
            Err(self.error(SyntaxErrorKind::UnexpectedEnd))
        } else {
            Err(self.error(SyntaxErrorKind::Expected(expected)))
        }
    }

    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(SyntaxErrorKind::TooDeep));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn identifier(&mut self) -> Result<&'a str> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        if start == self.pos {
            Err(self.error(SyntaxErrorKind::EmptyIdentifier))
        } else {
            Ok(&self.input[start..self.pos])
        }
    }

    /// Parses any type signature, including `void`.
    pub(crate) fn type_signature(&mut self) -> Result<TypeSignature> {
        self.nested(|p| match p.peek() {
            Some(C_ARRAY) => p.array_type().map(TypeSignature::Array),
            Some(C_RESOLVED | C_UNRESOLVED) => p.class_type().map(TypeSignature::Class),
            Some(C_TYPE_VARIABLE) => p.type_variable(),
            Some(C_STAR | C_EXTENDS | C_SUPER) => p.wildcard().map(TypeSignature::Wildcard),
            Some(C_CAPTURE) => {
                p.bump();
                p.wildcard().map(TypeSignature::Capture)
            }
            Some(C_INTERSECTION) => p.intersection(),
            Some(c) => match BaseType::try_from(c) {
                Ok(base) => {
                    p.bump();
                    Ok(TypeSignature::Base(base))
                }
                Err(_) => Err(p.unexpected()),
            },
            None => Err(p.unexpected()),
        })
    }

    /// Parses a type signature that is not `void`.
    fn value_type(&mut self) -> Result<TypeSignature> {
        let start = self.pos;
        match self.type_signature()? {
            TypeSignature::Base(BaseType::Void) => Err(SyntaxError::new(
                self.input,
                start,
                SyntaxErrorKind::IllegalVoid,
            )),
            it => Ok(it),
        }
    }

    fn array_type(&mut self) -> Result<ArrayType> {
        let mut dimensions = 0;
        while self.eat(C_ARRAY) {
            dimensions += 1;
        }
        let element = match self.peek() {
            Some(C_RESOLVED | C_UNRESOLVED) => TypeSignature::Class(self.nested(Self::class_type)?),
            Some(C_TYPE_VARIABLE) => self.type_variable()?,
            Some(c) => match BaseType::try_from(c) {
                Ok(BaseType::Void) => return Err(self.error(SyntaxErrorKind::IllegalVoid)),
                Ok(base) => {
                    self.bump();
                    TypeSignature::Base(base)
                }
                Err(_) => return Err(self.unexpected()),
            },
            None => return Err(self.error(SyntaxErrorKind::Unbalanced)),
        };
        Ok(ArrayType {
            dimensions,
            element: Box::new(element),
        })
    }

    pub(crate) fn class_type(&mut self) -> Result<ClassType> {
        let resolved = match self.peek() {
            Some(C_RESOLVED) => true,
            Some(C_UNRESOLVED) => false,
            _ => return Err(self.unexpected()),
        };
        self.bump();

        let mut package = Vec::new();
        let outer = loop {
            let name = self.identifier()?;
            if self.peek() == Some(C_DOT) {
                self.bump();
                package.push(name.to_owned());
            } else {
                break self.class_segment_arguments(name)?;
            }
        };

        let mut nested = Vec::new();
        loop {
            let separator = match self.bump() {
                Some(C_NAME_END) => break,
                Some(C_DOLLAR) => Nesting::Dollar,
                Some(C_DOT) => Nesting::Dot,
                Some(c) => {
                    self.pos -= c.len_utf8();
                    return Err(self.unexpected());
                }
                None => return Err(self.error(SyntaxErrorKind::Expected(C_NAME_END))),
            };
            let name = self.identifier()?;
            let class = self.class_segment_arguments(name)?;
            nested.push(NestedClassType { separator, class });
        }

        Ok(ClassType {
            resolved,
            package,
            outer,
            nested,
        })
    }

    fn class_segment_arguments(&mut self, name: &str) -> Result<SimpleClassType> {
        let type_arguments = if self.peek() == Some(C_GENERIC_START) {
            self.type_arguments()?
        } else {
            Vec::new()
        };
        Ok(SimpleClassType {
            name: name.to_owned(),
            type_arguments,
        })
    }

    fn type_arguments(&mut self) -> Result<Vec<TypeSignature>> {
        self.expect(C_GENERIC_START)?;
        if self.peek() == Some(C_GENERIC_END) {
            return Err(self.error(SyntaxErrorKind::EmptyTypeArguments));
        }
        let mut arguments = Vec::new();
        while !self.eat(C_GENERIC_END) {
            if self.peek().is_none() {
                return Err(self.error(SyntaxErrorKind::Unbalanced));
            }
            arguments.push(self.value_type()?);
        }
        Ok(arguments)
    }

    fn type_variable(&mut self) -> Result<TypeSignature> {
        self.expect(C_TYPE_VARIABLE)?;
        let name = self.identifier()?;
        self.expect(C_NAME_END)?;
        Ok(TypeSignature::TypeVariable(name.to_owned()))
    }

    fn wildcard(&mut self) -> Result<Wildcard> {
        match self.peek() {
            Some(C_STAR) => {
                self.bump();
                Ok(Wildcard::Unbounded)
            }
            Some(C_EXTENDS) => {
                self.bump();
                Ok(Wildcard::Extends(Box::new(self.value_type()?)))
            }
            Some(C_SUPER) => {
                self.bump();
                Ok(Wildcard::Super(Box::new(self.value_type()?)))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn intersection(&mut self) -> Result<TypeSignature> {
        self.expect(C_INTERSECTION)?;
        let mut bounds = vec![self.class_type()?];
        while self.eat(C_COLON) {
            bounds.push(self.class_type()?);
        }
        Ok(TypeSignature::Intersection(bounds))
    }

    pub(crate) fn method_signature(&mut self) -> Result<MethodSignature> {
        let type_parameters = self.optional_type_parameters()?;
        self.expect(C_PARAM_START)?;
        let mut parameter_types = Vec::new();
        while !self.eat(C_PARAM_END) {
            if self.peek().is_none() {
                return Err(self.error(SyntaxErrorKind::Expected(C_PARAM_END)));
            }
            parameter_types.push(self.value_type()?);
        }
        let return_type = self.type_signature()?;
        let mut exception_types = Vec::new();
        while self.eat(C_EXCEPTION_START) {
            let exception = match self.peek() {
                Some(C_TYPE_VARIABLE) => self.type_variable()?,
                Some(C_RESOLVED | C_UNRESOLVED) => TypeSignature::Class(self.class_type()?),
                _ => return Err(self.unexpected()),
            };
            exception_types.push(exception);
        }
        Ok(MethodSignature {
            type_parameters,
            parameter_types,
            return_type,
            exception_types,
        })
    }

    pub(crate) fn class_signature(&mut self) -> Result<ClassSignature> {
        let type_parameters = self.optional_type_parameters()?;
        let super_class = self.class_type()?;
        let mut interfaces = Vec::new();
        while self.peek().is_some() {
            interfaces.push(self.class_type()?);
        }
        Ok(ClassSignature {
            type_parameters,
            super_class,
            interfaces,
        })
    }

    fn optional_type_parameters(&mut self) -> Result<Vec<TypeParameter>> {
        if self.peek() != Some(C_GENERIC_START) {
            return Ok(Vec::new());
        }
        self.bump();
        let mut type_parameters = vec![self.type_parameter()?];
        while !self.eat(C_GENERIC_END) {
            if self.peek().is_none() {
                return Err(self.error(SyntaxErrorKind::Unbalanced));
            }
            type_parameters.push(self.type_parameter()?);
        }
        Ok(type_parameters)
    }

    /// Parses one type parameter. The bound list ends at the first `:`-prefixed
    /// segment that is not a bound; that segment starts the next type parameter.
    pub(crate) fn type_parameter(&mut self) -> Result<TypeParameter> {
        let name = self.identifier()?.to_owned();
        self.expect(C_COLON)?;
        let class_bound = self.bound()?;
        let mut interface_bounds = Vec::new();
        loop {
            let checkpoint = self.pos;
            if !self.eat(C_COLON) {
                break;
            }
            match self.bound()? {
                Some(bound) => interface_bounds.push(bound),
                None => {
                    self.pos = checkpoint;
                    break;
                }
            }
        }
        Ok(TypeParameter {
            name,
            class_bound,
            interface_bounds,
        })
    }

    /// Tries, in order, no bound, a class bound, an array bound, and a type variable bound.
    /// Returns `None` and leaves the cursor untouched when no candidate matches.
    fn bound(&mut self) -> Result<Option<TypeSignature>> {
        let checkpoint = self.pos;
        let candidate = match self.peek() {
            None | Some(C_COLON | C_GENERIC_END) => return Ok(None),
            Some(C_RESOLVED | C_UNRESOLVED) => self.class_type().map(TypeSignature::Class),
            Some(C_ARRAY) => self.array_type().map(TypeSignature::Array),
            Some(C_TYPE_VARIABLE) => self.type_variable(),
            Some(_) => return Ok(None),
        };
        match candidate {
            Ok(bound) => Ok(Some(bound)),
            Err(err) => {
                tracing::trace!(
                    index = checkpoint,
                    reason = %err.kind,
                    "bound candidate rejected, treating it as the next type parameter"
                );
                self.pos = checkpoint;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SyntaxErrorKind::*;

    fn parse_type(input: &str) -> Result<TypeSignature> {
        Parser::parse_all(input, Parser::type_signature)
    }

    fn error_of(input: &str) -> (usize, SyntaxErrorKind) {
        let err = parse_type(input).expect_err("Expected a syntax error");
        (err.index, err.kind)
    }

    #[test]
    fn missing_name_end() {
        assert_eq!(error_of("Ljava.lang.String"), (17, Expected(';')));
        assert_eq!(error_of("TT"), (2, UnexpectedEnd));
    }

    #[test]
    fn truncated_array() {
        assert_eq!(error_of("[["), (2, Unbalanced));
        assert_eq!(error_of("[V"), (1, IllegalVoid));
        assert_eq!(error_of("[*"), (1, UnexpectedChar('*')));
    }

    #[test]
    fn unbalanced_type_arguments() {
        assert_eq!(error_of("Ljava.util.List<TT;"), (19, Unbalanced));
        assert_eq!(error_of("Ljava.util.List<>;"), (16, EmptyTypeArguments));
        assert_eq!(error_of("Ljava.util.List<TT;>>;"), (20, UnexpectedChar('>')));
    }

    #[test]
    fn empty_segments() {
        assert_eq!(error_of("Ljava..String;"), (6, EmptyIdentifier));
        assert_eq!(error_of("L;"), (1, EmptyIdentifier));
        assert_eq!(error_of("LOuter$;"), (7, EmptyIdentifier));
    }

    #[test]
    fn trailing_input() {
        assert_eq!(error_of("II"), (1, TrailingCharacters));
        assert_eq!(error_of(""), (0, UnexpectedEnd));
    }

    #[test]
    fn capture_requires_wildcard() {
        assert_eq!(error_of("!Ljava.lang.Object;"), (1, UnexpectedChar('L')));
        assert!(parse_type("!-Ljava.lang.Object;").is_ok());
    }

    #[test]
    fn void_arguments_are_rejected() {
        assert_eq!(error_of("Ljava.util.List<V>;"), (16, IllegalVoid));
        assert_eq!(error_of("+V"), (1, IllegalVoid));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let input = "+".repeat(MAX_DEPTH + 1) + "I";
        assert_eq!(error_of(&input).1, TooDeep);
        let input = "+".repeat(MAX_DEPTH - 1) + "I";
        assert!(parse_type(&input).is_ok());
    }

    #[test]
    fn non_ascii_identifiers() {
        let sig = parse_type("Lcafé.Crème$Brûlée;").unwrap();
        assert_eq!(sig.to_string(), "Lcafé.Crème$Brûlée;");
    }

    #[test]
    fn type_parameter_bounds_backtrack() {
        let params = Parser::parse_all("<A:B::Ljava.lang.Runnable;>", |p| {
            p.optional_type_parameters()
        })
        .unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "A");
        assert!(params[0].bounds().next().is_none());
        assert_eq!(params[1].name, "B");
        assert_eq!(params[1].class_bound, None);
        assert_eq!(params[1].interface_bounds.len(), 1);
    }

    #[test]
    fn type_parameter_named_like_a_bound() {
        let params = Parser::parse_all("<S:T:TS;Lfoo::Ljava.lang.Cloneable;>", |p| {
            p.optional_type_parameters()
        })
        .unwrap();
        let names: Vec<_> = params.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(names, vec!["S", "T", "Lfoo"]);
        assert_eq!(
            params[1].class_bound,
            Some(TypeSignature::TypeVariable("S".to_owned()))
        );
    }

    #[test]
    fn dangling_bound_separator() {
        let err = Parser::parse_all("<T:Ljava.lang.Object;:>", |p| {
            p.optional_type_parameters()
        })
        .unwrap_err();
        assert_eq!(err.index, 21);
        assert_eq!(err.kind, EmptyIdentifier);
    }
}
