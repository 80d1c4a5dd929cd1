//! Encoding readable type names into signatures, and assembling composite signatures.

use itertools::Itertools;

use crate::{
    errors::{MAX_DEPTH, SyntaxError, SyntaxErrorKind},
    types::{
        base_type::BaseType,
        markers::{
            C_ARRAY, C_COLON, C_DOLLAR, C_DOT, C_GENERIC_END, C_GENERIC_START, C_INTERSECTION,
            C_PARAM_END, C_PARAM_START, is_delimiter,
        },
        signatures::{ClassType, NestedClassType, Nesting, SimpleClassType, TypeSignature, Wildcard},
    },
};

const VARIADIC: &str = "...";

type Result<T> = std::result::Result<T, SyntaxError>;

/// Encodes a readable type name into a signature.
///
/// The name may be dot-qualified, parameterized (`java.util.List<java.lang.String>`),
/// suffixed with any number of `[]` or a trailing `...`, and may be a wildcard
/// (`?`, `? extends X`, `? super X`). Whitespace between tokens is ignored.
/// Class names are encoded as resolved (`L`) or unresolved (`Q`) according to
/// `resolved`; primitive keywords are always encoded as their single-character code.
///
/// # Errors
/// Returns [`SyntaxError`] if `type_name` is not a well-formed type name.
///
/// # Examples
/// ```
/// use sigtext::create_type_signature;
///
/// assert_eq!(create_type_signature("java.lang.String[]", true).unwrap(), "[Ljava.lang.String;");
/// assert_eq!(create_type_signature("Map<String, ? extends Number>", false).unwrap(), "QMap<QString;+QNumber;>;");
/// ```
pub fn create_type_signature(type_name: &str, resolved: bool) -> Result<String> {
    parse_type_name(type_name, resolved).map(|it| it.to_string())
}

/// Parses a readable type name into a [`TypeSignature`].
///
/// # Errors
/// See [`create_type_signature`].
pub fn parse_type_name(type_name: &str, resolved: bool) -> Result<TypeSignature> {
    let mut parser = NameParser {
        input: type_name,
        pos: 0,
        resolved,
        depth: 0,
    };
    parser
        .type_name(true)
        .and_then(|it| {
            parser.skip_whitespace();
            if parser.pos == parser.input.len() {
                Ok(it)
            } else {
                Err(parser.error(SyntaxErrorKind::TrailingCharacters))
            }
        })
        .map_err(SyntaxError::reported)
}

/// Creates an array signature with `dimensions` dimensions of `element_type`.
#[must_use]
pub fn create_array_type_signature(element_type: &str, dimensions: usize) -> String {
    let mut signature = C_ARRAY.to_string().repeat(dimensions);
    signature.push_str(element_type);
    signature
}

/// Creates a method signature from parameter signatures and a return type signature.
///
/// ```
/// use sigtext::create_method_signature;
///
/// assert_eq!(create_method_signature(&["I", "Ljava.lang.String;"], "V"), "(ILjava.lang.String;)V");
/// ```
#[must_use]
pub fn create_method_signature<S: AsRef<str>>(parameter_types: &[S], return_type: &str) -> String {
    format!(
        "{C_PARAM_START}{}{C_PARAM_END}{return_type}",
        parameter_types.iter().map(AsRef::as_ref).join("")
    )
}

/// Creates a formal type parameter signature. Every bound is prefixed by `:`; with no
/// bounds at all the result still ends with `:` so that it stays self-delimiting.
#[must_use]
pub fn create_type_parameter_signature<S: AsRef<str>>(name: &str, bounds: &[S]) -> String {
    if bounds.is_empty() {
        return format!("{name}{C_COLON}");
    }
    let mut signature = name.to_owned();
    for bound in bounds {
        signature.push(C_COLON);
        signature.push_str(bound.as_ref());
    }
    signature
}

/// Creates an intersection type signature from class type signatures.
#[must_use]
pub fn create_intersection_type_signature<S: AsRef<str>>(bounds: &[S]) -> String {
    format!(
        "{C_INTERSECTION}{}",
        bounds.iter().map(AsRef::as_ref).join(&C_COLON.to_string())
    )
}

fn is_name_delimiter(c: char) -> bool {
    is_delimiter(c) || matches!(c, ']' | '?' | '&')
}

struct NameSegment {
    separator: Option<Nesting>,
    name: String,
    type_arguments: Vec<TypeSignature>,
}

struct NameParser<'a> {
    input: &'a str,
    pos: usize,
    resolved: bool,
    depth: usize,
}

impl NameParser<'_> {
    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(self.input, self.pos, kind)
    }

    fn unexpected(&self) -> SyntaxError {
        match self.peek() {
            Some(c) => self.error(SyntaxErrorKind::UnexpectedChar(c)),
            None => self.error(SyntaxErrorKind::UnexpectedEnd),
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn identifier(&mut self) -> Result<String> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_name_delimiter(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        if start != self.pos {
            Ok(self.input[start..self.pos].to_owned())
        } else if self.peek().is_none() {
            Err(self.error(SyntaxErrorKind::UnexpectedEnd))
        } else {
            Err(self.error(SyntaxErrorKind::EmptyIdentifier))
        }
    }

    fn type_name(&mut self, allow_wildcard: bool) -> Result<TypeSignature> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(SyntaxErrorKind::TooDeep));
        }
        self.depth += 1;
        let result = self.type_name_inner(allow_wildcard);
        self.depth -= 1;
        result
    }

    fn type_name_inner(&mut self, allow_wildcard: bool) -> Result<TypeSignature> {
        self.skip_whitespace();
        if allow_wildcard && self.eat('?') {
            return self.wildcard().map(TypeSignature::Wildcard);
        }
        let start = self.pos;
        let element = self.named_type()?;
        let dimensions = self.dimensions()?;
        if dimensions > 0 && element == TypeSignature::Base(BaseType::Void) {
            return Err(SyntaxError::new(
                self.input,
                start,
                SyntaxErrorKind::IllegalVoid,
            ));
        }
        Ok(TypeSignature::array_of(element, dimensions))
    }

    fn value_type(&mut self, allow_wildcard: bool) -> Result<TypeSignature> {
        self.skip_whitespace();
        let start = self.pos;
        match self.type_name(allow_wildcard)? {
            TypeSignature::Base(BaseType::Void) => Err(SyntaxError::new(
                self.input,
                start,
                SyntaxErrorKind::IllegalVoid,
            )),
            it => Ok(it),
        }
    }

    fn wildcard(&mut self) -> Result<Wildcard> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            Some(c) if !is_name_delimiter(c) => match self.identifier()?.as_str() {
                "extends" => Ok(Wildcard::Extends(Box::new(self.value_type(false)?))),
                "super" => Ok(Wildcard::Super(Box::new(self.value_type(false)?))),
                _ => {
                    self.pos = start;
                    Err(self.unexpected())
                }
            },
            _ => Ok(Wildcard::Unbounded),
        }
    }

    fn dimensions(&mut self) -> Result<usize> {
        let mut dimensions = 0;
        loop {
            self.skip_whitespace();
            if self.eat('[') {
                self.skip_whitespace();
                if !self.eat(']') {
                    return Err(self.error(SyntaxErrorKind::Unbalanced));
                }
            } else if self.rest().starts_with(VARIADIC) {
                self.pos += VARIADIC.len();
            } else {
                break Ok(dimensions);
            }
            dimensions += 1;
        }
    }

    fn named_type(&mut self) -> Result<TypeSignature> {
        let first = self.identifier()?;
        let after_first = self.pos;
        self.skip_whitespace();
        let continues = matches!(self.peek(), Some(C_DOT | C_DOLLAR))
            && !self.rest().starts_with(VARIADIC);
        if !continues {
            if let Some(base) = BaseType::from_keyword(&first) {
                self.pos = after_first;
                return Ok(TypeSignature::Base(base));
            }
        }
        self.pos = after_first;

        let mut segments = vec![NameSegment {
            separator: None,
            name: first,
            type_arguments: Vec::new(),
        }];
        loop {
            self.skip_whitespace();
            let separator = match self.peek() {
                Some(C_GENERIC_START) => {
                    match segments.last_mut() {
                        Some(last) if last.type_arguments.is_empty() => {
                            last.type_arguments = self.type_arguments()?;
                        }
                        _ => return Err(self.unexpected()),
                    }
                    continue;
                }
                Some(C_DOT) if !self.rest().starts_with(VARIADIC) => Nesting::Dot,
                Some(C_DOLLAR) => Nesting::Dollar,
                _ => break,
            };
            self.pos += 1;
            let name = self.identifier()?;
            segments.push(NameSegment {
                separator: Some(separator),
                name,
                type_arguments: Vec::new(),
            });
        }
        self.class_from_segments(segments).map(TypeSignature::Class)
    }

    fn type_arguments(&mut self) -> Result<Vec<TypeSignature>> {
        self.eat(C_GENERIC_START);
        self.skip_whitespace();
        if self.peek() == Some(C_GENERIC_END) {
            return Err(self.error(SyntaxErrorKind::EmptyTypeArguments));
        }
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.value_type(true)?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(C_GENERIC_END) => {
                    self.pos += 1;
                    break Ok(arguments);
                }
                Some(_) => break Err(self.unexpected()),
                None => break Err(self.error(SyntaxErrorKind::Unbalanced)),
            }
        }
    }

    /// Splits the segments into package, outermost class and member classes. The outermost
    /// class is the last `.`-separated segment before the first type argument list or `$`.
    fn class_from_segments(&self, mut segments: Vec<NameSegment>) -> Result<ClassType> {
        let outer_idx = (0..segments.len())
            .find(|&idx| {
                !segments[idx].type_arguments.is_empty()
                    || segments
                        .get(idx + 1)
                        .is_some_and(|next| next.separator == Some(Nesting::Dollar))
            })
            .unwrap_or(segments.len().saturating_sub(1));

        let mut classes = segments.split_off(outer_idx).into_iter();
        let outer = classes
            .next()
            .ok_or_else(|| self.error(SyntaxErrorKind::EmptyIdentifier))?;
        Ok(ClassType {
            resolved: self.resolved,
            package: segments.into_iter().map(|it| it.name).collect(),
            outer: SimpleClassType {
                name: outer.name,
                type_arguments: outer.type_arguments,
            },
            nested: classes
                .map(|it| NestedClassType {
                    separator: it.separator.unwrap_or(Nesting::Dot),
                    class: SimpleClassType {
                        name: it.name,
                        type_arguments: it.type_arguments,
                    },
                })
                .collect(),
        })
    }
}
