//! Rendering signatures as human-readable type names.

use bitflags::bitflags;

use crate::types::markers::{C_DOLLAR, C_DOT, C_GENERIC_END, C_GENERIC_START};

use super::{
    ArrayType, ClassType, MethodSignature, NestedClassType, Nesting, SimpleClassType,
    TypeParameter, TypeSignature, Wildcard,
};

/// Replaces the enclosing class of an anonymous class ordinal, e.g., `new Outer(){}`.
const ANONYMOUS_PREFIX: &str = "new ";
const ANONYMOUS_SUFFIX: &str = "(){}";
const CAPTURE_PREFIX: &str = "capture-of ";

bitflags! {
    /// Controls how a signature is rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderFlags: u8 {
        /// Keeps the package of resolved class names.
        /// Unresolved names are always rendered verbatim.
        const FULLY_QUALIFIED = 1;
        /// Renders the nesting marker `$` verbatim instead of as `.`.
        /// Also disables the anonymous class rendering.
        const PRESERVE_NESTING = 1 << 1;
        /// Omits all type arguments.
        const ERASED = 1 << 2;
    }
}

/// Options for rendering a [`MethodSignature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodRenderOptions<'a> {
    /// The method name placed before the parameter list.
    pub name: Option<&'a str>,
    /// Names appended to the parameter types, matched by position.
    pub parameter_names: &'a [&'a str],
    /// How each type is rendered.
    pub flags: RenderFlags,
    /// Whether to render the return type in front of the name.
    pub include_return_type: bool,
    /// Whether the last array parameter is rendered as variadic (`T...`).
    pub is_var_args: bool,
}

impl Default for MethodRenderOptions<'_> {
    fn default() -> Self {
        Self {
            name: None,
            parameter_names: &[],
            flags: RenderFlags::FULLY_QUALIFIED,
            include_return_type: true,
            is_var_args: false,
        }
    }
}

impl TypeSignature {
    /// Renders the signature as a readable type name.
    #[must_use]
    pub fn render(&self, flags: RenderFlags) -> String {
        let mut out = String::new();
        write_type(self, flags, &mut out);
        out
    }
}

impl ClassType {
    /// Renders the class type without its package, i.e., the outermost class followed by
    /// the member classes.
    #[must_use]
    pub fn render_path(&self, flags: RenderFlags) -> String {
        let mut out = String::new();
        write_class_path(self, flags, 0, &mut out);
        out
    }
}

impl TypeParameter {
    /// Renders the type parameter as it appears in a declaration, e.g., `T extends Number`.
    #[must_use]
    pub fn render(&self, flags: RenderFlags) -> String {
        let mut out = self.name.clone();
        for (idx, bound) in self.bounds().enumerate() {
            out.push_str(if idx == 0 { " extends " } else { " & " });
            write_type(bound, flags, &mut out);
        }
        out
    }
}

impl MethodSignature {
    /// Renders the method as a readable declaration, e.g.,
    /// `<T> java.lang.String format(java.lang.String fmt, T... args) throws java.io.IOException`.
    #[must_use]
    pub fn render(&self, options: &MethodRenderOptions<'_>) -> String {
        let flags = options.flags;
        let mut out = String::new();
        if !self.type_parameters.is_empty() {
            out.push(C_GENERIC_START);
            for (idx, param) in self.type_parameters.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(&param.render(flags));
            }
            out.push(C_GENERIC_END);
            out.push(' ');
        }
        if options.include_return_type {
            write_type(&self.return_type, flags, &mut out);
            out.push(' ');
        }
        if let Some(name) = options.name {
            out.push_str(name);
        }
        out.push('(');
        let last = self.parameter_types.len().saturating_sub(1);
        for (idx, param) in self.parameter_types.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            match param {
                TypeSignature::Array(array) if options.is_var_args && idx == last => {
                    write_array(array, flags, true, &mut out);
                }
                it => write_type(it, flags, &mut out),
            }
            if let Some(name) = options.parameter_names.get(idx) {
                out.push(' ');
                out.push_str(name);
            }
        }
        out.push(')');
        for (idx, exception) in self.exception_types.iter().enumerate() {
            out.push_str(if idx == 0 { " throws " } else { ", " });
            write_type(exception, flags, &mut out);
        }
        out
    }
}

pub(crate) fn write_type(sig: &TypeSignature, flags: RenderFlags, out: &mut String) {
    match sig {
        TypeSignature::Base(base) => out.push_str(base.keyword()),
        TypeSignature::Array(array) => write_array(array, flags, false, out),
        TypeSignature::Class(class) => write_class(class, flags, out),
        TypeSignature::TypeVariable(name) => out.push_str(name),
        TypeSignature::Wildcard(wildcard) => write_wildcard(wildcard, flags, out),
        TypeSignature::Capture(wildcard) => {
            out.push_str(CAPTURE_PREFIX);
            write_wildcard(wildcard, flags, out);
        }
        TypeSignature::Intersection(bounds) => {
            for (idx, bound) in bounds.iter().enumerate() {
                if idx > 0 {
                    out.push_str(" | ");
                }
                write_class(bound, flags, out);
            }
        }
    }
}

fn write_array(array: &ArrayType, flags: RenderFlags, variadic: bool, out: &mut String) {
    write_type(&array.element, flags, out);
    let brackets = if variadic {
        array.dimensions - 1
    } else {
        array.dimensions
    };
    for _ in 0..brackets {
        out.push_str("[]");
    }
    if variadic {
        out.push_str("...");
    }
}

fn write_wildcard(wildcard: &Wildcard, flags: RenderFlags, out: &mut String) {
    match wildcard {
        Wildcard::Unbounded => out.push('?'),
        Wildcard::Extends(bound) => {
            out.push_str("? extends ");
            write_type(bound, flags, out);
        }
        Wildcard::Super(bound) => {
            out.push_str("? super ");
            write_type(bound, flags, out);
        }
    }
}

fn write_class(class: &ClassType, flags: RenderFlags, out: &mut String) {
    let checkpoint = out.len();
    if flags.contains(RenderFlags::FULLY_QUALIFIED) || !class.resolved {
        for segment in &class.package {
            out.push_str(segment);
            out.push(C_DOT);
        }
    }
    write_class_path(class, flags, checkpoint, out);
}

/// Writes the class names after the package. `checkpoint` is where the rendering of
/// this class type started in `out`; the anonymous class prefix goes there.
fn write_class_path(class: &ClassType, flags: RenderFlags, checkpoint: usize, out: &mut String) {
    write_segment(&class.outer, flags, out);
    let verbatim = !class.resolved || flags.contains(RenderFlags::PRESERVE_NESTING);
    for NestedClassType { separator, class: segment } in &class.nested {
        match separator {
            Nesting::Dot => {
                out.push(C_DOT);
                write_segment(segment, flags, out);
            }
            Nesting::Dollar if verbatim => {
                out.push(C_DOLLAR);
                write_segment(segment, flags, out);
            }
            // Compiler-generated ordinal: `Outer$1` is an anonymous subclass of `Outer`.
            Nesting::Dollar if segment.name.starts_with(|c: char| c.is_ascii_digit()) => {
                out.insert_str(checkpoint, ANONYMOUS_PREFIX);
                out.push_str(ANONYMOUS_SUFFIX);
                write_arguments(&segment.type_arguments, flags, out);
            }
            Nesting::Dollar => {
                out.push(C_DOT);
                write_segment(segment, flags, out);
            }
        }
    }
}

fn write_segment(segment: &SimpleClassType, flags: RenderFlags, out: &mut String) {
    out.push_str(&segment.name);
    write_arguments(&segment.type_arguments, flags, out);
}

fn write_arguments(arguments: &[TypeSignature], flags: RenderFlags, out: &mut String) {
    if arguments.is_empty() || flags.contains(RenderFlags::ERASED) {
        return;
    }
    out.push(C_GENERIC_START);
    for (idx, argument) in arguments.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_type(argument, flags, out);
    }
    out.push(C_GENERIC_END);
}
