use proptest::prelude::*;

use crate::types::{
    base_type::BaseType,
    signatures::{
        ClassType, MethodSignature, NestedClassType, Nesting, SimpleClassType, TypeParameter,
        TypeSignature, Wildcard,
    },
};

pub(crate) fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z_][A-Za-z0-9_]{0,7}").expect("The regex is invalid")
}

fn arb_package_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z][a-z0-9_]{0,5}").expect("The regex is invalid")
}

fn arb_class_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Z][A-Za-z0-9_]{0,7}").expect("The regex is invalid")
}

fn arb_value_base_type() -> impl Strategy<Value = BaseType> {
    any::<BaseType>().prop_filter("void is not a value type", |it| *it != BaseType::Void)
}

/// Class types whose segments draw their type arguments from `arguments`.
fn arb_class_type_of(
    arguments: BoxedStrategy<Vec<TypeSignature>>,
) -> BoxedStrategy<ClassType> {
    (
        any::<bool>(),
        prop::collection::vec(arb_package_segment(), 0..3),
        arb_class_name(),
        arguments.clone(),
        prop::collection::vec((any::<bool>(), arb_class_name(), arguments), 0..3),
    )
        .prop_map(|(resolved, package, name, type_arguments, nested)| {
            let outer = SimpleClassType {
                name,
                type_arguments,
            };
            // A `.` right after an outer class without arguments would read as a package.
            let dot_allowed_first = !outer.type_arguments.is_empty();
            let nested = nested
                .into_iter()
                .enumerate()
                .map(|(idx, (dot, name, type_arguments))| NestedClassType {
                    separator: if dot && (idx > 0 || dot_allowed_first) {
                        Nesting::Dot
                    } else {
                        Nesting::Dollar
                    },
                    class: SimpleClassType {
                        name,
                        type_arguments,
                    },
                })
                .collect();
            ClassType {
                resolved,
                package,
                outer,
                nested,
            }
        })
        .boxed()
}

fn arb_array_element(class: BoxedStrategy<ClassType>) -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        arb_value_base_type().prop_map(TypeSignature::Base),
        arb_identifier().prop_map(TypeSignature::TypeVariable),
        class.prop_map(TypeSignature::Class),
    ]
}

fn arb_wildcard(bound: BoxedStrategy<TypeSignature>) -> impl Strategy<Value = Wildcard> {
    prop_oneof![
        Just(Wildcard::Unbounded),
        bound.clone().prop_map(|it| Wildcard::Extends(Box::new(it))),
        bound.prop_map(|it| Wildcard::Super(Box::new(it))),
    ]
}

fn arb_leaf_type() -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        arb_value_base_type().prop_map(TypeSignature::Base),
        arb_identifier().prop_map(TypeSignature::TypeVariable),
        arb_class_type_of(Just(Vec::new()).boxed()).prop_map(TypeSignature::Class),
    ]
}

/// Any type signature except `void`.
pub(crate) fn arb_value_type() -> impl Strategy<Value = TypeSignature> {
    arb_leaf_type().prop_recursive(4, 32, 3, |inner| {
        let arguments = prop_oneof![
            2 => Just(Vec::new()),
            1 => prop::collection::vec(inner.clone(), 1..3),
        ]
        .boxed();
        let class = arb_class_type_of(arguments);
        prop_oneof![
            class.clone().prop_map(TypeSignature::Class),
            (arb_array_element(class.clone()), 1..4usize)
                .prop_map(|(element, dimensions)| TypeSignature::array_of(element, dimensions)),
            arb_wildcard(inner.clone()).prop_map(TypeSignature::Wildcard),
            arb_wildcard(inner).prop_map(TypeSignature::Capture),
            prop::collection::vec(class, 1..3).prop_map(TypeSignature::Intersection),
        ]
    })
}

pub(crate) fn arb_type_signature() -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        1 => Just(TypeSignature::Base(BaseType::Void)),
        9 => arb_value_type(),
    ]
}

pub(crate) fn arb_class_type() -> BoxedStrategy<ClassType> {
    let arguments = prop::collection::vec(arb_value_type(), 0..3).boxed();
    arb_class_type_of(arguments)
}

fn arb_bound() -> impl Strategy<Value = TypeSignature> {
    let class = arb_class_type();
    prop_oneof![
        class.clone().prop_map(TypeSignature::Class),
        (arb_array_element(class), 1..3usize)
            .prop_map(|(element, dimensions)| TypeSignature::array_of(element, dimensions)),
        arb_identifier().prop_map(TypeSignature::TypeVariable),
    ]
}

prop_compose! {
    pub(crate) fn arb_type_parameter()(
        name in arb_identifier(),
        class_bound in prop::option::of(arb_bound()),
        interface_bounds in prop::collection::vec(arb_bound(), 0..3),
    ) -> TypeParameter {
        TypeParameter { name, class_bound, interface_bounds }
    }
}

fn arb_exception_type() -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        arb_class_type().prop_map(TypeSignature::Class),
        arb_identifier().prop_map(TypeSignature::TypeVariable),
    ]
}

prop_compose! {
    pub(crate) fn arb_method_signature()(
        type_parameters in prop::collection::vec(arb_type_parameter(), 0..3),
        parameter_types in prop::collection::vec(arb_value_type(), 0..4),
        return_type in arb_type_signature(),
        exception_types in prop::collection::vec(arb_exception_type(), 0..3),
    ) -> MethodSignature {
        MethodSignature { type_parameters, parameter_types, return_type, exception_types }
    }
}
