use proptest::prelude::*;
use sigtext::{
    MethodRenderOptions, RenderFlags, SyntaxErrorKind, TypeSignature,
    create_array_type_signature, create_intersection_type_signature, create_method_signature,
    create_type_parameter_signature, create_type_signature, decode, decode_method, decode_simple,
    decode_with,
};

#[test]
fn decode_canonical_examples() {
    assert_eq!(decode("[Ljava.lang.String;").unwrap(), "java.lang.String[]");
    assert_eq!(decode("I").unwrap(), "int");
    assert_eq!(decode("+QObject;").unwrap(), "? extends Object");
}

#[test]
fn decode_rejects_missing_name_end() {
    for sig in [
        "Ljava.lang.String",
        "[Ljava.lang.String",
        "Ljava.util.List<Ljava.lang.String>;",
        "(Ljava.lang.String)V",
    ] {
        let err = decode(sig).expect_err(sig);
        assert_eq!(err.input, sig);
        assert!(err.index <= sig.len());
    }
}

#[test]
fn decode_generic_nested_and_anonymous() {
    assert_eq!(
        decode("Ljava.util.Map<Ljava.lang.String;Ljava.util.List<-TT;>;>;").unwrap(),
        "java.util.Map<java.lang.String,java.util.List<? super T>>"
    );
    assert_eq!(
        decode_simple("Ljava.util.Map$Entry<TK;TV;>;").unwrap(),
        "Map.Entry<K,V>"
    );
    assert_eq!(decode("Lcom.acme.Widget$3;").unwrap(), "new com.acme.Widget(){}");
    assert_eq!(
        decode_with(
            "Lcom.acme.Widget$3;",
            RenderFlags::FULLY_QUALIFIED | RenderFlags::PRESERVE_NESTING
        )
        .unwrap(),
        "com.acme.Widget$3"
    );
    assert_eq!(
        decode_with("Ljava.util.List<TT;>;", RenderFlags::ERASED).unwrap(),
        "List"
    );
}

#[test]
fn decode_method_declarations() {
    let options = MethodRenderOptions {
        name: Some("printf"),
        parameter_names: &["format", "args"],
        flags: RenderFlags::empty(),
        include_return_type: true,
        is_var_args: true,
    };
    assert_eq!(
        decode_method(
            "(Ljava.lang.String;[Ljava.lang.Object;)Ljava.io.PrintStream;",
            &options
        )
        .unwrap(),
        "PrintStream printf(String format, Object... args)"
    );
    assert_eq!(
        decode("<E:Ljava.lang.Exception;>()V^TE;").unwrap(),
        "<E extends java.lang.Exception> void () throws E"
    );
}

#[test]
fn encode_readable_names() {
    assert_eq!(create_type_signature("int", true).unwrap(), "I");
    assert_eq!(create_type_signature("void", false).unwrap(), "V");
    assert_eq!(
        create_type_signature("java.util.Map.Entry<K, V>[]", true).unwrap(),
        "[Ljava.util.Map.Entry<LK;LV;>;"
    );
    assert_eq!(
        create_type_signature("java.util.List<? super Integer>", false).unwrap(),
        "Qjava.util.List<-QInteger;>;"
    );
    assert_eq!(
        create_type_signature("Object...", true).unwrap(),
        "[LObject;"
    );
    assert_eq!(create_type_signature("?", true).unwrap(), "*");
}

#[test]
fn encode_rejects_malformed_names() {
    let err = create_type_signature("java.util.List<String", true).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::Unbalanced);
    assert!(create_type_signature("", true).is_err());
    assert!(create_type_signature("List<>", true).is_err());
    assert!(create_type_signature("void[]", true).is_err());
    assert!(create_type_signature("String]", true).is_err());
}

#[test]
fn composite_signatures() {
    assert_eq!(
        create_method_signature(&["I", "Ljava.lang.String;"], "V"),
        "(ILjava.lang.String;)V"
    );
    assert_eq!(create_method_signature::<&str>(&[], "Z"), "()Z");
    assert_eq!(create_array_type_signature("I", 3), "[[[I");
    assert_eq!(create_array_type_signature("TT;", 0), "TT;");
    assert_eq!(create_type_parameter_signature::<&str>("T", &[]), "T:");
    assert_eq!(
        create_type_parameter_signature("T", &["Ljava.lang.Object;", "Ljava.io.Serializable;"]),
        "T:Ljava.lang.Object;:Ljava.io.Serializable;"
    );
    assert_eq!(
        create_intersection_type_signature(&["Ljava.lang.Number;", "Ljava.lang.Comparable;"]),
        "|Ljava.lang.Number;:Ljava.lang.Comparable;"
    );
}

#[test]
fn class_signatures_parse() {
    use sigtext::types::signatures::class::ClassSignature;

    let sig: ClassSignature = "<T:Ljava.lang.Object;>Ljava.lang.Object;Ljava.lang.Iterable<TT;>;"
        .parse()
        .unwrap();
    assert_eq!(sig.type_parameters[0].name, "T");
    assert_eq!(sig.interfaces[0].to_string(), "Ljava.lang.Iterable<TT;>;");
}

fn arb_readable_class() -> impl Strategy<Value = String> {
    "[a-z]{1,5}(\\.[a-z]{1,5}){0,2}\\.[A-Z][a-zA-Z0-9]{0,5}"
}

fn arb_readable_type() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("int".to_owned()),
        Just("boolean".to_owned()),
        arb_readable_class(),
    ];
    leaf.prop_recursive(3, 12, 3, |inner| {
        prop_oneof![
            (arb_readable_class(), prop::collection::vec(inner.clone(), 1..3)).prop_map(
                |(name, args)| format!("{name}<{}>", args.join(", "))
            ),
            inner.clone().prop_map(|it| format!("{it}[]")),
            (arb_readable_class(), inner).prop_map(|(name, bound)| {
                format!("{name}<? extends {bound}>")
            }),
        ]
    })
}

proptest! {
    #[test]
    fn encode_then_decode_restores_name(name in arb_readable_type()) {
        let sig = create_type_signature(&name, true).unwrap();
        prop_assert!(sig.parse::<TypeSignature>().is_ok());
        prop_assert_eq!(decode(&sig).unwrap().replace(',', ", "), name);
    }

    #[test]
    fn unresolved_encoding_renders_verbatim(name in arb_readable_class()) {
        let sig = create_type_signature(&name, false).unwrap();
        prop_assert_eq!(decode_simple(&sig).unwrap(), name);
    }
}
