use super::*;
use pretty_assertions::assert_eq;

#[allow(dead_code, reason = "only named, never built")]
struct Local;

#[test]
fn test_current_environment() {
    assert_eq!(Environment::CURRENT, Environment::Rustc);
    assert_eq!(Environment::CURRENT.framing(), Some(RUSTC_FRAMING));
    assert_eq!(Environment::Device.framing(), None);
    assert_eq!(Environment::Rustc.to_string(), "rustc");
    assert_eq!(Environment::Device.to_string(), "device");
}

#[test]
fn test_rustc_framing() {
    assert_eq!(
        RUSTC_FRAMING.prefix(),
        "ori_type_index::signature::raw_signature<"
    );
    assert_eq!(RUSTC_FRAMING.suffix(), ">");
}

#[test]
fn test_raw_signature_is_framed() {
    let raw = raw_signature::<u64>();
    assert!(raw.starts_with(RUSTC_FRAMING.prefix()), "{raw}");
    assert!(raw.ends_with(RUSTC_FRAMING.suffix()), "{raw}");
}

#[test]
fn test_canonical_name_primitives() {
    assert_eq!(canonical_name::<i32>(), "i32");
    assert_eq!(canonical_name::<str>(), "str");
    assert_eq!(canonical_name::<[u8]>(), "[u8]");
    assert_eq!(canonical_name::<()>(), "()");
}

#[test]
fn test_canonical_name_is_fully_qualified() {
    assert_eq!(
        canonical_name::<Local>(),
        "ori_type_index::signature::tests::Local"
    );
    assert_eq!(
        canonical_name::<Option<Local>>(),
        "core::option::Option<ori_type_index::signature::tests::Local>"
    );
}

#[test]
fn test_canonical_name_keeps_references() {
    assert_eq!(canonical_name::<&i32>(), "&i32");
    assert_eq!(canonical_name::<&mut i32>(), "&mut i32");
}

#[test]
fn test_framing_extract_in_const() {
    const FRAMING: SignatureFraming = SignatureFraming::new("sample<", ">");
    const NAME: &str = FRAMING.extract("sample<N::Foo<int>>");
    assert_eq!(NAME, "N::Foo<int>");
}

#[test]
fn test_framing_resolve() {
    let framing = SignatureFraming::new("sample<", ">");
    assert_eq!(framing.resolve("sample<N::Foo<int>>"), "N::Foo<int>");
}

#[test]
fn test_strip_references() {
    assert_eq!(strip_references("Foo"), "Foo");
    assert_eq!(strip_references("&Foo"), "Foo");
    assert_eq!(strip_references("&mut Foo"), "Foo");
    assert_eq!(strip_references("&&mut &Foo"), "Foo");
    assert_eq!(strip_references("&[u8]"), "[u8]");
    assert_eq!(strip_references("&dyn core::any::Any"), "dyn core::any::Any");
}

#[test]
fn test_strip_references_top_level_only() {
    assert_eq!(strip_references("Option<&Foo>"), "Option<&Foo>");
    assert_eq!(strip_references("*const Foo"), "*const Foo");
    assert_eq!(strip_references("(&Foo, &Bar)"), "(&Foo, &Bar)");
    // Only the keyword and its trailing space are stripped
    assert_eq!(strip_references("&mutable::Foo"), "mutable::Foo");
}

#[test]
fn test_strip_references_keeps_nested_lifetimes() {
    assert_eq!(strip_references("fn(&'_ u8)"), "fn(&'_ u8)");
    assert_eq!(strip_references("&fn(&'_ u8)"), "fn(&'_ u8)");
    assert_eq!(
        strip_references("&alloc::boxed::Box<dyn for<'a> core::ops::function::Fn(&'a u8)>"),
        "alloc::boxed::Box<dyn for<'a> core::ops::function::Fn(&'a u8)>"
    );
}

#[test]
fn test_strip_references_in_const() {
    const STRIPPED: &str = strip_references("&mut &Foo");
    assert_eq!(STRIPPED, "Foo");
}
