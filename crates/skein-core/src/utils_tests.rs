use crate::utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, words};

#[test]
fn words_split_on_separators_and_humps() {
    assert_eq!(words("fooBar-baz.qux"), vec!["foo", "bar", "baz", "qux"]);
    assert_eq!(words("__leading"), vec!["leading"]);
    assert!(words("").is_empty());
}

#[test]
fn acronyms_stay_one_word() {
    assert_eq!(words("HTTPClient"), vec!["httpclient"]);
}

#[test]
fn pascal_case() {
    assert_eq!(to_pascal_case("foo_bar"), "FooBar");
    assert_eq!(to_pascal_case("FooBar"), "FooBar");
    assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
}

#[test]
fn camel_case() {
    assert_eq!(to_camel_case("foo_bar"), "fooBar");
    assert_eq!(to_camel_case("FooBar"), "fooBar");
}

#[test]
fn snake_and_kebab_case() {
    assert_eq!(to_snake_case("fooBar"), "foo_bar");
    assert_eq!(to_snake_case("models/Pet"), "models_pet");
    assert_eq!(to_kebab_case("fooBar"), "foo-bar");
}
