use static_variant::{static_variant, StaticVariant, VariantError, VariantOf};

#[static_variant]
#[derive(Debug, Clone)]
enum Sample {
    Number(i64),
    Text(String),
}

#[test]
fn default_holds_the_first_member() {
    let sample = Sample::default();
    assert_eq!(sample.which(), 0);
    assert_eq!(*sample.get::<i64>().unwrap(), 0);
}

#[test]
fn tags_follow_declaration_order() {
    assert_eq!(Sample::COUNT, 2);
    assert_eq!(<i64 as VariantOf<Sample>>::TAG, 0);
    assert_eq!(<String as VariantOf<Sample>>::TAG, 1);
    assert_eq!(Sample::from(5i64).which(), 0);
    assert_eq!(Sample::from("x".to_string()).which(), 1);
}

#[test]
fn get_succeeds_iff_the_tag_matches() {
    let mut sample = Sample::from(5i64);
    assert_eq!(*sample.get::<i64>().unwrap(), 5);
    assert_eq!(
        sample.get::<String>().unwrap_err(),
        VariantError::WrongType {
            container: "static_variant<i64,String>",
            expected: "String",
            tag: 0,
        }
    );

    sample = Sample::from("hello".to_string());
    assert_eq!(sample.get::<String>().unwrap(), "hello");
    assert!(sample.get::<i64>().is_err());

    *sample.get_mut::<String>().unwrap() = "patched".to_string();
    assert_eq!(sample.get::<String>().unwrap(), "patched");
    assert!(sample.get_mut::<i64>().is_err());
}

#[test]
fn set_which_retags_to_a_default_value() {
    let mut sample = Sample::from(7i64);
    sample.set_which(1).unwrap();
    assert_eq!(sample.which(), 1);
    assert_eq!(sample.get::<String>().unwrap(), "");

    sample.set_which(0).unwrap();
    assert_eq!(sample.which(), 0);
    assert_eq!(*sample.get::<i64>().unwrap(), 0);
}

#[test]
fn set_which_rejects_out_of_range_tags() {
    let mut sample = Sample::from(7i64);
    assert_eq!(
        sample.set_which(2).unwrap_err(),
        VariantError::InvalidTag {
            container: "static_variant<i64,String>",
            tag: 2,
            count: 2,
        }
    );
    // The instance stays usable after the rejection.
    assert!(sample.which() < Sample::COUNT);
}

#[test]
fn names_are_introspectable() {
    assert_eq!(Sample::NAME, "static_variant<i64,String>");
    assert_eq!(Sample::type_names(), ["i64", "String"]);
    assert_eq!(<String as VariantOf<Sample>>::NAME, "String");
    assert_eq!(Sample::name_of(0), Some("i64"));
    assert_eq!(Sample::name_of(9), None);
}
