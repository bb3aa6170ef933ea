use std::collections::BTreeMap;

use collection_json::{data, Collection, Error, Item, Link, Property, Template, Value};
use url::Url;

fn url(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

// ============================================================================
// Value
// ============================================================================

#[test]
fn value_accessors_match_the_stored_variant() {
    let value = Value::from("J. Doe");
    assert_eq!("J. Doe", value.as_string().unwrap());
    assert!(value.is_string());
    assert!(!value.is_number());
}

#[test]
fn value_accessor_mismatch_names_both_variants() {
    let err = Value::from("text").as_number().unwrap_err();
    match err {
        Error::TypeMismatch { expected, actual } => {
            assert_eq!("number", expected);
            assert_eq!("string", actual);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn null_and_composite_nodes_yield_no_value() {
    assert_eq!(None, Value::from_node(None));
    assert_eq!(None, Value::from_node(Some(&serde_json::Value::Null)));
    assert_eq!(None, Value::from_node(Some(&serde_json::json!([1, 2]))));
    assert_eq!(None, Value::from_node(Some(&serde_json::json!({"a": 1}))));
    assert_eq!(
        Some(Value::from(true)),
        Value::from_node(Some(&serde_json::Value::Bool(true)))
    );
}

// ============================================================================
// Property payload shapes
// ============================================================================

#[test]
fn scalar_property_holds_no_other_shape() {
    let property = Property::with_value("age", None, Some(Value::from(30)));
    assert!(!property.is_array());
    assert!(!property.is_object());
    assert!(property.values().is_empty());
    assert!(property.object().is_empty());
    assert_eq!(Some(&Value::from(30)), property.value());
}

#[test]
fn array_property_holds_no_other_shape() {
    let property = Property::with_array("tags", None, vec![Value::from("a"), Value::from("b")]);
    assert!(property.is_array());
    assert!(!property.is_object());
    assert!(property.value().is_none());
    assert_eq!(2, property.values().len());
}

#[test]
fn object_property_holds_no_other_shape() {
    let object = BTreeMap::from([("foo".to_string(), Value::from("bar"))]);
    let property = Property::with_object("complex", None, object);
    assert!(property.is_object());
    assert!(!property.is_array());
    assert!(property.value().is_none());
    assert_eq!(Some(&Value::from("bar")), property.object().get("foo"));
}

#[test]
fn absent_scalar_is_not_a_null() {
    let property = Property::with_value("email", Some("Email".to_string()), None);
    assert!(property.value().is_none());
    assert!(!property.is_array());
    assert!(!property.is_object());
}

// Duplicate names resolve last-write-wins, pinned here on purpose.
#[test]
fn name_projection_is_last_write_wins() {
    let properties = [
        Property::with_value("a", None, Some(Value::from(1))),
        Property::with_value("a", None, Some(Value::from(2))),
    ];
    let map = data::by_name(&properties);
    assert_eq!(1, map.len());
    assert_eq!(Some(&Value::from(2)), map["a"].value());
}

#[test]
fn find_property_returns_the_first_match_in_list_order() {
    let properties = [
        Property::with_value("a", None, Some(Value::from(1))),
        Property::with_value("b", None, Some(Value::from(2))),
        Property::with_value("b", None, Some(Value::from(3))),
    ];
    let found = data::find_property(&properties, |p| p.name() == "b").unwrap();
    assert_eq!(Some(&Value::from(2)), found.value());
}

// ============================================================================
// Item
// ============================================================================

fn jdoe() -> Item {
    Item::builder()
        .href(url("http://example.org/friends/jdoe"))
        .property(Property::with_value(
            "full-name",
            None,
            Some(Value::from("J. Doe")),
        ))
        .property(Property::with_value(
            "email",
            None,
            Some(Value::from("jdoe@example.org")),
        ))
        .link(Link::new(url("http://examples.org/blogs/jdoe"), "blog").with_name("jdoe-blog"))
        .link(Link::new(url("http://examples.org/avatars/jdoe"), "avatar"))
        .build()
}

#[test]
fn to_template_copies_all_properties_in_order() {
    let template = jdoe().to_template();
    let names: Vec<&str> = template.data().iter().map(|p| p.name()).collect();
    assert_eq!(vec!["full-name", "email"], names);
}

#[test]
fn fill_template_resolves_names_in_template_order() {
    let wanted = Template::new(vec![
        Property::with_value("email", None, None),
        Property::with_value("full-name", None, None),
    ]);
    let filled = jdoe().fill_template(&wanted).unwrap();
    let names: Vec<&str> = filled.data().iter().map(|p| p.name()).collect();
    assert_eq!(vec!["email", "full-name"], names);
    assert_eq!(
        "jdoe@example.org",
        filled.data()[0].value().unwrap().as_string().unwrap()
    );
}

#[test]
fn fill_template_lists_every_missing_name() {
    let wanted = Template::new(vec![
        Property::with_value("nickname", None, None),
        Property::with_value("full-name", None, None),
        Property::with_value("twitter", None, None),
    ]);
    let err = jdoe().fill_template(&wanted).unwrap_err();
    match err {
        Error::MissingTemplateData { missing } => {
            assert_eq!(vec!["nickname".to_string(), "twitter".to_string()], missing);
        }
        other => panic!("expected MissingTemplateData, got {other:?}"),
    }
}

#[test]
fn link_lookup_by_rel() {
    let item = jdoe();
    assert_eq!(
        "http://examples.org/blogs/jdoe",
        item.link_by_rel("blog").unwrap().href().as_str()
    );
    assert!(item.link_by_rel("missing").is_none());
}

#[test]
fn link_lookup_by_name_matches_nameless_links_on_none() {
    let item = jdoe();
    let nameless = item.link_by_name(None).unwrap();
    assert_eq!("avatar", nameless.rel());
    assert_eq!("blog", item.link_by_name(Some("jdoe-blog")).unwrap().rel());
    assert!(item.link_by_name(Some("nope")).is_none());
}

#[test]
fn nameless_link_does_not_match_a_named_lookup() {
    let item = Item::builder()
        .link(Link::new(url("http://example.org/x"), "self"))
        .build();
    assert!(item.link_by_name(Some("x")).is_none());
    assert!(item.link_by_name(None).is_some());
}

#[test]
fn link_lookup_by_rel_and_name_is_a_conjunction() {
    let item = jdoe();
    assert!(item
        .link_by_rel_and_name("blog", Some("jdoe-blog"))
        .is_some());
    assert!(item.link_by_rel_and_name("blog", None).is_none());
    assert!(item.link_by_rel_and_name("avatar", None).is_some());
}

#[test]
fn find_links_keeps_list_order() {
    let item = jdoe();
    let all = item.find_links(|_| true);
    assert_eq!(2, all.len());
    assert_eq!("blog", all[0].rel());
}

#[test]
fn to_collection_wraps_the_item_under_its_own_address() {
    let item = jdoe();
    let collection = item.to_collection();
    assert_eq!("1.0", collection.version());
    assert_eq!(item.href(), collection.href());
    assert_eq!(1, collection.items().len());
    assert_eq!(&item, collection.first_item().unwrap());
}

// ============================================================================
// Collection
// ============================================================================

#[test]
fn built_collections_carry_an_explicit_version() {
    let collection = Collection::builder().build();
    assert_eq!("1.0", collection.version());
    assert!(collection.first_item().is_none());
}

#[test]
fn builder_keeps_at_most_one_template() {
    let first = Template::new(vec![Property::with_value("a", None, None)]);
    let second = Template::new(vec![Property::with_value("b", None, None)]);
    let collection = Collection::builder().template(first).template(second).build();
    assert_eq!("b", collection.template().unwrap().data()[0].name());
}

#[test]
fn with_extension_leaves_the_original_untouched() {
    let plain = Collection::builder().build();
    let extended = plain
        .clone()
        .with_extension("rating", serde_json::json!(5));
    assert!(plain.extension("rating").is_none());
    assert_eq!(Some(&serde_json::json!(5)), extended.extension("rating"));
}
