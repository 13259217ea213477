//! Property-based tests for type resolution and schema assembly.

use fnschema_core::{
    Callable, Collection, CompileOptions, JsonType, Parameter, ResolveOptions, SchemaError, TypeDescriptor,
    TypeRegistry, compile, resolver::json_type_of,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_primitive() -> impl Strategy<Value = (TypeDescriptor, &'static str)> {
    prop_oneof![
        Just((TypeDescriptor::Integer, "integer")),
        Just((TypeDescriptor::Float, "number")),
        Just((TypeDescriptor::String, "string")),
        Just((TypeDescriptor::Boolean, "boolean")),
        Just((TypeDescriptor::Null, "null")),
        Just((TypeDescriptor::NoneValue, "null")),
    ]
}

fn arb_collection() -> impl Strategy<Value = Collection> {
    prop_oneof![
        Just(Collection::List),
        Just(Collection::Tuple),
        Just(Collection::Set),
        Just(Collection::FrozenSet),
        Just(Collection::Deque),
        Just(Collection::Range),
    ]
}

fn arb_non_string_key() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        Just(TypeDescriptor::Integer),
        Just(TypeDescriptor::Float),
        Just(TypeDescriptor::Boolean),
        Just(TypeDescriptor::NoneValue),
    ]
}

fn arb_default() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<i64>().prop_map(|n| Some(json!(n))),
        any::<bool>().prop_map(|b| Some(json!(b))),
        "[a-z]{0,8}".prop_map(|s| Some(json!(s))),
    ]
}

fn resolve(ty: &TypeDescriptor) -> Result<Value, SchemaError> {
    TypeRegistry::new()
        .resolve(ty, ResolveOptions::default())
        .map(|s| s.to_value())
}

proptest! {
    /// Every primitive maps to its fixed JSON type, every time.
    #[test]
    fn prop_primitive_table((ty, name) in arb_primitive()) {
        let first = resolve(&ty).unwrap();
        prop_assert_eq!(&first, &json!({"type": name}));
        prop_assert_eq!(resolve(&ty).unwrap(), first);
        prop_assert!(json_type_of(&ty).is_some());
    }

    /// A typed sequence carries exactly its element's fragment as `items`.
    #[test]
    fn prop_sequence_items((ty, _) in arb_primitive()) {
        let element = resolve(&ty).unwrap();
        let list = resolve(&TypeDescriptor::list_of(ty)).unwrap();
        prop_assert_eq!(list, json!({"type": "array", "items": element}));
    }

    /// A bare collection depends only on whether bare generics are allowed.
    #[test]
    fn prop_bare_collection(collection in arb_collection(), allow in any::<bool>()) {
        let options = ResolveOptions { allow_bare_generic_types: allow };
        let result = TypeRegistry::new()
            .resolve(&TypeDescriptor::bare(collection), options)
            .map(|s| s.to_value());
        if allow {
            prop_assert_eq!(result, Ok(json!({"type": "array", "items": {}})));
        } else {
            prop_assert_eq!(result, Err(SchemaError::BareGenericType(collection.to_string())));
        }
    }

    /// String-keyed maps accept any value type as `additionalProperties`.
    #[test]
    fn prop_string_keyed_map((ty, _) in arb_primitive()) {
        let value = resolve(&ty).unwrap();
        let map = resolve(&TypeDescriptor::map_of(TypeDescriptor::String, ty)).unwrap();
        prop_assert_eq!(map, json!({"type": "object", "additionalProperties": value}));
    }

    /// Any other key type is rejected.
    #[test]
    fn prop_non_string_keys_rejected(key in arb_non_string_key(), (value, _) in arb_primitive()) {
        let result = resolve(&TypeDescriptor::map_of(key, value));
        prop_assert!(matches!(result, Err(SchemaError::UnsupportedType(_))));
    }

    /// A union of primitives lists one type per member, in order.
    #[test]
    fn prop_union_kind_list(members in prop::collection::vec(arb_primitive(), 1..6)) {
        let expected: Vec<&str> = members.iter().map(|(_, name)| *name).collect();
        let union = TypeDescriptor::union_of(members.into_iter().map(|(ty, _)| ty));
        prop_assert_eq!(resolve(&union).unwrap(), json!({"type": expected}));
    }

    /// `Optional[T]` always includes `null`.
    #[test]
    fn prop_optional_includes_null((ty, _) in arb_primitive()) {
        let schema = TypeRegistry::new()
            .resolve(&TypeDescriptor::optional(ty), ResolveOptions::default())
            .unwrap();
        let kind = schema.kind.unwrap();
        prop_assert_eq!(kind.types().len(), 2);
        prop_assert!(kind.types().contains(&JsonType::Null));
    }

    /// `required` is exactly the kept parameters that declare no default, in order.
    #[test]
    fn prop_required_set(
        specs in prop::collection::vec((arb_default(), any::<bool>(), arb_primitive()), 0..8)
    ) {
        let mut callable = Callable::new("f");
        let mut ignored = Vec::new();
        let mut expected = Vec::new();
        let mut defaults = Vec::new();

        for (i, (default, ignore, (ty, _))) in specs.into_iter().enumerate() {
            let name = format!("p{i}");
            let has_default = default.is_some();
            let param = match default {
                Some(value) => {
                    if !ignore && !value.is_null() {
                        defaults.push((name.clone(), value.clone()));
                    }
                    Parameter::new(&name, ty).with_default(value)
                }
                None => Parameter::new(&name, ty),
            };
            callable = callable.parameter(param);
            if ignore {
                ignored.push(name);
            } else if !has_default {
                expected.push(name);
            }
        }

        let options = CompileOptions::lenient().ignore(ignored.clone());
        let schema = compile(&TypeRegistry::new(), &callable, &options).unwrap();

        prop_assert_eq!(&schema.required, &expected);
        for name in &ignored {
            prop_assert!(!schema.parameters.contains_key(name));
        }
        for name in &schema.required {
            prop_assert!(schema.parameters.contains_key(name));
        }
        for (name, value) in &defaults {
            prop_assert!(!schema.required.contains(name));
            prop_assert_eq!(schema.parameters[name].default.as_ref(), Some(value));
        }
    }
}
