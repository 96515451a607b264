//! Conflict resolution between competing accessor candidates.
//!
//! Getters: a candidate whose return type is a supertype of the current choice loses,
//! a candidate whose return type is a subtype replaces it. Equal or unrelated return
//! types are ambiguous.
//!
//! Setters: a lone candidate always wins. With several, the one whose parameter type
//! equals the resolved getter type wins; without a getter or a match the property is
//! ambiguous.

use log::{trace, warn};

use crate::{
    metadata::{
        method::Method,
        typesystem::{PrimitiveKind, TypeRc},
    },
    reflection::{classifier::CandidateMap, table::PropertyMaps, AccessorKind},
    Error, Result,
};

fn ambiguous(kind: AccessorKind, property: &str, type_name: &str) -> Error {
    warn!(
        "Ambiguous {} declarations for property '{}' in '{}'",
        kind, property, type_name
    );

    Error::AmbiguousAccessor {
        kind,
        property: property.to_string(),
        type_name: type_name.to_string(),
    }
}

fn return_type(method: &Method) -> TypeRc {
    method
        .return_type
        .clone()
        .unwrap_or_else(|| PrimitiveKind::Void.descriptor())
}

/// Pick one getter per property and record it
pub(crate) fn resolve_getters(
    type_name: &str,
    getters: CandidateMap,
    maps: &mut PropertyMaps,
) -> Result<()> {
    for (property, candidates) in getters {
        let mut candidates = candidates.into_iter();
        let Some(mut winner) = candidates.next() else {
            continue;
        };
        let mut winner_type = return_type(&winner.method);

        for candidate in candidates {
            let candidate_type = return_type(&candidate.method);

            if candidate_type.token == winner_type.token {
                return Err(ambiguous(AccessorKind::Getter, &property, type_name));
            } else if candidate_type.is_assignable_from(&winner_type) {
                trace!(
                    "'{}' keeps '{}' over supertype '{}'",
                    property,
                    winner_type,
                    candidate_type
                );
            } else if winner_type.is_assignable_from(&candidate_type) {
                trace!(
                    "'{}' narrows from '{}' to '{}'",
                    property,
                    winner_type,
                    candidate_type
                );
                winner = candidate;
                winner_type = candidate_type;
            } else {
                return Err(ambiguous(AccessorKind::Getter, &property, type_name));
            }
        }

        maps.add_get_method(property, winner, winner_type);
    }

    Ok(())
}

/// Pick one setter per property and record it, getters must already be resolved
pub(crate) fn resolve_setters(
    type_name: &str,
    setters: CandidateMap,
    maps: &mut PropertyMaps,
) -> Result<()> {
    for (property, mut candidates) in setters {
        if candidates.len() == 1 {
            let setter = candidates.remove(0);
            maps.add_set_method(property, setter);
            continue;
        }

        let Some(expected) = maps.get_types.get(&property).cloned() else {
            return Err(ambiguous(AccessorKind::Setter, &property, type_name));
        };

        let Some(position) = candidates
            .iter()
            .position(|c| c.method.params[0].token == expected.token)
        else {
            return Err(ambiguous(AccessorKind::Setter, &property, type_name));
        };

        let setter = candidates.swap_remove(position);
        maps.add_set_method(property, setter);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{access::AccessPolicy, typesystem::TypeBuilder},
        reflection::{classifier::classify, collector::UniqueMethodCollector},
        test::{create_covariant_types, Holder},
    };

    fn resolve(ty: &TypeRc) -> Result<PropertyMaps> {
        let methods = UniqueMethodCollector::new(AccessPolicy::Unrestricted).collect(ty);
        let candidates = classify(methods)?;
        let mut maps = PropertyMaps::default();
        resolve_getters(&ty.fullname(), candidates.getters, &mut maps)?;
        resolve_setters(&ty.fullname(), candidates.setters, &mut maps)?;
        Ok(maps)
    }

    #[test]
    fn test_covariant_getter_prefers_subtype() {
        let types = create_covariant_types();
        let maps = resolve(&types.derived).unwrap();

        assert_eq!(maps.get_types["items"].fullname(), "util.ArrayList");
        assert_eq!(
            maps.get_methods["items"].member_name(),
            "getItems"
        );
    }

    #[test]
    fn test_covariant_getter_keeps_subtype_declared_first() {
        let types = create_covariant_types();
        let maps = resolve(&types.derived).unwrap();

        // Leaf declaration is seen first and is the narrower one
        match &maps.get_methods["items"] {
            crate::reflection::Invoker::Method(invoker) => {
                assert_eq!(invoker.method().declaring_type, "demo.Derived");
            }
            other => panic!("unexpected invoker: {other:?}"),
        }
    }

    #[test]
    fn test_unrelated_getters_are_ambiguous() {
        let string = PrimitiveKind::String.descriptor();
        let int = PrimitiveKind::Int.descriptor();
        let base = TypeBuilder::class("demo", "Base")
            .getter("getValue", &string, |_: &Holder| String::new())
            .build()
            .unwrap();
        let leaf = TypeBuilder::class("demo", "Leaf")
            .extends(&base)
            .getter("getValue", &int, |_: &Holder| 0)
            .build()
            .unwrap();

        match resolve(&leaf) {
            Err(Error::AmbiguousAccessor {
                kind,
                property,
                type_name,
            }) => {
                assert_eq!(kind, AccessorKind::Getter);
                assert_eq!(property, "value");
                assert_eq!(type_name, "demo.Leaf");
            }
            other => panic!("unexpected result: {:?}", other.map(|m| m.get_types.len())),
        }
    }

    #[test]
    fn test_is_and_get_with_same_type_are_ambiguous() {
        let boolean = PrimitiveKind::Boolean.descriptor();
        let ty = TypeBuilder::class("demo", "Flag")
            .getter("isOn", &boolean, |_: &Holder| true)
            .getter("getOn", &boolean, |_: &Holder| true)
            .build()
            .unwrap();

        assert!(matches!(
            resolve(&ty),
            Err(Error::AmbiguousAccessor {
                kind: AccessorKind::Getter,
                ..
            })
        ));
    }

    #[test]
    fn test_overloaded_setter_matches_getter_type() {
        let string = PrimitiveKind::String.descriptor();
        let int = PrimitiveKind::Int.descriptor();
        let ty = TypeBuilder::class("demo", "Code")
            .getter("getCode", &string, |_: &Holder| String::new())
            .setter("setCode", &int, |_: &mut Holder, _: i32| {})
            .setter("setCode", &string, |_: &mut Holder, _: String| {})
            .build()
            .unwrap();

        let maps = resolve(&ty).unwrap();
        assert_eq!(maps.set_types["code"].fullname(), "lang.String");
    }

    #[test]
    fn test_overloaded_setter_without_getter_is_ambiguous() {
        let string = PrimitiveKind::String.descriptor();
        let int = PrimitiveKind::Int.descriptor();
        let ty = TypeBuilder::class("demo", "Code")
            .setter("setCode", &int, |_: &mut Holder, _: i32| {})
            .setter("setCode", &string, |_: &mut Holder, _: String| {})
            .build()
            .unwrap();

        assert!(matches!(
            resolve(&ty),
            Err(Error::AmbiguousAccessor {
                kind: AccessorKind::Setter,
                ..
            })
        ));
    }

    #[test]
    fn test_overloaded_setter_without_match_is_ambiguous() {
        let string = PrimitiveKind::String.descriptor();
        let int = PrimitiveKind::Int.descriptor();
        let long = PrimitiveKind::Long.descriptor();
        let ty = TypeBuilder::class("demo", "Code")
            .getter("getCode", &string, |_: &Holder| String::new())
            .setter("setCode", &int, |_: &mut Holder, _: i32| {})
            .setter("setCode", &long, |_: &mut Holder, _: i64| {})
            .build()
            .unwrap();

        assert!(matches!(
            resolve(&ty),
            Err(Error::AmbiguousAccessor {
                kind: AccessorKind::Setter,
                ..
            })
        ));
    }

    #[test]
    fn test_single_setter_ignores_getter_type() {
        let string = PrimitiveKind::String.descriptor();
        let int = PrimitiveKind::Int.descriptor();
        let ty = TypeBuilder::class("demo", "Code")
            .getter("getCode", &string, |_: &Holder| String::new())
            .setter("setCode", &int, |_: &mut Holder, _: i32| {})
            .build()
            .unwrap();

        let maps = resolve(&ty).unwrap();
        assert_eq!(maps.get_types["code"].fullname(), "lang.String");
        assert_eq!(maps.set_types["code"].fullname(), "lang.Int");
    }

    #[test]
    fn test_reserved_names_dropped() {
        let string = PrimitiveKind::String.descriptor();
        let ty = TypeBuilder::class("demo", "Object")
            .getter("getClass", &string, |_: &Holder| String::new())
            .getter("getName", &string, |_: &Holder| String::new())
            .build()
            .unwrap();

        let maps = resolve(&ty).unwrap();
        assert!(!maps.get_methods.contains_key("class"));
        assert!(maps.get_methods.contains_key("name"));
    }
}
