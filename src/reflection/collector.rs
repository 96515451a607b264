//! Collection of accessor-eligible methods across a type hierarchy.
//!
//! The walk starts at the leaf type and moves up through each base type. At every level
//! the level's own declarations come first, then the declarations of the interfaces
//! implemented at that level (including their super-interfaces). Bridge methods are
//! skipped. The first declaration of a signature wins; since the leaf is visited first,
//! an override always occupies the slot before the overridden declaration is seen.

use std::collections::HashSet;

use log::trace;

use crate::metadata::{
    access::AccessPolicy,
    method::{MethodList, MethodRc},
    typesystem::TypeDescriptor,
};

/// A collected method together with its usability under the access policy
#[derive(Debug, Clone)]
pub(crate) struct CollectedMethod {
    /// The most-derived declaration of this signature
    pub method: MethodRc,
    /// Whether the method may be invoked under the policy
    pub accessible: bool,
}

/// Collects methods with at most one entry per signature
pub(crate) struct UniqueMethodCollector {
    policy: AccessPolicy,
    signatures: HashSet<String>,
    methods: Vec<CollectedMethod>,
}

impl UniqueMethodCollector {
    pub(crate) fn new(policy: AccessPolicy) -> Self {
        UniqueMethodCollector {
            policy,
            signatures: HashSet::new(),
            methods: Vec::new(),
        }
    }

    /// Walk the hierarchy of `ty` and return the unique methods in discovery order
    pub(crate) fn collect(mut self, ty: &TypeDescriptor) -> Vec<CollectedMethod> {
        for level in ty.hierarchy() {
            self.add_unique(&level.methods);

            let mut visited = HashSet::new();
            for interface in &level.interfaces {
                self.add_interface(interface, &mut visited);
            }
        }

        self.methods
    }

    fn add_interface(&mut self, interface: &TypeDescriptor, visited: &mut HashSet<u32>) {
        if !visited.insert(interface.token.value()) {
            return;
        }

        self.add_unique(&interface.methods);
        for parent in &interface.interfaces {
            self.add_interface(parent, visited);
        }
    }

    fn add_unique(&mut self, methods: &MethodList) {
        for method in methods {
            if method.is_bridge() {
                continue;
            }

            let signature = method.signature();
            if self.signatures.contains(&signature) {
                trace!(
                    "'{}' of '{}' is overridden, skipping",
                    signature,
                    method.declaring_type
                );
                continue;
            }

            self.signatures.insert(signature);
            self.methods.push(CollectedMethod {
                method: method.clone(),
                accessible: self.policy.permits(method.visibility),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        access::Visibility,
        method::{MethodBody, MethodModifiers},
        typesystem::{PrimitiveKind, TypeBuilder},
    };

    struct Holder;

    fn names(methods: &[CollectedMethod]) -> Vec<(&str, &str)> {
        methods
            .iter()
            .map(|m| (m.method.name.as_str(), m.method.declaring_type.as_str()))
            .collect()
    }

    #[test]
    fn test_override_prefers_leaf() {
        let string = PrimitiveKind::String.descriptor();
        let base = TypeBuilder::class("demo", "Base")
            .getter("getName", &string, |_: &Holder| String::new())
            .getter("getId", &string, |_: &Holder| String::new())
            .build()
            .unwrap();
        let leaf = TypeBuilder::class("demo", "Leaf")
            .extends(&base)
            .getter("getName", &string, |_: &Holder| String::new())
            .build()
            .unwrap();

        let methods = UniqueMethodCollector::new(AccessPolicy::Unrestricted).collect(&leaf);
        assert_eq!(
            names(&methods),
            [("getName", "demo.Leaf"), ("getId", "demo.Base")]
        );
    }

    #[test]
    fn test_bridge_skipped_and_covariant_kept() {
        let collection = TypeBuilder::interface("util", "Collection").build().unwrap();
        let array_list = TypeBuilder::class("util", "ArrayList")
            .implements(&collection)
            .build()
            .unwrap();

        let base = TypeBuilder::class("demo", "Base")
            .getter("getItems", &collection, |_: &Holder| 0)
            .build()
            .unwrap();
        let leaf = TypeBuilder::class("demo", "Leaf")
            .extends(&base)
            .getter("getItems", &array_list, |_: &Holder| 0)
            .method(
                "getItems",
                Some(&collection),
                &[],
                Visibility::Public,
                MethodModifiers::BRIDGE | MethodModifiers::SYNTHETIC,
                MethodBody::Opaque,
            )
            .build()
            .unwrap();

        let methods = UniqueMethodCollector::new(AccessPolicy::Unrestricted).collect(&leaf);
        assert_eq!(
            names(&methods),
            [("getItems", "demo.Leaf"), ("getItems", "demo.Base")]
        );
        assert!(methods.iter().all(|m| !m.method.is_bridge()));
    }

    #[test]
    fn test_interfaces_per_level() {
        let string = PrimitiveKind::String.descriptor();
        let named = TypeBuilder::interface("demo", "Named")
            .abstract_method("getName", Some(&string), &[])
            .build()
            .unwrap();
        let titled = TypeBuilder::interface("demo", "Titled")
            .implements(&named)
            .abstract_method("getTitle", Some(&string), &[])
            .build()
            .unwrap();
        let base = TypeBuilder::class("demo", "Base")
            .implements(&titled)
            .build()
            .unwrap();
        let leaf = TypeBuilder::class("demo", "Leaf")
            .extends(&base)
            .getter("getName", &string, |_: &Holder| String::new())
            .build()
            .unwrap();

        let methods = UniqueMethodCollector::new(AccessPolicy::Unrestricted).collect(&leaf);
        assert_eq!(
            names(&methods),
            [("getName", "demo.Leaf"), ("getTitle", "demo.Titled")]
        );
    }

    #[test]
    fn test_policy_marks_accessibility() {
        let string = PrimitiveKind::String.descriptor();
        let ty = TypeBuilder::class("demo", "Hidden")
            .method(
                "getSecret",
                Some(&string),
                &[],
                Visibility::Private,
                MethodModifiers::empty(),
                MethodBody::Opaque,
            )
            .build()
            .unwrap();

        let open = UniqueMethodCollector::new(AccessPolicy::Unrestricted).collect(&ty);
        assert!(open[0].accessible);

        let closed = UniqueMethodCollector::new(AccessPolicy::PublicOnly).collect(&ty);
        assert_eq!(closed.len(), 1);
        assert!(!closed[0].accessible);
    }
}
