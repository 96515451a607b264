//! The per-type property table.
//!
//! A [`PropertyTable`] is the immutable result of resolving one type: which properties
//! can be read, which can be written, through which [`Invoker`], with which declared
//! type, plus a case-insensitive name index and the default constructor (if usable).

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

use log::trace;

use crate::{
    metadata::{
        access::AccessPolicy,
        field::FieldRc,
        method::ConstructorRc,
        typesystem::TypeRc,
        value::Value,
    },
    reflection::{
        classifier::classify,
        collector::{CollectedMethod, UniqueMethodCollector},
        fields::add_fields,
        invoker::{FieldInvoker, Invoker, MethodInvoker},
        resolver::{resolve_getters, resolve_setters},
        AccessorKind,
    },
    Error, Result,
};

/// Name of the serialization version marker field
const SERIAL_VERSION_UID: &str = "serialVersionUID";
/// Name denoting the type token of an instance
const CLASS_PROPERTY: &str = "class";
/// Prefix of compiler generated member names
const SYNTHETIC_MARKER: char = '$';

/// Returns true if `name` may be used as a property name
pub(crate) fn is_valid_property_name(name: &str) -> bool {
    !(name.starts_with(SYNTHETIC_MARKER) || name == SERIAL_VERSION_UID || name == CLASS_PROPERTY)
}

/// Accessor maps under construction
#[derive(Default)]
pub(crate) struct PropertyMaps {
    pub get_methods: BTreeMap<String, Invoker>,
    pub set_methods: BTreeMap<String, Invoker>,
    pub get_types: BTreeMap<String, TypeRc>,
    pub set_types: BTreeMap<String, TypeRc>,
}

impl PropertyMaps {
    pub(crate) fn add_get_method(&mut self, name: String, getter: CollectedMethod, value_type: TypeRc) {
        if !is_valid_property_name(&name) {
            trace!("Rejecting reserved property name '{}'", name);
            return;
        }

        let invoker = MethodInvoker::new(getter.method, value_type.clone(), getter.accessible);
        self.get_methods.insert(name.clone(), Invoker::Method(invoker));
        self.get_types.insert(name, value_type);
    }

    pub(crate) fn add_set_method(&mut self, name: String, setter: CollectedMethod) {
        if !is_valid_property_name(&name) {
            trace!("Rejecting reserved property name '{}'", name);
            return;
        }

        let value_type = setter.method.params[0].clone();
        let invoker = MethodInvoker::new(setter.method, value_type.clone(), setter.accessible);
        self.set_methods.insert(name.clone(), Invoker::Method(invoker));
        self.set_types.insert(name, value_type);
    }

    pub(crate) fn add_get_field(&mut self, field: &FieldRc) {
        if !is_valid_property_name(&field.name) {
            trace!("Rejecting reserved field name '{}'", field.name);
            return;
        }

        self.get_methods
            .insert(field.name.clone(), Invoker::Field(FieldInvoker::new(field.clone())));
        self.get_types
            .insert(field.name.clone(), field.field_type.clone());
    }

    pub(crate) fn add_set_field(&mut self, field: &FieldRc) {
        if !is_valid_property_name(&field.name) {
            trace!("Rejecting reserved field name '{}'", field.name);
            return;
        }

        self.set_methods
            .insert(field.name.clone(), Invoker::Field(FieldInvoker::new(field.clone())));
        self.set_types
            .insert(field.name.clone(), field.field_type.clone());
    }
}

/// Resolved property metadata of a single type.
///
/// Built once by the [`crate::PropertyMetadataCache`] and never mutated afterwards.
/// Readable names are exactly the keys of the getter map, writable names exactly the
/// keys of the setter map; both are sorted.
pub struct PropertyTable {
    ty: TypeRc,
    readable_names: Vec<String>,
    writable_names: Vec<String>,
    get_methods: BTreeMap<String, Invoker>,
    set_methods: BTreeMap<String, Invoker>,
    get_types: BTreeMap<String, TypeRc>,
    set_types: BTreeMap<String, TypeRc>,
    case_insensitive: HashMap<String, String>,
    default_constructor: Option<ConstructorRc>,
}

impl PropertyTable {
    /// Resolve the properties of `ty`
    ///
    /// # Errors
    /// Returns [`crate::Error::AmbiguousAccessor`] if competing accessor declarations of a
    /// property cannot be ordered.
    pub(crate) fn build(ty: &TypeRc, policy: AccessPolicy) -> Result<Self> {
        let type_name = ty.fullname();
        let mut maps = PropertyMaps::default();

        let methods = UniqueMethodCollector::new(policy).collect(ty);
        let candidates = classify(methods)?;
        resolve_getters(&type_name, candidates.getters, &mut maps)?;
        resolve_setters(&type_name, candidates.setters, &mut maps)?;
        add_fields(ty, policy, &mut maps);

        let default_constructor = ty
            .constructors
            .iter()
            .find(|ctor| ctor.is_default() && policy.permits(ctor.visibility))
            .cloned();

        let readable_names: Vec<String> = maps.get_methods.keys().cloned().collect();
        let writable_names: Vec<String> = maps.set_methods.keys().cloned().collect();

        let mut case_insensitive = HashMap::new();
        for name in readable_names.iter().chain(writable_names.iter()) {
            case_insensitive.insert(name.to_uppercase(), name.clone());
        }

        Ok(PropertyTable {
            ty: ty.clone(),
            readable_names,
            writable_names,
            get_methods: maps.get_methods,
            set_methods: maps.set_methods,
            get_types: maps.get_types,
            set_types: maps.set_types,
            case_insensitive,
            default_constructor,
        })
    }

    fn missing(&self, kind: AccessorKind, property: &str) -> Error {
        Error::MissingAccessor {
            kind,
            property: property.to_string(),
            type_name: self.ty.fullname(),
        }
    }

    /// The type this table describes
    #[must_use]
    pub fn type_descriptor(&self) -> &TypeRc {
        &self.ty
    }

    /// Get the invoker reading `property`
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingAccessor`] if the property is not readable.
    pub fn get_getter(&self, property: &str) -> Result<&Invoker> {
        self.get_methods
            .get(property)
            .ok_or_else(|| self.missing(AccessorKind::Getter, property))
    }

    /// Get the invoker writing `property`
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingAccessor`] if the property is not writable.
    pub fn get_setter(&self, property: &str) -> Result<&Invoker> {
        self.set_methods
            .get(property)
            .ok_or_else(|| self.missing(AccessorKind::Setter, property))
    }

    /// Get the declared type returned by the getter of `property`
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingAccessor`] if the property is not readable.
    pub fn get_getter_type(&self, property: &str) -> Result<&TypeRc> {
        self.get_types
            .get(property)
            .ok_or_else(|| self.missing(AccessorKind::Getter, property))
    }

    /// Get the declared type accepted by the setter of `property`
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingAccessor`] if the property is not writable.
    pub fn get_setter_type(&self, property: &str) -> Result<&TypeRc> {
        self.set_types
            .get(property)
            .ok_or_else(|| self.missing(AccessorKind::Setter, property))
    }

    /// Names of all readable properties, sorted
    #[must_use]
    pub fn readable_names(&self) -> &[String] {
        &self.readable_names
    }

    /// Names of all writable properties, sorted
    #[must_use]
    pub fn writable_names(&self) -> &[String] {
        &self.writable_names
    }

    /// Returns true if `property` is readable
    #[must_use]
    pub fn has_getter(&self, property: &str) -> bool {
        self.get_methods.contains_key(property)
    }

    /// Returns true if `property` is writable
    #[must_use]
    pub fn has_setter(&self, property: &str) -> bool {
        self.set_methods.contains_key(property)
    }

    /// Find the canonical spelling of a property name, ignoring case
    #[must_use]
    pub fn find_property_name(&self, name: &str) -> Option<&str> {
        self.case_insensitive
            .get(&name.to_uppercase())
            .map(String::as_str)
    }

    /// Get the usable zero-argument constructor
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingDefaultConstructor`] if the type has none.
    pub fn default_constructor(&self) -> Result<&ConstructorRc> {
        self.default_constructor
            .as_ref()
            .ok_or_else(|| Error::MissingDefaultConstructor(self.ty.fullname()))
    }

    /// Returns true if the type has a usable zero-argument constructor
    #[must_use]
    pub fn has_default_constructor(&self) -> bool {
        self.default_constructor.is_some()
    }

    /// Create a new instance through the default constructor
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingDefaultConstructor`] if the type has no usable
    /// zero-argument constructor, or [`crate::Error::TargetError`] if the constructor
    /// cannot be invoked.
    pub fn instantiate(&self) -> Result<Value> {
        let constructor = self.default_constructor()?;
        match &constructor.factory {
            Some(create) => create(),
            None => Err(target_error!(
                "Default constructor of '{}' cannot be invoked",
                self.ty.fullname()
            )),
        }
    }
}

fn same_types(a: &BTreeMap<String, TypeRc>, b: &BTreeMap<String, TypeRc>) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|((name_a, ty_a), (name_b, ty_b))| name_a == name_b && ty_a.token == ty_b.token)
}

impl PartialEq for PropertyTable {
    fn eq(&self, other: &Self) -> bool {
        self.ty.token == other.ty.token
            && self.readable_names == other.readable_names
            && self.writable_names == other.writable_names
            && self.get_methods == other.get_methods
            && self.set_methods == other.set_methods
            && same_types(&self.get_types, &other.get_types)
            && same_types(&self.set_types, &other.set_types)
            && self.case_insensitive == other.case_insensitive
            && match (&self.default_constructor, &other.default_constructor) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl fmt::Debug for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTable")
            .field("type", &self.ty.fullname())
            .field("readable", &self.readable_names)
            .field("writable", &self.writable_names)
            .field("default_constructor", &self.default_constructor.is_some())
            .finish()
    }
}
