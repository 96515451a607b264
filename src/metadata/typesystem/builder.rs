//! Builder for type descriptors.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for describing
//! classes and interfaces: their base type, implemented interfaces, methods, fields and
//! constructors. Member declarations are collected without checks; [`TypeBuilder::build`]
//! validates the whole description at once and freezes it into a [`TypeRc`].
//!
//! # Example
//!
//! ```rust
//! use propscope::metadata::{
//!     access::Visibility,
//!     field::FieldAttributes,
//!     typesystem::{PrimitiveKind, TypeBuilder},
//! };
//!
//! struct Account {
//!     id: i64,
//! }
//!
//! let long = PrimitiveKind::Long.descriptor();
//! let account = TypeBuilder::class("bank", "Account")
//!     .field(
//!         "id",
//!         &long,
//!         Visibility::Private,
//!         FieldAttributes::FINAL,
//!         |a: &Account| a.id,
//!         |a: &mut Account, v: i64| a.id = v,
//!     )
//!     .build()?;
//!
//! assert_eq!(account.fields.len(), 1);
//! # Ok::<(), propscope::Error>(())
//! ```

use std::{any::Any, sync::Arc};

use crate::{
    metadata::{
        access::Visibility,
        field::{Field, FieldAttributes},
        method::{Constructor, Method, MethodBody, MethodModifiers},
        token::Token,
        typesystem::{TypeDescriptor, TypeFlavor, TypeRc},
        value::{factory, reader, writer, FactoryFn, ReadFn, WriteFn},
    },
    Error::TypeError,
    Result,
};

/// Provides a fluent API for describing a type
pub struct TypeBuilder {
    /// Class or interface
    flavor: TypeFlavor,
    /// Namespace of the type
    namespace: String,
    /// Name of the type
    name: String,
    /// Base type
    base: Option<TypeRc>,
    /// Directly implemented interfaces
    interfaces: Vec<TypeRc>,
    /// Declared methods
    methods: Vec<Method>,
    /// Declared fields
    fields: Vec<Field>,
    /// Declared constructors
    constructors: Vec<Constructor>,
}

impl TypeBuilder {
    fn new(flavor: TypeFlavor, namespace: &str, name: &str) -> Self {
        TypeBuilder {
            flavor,
            namespace: namespace.to_string(),
            name: name.to_string(),
            base: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Start describing a class
    ///
    /// ## Arguments
    /// * 'namespace' - The namespace of the class
    /// * 'name' - The name of the class
    #[must_use]
    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(TypeFlavor::Class, namespace, name)
    }

    /// Start describing an interface
    ///
    /// ## Arguments
    /// * 'namespace' - The namespace of the interface
    /// * 'name' - The name of the interface
    #[must_use]
    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(TypeFlavor::Interface, namespace, name)
    }

    /// Set the base class
    #[must_use]
    pub fn extends(mut self, base: &TypeRc) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Add a directly implemented interface (a super-interface, for interfaces)
    #[must_use]
    pub fn implements(mut self, interface: &TypeRc) -> Self {
        self.interfaces.push(interface.clone());
        self
    }

    fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Declare a method with full control over its shape
    ///
    /// ## Arguments
    /// * 'name' - Method name
    /// * 'return_type' - Return type, `None` for void
    /// * 'params' - Ordered parameter types
    /// * 'visibility' - Declared visibility
    /// * 'modifiers' - Modifier flags
    /// * 'body' - Implementation
    #[must_use]
    pub fn method(
        mut self,
        name: &str,
        return_type: Option<&TypeRc>,
        params: &[&TypeRc],
        visibility: Visibility,
        modifiers: MethodModifiers,
        body: MethodBody,
    ) -> Self {
        let method = Method {
            name: name.to_string(),
            declaring_type: self.fullname(),
            return_type: return_type.cloned(),
            params: params.iter().map(|param| (*param).clone()).collect(),
            visibility,
            modifiers,
            body,
        };
        self.methods.push(method);
        self
    }

    /// Declare a public zero-argument method returning a value
    #[must_use]
    pub fn getter<T, V, F>(self, name: &str, return_type: &TypeRc, read: F) -> Self
    where
        T: Any,
        V: Any + Send,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.method(
            name,
            Some(return_type),
            &[],
            Visibility::Public,
            MethodModifiers::empty(),
            MethodBody::Reader(reader(read)),
        )
    }

    /// Declare a public single-argument method storing a value
    #[must_use]
    pub fn setter<T, V, F>(self, name: &str, param_type: &TypeRc, write: F) -> Self
    where
        T: Any,
        V: Any + Send,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.method(
            name,
            None,
            &[param_type],
            Visibility::Public,
            MethodModifiers::empty(),
            MethodBody::Writer(writer(write)),
        )
    }

    /// Declare a public abstract method
    #[must_use]
    pub fn abstract_method(
        self,
        name: &str,
        return_type: Option<&TypeRc>,
        params: &[&TypeRc],
    ) -> Self {
        self.method(
            name,
            return_type,
            params,
            Visibility::Public,
            MethodModifiers::ABSTRACT,
            MethodBody::Abstract,
        )
    }

    /// Declare a field from raw read/write closures
    #[must_use]
    pub fn raw_field(
        mut self,
        name: &str,
        field_type: &TypeRc,
        visibility: Visibility,
        flags: FieldAttributes,
        read: ReadFn,
        write: WriteFn,
    ) -> Self {
        let field = Field {
            name: name.to_string(),
            declaring_type: self.fullname(),
            field_type: field_type.clone(),
            visibility,
            flags,
            read,
            write,
        };
        self.fields.push(field);
        self
    }

    /// Declare a field backed by typed closures
    #[must_use]
    pub fn field<T, V, R, W>(
        self,
        name: &str,
        field_type: &TypeRc,
        visibility: Visibility,
        flags: FieldAttributes,
        read: R,
        write: W,
    ) -> Self
    where
        T: Any,
        V: Any + Send,
        R: Fn(&T) -> V + Send + Sync + 'static,
        W: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.raw_field(
            name,
            field_type,
            visibility,
            flags,
            reader(read),
            writer(write),
        )
    }

    /// Declare a constructor
    ///
    /// ## Arguments
    /// * 'params' - Ordered parameter types
    /// * 'visibility' - Declared visibility
    /// * 'factory' - Instance factory, `None` if the constructor cannot be invoked here
    #[must_use]
    pub fn constructor(
        mut self,
        params: &[&TypeRc],
        visibility: Visibility,
        factory: Option<FactoryFn>,
    ) -> Self {
        let constructor = Constructor {
            declaring_type: self.fullname(),
            params: params.iter().map(|param| (*param).clone()).collect(),
            visibility,
            factory,
        };
        self.constructors.push(constructor);
        self
    }

    /// Declare a public zero-argument constructor
    #[must_use]
    pub fn default_constructor<T, F>(self, create: F) -> Self
    where
        T: Any + Send,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.constructor(&[], Visibility::Public, Some(factory(create)))
    }

    fn validate(&self) -> Result<()> {
        let fullname = self.fullname();
        if self.name.is_empty() {
            return Err(TypeError("Type name must not be empty".to_string()));
        }

        if let Some(base) = &self.base {
            if self.flavor == TypeFlavor::Interface {
                return Err(TypeError(format!(
                    "Interface '{fullname}' cannot extend class '{base}'"
                )));
            }
            if base.flavor != TypeFlavor::Class {
                return Err(TypeError(format!(
                    "Class '{fullname}' can only extend a class, '{base}' is not one"
                )));
            }
        }

        if let Some(interface) = self.interfaces.iter().find(|i| !i.is_interface()) {
            return Err(TypeError(format!(
                "'{fullname}' cannot implement '{interface}', it is not an interface"
            )));
        }

        for method in &self.methods {
            if method.name.is_empty() {
                return Err(TypeError(format!(
                    "'{fullname}' declares a method without a name"
                )));
            }

            match &method.body {
                MethodBody::Reader(_)
                    if !method.params.is_empty() || method.return_type.is_none() =>
                {
                    return Err(TypeError(format!(
                        "Method '{}' of '{fullname}' reads a value, it needs a return type and no parameters",
                        method.name
                    )));
                }
                MethodBody::Writer(_) if method.params.len() != 1 => {
                    return Err(TypeError(format!(
                        "Method '{}' of '{fullname}' writes a value, it needs exactly one parameter",
                        method.name
                    )));
                }
                _ => {}
            }
        }

        if self.flavor == TypeFlavor::Interface && !self.constructors.is_empty() {
            return Err(TypeError(format!(
                "Interface '{fullname}' cannot declare constructors"
            )));
        }

        Ok(())
    }

    /// Validate the description and build the immutable descriptor
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeError`] if the description is inconsistent: an
    /// interface with a base class, a base that is not a class, an implemented type that
    /// is not an interface, a reader/writer body that does not fit the method shape, or
    /// constructors on an interface. Fails the same way once the process has run out of
    /// type tokens.
    pub fn build(self) -> Result<TypeRc> {
        self.validate()?;

        Ok(Arc::new(TypeDescriptor {
            token: Token::next_type()?,
            flavor: self.flavor,
            namespace: self.namespace,
            name: self.name,
            base: self.base,
            interfaces: self.interfaces,
            methods: self.methods.into_iter().map(Arc::new).collect(),
            fields: self.fields.into_iter().map(Arc::new).collect(),
            constructors: self.constructors.into_iter().map(Arc::new).collect(),
        }))
    }
}
