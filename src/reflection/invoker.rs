//! Accessor invocation wrappers.
//!
//! An [`Invoker`] performs a single read or write of one property on an instance. It
//! hides whether the property is backed by an accessor method or by direct field access.
//! Failures are [`crate::Error::AccessDenied`] for members that are not usable under the
//! access policy the table was built with, and [`crate::Error::TargetError`] for
//! everything the invocation target itself rejects.

use std::{any::Any, fmt, sync::Arc};

use crate::{
    metadata::{
        field::FieldRc,
        method::{MethodBody, MethodRc},
        typesystem::TypeRc,
        value::Value,
    },
    Error, Result,
};

/// Invokes an accessor method
#[derive(Clone)]
pub struct MethodInvoker {
    method: MethodRc,
    value_type: TypeRc,
    accessible: bool,
}

impl MethodInvoker {
    /// Wrap a getter or setter, `value_type` is the return or parameter type
    pub(crate) fn new(method: MethodRc, value_type: TypeRc, accessible: bool) -> Self {
        MethodInvoker {
            method,
            value_type,
            accessible,
        }
    }

    /// The wrapped method
    #[must_use]
    pub fn method(&self) -> &MethodRc {
        &self.method
    }

    /// Returns true if the method is usable under the access policy
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    fn check_access(&self) -> Result<()> {
        if self.accessible {
            Ok(())
        } else {
            Err(Error::AccessDenied {
                member: self.method.name.clone(),
                type_name: self.method.declaring_type.clone(),
            })
        }
    }

    fn read(&self, instance: &dyn Any) -> Result<Value> {
        self.check_access()?;
        match &self.method.body {
            MethodBody::Reader(read) => read(instance),
            MethodBody::Abstract => Err(target_error!(
                "Cannot invoke abstract method '{}' of '{}'",
                self.method.name,
                self.method.declaring_type
            )),
            MethodBody::Writer(_) | MethodBody::Opaque => Err(target_error!(
                "Method '{}' of '{}' cannot be invoked as a reader",
                self.method.name,
                self.method.declaring_type
            )),
        }
    }

    fn write(&self, instance: &mut dyn Any, value: Value) -> Result<()> {
        self.check_access()?;
        match &self.method.body {
            MethodBody::Writer(write) => write(instance, value),
            MethodBody::Abstract => Err(target_error!(
                "Cannot invoke abstract method '{}' of '{}'",
                self.method.name,
                self.method.declaring_type
            )),
            MethodBody::Reader(_) | MethodBody::Opaque => Err(target_error!(
                "Method '{}' of '{}' cannot be invoked as a writer",
                self.method.name,
                self.method.declaring_type
            )),
        }
    }
}

/// Reads or writes a field directly
#[derive(Clone)]
pub struct FieldInvoker {
    field: FieldRc,
}

impl FieldInvoker {
    pub(crate) fn new(field: FieldRc) -> Self {
        FieldInvoker { field }
    }

    /// The wrapped field
    #[must_use]
    pub fn field(&self) -> &FieldRc {
        &self.field
    }
}

/// A single property read or write on an instance
#[derive(Clone)]
pub enum Invoker {
    /// Backed by a getter or setter method
    Method(MethodInvoker),
    /// Backed by direct field access
    Field(FieldInvoker),
}

impl Invoker {
    /// Read the property from `instance`
    ///
    /// # Errors
    /// Returns [`crate::Error::AccessDenied`] if the backing method is not usable, or
    /// [`crate::Error::TargetError`] if the method cannot be invoked as a reader or the
    /// instance has the wrong type.
    pub fn read(&self, instance: &dyn Any) -> Result<Value> {
        match self {
            Invoker::Method(invoker) => invoker.read(instance),
            Invoker::Field(invoker) => (invoker.field.read)(instance),
        }
    }

    /// Write `value` into the property of `instance`
    ///
    /// # Errors
    /// Returns [`crate::Error::AccessDenied`] if the backing method is not usable, or
    /// [`crate::Error::TargetError`] if the method cannot be invoked as a writer, or the
    /// instance or value has the wrong type.
    pub fn write(&self, instance: &mut dyn Any, value: Value) -> Result<()> {
        match self {
            Invoker::Method(invoker) => invoker.write(instance, value),
            Invoker::Field(invoker) => (invoker.field.write)(instance, value),
        }
    }

    /// The declared type of the value this invoker reads or writes
    #[must_use]
    pub fn value_type(&self) -> &TypeRc {
        match self {
            Invoker::Method(invoker) => &invoker.value_type,
            Invoker::Field(invoker) => &invoker.field.field_type,
        }
    }

    /// Returns true if the invoker goes through direct field access
    #[must_use]
    pub fn is_field(&self) -> bool {
        matches!(self, Invoker::Field(_))
    }

    /// Name of the backing member (method or field name)
    #[must_use]
    pub fn member_name(&self) -> &str {
        match self {
            Invoker::Method(invoker) => &invoker.method.name,
            Invoker::Field(invoker) => &invoker.field.name,
        }
    }
}

impl PartialEq for Invoker {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Invoker::Method(a), Invoker::Method(b)) => {
                Arc::ptr_eq(&a.method, &b.method) && a.accessible == b.accessible
            }
            (Invoker::Field(a), Invoker::Field(b)) => Arc::ptr_eq(&a.field, &b.field),
            _ => false,
        }
    }
}

impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invoker::Method(invoker) => f
                .debug_struct("MethodInvoker")
                .field("method", &invoker.method.signature())
                .field("declaring_type", &invoker.method.declaring_type)
                .field("accessible", &invoker.accessible)
                .finish(),
            Invoker::Field(invoker) => f
                .debug_struct("FieldInvoker")
                .field("field", &invoker.field.name)
                .field("declaring_type", &invoker.field.declaring_type)
                .finish(),
        }
    }
}
