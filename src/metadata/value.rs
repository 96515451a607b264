//! Dynamically typed values and the closures that move them in and out of instances.
//!
//! Instances are handed to accessors as `&dyn Any` (reads) or `&mut dyn Any` (writes),
//! values travel as [`Value`]. The typed constructors [`reader`], [`writer`] and
//! [`factory`] wrap ordinary Rust closures and perform the downcasts, turning a wrong
//! instance or value type into [`crate::Error::TargetError`].

use std::any::{type_name, Any};
use std::sync::Arc;

use crate::Result;

/// A dynamically typed property value
pub type Value = Box<dyn Any + Send>;

/// Reads a value from an instance
pub type ReadFn = Arc<dyn Fn(&dyn Any) -> Result<Value> + Send + Sync>;

/// Writes a value into an instance
pub type WriteFn = Arc<dyn Fn(&mut dyn Any, Value) -> Result<()> + Send + Sync>;

/// Produces a new instance
pub type FactoryFn = Arc<dyn Fn() -> Result<Value> + Send + Sync>;

/// Wraps a typed read closure.
///
/// ## Arguments
/// * `read` - Closure receiving the downcast instance
pub fn reader<T, V, F>(read: F) -> ReadFn
where
    T: Any,
    V: Any + Send,
    F: Fn(&T) -> V + Send + Sync + 'static,
{
    Arc::new(move |instance: &dyn Any| {
        let target = instance.downcast_ref::<T>().ok_or_else(|| {
            target_error!("Instance is not of type '{}'", type_name::<T>())
        })?;
        Ok(Box::new(read(target)) as Value)
    })
}

/// Wraps a typed write closure.
///
/// ## Arguments
/// * `write` - Closure receiving the downcast instance and the downcast value
pub fn writer<T, V, F>(write: F) -> WriteFn
where
    T: Any,
    V: Any + Send,
    F: Fn(&mut T, V) + Send + Sync + 'static,
{
    Arc::new(move |instance: &mut dyn Any, value: Value| {
        let target = instance.downcast_mut::<T>().ok_or_else(|| {
            target_error!("Instance is not of type '{}'", type_name::<T>())
        })?;
        let value = value.downcast::<V>().map_err(|_| {
            target_error!("Argument type mismatch, expected '{}'", type_name::<V>())
        })?;
        write(target, *value);
        Ok(())
    })
}

/// Wraps a typed instance factory.
pub fn factory<T, F>(create: F) -> FactoryFn
where
    T: Any + Send,
    F: Fn() -> T + Send + Sync + 'static,
{
    Arc::new(move || Ok(Box::new(create()) as Value))
}
