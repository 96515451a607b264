//! Direct field access as a fallback for properties without accessor methods.

use log::trace;

use crate::{
    metadata::{access::AccessPolicy, typesystem::TypeDescriptor},
    reflection::table::PropertyMaps,
};

/// Adds field invokers for every property still missing a getter or setter.
///
/// Levels are visited leaf first, so a field shadows a same-named field of a base type.
/// A field that is both `final` and `static` never becomes a setter; every other usable
/// field fills both sides.
pub(crate) fn add_fields(ty: &TypeDescriptor, policy: AccessPolicy, maps: &mut PropertyMaps) {
    for level in ty.hierarchy() {
        for field in &level.fields {
            if !policy.permits(field.visibility) {
                trace!(
                    "Field '{}' of '{}' is {} and not usable",
                    field.name,
                    field.declaring_type,
                    field.visibility
                );
                continue;
            }

            if !maps.set_methods.contains_key(&field.name) {
                if field.is_final() && field.is_static() {
                    trace!("Constant '{}' is not writable", field.name);
                } else {
                    maps.add_set_field(field);
                }
            }

            if !maps.get_methods.contains_key(&field.name) {
                maps.add_get_field(field);
            }
        }
    }
}
