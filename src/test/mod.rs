use std::sync::OnceLock;

pub use hierarchy::*;

use crate::metadata::{
    access::Visibility,
    field::FieldAttributes,
    typesystem::{Introspectable, PrimitiveKind, TypeBuilder, TypeRc},
};

/// Placeholder instance type for descriptors whose accessors are never invoked
#[derive(Debug, Default)]
pub struct Holder;

/// A plain bean: `name` through accessor methods, `id` read-only through a getter,
/// `age` only as a private field
#[derive(Debug, Default)]
pub struct Person {
    pub name: String,
    pub id: u64,
    pub age: i32,
}

impl Introspectable for Person {
    fn type_descriptor() -> TypeRc {
        static DESCRIPTOR: OnceLock<TypeRc> = OnceLock::new();
        DESCRIPTOR
            .get_or_init(|| {
                let string = PrimitiveKind::String.descriptor();
                let int = PrimitiveKind::Int.descriptor();
                let long = PrimitiveKind::Long.descriptor();

                TypeBuilder::class("demo", "Person")
                    .getter("getName", &string, |p: &Person| p.name.clone())
                    .setter("setName", &string, |p: &mut Person, v: String| p.name = v)
                    .getter("getId", &long, |p: &Person| p.id)
                    .field(
                        "age",
                        &int,
                        Visibility::Private,
                        FieldAttributes::empty(),
                        |p: &Person| p.age,
                        |p: &mut Person, v: i32| p.age = v,
                    )
                    .default_constructor(Person::default)
                    .build()
                    .unwrap()
            })
            .clone()
    }
}

// Helper function to get the descriptor of `Person`
pub fn create_person_type() -> TypeRc {
    Person::type_descriptor()
}

// Helper function to create a type with two unrelated getters for one property
pub fn create_ambiguous_type() -> TypeRc {
    let string = PrimitiveKind::String.descriptor();
    let int = PrimitiveKind::Int.descriptor();

    let base = TypeBuilder::class("demo", "AmbiguousBase")
        .getter("getValue", &string, |_: &Holder| String::new())
        .build()
        .unwrap();

    TypeBuilder::class("demo", "Ambiguous")
        .extends(&base)
        .getter("getValue", &int, |_: &Holder| 0i32)
        .build()
        .unwrap()
}

// Helper function to create a type that exposes its state through fields only
pub fn create_field_only_type() -> TypeRc {
    let int = PrimitiveKind::Int.descriptor();
    let long = PrimitiveKind::Long.descriptor();
    let object = PrimitiveKind::Object.descriptor();

    let int_field = |builder: TypeBuilder,
                     name: &str,
                     visibility: Visibility,
                     flags: FieldAttributes| {
        builder.field(
            name,
            &int,
            visibility,
            flags,
            |_: &Holder| 0i32,
            |_: &mut Holder, _: i32| {},
        )
    };

    let builder = TypeBuilder::class("demo", "Counters");
    let builder = int_field(builder, "counter", Visibility::Private, FieldAttributes::empty());
    let builder = int_field(builder, "limit", Visibility::Private, FieldAttributes::FINAL);
    let builder = int_field(
        builder,
        "shared",
        Visibility::Private,
        FieldAttributes::STATIC | FieldAttributes::FINAL,
    );
    let builder = int_field(builder, "total", Visibility::Public, FieldAttributes::VOLATILE);
    let builder = int_field(
        builder,
        "$jacocoData",
        Visibility::Private,
        FieldAttributes::STATIC | FieldAttributes::TRANSIENT,
    );

    builder
        .field(
            "serialVersionUID",
            &long,
            Visibility::Private,
            FieldAttributes::STATIC | FieldAttributes::FINAL,
            |_: &Holder| 1i64,
            |_: &mut Holder, _: i64| {},
        )
        .field(
            "class",
            &object,
            Visibility::Private,
            FieldAttributes::empty(),
            |_: &Holder| 0u8,
            |_: &mut Holder, _: u8| {},
        )
        .build()
        .unwrap()
}
