//! The [`Serializer`] that builds [`Shape`] trees.

use serde::ser::{
    Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};
use serde_json::{Error, Value, value::Serializer as ValueSerializer};

use super::{Field, Shape};

/// Captures structs as [`Shape::Record`] and hands everything else to
/// `serde_json`'s value serializer.
pub(super) struct ShapeSerializer;

/// Compound serializer for a struct's fields.
pub(super) struct RecordSerializer {
    fields: Vec<Field>,
}

/// Wraps one of `serde_json`'s compound serializers so its output becomes a
/// [`Shape::Leaf`].
pub(super) struct LeafSerializer<S>(S);

macro_rules! leaf {
    ($($method:ident($ty:ty);)*) => {
        $(
            fn $method(self, v: $ty) -> Result<Shape, Error> {
                ValueSerializer.$method(v).map(Shape::Leaf)
            }
        )*
    };
}

impl Serializer for ShapeSerializer {
    type Ok = Shape;
    type Error = Error;
    type SerializeSeq = LeafSerializer<<ValueSerializer as Serializer>::SerializeSeq>;
    type SerializeTuple = LeafSerializer<<ValueSerializer as Serializer>::SerializeTuple>;
    type SerializeTupleStruct =
        LeafSerializer<<ValueSerializer as Serializer>::SerializeTupleStruct>;
    type SerializeTupleVariant =
        LeafSerializer<<ValueSerializer as Serializer>::SerializeTupleVariant>;
    type SerializeMap = LeafSerializer<<ValueSerializer as Serializer>::SerializeMap>;
    type SerializeStruct = RecordSerializer;
    type SerializeStructVariant =
        LeafSerializer<<ValueSerializer as Serializer>::SerializeStructVariant>;

    leaf! {
        serialize_bool(bool);
        serialize_i8(i8);
        serialize_i16(i16);
        serialize_i32(i32);
        serialize_i64(i64);
        serialize_i128(i128);
        serialize_u8(u8);
        serialize_u16(u16);
        serialize_u32(u32);
        serialize_u64(u64);
        serialize_u128(u128);
        serialize_f32(f32);
        serialize_f64(f64);
        serialize_char(char);
        serialize_str(&str);
        serialize_bytes(&[u8]);
    }

    fn serialize_none(self) -> Result<Shape, Error> {
        Ok(Shape::Leaf(Value::Null))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Shape, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Shape, Error> {
        Ok(Shape::Leaf(Value::Null))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Shape, Error> {
        Ok(Shape::Record(Vec::new()))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<Shape, Error> {
        ValueSerializer
            .serialize_unit_variant(name, variant_index, variant)
            .map(Shape::Leaf)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Shape, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Shape, Error>
    where
        T: ?Sized + Serialize,
    {
        ValueSerializer
            .serialize_newtype_variant(name, variant_index, variant, value)
            .map(Shape::Leaf)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        ValueSerializer.serialize_seq(len).map(LeafSerializer)
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Error> {
        ValueSerializer.serialize_tuple(len).map(LeafSerializer)
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        ValueSerializer
            .serialize_tuple_struct(name, len)
            .map(LeafSerializer)
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        ValueSerializer
            .serialize_tuple_variant(name, variant_index, variant, len)
            .map(LeafSerializer)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, Error> {
        ValueSerializer.serialize_map(len).map(LeafSerializer)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Error> {
        Ok(RecordSerializer {
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        ValueSerializer
            .serialize_struct_variant(name, variant_index, variant, len)
            .map(LeafSerializer)
    }
}

impl SerializeStruct for RecordSerializer {
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        let shape = value.serialize(ShapeSerializer)?;
        self.fields.push((key, shape));
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Record(self.fields))
    }
}

impl<S> SerializeSeq for LeafSerializer<S>
where
    S: SerializeSeq<Ok = Value, Error = Error>,
{
    type Ok = Shape;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_element(value)
    }

    fn end(self) -> Result<Shape, Error> {
        self.0.end().map(Shape::Leaf)
    }
}

impl<S> SerializeTuple for LeafSerializer<S>
where
    S: SerializeTuple<Ok = Value, Error = Error>,
{
    type Ok = Shape;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_element(value)
    }

    fn end(self) -> Result<Shape, Error> {
        self.0.end().map(Shape::Leaf)
    }
}

impl<S> SerializeTupleStruct for LeafSerializer<S>
where
    S: SerializeTupleStruct<Ok = Value, Error = Error>,
{
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_field(value)
    }

    fn end(self) -> Result<Shape, Error> {
        self.0.end().map(Shape::Leaf)
    }
}

impl<S> SerializeTupleVariant for LeafSerializer<S>
where
    S: SerializeTupleVariant<Ok = Value, Error = Error>,
{
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_field(value)
    }

    fn end(self) -> Result<Shape, Error> {
        self.0.end().map(Shape::Leaf)
    }
}

impl<S> SerializeMap for LeafSerializer<S>
where
    S: SerializeMap<Ok = Value, Error = Error>,
{
    type Ok = Shape;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_key(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_value(value)
    }

    fn end(self) -> Result<Shape, Error> {
        self.0.end().map(Shape::Leaf)
    }
}

impl<S> SerializeStructVariant for LeafSerializer<S>
where
    S: SerializeStructVariant<Ok = Value, Error = Error>,
{
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.serialize_field(key, value)
    }

    fn end(self) -> Result<Shape, Error> {
        self.0.end().map(Shape::Leaf)
    }
}
