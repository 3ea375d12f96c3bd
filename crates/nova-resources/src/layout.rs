//! Declarative record layouts.
//!
//! A record type is declared once with [`record_type!`]: each output field
//! names its Rust type and the layout element it is read from. The generated
//! decoder walks the fields in order through [`RecordView::get`], which pairs
//! an [`Extract`] element (what to read) with a [`FromRaw`] target (how the
//! raw value becomes the field's type). Nothing else is written per type.
//!
//! ```ignore
//! record_type! {
//!     pub struct Boom(TypeTag::BOOM, BoomId) {
//!         pub frame_advance: i16 = FieldSpec::i16(0),
//!         pub sound: Option<SndId> = FieldSpec::i16(2).absent(NONE).bias(300),
//!     }
//! }
//! ```

use std::time::Duration;

use nova_common::{Color, Point, Rect};

use crate::field::{ArraySpec, CStr, ColorAt, FieldSpec, FieldValue, PointAt, RectAt, SplitArray};
use crate::flags::{FlagSet, FlagSpec};
use crate::registry::DecodeOptions;
use crate::{Error, Result};

/// A layout element that can be read from a record body.
pub trait Extract {
    type Raw;

    fn extract(&self, bytes: &[u8], options: &DecodeOptions) -> Result<Self::Raw>;
}

impl Extract for FieldSpec {
    type Raw = FieldValue;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<FieldValue> {
        self.decode(bytes)
    }
}

impl Extract for ArraySpec {
    type Raw = Vec<FieldValue>;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<Vec<FieldValue>> {
        self.decode(bytes)
    }
}

impl Extract for SplitArray {
    type Raw = Vec<FieldValue>;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<Vec<FieldValue>> {
        self.decode(bytes)
    }
}

impl Extract for FlagSpec {
    type Raw = FlagSet;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<FlagSet> {
        self.decode(bytes)
    }
}

impl Extract for CStr {
    type Raw = String;

    fn extract(&self, bytes: &[u8], options: &DecodeOptions) -> Result<String> {
        self.decode(bytes, options.text)
    }
}

impl Extract for ColorAt {
    type Raw = Color;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<Color> {
        self.decode(bytes)
    }
}

impl Extract for RectAt {
    type Raw = Rect;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<Rect> {
        self.decode(bytes)
    }
}

impl Extract for PointAt {
    type Raw = Point;

    fn extract(&self, bytes: &[u8], _: &DecodeOptions) -> Result<Point> {
        self.decode(bytes)
    }
}

/// Conversion from an extracted raw value into a record field type.
pub trait FromRaw<R>: Sized {
    fn from_raw(raw: R) -> Result<Self>;
}

fn mismatch<T>(expected: &'static str, raw: &FieldValue) -> Result<T> {
    Err(Error::FieldType {
        expected,
        found: raw.kind(),
    })
}

macro_rules! int_from_raw {
    ($($t:ty),*) => {
        $(
            impl FromRaw<FieldValue> for $t {
                fn from_raw(raw: FieldValue) -> Result<Self> {
                    match raw {
                        FieldValue::Int(v) => <$t>::try_from(v).or_else(|_| mismatch(stringify!($t), &raw)),
                        other => mismatch(stringify!($t), &other),
                    }
                }
            }
        )*
    };
}

int_from_raw!(i8, u8, i16, u16, i32, u32, i64);

impl FromRaw<FieldValue> for u64 {
    /// Eight-byte unsigned fields travel as `i64` bit patterns.
    fn from_raw(raw: FieldValue) -> Result<Self> {
        match raw {
            FieldValue::Int(v) => Ok(v as u64),
            other => mismatch("u64", &other),
        }
    }
}

impl FromRaw<FieldValue> for f64 {
    fn from_raw(raw: FieldValue) -> Result<Self> {
        match raw {
            FieldValue::Real(v) => Ok(v),
            FieldValue::Int(v) => Ok(v as f64),
            other => mismatch("f64", &other),
        }
    }
}

impl FromRaw<FieldValue> for Duration {
    fn from_raw(raw: FieldValue) -> Result<Self> {
        match raw {
            FieldValue::Duration(d) => Ok(d),
            other => mismatch("Duration", &other),
        }
    }
}

impl<T: FromRaw<FieldValue>> FromRaw<FieldValue> for Option<T> {
    fn from_raw(raw: FieldValue) -> Result<Self> {
        match raw {
            FieldValue::Absent => Ok(None),
            present => T::from_raw(present).map(Some),
        }
    }
}

impl<T: FromRaw<FieldValue>> FromRaw<Vec<FieldValue>> for Vec<T> {
    fn from_raw(raw: Vec<FieldValue>) -> Result<Self> {
        raw.into_iter().map(T::from_raw).collect()
    }
}

macro_rules! identity_from_raw {
    ($($t:ty),*) => {
        $(
            impl FromRaw<$t> for $t {
                #[inline]
                fn from_raw(raw: $t) -> Result<Self> {
                    Ok(raw)
                }
            }
        )*
    };
}

identity_from_raw!(FlagSet, String, Color, Rect, Point);

/// Implement [`FromRaw`] for types with a total `From<i16>` conversion.
macro_rules! from_i16_raw {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::layout::FromRaw<$crate::field::FieldValue> for $t {
                fn from_raw(raw: $crate::field::FieldValue) -> $crate::Result<Self> {
                    <i16 as $crate::layout::FromRaw<_>>::from_raw(raw).map(<$t>::from)
                }
            }
        )*
    };
}

/// Declare a closed set of numeric codes with an `Unspecified` fallback.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
            /// A value outside the documented set.
            Unspecified(i16),
        }

        impl From<i16> for $name {
            fn from(value: i16) -> Self {
                match value {
                    $($value => $name::$variant,)*
                    other => $name::Unspecified(other),
                }
            }
        }

        impl From<$name> for i16 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)*
                    $name::Unspecified(other) => other,
                }
            }
        }

        from_i16_raw!($name);
    };
}

/// Declare a fixed-layout record type and its decoder.
macro_rules! record_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($tag:expr, $id:ty) {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $ty:ty = $layout:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name {
            pub id: $id,
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::registry::RecordType for $name {
            type Id = $id;
            const TAG: nova_common::TypeTag = $tag;
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn id(&self) -> $id {
                self.id
            }

            fn unspecified_ids(&self) -> usize {
                0 $(+ usize::from($crate::mux::is_unspecified(&self.$field)))*
            }

            fn decode(
                record: &$crate::source::RawRecord<'_>,
                ctx: &$crate::registry::DecodeContext<'_>,
            ) -> $crate::Result<Self> {
                let view = $crate::layout::RecordView::new(record.bytes, ctx.options);
                Ok(Self {
                    id: <$id>::from(record.id),
                    $($field: view.get(stringify!($field), &$layout)?,)*
                })
            }
        }
    };
}

/// A record body being materialized.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    bytes: &'a [u8],
    options: &'a DecodeOptions,
}

impl<'a> RecordView<'a> {
    pub fn new(bytes: &'a [u8], options: &'a DecodeOptions) -> Self {
        Self { bytes, options }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Read one layout element into a field type.
    pub fn get<T, L>(&self, field: &'static str, layout: &L) -> Result<T>
    where
        L: Extract,
        T: FromRaw<L::Raw>,
    {
        layout
            .extract(self.bytes, self.options)
            .and_then(T::from_raw)
            .map_err(|e| e.in_field(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::NONE;

    #[test]
    fn test_view_typed_fields() {
        let options = DecodeOptions::default();
        let bytes = [0xFF, 0xFF, 0x00, 0x2A, b'h', b'i', 0x00, 0x00];
        let view = RecordView::new(&bytes, &options);

        let absent: Option<i16> = view.get("a", &FieldSpec::i16(0).absent(NONE)).unwrap();
        let answer: u16 = view.get("b", &FieldSpec::u16(2)).unwrap();
        let text: String = view.get("c", &CStr::new(4, 4)).unwrap();

        assert_eq!(absent, None);
        assert_eq!(answer, 42);
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_error_names_field() {
        let options = DecodeOptions::default();
        let view = RecordView::new(&[0x00], &options);
        let err = view.get::<i16, _>("holds", &FieldSpec::i16(0)).unwrap_err();

        assert!(matches!(err, Error::Field { field: "holds", .. }));
    }

    #[test]
    fn test_type_mismatch() {
        assert!(matches!(
            Duration::from_raw(FieldValue::Int(3)),
            Err(Error::FieldType { expected: "Duration", found: "integer" })
        ));
        assert!(i8::from_raw(FieldValue::Int(300)).is_err());
        assert_eq!(u64::from_raw(FieldValue::Int(-1)).unwrap(), u64::MAX);
    }
}
