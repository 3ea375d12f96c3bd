use nova_common::{Color, TypeTag};

use crate::field::{ColorAt, FieldSpec, NONE};
use crate::ids::RoidId;
use crate::mux::ExplosionRef;

record_type! {
    /// An asteroid type.
    pub struct Roid(TypeTag::ROID, RoidId) {
        pub strength: i16 = FieldSpec::i16(0),
        pub spin_rate: i16 = FieldSpec::i16(2),
        /// Commodity index, or 1000 and up for a `jünk` type.
        pub yield_type: i16 = FieldSpec::i16(4),
        pub yield_qty: i16 = FieldSpec::i16(6),
        pub particle_count: i16 = FieldSpec::i16(8),
        pub particle_color: Color = ColorAt(10),
        pub fragment_types: Vec<Option<RoidId>> = FieldSpec::i16(14).absent(NONE).array(2),
        pub fragment_count: i16 = FieldSpec::i16(18),
        pub explosion: ExplosionRef = FieldSpec::i16(20),
        pub mass: i16 = FieldSpec::i16(22),
    }
}
