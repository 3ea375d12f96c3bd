use std::time::Duration;

use nova_common::{Color, TypeTag};

use crate::field::{ColorAt, FieldSpec, NONE, NONE_OR_ZERO};
use crate::flags::{FlagNames, FlagSet, FlagSpec};
use crate::ids::{CicnId, OutfId, ShipId, SndId, SpinId, WeapId};
use crate::mux::ExplosionRef;

pub const SOUND_BASE: i64 = 200;

pub const WEAP_FLAGS: FlagNames = &[
    (0x0001, "spin_graphic"),
    (0x0002, "second_trigger"),
    (0x0004, "start_on_first_frame"),
    (0x0008, "ignore_fast_ships"),
    (0x0010, "looped_sound"),
    (0x0020, "ignores_shields"),
    (0x0040, "fire_simultaneously"),
    (0x0080, "no_point_defense_targeting"),
    (0x0100, "blast_spares_player"),
    (0x0200, "small_smoke"),
    (0x0400, "big_smoke"),
    (0x0800, "persistent_smoke"),
    (0x1000, "turret_blind_front"),
    (0x2000, "turret_blind_sides"),
    (0x4000, "turret_blind_rear"),
    (0x8000, "detonates_on_expiry"),
];

pub const WEAP_FLAGS2: FlagNames = &[
    (0x0001, "hold_first_frame_until_armed"),
    (0x0002, "stop_on_last_frame"),
    (0x0004, "proximity_ignores_asteroids"),
    (0x0008, "proximity_triggered_by_any"),
    (0x0010, "submunitions_seek_nearest"),
    (0x0020, "no_submunitions_on_expiry"),
    (0x0040, "hide_ammo"),
    (0x0080, "needs_key_carried"),
    (0x0100, "ai_ignores"),
    (0x0200, "use_ship_weapon_sprite"),
    (0x0400, "planet_type"),
    (0x0800, "hide_when_empty"),
    (0x1000, "disable_only"),
    (0x2000, "beam_under_ships"),
    (0x4000, "fires_while_cloaked"),
    (0x8000, "tenfold_asteroid_damage"),
];

pub const WEAP_FLAGS3: FlagNames = &[
    (0x0001, "ammo_used_per_burst"),
    (0x0002, "translucent_shots"),
    (0x0004, "one_shot_at_a_time"),
    (0x0010, "closest_exit_point"),
    (0x0020, "exclusive"),
];

pub const SEEKER_FLAGS: FlagNames = &[
    (0x0001, "ignores_asteroids"),
    (0x0002, "decoyed_by_asteroids"),
    (0x0008, "confused_by_interference"),
    (0x0010, "turns_away_if_jammed"),
    (0x0020, "cannot_fire_ionized"),
    (0x4000, "loses_lock_off_bore"),
    (0x8000, "may_hit_parent_if_jammed"),
];

code_enum! {
    pub enum Guidance {
        Unguided = -1,
        Beam = 0,
        Homing = 1,
        TurretedBeam = 3,
        Turreted = 4,
        FreefallBomb = 5,
        FreeflightRocket = 6,
        FrontTurret = 7,
        RearTurret = 8,
        PointDefenseTurret = 9,
        PointDefenseBeam = 10,
        /// `ammo_type` is the carried ship class.
        CarriedShip = 99,
    }
}

code_enum! {
    /// Which of the ship's `shän` mount points a shot leaves from.
    pub enum ExitPoint {
        Center = -1,
        Gun = 0,
        Turret = 1,
        Guided = 2,
        Beam = 3,
    }
}

/// What a weapon consumes when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Ammo {
    Unlimited,
    Outfit(OutfId),
    /// Tenths of a jump of fuel per shot.
    Fuel(i16),
    Ship(ShipId),
    Unspecified(i16),
}

record_type! {
    /// A weapon.
    pub struct Weap(TypeTag::WEAP, WeapId) {
        pub reload: Duration = FieldSpec::u16(0).frames(),
        /// Shot lifetime.
        pub lifetime: Duration = FieldSpec::u16(2).frames(),
        pub mass_damage: i16 = FieldSpec::i16(4),
        pub energy_damage: i16 = FieldSpec::i16(6),
        pub guidance: Guidance = FieldSpec::i16(8),
        pub speed: i16 = FieldSpec::i16(10),
        pub ammo_type: i16 = FieldSpec::i16(12),
        pub graphic: Option<SpinId> = FieldSpec::i16(14)
            .absent(NONE)
            .bias(SpinId::WEAPON_BASE as i64),
        pub inaccuracy: i16 = FieldSpec::i16(16),
        pub sound: Option<SndId> = FieldSpec::i16(18).absent(NONE).bias(SOUND_BASE),
        pub impact: i16 = FieldSpec::i16(20),
        pub explosion: ExplosionRef = FieldSpec::i16(22),
        pub proximity_radius: i16 = FieldSpec::i16(24),
        pub blast_radius: i16 = FieldSpec::i16(26),
        pub flags: FlagSet = FlagSpec::u16(28, WEAP_FLAGS),
        pub seeker: FlagSet = FlagSpec::u16(30, SEEKER_FLAGS),
        pub smoke_set: Option<CicnId> = FieldSpec::i16(32).absent(NONE_OR_ZERO),
        pub decay: i16 = FieldSpec::i16(34),
        pub particles: i16 = FieldSpec::i16(36),
        pub particle_velocity: i16 = FieldSpec::i16(38),
        pub particle_life_min: i16 = FieldSpec::i16(40),
        pub particle_life_max: i16 = FieldSpec::i16(42),
        pub particle_color: Color = ColorAt(44),
        pub beam_length: i16 = FieldSpec::i16(48),
        pub beam_width: i16 = FieldSpec::i16(50),
        pub falloff: i16 = FieldSpec::i16(52),
        pub beam_color: Color = ColorAt(54),
        pub corona_color: Color = ColorAt(58),
        pub sub_count: i16 = FieldSpec::i16(62),
        pub sub_type: Option<WeapId> = FieldSpec::i16(64).absent(NONE_OR_ZERO),
        pub sub_theta: i16 = FieldSpec::i16(66),
        pub sub_limit: i16 = FieldSpec::i16(68),
        pub proximity_safety: i16 = FieldSpec::i16(70),
        pub flags2: FlagSet = FlagSpec::u16(72, WEAP_FLAGS2),
        pub ionization: i16 = FieldSpec::i16(74),
        pub hit_particles: i16 = FieldSpec::i16(76),
        pub hit_particle_life: i16 = FieldSpec::i16(78),
        pub hit_particle_velocity: i16 = FieldSpec::i16(80),
        pub hit_particle_color: Color = ColorAt(82),
        pub recoil: i16 = FieldSpec::i16(86),
        pub exit_point: ExitPoint = FieldSpec::i16(88),
        pub burst_count: i16 = FieldSpec::i16(90),
        pub burst_reload: i16 = FieldSpec::i16(92),
        pub jam_vulnerability: Vec<i16> = FieldSpec::i16(94).array(4),
        pub flags3: FlagSet = FlagSpec::u16(102, WEAP_FLAGS3),
        pub durability: i16 = FieldSpec::i16(104),
        pub guided_turn: i16 = FieldSpec::i16(106),
        pub max_ammo: i16 = FieldSpec::i16(108),
        pub lightning_density: i16 = FieldSpec::i16(110),
        pub lightning_amplitude: i16 = FieldSpec::i16(112),
        pub ionize_color: Color = ColorAt(114),
    }
}

impl Weap {
    pub fn ammo(&self) -> Ammo {
        if self.guidance == Guidance::CarriedShip {
            return Ammo::Ship(ShipId(self.ammo_type));
        }
        match self.ammo_type {
            -1 => Ammo::Unlimited,
            n @ 0..=255 => Ammo::Outfit(OutfId(128 + n)),
            n @ 1000..=1999 => Ammo::Fuel(n - 1000),
            other => Ammo::Unspecified(other),
        }
    }

    pub fn is_beam(&self) -> bool {
        matches!(
            self.guidance,
            Guidance::Beam | Guidance::TurretedBeam | Guidance::PointDefenseBeam
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DecodeContext, DecodeOptions, RecordType};
    use crate::source::RawRecord;

    fn decode(bytes: &[u8]) -> Weap {
        let record = RawRecord { tag: TypeTag::WEAP, id: 128, bytes };
        Weap::decode(&record, &DecodeContext::new(&DecodeOptions::default())).unwrap()
    }

    #[test]
    fn test_decode_weap() {
        let mut bytes = vec![0u8; 118];
        bytes[0..2].copy_from_slice(&30u16.to_be_bytes());
        bytes[2..4].copy_from_slice(&60u16.to_be_bytes());
        bytes[4..6].copy_from_slice(&12i16.to_be_bytes());
        bytes[8..10].copy_from_slice(&1i16.to_be_bytes());
        bytes[12..14].copy_from_slice(&3i16.to_be_bytes());
        bytes[14..16].copy_from_slice(&5i16.to_be_bytes());
        bytes[18..20].copy_from_slice(&(-1i16).to_be_bytes());
        bytes[22..24].copy_from_slice(&2i16.to_be_bytes());
        bytes[29] = 0x22;
        bytes[31] = 0x08;
        bytes[44..48].copy_from_slice(&[0xFF, 0xFF, 0x80, 0x00]);
        bytes[88..90].copy_from_slice(&(-1i16).to_be_bytes());

        let weap = decode(&bytes);

        assert_eq!(weap.reload, Duration::from_secs(1));
        assert_eq!(weap.lifetime, Duration::from_secs(2));
        assert_eq!(weap.mass_damage, 12);
        assert_eq!(weap.guidance, Guidance::Homing);
        assert_eq!(weap.ammo(), Ammo::Outfit(OutfId(131)));
        assert_eq!(weap.graphic, Some(SpinId(3005)));
        assert_eq!(weap.sound, None);
        assert_eq!(weap.explosion.parts(), Some((2, false)));
        assert!(weap.flags.get("second_trigger"));
        assert!(weap.flags.get("ignores_shields"));
        assert!(weap.seeker.get("confused_by_interference"));
        assert_eq!(weap.particle_color, Color { a: 0xFF, r: 0xFF, g: 0x80, b: 0x00 });
        assert_eq!(weap.exit_point, ExitPoint::Center);
        assert!(!weap.is_beam());
    }

    #[test]
    fn test_ammo_kinds() {
        let mut bytes = vec![0u8; 118];
        bytes[12..14].copy_from_slice(&(-1i16).to_be_bytes());
        assert_eq!(decode(&bytes).ammo(), Ammo::Unlimited);

        bytes[12..14].copy_from_slice(&1005i16.to_be_bytes());
        assert_eq!(decode(&bytes).ammo(), Ammo::Fuel(5));

        bytes[8..10].copy_from_slice(&99i16.to_be_bytes());
        bytes[12..14].copy_from_slice(&140i16.to_be_bytes());
        assert_eq!(decode(&bytes).ammo(), Ammo::Ship(ShipId(140)));
    }
}
