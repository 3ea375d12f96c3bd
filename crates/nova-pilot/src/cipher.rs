//! The pilot file stream cipher.
//!
//! Each 32-bit word is XORed with the current state, which then steps
//! through `state = (state - 0x21524111) ^ 0xDEADBEEF`. XOR makes the
//! transform its own inverse, so one function both encrypts and decrypts.
//!
//! The game reads each word little-endian and XORs it with the byte-swapped
//! state, which amounts to XORing the state's big-endian bytes in order. The
//! tail of a buffer whose length is not a multiple of four follows the same
//! rule: the game's loop stores the low byte of the swapped word first, so
//! the leftover bytes take the next state's big-endian bytes, most
//! significant first. Read literally as "swap, then take the most
//! significant byte" it would be the reverse order; the game's byte order
//! wins.

use byteorder::{BigEndian, ByteOrder};

/// The key every pilot resource is encrypted with.
pub const PILOT_KEY: u32 = 0xB36A_210F;

const STEP_SUB: u32 = 0x2152_4111;
const STEP_XOR: u32 = 0xDEAD_BEEF;

/// Encrypt or decrypt `buf` in place.
pub fn apply_cipher(buf: &mut [u8], key: u32) {
    let mut state = key;

    let mut words = buf.chunks_exact_mut(4);
    for word in &mut words {
        let plain = BigEndian::read_u32(word) ^ state;
        BigEndian::write_u32(word, plain);
        state = state.wrapping_sub(STEP_SUB) ^ STEP_XOR;
    }

    let keystream = state.to_be_bytes();
    for (byte, k) in words.into_remainder().iter_mut().zip(keystream) {
        *byte ^= k;
    }
}
