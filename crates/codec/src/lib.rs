//! # Codec
//!
//! Byte-order conversion between host integers and the on-disk ("wire")
//! representation used by EmpDB files.
//!
//! Every multi-byte integer persisted by EmpDB is **big-endian**, regardless
//! of the host's native byte order. This crate is the only place in the
//! workspace that knows about byte order: the record format encodes and
//! decodes its fields exclusively through the helpers below.
//!
//! Two flavours are provided:
//!
//! - value conversions ([`host_to_wire_u16`], [`wire_to_host_u32`], ...) that
//!   mirror the classic `htons`/`ntohl` family and are pure inverses of each
//!   other;
//! - slice helpers ([`put_u16`], [`get_u32`], ...) that write/read a
//!   big-endian integer at a byte offset inside a fixed-size buffer. They
//!   store the wire value's native bytes, so every conversion goes through
//!   the value functions above.
//!
//! ## Example
//! ```rust
//! let mut buf = [0u8; 6];
//! codec::put_u16(&mut buf, 0, 1);
//! codec::put_u32(&mut buf, 2, 0x0102_0304);
//! assert_eq!(buf, [0, 1, 1, 2, 3, 4]);
//! assert_eq!(codec::get_u32(&buf, 2), 0x0102_0304);
//! ```

use byteorder::{BigEndian, ByteOrder, NativeEndian};

/// Converts a host-order `u16` into its wire (big-endian) representation.
#[inline]
pub fn host_to_wire_u16(value: u16) -> u16 {
    let mut wire = [0u8; 2];
    BigEndian::write_u16(&mut wire, value);
    u16::from_ne_bytes(wire)
}

/// Converts a host-order `u32` into its wire (big-endian) representation.
#[inline]
pub fn host_to_wire_u32(value: u32) -> u32 {
    let mut wire = [0u8; 4];
    BigEndian::write_u32(&mut wire, value);
    u32::from_ne_bytes(wire)
}

/// Converts a wire (big-endian) `u16` back into host order.
#[inline]
pub fn wire_to_host_u16(value: u16) -> u16 {
    BigEndian::read_u16(&value.to_ne_bytes())
}

/// Converts a wire (big-endian) `u32` back into host order.
#[inline]
pub fn wire_to_host_u32(value: u32) -> u32 {
    BigEndian::read_u32(&value.to_ne_bytes())
}

/// Writes `value` as big-endian into `buf[offset..offset + 2]`.
///
/// # Panics
///
/// Panics if the buffer is shorter than `offset + 2`. Callers work on
/// fixed-size arrays with constant field offsets, so this is a layout bug.
#[inline]
pub fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
    NativeEndian::write_u16(&mut buf[offset..offset + 2], host_to_wire_u16(value));
}

/// Writes `value` as big-endian into `buf[offset..offset + 4]`.
///
/// # Panics
///
/// Panics if the buffer is shorter than `offset + 4`.
#[inline]
pub fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    NativeEndian::write_u32(&mut buf[offset..offset + 4], host_to_wire_u32(value));
}

/// Reads a big-endian `u16` from `buf[offset..offset + 2]`.
///
/// # Panics
///
/// Panics if the buffer is shorter than `offset + 2`.
#[inline]
pub fn get_u16(buf: &[u8], offset: usize) -> u16 {
    wire_to_host_u16(NativeEndian::read_u16(&buf[offset..offset + 2]))
}

/// Reads a big-endian `u32` from `buf[offset..offset + 4]`.
///
/// # Panics
///
/// Panics if the buffer is shorter than `offset + 4`.
#[inline]
pub fn get_u32(buf: &[u8], offset: usize) -> u32 {
    wire_to_host_u32(NativeEndian::read_u32(&buf[offset..offset + 4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_order_is_big_endian() {
        // Whatever the host is, the wire value's in-memory bytes are big-endian.
        assert_eq!(host_to_wire_u16(0x0102).to_ne_bytes(), [0x01, 0x02]);
        assert_eq!(
            host_to_wire_u32(0x0102_0304).to_ne_bytes(),
            [0x01, 0x02, 0x03, 0x04]
        );
    }

    #[test]
    fn conversions_are_inverse() {
        for v in [0u16, 1, 0x00ff, 0xff00, 0x1234, u16::MAX] {
            assert_eq!(wire_to_host_u16(host_to_wire_u16(v)), v);
            assert_eq!(host_to_wire_u16(wire_to_host_u16(v)), v);
        }
        for v in [0u32, 1, 40, 0x00ff_00ff, 0xdead_beef, u32::MAX] {
            assert_eq!(wire_to_host_u32(host_to_wire_u32(v)), v);
            assert_eq!(host_to_wire_u32(wire_to_host_u32(v)), v);
        }
    }

    #[test]
    fn slice_helpers_agree_with_value_conversions() {
        let mut buf = [0u8; 4];
        put_u32(&mut buf, 0, 0xcafe_babe);
        assert_eq!(buf, host_to_wire_u32(0xcafe_babe).to_ne_bytes());
        assert_eq!(get_u32(&buf, 0), 0xcafe_babe);

        let mut buf = [0u8; 2];
        put_u16(&mut buf, 0, 0xbeef);
        assert_eq!(buf, host_to_wire_u16(0xbeef).to_ne_bytes());
        assert_eq!(get_u16(&buf, 0), 0xbeef);
    }

    #[test]
    fn wire_bytes_match_std_big_endian() {
        for v in [0u32, 1, 40, 0x0102_0304, 0xdead_beef, u32::MAX] {
            let mut buf = [0u8; 4];
            put_u32(&mut buf, 0, v);
            assert_eq!(buf, v.to_be_bytes());
            assert_eq!(host_to_wire_u32(v), u32::from_ne_bytes(v.to_be_bytes()));
            assert_eq!(wire_to_host_u32(u32::from_ne_bytes(buf)), v);
        }
        for v in [0u16, 1, 0x0102, 0xff00, u16::MAX] {
            let mut buf = [0u8; 2];
            put_u16(&mut buf, 0, v);
            assert_eq!(buf, v.to_be_bytes());
            assert_eq!(wire_to_host_u16(u16::from_ne_bytes(buf)), v);
        }
    }

    #[test]
    fn helpers_respect_offset() {
        let mut buf = [0xaau8; 8];
        put_u16(&mut buf, 3, 0x0102);
        assert_eq!(buf, [0xaa, 0xaa, 0xaa, 0x01, 0x02, 0xaa, 0xaa, 0xaa]);
        assert_eq!(get_u16(&buf, 3), 0x0102);
    }

    #[test]
    #[should_panic]
    fn get_past_end_panics() {
        let buf = [0u8; 3];
        get_u32(&buf, 0);
    }
}
