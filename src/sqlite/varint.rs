/// Utility for reading SQLite variable-length integers (varints).
///
/// A varint is 1-9 bytes, big-endian: each of the first 8 bytes contributes
/// 7 low bits, with the high bit set while more bytes follow. A 9th byte,
/// when reached, contributes all 8 of its bits verbatim.
pub trait Varint {
    /// Read a varint starting at `pos`.
    ///
    /// Returns the value and the number of bytes consumed, or `None` when
    /// the buffer ends before the varint terminates. Callers treat `None`
    /// as a malformed cell and abandon that sub-decode only.
    fn read_varint(&self, pos: usize) -> Option<(i64, usize)>;
}

impl Varint for [u8] {
    fn read_varint(&self, pos: usize) -> Option<(i64, usize)> {
        let mut value = 0i64;
        for i in 0..9 {
            let &byte = self.get(pos + i)?;
            if i == 8 {
                // The ninth byte has no continuation flag.
                return Some(((value << 8) | i64::from(byte), 9));
            }
            value = (value << 7) | i64::from(byte & 0x7f);
            if byte & 0x80 == 0 {
                return Some((value, i + 1));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canonical SQLite varint encoding, for round-trip checks.
    fn encode(value: i64) -> Vec<u8> {
        let mut v = value as u64;
        if v >> 56 != 0 {
            let mut buf = [0u8; 9];
            buf[8] = v as u8;
            v >>= 8;
            for i in (0..8).rev() {
                buf[i] = 0x80 | (v & 0x7f) as u8;
                v >>= 7;
            }
            return buf.to_vec();
        }
        let mut buf = Vec::new();
        loop {
            buf.push((v & 0x7f) as u8);
            v >>= 7;
            if v == 0 {
                break;
            }
        }
        buf.reverse();
        let last = buf.len() - 1;
        for b in &mut buf[..last] {
            *b |= 0x80;
        }
        buf
    }

    #[test]
    fn round_trips_every_width() {
        // Boundary values for each encoded width, 1 through 9 bytes.
        let cases: &[(i64, usize)] = &[
            (0, 1),
            (1, 1),
            (127, 1),
            (128, 2),
            (300, 2),
            (16383, 2),
            (16384, 3),
            ((1 << 21) - 1, 3),
            (1 << 21, 4),
            (1 << 28, 5),
            (1 << 35, 6),
            (1 << 42, 7),
            ((1 << 56) - 1, 8),
            (1 << 56, 9),
            (i64::MAX, 9),
            (-1, 9),
            (i64::MIN, 9),
        ];
        for &(value, width) in cases {
            let bytes = encode(value);
            assert_eq!(bytes.len(), width, "encoded width of {}", value);
            assert_eq!(
                bytes.read_varint(0),
                Some((value, width)),
                "round trip of {}",
                value
            );
        }
    }

    #[test]
    fn decodes_at_offset() {
        let bytes: &[u8] = &[0xff, 0x82, 0x2c];
        assert_eq!(bytes.read_varint(1), Some((300, 2)));
    }

    #[test]
    fn ninth_byte_is_verbatim() {
        let bytes: &[u8] = &[0xff; 9];
        assert_eq!(bytes.read_varint(0), Some((-1, 9)));
    }

    #[test]
    fn exhausted_buffer_fails() {
        let empty: &[u8] = &[];
        assert_eq!(empty.read_varint(0), None);
        let unterminated: &[u8] = &[0x80, 0x80, 0x80];
        assert_eq!(unterminated.read_varint(0), None);
        let short: &[u8] = &[0x2c];
        assert_eq!(short.read_varint(1), None);
    }
}
