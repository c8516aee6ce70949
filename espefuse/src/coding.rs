//! eFuse coding schemes
//!
//! Every block besides BLOCK0 may be protected by redundancy coding. The
//! functions in this module translate between the logical bytes of a block
//! and the physical words which are actually burned into it, and report any
//! discrepancies found while decoding.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::Error;

/// Number of copies kept by the [CodingScheme::Repeat] scheme
pub const REPEAT_FACTOR: usize = 2;

/// Number of check words following the data words of a Reed-Solomon block
pub const RS_CHECK_WORDS: usize = 3;

const RS_ECC_LEN: usize = RS_CHECK_WORDS * 4;
const RS_MAX_DATA_LEN: usize = 32;

/// Redundancy coding applied to the contents of an eFuse block
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    VariantNames,
    Deserialize,
    Serialize,
)]
#[non_exhaustive]
pub enum CodingScheme {
    /// Data is stored as-is
    #[default]
    #[serde(rename = "none")]
    None,
    /// Every 6 bytes of data are followed by 2 check bytes
    #[strum(serialize = "3/4")]
    #[serde(rename = "3/4")]
    ThreeFour,
    /// Data is stored [REPEAT_FACTOR] times
    #[serde(rename = "repeat")]
    Repeat,
    /// Data is followed by 12 bytes of Reed-Solomon parity
    #[strum(serialize = "Reed-Solomon")]
    #[serde(rename = "reed-solomon")]
    ReedSolomon,
}

impl CodingScheme {
    /// Payload lengths must be a multiple of this many bytes.
    pub fn unit_len(self) -> usize {
        match self {
            CodingScheme::ThreeFour => 6,
            _ => 4,
        }
    }

    /// Number of logical bytes held by a block of `data_words` words.
    pub fn logical_len(self, data_words: usize) -> usize {
        match self {
            CodingScheme::None | CodingScheme::ReedSolomon => data_words * 4,
            CodingScheme::ThreeFour => data_words * 3,
            CodingScheme::Repeat => data_words * 4 / REPEAT_FACTOR,
        }
    }

    /// Number of physical words, check words included, of a block of
    /// `data_words` words.
    pub fn physical_words(self, data_words: usize) -> usize {
        match self {
            CodingScheme::ReedSolomon => data_words + RS_CHECK_WORDS,
            _ => data_words,
        }
    }

    /// Size of the unit which can be programmed only once.
    ///
    /// Changing any bit of an already programmed unit would require clearing
    /// check bits, so these units are write-once as a whole. Returns `None`
    /// for schemes where every bit may be set independently.
    pub fn program_unit(self, logical_len: usize) -> Option<usize> {
        match self {
            CodingScheme::ThreeFour => Some(6),
            CodingScheme::ReedSolomon => Some(logical_len),
            CodingScheme::None | CodingScheme::Repeat => None,
        }
    }
}

/// Error counters gathered while decoding a block
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStatus {
    /// Discrepancies which were corrected (bits for Repeat, bytes for RS)
    pub corrected: u32,
    /// Coding units which could not be recovered
    pub failed: u32,
}

impl DecodeStatus {
    /// Whether any error, corrected or not, was seen.
    pub fn has_error(&self) -> bool {
        self.corrected > 0 || self.failed > 0
    }

    /// Whether the decoded value can be trusted.
    pub fn is_recoverable(&self) -> bool {
        self.failed == 0
    }
}

/// Result of decoding a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    pub status: DecodeStatus,
}

fn check_length(scheme: CodingScheme, len: usize) -> Result<(), Error> {
    let valid = len % scheme.unit_len() == 0
        && match scheme {
            CodingScheme::ReedSolomon => len > 0 && len <= RS_MAX_DATA_LEN,
            _ => true,
        };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidLength { scheme, len })
    }
}

/// Encode logical bytes into the physical words to be burned.
pub fn encode(scheme: CodingScheme, logical: &[u8]) -> Result<Vec<u32>, Error> {
    check_length(scheme, logical.len())?;

    let bytes = match scheme {
        CodingScheme::None => logical.to_vec(),
        CodingScheme::Repeat => logical.repeat(REPEAT_FACTOR),
        CodingScheme::ThreeFour => logical.chunks_exact(6).flat_map(encode_34_group).collect(),
        CodingScheme::ReedSolomon => {
            let codeword = reed_solomon::Encoder::new(RS_ECC_LEN).encode(&rs_padded(logical));
            let mut bytes = logical.to_vec();
            bytes.extend_from_slice(codeword.ecc());
            bytes
        }
    };

    Ok(to_words(&bytes))
}

/// Decode physical words back into logical bytes.
pub fn decode(scheme: CodingScheme, physical: &[u32]) -> Result<Decoded, Error> {
    let bytes = to_bytes(physical);

    match scheme {
        CodingScheme::None => Ok(Decoded {
            bytes,
            status: DecodeStatus::default(),
        }),
        CodingScheme::Repeat => decode_repeat(physical),
        CodingScheme::ThreeFour => decode_34(&bytes),
        CodingScheme::ReedSolomon => decode_rs(bytes),
    }
}

/// The 3/4 transform as implemented by the ESP32 boot ROM.
///
/// Six data bytes are followed by their XOR and by the sum of each byte's
/// population count weighted with its 1-based position.
fn encode_34_group(data: &[u8]) -> [u8; 8] {
    let mut group = [0u8; 8];
    group[..6].copy_from_slice(data);

    let mut xor = 0u8;
    let mut mul = 0u8;
    for (i, byte) in data.iter().enumerate() {
        xor ^= byte;
        mul = mul.wrapping_add((i as u8 + 1).wrapping_mul(byte.count_ones() as u8));
    }

    group[6] = xor;
    group[7] = mul;
    group
}

fn decode_34(bytes: &[u8]) -> Result<Decoded, Error> {
    if bytes.len() % 8 != 0 {
        return Err(Error::InvalidLength {
            scheme: CodingScheme::ThreeFour,
            len: bytes.len(),
        });
    }

    let mut decoded = Decoded {
        bytes: Vec::with_capacity(bytes.len() / 8 * 6),
        status: DecodeStatus::default(),
    };

    for group in bytes.chunks_exact(8) {
        let data = &group[..6];
        if encode_34_group(data)[6..] != group[6..] {
            decoded.status.failed += 1;
        }
        decoded.bytes.extend_from_slice(data);
    }

    Ok(decoded)
}

fn decode_repeat(physical: &[u32]) -> Result<Decoded, Error> {
    if physical.len() % REPEAT_FACTOR != 0 {
        return Err(Error::InvalidLength {
            scheme: CodingScheme::Repeat,
            len: physical.len() * 4,
        });
    }

    let n = physical.len() / REPEAT_FACTOR;
    let mut status = DecodeStatus::default();
    let mut words = Vec::with_capacity(n);

    for i in 0..n {
        let copies = (0..REPEAT_FACTOR).map(|k| physical[k * n + i]);
        let any = copies.clone().fold(0, |acc, w| acc | w);
        let all = copies.clone().fold(u32::MAX, |acc, w| acc & w);

        // Majority vote per bit, ties resolve to 1.
        let mut word = 0u32;
        for bit in 0..32 {
            let set = copies.clone().filter(|w| w & (1 << bit) != 0).count();
            if set * 2 >= REPEAT_FACTOR {
                word |= 1 << bit;
            }
        }

        status.corrected += (any ^ all).count_ones();
        words.push(word);
    }

    Ok(Decoded {
        bytes: to_bytes(&words),
        status,
    })
}

/// Data registers of a Reed-Solomon block, the unused ones read as zero.
///
/// The controller always computes parity over all of them.
fn rs_padded(data: &[u8]) -> Vec<u8> {
    let mut padded = data.to_vec();
    padded.resize(RS_MAX_DATA_LEN, 0);
    padded
}

fn decode_rs(bytes: Vec<u8>) -> Result<Decoded, Error> {
    if bytes.len() <= RS_ECC_LEN || (bytes.len() - RS_ECC_LEN) > RS_MAX_DATA_LEN {
        return Err(Error::InvalidLength {
            scheme: CodingScheme::ReedSolomon,
            len: bytes.len(),
        });
    }

    let data_len = bytes.len() - RS_ECC_LEN;
    let (data, ecc) = bytes.split_at(data_len);

    let mut codeword = rs_padded(data);
    codeword.extend_from_slice(ecc);

    let decoder = reed_solomon::Decoder::new(RS_ECC_LEN);
    if !decoder.is_corrupted(&codeword) {
        return Ok(Decoded {
            bytes: data.to_vec(),
            status: DecodeStatus::default(),
        });
    }

    let uncorrectable = Decoded {
        bytes: data.to_vec(),
        status: DecodeStatus {
            corrected: 0,
            failed: 1,
        },
    };

    let Ok(recovered) = decoder.correct(&codeword, None) else {
        return Ok(uncorrectable);
    };

    // Registers beyond the block do not exist, a correction touching them is bogus
    if recovered.data()[data_len..].iter().any(|b| *b != 0) {
        return Ok(uncorrectable);
    }

    let corrected = recovered
        .iter()
        .zip(codeword.iter())
        .filter(|(a, b)| a != b)
        .count();

    Ok(Decoded {
        bytes: recovered.data()[..data_len].to_vec(),
        status: DecodeStatus {
            corrected: corrected as u32,
            failed: 0,
        },
    })
}

/// Pack bytes into little-endian words, the final partial word is padded
/// with zeroes.
pub(crate) fn to_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

pub(crate) fn to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_round_trip() {
        let data = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04];
        let words = encode(CodingScheme::None, &data).unwrap();
        assert_eq!(words, vec![0xefbe_adde, 0x0403_0201]);

        let decoded = decode(CodingScheme::None, &words).unwrap();
        assert_eq!(decoded.bytes, data);
        assert!(!decoded.status.has_error());
    }

    #[test]
    fn three_four_matches_rom_transform() {
        let words = encode(CodingScheme::ThreeFour, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(to_bytes(&words), vec![1, 2, 3, 4, 5, 6, 0x07, 0x23]);
    }

    #[test]
    fn three_four_round_trip() {
        let data: Vec<u8> = (0u8..24).map(|b| b.wrapping_mul(37) ^ 0x5a).collect();
        let words = encode(CodingScheme::ThreeFour, &data).unwrap();

        // 8 physical bytes for every 6 logical bytes
        assert_eq!(words.len() * 4, data.len() / 6 * 8);

        let decoded = decode(CodingScheme::ThreeFour, &words).unwrap();
        assert_eq!(decoded.bytes, data);
        assert!(!decoded.status.has_error());
    }

    #[test]
    fn three_four_detects_missing_check_bits() {
        let mut words = encode(CodingScheme::ThreeFour, &[0xff; 6]).unwrap();
        // Drop a bit from the checksum byte
        words[1] &= !(1 << 31);

        let decoded = decode(CodingScheme::ThreeFour, &words).unwrap();
        assert_eq!(decoded.bytes, vec![0xff; 6]);
        assert_eq!(decoded.status.failed, 1);
    }

    #[test]
    fn three_four_rejects_partial_group() {
        let err = encode(CodingScheme::ThreeFour, &[0; 4]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                scheme: CodingScheme::ThreeFour,
                len: 4
            }
        ));
    }

    #[test]
    fn repeat_layout_and_vote() {
        let words = encode(CodingScheme::Repeat, &[0x11, 0x22, 0x33, 0x44, 0, 0, 0, 0x80]).unwrap();
        assert_eq!(
            words,
            vec![0x4433_2211, 0x8000_0000, 0x4433_2211, 0x8000_0000]
        );

        let mut damaged = words.clone();
        damaged[0] = 0x4433_2210;
        let decoded = decode(CodingScheme::Repeat, &damaged).unwrap();
        assert_eq!(decoded.bytes, vec![0x11, 0x22, 0x33, 0x44, 0, 0, 0, 0x80]);
        assert_eq!(decoded.status.corrected, 1);
        assert!(decoded.status.is_recoverable());
    }

    #[test]
    fn reed_solomon_round_trip() {
        let data: Vec<u8> = (0u8..32).collect();
        let words = encode(CodingScheme::ReedSolomon, &data).unwrap();
        assert_eq!(words.len(), 8 + RS_CHECK_WORDS);

        let decoded = decode(CodingScheme::ReedSolomon, &words).unwrap();
        assert_eq!(decoded.bytes, data);
        assert!(!decoded.status.has_error());
    }

    #[test]
    fn reed_solomon_corrects_single_byte() {
        let data = [0xa5u8; 24];
        let mut words = encode(CodingScheme::ReedSolomon, &data).unwrap();
        words[2] ^= 0x0000_ff00;

        let decoded = decode(CodingScheme::ReedSolomon, &words).unwrap();
        assert_eq!(decoded.bytes, data);
        assert_eq!(decoded.status.corrected, 1);
        assert!(decoded.status.is_recoverable());
    }

    #[test]
    fn reed_solomon_parity_covers_unused_registers() {
        let data: Vec<u8> = (1u8..=24).collect();
        let short = encode(CodingScheme::ReedSolomon, &data).unwrap();

        let mut full = data.clone();
        full.resize(32, 0);
        let full = encode(CodingScheme::ReedSolomon, &full).unwrap();

        assert_eq!(short.len(), 6 + RS_CHECK_WORDS);
        assert_eq!(&short[..6], &full[..6]);
        assert_eq!(&short[6..], &full[8..]);

        let decoded = decode(CodingScheme::ReedSolomon, &short).unwrap();
        assert_eq!(decoded.bytes, data);
        assert!(!decoded.status.has_error());
    }

    #[test]
    fn reed_solomon_corrects_check_words_of_short_block() {
        let data = [0x3cu8; 24];
        let mut words = encode(CodingScheme::ReedSolomon, &data).unwrap();
        words[7] ^= 0x0001_0000;

        let decoded = decode(CodingScheme::ReedSolomon, &words).unwrap();
        assert_eq!(decoded.bytes, data);
        assert_eq!(decoded.status.corrected, 1);
    }

    #[test]
    fn reed_solomon_all_zero_block() {
        let words = encode(CodingScheme::ReedSolomon, &[0; 32]).unwrap();
        assert!(words.iter().all(|w| *w == 0));
    }

    #[test]
    fn layout_sizes() {
        assert_eq!(CodingScheme::None.logical_len(8), 32);
        assert_eq!(CodingScheme::ThreeFour.logical_len(8), 24);
        assert_eq!(CodingScheme::Repeat.logical_len(8), 16);
        assert_eq!(CodingScheme::ReedSolomon.physical_words(6), 9);
        assert_eq!("3/4".parse::<CodingScheme>().unwrap(), CodingScheme::ThreeFour);
    }
}
