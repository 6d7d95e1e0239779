use super::constants::*;

/// Determines if the given data likely represents a DDS texture.
/// This is done by checking the 'MAGIC' header, 'DDS ' at offset 0 and minimum size.
/// For more accurate checking including header validation, use [`parse_dds`].
///
/// [`parse_dds`]: crate::dds::parse_dds::parse_dds
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == DDS_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::iter::repeat_n;

    #[rstest]
    #[case(124, true)]
    #[case(123, false)]
    fn likely_dds_requires_full_header(#[case] padding: usize, #[case] expected: bool) {
        let data = [0x44, 0x44, 0x53, 0x20]
            .into_iter()
            .chain(repeat_n(0, padding))
            .collect::<Vec<u8>>();
        assert_eq!(likely_dds(&data), expected);
    }

    #[test]
    fn likely_dds_rejects_invalid_header() {
        let invalid_data = repeat_n(0, 128).collect::<Vec<u8>>();
        assert!(!likely_dds(&invalid_data));
    }

    #[test]
    fn likely_dds_rejects_empty_data() {
        assert!(!likely_dds(&[]));
    }
}
