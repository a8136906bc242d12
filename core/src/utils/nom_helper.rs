/**
 * Binary artifacts are parsed by taking X bytes and converting them to a number.
 * The `*_at` helpers read a field at a fixed offset and always check the
 * offset and width against the real length of the slice first.
 * Size fields embedded in the data are never used to decide how far to read
 */
use nom::{
    bytes::complete::take,
    number::complete::{be_u32, be_u64, le_u32, le_u64},
};
use std::mem::size_of;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Endian {
    /**Little Endian */
    Le,
    /**Big Endian */
    #[allow(dead_code)]
    Be,
}

/**
 * Nom four (4) bytes to u32
 * Need to specify Endianess
 */
pub(crate) fn nom_unsigned_four_bytes(data: &[u8], endian: Endian) -> nom::IResult<&[u8], u32> {
    let (input, value_data) = take(size_of::<u32>())(data)?;

    let (_, value) = match endian {
        Endian::Le => le_u32(value_data)?,
        Endian::Be => be_u32(value_data)?,
    };

    Ok((input, value))
}

/**
 * Nom eight (8) bytes to u64
 * Need to specify Endianess
 */
pub(crate) fn nom_unsigned_eight_bytes(data: &[u8], endian: Endian) -> nom::IResult<&[u8], u64> {
    let (input, value_data) = take(size_of::<u64>())(data)?;

    let (_, value) = match endian {
        Endian::Le => le_u64(value_data)?,
        Endian::Be => be_u64(value_data)?,
    };
    Ok((input, value))
}

/// Slice `width` bytes starting at `offset`. `None` if any of it falls outside `data`
fn field_at(data: &[u8], offset: usize, width: usize) -> Option<&[u8]> {
    let end = offset.checked_add(width)?;
    data.get(offset..end)
}

/// Read a u32 at `offset`. `None` if the slice is too short
pub(crate) fn u32_at(data: &[u8], offset: usize, endian: Endian) -> Option<u32> {
    let field = field_at(data, offset, size_of::<u32>())?;
    let (_, value) = nom_unsigned_four_bytes(field, endian).ok()?;
    Some(value)
}

/// Read a u64 at `offset`. `None` if the slice is too short
pub(crate) fn u64_at(data: &[u8], offset: usize, endian: Endian) -> Option<u64> {
    let field = field_at(data, offset, size_of::<u64>())?;
    let (_, value) = nom_unsigned_eight_bytes(field, endian).ok()?;
    Some(value)
}
