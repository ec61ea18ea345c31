use cosmwasm_std::Uint256;

/// Maps a 32 byte random value to an entry index in `0..participants`.
/// Returns `None` for an empty participant sequence.
///
/// The value is interpreted as a big-endian 256 bit unsigned integer and
/// reduced modulo the participant count. Plain modulo reduction is biased
/// towards low indices, but with a 256 bit input and participant counts
/// that fit a u32 the bias is on the order of 2^-224 and not worth a
/// rejection sampling loop.
pub fn select_winner_index(randomness: [u8; 32], participants: u32) -> Option<u32> {
    if participants == 0 {
        return None;
    }
    let value = Uint256::from_be_bytes(randomness);
    let index = value.checked_rem(Uint256::from(participants)).ok()?;
    // The remainder is smaller than `participants`, so it fits the low 4 bytes
    let bytes = index.to_be_bytes();
    let mut low = [0u8; 4];
    low.copy_from_slice(&bytes[28..]);
    Some(u32::from_be_bytes(low))
}
