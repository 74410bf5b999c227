pub(crate) fn to_u16_le(lo: u8, hi: u8) -> u16 {
    ((hi as u16) << 8) + (lo as u16)
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}
