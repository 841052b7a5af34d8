use std::fmt::Write;

/// Space-separated uppercase hex, e.g. `00 03 00 00`.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        write!(s, "{b:02X}").unwrap();
    }
    s
}
