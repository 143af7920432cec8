/// Prefix of locally generated ticket identifiers.
pub const FALLBACK_PREFIX: &str = "TICKET-";

/// Number of random characters after the prefix.
pub const FALLBACK_SUFFIX_LEN: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a placeholder ticket id such as `TICKET-7QK2M9ZD`.
///
/// Uniqueness is best-effort: the source is non-cryptographic and issued ids
/// are not remembered.
pub fn generate_fallback_ticket_id() -> String {
    let suffix: String = (0..FALLBACK_SUFFIX_LEN)
        .map(|_| ALPHABET[fastrand::usize(..ALPHABET.len())] as char)
        .collect();
    format!("{FALLBACK_PREFIX}{suffix}")
}

/// Whether `id` has the shape of a generated fallback identifier.
pub fn is_fallback_ticket_id(id: &str) -> bool {
    id.strip_prefix(FALLBACK_PREFIX).is_some_and(|suffix| {
        suffix.len() == FALLBACK_SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    })
}
