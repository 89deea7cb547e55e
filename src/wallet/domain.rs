//! Domain-name helpers.

const VFX_SUFFIX: &str = ".vfx";
const KNOWN_SUFFIXES: [&str; 3] = [".vfx", ".btc", ".rbx"];

/// Trim, lowercase, and append `.vfx` when missing.
pub fn clean_vfx_domain(domain: &str) -> String {
    let mut cleaned = domain.trim().to_lowercase();
    if !cleaned.ends_with(VFX_SUFFIX) {
        cleaned.push_str(VFX_SUFFIX);
    }
    cleaned
}

/// `^[a-z0-9]+\.vfx$` after trimming and lowercasing.
pub fn is_valid_vfx_domain(domain: &str) -> bool {
    let domain = domain.trim().to_lowercase();
    match domain.strip_suffix(VFX_SUFFIX) {
        Some(name) => {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        }
        None => false,
    }
}

/// Label before the first `.` when the domain carries a known suffix.
pub fn domain_without_suffix(domain: &str) -> &str {
    if KNOWN_SUFFIXES.iter().any(|suffix| domain.contains(suffix)) {
        domain.split('.').next().unwrap_or(domain)
    } else {
        domain
    }
}
