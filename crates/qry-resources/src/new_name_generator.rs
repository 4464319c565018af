//! Collision-free name allocation.

/// Returns a name not rejected by `exists`, derived from `name`.
///
/// Tries `name` itself, then `prefix+name`, then `prefix+name+2`,
/// `prefix+name+3`, … The function is pure: it never records the returned
/// name, so the caller must mark it as taken before the next call or risk
/// being handed the same name twice.
pub fn generate(name: &str, prefix: &str, exists: impl Fn(&str) -> bool) -> String {
    if !exists(name) {
        return name.to_owned();
    }
    let mut candidate = format!("{prefix}{name}");
    let mut suffix = 2u64;
    while exists(&candidate) {
        candidate = format!("{prefix}{name}{suffix}");
        suffix += 1;
    }
    candidate
}

/// [`generate`] with an empty prefix.
pub fn generate_unprefixed(name: &str, exists: impl Fn(&str) -> bool) -> String {
    generate(name, "", exists)
}
