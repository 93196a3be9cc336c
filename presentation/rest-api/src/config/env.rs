use anyhow::bail;

/// Looks up a configuration variable by name.
///
/// Production code reads the process environment; tests pass a map so they
/// never touch global state.
pub type EnvSource<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Non-blank value of `key`, trimmed.
pub fn optional(source: EnvSource, key: &str) -> Option<String> {
    source(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn string_or(source: EnvSource, key: &str, default: &str) -> String {
    optional(source, key).unwrap_or_else(|| default.to_string())
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

pub fn bool_or(source: EnvSource, key: &str, default: bool) -> anyhow::Result<bool> {
    match optional(source, key) {
        None => Ok(default),
        Some(raw) => match parse_bool(&raw) {
            Some(value) => Ok(value),
            None => bail!("{key} must be a boolean (true/false/1/0/yes/no), got {raw:?}"),
        },
    }
}

pub fn parse_or<T: std::str::FromStr>(
    source: EnvSource,
    key: &str,
    default: T,
) -> anyhow::Result<T> {
    match optional(source, key) {
        None => Ok(default),
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => bail!("{key} has an invalid value: {raw:?}"),
        },
    }
}

#[cfg(test)]
pub fn map_source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}
