use std::{str::FromStr, time::Duration};

/// Retrieves the value of the environment variable as a whole number of seconds, or the default if unset.
pub fn seconds_from_env(env_var_name: &str, default_s: u64) -> Result<Duration, String> {
    let seconds: u64 = number_from_env(env_var_name, default_s)?;
    Ok(Duration::from_secs(seconds))
}

/// Parses the environment variable's trimmed value, falling back to the default if unset.
pub fn number_from_env<N>(env_var_name: &str, default: N) -> Result<N, String>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    match std::env::var(env_var_name) {
        Ok(v) => v
            .trim()
            .parse::<N>()
            .map_err(|e| format!("{} must be a valid number: {}", env_var_name, e)),
        Err(_) => Ok(default),
    }
}

/// The environment variable's value if set and non-empty, otherwise the default.
pub fn string_from_env(env_var_name: &str, default: &str) -> String {
    match std::env::var(env_var_name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_vars_use_defaults() {
        let var = "TCV_TEST_DEFINITELY_UNSET_VAR";
        assert_eq!(seconds_from_env(var, 7), Ok(Duration::from_secs(7)));
        assert_eq!(number_from_env::<u32>(var, 3), Ok(3));
        assert_eq!(string_from_env(var, "fallback"), "fallback");
    }
}
