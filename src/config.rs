use log::info;
use std::env;

/// Environment variables consulted for the API base URL, most specific first.
pub const BASE_URL_ENV_VARS: &[&str] = &["WAGTAIL_API_URL", "API_BASE_URL"];

/// Base URL used when no environment variable is set (local Wagtail dev server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resolve the API base URL from an ordered list of environment variables,
/// falling back to `default`. Trailing slashes are stripped so endpoint
/// concatenation never produces `//`. Intended to run once at client
/// construction; the result is held as immutable state afterwards.
pub fn resolve_base_url(candidates: &[&str], default: &str) -> String {
    let raw = candidates
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| default.to_string());

    let base = raw.trim_end_matches('/').to_string();
    info!("[config] API base URL: {}", base);
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names: the process environment is
    // shared across concurrently running tests.

    #[test]
    fn test_default_when_no_env_set() {
        let url = resolve_base_url(&["WAGTAIL_TEST_UNSET_A"], "http://localhost:8000/api/v2");
        assert_eq!(url, "http://localhost:8000/api/v2");
    }

    #[test]
    fn test_first_set_candidate_wins() {
        unsafe {
            env::set_var("WAGTAIL_TEST_CASCADE_A", "https://cms.example.org/api/v2/");
            env::set_var("WAGTAIL_TEST_CASCADE_B", "https://other.example.org");
        }
        let url = resolve_base_url(
            &["WAGTAIL_TEST_CASCADE_A", "WAGTAIL_TEST_CASCADE_B"],
            "http://localhost:8000",
        );
        assert_eq!(url, "https://cms.example.org/api/v2");
    }

    #[test]
    fn test_empty_value_falls_through() {
        unsafe {
            env::set_var("WAGTAIL_TEST_EMPTY_A", "");
            env::set_var("WAGTAIL_TEST_EMPTY_B", "https://b.example.org");
        }
        let url = resolve_base_url(
            &["WAGTAIL_TEST_EMPTY_A", "WAGTAIL_TEST_EMPTY_B"],
            "http://localhost:8000",
        );
        assert_eq!(url, "https://b.example.org");
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let url = resolve_base_url(&["WAGTAIL_TEST_UNSET_B"], "http://localhost:8000///");
        assert_eq!(url, "http://localhost:8000");
    }
}
