use sqlgen_llm_sdk::Url;
use tracing::warn;

/// Port a stock Ollama server listens on
pub const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Turn a user-typed server address into a base URL
///
/// Blank input falls back to `fallback`; bare hosts get an `http://` scheme
/// and the Ollama port. The result never ends with `/`.
pub fn normalize_server_url(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return fallback.trim_end_matches('/').to_string();
    }

    if trimmed.eq_ignore_ascii_case("localhost") {
        return format!("http://localhost:{DEFAULT_OLLAMA_PORT}");
    }

    let lower = trimmed.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let mut url = match Url::parse(&with_scheme) {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, input = %trimmed, "Unparsable server URL, using default");
            return fallback.trim_end_matches('/').to_string();
        }
    };

    if url.port().is_none() && url.set_port(Some(DEFAULT_OLLAMA_PORT)).is_err() {
        warn!(input = %trimmed, "Server URL cannot carry a port, using default");
        return fallback.trim_end_matches('/').to_string();
    }

    url.as_str().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "http://172.16.15.112:11434";

    #[test]
    fn test_blank_uses_fallback() {
        assert_eq!(normalize_server_url("", FALLBACK), FALLBACK);
        assert_eq!(normalize_server_url("   ", FALLBACK), FALLBACK);
        assert_eq!(normalize_server_url("", "http://gpu:11434/"), "http://gpu:11434");
    }

    #[test]
    fn test_localhost_shortcut() {
        assert_eq!(
            normalize_server_url("LocalHost", FALLBACK),
            "http://localhost:11434"
        );
    }

    #[test]
    fn test_bare_host_gets_scheme_and_port() {
        assert_eq!(
            normalize_server_url("10.0.0.7", FALLBACK),
            "http://10.0.0.7:11434"
        );
    }

    #[test]
    fn test_explicit_port_and_scheme_kept() {
        assert_eq!(
            normalize_server_url("https://llm.internal:8443/", FALLBACK),
            "https://llm.internal:8443"
        );
        assert_eq!(
            normalize_server_url("127.0.0.1:5000", FALLBACK),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn test_trailing_slash_from_frontend_removed() {
        assert_eq!(
            normalize_server_url("http://localhost:11434/", FALLBACK),
            "http://localhost:11434"
        );
    }

    #[test]
    fn test_garbage_uses_fallback() {
        assert_eq!(normalize_server_url("http://[::1", FALLBACK), FALLBACK);
    }
}
