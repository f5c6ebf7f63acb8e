// User-friendly startup error messages
//
// Turns configuration problems into actionable messages that say what to
// set or fix before starting the service again.

/// Format a missing API key error with helpful suggestions
pub fn missing_api_key_error(provider: &str, env_var: &str) -> String {
    format!(
        "{} API key is not set\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • {} is missing from the environment\n\
        • {} is set but empty\n\
        • No .env file in the working directory\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Export the key:\n\
           \x1b[36mexport {}=\"...\"\x1b[0m\n\n\
        2. Or add it to .env:\n\
           \x1b[36mecho '{}=...' >> .env\x1b[0m",
        provider, env_var, env_var, env_var, env_var
    )
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &str, error: &str) -> String {
    format!(
        "Failed to parse config file {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat {}\x1b[0m\n\n\
        2. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Unclosed brackets []\n\
           • allowed_origins must be an array of strings",
        path, error, path
    )
}

/// Format a bind failure with helpful suggestions
pub fn bind_error(address: &str, error: &str) -> String {
    format!(
        "Could not listen on {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check whether another process holds the port:\n\
           \x1b[36mlsof -i :{}\x1b[0m\n\n\
        2. Pick another address:\n\
           \x1b[36mmindwell serve --bind 127.0.0.1:8001\x1b[0m",
        address,
        error,
        address.rsplit(':').next().unwrap_or(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_names_variable() {
        let msg = missing_api_key_error("gemini", "GEMINI_API_KEY");
        assert!(msg.contains("export GEMINI_API_KEY"));
        assert!(msg.contains(".env"));
    }

    #[test]
    fn test_bind_error_extracts_port() {
        let msg = bind_error("127.0.0.1:8000", "address in use");
        assert!(msg.contains("lsof -i :8000"));
    }
}
