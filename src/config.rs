/// Application-level constants
pub const APP_NAME: &str = "Caredesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "caredesk=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_caredesk() {
        assert_eq!(APP_NAME, "Caredesk");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_scopes_to_the_crate() {
        assert!(default_log_filter().starts_with("caredesk"));
    }
}
