pub const MISSING_WEBHOOK_URL: &str = "Missing webhook URL";
pub const MISSING_MESSAGE: &str = "Missing message";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub webhook_url: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.webhook_url.is_none() && self.message.is_none()
    }
}

/// Check the required fields. A field counts as missing when it is empty
/// or all-whitespace.
pub fn check(webhook_url: &str, message: &str) -> FieldErrors {
    FieldErrors {
        webhook_url: webhook_url.trim().is_empty().then_some(MISSING_WEBHOOK_URL),
        message: message.trim().is_empty().then_some(MISSING_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_present() {
        let errors = check("https://discord.com/api/webhooks/1/abc", "hello");
        assert!(errors.is_clear());
    }

    #[test]
    fn empty_webhook_url_is_missing() {
        let errors = check("", "hello");
        assert_eq!(errors.webhook_url, Some(MISSING_WEBHOOK_URL));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn whitespace_webhook_url_is_missing() {
        let errors = check("   \t", "hello");
        assert_eq!(errors.webhook_url, Some(MISSING_WEBHOOK_URL));
    }

    #[test]
    fn empty_message_is_missing() {
        let errors = check("https://discord.com/api/webhooks/1/abc", "");
        assert_eq!(errors.webhook_url, None);
        assert_eq!(errors.message, Some(MISSING_MESSAGE));
    }

    #[test]
    fn whitespace_message_is_missing() {
        let errors = check("https://discord.com/api/webhooks/1/abc", " \n ");
        assert_eq!(errors.message, Some(MISSING_MESSAGE));
    }

    #[test]
    fn both_blank_reports_both() {
        let errors = check("", "");
        assert_eq!(errors.webhook_url, Some(MISSING_WEBHOOK_URL));
        assert_eq!(errors.message, Some(MISSING_MESSAGE));
        assert!(!errors.is_clear());
    }
}
