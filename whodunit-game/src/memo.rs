use crate::config::Configuration;

/// Remembers the last configuration the service accepted, for "regenerate".
///
/// Only successful submissions are recorded; edits to the setup form never
/// touch the memo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMemo {
    last: Option<Configuration>,
}

impl RequestMemo {
    pub fn remember(&mut self, request: Configuration) {
        self.last = Some(request);
    }

    #[must_use]
    pub const fn last(&self) -> Option<&Configuration> {
        self.last.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// The request to resend verbatim, if any.
    #[must_use]
    pub fn regenerate_request(&self) -> Option<Configuration> {
        self.last.clone()
    }

    /// Whether regenerating is expected to reproduce the same game.
    ///
    /// Only seeded requests carry that expectation.
    #[must_use]
    pub fn expects_reproducible(&self) -> bool {
        self.last.as_ref().is_some_and(|req| req.seed.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tone;

    fn request(seed: Option<i64>) -> Configuration {
        Configuration {
            player_count: 6,
            player_names: None,
            category_id: String::from("random"),
            tone: Tone::Serious,
            duration: 45,
            seed,
        }
    }

    #[test]
    fn starts_empty() {
        let memo = RequestMemo::default();
        assert!(memo.is_empty());
        assert_eq!(memo.regenerate_request(), None);
        assert!(!memo.expects_reproducible());
    }

    #[test]
    fn remember_replaces_previous_request() {
        let mut memo = RequestMemo::default();
        memo.remember(request(None));
        memo.remember(request(Some(7)));
        assert_eq!(memo.last().and_then(|r| r.seed), Some(7));
        assert!(memo.expects_reproducible());
        assert_eq!(memo.regenerate_request(), Some(request(Some(7))));
    }
}
