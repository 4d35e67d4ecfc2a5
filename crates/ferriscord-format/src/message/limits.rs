/// Longest message the service accepts, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// The composer starts showing a countdown below this many characters left.
pub const WARN_REMAINING: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimits {
    pub max_length: usize,
    pub warn_remaining: usize,
}

impl Default for MessageLimits {
    fn default() -> Self {
        Self {
            max_length: MAX_MESSAGE_LENGTH,
            warn_remaining: WARN_REMAINING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthStatus {
    Ok,
    NearLimit { remaining: usize },
    OverLimit { excess: usize },
}

impl MessageLimits {
    pub fn new(max_length: usize, warn_remaining: usize) -> Self {
        Self {
            max_length,
            warn_remaining,
        }
    }

    /// Classifies `content` by character count.
    pub fn check(&self, content: &str) -> LengthStatus {
        let len = content.chars().count();
        if len > self.max_length {
            return LengthStatus::OverLimit {
                excess: len - self.max_length,
            };
        }
        let remaining = self.max_length - len;
        if remaining < self.warn_remaining {
            LengthStatus::NearLimit { remaining }
        } else {
            LengthStatus::Ok
        }
    }

    /// Non-blank and within the limit.
    pub fn can_send(&self, content: &str) -> bool {
        !content.trim().is_empty()
            && !matches!(self.check(content), LengthStatus::OverLimit { .. })
    }
}
