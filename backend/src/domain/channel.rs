//! Client channel identification.
//!
//! The originating client category is signalled out-of-band (the `x-Device`
//! request header) and selects which field policy applies to a creation
//! request. The set of channels is closed and known at build time.

use std::fmt;

/// Originating client category used to select a field policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Mail-client onboarding: name plus contact email.
    Mail,
    /// Mobile onboarding: phone number only.
    Mobile,
    /// Web onboarding: full profile including passport data.
    Web,
}

impl Channel {
    /// Interpret the raw channel signal for the current request.
    ///
    /// The signal is trimmed before comparison. Any unknown or absent value
    /// resolves to `None`, the *unspecified* channel.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Channel;
    ///
    /// assert_eq!(Channel::from_signal(Some(" mobile ")), Some(Channel::Mobile));
    /// assert_eq!(Channel::from_signal(Some("kiosk")), None);
    /// assert_eq!(Channel::from_signal(None), None);
    /// ```
    #[must_use]
    pub fn from_signal(signal: Option<&str>) -> Option<Self> {
        match signal.map(str::trim) {
            Some("mail") => Some(Self::Mail),
            Some("mobile") => Some(Self::Mobile),
            Some("web") => Some(Self::Web),
            _ => None,
        }
    }

    /// Canonical wire token for this channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Mobile => "mobile",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
