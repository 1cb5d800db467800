use crate::error::CoreError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lowercases and keeps ASCII alphanumerics only, so "Deal Done ✅",
/// "deal-done" and "DEAL DONE" all compare equal.
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

macro_rules! label_enum {
    ($name:ident, $err:ident, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn slug(self) -> String {
                self.label().to_ascii_lowercase().replace(' ', "-")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_label(s);
                if !wanted.is_empty() {
                    for candidate in Self::ALL {
                        if normalize_label(candidate.label()) == wanted {
                            return Ok(*candidate);
                        }
                    }
                }
                Err(CoreError::$err(s.trim().to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

label_enum!(Platform, InvalidPlatform, {
    LinkedIn => "LinkedIn",
    Email => "Email",
    Fiverr => "Fiverr",
    Upwork => "Upwork",
    Facebook => "Facebook",
    Instagram => "Instagram",
});

label_enum!(OutreachType, InvalidOutreachType, {
    Dm => "DM",
    ColdEmail => "Cold Email",
    GigProposal => "Gig Proposal",
    PostComment => "Post Comment",
    DirectCall => "Direct Call",
});

label_enum!(OutreachStatus, InvalidStatus, {
    Waiting => "Waiting",
    NoResponse => "No Response",
    DealDone => "Deal Done",
    FollowUpScheduled => "Follow-up Scheduled",
});
