//! Ad test mode enumerations
//!
//! `TestAdsMode` is the full set a developer can pick, including the Yandex
//! mediation sub-networks. `AdsInspectorTestMode` is its coarse projection.
//! Tags are the persisted representation and are case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse ad-network selection shown as a segmented control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdsInspectorTestMode {
    #[default]
    NoTest,
    Yandex,
    AdMob,
}

impl AdsInspectorTestMode {
    /// Declared order; segment indices index into this array
    pub const ALL: [AdsInspectorTestMode; 3] = [Self::NoTest, Self::Yandex, Self::AdMob];

    /// Tags of `ALL`, same order
    pub const TAGS: [&'static str; 3] = [
        Self::ALL[0].as_str(),
        Self::ALL[1].as_str(),
        Self::ALL[2].as_str(),
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoTest => "noTest",
            Self::Yandex => "yandex",
            Self::AdMob => "adMob",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == tag)
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or_default()
    }
}

/// Full test-ads selection, including Yandex sub-networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestAdsMode {
    #[default]
    NoTest,
    AdMob,
    Yandex,
    YandexBigo,
    YandexMintegral,
    YandexUnity,
    YandexLiftoff,
    YandexIronSource,
    YandexCharboost,
}

impl TestAdsMode {
    /// Declared order; this is the order choices are offered in
    pub const ALL: [TestAdsMode; 9] = [
        Self::NoTest,
        Self::AdMob,
        Self::Yandex,
        Self::YandexBigo,
        Self::YandexMintegral,
        Self::YandexUnity,
        Self::YandexLiftoff,
        Self::YandexIronSource,
        Self::YandexCharboost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoTest => "noTest",
            Self::AdMob => "adMob",
            Self::Yandex => "yandex",
            Self::YandexBigo => "yandexBigo",
            Self::YandexMintegral => "yandexMintegral",
            Self::YandexUnity => "yandexUnity",
            Self::YandexLiftoff => "yandexLiftoff",
            Self::YandexIronSource => "yandexIronSource",
            Self::YandexCharboost => "yandexCharboost",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == tag)
    }

    /// Bare `yandex` or any Yandex mediation sub-network
    pub fn is_yandex(&self) -> bool {
        !matches!(self, Self::NoTest | Self::AdMob)
    }

    /// Many-to-one projection onto the inspector mode
    pub fn collapse(&self) -> AdsInspectorTestMode {
        match self {
            Self::NoTest => AdsInspectorTestMode::NoTest,
            Self::AdMob => AdsInspectorTestMode::AdMob,
            _ => AdsInspectorTestMode::Yandex,
        }
    }
}

impl From<AdsInspectorTestMode> for TestAdsMode {
    /// Inverse of `collapse` that picks the bare tag; sub-networks are lost
    fn from(mode: AdsInspectorTestMode) -> Self {
        match mode {
            AdsInspectorTestMode::NoTest => Self::NoTest,
            AdsInspectorTestMode::Yandex => Self::Yandex,
            AdsInspectorTestMode::AdMob => Self::AdMob,
        }
    }
}

/// Tag that matches no variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeTag(pub String);

impl fmt::Display for UnknownModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownModeTag {}

impl FromStr for AdsInspectorTestMode {
    type Err = UnknownModeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownModeTag(s.to_string()))
    }
}

impl FromStr for TestAdsMode {
    type Err = UnknownModeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownModeTag(s.to_string()))
    }
}

impl fmt::Display for AdsInspectorTestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TestAdsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
