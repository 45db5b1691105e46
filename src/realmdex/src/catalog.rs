//! Fixed enumerations that drive a realm export.
//!
//! Namespaces, regions and locales are closed sets. Their `ALL`/`EXPORTED`
//! constants define the iteration order of a run, which in turn fixes the
//! layout of the generated file.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Namespace
// ============================================================================

/// Game-version dataset queried from the realm index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Namespace {
    /// Current retail realms
    Retail,
    /// Progression classic realms
    ProgressionClassic,
    /// Classic era realms (Season of Discovery, Hardcore, Era)
    ClassicEra,
}

impl Namespace {
    /// All namespaces in export order
    pub const ALL: [Namespace; 3] = [
        Namespace::Retail,
        Namespace::ProgressionClassic,
        Namespace::ClassicEra,
    ];

    /// Dynamic namespace prefix, completed by a region code
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Retail => "dynamic-",
            Self::ProgressionClassic => "dynamic-classic-",
            Self::ClassicEra => "dynamic-classic1x-",
        }
    }

    /// Value of the `namespace` query parameter for a region
    pub fn api_namespace(&self, region: Region) -> String {
        format!("{}{}", self.prefix(), region.code())
    }

    /// Label compared against `GRM.GameVersion()` in the generated file
    pub fn game_version(&self) -> &'static str {
        match self {
            Self::Retail => "RETAIL",
            Self::ProgressionClassic => "CATA",
            Self::ClassicEra => "CLASSICERA",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retail => write!(f, "retail"),
            Self::ProgressionClassic => write!(f, "classic"),
            Self::ClassicEra => write!(f, "classic-era"),
        }
    }
}

impl std::str::FromStr for Namespace {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "retail" => Ok(Self::Retail),
            "classic" | "progression-classic" | "cata" => Ok(Self::ProgressionClassic),
            "classic-era" | "classicera" | "era" => Ok(Self::ClassicEra),
            _ => Err(CatalogError::UnknownNamespace(s.to_string())),
        }
    }
}

// ============================================================================
// Region
// ============================================================================

/// Regional API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Eu,
    Kr,
    Tw,
    Cn,
}

impl Region {
    /// Regions written to the export, in order.
    ///
    /// China is reachable for token and index requests but is served from
    /// separate hosts and is left out of the generated table; the addon maps
    /// it onto the US lists instead (see [`Region::lookup_alias`]).
    pub const EXPORTED: [Region; 4] = [Region::Us, Region::Eu, Region::Kr, Region::Tw];

    /// Every known region
    pub const ALL: [Region; 5] = [Region::Us, Region::Eu, Region::Kr, Region::Tw, Region::Cn];

    /// Lower-case region code used in hosts, namespaces and table keys
    pub fn code(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    /// OAuth token endpoint for this region
    pub fn oauth_url(&self) -> String {
        match self {
            Self::Cn => "https://www.battlenet.com.cn/oauth/token".to_string(),
            _ => format!("https://{}.battle.net/oauth/token", self.code()),
        }
    }

    /// Base URL of the data API for this region
    pub fn api_base(&self) -> String {
        match self {
            Self::Cn => "https://gateway.battlenet.com.cn".to_string(),
            _ => format!("https://{}.api.blizzard.com", self.code()),
        }
    }

    /// Realm index endpoint for this region
    pub fn realm_index_url(&self) -> String {
        format!("{}{}", self.api_base(), REALM_INDEX_PATH)
    }

    /// Region whose realm table the addon reads when running in this region
    pub fn lookup_alias(&self) -> Region {
        match self {
            Self::Cn => Self::Us,
            Self::Us | Self::Eu | Self::Kr | Self::Tw => *self,
        }
    }
}

/// Path of the realm index below the data API base
pub const REALM_INDEX_PATH: &str = "/data/wow/realm/index";

impl Default for Region {
    fn default() -> Self {
        Self::Us
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            "kr" => Ok(Self::Kr),
            "tw" => Ok(Self::Tw),
            "cn" => Ok(Self::Cn),
            _ => Err(CatalogError::UnknownRegion(s.to_string())),
        }
    }
}

// ============================================================================
// Locale
// ============================================================================

/// Language tag requested from the realm index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "ko_KR")]
    KoKr,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "es_MX")]
    EsMx,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "it_IT")]
    ItIt,
}

impl Locale {
    /// All locales in export order
    pub const ALL: [Locale; 11] = [
        Locale::EnUs,
        Locale::KoKr,
        Locale::FrFr,
        Locale::DeDe,
        Locale::ZhCn,
        Locale::EsEs,
        Locale::ZhTw,
        Locale::EsMx,
        Locale::RuRu,
        Locale::PtBr,
        Locale::ItIt,
    ];

    /// API locale tag, e.g. `en_US`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::KoKr => "ko_KR",
            Self::FrFr => "fr_FR",
            Self::DeDe => "de_DE",
            Self::ZhCn => "zh_CN",
            Self::EsEs => "es_ES",
            Self::ZhTw => "zh_TW",
            Self::EsMx => "es_MX",
            Self::RuRu => "ru_RU",
            Self::PtBr => "pt_BR",
            Self::ItIt => "it_IT",
        }
    }

    /// Table key used by the addon (`GetLocale()` value), e.g. `enUS`
    pub fn key(&self) -> String {
        self.tag().replace('_', "")
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(s) || l.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownLocale(s.to_string()))
    }
}

/// Number of realm index requests a run over these sets performs
pub fn request_count(namespaces: &[Namespace], regions: &[Region]) -> usize {
    namespaces.len() * regions.len() * Locale::ALL.len()
}
