use serde::{Deserialize, Deserializer};
use serde::de::Error as _;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const REPEATER_URL: &str = "https://brandmeister.network/?page=repeater&id=";

/// One entry of the repeater directory, as served by the catalog source.
/// `turn` is not part of the wire format; the filter stamps it.
#[derive(Clone, Debug, Deserialize)]
pub struct RepeaterRecord {
    #[serde(deserialize_with = "de_id")]
    pub id: u32,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub callsign: String,
    #[serde(deserialize_with = "de_text")]
    pub rx: String,
    #[serde(deserialize_with = "de_text")]
    pub tx: String,
    pub colorcode: u8,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub city: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub last_seen: String,
    #[serde(default, deserialize_with = "de_opt_pep")]
    pub pep: Option<String>,
    #[serde(skip)]
    pub turn: u32,
}

impl RepeaterRecord {
    pub fn url(&self) -> String {
        format!("{}{}", REPEATER_URL, self.id)
    }

    /// City without the comma-delimited region suffix.
    pub fn city_name(&self) -> &str {
        self.city.split(',').next().unwrap_or("").trim()
    }
}

fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("id out of range: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("non-numeric id: {:?}", s))),
        other => Err(D::Error::custom(format!("unexpected id: {}", other))),
    }
}

fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected text, got {}", other))),
    }
}

fn de_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected text, got {}", other))),
    }
}

fn de_opt_pep<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    })
}

/// A (talkgroup, timeslot) pair configured on a repeater.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TalkgroupSlot {
    pub talkgroup: String,
    pub slot: u8,
}

pub const VHF_LEADING_DIGIT: char = '1';
pub const UHF_LEADING_DIGIT: char = '4';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Vhf,
    Uhf,
}

impl Band {
    /// First digit of a receive frequency in this band.
    pub fn leading_digit(self) -> char {
        match self {
            Band::Vhf => VHF_LEADING_DIGIT,
            Band::Uhf => UHF_LEADING_DIGIT,
        }
    }
}

impl FromStr for Band {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vhf" => Ok(Band::Vhf),
            "uhf" => Ok(Band::Uhf),
            _ => Err(format!("unknown band {:?} (vhf|uhf)", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerFilter {
    /// Rated power must be defined and non-zero.
    AnyDefined,
    /// Rated power must be at least this many watts.
    AtLeast(u32),
}

impl PowerFilter {
    pub fn from_threshold(watts: u32) -> Self {
        if watts == 0 { PowerFilter::AnyDefined } else { PowerFilter::AtLeast(watts) }
    }
}

/// How the user picked the repeaters, before resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Mcc(String),
    Locator { locator: String, radius_km: f64 },
    Coordinates { lat: f64, lon: f64, radius_km: f64 },
}

/// Resolved selection: what the filter actually tests against.
#[derive(Clone, Debug, PartialEq)]
pub enum Area {
    Prefixes(Vec<String>),
    Radius { lat: f64, lon: f64, radius_km: f64 },
}

#[derive(Clone, Debug)]
pub struct FilterCriteria {
    pub band: Band,
    pub area: Area,
    pub power: Option<PowerFilter>,
    pub six_digit_only: bool,
    pub callsign_contains: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelKind {
    Standard,
    Talkgroup { talkgroup: String, display_name: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelRecord {
    pub alias: String,
    pub timeslot: u8,
    pub color_code: u8,
    pub rx: String,
    pub tx: String,
    /// "On system/site change" ARS roaming directive.
    pub roam_on_site_change: bool,
    pub kind: ChannelKind,
    pub origin: ChannelOrigin,
}

/// Where a channel came from; only used for the console report.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelOrigin {
    pub repeater_id: u32,
    pub callsign: String,
    pub city: String,
    pub last_seen: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoneRecord {
    pub alias: String,
    /// File stem, not length-bounded.
    pub file_name: String,
    pub channels: Vec<ChannelRecord>,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Vhf => write!(f, "vhf"),
            Band::Uhf => write!(f, "uhf"),
        }
    }
}
