use crate::errors::AppError;
use crate::model::TalkgroupSlot;
use anyhow::Context;
use log::{debug, trace};
use reqwest::blocking::Client;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

pub const BM_API_URL: &str = "https://api.brandmeister.network/v2";
const REQUEST_TIMEOUT_SECONDS: u64 = 60;
const NAME_LOOKUP_DELAY_MS: u64 = 200;

/// The remote repeater directory: device list, per-device talkgroups and talkgroup names.
pub trait Directory {
    /// Raw catalog bytes, to be cached verbatim.
    fn fetch_catalog(&self) -> Result<Vec<u8>, AppError>;
    fn repeater_talkgroups(&self, repeater_id: u32) -> Result<Vec<TalkgroupSlot>, AppError>;
    fn talkgroup_name(&self, talkgroup: &str) -> Result<Option<String>, AppError>;
}

pub struct BrandMeister {
    client: Client,
    base_url: String,
    name_delay: Duration,
}

impl BrandMeister {
    pub fn new(insecure: bool) -> Result<Self, AppError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(insecure)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| AppError::SourceUnavailable(format!("http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: BM_API_URL.to_string(),
            name_delay: Duration::from_millis(NAME_LOOKUP_DELAY_MS),
        })
    }

    fn get_json(&self, url: &str) -> anyhow::Result<Value> {
        trace!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {}", url))?
            .error_for_status()
            .with_context(|| format!("GET {}", url))?;
        resp.json::<Value>().with_context(|| format!("decode {}", url))
    }
}

impl Directory for BrandMeister {
    fn fetch_catalog(&self) -> Result<Vec<u8>, AppError> {
        let url = format!("{}/device", self.base_url);
        let fetch = || -> anyhow::Result<Vec<u8>> {
            let resp = self
                .client
                .get(&url)
                .send()
                .with_context(|| format!("GET {}", url))?
                .error_for_status()
                .with_context(|| format!("GET {}", url))?;
            Ok(resp.bytes().context("read body")?.to_vec())
        };
        fetch().map_err(|e| AppError::SourceUnavailable(format!("{:#}", e)))
    }

    fn repeater_talkgroups(&self, repeater_id: u32) -> Result<Vec<TalkgroupSlot>, AppError> {
        let url = format!("{}/device/{}/talkgroup", self.base_url, repeater_id);
        let body = self
            .get_json(&url)
            .map_err(|e| AppError::LookupDegraded(format!("talkgroups of {}: {:#}", repeater_id, e)))?;
        Ok(parse_talkgroups(&body))
    }

    fn talkgroup_name(&self, talkgroup: &str) -> Result<Option<String>, AppError> {
        let url = format!("{}/talkgroup/{}", self.base_url, talkgroup);
        let body = self.get_json(&url);
        std::thread::sleep(self.name_delay);
        let body = body.map_err(|e| AppError::LookupDegraded(format!("name of TG {}: {:#}", talkgroup, e)))?;
        Ok(body
            .get("Name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string))
    }
}

/// Keeps entries that carry both a talkgroup and a slot.
pub fn parse_talkgroups(body: &Value) -> Vec<TalkgroupSlot> {
    let Some(items) = body.as_array() else { return Vec::new() };
    items
        .iter()
        .filter_map(|tg| {
            let talkgroup = match tg.get("talkgroup")? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let slot = match tg.get("slot")? {
                Value::Number(n) => u8::try_from(n.as_u64()?).ok()?,
                Value::String(s) => s.trim().parse().ok()?,
                _ => return None,
            };
            Some(TalkgroupSlot { talkgroup, slot })
        })
        .collect()
}

/// Memoises per-repeater and per-talkgroup lookups for the length of one run.
/// Failed lookups are cached too, so a failing talkgroup is only asked once.
pub struct CachedDirectory<'a> {
    inner: &'a dyn Directory,
    talkgroups: RefCell<HashMap<u32, Vec<TalkgroupSlot>>>,
    names: RefCell<HashMap<String, Option<String>>>,
}

impl<'a> CachedDirectory<'a> {
    pub fn new(inner: &'a dyn Directory) -> Self {
        Self { inner, talkgroups: RefCell::new(HashMap::new()), names: RefCell::new(HashMap::new()) }
    }
}

impl Directory for CachedDirectory<'_> {
    fn fetch_catalog(&self) -> Result<Vec<u8>, AppError> {
        self.inner.fetch_catalog()
    }

    fn repeater_talkgroups(&self, repeater_id: u32) -> Result<Vec<TalkgroupSlot>, AppError> {
        if let Some(hit) = self.talkgroups.borrow().get(&repeater_id) {
            return Ok(hit.clone());
        }
        let fresh = self.inner.repeater_talkgroups(repeater_id);
        let entry = fresh.as_ref().map(Vec::clone).unwrap_or_default();
        self.talkgroups.borrow_mut().insert(repeater_id, entry);
        fresh
    }

    fn talkgroup_name(&self, talkgroup: &str) -> Result<Option<String>, AppError> {
        if let Some(hit) = self.names.borrow().get(talkgroup) {
            debug!("name cache hit for TG {}", talkgroup);
            return Ok(hit.clone());
        }
        let name = match self.inner.talkgroup_name(talkgroup) {
            Ok(name) => name,
            Err(e) => {
                self.names.borrow_mut().insert(talkgroup.to_string(), None);
                return Err(e);
            }
        };
        self.names.borrow_mut().insert(talkgroup.to_string(), name.clone());
        Ok(name)
    }
}
