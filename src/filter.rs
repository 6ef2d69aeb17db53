use crate::geo;
use crate::model::{Area, FilterCriteria, PowerFilter, RepeaterRecord};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

impl FilterCriteria {
    /// Selection predicates, applied to the record as it comes from the catalog.
    pub fn accept(&self, r: &RepeaterRecord) -> bool {
        if !r.rx.starts_with(self.band.leading_digit()) {
            return false;
        }
        match &self.area {
            Area::Prefixes(prefixes) => {
                let id = r.id.to_string();
                if !prefixes.iter().any(|p| id.starts_with(p.as_str())) {
                    return false;
                }
            }
            Area::Radius { lat, lon, radius_km } => {
                if geo::great_circle_km((*lat, *lon), (r.lat, r.lng)) > *radius_km {
                    return false;
                }
            }
        }
        if let Some(power) = self.power {
            if !power_passes(power, r.pep.as_deref()) {
                return false;
            }
        }
        if self.six_digit_only && r.id.to_string().len() != 6 {
            return false;
        }
        if let Some(needle) = &self.callsign_contains {
            if !r.callsign.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

fn power_passes(filter: PowerFilter, pep: Option<&str>) -> bool {
    let Some(pep) = pep.filter(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) else {
        return false;
    };
    // digits only, so the parse can only overflow
    let watts = pep.parse::<u64>().unwrap_or(u64::MAX);
    match filter {
        PowerFilter::AnyDefined => watts > 0,
        PowerFilter::AtLeast(min) => watts > 0 && watts >= u64::from(min),
    }
}

/// First whitespace-delimited token of the callsign, or the ID when it is blank.
pub fn normalize_callsign(r: &RepeaterRecord) -> String {
    r.callsign
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| r.id.to_string())
}

/// Selects, deduplicates and numbers the repeaters matching `criteria`.
///
/// Output keeps the (callsign, id) sort order. Every retained record has a
/// normalized callsign and a `turn` counting its same-callsign predecessors
/// (1-based), so no two records share (rx, tx, callsign).
pub fn filter_catalog(mut catalog: Vec<RepeaterRecord>, criteria: &FilterCriteria) -> Vec<RepeaterRecord> {
    catalog.sort_by(|a, b| a.callsign.cmp(&b.callsign).then(a.id.cmp(&b.id)));

    let mut out: Vec<RepeaterRecord> = Vec::new();
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    let mut turns: HashMap<String, u32> = HashMap::new();

    for mut r in catalog {
        if !criteria.accept(&r) {
            trace!("drop {} {:?}", r.id, r.callsign);
            continue;
        }
        r.callsign = normalize_callsign(&r);

        if !seen.insert((r.rx.clone(), r.tx.clone(), r.callsign.clone())) {
            debug!("duplicate {} {} {} (id {})", r.callsign, r.rx, r.tx, r.id);
            continue;
        }

        let turn = turns.entry(r.callsign.clone()).or_insert(0);
        *turn += 1;
        r.turn = *turn;
        out.push(r);
    }
    debug!("filter kept {} repeaters", out.len());
    out
}
