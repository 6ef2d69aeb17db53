use crate::model::{ChannelRecord, RepeaterRecord, ZoneRecord};
use crate::render::{truncate_alias, ALIAS_MAX};

pub const DEFAULT_ZONE_CAPACITY: usize = 160;

/// Cuts the channel list into zones of at most `capacity` channels, keeping order.
/// A single zone is named `name`; several are numbered `name #1`, `name #2`, ...
pub fn partition(name: &str, channels: Vec<ChannelRecord>, capacity: usize) -> Vec<ZoneRecord> {
    let capacity = capacity.max(1);
    let chunks: Vec<Vec<ChannelRecord>> = channels.chunks(capacity).map(<[ChannelRecord]>::to_vec).collect();
    let numbered = chunks.len() > 1;

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, channels)| {
            let alias = if numbered { format!("{} #{}", name, i + 1) } else { name.to_string() };
            ZoneRecord { file_name: alias.clone(), alias, channels }
        })
        .collect()
}

/// `CALLSIGN_City` cut to the alias limit; the city gets whatever room the callsign leaves.
pub fn repeater_zone_alias(callsign: &str, city: &str) -> String {
    let len = callsign.chars().count();
    if len + 1 >= ALIAS_MAX {
        return truncate_alias(callsign);
    }
    let room = ALIAS_MAX - 1 - len;
    let city: String = city.chars().filter(|c| *c != ' ').take(room).collect();
    truncate_alias(&format!("{}_{}", callsign, city))
}

/// One zone per repeater in talkgroup mode; `None` when the repeater has no talkgroup channels.
pub fn repeater_zone(r: &RepeaterRecord, channels: Vec<ChannelRecord>) -> Option<ZoneRecord> {
    if channels.is_empty() {
        return None;
    }
    let city = r.city_name();
    Some(ZoneRecord {
        alias: repeater_zone_alias(&r.callsign, city),
        file_name: format!("{}_{}", r.callsign, city.replace(' ', "_")),
        channels,
    })
}
