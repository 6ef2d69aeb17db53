use crate::model::{ChannelKind, ZoneRecord, REPEATER_URL};

const HEADERS: [&str; 7] = ["Channel", "RX", "TX", "CC", "City", "Last seen", "URL"];

fn row(ch: &crate::model::ChannelRecord) -> [String; 7] {
    let mut url = format!("{}{}", REPEATER_URL, ch.origin.repeater_id);
    if let ChannelKind::Talkgroup { talkgroup, .. } = &ch.kind {
        url.push_str(&format!(" TG{}", talkgroup));
    }
    [
        ch.alias.clone(),
        ch.rx.clone(),
        ch.tx.clone(),
        ch.color_code.to_string(),
        ch.origin.city.clone(),
        ch.origin.last_seen.clone(),
        url,
    ]
}

/// Plain-text table of a zone's channels, one line per channel.
pub fn zone_table(zone: &ZoneRecord) -> String {
    let rows: Vec<[String; 7]> = zone.channels.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = cells.iter().zip(&widths).map(|(c, w)| format!("{:<w$}", c, w = *w)).collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("Zone: {}\n", zone.alias));
    out.push_str(&line(&HEADERS));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for r in &rows {
        let cells: Vec<&str> = r.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
        out.push('\n');
    }
    out
}
