use crate::contacts::ContactTable;
use crate::directory::Directory;
use crate::errors::AppError;
use crate::model::{ChannelKind, ChannelOrigin, ChannelRecord, RepeaterRecord, TalkgroupSlot};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Longest alias the radio accepts.
pub const ALIAS_MAX: usize = 16;
const TS_SUFFIX_LEN: usize = " TS1".len();
pub const DEFAULT_CUSTOM_FILE: &str = "custom-values.xml";

/// Which kind of channels a run produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// One or two channels per repeater, zones cut by capacity.
    Standard,
    /// One channel per active talkgroup, one zone per repeater.
    Talkgroups,
}

pub fn truncate_alias(s: &str) -> String {
    s.chars().take(ALIAS_MAX).collect()
}

fn origin(r: &RepeaterRecord) -> ChannelOrigin {
    ChannelOrigin {
        repeater_id: r.id,
        callsign: r.callsign.clone(),
        city: r.city.clone(),
        last_seen: r.last_seen.clone(),
    }
}

/// Channels of a repeater in standard mode.
///
/// Simplex repeaters get a single timeslot 2 channel; duplex ones get a
/// TS1/TS2 pair where only TS1 roams on system/site change.
pub fn render_channels(r: &RepeaterRecord) -> Vec<ChannelRecord> {
    let base = if r.turn <= 1 { r.callsign.clone() } else { format!("{} #{}", r.callsign, r.turn) };
    let channel = |alias: String, timeslot: u8, roam: bool| ChannelRecord {
        alias: truncate_alias(&alias),
        timeslot,
        color_code: r.colorcode,
        rx: r.rx.clone(),
        tx: r.tx.clone(),
        roam_on_site_change: roam,
        kind: ChannelKind::Standard,
        origin: origin(r),
    };

    if r.rx == r.tx {
        vec![channel(base, 2, false)]
    } else {
        // the timeslot suffix must survive truncation
        let base: String = base.chars().take(ALIAS_MAX - TS_SUFFIX_LEN).collect();
        let base = base.trim_end();
        vec![channel(format!("{} TS1", base), 1, true), channel(format!("{} TS2", base), 2, false)]
    }
}

/// Resolves talkgroup display names: contact table first, then the directory.
pub struct NameResolver<'a> {
    contacts: Option<&'a ContactTable>,
    directory: &'a dyn Directory,
}

impl<'a> NameResolver<'a> {
    pub fn new(contacts: Option<&'a ContactTable>, directory: &'a dyn Directory) -> Self {
        Self { contacts, directory }
    }

    /// `None` when neither source knows the talkgroup; lookup failures are logged, not raised.
    pub fn lookup(&self, talkgroup: &str) -> Option<String> {
        if let Some(name) = self.contacts.and_then(|t| t.name_for(talkgroup)) {
            return Some(name.to_string());
        }
        match self.directory.talkgroup_name(talkgroup) {
            Ok(name) => name,
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }
}

/// Channels of a repeater in talkgroup mode, one per (talkgroup, slot) pair.
pub fn render_talkgroup_channels(r: &RepeaterRecord, slots: &[TalkgroupSlot], names: &NameResolver) -> Vec<ChannelRecord> {
    slots
        .iter()
        .map(|tg| {
            let name = names.lookup(&tg.talkgroup).unwrap_or_else(|| format!("TG{}", tg.talkgroup));
            let name = truncate_alias(&name);
            ChannelRecord {
                alias: name.clone(),
                timeslot: tg.slot,
                color_code: r.colorcode,
                rx: r.rx.clone(),
                tx: r.tx.clone(),
                roam_on_site_change: false,
                kind: ChannelKind::Talkgroup { talkgroup: tg.talkgroup.clone(), display_name: name },
                origin: origin(r),
            }
        })
        .collect()
}

/// Reads the block of extra channel fields, creating an empty file on first use.
pub fn load_custom_fields(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        fs::write(path, "").map_err(|e| AppError::IO(format!("create {}: {}", path.display(), e)))?;
        info!("Created empty {}", path.display());
    }
    fs::read_to_string(path).map_err(|e| AppError::IO(format!("read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fake::FakeDirectory;
    use crate::filter::tests::repeater;

    #[test]
    fn simplex_gets_one_ts2_channel_without_suffix() {
        let mut r = repeater(260101, "SR5WA", "144.000", "144.000");
        r.turn = 1;
        let ch = render_channels(&r);
        assert_eq!(ch.len(), 1);
        assert_eq!(ch[0].alias, "SR5WA");
        assert_eq!(ch[0].timeslot, 2);
        assert!(!ch[0].alias.contains("TS"));
        assert!(!ch[0].roam_on_site_change);
    }

    #[test]
    fn duplex_gets_ts_pair_and_only_ts1_roams() {
        let mut r = repeater(260101, "X", "144.000", "145.000");
        r.turn = 1;
        let ch = render_channels(&r);
        assert_eq!(ch.len(), 2);
        assert_eq!((ch[0].alias.as_str(), ch[0].timeslot, ch[0].roam_on_site_change), ("X TS1", 1, true));
        assert_eq!((ch[1].alias.as_str(), ch[1].timeslot, ch[1].roam_on_site_change), ("X TS2", 2, false));
        assert_eq!(ch[0].kind, ChannelKind::Standard);
    }

    #[test]
    fn long_aliases_keep_timeslot_suffix() {
        let mut r = repeater(260101, "DB0ABCDEF", "439.1", "431.1");
        r.turn = 10;
        let ch = render_channels(&r);
        assert_ne!(ch[0].alias, ch[1].alias);
        assert_eq!(ch[0].alias, "DB0ABCDEF #1 TS1");
        assert_eq!(ch[1].alias, "DB0ABCDEF #1 TS2");

        // cut lands on the space before the number
        let mut r = repeater(260101, "DB0ABCDEFGH", "439.1", "431.1");
        r.turn = 12;
        let ch = render_channels(&r);
        assert_eq!(ch[0].alias, "DB0ABCDEFGH TS1");
        assert_eq!(ch[1].alias, "DB0ABCDEFGH TS2");
        assert!(ch.iter().all(|c| c.alias.chars().count() <= ALIAS_MAX));
    }

    #[test]
    fn long_simplex_alias_is_capped() {
        let mut r = repeater(260101, "DB0ABCDEFGH", "439.1", "439.1");
        r.turn = 123456;
        let ch = render_channels(&r);
        assert_eq!(ch[0].alias, "DB0ABCDEFGH #123");
    }

    #[test]
    fn later_turns_are_numbered() {
        let mut r = repeater(260101, "SR5WA", "439.1", "431.1");
        r.turn = 3;
        let ch = render_channels(&r);
        assert_eq!(ch[0].alias, "SR5WA #3 TS1");
        assert_eq!(ch[1].alias, "SR5WA #3 TS2");
    }

    #[test]
    fn talkgroup_names_prefer_contacts_then_directory_then_literal() {
        let mut table = ContactTable::with_default_header();
        table.push_contact("Local Net", "2602", "Group Call");
        let dir = FakeDirectory::default().with_name("2602", "Poland").with_name("91", "Worldwide");
        let names = NameResolver::new(Some(&table), &dir);

        let r = repeater(260101, "SR5WA", "439.1", "431.1");
        let slots = vec![
            TalkgroupSlot { talkgroup: "2602".into(), slot: 2 },
            TalkgroupSlot { talkgroup: "91".into(), slot: 1 },
            TalkgroupSlot { talkgroup: "26077".into(), slot: 2 },
        ];
        let ch = render_talkgroup_channels(&r, &slots, &names);
        let aliases: Vec<_> = ch.iter().map(|c| c.alias.as_str()).collect();
        assert_eq!(aliases, vec!["Local Net", "Worldwide", "TG26077"]);
        assert_eq!(ch[1].timeslot, 1);
        assert_eq!(
            ch[2].kind,
            ChannelKind::Talkgroup { talkgroup: "26077".into(), display_name: "TG26077".into() }
        );
    }

    #[test]
    fn talkgroup_names_are_truncated() {
        let dir = FakeDirectory::default().with_name("9990", "Some Very Long Talkgroup Name");
        let names = NameResolver::new(None, &dir);
        let r = repeater(260101, "SR5WA", "439.1", "431.1");
        let ch = render_talkgroup_channels(&r, &[TalkgroupSlot { talkgroup: "9990".into(), slot: 1 }], &names);
        assert_eq!(ch[0].alias, "Some Very Long T");
        assert_eq!(ch[0].alias.chars().count(), ALIAS_MAX);
        match &ch[0].kind {
            ChannelKind::Talkgroup { display_name, .. } => assert_eq!(display_name, &ch[0].alias),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn failed_name_lookup_degrades_to_literal() {
        let mut dir = FakeDirectory::default();
        dir.failing_names.push("91".into());
        let names = NameResolver::new(None, &dir);
        assert_eq!(names.lookup("91"), None);
    }

    #[test]
    fn custom_fields_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CUSTOM_FILE);
        assert_eq!(load_custom_fields(&path).unwrap(), "");
        assert!(path.exists());

        fs::write(&path, "  <field name=\"CP_TOT\">60</field>").unwrap();
        assert!(load_custom_fields(&path).unwrap().contains("CP_TOT"));
    }
}
