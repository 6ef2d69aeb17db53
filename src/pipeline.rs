use crate::catalog;
use crate::cli::RunConfig;
use crate::contacts::{self, ContactTable, CONTACTS_FILE};
use crate::csv_out;
use crate::directory::{CachedDirectory, Directory};
use crate::errors::AppError;
use crate::filter;
use crate::geo;
use crate::model::{FilterCriteria, RepeaterRecord, TalkgroupSlot, ZoneRecord};
use crate::render::{self, NameResolver, RenderMode};
use crate::report;
use crate::uploads;
use crate::xml_out;
use crate::zone;
use log::{info, warn};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub repeaters: usize,
    pub zones_written: usize,
    pub write_failures: usize,
    pub contacts_added: usize,
}

/// load -> filter -> render/merge -> assemble -> write.
///
/// Input problems fail before anything is downloaded; per-talkgroup lookups
/// and individual file writes only log when they fail.
pub fn run(cfg: &RunConfig, directory: &dyn Directory) -> Result<RunSummary, AppError> {
    let criteria = FilterCriteria {
        band: cfg.band,
        area: geo::resolve(&cfg.selection)?,
        power: cfg.power,
        six_digit_only: cfg.six_digit_only,
        callsign_contains: cfg.callsign.clone(),
    };
    let custom = match &cfg.custom_file {
        Some(path) => render::load_custom_fields(path)?,
        None => String::new(),
    };

    let catalog = catalog::load(&cfg.cache, cfg.force, directory)?;
    info!("Catalog holds {} devices", catalog.len());
    let repeaters = filter::filter_catalog(catalog, &criteria);
    info!("Selected {} repeaters", repeaters.len());

    let mut summary = RunSummary { repeaters: repeaters.len(), ..Default::default() };
    let zones = match cfg.mode {
        RenderMode::Standard => {
            let channels = repeaters.iter().flat_map(render::render_channels).collect();
            zone::partition(&cfg.zone_name, channels, cfg.zone_capacity)
        }
        RenderMode::Talkgroups => {
            let cached = CachedDirectory::new(directory);
            let (zones, added) = talkgroup_zones(cfg, &repeaters, &cached);
            summary.contacts_added = added;
            zones
        }
    };

    for z in &zones {
        println!("\n{}", report::zone_table(z));
        match xml_out::write_zone(&cfg.output, z, &custom) {
            Ok(_) => summary.zones_written += 1,
            Err(e) => {
                warn!("{}", e);
                summary.write_failures += 1;
            }
        }
    }

    if cfg.mode == RenderMode::Talkgroups {
        uploads::cleanup_uploads(&cfg.uploads_root);
    }
    info!("Wrote {} zone files to {}", summary.zones_written, cfg.output.display());
    Ok(summary)
}

fn repeater_talkgroups(r: &RepeaterRecord, directory: &dyn Directory) -> Vec<TalkgroupSlot> {
    directory.repeater_talkgroups(r.id).unwrap_or_else(|e| {
        warn!("Error fetching talkgroups for {} ({}): {}", r.callsign, r.id, e);
        Vec::new()
    })
}

/// Updates the contact table with every discovered talkgroup, then builds one zone per repeater.
fn talkgroup_zones(cfg: &RunConfig, repeaters: &[RepeaterRecord], directory: &dyn Directory) -> (Vec<ZoneRecord>, usize) {
    let discovered: Vec<String> = repeaters
        .iter()
        .flat_map(|r| repeater_talkgroups(r, directory))
        .map(|tg| tg.talkgroup)
        .collect();

    let (table, added) = match update_contacts(cfg, &discovered, directory) {
        Ok((table, added)) => (Some(table), added),
        Err(e) => {
            warn!("Error updating contacts: {}", e);
            (None, 0)
        }
    };

    let names = NameResolver::new(table.as_ref(), directory);
    let zones = repeaters
        .iter()
        .filter_map(|r| {
            let slots = repeater_talkgroups(r, directory);
            zone::repeater_zone(r, render::render_talkgroup_channels(r, &slots, &names))
        })
        .collect();
    (zones, added)
}

fn update_contacts(cfg: &RunConfig, discovered: &[String], directory: &dyn Directory) -> Result<(ContactTable, usize), AppError> {
    let path = cfg.output.join(CONTACTS_FILE);
    let override_template = cfg
        .contact_template
        .clone()
        .or_else(|| uploads::find_uploaded_template(&cfg.uploads_root));
    let mut table = contacts::open_or_seed(&path, override_template.as_deref(), &cfg.default_template)?;
    let added = table.merge(discovered, directory);
    if let Err(e) = csv_out::write_contacts(&table, &path) {
        warn!("{}", e);
    }
    info!("Updated {} with {} new talkgroups (total: {})", path.display(), added, table.rows().len());
    Ok((table, added))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fake::FakeDirectory;
    use crate::model::{Band, Selection};
    use std::fs;
    use std::path::Path;

    const CATALOG: &str = r#"[
        {"id": 260101, "callsign": "SR5WA Warszawa", "rx": "439.4125", "tx": "431.8125", "colorcode": 1,
         "lat": 52.23, "lng": 21.01, "city": "Warszawa, Mazowieckie", "last_seen": "2024-05-01", "pep": 25},
        {"id": 260102, "callsign": "SR5WA", "rx": "439.4125", "tx": "431.8125", "colorcode": 1,
         "lat": 52.23, "lng": 21.01, "city": "Warszawa", "last_seen": "2024-05-01", "pep": 25},
        {"id": 260103, "callsign": "SR5WA", "rx": "439.2000", "tx": "439.2000", "colorcode": 2,
         "lat": 52.20, "lng": 21.05, "city": "Warszawa", "last_seen": "2024-05-01", "pep": 5},
        {"id": 260201, "callsign": "SR2GD", "rx": "438.9000", "tx": "431.3000", "colorcode": 1,
         "lat": 54.35, "lng": 18.65, "city": "Gdansk", "last_seen": "2024-05-01", "pep": null},
        {"id": 262101, "callsign": "DB0ABC", "rx": "439.5000", "tx": "430.1000", "colorcode": 1,
         "lat": 52.52, "lng": 13.40, "city": "Berlin", "last_seen": "2024-05-01", "pep": 10},
        {"id": 260301, "callsign": "SR3VHF", "rx": "145.6000", "tx": "145.0000", "colorcode": 1,
         "lat": 52.40, "lng": 16.92, "city": "Poznan", "last_seen": "2024-05-01", "pep": 10}
    ]"#;

    fn config(root: &Path, selection: Selection, mode: RenderMode) -> RunConfig {
        fs::write(root.join("BM.json"), CATALOG).unwrap();
        RunConfig {
            zone_name: "Poland".into(),
            band: Band::Uhf,
            selection,
            power: None,
            six_digit_only: true,
            zone_capacity: 160,
            callsign: None,
            mode,
            output: root.join("output"),
            custom_file: None,
            force: false,
            cache: root.join("BM.json"),
            contact_template: None,
            default_template: root.join("contact_template.csv"),
            uploads_root: root.to_path_buf(),
            insecure: false,
        }
    }

    #[test]
    fn standard_run_writes_one_zone() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Selection::Mcc("PL".into()), RenderMode::Standard);
        let summary = run(&cfg, &FakeDirectory::default()).unwrap();
        assert_eq!(summary, RunSummary { repeaters: 3, zones_written: 1, write_failures: 0, contacts_added: 0 });

        let xml = fs::read_to_string(dir.path().join("output/Poland.xml")).unwrap();
        // SR2GD TS1/TS2, SR5WA TS1/TS2, simplex SR5WA #2
        assert_eq!(xml.matches("<set name=\"ConventionalPersonality\"").count(), 5);
        assert!(xml.contains("alias=\"SR5WA #2\""));
        assert!(!xml.contains("DB0ABC"));
    }

    #[test]
    fn standard_run_splits_zones_by_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path(), Selection::Mcc("260".into()), RenderMode::Standard);
        cfg.zone_capacity = 2;
        let summary = run(&cfg, &FakeDirectory::default()).unwrap();
        assert_eq!(summary.zones_written, 3);
        for n in 1..=3 {
            assert!(dir.path().join(format!("output/Poland #{}.xml", n)).exists());
        }
    }

    #[test]
    fn radius_selection_uses_locator_center() {
        let dir = tempfile::tempdir().unwrap();
        // KO02 covers Warszawa
        let cfg = config(dir.path(), Selection::Locator { locator: "KO02".into(), radius_km: 60.0 }, RenderMode::Standard);
        let summary = run(&cfg, &FakeDirectory::default()).unwrap();
        assert_eq!(summary.repeaters, 2);
    }

    #[test]
    fn invalid_locator_fails_before_download() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path(), Selection::Locator { locator: "XYZ".into(), radius_km: 60.0 }, RenderMode::Standard);
        cfg.force = true;
        let fake = FakeDirectory::default();
        assert!(matches!(run(&cfg, &fake), Err(AppError::InvalidLocator(_))));
        assert_eq!(fake.catalog_calls.get(), 0);
    }

    #[test]
    fn talkgroup_run_writes_contacts_and_zone_per_repeater() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path(), Selection::Mcc("260".into()), RenderMode::Talkgroups);
        cfg.zone_name = String::new();
        let upload = dir.path().join("contact_uploads/contact_template.csv");
        fs::create_dir_all(upload.parent().unwrap()).unwrap();
        fs::write(&upload, "").unwrap();

        let fake = FakeDirectory::default()
            .with_talkgroups(260102, &[("91", 1), ("2602", 2)])
            .with_talkgroups(260201, &[("2602", 2)])
            .with_name("91", "Worldwide")
            .with_name("2602", "Poland");

        let summary = run(&cfg, &fake).unwrap();
        // 260103 has no talkgroup list (lookup fails) and gets no zone
        assert_eq!(summary.zones_written, 2);
        assert_eq!(summary.contacts_added, 2);
        assert!(dir.path().join("output/SR5WA_Warszawa.xml").exists());
        assert!(dir.path().join("output/SR2GD_Gdansk.xml").exists());

        let contacts = ContactTable::load(&dir.path().join("output/contacts.csv")).unwrap();
        let names: Vec<_> = contacts.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Worldwide", "Poland"]);

        let xml = fs::read_to_string(dir.path().join("output/SR5WA_Warszawa.xml")).unwrap();
        assert!(xml.contains("alias=\"SR5WA_Warszawa\""));
        assert!(xml.contains("alias=\"Worldwide\""));
        // each repeater and each name is only asked once
        assert_eq!(fake.talkgroup_calls.get(), 3);
        assert_eq!(fake.name_calls.get(), 2);
        // uploaded files are removed afterwards
        assert!(!upload.exists());

        // a second run adds nothing
        let again = run(&cfg, &fake).unwrap();
        assert_eq!(again.contacts_added, 0);
    }
}
