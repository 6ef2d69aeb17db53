use crate::catalog::DEFAULT_CACHE_FILE;
use crate::contacts::DEFAULT_TEMPLATE_FILE;
use crate::errors::AppError;
use crate::model::{Band, PowerFilter, Selection};
use crate::render::{RenderMode, DEFAULT_CUSTOM_FILE};
use crate::zone::DEFAULT_ZONE_CAPACITY;
use argparse::{ArgumentParser, Store, StoreFalse, StoreOption, StoreTrue};
use std::path::PathBuf;

pub struct CliArgs {
    pub force: bool,
    pub name: Option<String>,
    pub band: String,
    pub select: String,
    pub mcc: Option<String>,
    pub qth: Option<String>,
    pub radius: f64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub pep: Option<u32>,
    pub six: bool,
    pub zone_capacity: usize,
    pub customize: bool,
    pub callsign: Option<String>,
    pub talkgroups: bool,
    pub output: PathBuf,
    pub cache: PathBuf,
    pub contact_template: Option<PathBuf>,
    pub insecure: bool,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            force: false,
            name: None,
            band: String::new(),
            select: String::new(),
            mcc: None,
            qth: None,
            radius: 100.0,
            lat: None,
            lon: None,
            pep: None,
            six: true,
            zone_capacity: DEFAULT_ZONE_CAPACITY,
            customize: false,
            callsign: None,
            talkgroups: false,
            output: PathBuf::from("output"),
            cache: PathBuf::from(DEFAULT_CACHE_FILE),
            contact_template: None,
            insecure: false,
            log_level: "essential".into(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Generate MOTOTRBO zone files from the BrandMeister repeater list.");
        ap.refer(&mut args.force)
            .add_option(&["-f", "--force"], StoreTrue, "Download the repeater list even if it is cached");
        ap.refer(&mut args.name)
            .add_option(&["-n", "--name"], StoreOption, "Zone name (required unless --talkgroups)");
        ap.refer(&mut args.band)
            .add_option(&["-b", "--band"], Store, "Repeater band: vhf|uhf")
            .required();
        ap.refer(&mut args.select)
            .add_option(&["-t", "--type"], Store, "Select repeaters by: mcc|qth|gps")
            .required();
        ap.refer(&mut args.mcc)
            .add_option(&["-m", "--mcc"], StoreOption, "First repeater ID digits, or a two letter country code");
        ap.refer(&mut args.qth)
            .add_option(&["-q", "--qth"], StoreOption, "QTH locator like KO26BX");
        ap.refer(&mut args.radius)
            .add_option(&["-r", "--radius"], Store, "Area radius in km (default 100)");
        ap.refer(&mut args.lat)
            .add_option(&["--lat"], StoreOption, "Latitude of the center");
        ap.refer(&mut args.lon)
            .add_option(&["--lon"], StoreOption, "Longitude of the center");
        ap.refer(&mut args.pep)
            .add_option(&["-p", "--pep"], StoreOption, "Only repeaters with defined power of at least this many watts (0 = any)");
        ap.refer(&mut args.six)
            .add_option(&["--all-ids"], StoreFalse, "Also select repeaters without a 6 digit ID");
        ap.refer(&mut args.zone_capacity)
            .add_option(&["-z", "--zone-capacity"], Store, "Channels per zone (default 160, 16 for lite models)");
        ap.refer(&mut args.customize)
            .add_option(&["-c", "--customize"], StoreTrue, "Append custom-values.xml to each channel");
        ap.refer(&mut args.callsign)
            .add_option(&["-s", "--callsign"], StoreOption, "Only callsigns containing this text");
        ap.refer(&mut args.talkgroups)
            .add_option(&["-g", "--talkgroups"], StoreTrue, "One channel per active talkgroup, one zone per repeater");
        ap.refer(&mut args.output)
            .add_option(&["-o", "--output"], Store, "Output directory (default output)");
        ap.refer(&mut args.cache)
            .add_option(&["--cache"], Store, "Repeater list cache file (default BM.json)");
        ap.refer(&mut args.contact_template)
            .add_option(&["--contact-template"], StoreOption, "Contact CSV to start from instead of the default template");
        ap.refer(&mut args.insecure)
            .add_option(&["--insecure"], StoreTrue, "Accept invalid TLS certificates from the API");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}

/// Everything a run needs, validated.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub zone_name: String,
    pub band: Band,
    pub selection: Selection,
    pub power: Option<PowerFilter>,
    pub six_digit_only: bool,
    pub zone_capacity: usize,
    pub callsign: Option<String>,
    pub mode: RenderMode,
    pub output: PathBuf,
    pub custom_file: Option<PathBuf>,
    pub force: bool,
    pub cache: PathBuf,
    pub contact_template: Option<PathBuf>,
    pub default_template: PathBuf,
    /// Directory searched for `contact_uploads*` folders.
    pub uploads_root: PathBuf,
    pub insecure: bool,
}

impl CliArgs {
    pub fn into_config(self) -> Result<RunConfig, AppError> {
        let mode = if self.talkgroups { RenderMode::Talkgroups } else { RenderMode::Standard };
        let zone_name = match (self.name, mode) {
            (Some(n), _) if !n.trim().is_empty() => n,
            (_, RenderMode::Talkgroups) => String::new(),
            _ => return Err(AppError::Config("--name is required when not using --talkgroups".into())),
        };
        let band: Band = self.band.parse().map_err(AppError::Config)?;
        if self.zone_capacity == 0 {
            return Err(AppError::Config("--zone-capacity must be at least 1".into()));
        }

        let selection = match self.select.to_ascii_lowercase().as_str() {
            "mcc" => Selection::Mcc(
                self.mcc.ok_or_else(|| AppError::Config("--mcc is required for --type mcc".into()))?,
            ),
            "qth" => Selection::Locator {
                locator: self.qth.ok_or_else(|| AppError::Config("--qth is required for --type qth".into()))?,
                radius_km: self.radius,
            },
            "gps" => match (self.lat, self.lon) {
                (Some(lat), Some(lon)) if !(lat == 0.0 && lon == 0.0) => {
                    Selection::Coordinates { lat, lon, radius_km: self.radius }
                }
                _ => return Err(AppError::Config("--lat and --lon are required for --type gps".into())),
            },
            other => return Err(AppError::Config(format!("unknown selection type {:?} (mcc|qth|gps)", other))),
        };

        Ok(RunConfig {
            zone_name,
            band,
            selection,
            power: self.pep.map(PowerFilter::from_threshold),
            six_digit_only: self.six,
            zone_capacity: self.zone_capacity,
            callsign: self.callsign.filter(|c| !c.is_empty()),
            mode,
            output: self.output,
            custom_file: self.customize.then(|| PathBuf::from(DEFAULT_CUSTOM_FILE)),
            force: self.force,
            cache: self.cache,
            contact_template: self.contact_template,
            default_template: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            uploads_root: PathBuf::from("."),
            insecure: self.insecure,
        })
    }
}
