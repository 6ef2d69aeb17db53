use crate::directory::Directory;
use crate::errors::AppError;
use crate::render::NameResolver;
use log::{debug, info};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_TEMPLATE_FILE: &str = "contact_template.csv";
pub const CONTACTS_FILE: &str = "contacts.csv";
pub const GROUP_CALL: &str = "Group Call";

// Positional layout of the CPS contact export. Only these three columns are
// interpreted; every other cell is carried through untouched.
//
//   index | header key                  | field
//   ------+-----------------------------+-----------------
//       0 | ContactName                 | ContactRow::name
//      25 | DigitalCalls-DU_CALLLSTID   | ContactRow::call_id
//      30 | DigitalCalls-DU_CALLTYPE    | ContactRow::call_type
pub const COL_NAME: usize = 0;
pub const COL_CALL_ID: usize = 25;
pub const COL_CALL_TYPE: usize = 30;
pub const COLUMNS: usize = 31;
pub const HEADER_ROWS: usize = 2;

pub const HEADER_KEYS: [&str; COLUMNS] = [
    "ContactName", "Delete_Contact", "Rename_Contact", "Comments", "Delete_FiveToneCalls",
    "FiveToneCalls-S5CLDLL_5TTELEGRAM", "FiveToneCalls-S5CLDLL_5TCALLADD", "Delete_MDCCalls",
    "MDCCalls-AU_CALLLSTID", "MDCCalls-AU_MDCSYS", "MDCCalls-AU_RVRTPERS_Zone",
    "MDCCalls-AU_RVRTPERS", "MDCCalls-AU_SPTPLDPL", "MDCCalls-AU_CALLTYPE",
    "Delete_QuikCallIICalls", "QuikCallIICalls-QU_QCIISYS", "QuikCallIICalls-QU_RVRTPERS_Zone",
    "QuikCallIICalls-QU_RVRTPERS", "QuikCallIICalls-QU_CALLFORMAT", "QuikCallIICalls-QU_TONEATXFRE",
    "QuikCallIICalls-QU_CODEA", "QuikCallIICalls-QU_TONEBTXFRE", "QuikCallIICalls-QU_CODEB",
    "QuikCallIICalls-QU_STRIPPLDPL", "Delete_DigitalCalls", "DigitalCalls-DU_CALLLSTID",
    "DigitalCalls-DU_ROUTETYPE", "DigitalCalls-DU_CALLPRCDTNEN", "DigitalCalls-DU_RINGTYPE",
    "DigitalCalls-DU_TXTMSGALTTNTP", "DigitalCalls-DU_CALLTYPE",
];

pub const HEADER_LABELS: [&str; COLUMNS] = [
    "Contact Name", "Delete_Contact", "Rename_Contact", "Comments", "Delete_FiveToneCalls",
    "Five Tone Calls - Telegram", "Five Tone Calls - Address", "Delete_MDCCalls",
    "MDC Calls - Call ID (Hex)", "MDC Calls - MDC System", "MDC Calls - Revert Channel Zone",
    "MDC Calls - Revert Channel", "MDC Calls - Strip TPL/DPL", "MDC Calls - Call Type",
    "Delete_QuikCallIICalls", "Quik CallII Calls - Quik-Call II System",
    "Quik CallII Calls - Revert Channel Zone", "Quik CallII Calls - Revert Channel",
    "Quik CallII Calls - Call Format", "Quik CallII Calls - Tone A Freq (Hz)",
    "Quik CallII Calls - Tone A Code", "Quik CallII Calls - Tone B Freq (Hz)",
    "Quik CallII Calls - Tone B Code", "Quik CallII Calls - Strip TPL/DPL",
    "Delete_DigitalCalls", "Digital Calls - Call ID", "Digital Calls - Route Type",
    "Digital Calls - Call Receive Tone", "Digital Calls - Ring Style",
    "Digital Calls - Text Message Alert Tone", "Digital Calls - Call Type",
];

pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactRow {
    pub name: String,
    pub call_id: String,
    pub call_type: String,
    /// The row as read, at least `COLUMNS` wide; key cells are overwritten on output.
    cells: Vec<String>,
}

impl ContactRow {
    fn from_cells(mut cells: Vec<String>) -> Self {
        if cells.len() < COLUMNS {
            cells.resize(COLUMNS, String::new());
        }
        Self {
            name: cells[COL_NAME].clone(),
            call_id: cells[COL_CALL_ID].clone(),
            call_type: cells[COL_CALL_TYPE].clone(),
            cells,
        }
    }

    /// A new row that inherits every non-key column of `self`.
    fn derive(&self, name: &str, call_id: &str, call_type: &str) -> Self {
        let mut cells = self.cells.clone();
        cells[COL_NAME] = name.into();
        cells[COL_CALL_ID] = call_id.into();
        cells[COL_CALL_TYPE] = call_type.into();
        Self::from_cells(cells)
    }

    fn blank() -> Self {
        Self::from_cells(Vec::new())
    }

    /// Dedup key: the call ID reduced to its digits.
    pub fn key(&self) -> String {
        digits_only(self.call_id.trim())
    }

    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = self.cells.clone();
        cells[COL_NAME] = self.name.clone();
        cells[COL_CALL_ID] = self.call_id.clone();
        cells[COL_CALL_TYPE] = self.call_type.clone();
        cells
    }
}

/// The contact list: two header rows followed by at most one row per call ID.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactTable {
    header: Vec<Vec<String>>,
    rows: Vec<ContactRow>,
}

impl ContactTable {
    pub fn with_default_header() -> Self {
        Self {
            header: vec![
                HEADER_KEYS.iter().map(|s| s.to_string()).collect(),
                HEADER_LABELS.iter().map(|s| s.to_string()).collect(),
            ],
            rows: Vec::new(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
        let mut table = Self::with_default_header();
        let mut header = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|e| AppError::IO(format!("contact csv row {}: {}", i + 1, e)))?;
            let cells: Vec<String> = rec.iter().map(str::to_string).collect();
            if i < HEADER_ROWS {
                header.push(cells);
            } else {
                table.rows.push(ContactRow::from_cells(cells));
            }
        }
        // a short file keeps whatever header it has; missing header rows come from the defaults
        for (i, row) in header.into_iter().enumerate() {
            table.header[i] = row;
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let f = File::open(path).map_err(|e| AppError::IO(format!("open {}: {}", path.display(), e)))?;
        Self::from_reader(f)
    }

    pub fn header(&self) -> &[Vec<String>] {
        &self.header
    }

    pub fn rows(&self) -> &[ContactRow] {
        &self.rows
    }

    pub fn push_contact(&mut self, name: &str, call_id: &str, call_type: &str) {
        let row = self.rows.first().cloned().unwrap_or_else(ContactRow::blank);
        self.rows.push(row.derive(name, call_id, call_type));
    }

    /// Name stored for a talkgroup, if any row with that ID has a non-empty name.
    pub fn name_for(&self, talkgroup: &str) -> Option<&str> {
        let key = digits_only(talkgroup);
        self.rows
            .iter()
            .find(|r| r.key() == key && !r.name.is_empty())
            .map(|r| r.name.as_str())
    }

    /// Appends a group-call row for every discovered talkgroup not already listed.
    ///
    /// Existing rows are left as they are. Names come from the table, then the
    /// directory, and fall back to the bare ID. Returns the number of rows added.
    pub fn merge(&mut self, discovered: &[String], directory: &dyn Directory) -> usize {
        let added = self.pending_rows(discovered, directory);
        let count = added.len();
        self.rows.extend(added);
        count
    }

    fn pending_rows(&self, discovered: &[String], directory: &dyn Directory) -> Vec<ContactRow> {
        let names = NameResolver::new(Some(self), directory);
        let mut known: HashSet<String> = self.rows.iter().map(ContactRow::key).filter(|k| !k.is_empty()).collect();
        let template = self.rows.first().cloned().unwrap_or_else(ContactRow::blank);

        let mut ids: Vec<String> = discovered.iter().map(|id| digits_only(id)).filter(|id| !id.is_empty()).collect();
        ids.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        ids.dedup();

        let mut out = Vec::new();
        for id in ids {
            if !known.insert(id.clone()) {
                debug!("TG {} already in contacts", id);
                continue;
            }
            let name = names.lookup(&id).unwrap_or_else(|| id.clone());
            info!("TG {} -> {}", id, name);
            out.push(template.derive(&name, &id, GROUP_CALL));
        }
        out
    }
}

/// Loads the contact table at `path`, or seeds a new one from the first
/// template that exists: override, default template, built-in header.
pub fn open_or_seed(path: &Path, override_template: Option<&Path>, default_template: &Path) -> Result<ContactTable, AppError> {
    if path.exists() {
        return ContactTable::load(path);
    }
    for candidate in override_template.into_iter().chain(std::iter::once(default_template)) {
        if candidate.exists() {
            info!("Seeding {} from {}", path.display(), candidate.display());
            return ContactTable::load(candidate);
        }
    }
    info!("Seeding {} with an empty contact list", path.display());
    Ok(ContactTable::with_default_header())
}
