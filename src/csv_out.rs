use crate::contacts::ContactTable;
use crate::errors::AppError;
use crate::xml_out::write_atomic;
use csv::WriterBuilder;
use log::info;
use std::path::Path;

pub fn contacts_to_bytes(table: &ContactTable) -> Result<Vec<u8>, AppError> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    for h in table.header() {
        wtr.write_record(h).map_err(|e| AppError::IO(format!("csv write header: {}", e)))?;
    }
    for r in table.rows() {
        wtr.write_record(r.to_cells()).map_err(|e| AppError::IO(format!("csv write row: {}", e)))?;
    }

    wtr.into_inner().map_err(|e| AppError::IO(format!("csv flush: {}", e)))
}

pub fn write_contacts(table: &ContactTable, out_path: &Path) -> Result<(), AppError> {
    let bytes = contacts_to_bytes(table)?;
    write_atomic(out_path, &bytes)?;
    info!("CSV wrote {} contacts to {}", table.rows().len(), out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::{COLUMNS, GROUP_CALL};

    #[test]
    fn writes_header_then_rows_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("contacts.csv");
        let mut t = ContactTable::with_default_header();
        t.push_contact("Worldwide, all", "91", GROUP_CALL);

        write_contacts(&t, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("ContactName,Delete_Contact"));
        assert!(lines.next().unwrap().starts_with("Contact Name,Delete_Contact"));
        assert!(lines.next().unwrap().starts_with("\"Worldwide, all\","));

        let back = ContactTable::load(&path).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.rows()[0].to_cells().len(), COLUMNS);
    }
}
