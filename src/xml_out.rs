use crate::errors::AppError;
use crate::model::{ChannelKind, ChannelRecord, ZoneRecord};
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// (field, display name, value) of the digital conventional personality shared by every channel.
type Field = (&'static str, Option<&'static str>, &'static str);

const PERSONALITY_KEY: &str = "DGTLCONV6PT25";

const ADMIT_PROFILE: &[Field] = &[
    ("CP_TXINHXPLEN", Some("Color Code Free"), "MTCHCLRCD"),
    ("CP_MLTSTPSNLTIND", None, "True"),
    ("CP_GPSRVRTPERSIT", Some("Selected"), "SELECTED"),
    ("CP_OVCMDECODEENABLE", None, "True"),
    ("CP_TXCOMPUDPIPHEADEN", Some("DMR Standard"), "DMR_UDP_HEADER"),
    ("CP_LOCATIONDATADELIVERYMODE", Some("Follow Data Call Confirmed"), "FOLLOW_CALL_DATA_SETTING"),
    ("CP_MYCALLADCRTR", Some("Follow Admit Criteria"), "FOLLOW_ADMIT_CRITERIA"),
    ("CP_TEXTMESSAGETYPE", Some("Advantage"), "TMS"),
    ("CP_TRANSMITINTERRUPTTYPE", Some("Advantage"), "PROPRIETARY"),
    ("CP_MLTSTPSNLTIND", None, "True"),
];
const ROAM_ON_SITE_CHANGE: Field = ("CP_ARSPLUS", Some("On System/Site Change"), "ARS_SYS_SITE_CHANGE");
const TIME_OUT_TIMER: Field = ("CP_TOT", None, "180");
const NO_RAS_DATA: Field = ("CP_RASDATAITEM", Some("None"), "None");
const INTERRUPT_DELAY: Field = ("CP_INTRPTMSGDLY", None, "510");

pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_field(out: &mut String, name: &str, display: Option<&str>, value: &str) {
    let _ = match display {
        Some(d) => writeln!(out, "  <field name=\"{}\" Name=\"{}\">{}</field>", name, xml_escape(d), xml_escape(value)),
        None => writeln!(out, "  <field name=\"{}\">{}</field>", name, xml_escape(value)),
    };
}

fn push_static(out: &mut String, fields: &[Field]) {
    for (name, display, value) in fields {
        push_field(out, name, *display, value);
    }
}

/// One `ConventionalPersonality` set. `custom` is spliced in verbatim before the closing tag.
pub fn channel_xml(ch: &ChannelRecord, custom: &str) -> String {
    let mut out = String::new();
    let slot = ch.timeslot.to_string();
    let _ = writeln!(out, "<set name=\"ConventionalPersonality\" alias=\"{}\" key=\"{}\">", xml_escape(&ch.alias), PERSONALITY_KEY);
    push_field(&mut out, "CP_PERSTYPE", Some("Digital"), PERSONALITY_KEY);
    push_field(&mut out, "CP_SLTASSGMNT", Some(slot.as_str()), &format!("SLOT{}", slot));
    push_field(&mut out, "CP_COLORCODE", None, &ch.color_code.to_string());
    // the directory lists frequencies from the repeater's side
    push_field(&mut out, "CP_TXFREQ", None, &ch.rx);
    push_field(&mut out, "CP_RXFREQ", None, &ch.tx);
    push_field(&mut out, "CP_EMACKALERTEN", None, "True");
    push_field(&mut out, "CP_CNVPERSALIAS", None, &ch.alias);
    push_static(&mut out, ADMIT_PROFILE);
    if ch.roam_on_site_change {
        push_static(&mut out, &[ROAM_ON_SITE_CHANGE]);
    }
    push_static(&mut out, &[TIME_OUT_TIMER]);
    match &ch.kind {
        ChannelKind::Standard => push_static(&mut out, &[INTERRUPT_DELAY]),
        ChannelKind::Talkgroup { display_name, .. } => {
            push_static(&mut out, &[NO_RAS_DATA, INTERRUPT_DELAY]);
            push_field(&mut out, "CP_UKPPERS", Some(display_name.as_str()), display_name);
        }
    }
    if !custom.is_empty() {
        out.push_str(custom);
        if !custom.ends_with('\n') {
            out.push('\n');
        }
    }
    out.push_str("</set>\n");
    out
}

pub fn zone_xml(zone: &ZoneRecord, custom: &str) -> String {
    let alias = xml_escape(&zone.alias);
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\"?>\n");
    out.push_str("<config>\n");
    out.push_str("  <category name=\"Zone\">\n");
    let _ = writeln!(out, "    <set name=\"Zone\" alias=\"{}\" key=\"NORMAL\">", alias);
    out.push_str("      <collection name=\"ZoneItems\">\n");
    for ch in &zone.channels {
        out.push_str(&channel_xml(ch, custom));
    }
    out.push_str("      </collection>\n");
    let _ = writeln!(out, "      <field name=\"ZP_ZONEALIAS\">{}</field>", alias);
    out.push_str("      <field name=\"ZP_ZONETYPE\" Name=\"Normal\">NORMAL</field>\n");
    out.push_str("      <field name=\"ZP_ZVFNLITEM\" Name=\"None\">NONE</field>\n");
    out.push_str("      <field name=\"Comments\"></field>\n");
    out.push_str("    </set>\n");
    out.push_str("  </category>\n");
    out.push_str("</config>\n");
    out
}

/// File name safe to join onto the output directory.
pub fn file_stem(name: &str) -> String {
    name.chars().map(|c| if matches!(c, '/' | '\\') { '_' } else { c }).collect()
}

/// Writes `bytes` to `path` through a temporary sibling, so the target is either
/// the old file or the complete new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let fail = |e: &dyn std::fmt::Display| AppError::WriteError(format!("{}: {}", path.display(), e));
    fs::create_dir_all(dir).map_err(|e| fail(&e))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fail(&e))?;
    tmp.write_all(bytes).map_err(|e| fail(&e))?;
    tmp.flush().map_err(|e| fail(&e))?;
    tmp.persist(path).map_err(|e| fail(&e.error))?;
    Ok(())
}

pub fn write_zone(out_dir: &Path, zone: &ZoneRecord, custom: &str) -> Result<PathBuf, AppError> {
    let path = out_dir.join(format!("{}.xml", file_stem(&zone.file_name)));
    write_atomic(&path, zone_xml(zone, custom).as_bytes())?;
    info!("Zone file \"{}\" written.", path.display());
    Ok(path)
}
