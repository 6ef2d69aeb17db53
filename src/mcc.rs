// Mobile Country Codes (ITU-T E.212) by ISO 3166-1 alpha-2 country code.
//
// DMR repeater IDs start with the MCC of the country they are registered in,
// so a country code resolves to the set of MCCs that can prefix its IDs.
// Countries with several MCCs list all of them.

pub struct MccEntry {
    pub alpha2: &'static str,
    pub name: &'static str,
    pub mcc: &'static [&'static str],
}

pub const MCC_TABLE: &[MccEntry] = &[
    // Europe
    MccEntry { alpha2: "GR", name: "Greece", mcc: &["202"] },
    MccEntry { alpha2: "NL", name: "Netherlands", mcc: &["204"] },
    MccEntry { alpha2: "BE", name: "Belgium", mcc: &["206"] },
    MccEntry { alpha2: "FR", name: "France", mcc: &["208"] },
    MccEntry { alpha2: "MC", name: "Monaco", mcc: &["212"] },
    MccEntry { alpha2: "AD", name: "Andorra", mcc: &["213"] },
    MccEntry { alpha2: "ES", name: "Spain", mcc: &["214"] },
    MccEntry { alpha2: "HU", name: "Hungary", mcc: &["216"] },
    MccEntry { alpha2: "BA", name: "Bosnia and Herzegovina", mcc: &["218"] },
    MccEntry { alpha2: "HR", name: "Croatia", mcc: &["219"] },
    MccEntry { alpha2: "RS", name: "Serbia", mcc: &["220"] },
    MccEntry { alpha2: "IT", name: "Italy", mcc: &["222"] },
    MccEntry { alpha2: "VA", name: "Holy See", mcc: &["225"] },
    MccEntry { alpha2: "RO", name: "Romania", mcc: &["226"] },
    MccEntry { alpha2: "CH", name: "Switzerland", mcc: &["228"] },
    MccEntry { alpha2: "CZ", name: "Czechia", mcc: &["230"] },
    MccEntry { alpha2: "SK", name: "Slovakia", mcc: &["231"] },
    MccEntry { alpha2: "AT", name: "Austria", mcc: &["232"] },
    MccEntry { alpha2: "GB", name: "United Kingdom", mcc: &["234", "235"] },
    MccEntry { alpha2: "DK", name: "Denmark", mcc: &["238"] },
    MccEntry { alpha2: "SE", name: "Sweden", mcc: &["240"] },
    MccEntry { alpha2: "NO", name: "Norway", mcc: &["242"] },
    MccEntry { alpha2: "FI", name: "Finland", mcc: &["244"] },
    MccEntry { alpha2: "LT", name: "Lithuania", mcc: &["246"] },
    MccEntry { alpha2: "LV", name: "Latvia", mcc: &["247"] },
    MccEntry { alpha2: "EE", name: "Estonia", mcc: &["248"] },
    MccEntry { alpha2: "RU", name: "Russia", mcc: &["250"] },
    MccEntry { alpha2: "UA", name: "Ukraine", mcc: &["255"] },
    MccEntry { alpha2: "BY", name: "Belarus", mcc: &["257"] },
    MccEntry { alpha2: "MD", name: "Moldova", mcc: &["259"] },
    MccEntry { alpha2: "PL", name: "Poland", mcc: &["260"] },
    MccEntry { alpha2: "DE", name: "Germany", mcc: &["262"] },
    MccEntry { alpha2: "GI", name: "Gibraltar", mcc: &["266"] },
    MccEntry { alpha2: "PT", name: "Portugal", mcc: &["268"] },
    MccEntry { alpha2: "LU", name: "Luxembourg", mcc: &["270"] },
    MccEntry { alpha2: "IE", name: "Ireland", mcc: &["272"] },
    MccEntry { alpha2: "IS", name: "Iceland", mcc: &["274"] },
    MccEntry { alpha2: "AL", name: "Albania", mcc: &["276"] },
    MccEntry { alpha2: "MT", name: "Malta", mcc: &["278"] },
    MccEntry { alpha2: "CY", name: "Cyprus", mcc: &["280"] },
    MccEntry { alpha2: "GE", name: "Georgia", mcc: &["282"] },
    MccEntry { alpha2: "AM", name: "Armenia", mcc: &["283"] },
    MccEntry { alpha2: "BG", name: "Bulgaria", mcc: &["284"] },
    MccEntry { alpha2: "TR", name: "Turkey", mcc: &["286"] },
    MccEntry { alpha2: "FO", name: "Faroe Islands", mcc: &["288"] },
    MccEntry { alpha2: "GL", name: "Greenland", mcc: &["290"] },
    MccEntry { alpha2: "SM", name: "San Marino", mcc: &["292"] },
    MccEntry { alpha2: "SI", name: "Slovenia", mcc: &["293"] },
    MccEntry { alpha2: "MK", name: "North Macedonia", mcc: &["294"] },
    MccEntry { alpha2: "LI", name: "Liechtenstein", mcc: &["295"] },
    MccEntry { alpha2: "ME", name: "Montenegro", mcc: &["297"] },

    // North America and Caribbean
    MccEntry { alpha2: "CA", name: "Canada", mcc: &["302"] },
    MccEntry { alpha2: "PM", name: "Saint Pierre and Miquelon", mcc: &["308"] },
    MccEntry { alpha2: "US", name: "United States", mcc: &["310", "311", "312", "313", "314", "315", "316"] },
    MccEntry { alpha2: "PR", name: "Puerto Rico", mcc: &["330"] },
    MccEntry { alpha2: "MX", name: "Mexico", mcc: &["334"] },
    MccEntry { alpha2: "JM", name: "Jamaica", mcc: &["338"] },
    MccEntry { alpha2: "BB", name: "Barbados", mcc: &["342"] },
    MccEntry { alpha2: "AG", name: "Antigua and Barbuda", mcc: &["344"] },
    MccEntry { alpha2: "KY", name: "Cayman Islands", mcc: &["346"] },
    MccEntry { alpha2: "VG", name: "British Virgin Islands", mcc: &["348"] },
    MccEntry { alpha2: "BM", name: "Bermuda", mcc: &["350"] },
    MccEntry { alpha2: "GD", name: "Grenada", mcc: &["352"] },
    MccEntry { alpha2: "MS", name: "Montserrat", mcc: &["354"] },
    MccEntry { alpha2: "KN", name: "Saint Kitts and Nevis", mcc: &["356"] },
    MccEntry { alpha2: "LC", name: "Saint Lucia", mcc: &["358"] },
    MccEntry { alpha2: "VC", name: "Saint Vincent and the Grenadines", mcc: &["360"] },
    MccEntry { alpha2: "CW", name: "Curacao", mcc: &["362"] },
    MccEntry { alpha2: "AW", name: "Aruba", mcc: &["363"] },
    MccEntry { alpha2: "BS", name: "Bahamas", mcc: &["364"] },
    MccEntry { alpha2: "AI", name: "Anguilla", mcc: &["365"] },
    MccEntry { alpha2: "DM", name: "Dominica", mcc: &["366"] },
    MccEntry { alpha2: "CU", name: "Cuba", mcc: &["368"] },
    MccEntry { alpha2: "DO", name: "Dominican Republic", mcc: &["370"] },
    MccEntry { alpha2: "HT", name: "Haiti", mcc: &["372"] },
    MccEntry { alpha2: "TT", name: "Trinidad and Tobago", mcc: &["374"] },
    MccEntry { alpha2: "TC", name: "Turks and Caicos Islands", mcc: &["376"] },

    // Asia
    MccEntry { alpha2: "AZ", name: "Azerbaijan", mcc: &["400"] },
    MccEntry { alpha2: "KZ", name: "Kazakhstan", mcc: &["401"] },
    MccEntry { alpha2: "BT", name: "Bhutan", mcc: &["402"] },
    MccEntry { alpha2: "IN", name: "India", mcc: &["404", "405", "406"] },
    MccEntry { alpha2: "PK", name: "Pakistan", mcc: &["410"] },
    MccEntry { alpha2: "AF", name: "Afghanistan", mcc: &["412"] },
    MccEntry { alpha2: "LK", name: "Sri Lanka", mcc: &["413"] },
    MccEntry { alpha2: "MM", name: "Myanmar", mcc: &["414"] },
    MccEntry { alpha2: "LB", name: "Lebanon", mcc: &["415"] },
    MccEntry { alpha2: "JO", name: "Jordan", mcc: &["416"] },
    MccEntry { alpha2: "SY", name: "Syria", mcc: &["417"] },
    MccEntry { alpha2: "IQ", name: "Iraq", mcc: &["418"] },
    MccEntry { alpha2: "KW", name: "Kuwait", mcc: &["419"] },
    MccEntry { alpha2: "SA", name: "Saudi Arabia", mcc: &["420"] },
    MccEntry { alpha2: "YE", name: "Yemen", mcc: &["421"] },
    MccEntry { alpha2: "OM", name: "Oman", mcc: &["422"] },
    MccEntry { alpha2: "AE", name: "United Arab Emirates", mcc: &["424", "430", "431"] },
    MccEntry { alpha2: "IL", name: "Israel", mcc: &["425"] },
    MccEntry { alpha2: "BH", name: "Bahrain", mcc: &["426"] },
    MccEntry { alpha2: "QA", name: "Qatar", mcc: &["427"] },
    MccEntry { alpha2: "MN", name: "Mongolia", mcc: &["428"] },
    MccEntry { alpha2: "NP", name: "Nepal", mcc: &["429"] },
    MccEntry { alpha2: "IR", name: "Iran", mcc: &["432"] },
    MccEntry { alpha2: "UZ", name: "Uzbekistan", mcc: &["434"] },
    MccEntry { alpha2: "TJ", name: "Tajikistan", mcc: &["436"] },
    MccEntry { alpha2: "KG", name: "Kyrgyzstan", mcc: &["437"] },
    MccEntry { alpha2: "TM", name: "Turkmenistan", mcc: &["438"] },
    MccEntry { alpha2: "JP", name: "Japan", mcc: &["440", "441"] },
    MccEntry { alpha2: "KR", name: "South Korea", mcc: &["450"] },
    MccEntry { alpha2: "VN", name: "Vietnam", mcc: &["452"] },
    MccEntry { alpha2: "HK", name: "Hong Kong", mcc: &["454"] },
    MccEntry { alpha2: "MO", name: "Macao", mcc: &["455"] },
    MccEntry { alpha2: "KH", name: "Cambodia", mcc: &["456"] },
    MccEntry { alpha2: "LA", name: "Laos", mcc: &["457"] },
    MccEntry { alpha2: "CN", name: "China", mcc: &["460"] },
    MccEntry { alpha2: "TW", name: "Taiwan", mcc: &["466"] },
    MccEntry { alpha2: "KP", name: "North Korea", mcc: &["467"] },
    MccEntry { alpha2: "BD", name: "Bangladesh", mcc: &["470"] },
    MccEntry { alpha2: "MV", name: "Maldives", mcc: &["472"] },

    // Oceania and South-East Asia
    MccEntry { alpha2: "MY", name: "Malaysia", mcc: &["502"] },
    MccEntry { alpha2: "AU", name: "Australia", mcc: &["505"] },
    MccEntry { alpha2: "ID", name: "Indonesia", mcc: &["510"] },
    MccEntry { alpha2: "TL", name: "Timor-Leste", mcc: &["514"] },
    MccEntry { alpha2: "PH", name: "Philippines", mcc: &["515"] },
    MccEntry { alpha2: "TH", name: "Thailand", mcc: &["520"] },
    MccEntry { alpha2: "SG", name: "Singapore", mcc: &["525"] },
    MccEntry { alpha2: "BN", name: "Brunei", mcc: &["528"] },
    MccEntry { alpha2: "NZ", name: "New Zealand", mcc: &["530"] },
    MccEntry { alpha2: "PG", name: "Papua New Guinea", mcc: &["537"] },
    MccEntry { alpha2: "TO", name: "Tonga", mcc: &["539"] },
    MccEntry { alpha2: "SB", name: "Solomon Islands", mcc: &["540"] },
    MccEntry { alpha2: "VU", name: "Vanuatu", mcc: &["541"] },
    MccEntry { alpha2: "FJ", name: "Fiji", mcc: &["542"] },

    // Africa
    MccEntry { alpha2: "EG", name: "Egypt", mcc: &["602"] },
    MccEntry { alpha2: "DZ", name: "Algeria", mcc: &["603"] },
    MccEntry { alpha2: "MA", name: "Morocco", mcc: &["604"] },
    MccEntry { alpha2: "TN", name: "Tunisia", mcc: &["605"] },
    MccEntry { alpha2: "LY", name: "Libya", mcc: &["606"] },
    MccEntry { alpha2: "GM", name: "Gambia", mcc: &["607"] },
    MccEntry { alpha2: "SN", name: "Senegal", mcc: &["608"] },
    MccEntry { alpha2: "MR", name: "Mauritania", mcc: &["609"] },
    MccEntry { alpha2: "ML", name: "Mali", mcc: &["610"] },
    MccEntry { alpha2: "GN", name: "Guinea", mcc: &["611"] },
    MccEntry { alpha2: "CI", name: "Cote d'Ivoire", mcc: &["612"] },
    MccEntry { alpha2: "BF", name: "Burkina Faso", mcc: &["613"] },
    MccEntry { alpha2: "NE", name: "Niger", mcc: &["614"] },
    MccEntry { alpha2: "TG", name: "Togo", mcc: &["615"] },
    MccEntry { alpha2: "BJ", name: "Benin", mcc: &["616"] },
    MccEntry { alpha2: "MU", name: "Mauritius", mcc: &["617"] },
    MccEntry { alpha2: "LR", name: "Liberia", mcc: &["618"] },
    MccEntry { alpha2: "SL", name: "Sierra Leone", mcc: &["619"] },
    MccEntry { alpha2: "GH", name: "Ghana", mcc: &["620"] },
    MccEntry { alpha2: "NG", name: "Nigeria", mcc: &["621"] },
    MccEntry { alpha2: "TD", name: "Chad", mcc: &["622"] },
    MccEntry { alpha2: "CF", name: "Central African Republic", mcc: &["623"] },
    MccEntry { alpha2: "CM", name: "Cameroon", mcc: &["624"] },
    MccEntry { alpha2: "CV", name: "Cabo Verde", mcc: &["625"] },
    MccEntry { alpha2: "CD", name: "DR Congo", mcc: &["630"] },
    MccEntry { alpha2: "AO", name: "Angola", mcc: &["631"] },
    MccEntry { alpha2: "SD", name: "Sudan", mcc: &["634"] },
    MccEntry { alpha2: "RW", name: "Rwanda", mcc: &["635"] },
    MccEntry { alpha2: "ET", name: "Ethiopia", mcc: &["636"] },
    MccEntry { alpha2: "SO", name: "Somalia", mcc: &["637"] },
    MccEntry { alpha2: "KE", name: "Kenya", mcc: &["639"] },
    MccEntry { alpha2: "TZ", name: "Tanzania", mcc: &["640"] },
    MccEntry { alpha2: "UG", name: "Uganda", mcc: &["641"] },
    MccEntry { alpha2: "BI", name: "Burundi", mcc: &["642"] },
    MccEntry { alpha2: "MZ", name: "Mozambique", mcc: &["643"] },
    MccEntry { alpha2: "ZM", name: "Zambia", mcc: &["645"] },
    MccEntry { alpha2: "MG", name: "Madagascar", mcc: &["646"] },
    MccEntry { alpha2: "ZW", name: "Zimbabwe", mcc: &["648"] },
    MccEntry { alpha2: "NA", name: "Namibia", mcc: &["649"] },
    MccEntry { alpha2: "MW", name: "Malawi", mcc: &["650"] },
    MccEntry { alpha2: "LS", name: "Lesotho", mcc: &["651"] },
    MccEntry { alpha2: "BW", name: "Botswana", mcc: &["652"] },
    MccEntry { alpha2: "SZ", name: "Eswatini", mcc: &["653"] },
    MccEntry { alpha2: "ZA", name: "South Africa", mcc: &["655"] },

    // Central and South America
    MccEntry { alpha2: "BZ", name: "Belize", mcc: &["702"] },
    MccEntry { alpha2: "GT", name: "Guatemala", mcc: &["704"] },
    MccEntry { alpha2: "SV", name: "El Salvador", mcc: &["706"] },
    MccEntry { alpha2: "HN", name: "Honduras", mcc: &["708"] },
    MccEntry { alpha2: "NI", name: "Nicaragua", mcc: &["710"] },
    MccEntry { alpha2: "CR", name: "Costa Rica", mcc: &["712"] },
    MccEntry { alpha2: "PA", name: "Panama", mcc: &["714"] },
    MccEntry { alpha2: "PE", name: "Peru", mcc: &["716"] },
    MccEntry { alpha2: "AR", name: "Argentina", mcc: &["722"] },
    MccEntry { alpha2: "BR", name: "Brazil", mcc: &["724"] },
    MccEntry { alpha2: "CL", name: "Chile", mcc: &["730"] },
    MccEntry { alpha2: "CO", name: "Colombia", mcc: &["732"] },
    MccEntry { alpha2: "VE", name: "Venezuela", mcc: &["734"] },
    MccEntry { alpha2: "BO", name: "Bolivia", mcc: &["736"] },
    MccEntry { alpha2: "GY", name: "Guyana", mcc: &["738"] },
    MccEntry { alpha2: "EC", name: "Ecuador", mcc: &["740"] },
    MccEntry { alpha2: "PY", name: "Paraguay", mcc: &["744"] },
    MccEntry { alpha2: "SR", name: "Suriname", mcc: &["746"] },
    MccEntry { alpha2: "UY", name: "Uruguay", mcc: &["748"] },
];

/// Table entry for a two-letter country code, case-insensitive.
pub fn lookup(alpha2: &str) -> Option<&'static MccEntry> {
    MCC_TABLE.iter().find(|e| e.alpha2.eq_ignore_ascii_case(alpha2.trim()))
}
