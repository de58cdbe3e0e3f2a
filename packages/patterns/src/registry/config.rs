//! The statute pattern table.
//!
//! Serial entries come first, in [`Category`] declaration order, followed by
//! named entries that map a well-known phrase to one statute.

use super::core::PatternRegistry;
use super::fragments::{digit_list, letters, one_of, with_acronym, with_blg, with_number};
use super::types::PatternSpec;
use crate::category::Category;
use crate::error::Result;

/// Words that turn "Act" into part of a longer marker ("An Act to ...",
/// "Republic Act", "Commonwealth Act").
const NON_ACT_INDICATORS: [&str; 5] = ["An", "Republic", "Rep", "Rep.", "Commonwealth"];

/// Executive orders commonly cited by number alone.
const POPULAR_EXECUTIVE_ORDERS: [&str; 21] = [
    "292", "209", "229", "228", "14", "1008", "648", "129-A", "226", "227", "91", "214", "59",
    "191", "272", "187", "62", "33", "111", "47", "233",
];

/// Letters of instruction commonly cited by number alone.
const POPULAR_LETTERS_OF_INSTRUCTION: [&str; 13] = [
    "474", "729", "97", "270", "926", "1295", "19", "174", "273", "767", "1416", "713", "968",
];

/// Bar matters commonly cited by number alone.
const POPULAR_BAR_MATTERS: [&str; 12] = [
    "803", "1922", "1645", "850", "287", "1132", "1755", "1960", "209", "1153", "411", "356",
];

/// Create the registry of Philippine statute patterns.
///
/// # Errors
/// Returns an error if an entry fails to compile or contradicts its own
/// samples; the table is checked by the tests below, so this only fails
/// after a bad edit.
pub fn create_statute_registry() -> Result<PatternRegistry> {
    let mut registry = PatternRegistry::new();

    for spec in serial_specs() {
        registry.register(spec)?;
    }
    for spec in named_specs() {
        registry.register(spec)?;
    }

    Ok(registry)
}

fn serial_specs() -> Vec<PatternSpec> {
    vec![
        PatternSpec::serial(
            Category::RepublicAct,
            &[
                with_number(&letters(&["R", "A"])),
                with_number(&with_acronym(r"Rep(?:ublic|\.)?\s+Act", &["R", "A"])),
            ],
            &[digit_list(6)],
        )
        .with_matches([
            "Rep Act No. 386",
            "R.A. 8424",
            "Republic Act (R.A.) No. 9262",
            "RA Nos. 965 and 2630",
        ]),
        PatternSpec::serial(
            Category::CommonwealthAct,
            &[
                with_number(&letters(&["C", "A"])),
                with_number(&with_acronym(r"Com(?:monwealth|\.)?\s+Act", &["C", "A"])),
            ],
            &[digit_list(3)],
        )
        .with_matches(["C.A. No. 613", "Commonwealth Act (C.A.) No. 141"])
        .with_excludes(["ca. 150 years"]),
        PatternSpec::serial(
            Category::Act,
            &[with_number(r"(?-i:\bActs?|\bACTS?)")],
            &[digit_list(4)],
        )
        .with_not_preceded_by(NON_ACT_INDICATORS)
        .with_matches(["Act No. 3815", "Act Nos. 124, 3015", "ACT NO. 2711"])
        .with_excludes(["act 5 times"]),
        PatternSpec::serial(
            Category::ExecutiveOrder,
            &[
                with_number(&letters(&["E", "O"])),
                with_number(r"Exec(?:utive|\.)?\s+Order"),
            ],
            &[one_of(&POPULAR_EXECUTIVE_ORDERS)],
        )
        .with_matches(["E.O. 292", "EO 47", "Executive Order No. 209"])
        .with_excludes(["EO 1"]),
        PatternSpec::serial(
            Category::PresidentialDecree,
            &[
                with_number(&letters(&["P", "D"])),
                with_number(&with_acronym(
                    r"Pres(?:idential|\.)?\s+Dec(?:ree|\.)?",
                    &["P", "D"],
                )),
            ],
            &[digit_list(4)],
        )
        .with_matches(["P.D. No. 1474-B", "Presidential Decree No. 442", "PD 1606"]),
        PatternSpec::serial(
            Category::BatasPambansa,
            &[
                with_blg(&letters(&["B", "P"])),
                with_blg(&with_acronym(r"Batas\s+Pambansa", &["B", "P"])),
            ],
            &[digit_list(3)],
        )
        .with_matches(["B.P. Blg. 22", "Batas Pambansa Blg. 129", "B.  P.   22"]),
        PatternSpec::serial(
            Category::LetterOfInstruction,
            &[
                with_number(&letters(&["L", "O", "I"])),
                with_number(r"Letters?\s+of\s+Instruction"),
            ],
            &[one_of(&POPULAR_LETTERS_OF_INSTRUCTION)],
        )
        .with_matches(["LOI 474", "Letter of Instruction No. 1295"])
        .with_excludes(["Letter of Instruction No. 1"]),
        PatternSpec::serial(
            Category::AdministrativeMatter,
            &[
                with_number(&letters(&["A", "M"])),
                with_number(r"Adm(?:in)?\.?\s+Matter"),
                with_number(r"Administrative\s+Matter"),
            ],
            &[r"(?:\d{1,2}-){3}SC\b".to_string(), r"99-10-05-0\b".to_string()],
        )
        .with_matches(["A.M. No. 02-11-10-SC", "Admin Matter No. 99-10-05-0"])
        .with_excludes(["A.M. 141241", "Administrative Matter No. 12-12-12"]),
        PatternSpec::serial(
            Category::BarMatter,
            &[
                with_number(&letters(&["B", "M"])),
                with_number(r"Bar\s+Matter"),
            ],
            &[one_of(&POPULAR_BAR_MATTERS)],
        )
        .with_matches(["Bar Matter No.803", "B.M. No. 1922"]),
        PatternSpec::serial(
            Category::CircularSC,
            &[with_number(r"SC\s+Circular")],
            &[one_of(&["19"])],
        )
        .with_matches(["SC Circular No. 19"])
        .with_excludes(["SC Circular No. 1"]),
        PatternSpec::serial(
            Category::CircularOCA,
            &[with_number(r"OCA\s+Circular")],
            &[one_of(&["39-02"])],
        )
        .with_matches(["OCA Circular No. 39-02"]),
        PatternSpec::serial(
            Category::ResolutionEnBanc,
            &[r"Resolution\s+of\s+the\s+Court\s+En\s+Banc\s+dated".to_string()],
            &[one_of(&["10-15-1991"])],
        )
        .with_matches(["Resolution of the Court En Banc dated 10-15-1991"]),
        PatternSpec::serial(
            Category::VetoMessage,
            &[r"Veto\s+Message\s+-".to_string()],
            &[r"\d{5,}\b".to_string()],
        )
        .with_matches(["Veto Message - 11534"])
        .with_excludes(["Veto Message"]),
    ]
}

fn named_specs() -> Vec<PatternSpec> {
    let mut specs = vec![
        PatternSpec::named(
            "Spanish Civil Code",
            Category::Spain,
            "civil",
            r"(?:(?:Old\s+)?\[?Spanish\]?|Old)\s+Civil\s+Code(?:\s+of\s+18\d{2})?",
        )
        .with_matches(["Spanish Civil Code", "Old Civil Code", "old Spanish Civil Code of 1889"]),
        PatternSpec::named(
            "Spanish Penal Code",
            Category::Spain,
            "penal",
            r"(?:(?:Old\s+)?\[?Spanish\]?|Old)\s+Penal\s+Code(?:\s+of\s+18\d{2})?",
        )
        .with_matches(["Spanish Penal Code", "Old Penal Code"]),
        PatternSpec::named(
            "Code of Commerce",
            Category::Spain,
            "commerce",
            r"(?:(?:Old\s+)?\[?Spanish\]?\s+)?Code\s+of\s+Commerce",
        )
        .with_matches(["Code of Commerce", "Spanish Code of Commerce"]),
    ];

    for year in ["1935", "1973", "1987"] {
        let regex = format!(
            r"{year}\s+(?:Phil(?:ippine)?s?\.?\s+)?(?:Constitution\b|Const\b\.?)|(?:Phil(?:ippine)?s?\.?\s+)?Constitution\s+of\s+{year}\b"
        );
        specs.push(
            PatternSpec::named(format!("{year} Constitution"), Category::Constitution, year, &regex)
                .with_matches([
                    format!("{year} Constitution"),
                    format!("{year} PHIL CONST"),
                    format!("{year} Phil. Const."),
                    format!("Philippine Constitution of {year}"),
                ]),
        );
    }

    for year in ["1940", "1964"] {
        let regex = format!(
            r"{year}\s+(?:Revised\s+)?Rules\s+of\s+Court|(?:Revised\s+)?Rules\s+of\s+Court\s+of\s+{year}\b"
        );
        specs.push(
            PatternSpec::named(format!("{year} Rules of Court"), Category::RulesOfCourt, year, &regex)
                .with_matches([
                    format!("{year} Rules of Court"),
                    format!("Revised Rules of Court of {year}"),
                ]),
        );
    }

    specs.extend([
        PatternSpec::named(
            "Code of Professional Responsibility",
            Category::RulesOfCourt,
            "cpr",
            r"Code\s+of\s+Professional\s+Responsibility",
        )
        .with_matches(["Code of Professional Responsibility"]),
        PatternSpec::named(
            "Civil Code of the Philippines",
            Category::RepublicAct,
            "386",
            r"(?:New\s+)?Civil\s+Code\s+of\s+the\s+Phil(?:ippine)?s\b|New\s+Civil\s+Code",
        )
        .with_matches(["Civil Code of the Philippines", "New Civil Code"]),
        PatternSpec::named(
            "Revised Penal Code",
            Category::Act,
            "3815",
            r"Revised\s+Penal\s+Code",
        )
        .with_matches(["Revised Penal Code"]),
        PatternSpec::named(
            "Family Code",
            Category::ExecutiveOrder,
            "209",
            r"Family\s+Code(?:\s+of\s+the\s+Philippines)?",
        )
        .with_matches(["Family Code", "Family Code of the Philippines"]),
        PatternSpec::named(
            "Labor Code",
            Category::PresidentialDecree,
            "442",
            r"Labor\s+Code(?:\s+of\s+the\s+Philippines)?",
        )
        .with_matches(["Labor Code of the Philippines"]),
        PatternSpec::named(
            "Local Government Code",
            Category::RepublicAct,
            "7160",
            r"Local\s+Government\s+Code(?:\s+of\s+1991)?",
        )
        .with_matches(["Local Government Code of 1991"]),
        PatternSpec::named(
            "National Internal Revenue Code",
            Category::RepublicAct,
            "8424",
            r"National\s+Internal\s+Revenue\s+Code(?:\s+of\s+1997)?",
        )
        .with_matches(["National Internal Revenue Code of 1997"]),
    ]);

    specs
}
