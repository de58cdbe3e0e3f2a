//! End-to-end recognition tests over realistic decision excerpts.

use std::path::Path;

use pretty_assertions::assert_eq;
use statute_patterns::{
    count_rules, default_registry, extract_rule, extract_rules, Category, CountedRule, Rule,
};

fn rule(category: &str, id: &str) -> Rule {
    Rule::parse(category, id).unwrap()
}

fn all(text: &str) -> Vec<Rule> {
    extract_rules(text).collect()
}

#[test]
fn test_republic_act_short_marker() {
    assert_eq!(all("Rep Act No. 386"), vec![rule("ra", "386")]);
}

#[test]
fn test_enumerated_serials_expand_in_order() {
    assert_eq!(
        all("RA Nos. 965 and 2630"),
        vec![rule("ra", "965"), rule("ra", "2630")]
    );
}

#[test]
fn test_administrative_matters_keep_hyphens() {
    assert_eq!(
        all("A.M. No. 02-11-10-SC ... A.M. No. 99-10-05-0"),
        vec![rule("rule_am", "02-11-10-sc"), rule("rule_am", "99-10-05-0")]
    );
}

#[test]
fn test_counted_by_first_occurrence() {
    let text = "Rep Act No. 386 is not the old Spanish Civil Code, but Rep Act No. 386 replaced it";
    assert_eq!(
        count_rules(text),
        vec![
            CountedRule {
                rule: rule("ra", "386"),
                mentions: 2,
            },
            CountedRule {
                rule: rule("spain", "civil"),
                mentions: 1,
            },
        ]
    );
}

#[test]
fn test_mixed_serial_markers() {
    let text = "A.M. No. 02-11-10-SC or the Rules on Declaration of Absolute; \
        Administrative Order No. 3 by enacting A.M. No. 99-10-05-0; Parenthetically, \
        under these statutes [referring to RA Nos. 965 and 2630], Commonwealth Act (C.A.) \
        No. 613, otherwise known as the <em>Philippine Immigration Act of 1940</em>";
    assert_eq!(
        all(text),
        vec![
            rule("rule_am", "02-11-10-sc"),
            rule("rule_am", "99-10-05-0"),
            rule("ra", "965"),
            rule("ra", "2630"),
            rule("ca", "613"),
        ]
    );
}

#[test]
fn test_decrees_with_suffixes() {
    let text = "There is no question that Section 2 of Presidential Decree No. 1474-B is \
        inconsistent with Section 62 of Republic Act No. 3844.; Petitioner's case was \
        decided under P.D. No. 971, as amended by P.D. No. 1707.";
    assert_eq!(
        all(text),
        vec![
            rule("pd", "1474-b"),
            rule("ra", "3844"),
            rule("pd", "971"),
            rule("pd", "1707"),
        ]
    );
}

#[test]
fn test_named_statutes() {
    assert_eq!(
        all("This is the 1987 PHIL CONST; hello world, the Spanish Penal Code."),
        vec![rule("const", "1987"), rule("spain", "penal")]
    );
    assert_eq!(
        all("Under the Revised Penal Code and the Family Code of the Philippines"),
        vec![rule("act", "3815"), rule("eo", "209")]
    );
}

#[test]
fn test_act_requires_standalone_marker() {
    for text in [
        "An Act No. 14",
        "This COMMONWEALTH Act No. 3015",
        "the act 5 times",
    ] {
        assert!(all(text).is_empty(), "{text}");
    }
    assert_eq!(all("This Republic Act No. 3015"), vec![rule("ra", "3015")]);
    assert_eq!(all("This Act No. 3015"), vec![rule("act", "3015")]);
}

#[test]
fn test_whitelisted_serials() {
    assert_eq!(all("see E.O. 292 and EO 1"), vec![rule("eo", "292")]);
    assert_eq!(all("Letter of Instruction No. 1295"), vec![rule("loi", "1295")]);
    assert_eq!(all("Bar Matter No.803"), vec![rule("rule_bm", "803")]);
    assert_eq!(all("SC Circular No. 19"), vec![rule("sc_cir", "19")]);
    assert_eq!(all("Veto Message - 11534"), vec![rule("veto", "11534")]);
}

#[test]
fn test_first_and_all_agree() {
    let text = "B.P. Blg. 22 and Batas Pambansa Blg. 129";
    let rules = all(text);
    assert_eq!(rules, vec![rule("bp", "22"), rule("bp", "129")]);
    assert_eq!(extract_rule(text), rules.first().cloned());
    assert_eq!(extract_rule("nothing cited"), None);
}

#[test]
fn test_found_rules_map_to_corpus_folders() {
    let base = Path::new("/corpus/statutes");
    for found in all("P.D. No. 1474-B and A.M. No. 02-11-10-SC") {
        let path = found.path_for(base);
        assert_eq!(Rule::from_path(&path), Some(found.clone()));
        assert!(found.serial_title().is_some());
    }
}

#[test]
fn test_default_registry_covers_every_category() {
    for category in Category::ALL {
        assert!(default_registry()
            .patterns()
            .any(|pattern| pattern.category() == category));
    }
}
