//! Whole-document parsing tests against the fixtures in `tests/fixtures`.

use rbp::bandplan::{AttributeData, AttributeValue, Bandplan, Marker};
use rstest::rstest;

const REGION_NOTE: &str = include_str!("fixtures/60m.rbp");
const HF: &str = include_str!("fixtures/hf.rbp");

#[test]
fn test_60m_fragment() {
    let plan = Bandplan::parse(REGION_NOTE);
    assert_eq!(plan.len(), 1);

    let section = &plan.sections()[0];
    assert_eq!(section.title(), "60m");
    assert!(section.note().is_some_and(|note| note.contains("region note")));
    assert_eq!(section.band(), Some([5_351_500.0, 5_366_500.0]));

    let markers = section.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(
        markers[0],
        Marker {
            frequency: 144_050_000.0,
            description: "CW calling".to_string(),
        }
    );
    assert_eq!(markers[1].frequency, 144_600_000.0);
    assert_eq!(markers[1].description, "DATA centre of activity (MGM, RTTY)");
}

#[test]
fn test_markers_keep_header_and_note() {
    let plan = Bandplan::parse(REGION_NOTE);
    let markers = plan.find("60m").and_then(|s| s.get("markers")).unwrap();

    assert_eq!(markers.value_text(), Some("CSV MHz, description"));
    assert!(markers.note.is_none());
}

#[rstest]
#[case::empty("")]
#[case::blank_lines("\n\n   \n")]
#[case::top_level_note("#/ IARU Region 1 bandplan\n")]
#[case::only_comments("#/ one\n#// two\n")]
#[case::orphaned_globals("  type amateur\n  note everywhere\n")]
fn test_documents_without_sections(#[case] input: &str) {
    assert!(Bandplan::parse(input).is_empty());
}

#[test]
fn test_globals_reach_every_section() {
    let plan = Bandplan::parse(HF);
    assert_eq!(plan.len(), 2);

    for section in &plan {
        let links = section.get("links").unwrap();
        assert_eq!(
            links.data,
            Some(AttributeData::Lines(vec!["https://www.iaru-r1.org".to_string()]))
        );
    }
}

#[test]
fn test_section_attributes_override_globals() {
    let plan = Bandplan::parse(HF);

    assert_eq!(plan.find("40m").and_then(|s| s.kind()), Some("amateur"));
    assert_eq!(plan.find("20m").and_then(|s| s.kind()), Some("amateur, satellite"));
}

#[test]
fn test_hf_sections() {
    let plan = Bandplan::parse(HF);
    let titles: Vec<_> = plan.sections().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["40m", "20m"]);

    let forty = plan.find("40m").unwrap();
    assert_eq!(forty.note(), Some("shared with broadcasting above 7.1MHz"));
    assert_eq!(forty.band(), Some([7_000_000.0, 7_200_000.0]));
    assert_eq!(forty.markers().len(), 2);
    assert_eq!(forty.markers()[1].description, "QRP");

    let twenty = plan.find("20m").unwrap();
    assert_eq!(twenty.note(), None);
    assert_eq!(twenty.band(), Some([14_000_000.0, 14_350_000.0]));
}

#[test]
fn test_inline_comments_never_reach_attributes() {
    let plan = Bandplan::parse(HF);
    let forty = plan.find("40m").unwrap();

    assert!(forty.attributes().all(|(key, _)| !key.starts_with('#')));
}

#[test]
fn test_unregistered_key_passes_through() {
    let plan = Bandplan::parse("2m\n  mode FM #/ simplex only\n");
    let mode = plan.find("2m").and_then(|s| s.get("mode")).unwrap();

    assert_eq!(mode.value, Some(AttributeValue::Text("FM".to_string())));
    assert_eq!(mode.note.as_deref(), Some("simplex only"));
}

#[test]
fn test_undecodable_band_is_nan() {
    let plan = Bandplan::parse("x\n  band 1 parsec-2M\n");
    let [start, end] = plan.find("x").and_then(|s| s.band()).unwrap();

    assert!(start.is_nan());
    assert_eq!(end, 2_000_000.0);
}

#[test]
fn test_overlapping_sections() {
    let plan = Bandplan::parse(HF);

    let visible: Vec<_> = plan
        .overlapping(7_100_000.0, 10_000_000.0)
        .map(|s| s.title())
        .collect();
    assert_eq!(visible, vec!["40m"]);

    let reversed: Vec<_> = plan
        .overlapping(20_000_000.0, 7_150_000.0)
        .map(|s| s.title())
        .collect();
    assert_eq!(reversed, vec!["40m", "20m"]);
}

#[rstest]
#[case(REGION_NOTE)]
#[case(HF)]
fn test_parsing_is_idempotent(#[case] input: &str) {
    assert_eq!(Bandplan::parse(input), Bandplan::parse(input));
}

#[test]
fn test_crlf_input() {
    let unix = Bandplan::parse(HF);
    let windows = Bandplan::parse(&HF.replace('\n', "\r\n"));

    assert_eq!(unix, windows);
}

#[test]
fn test_marker_rows_with_their_own_unit() {
    let plan = Bandplan::parse(
        "2m\n  markers CSV MHz, description\n    144.050 MHz, CW calling\n    144.050M, CW\n",
    );
    let frequencies: Vec<f64> = plan
        .find("2m")
        .unwrap()
        .markers()
        .iter()
        .map(|m| m.frequency)
        .collect();

    assert_eq!(frequencies, vec![144_050_000.0, 144_050_000.0]);
}

#[test]
fn test_band_with_negative_exponent() {
    let plan = Bandplan::parse("x\n  band 1.5e-3k-2k\n");
    assert_eq!(plan.find("x").and_then(|s| s.band()), Some([1.5, 2_000.0]));
}
