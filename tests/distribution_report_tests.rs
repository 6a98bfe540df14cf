use pretty_assertions::assert_eq;

use rebat::core::distribution::render_table;
use rebat::{FrequencyMap, aggregate};

#[test]
fn metric_file_to_rendered_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("depth.txt");
    std::fs::write(&file, "# state depth\n1 5\n2 5 # two states at depth 5\n3 1\n").unwrap();

    let map = FrequencyMap::load(&file).unwrap();
    let (report, buffer) = aggregate(&map, 2);
    assert_eq!(buffer, vec![5, 5, 1]);

    let rendered = render_table(&report, "depth", 2);
    let expected = "depth count top 2:\n\
                    depth\t\tstates\t\tpct%\n\
                    ========================================\n\
                    5\t\t2\t\t66.67\n\
                    1\t\t1\t\t33.33\n\
                    ========================================\n\
                    \t\t3\t\t100.0\n";
    assert_eq!(rendered, expected);
}

#[test]
fn json_report_keeps_the_same_numbers() {
    let map: FrequencyMap = [(1, 5), (2, 5), (3, 1)].into_iter().collect();
    let (report, _) = aggregate(&map, 2);

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_states"], 3);
    assert_eq!(json["shown_states"], 3);
    assert_eq!(json["rows"][0]["value"], 5);
    assert_eq!(json["rows"][0]["states"], 2);
    assert_eq!(json["rows"][0]["pct"], 66.67);
}
