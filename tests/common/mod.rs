use colfit::{LayoutConfig, TableSnapshot};
use serde_json::json;

/// Config shared by the width-fitting scenarios: 6.5px glyphs, 10px padding.
pub fn scenario_config(available_width_px: f64) -> LayoutConfig {
    LayoutConfig::new(6.5, 10.0, available_width_px)
}

/// Two-column sample: a short and a long name, small quantities.
pub fn name_qty_snapshot() -> TableSnapshot {
    TableSnapshot::new(
        vec!["name".to_string(), "qty".to_string()],
        vec![vec![json!("ab"), json!(1)], vec![json!("abcdef"), json!(22)]],
    )
}

/// Wider sample with heterogeneous cells: numbers, strings, booleans,
/// composites, and nulls.
pub fn people_snapshot() -> TableSnapshot {
    TableSnapshot::new(
        vec![
            "id".to_string(),
            "name".to_string(),
            "active".to_string(),
            "tags".to_string(),
            "note".to_string(),
        ],
        vec![
            vec![
                json!(1),
                json!("Ada Lovelace"),
                json!(true),
                json!(["math", "pioneer"]),
                json!(null),
            ],
            vec![
                json!(2),
                json!("Grace Hopper"),
                json!(false),
                json!(["navy"]),
                json!("COBOL"),
            ],
            vec![
                json!(3),
                json!("Alan Turing"),
                json!(true),
                json!([]),
                json!(null),
            ],
        ],
    )
}
