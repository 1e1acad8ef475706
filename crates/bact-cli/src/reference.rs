//! Fixed content of the dashboard: reference tables and page text.

use bact_model::{CellValue, StaticTable};

pub const PAGE_TITLE: &str = "Bacteria dynamics analysis";

pub const INTRO: &str = "Analysis of the antimicrobial activity of lactic acid bacteria \
    against hand microflora. This page presents the results of the study.";

pub const UPLOAD_PROMPT: &str = "Upload an Excel file with bacteria counts per day.";

pub const UPLOAD_HEADING: &str = "Uploaded data";

pub const UPLOAD_CHART_TITLE: &str = "Bacteria dynamics by day";

pub const LEGEND_TITLE: &str = "Bacteria type";

pub const EFFECT_HEADING: &str = "Bacteria spread area";

pub const EFFECT_LEAD: &str = "The main goal was to find the lactic acid bacteria with the \
    strongest antimicrobial effect. The table shows the average effect of each product on \
    the microbes.";

pub const EFFECT_CONCLUSION: &str = "Probiotic, Bifidum and Bioyogurt suppressed a large \
    number of microbes, while Narine and Acidophilic yogurt did not.";

pub const MIXTURE_HEADING: &str = "Bacteria development dynamics";

pub const MIXTURE_LEAD: &str = "Five different mixtures were used, each containing several \
    bacteria species. Here you can see the number of strains grown across the mixtures over \
    2 days of observation.";

pub const MIXTURE_CHART_TITLE: &str = "Bacteria development in different mixtures";

pub const SAMPLE_HEADING: &str = "Testing";

pub const SAMPLE_LINK_LABEL: &str = "Download sample file";

const NO_DATA: &str = "No data (the bacteria spread where the microbes were)";

/// Average antimicrobial effect per product.
pub fn antimicrobial_effect_table() -> StaticTable {
    let rows = [
        ("«Probiotic»", "Mean effect: 4 mm"),
        ("«Bifidum»", "Mean effect: 3.8 mm"),
        ("«Bioyogurt»", "Mean effect: 2.4 mm"),
        ("«Narine»", NO_DATA),
        ("«Acidophilic yogurt»", NO_DATA),
    ];
    StaticTable::new(
        EFFECT_HEADING,
        vec!["Product".to_string(), "Characteristic".to_string()],
        rows.iter()
            .map(|(product, note)| vec![CellValue::text(*product), CellValue::text(*note)])
            .collect(),
    )
}

/// Strains grown per bacteria type across the mixtures, over two days.
pub fn mixture_table() -> StaticTable {
    let rows: [(&str, i64, i64); 4] = [
        ("Lactobacilli", 4, 3),
        ("Streptococci", 3, 3),
        ("Lactococci", 2, 2),
        ("Propionibacteria", 1, 1),
    ];
    StaticTable::new(
        MIXTURE_HEADING,
        vec![
            LEGEND_TITLE.to_string(),
            "Day 1".to_string(),
            "Day 2".to_string(),
        ],
        rows.iter()
            .map(|&(kind, day1, day2)| {
                vec![
                    CellValue::text(kind),
                    CellValue::from(day1),
                    CellValue::from(day2),
                ]
            })
            .collect(),
    )
}
