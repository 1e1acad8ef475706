//! Dashboard page rendering.

use bact_model::{CellValue, StaticTable, TidyRow, TidyTable, WideTable};
use bact_report::{ChartOptions, DashboardPage, Palette, TableBlock, render_grouped_bar_svg};
use bact_transform::GroupedBars;

fn mixture_table() -> StaticTable {
    StaticTable::new(
        "Mixtures",
        vec!["Bacteria type".into(), "Day 1".into(), "Day 2".into()],
        vec![
            vec![CellValue::text("Lactococci"), 2.0.into(), 2.0.into()],
            vec![CellValue::text("Propionibacteria"), 1.0.into(), 1.0.into()],
        ],
    )
}

#[test]
fn static_table_renders_without_index() {
    let html = TableBlock::from_static(&mixture_table()).to_html();
    insta::assert_snapshot!(html.trim_end(), @r"
    <table>
    <thead><tr>
    <th>Bacteria type</th><th>Day 1</th><th>Day 2</th></tr></thead>
    <tbody>
    <tr><td>Lactococci</td><td>2</td><td>2</td></tr>
    <tr><td>Propionibacteria</td><td>1</td><td>1</td></tr>
    </tbody>
    </table>
    ");
}

#[test]
fn uploaded_table_renders_with_index() {
    let table = WideTable::new(
        vec!["Cat".into(), "Day 1".into()],
        vec![vec!["A & B".into(), CellValue::Missing]],
    );
    let html = TableBlock::from_wide(&table).to_html();
    assert!(html.contains("<th></th><th>Cat</th><th>Day 1</th>"));
    assert!(html.contains("<tr><td class=\"index\">0</td><td>A &amp; B</td><td></td></tr>"));
}

#[test]
fn page_keeps_block_order() {
    let tidy = TidyTable {
        identity_column: "Bacteria type".to_string(),
        bucket_column: "Day".to_string(),
        value_column: "Count".to_string(),
        rows: vec![TidyRow::new("Lactococci", "Day 1", 2.0)],
    };
    let svg = render_grouped_bar_svg(
        &GroupedBars::from_tidy(&tidy),
        &ChartOptions::default()
            .with_title("Mixture dynamics")
            .with_palette(Palette::Pastel),
    )
    .expect("render chart");

    let mut page = DashboardPage::new("Bacteria dynamics");
    page.heading("Reference")
        .table(TableBlock::from_static(&mixture_table()))
        .chart(svg)
        .divider()
        .paragraph("Done");
    let html = page.to_html();

    let heading = html.find("<h2>Reference</h2>").expect("heading");
    let table = html.find("<table>").expect("table");
    let chart = html.find("class=\"chart\"").expect("chart");
    let divider = html.find("<hr>").expect("divider");
    assert!(heading < table && table < chart && chart < divider);
    assert!(html.contains("Mixture dynamics"));
    assert!(html.trim_end().ends_with("</html>"));
}
