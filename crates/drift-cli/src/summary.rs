use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use drift_cli::commands::{ValidateReport, ValueCountReport};
use drift_model::{DataClass, DriftTest};

pub fn print_roles(report: &ValidateReport) {
    println!("Job: {}", report.job_id);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Class")]);
    apply_table_style(&mut table);
    for (column, class) in report.roles.iter() {
        table.add_row(vec![Cell::new(column), class_cell(class)]);
    }
    println!("{table}");
    println!(
        "{} numerical, {} categorical",
        report.roles.numerical_columns().len(),
        report.roles.categorical_columns().len()
    );
}

pub fn print_value_counts(report: &ValueCountReport) {
    let comparison = &report.comparison;
    println!("Job: {}", report.job_id);
    println!(
        "Rows: baseline {}, sample {}",
        comparison.baseline_rows(),
        comparison.sample_rows()
    );
    if comparison.is_empty() {
        println!("No categorical values to compare.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Baseline"),
        header_cell("Sample"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (key, baseline, sample) in comparison.iter() {
        table.add_row(vec![
            Cell::new(&key.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&key.value),
            count_cell(baseline, sample == 0),
            count_cell(sample, baseline == 0),
        ]);
    }
    println!("{table}");
}

pub fn print_tests() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Suffix"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for test in DriftTest::ALL {
        table.add_row(vec![
            Cell::new(test.name()),
            match test.flattening_suffix() {
                Some(suffix) => Cell::new(suffix),
                None => dim_cell("-"),
            },
            Cell::new(test.description()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Highlights counts whose value is missing on the other side.
fn count_cell(count: u64, one_sided: bool) -> Cell {
    match count {
        0 => dim_cell(0),
        value if one_sided => Cell::new(value).fg(Color::Yellow),
        value => Cell::new(value),
    }
}

fn class_cell(class: DataClass) -> Cell {
    match class {
        DataClass::Numerical => Cell::new(class.as_str()).fg(Color::Cyan),
        DataClass::Categorical => Cell::new(class.as_str()).fg(Color::Magenta),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
