//! Output formatting module

use serde::Serialize;
use tuners_domain::constants::cost_table_rows;
use tuners_types::{OutputFormat, ReportEntry, Result};

/// One row of the cost table in JSON output
#[derive(Debug, Serialize)]
struct CostRow {
    category: &'static str,
    insurance_cost: &'static str,
    finance_option: &'static str,
}

pub fn output_report(output_format: OutputFormat, report: &[ReportEntry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nPrediction Results");
    println!("==================");

    if report.is_empty() {
        println!("No predictions returned");
        return Ok(());
    }

    for entry in report {
        println!("{}: {}", entry.category, entry.probability_label());
        println!("  Insurance Cost:  {}", entry.cost.insurance_cost);
        println!("  Finance Option:  {}", entry.cost.finance_option);
    }

    Ok(())
}

pub fn output_cost_table(output_format: OutputFormat) -> Result<()> {
    let rows: Vec<CostRow> = cost_table_rows()
        .into_iter()
        .map(|(category, cost)| CostRow {
            category: category.label(),
            insurance_cost: cost.insurance_cost,
            finance_option: cost.finance_option,
        })
        .collect();

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&rows)?;
        println!("{}", content);
        return Ok(());
    }

    println!("{:<10} {:<12} {}", "Vehicle", "Insurance", "Finance Option");
    println!("{}", "-".repeat(60));
    for row in rows {
        println!(
            "{:<10} {:<12} {}",
            row.category, row.insurance_cost, row.finance_option
        );
    }

    Ok(())
}
