// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_stats::prelude::*;
use std::io;

fn main() {
    println!("=== Decimal Statistics Example ===\n");

    // Columns whose values differ only in the 40th significant digit
    let data = "\
# three columns, three rows
1.000000000000000000000000000000000000001e+50, 4.000000000000000000000000000000000000004e+50, 7.000000000000000000000000000000000000007e+50
2.000000000000000000000000000000000000002e+50, 5.000000000000000000000000000000000000005e+50, 8.000000000000000000000000000000000000008e+50
3.000000000000000000000000000000000000003e+50, 6.000000000000000000000000000000000000006e+50, 9.000000000000000000000000000000000000009e+50
";

    let config = RunConfig::new(Precision::clamped(40));
    let pipeline = TablePipeline::new(config);
    let sink = TextReportSink::new(io::stdout(), Precision::clamped(40));

    match pipeline.process_str("inline", data) {
        Ok(report) => sink.on_event(ReportEvent::TableCompleted {
            report,
            timestamp: chrono::Utc::now(),
        }),
        Err(err) => println!("Error: {}", err),
    }

    // The same square root at increasing precision
    println!("\n=== sqrt(2) ===");
    let two = Decimal::from(2i64);
    for digits in [10, 40, 100] {
        let precision = Precision::clamped(digits);
        println!("  {:>4} digits: {}", digits, sqrt(&two, precision));
    }

    // Amounts held as rust_decimal convert exactly
    println!("\n=== rust_decimal Amounts ===");
    let amounts = [
        rust_decimal::Decimal::new(1999, 2),
        rust_decimal::Decimal::new(2450, 2),
        rust_decimal::Decimal::new(-375, 2),
        rust_decimal::Decimal::new(10001, 2),
    ];
    let column = Column::new("amount", amounts.iter().copied().map(Decimal::from).collect());
    match ColumnAggregator::new(Precision::clamped(20)).aggregate(&column) {
        Ok(stats) => println!(
            "  sum {}  mean {}  median {}  stddev {}",
            stats.sum, stats.mean, stats.median, stats.stddev
        ),
        Err(err) => println!("Error: {}", err),
    }

    // Bad input is reported, not fatal
    println!("\n=== Error Handling ===");
    for text in ["1,2\n3\n", "1,2\n3,x\n"] {
        if let Err(err) = pipeline.process_str("broken", text) {
            println!("  {:?}: {}", err.kind(), err);
        }
    }
}
