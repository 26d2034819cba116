// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_converter::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Radix Converter Example ===\n");

    let converter = RadixConverterBuilder::new()
        .double_output()
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    let inputs = [("FF.8", 16, 3), ("-3.5", 10, 2), ("Z", 36, 10), ("0.1", 10, 2)];

    for (literal, source, target) in inputs {
        if !is_valid(literal, source) {
            println!("'{}' is not a valid {} number", literal, base_name(source));
            continue;
        }

        let report = converter.convert(literal, source, target).unwrap();
        println!("Source: {} ({})", report.source, report.source_label());
        println!("  decimal: {}", report.decimal);
        println!("  {}: {}", report.target_label(), report.target);
        for (radix, rendered) in &report.alternates {
            println!("  {} ({}): {}", base_name(radix.get()), radix, rendered);
        }
        println!();
    }

    println!("=== Rejected Input ===\n");
    match converter.convert("1G", 16, 10) {
        Ok(report) => println!("Unexpected success: {}", report.target),
        Err(e) => println!("Error: {}", e),
    }
}
