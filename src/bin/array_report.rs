// Standalone numeric exercise: generate a random sample and report on it.
use pulseboard::report;

fn main() {
    println!("Generating random array...");
    let report = report::produce_report();

    println!("Sum of array: {}", report.sum);
    println!("Filtered array: {:?}", report.evens);
    match report.max {
        Some(max) => println!("Maximum value: {max}"),
        None => println!("Maximum value: n/a"),
    }
}
