use crate::scanner::Report;

/// Human-readable dump of one comparison, mirroring the order the values
/// were produced in: addresses, prices, spread, optional alert.
pub fn print_human(report: &Report) {
    println!("pool {}: {}", report.pair_a, report.pool_a);
    println!("pool {}: {}", report.pair_b, report.pool_b);
    println!("price {}: {}", report.pair_a, report.price_a);
    println!("price {}: {}", report.pair_b, report.price_b);
    println!(
        "divergence: {:.2}% (average price {})",
        report.difference_pct, report.average
    );

    if report.alert {
        println!("possible arbitrage opportunity");
    }
}
