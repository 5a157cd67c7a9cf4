use rundown::{
    DiffStrategy, Error, format_timestamp, formatted_time_difference, parse_clock_string,
};

fn main() -> Result<(), Error> {
    // Clock string to milliseconds and back
    for input in ["0:00", "1:05", "2:30", "60:00", "123:45"] {
        let timestamp = parse_clock_string(input)?;
        println!(
            "{input:>7} -> {timestamp:>9} ms -> {}",
            format_timestamp(timestamp)
        );
    }

    // Malformed input fails loudly instead of producing garbage
    if let Err(e) = parse_clock_string("soon") {
        println!("\nRejected: {e}");
    }

    // The two historical difference strategies diverge on boundaries
    println!("\nelapsed -> remaining of a 1:30 item:");
    let item_length = parse_clock_string("1:30")?;
    for elapsed in [0, 500, 89_000, 89_999, 90_000, 95_000] {
        let asymmetric =
            formatted_time_difference(elapsed, item_length, DiffStrategy::AsymmetricRounding);
        let epsilon = formatted_time_difference(elapsed, item_length, DiffStrategy::FixedEpsilon);
        println!(
            "  at {:>7} ms: asymmetric-rounding {asymmetric:>6}, fixed-epsilon {epsilon:>6}",
            elapsed
        );
    }

    Ok(())
}
