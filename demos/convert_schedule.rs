use rundown::{Config, Error, ImportVariant, convert_csv, render_json};

fn main() -> Result<(), Error> {
    // Initialize logger
    simple_logger::SimpleLogger::new().init().unwrap();

    // A typical spreadsheet export: header row, decimal-comma lengths,
    // and a trailing computation row without a name.
    let csv = "\
Length,Name
1,0,Opening
4,0,News, Weather
2,0,Interview
0,0,
";

    println!("Input CSV:\n{csv}");

    for variant in ImportVariant::all() {
        let config = Config::new().with_import_variant(variant);
        let schedule = convert_csv(csv, &config);

        println!("=== Variant: {variant} ===");
        println!("Converted {} schedule items:", schedule.len());
        for (i, item) in schedule.items().iter().enumerate() {
            println!("  {}: {} [{}]", i + 1, item.name, item.length);
        }

        let json = render_json(schedule.items(), variant)?;
        println!("{json}\n");
    }

    Ok(())
}
