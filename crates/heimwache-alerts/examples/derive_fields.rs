use heimwache_alerts::{AlertFields, StatusMap};
use heimwache_core::{CheckEvent, EnvironmentInfo};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1);
    let reader: Box<dyn BufRead> = match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let env = EnvironmentInfo::default();
    let statuses = StatusMap::default();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: CheckEvent = serde_json::from_str(&line)?;
        let fields = AlertFields::derive(&event, &env, &statuses);

        println!(
            "{}\t{}\t{}",
            fields.status, fields.event_name, fields.output
        );
    }

    Ok(())
}
