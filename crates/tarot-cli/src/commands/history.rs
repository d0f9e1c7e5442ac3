use comfy_table::{ContentArrangement, Table};

use super::{GlobalOpts, open_session};

pub fn run(opts: &GlobalOpts, limit: Option<usize>) -> Result<(), String> {
    let session = open_session(opts);
    let readings = session.history().readings();

    if readings.is_empty() {
        println!("  No readings yet.");
        return Ok(());
    }

    let shown = limit.unwrap_or(readings.len()).min(readings.len());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Spread", "Cards"]);

    for reading in &readings[..shown] {
        let cards: Vec<String> = reading.cards.iter().map(|c| c.to_string()).collect();
        table.add_row(vec![
            reading.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            reading.spread_name.clone(),
            cards.join("\n"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {shown} of {} readings", readings.len());
    Ok(())
}
