use comfy_table::{ContentArrangement, Table};

use super::{GlobalOpts, open_session};

pub fn run(opts: &GlobalOpts) -> Result<(), String> {
    let session = open_session(opts);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spread", "Cards", "Positions"]);

    for spread in session.spreads().iter() {
        let positions = if spread.position_labels().is_empty() {
            "—".to_string()
        } else {
            spread.position_labels().join(", ")
        };
        table.add_row(vec![
            spread.name().to_string(),
            spread.card_count().to_string(),
            positions,
        ]);
    }

    println!("{table}");
    Ok(())
}
