pub mod export;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use snoozer::leagues::{all_leagues, SEASONS, STATS_POSITIONS};
use snoozer::seating::{Area, Seat, Tier};

/// Header plus string rows; rendered to the terminal or written as CSV.
#[derive(Debug, Clone, Default)]
pub struct Tabular {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Tabular {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(str::to_string).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

pub fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_else(|| "-".to_string())
}

pub fn owner_cell(is_rostered: bool, owner: &Option<String>) -> String {
    match (is_rostered, owner) {
        (true, Some(o)) => format!("Yes ({})", o),
        (true, None) => "Yes".to_string(),
        (false, _) => "No".to_string(),
    }
}

pub fn pluralize(count: f64, singular: &str, plural: &str) -> String {
    let word = if count == 1.0 { singular } else { plural };
    format!("{} {}", count, word)
}

pub fn print_table(t: &Tabular) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(
        t.headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for row in &t.rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|v| {
                let numeric = v.parse::<f64>().is_ok();
                let cell = Cell::new(v);
                if numeric {
                    cell.set_alignment(CellAlignment::Right)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Subpar => Color::Red,
        Tier::Good => Color::Yellow,
        Tier::Great => Color::Cyan,
        Tier::Amazing => Color::Green,
    }
}

pub fn print_seats(seats: &[&Seat]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Seat").add_attribute(Attribute::Bold),
        Cell::new("Employee"),
        Cell::new("Block"),
        Cell::new("X"),
        Cell::new("Y"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Tier"),
        Cell::new("Why"),
    ]);

    for i in [0, 3, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for seat in seats {
        let employee = if seat.is_floater {
            Cell::new(&seat.employee).fg(Color::DarkGrey)
        } else {
            Cell::new(&seat.employee)
        };
        let (score, tier, why) = match &seat.score {
            Some(s) => (
                Cell::new(s.score).fg(Color::Cyan),
                Cell::new(s.tier).fg(tier_color(s.tier)),
                Cell::new(&s.description),
            ),
            None => (Cell::new("-"), Cell::new("-"), Cell::new("")),
        };
        table.add_row(vec![
            Cell::new(seat.id).add_attribute(Attribute::Bold),
            employee,
            Cell::new(&seat.block),
            Cell::new(format!("{:.0}", seat.x)),
            Cell::new(format!("{:.0}", seat.y)),
            score,
            tier,
            why,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_areas(areas: &[Area]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Area").add_attribute(Attribute::Bold),
        Cell::new("Origin"),
        Cell::new("Size"),
    ]);
    for a in areas {
        table.add_row(vec![
            Cell::new(a.name),
            Cell::new(format!("({:.0}, {:.0})", a.x, a.y)),
            Cell::new(format!("{:.0} x {:.0}", a.width, a.height)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_leagues() {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("League").add_attribute(Attribute::Bold),
        Cell::new("Key"),
        Cell::new("Id"),
    ]);
    for league in all_leagues() {
        table.add_row(vec![
            Cell::new(league.display_name()),
            Cell::new(league),
            Cell::new(league.id()),
        ]);
    }
    println!("\n{}", table);

    let seasons: Vec<String> = SEASONS.iter().map(|s| s.to_string()).collect();
    println!("Seasons: {}", seasons.join(", "));
    println!("Positions: {}", STATS_POSITIONS.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_on_exactly_one() {
        assert_eq!(pluralize(1.0, "game", "games"), "1 game");
        assert_eq!(pluralize(20.0, "snap", "snaps"), "20 snaps");
    }

    #[test]
    fn owner_cell_variants() {
        assert_eq!(owner_cell(true, &Some("Al".into())), "Yes (Al)");
        assert_eq!(owner_cell(true, &None), "Yes");
        assert_eq!(owner_cell(false, &Some("Al".into())), "No");
    }
}
