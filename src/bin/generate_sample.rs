use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Beto", "Carolina", "Daniel", "Elena", "Fernando", "Gabriela", "Hugo", "Irene",
    "Javier", "Karla", "Luis", "Marta", "Nicolás", "Olga", "Pablo", "Quique", "Rosa", "Sergio",
    "Tania",
];
const LAST_NAMES: &[&str] = &["García", "López", "Martínez", "Pérez", "Rojas", "Vargas"];
const TEAMS: &[&str] = &["North", "South", "East", "West"];

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let output_path = "sample_names.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["id", "name", "team", "score", "nickname"])
        .expect("Failed to write header");

    let mut rows = 0;
    for (i, first) in FIRST_NAMES.iter().enumerate() {
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let team = TEAMS[i % TEAMS.len()];
        let score = format!("{:.1}", rng.random_range(0.0..10.0));
        // About a third of the rows have no nickname, a few use NA markers.
        let nickname = match rng.random_range(0..6) {
            0 | 1 => String::new(),
            2 => "NA".to_string(),
            _ => first.chars().take(3).collect(),
        };

        writer
            .write_record([
                (i + 1).to_string(),
                format!("{first} {last}"),
                team.to_string(),
                score,
                nickname,
            ])
            .expect("Failed to write row");
        rows += 1;
    }

    // A repeated entry: the draw treats it as one candidate.
    writer
        .write_record(["21", "Ana García", "North", "5.0", ""])
        .expect("Failed to write row");
    rows += 1;

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} rows to {output_path} (name columns: name, team, nickname)");
}
