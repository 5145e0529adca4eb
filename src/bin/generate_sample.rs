use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Date32Array, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const ADJECTIVES: &[&str] = &[
    "Eternal", "Crimson", "Silent", "Galactic", "Forgotten", "Iron", "Neon", "Hollow", "Wild",
    "Last", "Broken", "Golden",
];
const NOUNS: &[&str] = &[
    "Legend", "Frontier", "Odyssey", "Kingdom", "Protocol", "Horizon", "Dynasty", "Circuit",
    "Saga", "Requiem", "Tactics", "Rally",
];
const GENRES: &[&str] = &[
    "action", "adventure", "role-playing", "racing", "puzzle", "strategy", "platformer", "shooter",
    "sports", "stealth",
];
const HOOKS: &[&str] = &[
    "open world exploration",
    "a branching story",
    "tight combat",
    "cooperative multiplayer",
    "a haunting soundtrack",
    "inventive level design",
    "deep character customisation",
    "hand-drawn art",
];
const RATINGS: &[&str] = &["E", "E10+", "T", "M", "K-A"];

/// One generated row, before formatting for a specific file type.
struct SampleGame {
    name: String,
    launch_date: Option<NaiveDate>,
    date_text: String,
    metascore: Option<f64>,
    score_text: String,
    rating: Option<String>,
    details: Option<String>,
}

fn generate(rng: &mut SimpleRng, count: usize) -> Vec<SampleGame> {
    let epoch_start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default();
    (0..count)
        .map(|i| {
            let name = format!(
                "{} {} {}",
                rng.pick(ADJECTIVES),
                rng.pick(NOUNS),
                1 + rng.below(4)
            );

            // ~35 years of releases, written in a few different layouts.
            let date = epoch_start + chrono::Duration::days(rng.below(35 * 365) as i64);
            let (launch_date, date_text) = match i % 25 {
                0 => (None, "TBA".to_string()),
                1..=8 => (Some(date), date.format("%b %d, %Y").to_string()),
                9..=12 => (Some(date), date.format("%m/%d/%Y").to_string()),
                _ => (Some(date), date.format("%Y-%m-%d").to_string()),
            };

            let (metascore, score_text) = if i % 31 == 7 {
                (None, "tbd".to_string())
            } else {
                let score = rng.gauss(86.0, 5.0).round().clamp(70.0, 99.0);
                (Some(score), score.to_string())
            };

            let rating = match rng.below(20) {
                0 => None,
                1 => Some("AO".to_string()),
                _ => Some(rng.pick(RATINGS).to_string()),
            };

            let details = (rng.below(10) != 0).then(|| {
                format!(
                    "A {} game with {} and {}.",
                    rng.pick(GENRES),
                    rng.pick(HOOKS),
                    rng.pick(HOOKS)
                )
            });

            SampleGame {
                name,
                launch_date,
                date_text,
                metascore,
                score_text,
                rating,
                details,
            }
        })
        .collect()
}

fn write_csv(path: &str, games: &[SampleGame]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record(["Name", "Launch_date", "Metascore", "Rating", "Details"])?;
    for g in games {
        writer.write_record([
            g.name.as_str(),
            g.date_text.as_str(),
            g.score_text.as_str(),
            g.rating.as_deref().unwrap_or(""),
            g.details.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, games: &[SampleGame]) -> Result<()> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();

    let schema = Arc::new(Schema::new(vec![
        Field::new("Name", DataType::Utf8, false),
        Field::new("Launch_date", DataType::Date32, true),
        Field::new("Metascore", DataType::Float64, true),
        Field::new("Rating", DataType::Utf8, true),
        Field::new("Details", DataType::Utf8, true),
    ]));

    let names = StringArray::from(games.iter().map(|g| g.name.as_str()).collect::<Vec<_>>());
    let dates = Date32Array::from(
        games
            .iter()
            .map(|g| g.launch_date.map(|d| (d - epoch).num_days() as i32))
            .collect::<Vec<_>>(),
    );
    let scores = Float64Array::from(games.iter().map(|g| g.metascore).collect::<Vec<_>>());
    let ratings = StringArray::from(games.iter().map(|g| g.rating.as_deref()).collect::<Vec<_>>());
    let details = StringArray::from(games.iter().map(|g| g.details.as_deref()).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(names),
            Arc::new(dates),
            Arc::new(scores),
            Arc::new(ratings),
            Arc::new(details),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let games = generate(&mut rng, 520);

    write_csv("sample_games.csv", &games)?;
    write_parquet("sample_games.parquet", &games)?;

    let defective = games
        .iter()
        .filter(|g| g.launch_date.is_none() || g.metascore.is_none())
        .count();
    println!(
        "Wrote {} games ({defective} with an unusable date or score) to sample_games.csv and sample_games.parquet",
        games.len()
    );
    Ok(())
}
