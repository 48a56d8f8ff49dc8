//! Writes a synthetic film table in the viewer's input format.
//!
//! Usage: `generate_sample [OUT] [N]` (defaults: `mafima.csv`, 40 rows).

use anyhow::{Context, Result};

const HEADER: [&str; 6] = ["Cím", "Év", "Játékidő [perc]", "Értékelés", "Borító", "Link"];

const WORDS: [&str; 12] = [
    "Hajnal", "Tanú", "Szél", "Utca", "Vihar", "Kert", "Tükör", "Ház", "Folyó", "Éjszaka", "Lovas",
    "Puszta",
];

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

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.range(0, items.len() as u64 - 1) as usize]
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "mafima.csv".to_string());
    let n_rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("row count '{n}'"))?,
        None => 40,
    };

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    for i in 0..n_rows {
        let title = format!("{} {}", rng.pick(&WORDS), rng.pick(&WORDS).to_lowercase());
        let year = rng.range(1950, 2023);
        let runtime = rng.range(70, 160);

        // Roughly one film in six has no rating yet; ratings are in half points.
        let rating = if rng.range(0, 5) == 0 {
            "-1".to_string()
        } else {
            format!("{}", rng.range(0, 20) as f64 / 2.0)
        };

        let cover = if rng.range(0, 4) != 0 {
            format!("https://picsum.photos/seed/mafima{i}/140/200")
        } else {
            String::new()
        };
        let link = format!("https://www.youtube.com/results?search_query=mafima+{i}");

        writer.write_record([
            title,
            year.to_string(),
            runtime.to_string(),
            rating,
            cover,
            link,
        ])?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} films to {output_path}");
    Ok(())
}
