//! Writes a synthetic league dataset (six CSVs and a PNG logo) in the
//! layout the dashboard loads: `generate_sample [OUT_DIR]`, default `assets`.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

const TEAMS: [&str; 18] = [
    "Benfica", "Porto", "Sporting", "Braga", "Guimaraes", "Rio Ave", "Maritimo", "Boavista",
    "Estoril", "Arouca", "Nacional", "Belenenses", "Pacos Ferreira", "Moreirense", "Tondela",
    "Feirense", "Chaves", "Setubal",
];

const FIRST_NAMES: [&str; 12] = [
    "Andre", "Bruno", "Carlos", "Diogo", "Eduardo", "Fabio", "Goncalo", "Helder", "Joao", "Luis",
    "Nuno", "Rui",
];

const SURNAMES: [&str; 12] = [
    "Silva", "Santos", "Ferreira", "Pereira", "Oliveira", "Costa", "Rodrigues", "Martins",
    "Sousa", "Fernandes", "Goncalves", "Gomes",
];

const SEASON_ORDERS: std::ops::RangeInclusive<i64> = 10..=19;
const PLAYERS_PER_TEAM: usize = 4;

/// SplitMix64, seeded so every run writes the same league.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n.max(1)
    }

    /// Knuth's method; fine for the small rates used here.
    fn poisson(&mut self, lambda: f64) -> u32 {
        let limit = (-lambda).exp();
        let mut k = 0;
        let mut p = self.next_f64();
        while p > limit {
            k += 1;
            p *= self.next_f64();
        }
        k
    }
}

// ---------------------------------------------------------------------------
// Season simulation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct Tally {
    won: u32,
    drawn: u32,
    lost: u32,
    scored: u32,
    conceded: u32,
    straight_reds: u32,
    second_yellows: u32,
    yellows: u32,
}

impl Tally {
    fn games(&self) -> u32 {
        self.won + self.drawn + self.lost
    }

    fn points(&self) -> i64 {
        i64::from(self.won * 3 + self.drawn)
    }

    fn goal_difference(&self) -> i64 {
        i64::from(self.scored) - i64::from(self.conceded)
    }
}

#[derive(Debug, Clone, Default)]
struct PlayerTally {
    name: String,
    team: usize,
    goals: u32,
    assists: u32,
    yellows: u32,
    straight_reds: u32,
    second_yellows: u32,
}

/// Double round robin with the circle method: rounds 1..n-1, then mirrored.
fn schedule(n: usize) -> Vec<Vec<(usize, usize)>> {
    let mut ring: Vec<usize> = (0..n).collect();
    let mut first_half = Vec::with_capacity(n - 1);
    for round in 0..n - 1 {
        let pairs = (0..n / 2)
            .map(|i| {
                let (a, b) = (ring[i], ring[n - 1 - i]);
                if (round + i) % 2 == 0 { (a, b) } else { (b, a) }
            })
            .collect();
        first_half.push(pairs);
        ring[1..].rotate_right(1);
    }
    let second_half: Vec<Vec<(usize, usize)>> = first_half
        .iter()
        .map(|pairs: &Vec<(usize, usize)>| pairs.iter().map(|&(h, a)| (a, h)).collect())
        .collect();
    first_half.into_iter().chain(second_half).collect()
}

/// Ranking by points, goal difference, goals scored, then name.
fn ranking(tallies: &[Tally]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tallies.len()).collect();
    order.sort_by(|&a, &b| {
        let (ta, tb) = (&tallies[a], &tallies[b]);
        tb.points()
            .cmp(&ta.points())
            .then(tb.goal_difference().cmp(&ta.goal_difference()))
            .then(tb.scored.cmp(&ta.scored))
            .then(TEAMS[a].cmp(TEAMS[b]))
    });
    order
}

fn season_code(order: i64) -> i64 {
    // order 16 → 1516; written as a number, so 0910 loses its leading zero
    let start = (order - 1) % 100;
    start * 100 + order % 100
}

/// Kick-off date `week` weeks after 15 August of `year`.
fn match_date(year: i64, week: u32) -> String {
    const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let (mut y, mut month, mut day) = (year, 7usize, 15 + week * 7);
    loop {
        let leap = month == 1 && y % 4 == 0;
        let len = MONTH_DAYS[month] + u32::from(leap);
        if day <= len {
            break;
        }
        day -= len;
        month += 1;
        if month == 12 {
            month = 0;
            y += 1;
        }
    }
    format!("{y:04}-{:02}-{day:02}", month + 1)
}

fn odds(probability: f64) -> f64 {
    let with_margin = 1.0 / (probability.clamp(0.05, 0.9) * 1.06);
    (with_margin * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// CSV output in the pandas `to_csv` layout (leading index column)
// ---------------------------------------------------------------------------

struct TableWriter {
    writer: csv::Writer<File>,
    index: usize,
}

impl TableWriter {
    fn create(dir: &Path, file: &str, columns: &[&str]) -> Result<Self> {
        let path = dir.join(file);
        let mut writer =
            csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut header = vec![""];
        header.extend_from_slice(columns);
        writer.write_record(&header)?;
        Ok(Self { writer, index: 0 })
    }

    fn row(&mut self, cells: Vec<String>) -> Result<()> {
        let mut record = vec![self.index.to_string()];
        record.extend(cells);
        self.writer.write_record(&record)?;
        self.index += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.index)
    }
}

struct Tables {
    class: TableWriter,
    rounds: TableWriter,
    games: TableWriter,
    scorers: TableWriter,
    assists: TableWriter,
    cards: TableWriter,
}

impl Tables {
    fn create(dir: &Path) -> Result<Self> {
        Ok(Self {
            class: TableWriter::create(
                dir,
                "df_class.csv",
                &[
                    "Season", "SeasonOrder", "Team", "Games", "Won", "Drawn", "Lost", "Points",
                    "GoalsScored", "GoalsConceded", "GoalsDifference", "VE", "2A", "A",
                ],
            )?,
            rounds: TableWriter::create(
                dir,
                "df_bcr.csv",
                &["Season", "SeasonOrder", "Round", "Team", "TotalPoints", "Position"],
            )?,
            games: TableWriter::create(
                dir,
                "df_games.csv",
                &["Season", "SeasonOrder", "Round", "Date", "B365H", "B365D", "B365A", "Match"],
            )?,
            scorers: TableWriter::create(
                dir,
                "df_scorers.csv",
                &["Season", "SeasonOrder", "Player", "Team", "G"],
            )?,
            assists: TableWriter::create(
                dir,
                "df_assists.csv",
                &["Season", "SeasonOrder", "Player", "Team", "ASS"],
            )?,
            cards: TableWriter::create(
                dir,
                "df_player_cards.csv",
                &["Season", "SeasonOrder", "Player", "Team", "A", "VE", "2A"],
            )?,
        })
    }
}

fn simulate_season(order: i64, rng: &mut SimpleRng, out: &mut Tables) -> Result<()> {
    let code = season_code(order);
    let start_year = 2000 + (order - 1);
    let key = |cells: &mut Vec<String>| {
        cells.insert(0, order.to_string());
        cells.insert(0, code.to_string());
    };

    let strength: Vec<f64> = (0..TEAMS.len()).map(|_| 0.6 + rng.next_f64() * 1.2).collect();
    let mut players: Vec<PlayerTally> = (0..TEAMS.len() * PLAYERS_PER_TEAM)
        .map(|i| PlayerTally {
            name: format!(
                "{} {}",
                FIRST_NAMES[rng.below(FIRST_NAMES.len())],
                SURNAMES[rng.below(SURNAMES.len())]
            ),
            team: i / PLAYERS_PER_TEAM,
            ..PlayerTally::default()
        })
        .collect();
    let mut tallies = vec![Tally::default(); TEAMS.len()];

    for (r, fixtures) in schedule(TEAMS.len()).into_iter().enumerate() {
        let round = r as u32 + 1;
        for (home, away) in fixtures {
            let (sh, sa) = (strength[home], strength[away]);
            let goals_home = rng.poisson(1.45 * sh / sa);
            let goals_away = rng.poisson(1.05 * sa / sh);

            let p_home = 0.46 * sh / sa;
            let p_draw = 0.26;
            let p_away = (1.0 - p_home - p_draw).max(0.05);
            let mut cells = vec![
                round.to_string(),
                match_date(start_year, r as u32),
                format!("{:.2}", odds(p_home)),
                format!("{:.2}", odds(p_draw)),
                format!("{:.2}", odds(p_away)),
                format!("{} {goals_home}-{goals_away} {}", TEAMS[home], TEAMS[away]),
            ];
            key(&mut cells);
            out.games.row(cells)?;

            for (team, scored, conceded) in
                [(home, goals_home, goals_away), (away, goals_away, goals_home)]
            {
                let tally = &mut tallies[team];
                tally.scored += scored;
                tally.conceded += conceded;
                match scored.cmp(&conceded) {
                    std::cmp::Ordering::Greater => tally.won += 1,
                    std::cmp::Ordering::Equal => tally.drawn += 1,
                    std::cmp::Ordering::Less => tally.lost += 1,
                }

                let squad = team * PLAYERS_PER_TEAM;
                for _ in 0..scored {
                    let scorer = squad + rng.below(PLAYERS_PER_TEAM);
                    players[scorer].goals += 1;
                    if rng.next_f64() < 0.7 {
                        let assister = squad + rng.below(PLAYERS_PER_TEAM);
                        if assister != scorer {
                            players[assister].assists += 1;
                        }
                    }
                }

                let yellows = rng.poisson(2.1);
                let straight_reds = rng.poisson(0.05);
                let second_yellows = rng.poisson(0.06);
                tally.yellows += yellows;
                tally.straight_reds += straight_reds;
                tally.second_yellows += second_yellows;
                for _ in 0..yellows {
                    players[squad + rng.below(PLAYERS_PER_TEAM)].yellows += 1;
                }
                for _ in 0..straight_reds {
                    players[squad + rng.below(PLAYERS_PER_TEAM)].straight_reds += 1;
                }
                for _ in 0..second_yellows {
                    players[squad + rng.below(PLAYERS_PER_TEAM)].second_yellows += 1;
                }
            }
        }

        for (position, team) in ranking(&tallies).into_iter().enumerate() {
            let mut cells = vec![
                round.to_string(),
                TEAMS[team].to_string(),
                tallies[team].points().to_string(),
                (position + 1).to_string(),
            ];
            key(&mut cells);
            out.rounds.row(cells)?;
        }
    }

    for team in ranking(&tallies) {
        let t = &tallies[team];
        let mut cells = vec![
            TEAMS[team].to_string(),
            t.games().to_string(),
            t.won.to_string(),
            t.drawn.to_string(),
            t.lost.to_string(),
            t.points().to_string(),
            t.scored.to_string(),
            t.conceded.to_string(),
            t.goal_difference().to_string(),
            t.straight_reds.to_string(),
            t.second_yellows.to_string(),
            t.yellows.to_string(),
        ];
        key(&mut cells);
        out.class.row(cells)?;
    }

    let mut by_goals: Vec<&PlayerTally> = players.iter().filter(|p| p.goals > 0).collect();
    by_goals.sort_by(|a, b| b.goals.cmp(&a.goals));
    for p in by_goals {
        let mut cells = vec![p.name.clone(), TEAMS[p.team].to_string(), p.goals.to_string()];
        key(&mut cells);
        out.scorers.row(cells)?;
    }

    let mut by_assists: Vec<&PlayerTally> = players.iter().filter(|p| p.assists > 0).collect();
    by_assists.sort_by(|a, b| b.assists.cmp(&a.assists));
    for p in by_assists {
        let mut cells = vec![p.name.clone(), TEAMS[p.team].to_string(), p.assists.to_string()];
        key(&mut cells);
        out.assists.row(cells)?;
    }

    let mut by_cards: Vec<&PlayerTally> = players.iter().collect();
    by_cards.sort_by(|a, b| {
        (b.yellows, b.straight_reds + b.second_yellows)
            .cmp(&(a.yellows, a.straight_reds + a.second_yellows))
    });
    for p in by_cards {
        let mut cells = vec![
            p.name.clone(),
            TEAMS[p.team].to_string(),
            p.yellows.to_string(),
            p.straight_reds.to_string(),
            p.second_yellows.to_string(),
        ];
        key(&mut cells);
        out.cards.row(cells)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Logo
// ---------------------------------------------------------------------------

/// Navy disc with a white ring on a transparent square.
fn draw_logo(path: &Path) -> Result<()> {
    const SIZE: u32 = 160;
    let centre = SIZE as f64 / 2.0;
    let image = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let d = ((x as f64 - centre).powi(2) + (y as f64 - centre).powi(2)).sqrt();
        if d > centre - 2.0 {
            Rgba([0, 0, 0, 0])
        } else if d > centre - 14.0 {
            Rgba([255, 255, 255, 255])
        } else if (x as f64 - centre).abs() < 6.0 || d < 12.0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0x25, 0x32, 0x75, 255])
        }
    });
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng(42);
    let mut tables = Tables::create(&out_dir)?;
    for order in SEASON_ORDERS {
        simulate_season(order, &mut rng, &mut tables)?;
    }

    let Tables {
        class,
        rounds,
        games,
        scorers,
        assists,
        cards,
    } = tables;
    let counts = [
        class.finish()?,
        rounds.finish()?,
        games.finish()?,
        scorers.finish()?,
        assists.finish()?,
        cards.finish()?,
    ];
    draw_logo(&out_dir.join("liga-nos-png.png"))?;

    println!(
        "Wrote {} seasons to {}: {} team seasons, {} round standings, {} matches, {}/{}/{} player rows",
        SEASON_ORDERS.count(),
        out_dir.display(),
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4],
        counts[5]
    );
    Ok(())
}
