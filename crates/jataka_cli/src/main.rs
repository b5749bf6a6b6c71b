use clap::{Parser, Subcommand};
use jataka_chart::{compute_chart, summarize};
use jataka_time::{Instant, julian_day};
use jataka_vedic::{
    ayanamsha_deg, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};

#[derive(Parser)]
#[command(name = "jataka", about = "Sidereal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a date-time
    Chart {
        /// Civil date-time (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        date: String,
        /// Emit the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Highlight summary for a date-time
    Summary {
        /// Civil date-time (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        date: String,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Ayanamsha for a date-time
    Ayanamsha {
        /// Civil date-time (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        date: String,
    },
}

fn parse_instant(s: &str) -> Instant {
    match s.parse() {
        Ok(instant) => instant,
        Err(e) => {
            eprintln!("Invalid date-time: {e}");
            eprintln!("Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { date, json } => {
            let instant = parse_instant(&date);
            let chart = compute_chart(&instant);

            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Failed to serialize chart: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }

            println!("Chart for {instant} (ayanamsha {:.2} deg)", chart.ayanamsha);
            for p in &chart.positions {
                let dignity = match p.dignity {
                    Some(d) => format!(" [{d:?}]"),
                    None => String::new(),
                };
                println!(
                    "{:<8} {:>7.2} deg  {} ({})  {} pada {}{}",
                    p.graha.english_name(),
                    p.longitude,
                    p.rashi.name(),
                    p.rashi.western_name(),
                    p.nakshatra.name(),
                    p.pada,
                    dignity
                );
            }
            for conj in &chart.conjunctions {
                println!("Conjunction: {}", conj.description);
            }
            for aspect in &chart.aspects {
                println!("Aspect: {}", aspect.description);
            }
        }

        Commands::Summary { date } => {
            let instant = parse_instant(&date);
            let chart = compute_chart(&instant);
            for line in summarize(&chart) {
                println!("{line}");
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(normalize_360(lon));
            println!(
                "{} ({}) - {:.4} deg in rashi, ruled by {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.degrees_in_rashi,
                info.rashi.ruler().english_name()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(normalize_360(lon));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), deity {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.nakshatra.deity()
            );
        }

        Commands::Ayanamsha { date } => {
            let instant = parse_instant(&date);
            let jd = julian_day(&instant);
            println!("JD: {jd:.5}");
            println!("Ayanamsha: {:.4} deg", ayanamsha_deg(jd));
        }
    }
}
