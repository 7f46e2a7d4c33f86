use chrono::Datelike;
use clap::{Parser, Subcommand};
use nongli_lunar::{
    StemBranch, ZodiacAnimal, leap_month, leap_month_days, lunar_to_solar, months_of_year,
    solar_to_lunar, year_days, year_to_chinese_numeral,
};
use nongli_reminder::{
    BirthdayRecord, CountdownLabel, DEFAULT_SOON_DAYS, DateKind, ReminderConfig, StoredDate, age,
    format_birthday, next_occurrence, zodiac_sign,
};
use nongli_time::SolarDate;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nongli", about = "Chinese lunar calendar and birthday CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gregorian date to the lunar calendar
    ToLunar {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a lunar date to the Gregorian calendar
    ToSolar {
        /// Lunar year (1900-2100)
        year: i32,
        /// Lunar month (1-12)
        month: u32,
        /// Lunar day (1-30)
        day: u32,
        /// The month is the year's leap month
        #[arg(long)]
        leap: bool,
    },
    /// List the months of a lunar year
    Months {
        /// Lunar year (1900-2100)
        year: i32,
    },
    /// Leap month, length and names of a lunar year
    Year {
        /// Lunar year (1900-2100)
        year: i32,
    },
    /// Days until the next birthday
    Countdown {
        /// Birthday as stored (YYYY-MM-DD); lunar components with --lunar
        birthday: String,
        /// The birthday is a lunar date
        #[arg(long)]
        lunar: bool,
        /// Reference date (YYYY-MM-DD), default the local date
        #[arg(long)]
        today: Option<String>,
        /// Countdowns up to this many days are shown as soon
        #[arg(long, default_value_t = DEFAULT_SOON_DAYS)]
        soon_days: u32,
    },
    /// Age in completed years
    Age {
        /// Gregorian birth date (YYYY-MM-DD)
        birthday: String,
        /// Reference date (YYYY-MM-DD), default the local date
        #[arg(long)]
        today: Option<String>,
    },
    /// Western zodiac sign of a birthday
    Zodiac {
        /// Birth date (YYYY-MM-DD)
        birthday: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_solar(s: &str) -> SolarDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date {s:?}: {e}");
        std::process::exit(1);
    })
}

fn parse_stored(s: &str) -> StoredDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date {s:?}: {e}");
        std::process::exit(1);
    })
}

fn resolve_today(today: Option<&str>) -> SolarDate {
    if let Some(s) = today {
        return parse_solar(s);
    }
    let now = chrono::Local::now().date_naive();
    debug!(%now, "using local date");
    SolarDate::new(now.year(), now.month(), now.day()).unwrap_or_else(|e| {
        eprintln!("Local date out of range: {e}");
        std::process::exit(1);
    })
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::ToLunar { date } => {
            let solar = parse_solar(&date);
            match solar_to_lunar(solar) {
                Ok(l) => {
                    println!("{l}");
                    println!(
                        "  {}年 ({})  {} {}  leap: {}",
                        l.stem_branch().name(),
                        l.zodiac().name(),
                        l.month_name(),
                        l.day_name(),
                        l.is_leap
                    );
                    println!("  numeric: {}-{}-{}", l.year, l.month, l.day);
                }
                Err(e) => fail(e),
            }
        }

        Commands::ToSolar {
            year,
            month,
            day,
            leap,
        } => match lunar_to_solar(year, month, day, leap) {
            Ok(d) => println!("{d}"),
            Err(e) => fail(e),
        },

        Commands::Months { year } => match months_of_year(year) {
            Ok(months) => {
                for m in months {
                    let leap = if m.is_leap { " (leap)" } else { "" };
                    println!("{:>2} {:<4} {} days{}", m.month, m.name, m.days, leap);
                }
            }
            Err(e) => fail(e),
        },

        Commands::Year { year } => {
            let (leap, leap_days, days) = match (
                leap_month(year),
                leap_month_days(year),
                year_days(year),
            ) {
                (Ok(l), Ok(ld), Ok(d)) => (l, ld, d),
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => fail(e),
            };
            let animal = ZodiacAnimal::from_year(year);
            let cycle = StemBranch::from_year(year);
            println!(
                "{}年 {}年 ({}, {})",
                year_to_chinese_numeral(year),
                cycle.name(),
                animal.name(),
                animal.english_name()
            );
            println!("  cycle: {}/60", cycle.order());
            println!("  days: {days}");
            if leap == 0 {
                println!("  leap month: none");
            } else {
                println!("  leap month: {leap} ({leap_days} days)");
            }
        }

        Commands::Countdown {
            birthday,
            lunar,
            today,
            soon_days,
        } => {
            let today = resolve_today(today.as_deref());
            let record = BirthdayRecord::new(
                "",
                parse_stored(&birthday),
                DateKind::from_lunar_flag(lunar),
            );
            let config = ReminderConfig::new(soon_days);
            let days = record.days_until(today).unwrap_or_else(|e| fail(e));
            let next = next_occurrence(record.date.month, record.date.day, record.kind, today)
                .unwrap_or_else(|e| fail(e));
            let label = CountdownLabel::from_days(days, &config);
            match format_birthday(&record) {
                Ok(text) => println!("{text}"),
                Err(e) => fail(e),
            }
            println!("  next: {next}  [{}] {label}", label.kind());
        }

        Commands::Age { birthday, today } => {
            let today = resolve_today(today.as_deref());
            let birth = parse_solar(&birthday);
            println!("{}", age(birth, today));
        }

        Commands::Zodiac { birthday } => {
            let d = parse_stored(&birthday);
            let sign = zodiac_sign(d.month, d.day);
            println!("{} ({})", sign.name(), sign.western_name());
        }
    }
}
