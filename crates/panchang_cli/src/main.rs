use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use panchang_base::{
    Language, MultilingualText, PachkhanKind, Zodiac, clock_string, compute_cutoffs,
    karana_from_elongation, karana_name, nakshatra_from_longitude, nakshatra_name, paksha_name,
    tithi_from_elongation, tithi_name,
};
use panchang_daily::{DailyConfig, PanchangRecord, gate_from_config, panchang_for_date, parse_date};
use panchang_ephem::{Location, MeeusProvider, parse_timezone};
use panchang_verify::{TRUSTED_SOURCES, Unconfirmed};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchang", about = "Daily panchang CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for a date and place
    Day {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// IANA timezone (e.g. Asia/Kolkata)
        #[arg(long)]
        tz: String,
        /// Altitude in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Display language: en, hi, mr, gu
        #[arg(long)]
        lang: Option<Language>,
        /// Zodiac: lahiri or tropical
        #[arg(long)]
        zodiac: Option<Zodiac>,
        /// Data source declared for verification
        #[arg(long)]
        source: Option<String>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Tithi, paksha, and karana from a Moon-Sun elongation
    Tithi {
        /// Elongation in degrees
        #[arg(long, allow_hyphen_values = true)]
        elongation: f64,
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// Nakshatra and pada from a Moon longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// Pachkhan cutoffs from sunrise and sunset clock times
    Cutoffs {
        /// Sunrise (HH:MM)
        #[arg(long)]
        sunrise: String,
        /// Sunset (HH:MM)
        #[arg(long)]
        sunset: String,
    },
    /// List trusted sources
    Sources,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn require_name(name: Option<&'static MultilingualText>, what: &str) -> &'static MultilingualText {
    name.unwrap_or_else(|| fail(format!("No {what} name")))
}

fn parse_clock(s: &str) -> NaiveDateTime {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .unwrap_or_else(|e| fail(format!("Invalid time '{s}': {e} (expected HH:MM)")));
    NaiveDate::MIN.and_time(time)
}

fn print_record(record: &PanchangRecord) {
    let p = &record.panchang;
    let lang = p.language;
    let dash = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".into());

    println!("Date:       {} ({})", p.date, p.vaar.name.get(lang));
    if let Some(name) = &p.location.name {
        println!("Place:      {name}");
    }
    println!(
        "Location:   {:.4}, {:.4} ({})",
        p.location.latitude_deg, p.location.longitude_deg, p.location.timezone
    );
    println!("Evaluated:  {} at {}", p.evaluation, p.evaluated_at);
    println!(
        "Tithi:      {} {} ({}/30)",
        p.tithi.paksha_name.get(lang),
        p.tithi.name.get(lang),
        p.tithi.index
    );
    println!(
        "Nakshatra:  {} pada {} (index {})",
        p.nakshatra.name.get(lang),
        p.nakshatra.pada,
        p.nakshatra.index
    );
    println!("Yoga:       {} (index {})", p.yoga.name.get(lang), p.yoga.index);
    println!(
        "Karana:     {} (half-tithi {})",
        p.karana.name.get(lang),
        p.karana.half_tithi_index
    );
    println!("Sunrise:    {}", dash(&p.events.sunrise));
    println!("Sunset:     {}", dash(&p.events.sunset));
    println!("Moonrise:   {}", dash(&p.events.moonrise));
    println!("Moonset:    {}", dash(&p.events.moonset));
    println!("Navkarshi:  {}", dash(&p.pachkhan.navkarshi));
    println!("Porsi:      {}", dash(&p.pachkhan.porsi));
    println!("Sadh Porsi: {}", dash(&p.pachkhan.sadh_porsi));
    println!("Ratri:      {}", dash(&p.pachkhan.ratri_bhojan_end));
    if let Some(why) = &p.pachkhan.unavailable {
        println!("            ({why})");
    }
    println!(
        "Zodiac:     {} (ayanamsha {:.4} deg)",
        p.zodiac, p.ayanamsha_deg
    );
    println!("Source:     {}", p.data_source);
    println!("Verified:   {}", record.verified);
    if let Some(reason) = &record.reason {
        println!("Reason:     {reason}");
    }
    if let Some(disclaimer) = record.disclaimer {
        println!("{disclaimer}");
    }
}

#[allow(clippy::too_many_arguments)]
fn run_day(
    date: &str,
    lat: f64,
    lon: f64,
    tz: &str,
    alt: f64,
    lang: Option<Language>,
    zodiac: Option<Zodiac>,
    source: Option<String>,
    json: bool,
    config: Option<PathBuf>,
) {
    let mut cfg: DailyConfig = panchang_config::load_config(config.as_deref())
        .unwrap_or_else(|e| fail(format!("Failed to load config: {e}")));
    if let Some(lang) = lang {
        cfg.language = lang;
    }
    if let Some(zodiac) = zodiac {
        cfg.zodiac = zodiac;
    }
    if let Some(source) = source {
        cfg.data_source = source;
    }

    let date = parse_date(date).unwrap_or_else(|e| fail(e));
    let timezone = parse_timezone(tz).unwrap_or_else(|e| fail(e));
    let location = Location::new(lat, lon, timezone).at_altitude(alt);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap_or_else(|e| fail(format!("Failed to start runtime: {e}")));
    let gate = gate_from_config(Unconfirmed, &cfg);
    let provider = MeeusProvider::new();
    let record = runtime
        .block_on(panchang_for_date(&provider, &gate, date, &location, &cfg))
        .unwrap_or_else(|e| fail(e));

    if json {
        let out = serde_json::to_string_pretty(&record)
            .unwrap_or_else(|e| fail(format!("Failed to serialize: {e}")));
        println!("{out}");
    } else {
        print_record(&record);
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Day {
            date,
            lat,
            lon,
            tz,
            alt,
            lang,
            zodiac,
            source,
            json,
            config,
        } => run_day(&date, lat, lon, &tz, alt, lang, zodiac, source, json, config),

        Commands::Tithi { elongation, lang } => {
            let tithi = tithi_from_elongation(elongation);
            let karana = karana_from_elongation(elongation);
            println!(
                "{} {} (tithi {}, {} {} of 15) - {:.4} deg in tithi",
                paksha_name(tithi.paksha).get(lang),
                require_name(tithi_name(tithi.index), "tithi").get(lang),
                tithi.index,
                tithi.paksha.name(),
                tithi.in_paksha,
                tithi.degrees_in_tithi
            );
            println!(
                "Karana: {} (half-tithi {})",
                require_name(karana_name(karana.karana), "karana").get(lang),
                karana.half_tithi_index
            );
        }

        Commands::Nakshatra { lon, lang } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                require_name(nakshatra_name(info.index), "nakshatra").get(lang),
                info.index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Cutoffs { sunrise, sunset } => {
            let cutoffs = compute_cutoffs(Some(parse_clock(&sunrise)), Some(parse_clock(&sunset)))
                .unwrap_or_else(|e| fail(e));
            for kind in PachkhanKind::ALL {
                if let Some(t) = cutoffs.cutoff_for(kind) {
                    println!("{:<18} {}", kind.label(), clock_string(&t));
                }
            }
        }

        Commands::Sources => {
            for name in TRUSTED_SOURCES {
                println!("{name}");
            }
        }
    }
}
