use clap::{Parser, Subcommand};
use devkit::config::{Preferences, DEFAULT_CONFIG_FILE};
use devkit::password::{self, PasswordOptions};
use devkit::text;
use devkit::time;
use devkit::units::{self, Category, ConverterState};
use std::io::Read;

#[derive(Parser)]
#[command(name = "devkit")]
#[command(about = "Unit conversion, time zones, text statistics and password tools", long_about = None)]
struct Cli {
    /// Preferences file
    #[arg(long, global = true, env = "DEVKIT_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert (e.g., "12.5")
        value: String,

        /// Source unit key (e.g., "meters")
        from: String,

        /// Target unit key (e.g., "feet")
        to: String,

        /// Unit category (default: from preferences)
        #[arg(short, long)]
        category: Option<Category>,

        /// Convert with the units reversed
        #[arg(long)]
        swap: bool,

        /// Fail on unparseable values and unknown units instead of falling back
        #[arg(long)]
        strict: bool,
    },

    /// List unit categories and their units
    Units {
        /// Only this category
        category: Option<Category>,
    },

    /// Show the quick reference table for a category
    Reference {
        /// Unit category (default: from preferences)
        category: Option<Category>,
    },

    /// Count characters, words, sentences, paragraphs and lines
    Stats {
        /// Text to analyze (default: stdin)
        text: Option<String>,

        /// Read text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Analyze one of the sample texts by title
        #[arg(long, conflicts_with_all = ["text", "file"])]
        sample: Option<String>,
    },

    /// List the sample texts
    Samples,

    /// Show a moment in the world clock time zones and common formats
    Time {
        /// Date to show instead of now (YYYY-MM-DD), read in --zone
        #[arg(long, requires = "time")]
        date: Option<String>,

        /// Time to show instead of now (HH:MM or HH:MM:SS), read in --zone
        #[arg(long, requires = "date")]
        time: Option<String>,

        /// Local IANA time zone
        #[arg(short, long, default_value = "UTC")]
        zone: String,
    },

    /// Generate random passwords
    Password {
        /// Password length (default: from preferences)
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of passwords to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        #[arg(long)]
        no_uppercase: bool,

        #[arg(long)]
        no_lowercase: bool,

        #[arg(long)]
        no_numbers: bool,

        #[arg(long)]
        no_symbols: bool,
    },

    /// Rate the strength of a password
    Strength {
        password: String,
    },

    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the current preferences
    Show,

    /// Flip the dark mode flag and save
    ToggleDarkMode,

    /// Write a preferences file with default values
    Init,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = Preferences::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            category,
            swap,
            strict,
        } => convert_value(
            &value,
            &from,
            &to,
            category.unwrap_or(prefs.default_category),
            swap,
            strict,
            cli.json,
        ),
        Commands::Units { category } => list_units(category, cli.json),
        Commands::Reference { category } => {
            show_reference(category.unwrap_or(prefs.default_category), cli.json)
        }
        Commands::Stats { text, file, sample } => {
            show_stats(text, file.as_deref(), sample.as_deref(), cli.json)
        }
        Commands::Samples => list_samples(cli.json),
        Commands::Time { date, time, zone } => {
            show_time(date.as_deref(), time.as_deref(), &zone, cli.json)
        }
        Commands::Password {
            length,
            count,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => {
            let defaults = prefs.password;
            let options = PasswordOptions {
                length: length.unwrap_or(defaults.length),
                uppercase: defaults.uppercase && !no_uppercase,
                lowercase: defaults.lowercase && !no_lowercase,
                numbers: defaults.numbers && !no_numbers,
                symbols: defaults.symbols && !no_symbols,
            };
            generate_passwords(&options, count, cli.json)
        }
        Commands::Strength { password } => rate_password(&password, cli.json),
        Commands::Prefs { action } => {
            manage_prefs(prefs, &cli.config, action.unwrap_or(PrefsAction::Show), cli.json)
        }
    }
}

fn convert_value(
    value: &str,
    from: &str,
    to: &str,
    category: Category,
    swap: bool,
    strict: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ConverterState::for_category(category);
    state.set_from_unit(from);
    state.set_to_unit(to);
    state.set_input(value);
    if swap {
        state.swap();
    }

    if strict {
        // Surface what the lenient path would have papered over
        units::try_convert(&state.input, &state.from_unit, &state.to_unit, category)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", state.result);
    }

    Ok(())
}

fn list_units(category: Option<Category>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tables: Vec<_> = units::categories()
        .iter()
        .filter(|c| category.map_or(true, |key| c.key == key))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    for table in tables {
        println!("{} ({}):", table.label, table.key);
        for unit in table.units {
            match unit.to_base {
                Some(factor) => println!("  - {} ({}) = {} base", unit.key, unit.label, factor),
                None => println!("  - {} ({})", unit.key, unit.label),
            }
        }
    }

    Ok(())
}

fn show_reference(category: Category, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows = units::quick_reference(category);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Common {} conversions:", category.label());
        for row in rows {
            println!("  {}", row);
        }
    }

    Ok(())
}

fn show_stats(
    inline: Option<String>,
    file: Option<&str>,
    sample: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = match (inline, file, sample) {
        (Some(content), _, _) => content,
        (None, Some(path), _) => std::fs::read_to_string(path)?,
        (None, None, Some(title)) => text::find_sample(title)
            .map(|s| s.content.to_string())
            .ok_or_else(|| format!("No sample text titled '{}'", title))?,
        (None, None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let stats = text::count_stats(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }

    Ok(())
}

fn list_samples(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let samples = text::sample_texts();

    if json {
        println!("{}", serde_json::to_string_pretty(samples)?);
    } else {
        for sample in samples {
            println!("{}:\n  {}\n", sample.title, sample.content);
        }
    }

    Ok(())
}

fn show_time(
    date: Option<&str>,
    clock: Option<&str>,
    zone: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let instant = time::resolve_instant(date, clock, zone, chrono::Utc::now())?;
    let report = time::report(instant, zone)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}  {}", report.clock.time, report.clock.date);
    println!();
    for row in &report.zones {
        println!("  {:<20} {}", row.label, row.formatted);
    }
    println!();
    for format in &report.formats {
        println!("  {:<20} {}", format.label, format.value);
    }

    Ok(())
}

fn generate_passwords(
    options: &PasswordOptions,
    count: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let passwords = (0..count)
        .map(|_| password::generate_default(options))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        let entries: Vec<_> = passwords
            .iter()
            .map(|p| serde_json::json!({ "password": p, "strength": password::strength(p) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for p in passwords {
            println!("{}  ({})", p, password::strength(&p));
        }
    }

    Ok(())
}

fn rate_password(candidate: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let strength = password::strength(candidate);

    if json {
        println!("{}", serde_json::to_string_pretty(&strength)?);
    } else {
        println!("{} ({}/4)", strength, strength.score());
    }

    Ok(())
}

fn manage_prefs(
    mut prefs: Preferences,
    path: &str,
    action: PrefsAction,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PrefsAction::Show => {}
        PrefsAction::ToggleDarkMode => {
            let enabled = prefs.toggle_dark_mode();
            prefs.save_to_file(path)?;
            println!("Dark mode {}", if enabled { "on" } else { "off" });
        }
        PrefsAction::Init => {
            if std::path::Path::new(path).exists() {
                return Err(format!("Preferences file already exists: {}", path).into());
            }
            prefs = Preferences::default();
            prefs.save_to_file(path)?;
            println!("Preferences written to {}", path);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
    } else {
        print!("{}", prefs.to_toml_string()?);
    }

    Ok(())
}
