use clap::{Arg, Command};
use rosetta_fallback::{FallbackEngine, LanguageRegistry};
use std::io::Read;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("rosetta-fallback")
        .version("0.1.0")
        .about("Rule-based fallback code translation CLI")
        .arg(
            Arg::new("file")
                .help("Source file to translate, or - for stdin")
                .required_unless_present("list-languages")
                .index(1),
        )
        .arg(
            Arg::new("target-language")
                .help("Target language id (e.g., javascript, java, go)")
                .required_unless_present("list-languages")
                .index(2),
        )
        .arg(
            Arg::new("source-language")
                .long("source")
                .short('s')
                .help("Source language id (default: python)")
                .default_value("python"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .short('c')
                .help("JSON language catalog to use instead of the built-in one"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .help("Emit the full result as JSON instead of bare code")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .short('l')
                .help("List the known languages and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show strategy selection details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(if verbose { "debug" } else { "warn" }.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let languages = match matches.get_one::<String>("catalog") {
        Some(path) => LanguageRegistry::from_json_file(Path::new(path))?,
        None => LanguageRegistry::builtin(),
    };

    if matches.get_flag("list-languages") {
        for language in languages.all() {
            println!("{}\t{}", language.id, language.display_name);
        }
        return Ok(());
    }

    let file = matches.get_one::<String>("file").unwrap();
    let target_id = matches.get_one::<String>("target-language").unwrap();
    let source_id = matches.get_one::<String>("source-language").unwrap();

    let source = match languages.resolve(source_id) {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Err(e.into());
        }
    };
    let target = match languages.resolve(target_id) {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Err(e.into());
        }
    };

    let source_code = if file == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(file)?
    };

    if verbose {
        eprintln!("📝 Source: {} ({} bytes)", file, source_code.len());
        eprintln!("🌍 {} → {}", source.id, target.id);
    }

    let engine = FallbackEngine::new();
    let result = engine.translate(&source_code, source, target);

    if verbose {
        eprintln!("✅ Confidence: {}", result.confidence);
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.translated_code);
    }

    Ok(())
}
