use clap::{Parser, Subcommand};
use sabdakosh_engine::{DictEngine, Romanizer, SearchQuery};

#[derive(Parser)]
#[command(name = "sabdakosh-cli")]
#[command(about = "Sabdakosh dictionary search CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary JSON path
    #[arg(short, long, default_value = "sabdakosh.json")]
    dict: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the dictionary
    Search {
        /// Search query, romanised or in Devanagari
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "25")]
        limit: usize,

        /// Match the query as typed, without romanised conversion
        #[arg(long)]
        raw: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert romanised text to Devanagari and exit
    Translit {
        /// Text to convert
        text: String,
    },

    /// Show lexicon statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, limit, raw, json } => {
            let engine = DictEngine::from_path(&cli.dict)?;

            let search_query = SearchQuery {
                query,
                limit,
                romanize: !raw,
            };

            let result = engine.search(search_query)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("🔍 Searched for: {}", result.query);
            if result.matched_query != result.query {
                println!("   Matching: {}", result.matched_query);
            }

            if result.is_empty() {
                println!("❌ No results");
                return Ok(());
            }

            println!(
                "✅ {} matches, showing {} ({:.2}ms)",
                result.total_matches,
                result.hits.len(),
                result.latency_ms
            );

            for (i, hit) in result.hits.iter().enumerate() {
                println!("\n{}. {} (score {})", i + 1, hit.entry.word, hit.score);
                for definition in &hit.entry.definitions {
                    if !definition.grammar.is_empty() {
                        println!("   [{}]", definition.grammar);
                    }
                    if !definition.etymology.is_empty() {
                        println!("   {}", definition.etymology);
                    }
                    for sense in &definition.senses {
                        println!("   • {}", sense);
                    }
                }
            }
        }

        Commands::Translit { text } => {
            println!("{}", Romanizer::new().transliterate(&text));
        }

        Commands::Stats => {
            let engine = DictEngine::from_path(&cli.dict)?;
            let lexicon = engine.lexicon();

            let senses: usize = lexicon.entries().iter().map(|e| e.sense_count()).sum();
            let defined = lexicon
                .entries()
                .iter()
                .filter(|e| !e.definitions.is_empty())
                .count();

            println!("📊 Lexicon Statistics:");
            println!("   Entries: {}", lexicon.len());
            println!("   With definitions: {}", defined);
            println!("   Senses: {}", senses);
            if let Ok(first) = lexicon.key_at(0) {
                println!("   First key: {}", first);
            }
            if let Ok(last) = lexicon.key_at(lexicon.len().saturating_sub(1)) {
                println!("   Last key: {}", last);
            }
        }
    }

    Ok(())
}
