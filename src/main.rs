use anyhow::Context;
use clap::{Parser, Subcommand};
use people_services_wiki::{
    clipboard::{CopyAction, CopyFeedback, SystemClipboard, TracingNotifier},
    config::Config,
    content,
    error::{AppError, Result},
    models::{ContentType, Language, TemplateLength},
    search::{self, render_marked, SearchService},
    telemetry,
    views::{self, CopyTarget, GlossaryView, ViewState},
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ps-wiki")]
#[command(about = "People Services scripts wiki", version, long_about = None)]
struct Cli {
    /// Extra configuration file layered over the defaults
    #[arg(short, long, env = "PS_WIKI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every script, template, response and glossary term
    Search {
        query: String,

        /// Only the first few matches, as in the live suggestion list
        #[arg(short, long)]
        quick: bool,

        /// Print the results page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item in full
    Show {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// List indexed items, optionally of one type
    List {
        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,
    },

    /// Browse the A-Z glossary
    Glossary {
        #[arg(short, long)]
        filter: Option<String>,

        /// Only the section for this letter
        #[arg(short = 'L', long)]
        letter: Option<char>,
    },

    /// Security verification scripts
    Security {
        #[arg(short, long)]
        filter: Option<String>,

        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// The featured standard answer
    Featured {
        #[arg(short, long)]
        lang: Option<Language>,

        /// Long version instead of the short one
        #[arg(long)]
        long: bool,
    },

    /// Copy an item to the system clipboard
    Copy {
        /// Item id, or "featured"
        #[arg(value_name = "ID")]
        id: String,

        #[arg(short, long)]
        lang: Option<Language>,

        /// Long version of the featured template
        #[arg(long)]
        long: bool,
    },

    /// Mark the occurrences of a query inside a text
    Highlight { text: String, query: String },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    telemetry::init_tracing(&config.observability).context("Failed to initialize logging")?;

    tracing::debug!("ps-wiki v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.command, &config).await {
        tracing::debug!(error_code = e.error_code(), "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    let default_language = config.display.default_language;

    match command {
        Commands::Search { query, quick, json } => {
            let service = SearchService::global(config.search.clone());

            if quick {
                let results = service.quick_results(&query);
                if json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    for record in results {
                        println!(
                            "{:<16} {}  {}",
                            record.label(),
                            render_marked(&search::highlight(&record.title, &query), "*", "*"),
                            record.category
                        );
                    }
                }
                return Ok(());
            }

            let response = service.respond(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            println!("{}", response.summary());
            for (content_type, records) in response.groups.non_empty() {
                println!();
                println!("{} ({})", content_type.plural_label(), records.len());
                for record in records {
                    println!(
                        "  [{}] {}",
                        record.id,
                        render_marked(&search::highlight(&record.title, &query), "*", "*")
                    );
                    println!(
                        "      {}",
                        render_marked(&search::highlight(&record.description, &query), "*", "*")
                    );
                }
            }
        }

        Commands::Show { id, lang } => {
            show(&id, lang.unwrap_or(default_language))?;
        }

        Commands::List { content_type } => {
            let index = &*search::CONTENT_INDEX;
            let records: Vec<_> = match content_type {
                Some(t) => index.of_type(t).collect(),
                None => index.all().iter().collect(),
            };
            for record in records {
                println!("{:<6} {:<16} {}", record.id, record.label(), record.title);
            }
        }

        Commands::Glossary { filter, letter } => {
            let view = GlossaryView::new(filter.as_deref().unwrap_or(""));
            if view.is_empty() {
                println!("No terms found");
                return Ok(());
            }

            let groups = match letter {
                Some(l) => vec![view
                    .letter(l)
                    .ok_or_else(|| AppError::NotFound(format!("no terms under '{}'", l)))?],
                None => view.groups(),
            };

            let letters: String = view.available_letters().iter().collect();
            println!("Letters: {}", letters);
            for group in groups {
                println!();
                println!("{} ({})", group.letter, group.count_label());
                for term in group.terms {
                    println!("  {} [{}]", term.term, term.category);
                    println!("      {}", term.definition);
                    if !term.related_terms.is_empty() {
                        println!("      Related: {}", term.related_terms.join(", "));
                    }
                }
            }
        }

        Commands::Security { filter, lang } => {
            let state = ViewState::new(lang.unwrap_or(default_language))
                .with_filter(filter.unwrap_or_default());
            for script in views::filter_security_scripts(&state) {
                println!("[{}] {} ({})", script.id, script.title, script.category);
                println!("{}", script.copy_text(state.language));
                println!();
            }
        }

        Commands::Featured { lang, long } => {
            let template = content::featured_template();
            let length = if long {
                TemplateLength::Long
            } else {
                TemplateLength::Short
            };
            let languages = match lang {
                Some(l) => vec![l],
                None => Language::ALL.to_vec(),
            };
            for language in languages {
                println!("{} {}", language.flag(), template.heading(language));
                println!("{}", template.text(language, length));
                println!();
            }
            println!("When to use:");
            for line in &template.when_to_use {
                println!("  - {}", line);
            }
        }

        Commands::Copy { id, lang, long } => {
            let language = lang.unwrap_or(default_language);
            let target = CopyTarget::resolve(&id, language)
                .ok_or_else(|| AppError::NotFound(format!("nothing to copy for '{}'", id)))?;
            let mut state = ViewState::new(language);
            if long {
                state.toggle_length();
            }

            let action = CopyAction::new(
                Arc::new(SystemClipboard::new(
                    config.clipboard.command.clone(),
                    config.clipboard.args.clone(),
                )),
                Arc::new(TracingNotifier),
                CopyFeedback::new(config.clipboard.feedback_duration()),
            );
            action.copy_target(&target, &state).await?;
            println!("Copied! {}", target.copied_description());
        }

        Commands::Highlight { text, query } => {
            println!(
                "{}",
                render_marked(&search::highlight(&text, &query), "[", "]")
            );
        }

        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn show(id: &str, language: Language) -> Result<()> {
    if let Some(script) = content::phone_script(id) {
        println!("{} ({})", script.title, script.category);
        println!("{}", script.content.get(language));
    } else if let Some(template) = content::email_template(id) {
        println!("{} ({})", template.title, template.category);
        println!("{}", template.copy_text(language));
    } else if let Some(response) = content::ticket_response(id) {
        println!("{} ({})", response.title, response.category);
        println!("{}", response.content.get(language));
    } else if let Some(term) = content::glossary_term(id) {
        println!("{} ({})", term.term, term.category);
        println!("{}", term.definition);
    } else if let Some(script) = content::security_script(id) {
        println!("{} ({})", script.title, script.category);
        println!("{}", script.copy_text(language));
    } else {
        return Err(AppError::NotFound(format!("no item with id '{}'", id)));
    }
    Ok(())
}
