mod app;
mod catalog;
mod cli;
mod cli_ops;
mod clock;
mod completions;
mod config;
mod db;
mod domain;
mod project_id;
mod query;
mod seed;
mod store;
mod ui;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHOWCASE_LOG";

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("json serialization should work")
    );
}

fn run() -> Result<(), app::AppError> {
    use clap::Parser;
    use cli::Commands;

    let cli = cli::Cli::parse();
    if let Commands::Completions(args) = &cli.command {
        return completions::run_completions_command(args.shell.as_deref());
    }

    let config = config::ShowcaseConfig::load(&cli.config)?;
    let mut app = app::App::open(&cli.db, &config)?;

    match cli.command {
        Commands::Add(args) => {
            let input = domain::project::ProjectInput::from_raw(
                &args.title,
                &args.desc,
                args.date.as_deref(),
                &args.tags,
            );
            let project = app.create_project(input)?;
            println!("created {} {}", project.id, project.title);
        }
        Commands::Edit(args) => {
            let edit = app::ProjectEdit {
                title: args.title,
                description: args.desc,
                date: args.date,
                tags: args.tags,
            };
            match app.update_project(&args.id, edit)? {
                Some(project) => println!("updated {} {}", project.id, project.title),
                None => println!("no project {}", args.id),
            }
        }
        Commands::Rm(args) => {
            if app.delete_project(&args.id)? {
                println!("deleted {}", args.id);
            } else {
                println!("no project {}", args.id);
            }
        }
        Commands::Ls(args) => {
            let view = list_query(&args, &config);
            let state = app.state(view);
            if args.json {
                print_json(&state.visible());
            } else {
                ui::print_project_list(&state);
            }
        }
        Commands::Show(args) => {
            let project = app
                .show(&args.id)
                .ok_or_else(|| app::AppError::NotFound(args.id.clone()))?;
            if args.json {
                print_json(project);
            } else {
                ui::print_project_show(project);
            }
        }
        Commands::Tags(args) => {
            let tags = app.tags();
            if args.json {
                print_json(&tags);
            } else {
                ui::print_tags(&tags);
            }
        }
        Commands::Reset => {
            app.reset()?;
            println!("catalog reset to {} default project(s)", app.projects().len());
        }
        Commands::Completions(_) => {
            unreachable!("completions are handled before app initialization")
        }
    }

    Ok(())
}

fn list_query(args: &cli::ListArgs, config: &config::ShowcaseConfig) -> query::ProjectQuery {
    let sort = args
        .sort
        .as_deref()
        .map_or(config.default_sort, domain::sort::SortKey::parse);
    query::ProjectQuery::new(args.query.as_deref(), args.tag.as_deref(), sort)
}
