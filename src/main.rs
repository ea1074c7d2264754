use clap::Parser;
use mentor::catalog::{spawn_refresh, FileStore, HttpStore, ModuleStore};
use mentor::core::config;
use mentor::core::navigator::Navigator;
use mentor::core::styling::Styler;
use mentor::StoreKind;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "mentor", about = "Learning-content catalog navigator")]
struct Args {
    /// Document store backend serving the catalog
    #[arg(short, long, value_enum)]
    store: Option<StoreKind>,

    /// Module id to open after the catalog loads
    #[arg(short, long)]
    module: Option<String>,

    /// Walk the module's test track instead of its lesson track
    #[arg(short, long)]
    test: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mentor.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mentor.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let cli_backend = args.store.as_ref().map(|s| match s {
        StoreKind::Http => "http",
        StoreKind::File => "file",
    });
    let resolved = config::resolve(&file_config, cli_backend);

    log::info!("Mentor starting up with {} store", resolved.backend);

    let store: Arc<dyn ModuleStore> = match resolved.backend.as_str() {
        "file" => Arc::new(FileStore::new(resolved.catalog_path.clone())),
        _ => Arc::new(HttpStore::new(
            Some(resolved.base_url.clone()),
            resolved.collection.clone(),
        )),
    };

    let mut navigator = Navigator::new(Styler::load(&resolved.prelude_path));

    // The fetch runs off-task; its completion lands here over the
    // channel, so all state mutation stays on this task.
    let (tx, mut rx) = mpsc::channel(1);
    spawn_refresh(store, tx);

    if let Some(modules) = rx.recv().await {
        navigator.replace_modules(modules);
    }

    match &args.module {
        Some(id) if args.test => walk_test(&mut navigator, id),
        Some(id) => walk_lessons(&mut navigator, id),
        None => list_catalog(&navigator),
    }
}

fn list_catalog(navigator: &Navigator) {
    if navigator.modules().is_empty() {
        println!("No modules available.");
        return;
    }
    for module in navigator.modules() {
        println!(
            "{}  [{}]  {} lessons / {} questions",
            module.id,
            module.category,
            module.lesson_count(),
            module.question_count()
        );
    }
}

fn walk_lessons(navigator: &mut Navigator, module_id: &str) {
    if let Err(e) = navigator
        .select_module(module_id)
        .and_then(|_| navigator.begin_lesson(0))
    {
        eprintln!("{e}");
        return;
    }

    loop {
        match navigator.current_lesson() {
            Some(lesson) => println!("=== {} ({})\n{}\n", lesson.title, lesson.duration, navigator.rendered_text()),
            None => break,
        }
        if navigator.advance_lesson().is_err() {
            break;
        }
    }
}

fn walk_test(navigator: &mut Navigator, module_id: &str) {
    if let Err(e) = navigator.begin_test(module_id) {
        eprintln!("{e}");
        return;
    }

    loop {
        match navigator.current_question() {
            Some(question) => {
                println!("{}", navigator.rendered_text());
                for (i, answer) in question.answers.iter().enumerate() {
                    println!("  {}. {answer}", i + 1);
                }
                println!();
            }
            None => break,
        }
        if navigator.advance_question().is_err() {
            break;
        }
    }
}
