use std::env;
use std::path::{Path, PathBuf};
use std::process;

use songbook::storage::{default_app_dir, APP_NAME};
use songbook::{migrate_data, render_song, SettingsStore, SongStore, SongbookError};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: songbook render <song.json|song.yaml>
       songbook check <song.json|song.yaml>
       songbook [--root DIR] [--settings FILE] list
       songbook [--root DIR] [--settings FILE] show <id>
       songbook [--root DIR] [--settings FILE] delete <id>
       songbook [--root DIR] [--settings FILE] migrate <new-dir>";

struct Options {
    root: Option<PathBuf>,
    settings: Option<PathBuf>,
    command: Vec<String>,
}

fn main() {
    init_logging();

    let options = match parse_args(env::args().skip(1).collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("songbook=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_args(args: Vec<String>) -> Result<Options, String> {
    let mut root = None;
    let mut settings = None;
    let mut command = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--root" => root = Some(PathBuf::from(args.next().ok_or("--root needs a directory")?)),
            "--settings" => {
                settings = Some(PathBuf::from(args.next().ok_or("--settings needs a file")?))
            }
            _ => command.push(arg),
        }
    }

    if command.is_empty() {
        return Err("No command given".to_string());
    }
    Ok(Options {
        root,
        settings,
        command,
    })
}

fn run(options: &Options) -> Result<(), SongbookError> {
    let command: Vec<&str> = options.command.iter().map(String::as_str).collect();

    match command.as_slice() {
        ["render", file] => {
            print!("{}", songbook::render_song_file(Path::new(file))?);
        }
        ["check", file] => {
            let song = songbook::check_song_file(Path::new(file))?;
            println!("OK: {}", song.title);
        }
        ["list"] => {
            for meta in song_store(options).list()? {
                if meta.artist.is_empty() {
                    println!("{}  {}", meta.id, meta.title);
                } else {
                    println!("{}  {} - {}", meta.id, meta.title, meta.artist);
                }
            }
        }
        ["show", id] => match song_store(options).get(id)? {
            Some(song) => print!("{}", render_song(&song)),
            None => {
                eprintln!("No song with id '{}'", id);
                process::exit(1);
            }
        },
        ["delete", id] => {
            song_store(options).delete(id)?;
            eprintln!("Deleted {}", id);
        }
        ["migrate", new_dir] => {
            let settings_store = settings_store(options);
            let old = song_store(options).root().to_path_buf();
            let new = absolute(Path::new(new_dir));

            migrate_data(&old, &new)?;

            let mut settings = settings_store.load();
            settings.storage_path = Some(new.clone());
            settings_store.update(&settings)?;
            eprintln!("Moved songs from {} to {}", old.display(), new.display());
        }
        _ => {
            eprintln!("Unknown command: {}", options.command.join(" "));
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    }
    Ok(())
}

fn settings_store(options: &Options) -> SettingsStore {
    let app_dir = default_app_dir().unwrap_or_else(|| {
        let dir = env::temp_dir().join(APP_NAME);
        tracing::warn!(dir = %dir.display(), "no application data directory, using temp dir");
        dir
    });

    match &options.settings {
        Some(path) => SettingsStore::new(path, app_dir),
        None => SettingsStore::in_app_dir(app_dir),
    }
}

fn storage_root(options: &Options, settings_store: &SettingsStore) -> PathBuf {
    match &options.root {
        Some(root) => root.clone(),
        None => settings_store.storage_root(),
    }
}

fn song_store(options: &Options) -> SongStore {
    SongStore::new(storage_root(options, &settings_store(options)))
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
