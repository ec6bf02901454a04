//! procnet-dump: CLI tool for inspecting /proc/net connection tables.

use clap::{Args, Parser, Subcommand};
use procnet::decode::parse_state;
use procnet::{Entries, Entry, TableParser};
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Kernel state code for a listening socket.
const STATE_LISTEN: u8 = 0x0A;

#[derive(Parser)]
#[command(name = "procnet-dump")]
#[command(version = "0.1.0")]
#[command(about = "Inspect /proc/net/tcp-style connection tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Table to read, or `-` for standard input
    #[arg(short, long, default_value = "/proc/net/tcp")]
    file: PathBuf,

    /// Print JSON instead of a text table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List entries, optionally filtered
    List {
        #[command(flatten)]
        source: Source,

        /// Only entries with this local port
        #[arg(long)]
        local_port: Option<u16>,

        /// Only entries with this remote port
        #[arg(long)]
        remote_port: Option<u16>,

        /// Only entries in this state (two hex digits, e.g. 0A)
        #[arg(long)]
        state: Option<String>,

        /// Only entries owned by this uid
        #[arg(long)]
        uid: Option<u32>,

        /// Shorthand for --state 0A
        #[arg(long, conflicts_with = "state")]
        listening: bool,
    },

    /// Print the first entry using a port
    Find {
        #[command(flatten)]
        source: Source,

        /// Local port to look up
        #[arg(long, conflicts_with = "remote_port", required_unless_present = "remote_port")]
        local_port: Option<u16>,

        /// Remote port to look up
        #[arg(long)]
        remote_port: Option<u16>,
    },
}

/// Filters accepted by `list`.
struct ListFilter {
    local_port: Option<u16>,
    remote_port: Option<u16>,
    state: Option<u8>,
    uid: Option<u32>,
}

impl ListFilter {
    fn is_empty(&self) -> bool {
        self.local_port.is_none()
            && self.remote_port.is_none()
            && self.state.is_none()
            && self.uid.is_none()
    }

    fn matches(&self, e: &Entry) -> bool {
        self.local_port.map_or(true, |p| e.local_port == p)
            && self.remote_port.map_or(true, |p| e.remote_port == p)
            && self.state.map_or(true, |s| e.state == s)
            && self.uid.map_or(true, |u| e.uid == u)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            source,
            local_port,
            remote_port,
            state,
            uid,
            listening,
        } => list(&source, local_port, remote_port, state, uid, listening),
        Commands::Find {
            source,
            local_port,
            remote_port,
        } => find(&source, local_port, remote_port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load(source: &Source) -> Result<Entries, Box<dyn std::error::Error>> {
    let entries = if source.file.as_os_str() == "-" {
        log::debug!("Reading table from standard input");
        TableParser::parse(io::stdin().lock())?
    } else {
        log::debug!("Reading table from {:?}", source.file);
        TableParser::parse(File::open(&source.file)?)?
    };

    log::info!("Parsed {} entries", entries.len());
    Ok(entries)
}

fn list(
    source: &Source,
    local_port: Option<u16>,
    remote_port: Option<u16>,
    state: Option<String>,
    uid: Option<u32>,
    listening: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = match state {
        Some(s) => Some(parse_state(&s)?),
        None if listening => Some(STATE_LISTEN),
        None => None,
    };
    let filter = ListFilter {
        local_port,
        remote_port,
        state,
        uid,
    };

    let entries = load(source)?;
    let entries = if filter.is_empty() {
        entries
    } else {
        let filtered = entries.filter(|e| filter.matches(e));
        log::info!("{} of {} entries match", filtered.len(), entries.len());
        filtered
    };

    if source.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_table(&entries);
    }

    Ok(())
}

fn find(
    source: &Source,
    local_port: Option<u16>,
    remote_port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = load(source)?;

    let index = match (local_port, remote_port) {
        (Some(port), _) => entries.find_by_local_port(port),
        (None, Some(port)) => entries.find_by_remote_port(port),
        (None, None) => return Err("one of --local-port or --remote-port is required".into()),
    };

    let Some(index) = index else {
        return Err("no matching entry".into());
    };

    let entry = &entries[index];
    if source.json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        println!("index {}", index);
        print_table(&Entries::from(vec![entry.clone()]));
    }

    Ok(())
}

fn print_table(entries: &Entries) {
    println!(
        "{:>4}  {:<46} {:<46} {:>2} {:>6} {:>10}",
        "sl", "local", "remote", "st", "uid", "inode"
    );
    for e in entries {
        println!(
            "{:>4}  {:<46} {:<46} {:02X} {:>6} {:>10}",
            e.number,
            e.local_socket_addr().to_string(),
            e.remote_socket_addr().to_string(),
            e.state,
            e.uid,
            e.inode
        );
    }
}
