use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use ticket_wizard::{
    Advance, Field, JsonFileStore, SelectedFile, TicketStore, UploadSimulator, WizardConfig,
    WizardController,
};

#[derive(Parser, Debug)]
#[command(name = "ticket-wizard", version)]
struct Cli {
    /// Configuration JSON (event details, catalog, upload pacing, paths).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ticket list file; overrides the configured store path.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the booking wizard and download the ticket as a PNG.
    Book(BookArgs),
    /// List booked tickets.
    List,
    /// Re-export a booked ticket as a PNG.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct BookArgs {
    /// Ticket type: regular, vip or vvip.
    #[arg(long = "type")]
    ticket_type: String,

    /// Number of tickets (1-3).
    #[arg(long, default_value = "1")]
    units: String,

    /// Attendee full name.
    #[arg(long)]
    name: String,

    /// Attendee email.
    #[arg(long)]
    email: String,

    /// Special request.
    #[arg(long, default_value = "")]
    request: String,

    /// Profile image to upload.
    #[arg(long)]
    image: PathBuf,

    /// Output directory for ticket.png; overrides the configured export dir.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the PNG download.
    #[arg(long, default_value_t = false)]
    no_export: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Zero-based position in the ticket list.
    #[arg(long)]
    index: usize,

    /// Output directory for ticket.png; overrides the configured export dir.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = match &cli.config {
        Some(path) => WizardConfig::from_path(path)?,
        None => WizardConfig::default(),
    };
    if let Some(store) = &cli.store {
        cfg.store_path = store.clone();
    }

    match cli.cmd {
        Command::Book(args) => cmd_book(cfg, args),
        Command::List => cmd_list(&cfg),
        Command::Export(args) => cmd_export(cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_book(mut cfg: WizardConfig, args: BookArgs) -> anyhow::Result<()> {
    if let Some(out) = args.out {
        cfg.export_dir = out;
    }
    let mut wizard = WizardController::new(JsonFileStore::new(&cfg.store_path));

    // Step 1: ticket selection.
    announce(&wizard);
    wizard.set_value(Field::TicketType, &args.ticket_type);
    wizard.set_value(Field::TicketUnit, &args.units);
    step(&mut wizard)?;

    // Step 2: attendee details.
    announce(&wizard);
    let file = SelectedFile::from_path(&args.image)?;
    let mut upload = UploadSimulator::new(cfg.upload)?;
    let first = upload.select(file)?;
    eprintln!("uploading {}: {first}%", args.image.display());
    let interval = cfg.upload.tick_interval();
    while upload.is_uploading() {
        std::thread::sleep(interval);
        if let Some(p) = upload.tick() {
            eprintln!("uploading {}: {p}%", args.image.display());
        }
    }
    let image = upload
        .reference()
        .context("upload finished without an image reference")?;
    wizard.attach_image(image);
    wizard.set_value(Field::AttendeeName, &args.name);
    wizard.set_value(Field::AttendeeEmail, &args.email);
    wizard.set_value(Field::SpecialRequest, &args.request);
    step(&mut wizard)?;

    // Step 3: ticket.
    announce(&wizard);
    let ticket = wizard
        .ticket()
        .context("wizard reached the final step without a ticket")?;
    println!(
        "booked {} x {} for {} <{}>",
        ticket.values.ticket_unit.unwrap_or_default(),
        ticket.values.ticket_type.map(|t| t.label()).unwrap_or("-"),
        ticket.values.attendee_name,
        ticket.values.attendee_email,
    );

    if !args.no_export {
        match ticket_wizard::download_ticket(ticket, &cfg) {
            Some(path) => eprintln!("wrote {}", path.display()),
            None => eprintln!("ticket image could not be exported"),
        }
    }
    Ok(())
}

fn announce<S: TicketStore>(wizard: &WizardController<S>) {
    eprintln!(
        "{} ({})",
        wizard.current_step().display_name,
        wizard.step_label()
    );
}

fn step<S: TicketStore>(wizard: &mut WizardController<S>) -> anyhow::Result<()> {
    match wizard.advance()? {
        Advance::Moved { .. } | Advance::AtEnd => Ok(()),
        Advance::Blocked { errors } => {
            for (field, msg) in &errors {
                eprintln!("  {field}: {msg}");
            }
            anyhow::bail!(
                "cannot leave '{}': {} field(s) invalid",
                wizard.current_step().display_name,
                errors.len()
            );
        }
    }
}

fn cmd_list(cfg: &WizardConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&cfg.store_path);
    let records = store.records()?;
    if records.is_empty() {
        eprintln!("no tickets in {}", store.path().display());
        return Ok(());
    }
    for (i, r) in records.iter().enumerate() {
        println!(
            "{i}\t{}\t{}\t{}\t{}\t{}",
            r.created_at.to_rfc3339(),
            r.values.ticket_type.map(|t| t.as_str()).unwrap_or("-"),
            r.values.ticket_unit.unwrap_or_default(),
            r.values.attendee_name,
            r.values.attendee_email,
        );
    }
    Ok(())
}

fn cmd_export(mut cfg: WizardConfig, args: ExportArgs) -> anyhow::Result<()> {
    if let Some(out) = args.out {
        cfg.export_dir = out;
    }
    let store = JsonFileStore::new(&cfg.store_path);
    let records = store.records()?;
    let record = records.get(args.index).with_context(|| {
        format!(
            "no ticket at index {} ({} stored)",
            args.index,
            records.len()
        )
    })?;

    let offer = record.values.ticket_type.and_then(|t| cfg.offer(t));
    let svg = ticket_wizard::render_ticket_svg(record, &cfg.event, offer)?;
    let path =
        ticket_wizard::export_ticket_as_image(&svg, &cfg.export_dir, ticket_wizard::EXPORT_SCALE)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
