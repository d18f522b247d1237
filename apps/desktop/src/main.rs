use anyhow::Result;
use clap::Parser;
use client_core::NotesClient;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the notes API.
    #[arg(long, default_value = "http://127.0.0.1:5000/api")]
    api_base: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    /// Create the account before signing in.
    #[arg(long)]
    register: bool,
    /// Title of a note to add after signing in.
    #[arg(long, requires = "note_content")]
    note_title: Option<String>,
    /// Body of the note named by --note-title.
    #[arg(long, requires = "note_title")]
    note_content: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let client = NotesClient::new(args.api_base);

    if args.register {
        client.register(&args.username, &args.password).await?;
        println!("Registered user {}", args.username);
    }

    client.login(&args.username, &args.password).await?;
    println!("Logged in as {}", args.username);

    if let (Some(title), Some(content)) = (&args.note_title, &args.note_content) {
        let note = client.add_note(title, content).await?;
        println!("Added note #{} '{}'", note.id.0, note.title);
    }

    let notes = client.load_notes().await?;
    println!("{} note(s):", notes.len());
    for note in notes {
        println!("  [{}] {}: {}", note.id.0, note.title, note.content);
    }

    client.logout().await;
    Ok(())
}
