use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use client_core::{HttpContactStore, ViewController};
use shared::{domain::ContactId, protocol::Contact};

#[derive(Parser, Debug)]
#[command(about = "Contact manager CLI against a remote contact store")]
struct Args {
    /// Base URL of the contact store.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all contacts.
    List,
    /// Show one contact's full profile.
    Show { id: String },
    /// Create a new contact.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        work: String,
        #[arg(long, default_value = "")]
        nick: String,
    },
    /// Update fields of an existing contact; omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        work: Option<String>,
        #[arg(long)]
        nick: Option<String>,
    },
    /// Delete a contact by identifier.
    Delete { id: String },
}

fn print_row(contact: &Contact) {
    println!(
        "{:<12} {:<20} {:<24} {:<14} {:<14} {}",
        contact.id, contact.name, contact.email, contact.phone, contact.work, contact.nick
    );
}

fn print_profile(contact: &Contact) {
    println!("{}'s Profile", contact.name);
    println!("  Email: {}", contact.email);
    println!("  Phone: {}", contact.phone);
    println!("  Work:  {}", contact.work);
    println!("  Nick:  {}", contact.nick);
}

fn find_contact(controller: &ViewController, id: &str) -> Result<Contact> {
    controller
        .contacts()
        .iter()
        .find(|contact| contact.id.as_str() == id)
        .cloned()
        .ok_or_else(|| anyhow!("no contact with id {id}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let store = HttpContactStore::new(args.server_url);
    let mut controller = ViewController::new();

    match args.command {
        Command::List => {
            controller.reload(&store).await?;
            println!(
                "{:<12} {:<20} {:<24} {:<14} {:<14} {}",
                "ID", "NAME", "EMAIL", "PHONE", "WORK", "NICK"
            );
            for contact in controller.contacts() {
                print_row(contact);
            }
        }
        Command::Show { id } => {
            controller.reload(&store).await?;
            let contact = find_contact(&controller, &id)?;
            controller.show_detail(contact);
            let selected = controller
                .selection()
                .ok_or_else(|| anyhow!("no contact selected"))?;
            print_profile(selected);
        }
        Command::Add {
            name,
            email,
            phone,
            work,
            nick,
        } => {
            controller.start_add();
            let draft = controller.draft_mut();
            draft.name = name;
            draft.email = email;
            draft.phone = phone;
            draft.work = work;
            draft.nick = nick;
            controller.submit(&store).await?;
            println!("Contact created ({} total).", controller.contacts().len());
        }
        Command::Edit {
            id,
            name,
            email,
            phone,
            work,
            nick,
        } => {
            controller.reload(&store).await?;
            let contact = find_contact(&controller, &id)?;
            controller.start_edit(contact);
            let draft = controller.draft_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            if let Some(phone) = phone {
                draft.phone = phone;
            }
            if let Some(work) = work {
                draft.work = work;
            }
            if let Some(nick) = nick {
                draft.nick = nick;
            }
            controller.submit(&store).await?;
            println!("Contact {id} updated.");
        }
        Command::Delete { id } => {
            controller
                .delete_contact(&store, &ContactId(id.clone()))
                .await?;
            println!("Contact {id} deleted ({} left).", controller.contacts().len());
        }
    }

    Ok(())
}
