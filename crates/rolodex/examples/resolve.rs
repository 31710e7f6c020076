//! Resolves a few paths against the contacts route table.
//!
//! Run with: `cargo run -p rolodex --example resolve`

use rolodex::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RolodexConfig::development();
    rolodex::logging::init(&config.logging)?;

    let navigator = Navigator::new(&config.navigation)?;
    let store = ContactStore::new();

    let ada = store.create(ContactInput {
        name: "Ada Lovelace".to_string(),
        phone_number: Some("+44 20 7946 0958".to_string()),
        email: Some("ada@example.com".to_string()),
    })?;

    let detail_path = format!("/app/contacts/{}", ada.id);
    for path in [
        "/app",
        "/app/contacts",
        detail_path.as_str(),
        "/app/contacts/42/extra",
    ] {
        match navigator.resolve(path) {
            Ok(View::ContactList) => {
                println!("{path} -> contact list ({} contacts)", store.list().len());
            }
            Ok(View::ContactDetail { id }) => match id.parse::<ContactId>() {
                Ok(contact_id) => match store.get(contact_id) {
                    Ok(contact) => println!("{path} -> contact detail: {}", contact.name),
                    Err(err) => println!("{path} -> contact detail: {err}"),
                },
                Err(_) => println!("{path} -> contact detail: malformed id {id}"),
            },
            Err(err) => println!("{path} -> {err}"),
        }
    }

    Ok(())
}
