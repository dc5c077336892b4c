use std::io;

use smsbrana::SmsBranaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = std::env::var("SMSBRANA_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSBRANA_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("SMSBRANA_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSBRANA_PASSWORD environment variable is required",
        )
    })?;
    // Keep messages on the gateway unless explicitly asked to delete them.
    let delete = std::env::var("SMSBRANA_DELETE").is_ok_and(|value| value == "1");

    let client = SmsBranaClient::with_login(login, password)?;
    for message in client.inbox(delete).await? {
        println!(
            "{} {}: {}",
            message.received_at(),
            message.number(),
            message.text()
        );
    }

    Ok(())
}
