use std::io;

use smsbrana::{GatewayTime, OutboundMessage, SmsBranaClient};

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
    let numbers = std::env::var("SMSBRANA_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSBRANA_NUMBERS environment variable is required (comma separated)",
        )
    })?;
    let when = std::env::var("SMSBRANA_WHEN")
        .ok()
        .map(|value| GatewayTime::parse(&value))
        .transpose()?;

    let mut client = SmsBranaClient::with_login(login, password)?;
    for number in numbers.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let mut message = OutboundMessage::new(number, "Hello from the smsbrana queue demo.");
        if let Some(when) = when {
            message = message.send_at(when);
        }
        client.add_sms(message);
    }

    match client.send_all_sms().await? {
        Some(answer) => println!("{answer}"),
        None => println!("nothing to send"),
    }

    Ok(())
}
