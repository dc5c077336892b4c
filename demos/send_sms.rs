use std::io;

use smsbrana::{OutboundMessage, SmsBranaClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = required_env("SMSBRANA_LOGIN")?;
    let password = required_env("SMSBRANA_PASSWORD")?;
    let number = required_env("SMSBRANA_NUMBER")?;
    let message = std::env::var("SMSBRANA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsbrana demo.".to_owned());

    let client = SmsBranaClient::with_login(login, password)?;
    let response = client
        .send(&OutboundMessage::new(number, message))
        .await?;
    println!("sms_id: {}, sms_count: {}", response.id, response.count);

    Ok(())
}
