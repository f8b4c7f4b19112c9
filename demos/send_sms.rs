use std::io;

use movider::{Credentials, MessageText, MoviderClient, Recipient, SendSms, SmsOptions};

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
    let api_key = required_env("MOVIDER_API_KEY")?;
    let api_secret = required_env("MOVIDER_API_SECRET")?;
    let phone = required_env("MOVIDER_PHONE")?;
    let message = std::env::var("MOVIDER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the movider example.".to_owned());

    let client = MoviderClient::new(Credentials::new(api_key, api_secret)?);
    let request = SendSms::new(
        vec![Recipient::new(phone)?],
        MessageText::new(message)?,
        SmsOptions::default(),
    )?;

    let response = client.send_sms(request).await?;
    for sent in &response.phone_number_list {
        println!("sent to {} (message id {})", sent.number, sent.message_id);
    }
    for rejected in &response.bad_phone_number_list {
        println!("cannot send to {}: {}", rejected.number, rejected.msg);
    }
    println!("remaining balance: {:.8}", response.remaining_balance);

    Ok(())
}
