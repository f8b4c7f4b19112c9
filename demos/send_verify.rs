use std::io;

use movider::{CodeLength, Credentials, MoviderClient, Recipient, SendVerification, VerifyOptions};

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

    let client = MoviderClient::new(Credentials::new(api_key, api_secret)?);
    let options = VerifyOptions {
        code_length: Some(CodeLength::Six),
        ..Default::default()
    };
    let request = SendVerification::new(Recipient::new(phone)?, options);

    let response = client.send_verification(request).await?;
    println!(
        "verification {} sent to {}",
        response.request_id.as_str(),
        response.number
    );

    Ok(())
}
