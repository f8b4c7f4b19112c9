use std::io;

use movider::{AcknowledgeVerification, Credentials, MoviderClient, RequestId, VerificationCode};

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
    let request_id = required_env("MOVIDER_REQUEST_ID")?;
    let code = required_env("MOVIDER_CODE")?;

    let client = MoviderClient::new(Credentials::new(api_key, api_secret)?);
    let request =
        AcknowledgeVerification::new(RequestId::new(request_id)?, VerificationCode::new(code)?);

    let response = client.acknowledge_verification(request).await?;
    println!(
        "verification {} acknowledged, price {}",
        response.request_id.as_str(),
        response.price
    );

    Ok(())
}
