use std::io;

use movider::{CancelVerification, Credentials, MoviderClient, RequestId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("MOVIDER_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MOVIDER_API_KEY environment variable is required",
        )
    })?;
    let api_secret = std::env::var("MOVIDER_API_SECRET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MOVIDER_API_SECRET environment variable is required",
        )
    })?;
    let request_id = std::env::var("MOVIDER_REQUEST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MOVIDER_REQUEST_ID environment variable is required",
        )
    })?;

    let client = MoviderClient::new(Credentials::new(api_key, api_secret)?);
    let request = CancelVerification::new(RequestId::new(request_id)?);

    let response = client.cancel_verification(request).await?;
    println!("verification {} cancelled", response.request_id.as_str());

    Ok(())
}
